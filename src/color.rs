use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use sambat_chart::data::CalendarSystem;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues, starting
/// from steel blue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 207.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.44, 0.49);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Calendar → bar colour
// ---------------------------------------------------------------------------

/// Bar colour for each calendar, so a toggle is visible at a glance.
#[derive(Debug, Clone)]
pub struct CalendarColors {
    mapping: BTreeMap<CalendarSystem, Color32>,
    default_color: Color32,
}

impl Default for CalendarColors {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarColors {
    pub fn new() -> Self {
        let palette = generate_palette(CalendarSystem::ALL.len());
        let mapping = CalendarSystem::ALL.into_iter().zip(palette).collect();
        CalendarColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, calendar: CalendarSystem) -> Color32 {
        self.mapping
            .get(&calendar)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_sizes() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn first_colour_is_steel_blue() {
        let c = generate_palette(1)[0];
        // steelblue is (70, 130, 180); allow for HSL rounding.
        assert!((i32::from(c.r()) - 70).abs() <= 3, "{c:?}");
        assert!((i32::from(c.g()) - 130).abs() <= 3, "{c:?}");
        assert!((i32::from(c.b()) - 180).abs() <= 3, "{c:?}");
    }

    #[test]
    fn calendars_get_distinct_colours() {
        let colors = CalendarColors::new();
        assert_ne!(
            colors.color_for(CalendarSystem::Nepali),
            colors.color_for(CalendarSystem::Gregorian)
        );
        assert_eq!(colors.color_for(CalendarSystem::Nepali), generate_palette(2)[0]);
    }
}
