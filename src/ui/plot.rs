use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use sambat_chart::data::YearRecord;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Year bar chart (central panel)
// ---------------------------------------------------------------------------

/// Fraction of a year slot each bar covers.
const BAR_WIDTH: f64 = 0.9;
const Y_HEADROOM: f64 = 1.1;

/// One bar per record, in the order given.
pub fn year_bars(records: &[YearRecord]) -> Vec<Bar> {
    records
        .iter()
        .map(|r| {
            Bar::new(f64::from(r.year), r.value)
                .width(BAR_WIDTH)
                .name(format!("{}: {:.2}", r.year, r.value))
        })
        .collect()
}

/// Render the active series as a bar chart. Each frame redraws it from state.
pub fn year_chart(ui: &mut Ui, state: &AppState) {
    let records = state.active_records();
    if records.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No yearly data to show");
        });
        return;
    }

    let chart = BarChart::new(year_bars(&records))
        .name(state.calendar.to_string())
        .color(state.colors.color_for(state.calendar));

    // Headroom above the tallest bar, with the axis anchored at zero.
    let top = state.active_series().max_value().unwrap_or(0.0) * Y_HEADROOM;

    Plot::new("year_chart")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Value")
        .include_y(0.0)
        .include_y(top)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
