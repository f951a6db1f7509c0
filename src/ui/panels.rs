use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use sambat_chart::data::CalendarSystem;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year table
// ---------------------------------------------------------------------------

/// Render the year/value table for the active calendar.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading(format!("{} years", state.calendar));
    ui.separator();

    let records = state.active_records();
    if records.is_empty() {
        ui.label("No data.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for r in &records {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(r.year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", r.value));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar with the calendar toggle.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Calendar");
        for calendar in CalendarSystem::ALL {
            if ui
                .selectable_label(
                    state.calendar == calendar,
                    RichText::new(calendar.to_string()).color(state.colors.color_for(calendar)),
                )
                .clicked()
            {
                state.set_calendar(calendar);
            }
        }

        ui.weak("(T to toggle)");
        ui.separator();

        let series = state.active_series();
        if let Some((first, last)) = series.year_span() {
            ui.label(format!("{} years, {first}–{last}", series.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
