//! Print the built-in dataset in both calendars without opening a window.
//!
//! Usage: `convert_table [--json]`

use anyhow::{Context, Result};
use serde::Serialize;

use sambat_chart::data::{self, loader, CalendarSystem, YearSeries};

#[derive(Serialize)]
struct Output<'a> {
    nepali: &'a [data::YearRecord],
    gregorian: &'a [data::YearRecord],
}

fn print_table(series: &YearSeries) {
    let label = series.calendar.to_string();
    println!("{:<10} {:>6} {:>12}", "calendar", "year", "value");
    for r in series.sorted() {
        println!("{:<10} {:>6} {:>12.4}", label, r.year, r.value);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let as_json = std::env::args().skip(1).any(|a| a == "--json");

    let nepali = loader::builtin_nepali().context("loading built-in dataset")?;
    let gregorian = YearSeries::new(
        CalendarSystem::Gregorian,
        data::convert(&nepali.records).context("converting to Gregorian years")?,
    );
    log::info!(
        "{} BS years → {} Gregorian years",
        nepali.len(),
        gregorian.len()
    );

    if as_json {
        let (nepali, gregorian) = (nepali.sorted(), gregorian.sorted());
        let out = Output {
            nepali: &nepali,
            gregorian: &gregorian,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_table(&nepali);
        println!();
        print_table(&gregorian);
    }

    Ok(())
}
