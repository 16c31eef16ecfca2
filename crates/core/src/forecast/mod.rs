pub mod error;
pub mod render;
pub mod slots;

use crate::domain::report::{Report, SlotSignal};
use crate::time::ist::parse_forecast_date;
use error::ForecastError;
use slots::{classify, slots};

/// Builds the intraday forecast for a `YYYY-MM-DD` date string.
///
/// The date only selects the day the slot timestamps are anchored to and is
/// echoed into the header; every slot's signal comes from the fixed table.
pub fn generate_report(date_input: &str) -> Result<Report, ForecastError> {
    let date = parse_forecast_date(date_input)?;

    let rows = slots()
        .map(|slot| SlotSignal::new(slot, classify(slot.label), date))
        .collect::<Vec<_>>();

    tracing::debug!(%date, slots = rows.len(), "generated intraday forecast");

    Ok(Report {
        date,
        date_input: date_input.to_string(),
        slots: rows,
    })
}
