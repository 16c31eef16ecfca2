use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::forecast::slots::{SignalCategory, TimeSlot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub date: NaiveDate,
    /// The date exactly as entered; echoed into the header.
    pub date_input: String,
    pub slots: Vec<SlotSignal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSignal {
    pub label: &'static str,
    pub signal: SignalCategory,
    /// IST wall-clock start.
    pub starts_at: NaiveDateTime,
}

impl SlotSignal {
    pub fn new(slot: &TimeSlot, signal: SignalCategory, date: NaiveDate) -> Self {
        Self {
            label: slot.label,
            signal,
            starts_at: slot.starts_at(date),
        }
    }
}
