use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalCategory {
    AvoidShort,
    Neutral,
    PotentialLong,
    GoLong,
    Cautious,
}

impl SignalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalCategory::AvoidShort => "Avoid / Short (High Volatility)",
            SignalCategory::Neutral => "Neutral / Observe",
            SignalCategory::PotentialLong => "Potential Long (Recovery in progress)",
            SignalCategory::GoLong => "Go Long (Entry Signal)",
            SignalCategory::Cautious => "Cautious / Monitor",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SignalCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A named intraday window, anchored at its IST start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub label: &'static str,
    pub hour: u32,
    pub minute: u32,
}

impl TimeSlot {
    const fn new(label: &'static str, hour: u32, minute: u32) -> Self {
        Self {
            label,
            hour,
            minute,
        }
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }

    /// IST wall-clock start of this slot on `date`.
    pub fn starts_at(&self, date: NaiveDate) -> NaiveDateTime {
        let time = self.start_time();
        debug_assert!(time.is_some(), "slot {} has an invalid start time", self.label);
        date.and_time(time.unwrap_or(NaiveTime::MIN))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SlotEntry {
    pub slot: TimeSlot,
    pub signal: SignalCategory,
}

const fn entry(label: &'static str, hour: u32, minute: u32, signal: SignalCategory) -> SlotEntry {
    SlotEntry {
        slot: TimeSlot::new(label, hour, minute),
        signal,
    }
}

/// Trading-day slots in display order, each with its fixed signal.
pub const SLOT_TABLE: [SlotEntry; 10] = [
    entry("9:30-9:50", 9, 30, SignalCategory::AvoidShort),
    entry("9:50-10:00", 9, 50, SignalCategory::Neutral),
    entry("10:00-10:30", 10, 0, SignalCategory::PotentialLong),
    entry("10:55-11:20", 10, 55, SignalCategory::AvoidShort),
    entry("11:20-11:45", 11, 20, SignalCategory::GoLong),
    entry("11:45-12:30", 11, 45, SignalCategory::Neutral),
    entry("12:30-13:00", 12, 30, SignalCategory::AvoidShort),
    entry("13:00-13:25", 13, 0, SignalCategory::Neutral),
    entry("13:25-14:00", 13, 25, SignalCategory::GoLong),
    entry("Post 14:00", 14, 0, SignalCategory::Cautious),
];

pub fn slots() -> impl Iterator<Item = &'static TimeSlot> {
    SLOT_TABLE.iter().map(|e| &e.slot)
}

/// Signal for a slot label. Unknown labels fall back to `Cautious`.
pub fn classify(label: &str) -> SignalCategory {
    SLOT_TABLE
        .iter()
        .find(|e| e.slot.label == label)
        .map(|e| e.signal)
        .unwrap_or(SignalCategory::Cautious)
}
