// Time slot module
// Quarter-hour slots of a single day and their display labels

use std::fmt;

use chrono::{NaiveTime, Timelike};

use super::assignment::QUARTER_MINUTES;

pub const HOURS_PER_DAY: u8 = 24;
pub const QUARTERS_PER_HOUR: u8 = 4;
pub const SLOTS_PER_DAY: usize = HOURS_PER_DAY as usize * QUARTERS_PER_HOUR as usize;

/// One quarter-hour row of the grid.
///
/// Slots order by time of day. The label format is the key used by the
/// schedule store: the hour is never zero padded, a full hour renders its
/// minutes as `00`, and the other quarters render as `15`, `30` and `45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot {
    hour: u8,
    quarter: u8,
}

impl TimeSlot {
    pub fn new(hour: u8, quarter: u8) -> Option<Self> {
        (hour < HOURS_PER_DAY && quarter < QUARTERS_PER_HOUR).then_some(Self { hour, quarter })
    }

    /// Slot at a row index in `0..SLOTS_PER_DAY`
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SLOTS_PER_DAY {
            return None;
        }
        let per_hour = QUARTERS_PER_HOUR as usize;
        Self::new((index / per_hour) as u8, (index % per_hour) as u8)
    }

    /// Slot containing the given wall-clock time
    pub fn containing(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            quarter: (time.minute() / QUARTER_MINUTES) as u8,
        }
    }

    /// Every slot of the day, midnight first
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOTS_PER_DAY).filter_map(Self::from_index)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    pub fn minute(&self) -> u32 {
        self.quarter as u32 * QUARTER_MINUTES
    }

    pub fn index(&self) -> usize {
        self.hour as usize * QUARTERS_PER_HOUR as usize + self.quarter as usize
    }

    pub fn is_hour_start(&self) -> bool {
        self.quarter == 0
    }

    pub fn label(&self) -> String {
        if self.quarter == 0 {
            format!("{}:00", self.hour)
        } else {
            format!("{}:{}", self.hour, self.minute())
        }
    }

    /// Parse a label produced by [`TimeSlot::label`]
    pub fn parse(label: &str) -> Option<Self> {
        let (hour, minute) = label.split_once(':')?;
        let hour = hour.parse::<u8>().ok()?;
        let quarter = match minute {
            "00" => 0,
            "15" => 1,
            "30" => 2,
            "45" => 3,
            _ => return None,
        };
        Self::new(hour, quarter)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
