//! Week information shown above the task list.

use jiff::{Zoned, civil::Date};

use crate::{
    error::Result,
    week::{WeekKey, monday_of},
};

/// The current ISO week and the Monday it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekInfo {
    pub key: WeekKey,
    pub monday: Date,
}

impl WeekInfo {
    /// Week information for the local date of `now`.
    pub fn at(now: &Zoned) -> Result<Self> {
        let today = now.date();
        Ok(Self {
            key: WeekKey::of(today),
            monday: monday_of(today)?,
        })
    }

    /// Week information for the current local date.
    pub fn current() -> Result<Self> {
        Self::at(&Zoned::now())
    }
}
