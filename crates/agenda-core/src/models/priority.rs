//! Task priority levels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task priorities.
///
/// Tasks stored without a priority are treated as [`Priority::Medium`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Sort rank among open tasks; lower ranks are listed first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Get priority with a marker for list display.
    ///
    /// ```rust
    /// use agenda_core::models::Priority;
    ///
    /// assert_eq!(Priority::High.with_icon(), "▲ high");
    /// assert_eq!(Priority::Medium.with_icon(), "■ medium");
    /// assert_eq!(Priority::Low.with_icon(), "▼ low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::High => "▲ high",
            Priority::Medium => "■ medium",
            Priority::Low => "▼ low",
        }
    }
}
