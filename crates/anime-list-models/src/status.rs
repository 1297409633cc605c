use serde::{Deserialize, Serialize};
use std::fmt;

/// List status codes as stored by the list endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WatchStatus {
    /// Currently watching (code 1)
    Watching,
    /// Finished watching (code 2)
    Completed,
    /// On hold (code 3)
    OnHold,
    /// Stopped watching (code 4)
    Dropped,
    /// Want to watch (code 6; code 5 is unused upstream)
    PlanToWatch,
}

impl WatchStatus {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(WatchStatus::Watching),
            2 => Some(WatchStatus::Completed),
            3 => Some(WatchStatus::OnHold),
            4 => Some(WatchStatus::Dropped),
            6 => Some(WatchStatus::PlanToWatch),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Completed",
            WatchStatus::OnHold => "On Hold",
            WatchStatus::Dropped => "Dropped",
            WatchStatus::PlanToWatch => "Plan to Watch",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Airing status codes as stored by the list endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AiringStatus {
    /// Currently airing (code 1)
    Airing,
    /// Finished airing (code 2)
    Finished,
    /// Not yet aired (code 3)
    NotYetAired,
}

impl AiringStatus {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AiringStatus::Airing),
            2 => Some(AiringStatus::Finished),
            3 => Some(AiringStatus::NotYetAired),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AiringStatus::Airing => "Airing",
            AiringStatus::Finished => "Finished",
            AiringStatus::NotYetAired => "Not Yet Aired",
        }
    }
}

impl fmt::Display for AiringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_status_codes_round_trip() {
        assert_eq!(WatchStatus::from_code(1), Some(WatchStatus::Watching));
        assert_eq!(WatchStatus::from_code(2), Some(WatchStatus::Completed));
        assert_eq!(WatchStatus::from_code(6), Some(WatchStatus::PlanToWatch));
        assert_eq!(WatchStatus::from_code(5), None);
        assert_eq!(WatchStatus::from_code(0), None);
    }

    #[test]
    fn airing_status_labels() {
        assert_eq!(AiringStatus::from_code(1).unwrap().to_string(), "Airing");
        assert_eq!(AiringStatus::from_code(3).unwrap().label(), "Not Yet Aired");
        assert_eq!(AiringStatus::from_code(4), None);
    }
}
