use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned event identifier
pub type EventId = i64;

/// Store-assigned participant identifier
pub type ParticipantId = i64;

/// Longest name accepted for events and participants
pub const MAX_NAME_LEN: usize = 100;

/// Name of an event or a participant
///
/// # Invariants
/// - Not empty
/// - At most [`MAX_NAME_LEN`] characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a new DisplayName value object
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::roster::value_objects::DisplayName;
    ///
    /// let name = DisplayName::new("Tennis 101").expect("valid name");
    /// assert_eq!(name.as_str(), "Tennis 101");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(format!("Name cannot exceed {} characters", MAX_NAME_LEN));
        }
        Ok(DisplayName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a participant currently sits within an event
///
/// # Status Transitions
/// ```text
/// Pool <-> Roster   (team cleared on every move)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    /// Registered, waiting to be placed on the roster
    Pool,
    /// Eligible for team assignment
    Roster,
}

impl ParticipantStatus {
    /// Returns the status a move action leads to
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::roster::value_objects::ParticipantStatus;
    ///
    /// assert_eq!(ParticipantStatus::Pool.toggled(), ParticipantStatus::Roster);
    /// assert_eq!(ParticipantStatus::Roster.toggled(), ParticipantStatus::Pool);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            ParticipantStatus::Pool => ParticipantStatus::Roster,
            ParticipantStatus::Roster => ParticipantStatus::Pool,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Pool => "pool",
            ParticipantStatus::Roster => "roster",
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pool" => Ok(ParticipantStatus::Pool),
            "roster" => Ok(ParticipantStatus::Roster),
            other => Err(format!("Unknown participant status: {}", other)),
        }
    }
}

/// Per-event team number, dense from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u32);

impl TeamId {
    /// Creates a TeamId; zero is rejected
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(TeamId(value))
    }

    /// Team id for the pair at `index` (0-based) in shuffled order
    ///
    /// `None` once the index no longer fits the team numbering range.
    pub(crate) fn for_pair(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .map(TeamId)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        assert!(DisplayName::new("Alice").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(DisplayName::new("").is_err());
    }

    #[test]
    fn name_at_limit_accepted() {
        let name = "a".repeat(MAX_NAME_LEN);
        assert!(DisplayName::new(name).is_ok());
    }

    #[test]
    fn name_over_limit_rejected() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        let err = DisplayName::new(name).unwrap_err();
        assert!(err.contains("100"));
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(DisplayName::new(name).is_ok());
    }

    #[test]
    fn status_toggles_both_ways() {
        assert_eq!(ParticipantStatus::Pool.toggled(), ParticipantStatus::Roster);
        assert_eq!(ParticipantStatus::Roster.toggled(), ParticipantStatus::Pool);
    }

    #[test]
    fn status_parses_stored_text() {
        assert_eq!("pool".parse::<ParticipantStatus>(), Ok(ParticipantStatus::Pool));
        assert_eq!("roster".parse::<ParticipantStatus>(), Ok(ParticipantStatus::Roster));
        assert!("bench".parse::<ParticipantStatus>().is_err());
    }

    #[test]
    fn status_display() {
        assert_eq!(ParticipantStatus::Pool.to_string(), "pool");
        assert_eq!(ParticipantStatus::Roster.to_string(), "roster");
    }

    #[test]
    fn team_id_zero_rejected() {
        assert!(TeamId::new(0).is_none());
        assert_eq!(TeamId::new(3).map(TeamId::get), Some(3));
    }

    #[test]
    fn team_id_for_pair_starts_at_one() {
        assert_eq!(TeamId::for_pair(0), TeamId::new(1));
        assert_eq!(TeamId::for_pair(4), TeamId::new(5));
    }

    #[test]
    fn team_id_for_pair_out_of_range() {
        assert_eq!(TeamId::for_pair(u32::MAX as usize - 1), TeamId::new(u32::MAX));
        assert_eq!(TeamId::for_pair(u32::MAX as usize), None);
    }
}
