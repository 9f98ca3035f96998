//! Print-session and order-item status enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a print session
///
/// A session is created UNSUBMITTED by the school portal, moves through
/// confirmation and queueing by the admin dashboard, and is driven to
/// COMPLETED/DELIVERED by the operator tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Unsubmitted,
    Pending,
    Confirmed,
    Queued,
    InProgress,
    Completed,
    Delivered,
}

impl SessionStatus {
    pub const ALL: [SessionStatus; 7] = [
        SessionStatus::Unsubmitted,
        SessionStatus::Pending,
        SessionStatus::Confirmed,
        SessionStatus::Queued,
        SessionStatus::InProgress,
        SessionStatus::Completed,
        SessionStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Unsubmitted => "UNSUBMITTED",
            SessionStatus::Pending => "PENDING",
            SessionStatus::Confirmed => "CONFIRMED",
            SessionStatus::Queued => "QUEUED",
            SessionStatus::InProgress => "IN_PROGRESS",
            SessionStatus::Completed => "COMPLETED",
            SessionStatus::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNSUBMITTED" => Ok(SessionStatus::Unsubmitted),
            "PENDING" => Ok(SessionStatus::Pending),
            "CONFIRMED" => Ok(SessionStatus::Confirmed),
            "QUEUED" => Ok(SessionStatus::Queued),
            "IN_PROGRESS" => Ok(SessionStatus::InProgress),
            "COMPLETED" => Ok(SessionStatus::Completed),
            "DELIVERED" => Ok(SessionStatus::Delivered),
            _ => Err(format!(
                "invalid status '{s}', expected one of UNSUBMITTED, PENDING, CONFIRMED, \
                 QUEUED, IN_PROGRESS, COMPLETED, DELIVERED"
            )),
        }
    }
}

/// Derived completion status of an order item (one student's garments)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Pending,
    InProgress,
    Completed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "PENDING",
            ItemStatus::InProgress => "IN_PROGRESS",
            ItemStatus::Completed => "COMPLETED",
        }
    }

    /// Derive the item status from printed vs. required totals.
    ///
    /// COMPLETED once every required garment has been printed, IN_PROGRESS
    /// as soon as any progress exists, PENDING otherwise. A row with no
    /// required garments stays PENDING until something is printed.
    pub fn derive(printed_total: i64, required_total: i64) -> Self {
        if required_total > 0 && printed_total >= required_total {
            ItemStatus::Completed
        } else if printed_total > 0 {
            ItemStatus::InProgress
        } else {
            ItemStatus::Pending
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_status_accepts_all_seven() {
        for status in SessionStatus::ALL {
            assert_eq!(status.as_str().parse::<SessionStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_session_status_rejects_bogus() {
        let err = "BOGUS".parse::<SessionStatus>().unwrap_err();
        // The rejection message enumerates every allowed value
        for status in SessionStatus::ALL {
            assert!(err.contains(status.as_str()), "missing {status} in: {err}");
        }
    }

    #[test]
    fn test_session_status_is_case_sensitive() {
        assert!("queued".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn test_item_status_derivation() {
        // 10 dark required, all printed
        assert_eq!(ItemStatus::derive(10, 10), ItemStatus::Completed);
        // half printed
        assert_eq!(ItemStatus::derive(5, 10), ItemStatus::InProgress);
        // nothing printed
        assert_eq!(ItemStatus::derive(0, 10), ItemStatus::Pending);
        // over-printed still completed
        assert_eq!(ItemStatus::derive(12, 10), ItemStatus::Completed);
        // fresh row with no requirements yet
        assert_eq!(ItemStatus::derive(0, 0), ItemStatus::Pending);
    }

    #[test]
    fn test_status_serde_wire_format() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::from_str::<ItemStatus>("\"COMPLETED\"").unwrap(),
            ItemStatus::Completed
        );
    }
}
