//! Priority levels and their rotation rule.
//!
//! # Design
//! The rotation sequence is the declaration order `low → normal → high`,
//! wrapping back to `low`. This matches the stored enumeration order of
//! the `todos.priority` column, which is not a severity ordering.
//! `next` is a pure function with period 3.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePriorityError;

/// Priority of a todo. New todos start at `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    /// The next priority in rotation order.
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Normal,
            Priority::Normal => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// The lowercase wire name, as stored in the database column.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            other => Err(ParsePriorityError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_follows_declared_order() {
        assert_eq!(Priority::Low.next(), Priority::Normal);
        assert_eq!(Priority::Normal.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
    }

    #[test]
    fn rotation_has_period_three() {
        for priority in [Priority::Low, Priority::Normal, Priority::High] {
            assert_eq!(priority.next().next().next(), priority);
        }
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("normal".parse::<Priority>().unwrap(), Priority::Normal);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.value, "urgent");
        assert!(err.to_string().contains("urgent"));
    }

    #[test]
    fn display_matches_wire_name() {
        for priority in [Priority::Low, Priority::Normal, Priority::High] {
            assert_eq!(priority.to_string(), priority.as_str());
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_value(Priority::High).unwrap(),
            serde_json::json!("high")
        );
        let back: Priority = serde_json::from_str(r#""low""#).unwrap();
        assert_eq!(back, Priority::Low);
    }
}
