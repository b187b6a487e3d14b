// sonar_core/src/movement.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The discrete movement command recorded with each sensor frame.
///
/// Unknown labels are kept verbatim in [`MovementLabel::Other`] so they can be
/// displayed, but every consumer treats them as "no known movement".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovementLabel {
    MoveForward,
    SlightRightTurn,
    SharpRightTurn,
    SlightLeftTurn,
    Other(String),
}

impl MovementLabel {
    /// Parses a label as spelled in the log. Surrounding whitespace is ignored;
    /// matching is otherwise exact.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "Move-Forward" => Self::MoveForward,
            "Slight-Right-Turn" => Self::SlightRightTurn,
            "Sharp-Right-Turn" => Self::SharpRightTurn,
            "Slight-Left-Turn" => Self::SlightLeftTurn,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::MoveForward => "Move-Forward",
            Self::SlightRightTurn => "Slight-Right-Turn",
            Self::SharpRightTurn => "Sharp-Right-Turn",
            Self::SlightLeftTurn => "Slight-Left-Turn",
            Self::Other(text) => text,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for MovementLabel {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for MovementLabel {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<MovementLabel> for String {
    fn from(label: MovementLabel) -> Self {
        match label {
            MovementLabel::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MovementLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_round_trip_through_text() {
        for label in [
            MovementLabel::MoveForward,
            MovementLabel::SlightRightTurn,
            MovementLabel::SharpRightTurn,
            MovementLabel::SlightLeftTurn,
        ] {
            assert!(label.is_known());
            assert_eq!(MovementLabel::parse(label.as_str()), label);
        }
    }

    #[test]
    fn whitespace_is_trimmed_but_case_matters() {
        assert_eq!(
            MovementLabel::parse("  Move-Forward\t"),
            MovementLabel::MoveForward
        );
        assert_eq!(
            MovementLabel::parse("move-forward"),
            MovementLabel::Other("move-forward".into())
        );
    }

    #[test]
    fn unknown_labels_keep_their_text() {
        let label = MovementLabel::from("Reverse");
        assert!(!label.is_known());
        assert_eq!(label.to_string(), "Reverse");
        assert_eq!(String::from(label), "Reverse");
    }
}
