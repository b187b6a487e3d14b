// sonar_core/src/legend.rs

//! Display colours shared by both panels. The host maps them onto its own
//! colour type; the core only decides *which* colour an element gets.

use crate::movement::MovementLabel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayColor {
    Green,
    Orange,
    Red,
    Blue,
    Gray,
    LightGray,
    Black,
}

impl DisplayColor {
    /// Colour of the radar outline and pose marker for a movement class.
    /// Labels outside the legend fall back to gray.
    pub fn for_movement(label: &MovementLabel) -> Self {
        match label {
            MovementLabel::MoveForward => Self::Green,
            MovementLabel::SlightRightTurn => Self::Orange,
            MovementLabel::SharpRightTurn => Self::Red,
            MovementLabel::SlightLeftTurn => Self::Blue,
            MovementLabel::Other(_) => Self::Gray,
        }
    }

    /// sRGB components in `0.0..=1.0`, matching the usual web colour names.
    pub fn srgb(self) -> [f32; 3] {
        match self {
            Self::Green => [0.0, 0.502, 0.0],
            Self::Orange => [1.0, 0.647, 0.0],
            Self::Red => [1.0, 0.0, 0.0],
            Self::Blue => [0.0, 0.0, 1.0],
            Self::Gray => [0.502, 0.502, 0.502],
            Self::LightGray => [0.827, 0.827, 0.827],
            Self::Black => [0.0, 0.0, 0.0],
        }
    }
}
