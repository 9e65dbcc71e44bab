//! Error types.
//!
//! The error taxonomy is narrow: arcs that no ellipse of the given radii can
//! draw, rotation bookkeeping that left its normalized range, and fonts that
//! fail to parse.

use thiserror::Error;

use crate::vector::Vector2f;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The arc degenerates to a line, but the endpoints are farther apart
    /// than the ellipse diameter allows.
    #[error("unsolvable arc: no ellipse with radii ({rx}, {ry}) connects {start} and {end}")]
    UnsolvableArc {
        start: Vector2f,
        end: Vector2f,
        rx: f32,
        ry: f32,
    },

    /// A quadrant or octant index outside its range. Indicates a defect in
    /// angle normalization.
    #[error("invalid rotation state: {0}")]
    InvalidRotationState(String),

    /// Font data could not be parsed.
    #[error("font error: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsolvable_arc_message() {
        let e = Error::UnsolvableArc {
            start: Vector2f::new(0.0, 0.0),
            end: Vector2f::new(10.0, 0.0),
            rx: 0.0,
            ry: 2.0,
        };
        let msg = e.to_string();
        assert!(msg.starts_with("unsolvable arc"));
        assert!(msg.contains("(10, 0)"));
    }

    #[test]
    fn test_font_message() {
        let e = Error::Font("bad magic".into());
        assert_eq!(e.to_string(), "font error: bad magic");
    }
}
