use slidepager_geometry::Position;

/// Misuse of the pager API.
///
/// Runtime anomalies (a missing neighbor, an empty viewport, a promotion with
/// nothing to promote) are absorbed by the state machine and never show up
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum PagerError {
    /// The offset tolerance must be finite and strictly positive.
    InvalidTolerance(f32),
    /// The re-entrant scroll budget must allow at least one pass.
    InvalidScrollPasses,
    /// The paging direction cannot change while a page is hosted.
    DirectionLocked,
    /// Only Left and Right hold cached neighbors.
    NotANeighbor(Position),
}

impl std::fmt::Display for PagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PagerError::InvalidTolerance(value) => {
                write!(f, "offset tolerance {value} must be finite and positive")
            }
            PagerError::InvalidScrollPasses => {
                write!(f, "max_scroll_passes must be at least 1")
            }
            PagerError::DirectionLocked => {
                write!(f, "direction cannot change while a page is hosted")
            }
            PagerError::NotANeighbor(position) => {
                write!(f, "{position:?} is not a neighbor position")
            }
        }
    }
}

impl std::error::Error for PagerError {}
