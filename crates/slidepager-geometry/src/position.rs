/// One of the three slots a pager lays out along its paging axis.
///
/// Doubles as a cache key for neighbor pages and as a multiplier of the
/// viewport extent when placing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Position {
    /// Previous page (left, or top when vertical).
    Left = 0,
    /// The page the user is looking at.
    #[default]
    Center = 1,
    /// Next page (right, or bottom when vertical).
    Right = 2,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Left, Position::Center, Position::Right];

    /// Multiplier applied to the viewport extent to get this slot's leading edge.
    #[inline]
    pub fn multiplier(self) -> f32 {
        self as u8 as f32
    }

    #[inline]
    pub fn is_neighbor(self) -> bool {
        self != Position::Center
    }
}
