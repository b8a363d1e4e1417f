//! Travel direction enum shared across all segment-related crates.
//!
//! The two directions are named after the carriageway sides of the segment
//! ("left" / "right") rather than compass bearings, so the same control code
//! drives an east–west road, a north–south road, or a test fixture without
//! renaming anything.

/// One of the two opposing directions of travel on the segment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Traffic entering from the left-hand approach.
    Left,
    /// Traffic entering from the right-hand approach.
    Right,
}

impl Direction {
    /// Both directions, in the order used for per-direction arrays.
    pub const BOTH: [Direction; 2] = [Direction::Left, Direction::Right];

    /// The opposing direction.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Index into per-direction arrays (`Left` = 0, `Right` = 1).
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }

    /// Human-readable label, useful for CSV column values and lane names.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
