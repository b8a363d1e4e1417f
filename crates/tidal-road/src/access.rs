//! Per-lane open/closed bookkeeping.
//!
//! Engines and test fakes both need to remember which lanes are currently
//! open to which direction; `AccessState` is that shared bookkeeping,
//! indexed `[direction][lane]`.

use tidal_core::{Direction, LaneIndex};

use crate::layout::LaneLayout;

/// Open/closed flags for every lane slot of both carriageways.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessState {
    layout: LaneLayout,
    open: [Vec<bool>; 2],
}

impl AccessState {
    /// All lanes open.
    pub fn all_open(layout: LaneLayout) -> Self {
        let lanes = layout.lanes_per_direction() as usize;
        Self { layout, open: [vec![true; lanes], vec![true; lanes]] }
    }

    /// All lanes closed.
    pub fn all_closed(layout: LaneLayout) -> Self {
        let lanes = layout.lanes_per_direction() as usize;
        Self { layout, open: [vec![false; lanes], vec![false; lanes]] }
    }

    #[inline]
    pub fn layout(&self) -> LaneLayout {
        self.layout
    }

    /// Set one lane's flag.  Lanes outside the layout are ignored.
    pub fn set(&mut self, direction: Direction, lane: LaneIndex, allowed: bool) {
        if self.layout.contains(lane) {
            self.open[direction.index()][lane.index()] = allowed;
        }
    }

    /// `true` if the lane is open to the direction.  Lanes outside the
    /// layout read as closed.
    pub fn is_open(&self, direction: Direction, lane: LaneIndex) -> bool {
        self.layout.contains(lane) && self.open[direction.index()][lane.index()]
    }

    /// Number of lanes currently open to `direction`.
    pub fn open_count(&self, direction: Direction) -> u8 {
        self.open[direction.index()].iter().filter(|&&o| o).count() as u8
    }

    /// Lane indices currently open to `direction`, outer to inner.
    pub fn open_lanes(&self, direction: Direction) -> impl Iterator<Item = LaneIndex> + '_ {
        self.layout
            .lanes()
            .filter(move |&lane| self.is_open(direction, lane))
    }
}
