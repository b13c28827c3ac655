//! Access to the map surface's current viewport center.
//!
//! A Target line that appears through propagation (before the user has placed
//! one) is centred on whatever the Target map is currently showing.  The
//! engine asks for that through this trait instead of reaching into a map
//! instance, so tests can drive it with a fixed point and the host app with a
//! closure over its map widget.

use std::cell::Cell;
use std::rc::Rc;

use dm_core::Coordinate;

/// Supplies the map's current center.
///
/// `None` means the map surface is not ready yet (no tiles, no size, no
/// projection).  The engine treats that as a failed precondition, never as a
/// reason to invent a position.
pub trait ViewportCenter {
    fn viewport_center(&self) -> Option<Coordinate>;
}

impl<F> ViewportCenter for F
where
    F: Fn() -> Option<Coordinate>,
{
    #[inline]
    fn viewport_center(&self) -> Option<Coordinate> {
        self()
    }
}

/// A center that never moves.  `FixedCenter(None)` is a surface that never
/// becomes ready.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct FixedCenter(pub Option<Coordinate>);

impl FixedCenter {
    #[inline]
    pub fn at(center: Coordinate) -> Self {
        Self(Some(center))
    }
}

impl ViewportCenter for FixedCenter {
    #[inline]
    fn viewport_center(&self) -> Option<Coordinate> {
        self.0
    }
}

/// A center shared with the code that pans the map.
///
/// Clones share the same cell: the map surface keeps one handle and calls
/// [`set`][Self::set] on every pan, the engine keeps the other.
#[derive(Clone, Debug, Default)]
pub struct SharedCenter(Rc<Cell<Option<Coordinate>>>);

impl SharedCenter {
    pub fn new(center: Option<Coordinate>) -> Self {
        Self(Rc::new(Cell::new(center)))
    }

    #[inline]
    pub fn set(&self, center: Option<Coordinate>) {
        self.0.set(center);
    }

    #[inline]
    pub fn get(&self) -> Option<Coordinate> {
        self.0.get()
    }
}

impl ViewportCenter for SharedCenter {
    #[inline]
    fn viewport_center(&self) -> Option<Coordinate> {
        self.0.get()
    }
}
