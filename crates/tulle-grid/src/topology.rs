//! Neighbor topology of the cloth lattice.
//!
//! Every point links to up to 4 axis-aligned neighbors. Border points
//! have fewer valid links; lookups return `None` instead of wrapping,
//! and callers treat an absent neighbor as "no constraint to apply".

/// One of the 4 axis-aligned spring directions out of a point.
///
/// The discriminant doubles as the rest-length slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    /// Toward (x + 1, y).
    Right = 0,
    /// Toward (x − 1, y).
    Left = 1,
    /// Toward (x, y + 1).
    Down = 2,
    /// Toward (x, y − 1).
    Up = 3,
}

impl Link {
    /// All links, in rest-length slot order.
    pub const ALL: [Link; 4] = [Link::Right, Link::Left, Link::Down, Link::Up];

    /// Coordinate offset of this link as (dx, dy).
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Link::Right => (1, 0),
            Link::Left => (-1, 0),
            Link::Down => (0, 1),
            Link::Up => (0, -1),
        }
    }

    /// Rest-length slot of this link.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The link pointing back from the neighbor to this point.
    #[inline]
    pub fn reverse(self) -> Link {
        match self {
            Link::Right => Link::Left,
            Link::Left => Link::Right,
            Link::Down => Link::Up,
            Link::Up => Link::Down,
        }
    }
}

/// Returns the neighbor of (x, y) along `link` in an n×n lattice, or
/// `None` when the link leaves the lattice.
#[inline]
pub fn neighbor(n: usize, x: usize, y: usize, link: Link) -> Option<(usize, usize)> {
    let (dx, dy) = link.offset();
    let nx = x as i64 + i64::from(dx);
    let ny = y as i64 + i64::from(dy);
    if nx < 0 || ny < 0 || nx >= n as i64 || ny >= n as i64 {
        None
    } else {
        Some((nx as usize, ny as usize))
    }
}
