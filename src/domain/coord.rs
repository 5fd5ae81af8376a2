//! Cell coordinates and the key codec used by the live-cell set.
//!
//! A [`CellKey`] packs both halves of a coordinate into one `u64`, so the
//! set never allocates per cell and distinct coordinates can never collide.
//! The text form `"x,y"` is what config files and logs use.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A position on the unbounded grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the Moore neighborhood, the cell itself excluded.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by an offset, `None` past the edge of the addressable plane
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The 8 cells at Chebyshev distance 1
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Canonical, collision-free key of a [`Coord`].
///
/// `x` lives in the high 32 bits and `y` in the low 32 bits, both as raw
/// two's complement, so every coordinate maps to exactly one key and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(u64);

impl CellKey {
    #[inline]
    pub const fn encode(coord: Coord) -> Self {
        Self(((coord.x as u32 as u64) << 32) | coord.y as u32 as u64)
    }

    #[inline]
    pub const fn decode(self) -> Coord {
        Coord::new((self.0 >> 32) as u32 as i32, self.0 as u32 as i32)
    }
}

impl From<Coord> for CellKey {
    fn from(coord: Coord) -> Self {
        Self::encode(coord)
    }
}

impl From<CellKey> for Coord {
    fn from(key: CellKey) -> Self {
        key.decode()
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Coord { x, y } = self.decode();
        write!(f, "{x},{y}")
    }
}

impl FromStr for CellKey {
    type Err = Error;

    /// Accepts only the exact text that `Display` writes: no padding,
    /// no `+` sign, no leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedKey(s.to_owned());

        let (x, y) = s.split_once(',').ok_or_else(malformed)?;
        let x: i32 = x.parse().map_err(|_| malformed())?;
        let y: i32 = y.parse().map_err(|_| malformed())?;
        let key = Self::encode(Coord::new(x, y));

        if key.to_string() == s {
            Ok(key)
        } else {
            Err(malformed())
        }
    }
}
