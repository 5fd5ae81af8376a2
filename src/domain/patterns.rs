use super::{CellKey, Coord};
use crate::error::Result;

/// A seed: a set of live cells relative to an anchor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub cells: Vec<Coord>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: Vec<Coord>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Empty seed
    pub fn empty() -> Self {
        Self::new("Empty", Vec::new())
    }

    /// Glider heading towards +x/+y (period 4)
    pub fn glider() -> Self {
        Self::new(
            "Glider",
            vec![
                Coord::new(1, 0),
                Coord::new(2, 1),
                Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2),
            ],
        )
    }

    /// Build a pattern from `"x,y"` keys, failing on the first malformed one
    pub fn from_keys<S: AsRef<str>>(name: impl Into<String>, keys: &[S]) -> Result<Self> {
        let cells = keys
            .iter()
            .map(|k| k.as_ref().parse::<CellKey>().map(CellKey::decode))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, cells))
    }

    /// Keys of every cell, in pattern order
    pub fn to_keys(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|&c| CellKey::encode(c).to_string())
            .collect()
    }

    /// Same shape moved by `(dx, dy)`; cells pushed off the plane are dropped
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            name: self.name.clone(),
            cells: self.cells.iter().filter_map(|c| c.offset(dx, dy)).collect(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::glider()
    }
}
