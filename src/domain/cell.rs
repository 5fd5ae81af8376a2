/// State of a single grid cell between two generations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// B3/S23 rule table:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors is born
    /// 3. Everything else is dead next generation
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.evolve(n), expected);
        }
    }

    #[test]
    fn test_from_bool() {
        assert!(Cell::from(true).is_alive());
        assert!(!Cell::from(false).is_alive());
    }
}
