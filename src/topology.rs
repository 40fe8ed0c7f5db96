use {
    crate::error::Error,
    std::{fmt, str::FromStr},
};

/// Largest supported side length; an 8×8 grid is exactly one `u64`.
pub const MAX_GRID_SIZE: usize = 8;

const MAX_CELLS: usize = MAX_GRID_SIZE * MAX_GRID_SIZE;

/// Side length `n` of the square grid, always within `1..=MAX_GRID_SIZE`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct GridSize(usize);

impl GridSize {
    pub fn new(n: usize) -> Result<Self, Error> {
        if (1..=MAX_GRID_SIZE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(Error::InvalidGridSize(n))
        }
    }

    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_GRID_SIZE).map(Self)
    }

    pub fn num(&self) -> usize {
        self.0
    }

    pub fn cells(&self) -> usize {
        self.0 * self.0
    }

    /// `2^(n²)`. Needs `u128` since it is `2^64` for n = 8.
    pub fn state_count(&self) -> u128 {
        1u128 << self.cells()
    }

    /// Numerically largest state, every cell filled.
    pub fn full(&self) -> State {
        State(u64::MAX >> (MAX_CELLS - self.cells()))
    }

    #[inline]
    pub fn cell_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.0 && y < self.0);
        y * self.0 + x
    }
}

impl FromStr for GridSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse()
            .map_err(|_| Error::UnparsableGridSize(s.trim().to_owned()))?;
        Self::new(n)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A configuration of filled cells; bit `y * n + x` is cell `(x, y)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct State(u64);

impl State {
    pub const EMPTY: Self = Self(0);

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Every state of the grid in increasing numeric order.
    pub fn all(size: GridSize) -> impl Iterator<Item = Self> {
        (0..=size.full().0).map(Self)
    }

    #[inline]
    pub fn is_filled(&self, ix: usize) -> bool {
        (self.0 >> ix) & 1 != 0
    }

    #[inline]
    pub fn filled(self, ix: usize) -> Self {
        Self(self.0 | 1 << ix)
    }

    #[inline]
    pub fn cleared(self, ix: usize) -> Self {
        Self(self.0 & !(1 << ix))
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Indices of the filled cells, lowest first.
    pub fn filled_ixs(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let ix = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(ix)
            }
        })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orthogonal adjacency of an n×n grid, built once per run and shared read-only.
#[derive(Clone, Debug)]
pub struct Topology {
    size: GridSize,
    neighbors: [State; MAX_CELLS],
}

impl Topology {
    pub fn new(size: GridSize) -> Self {
        let n = size.num();
        let mut neighbors = [State::EMPTY; MAX_CELLS];

        for y in 0..n {
            for x in 0..n {
                let mask = &mut neighbors[size.cell_index(x, y)];
                if y > 0 {
                    *mask = mask.filled(size.cell_index(x, y - 1));
                }
                if y + 1 < n {
                    *mask = mask.filled(size.cell_index(x, y + 1));
                }
                if x > 0 {
                    *mask = mask.filled(size.cell_index(x - 1, y));
                }
                if x + 1 < n {
                    *mask = mask.filled(size.cell_index(x + 1, y));
                }
            }
        }

        Self { size, neighbors }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn neighbors(&self, ix: usize) -> State {
        self.neighbors[ix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_bounds() {
        assert!(matches!(GridSize::new(0), Err(Error::InvalidGridSize(0))));
        assert!(matches!(GridSize::new(9), Err(Error::InvalidGridSize(9))));
        assert_eq!(GridSize::all().count(), MAX_GRID_SIZE);

        assert_eq!("3".parse::<GridSize>().unwrap().num(), 3);
        assert_eq!(" 8\n".parse::<GridSize>().unwrap().num(), 8);
        assert!(matches!(
            "three".parse::<GridSize>(),
            Err(Error::UnparsableGridSize(s)) if s == "three"
        ));
        assert!(matches!(
            "-1".parse::<GridSize>(),
            Err(Error::UnparsableGridSize(_))
        ));
        assert!(matches!(
            "12".parse::<GridSize>(),
            Err(Error::InvalidGridSize(12))
        ));
    }

    #[test]
    fn test_state_count() {
        let counts: Vec<u128> = GridSize::all().map(|s| s.state_count()).collect();
        assert_eq!(counts[0], 2);
        assert_eq!(counts[2], 512);
        assert_eq!(counts[7], u64::MAX as u128 + 1);

        for size in GridSize::all() {
            assert_eq!(size.full().bits() as u128, size.state_count() - 1);
            assert_eq!(size.full().count() as usize, size.cells());
        }

        assert_eq!(State::all(GridSize::new(2).unwrap()).count(), 16);
    }

    #[test]
    fn test_filled_ixs() {
        let state = State::EMPTY.filled(0).filled(5).filled(63);
        assert_eq!(state.filled_ixs().collect::<Vec<_>>(), vec![0, 5, 63]);
        assert_eq!(state.cleared(5).filled_ixs().collect::<Vec<_>>(), vec![0, 63]);
        assert_eq!(state.intersect(State::EMPTY.filled(63)).count(), 1);
        assert_eq!(state.intersect(State::EMPTY.filled(1)), State::EMPTY);
    }

    #[test]
    fn test_neighbor_masks() {
        let single = Topology::new(GridSize::new(1).unwrap());
        assert_eq!(single.neighbors(0), State::EMPTY);

        for size in GridSize::all() {
            let topology = Topology::new(size);
            let n = size.num();

            for i in 0..size.cells() {
                for j in 0..size.cells() {
                    assert_eq!(
                        topology.neighbors(i).is_filled(j),
                        topology.neighbors(j).is_filled(i),
                        "asymmetric adjacency between {i} and {j} for n = {n}"
                    );
                }
                assert!(!topology.neighbors(i).is_filled(i));
                let mask = topology.neighbors(i);
                assert_eq!(size.full().intersect(mask), mask);
            }

            if n > 1 {
                let corner = topology.neighbors(size.cell_index(0, 0)).count();
                let edge_or_corner = topology.neighbors(size.cell_index(n / 2, 0)).count();
                assert_eq!(corner, 2);
                assert!(edge_or_corner == 2 || edge_or_corner == 3);
            }

            if n > 2 {
                assert_eq!(topology.neighbors(size.cell_index(1, 1)).count(), 4);
            }
        }
    }
}
