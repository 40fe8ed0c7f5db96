//! The eight symmetries of the square (the dihedral group of order 8) acting
//! on grid states, and the canonical representative of a symmetry class.

use {
    crate::topology::{GridSize, State},
    ndarray::{Array2, ArrayView2, Axis},
};

/// Rotations are clockwise. Reflections are named by their axis: `FlipRow`
/// swaps top and bottom, `FlipCol` swaps left and right.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Transform {
    Id,
    Rotate90,
    Rotate180,
    Rotate270,
    FlipRow,
    FlipCol,
    FlipDiag,
    FlipAntidiag,
}

impl Transform {
    pub fn all() -> &'static [Self; 8] {
        &[
            Self::Id,
            Self::Rotate90,
            Self::Rotate180,
            Self::Rotate270,
            Self::FlipRow,
            Self::FlipCol,
            Self::FlipDiag,
            Self::FlipAntidiag,
        ]
    }

    // (transpose, [invert rows, invert columns]) applied to a [y, x] view
    fn view_ops(self) -> (bool, [bool; 2]) {
        match self {
            Self::Id => (false, [false, false]),
            Self::Rotate90 => (true, [false, true]),
            Self::Rotate180 => (false, [true, true]),
            Self::Rotate270 => (true, [true, false]),
            Self::FlipRow => (false, [true, false]),
            Self::FlipCol => (false, [false, true]),
            Self::FlipDiag => (true, [false, false]),
            Self::FlipAntidiag => (true, [true, true]),
        }
    }

    /// View of `view` (indexed `[y, x]`) with this transform applied.
    pub fn transform_view<'a, T>(&self, view: ArrayView2<'a, T>) -> ArrayView2<'a, T> {
        let (transpose, invert) = self.view_ops();
        let mut view = if transpose { view.reversed_axes() } else { view };
        for (i, s) in invert.into_iter().enumerate() {
            if s {
                view.invert_axis(Axis(i));
            }
        }
        view
    }
}

/// Per-transform cell permutations for one grid size.
#[derive(Clone, Debug)]
pub struct Canonicalizer {
    // destination cell of each source cell, per transform
    forward: [[u8; 64]; 8],
}

impl Canonicalizer {
    pub fn new(size: GridSize) -> Self {
        let n = size.num();
        let ixs = Array2::from_shape_fn((n, n), |(y, x)| size.cell_index(x, y));

        let mut forward = [[0; 64]; 8];
        for (table, t) in forward.iter_mut().zip(Transform::all()) {
            for ((y, x), &src) in t.transform_view(ixs.view()).indexed_iter() {
                table[src] = size.cell_index(x, y) as u8;
            }
        }

        Self { forward }
    }

    #[inline]
    pub fn apply(&self, transform: Transform, state: State) -> State {
        let table = &self.forward[transform as usize];
        state
            .filled_ixs()
            .fold(State::EMPTY, |out, ix| out.filled(table[ix] as usize))
    }

    pub fn images(&self, state: State) -> [State; 8] {
        let all = *Transform::all();
        all.map(|t| self.apply(t, state))
    }

    /// Numerically smallest of the eight images.
    pub fn canonical(&self, state: State) -> State {
        Transform::all()
            .iter()
            .map(|&t| self.apply(t, state))
            .min()
            .unwrap_or(state)
    }

    /// Same as `canonical(state) == state`, stopping at the first smaller image.
    pub fn is_canonical(&self, state: State) -> bool {
        Transform::all()[1..]
            .iter()
            .all(|&t| self.apply(t, state) >= state)
    }
}
