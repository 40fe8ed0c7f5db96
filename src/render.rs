use {
    crate::topology::{GridSize, State},
    ndarray::Array2,
    std::fmt,
};

pub const FILLED: char = 'W';
pub const EMPTY: char = '.';

/// Cell grid indexed `[y, x]`.
pub fn to_array(size: GridSize, state: State) -> Array2<bool> {
    Array2::from_shape_fn((size.num(), size.num()), |(y, x)| {
        state.is_filled(size.cell_index(x, y))
    })
}

/// Bordered picture of a state, one text row per grid row.
pub struct Grid {
    array: Array2<bool>,
}

impl Grid {
    pub fn new(size: GridSize, state: State) -> Self {
        Self {
            array: to_array(size, state),
        }
    }

    fn write_border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{}+", "-".repeat(self.array.ncols() * 2 + 1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_border(f)?;
        for row in self.array.rows() {
            write!(f, "|")?;
            for &filled in row {
                write!(f, " {}", if filled { FILLED } else { EMPTY })?;
            }
            writeln!(f, " |")?;
        }
        self.write_border(f)
    }
}
