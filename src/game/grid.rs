use rand::Rng;
use ratatui::layout::Size;
use std::num::NonZeroU16;
use thiserror::Error;

/// True modulo: the result is in `[0, bound)` for any integer input,
/// including negatives, unlike the `%` remainder.  `bound` must be positive;
/// callers guarantee this via [`GridSpec`]'s constructor.
pub(crate) fn normalize(value: i32, bound: i32) -> i32 {
    ((value % bound) + bound) % bound
}

/// A position on the grid, held normalized into `[0, rows) × [0, cols)`.
/// All writes go through [`GridSpec::wrap()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Coord {
    pub(crate) row: i32,
    pub(crate) col: i32,
}

impl Coord {
    pub(crate) fn new(row: i32, col: i32) -> Coord {
        Coord { row, col }
    }
}

/// The dimensions of the toroidal grid.  Immutable once created; both
/// dimensions are positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridSpec {
    rows: i32,
    cols: i32,
}

impl GridSpec {
    pub(crate) fn new(rows: i32, cols: i32) -> Result<GridSpec, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError { rows, cols });
        }
        Ok(GridSpec { rows, cols })
    }

    /// Divide the viewport into cells of `cell_size` units: rows round up,
    /// columns round down.  Fails fast if either dimension comes out empty,
    /// rather than proceeding into undefined modulo behavior.
    pub(crate) fn from_viewport(
        viewport: Size,
        cell_size: NonZeroU16,
    ) -> Result<GridSpec, GridError> {
        let cell = cell_size.get();
        let rows = i32::from(viewport.height.div_ceil(cell));
        let cols = i32::from(viewport.width / cell);
        GridSpec::new(rows, cols)
    }

    pub(crate) fn rows(self) -> i32 {
        self.rows
    }

    pub(crate) fn cols(self) -> i32 {
        self.cols
    }

    /// Fold a raw (row, col) pair back onto the torus
    pub(crate) fn wrap(self, row: i32, col: i32) -> Coord {
        Coord {
            row: normalize(row, self.rows),
            col: normalize(col, self.cols),
        }
    }

    /// Sample a random cell as `round(bound * U)` with `U ∈ [0, 1)`.  The
    /// rounding can land on `bound` itself, one past the nominal range;
    /// `wrap()` folds that back to 0, which skews the first row and column
    /// very slightly.  Do not "fix" the distribution.
    pub(crate) fn random_coord<R: Rng>(self, rng: &mut R) -> Coord {
        #[allow(clippy::cast_possible_truncation)]
        let row = (f64::from(self.rows) * rng.random::<f64>()).round() as i32;
        #[allow(clippy::cast_possible_truncation)]
        let col = (f64::from(self.cols) * rng.random::<f64>()).round() as i32;
        self.wrap(row, col)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("viewport too small for the configured cell size (got a {rows}x{cols} grid)")]
pub(crate) struct GridError {
    rows: i32,
    cols: i32,
}
