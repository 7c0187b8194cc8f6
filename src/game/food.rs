use super::grid::{Coord, GridSpec};
use super::snake::Snake;
use rand::Rng;

/// The one food cell on the board.  Relocated in place when eaten; a new
/// value is only created on a fresh game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) pos: Coord,
}

impl Food {
    pub(super) fn spawn<R: Rng>(grid: GridSpec, snake: &Snake, rng: &mut R) -> Food {
        Food {
            pos: sample(grid, snake, rng),
        }
    }

    pub(super) fn relocate<R: Rng>(&mut self, grid: GridSpec, snake: &Snake, rng: &mut R) {
        self.pos = sample(grid, snake, rng);
    }

    pub(super) fn position(&self) -> Coord {
        self.pos
    }
}

/// Rejection-sample a cell the snake does not occupy.  Terminates as long as
/// the snake has not filled the grid.
fn sample<R: Rng>(grid: GridSpec, snake: &Snake, rng: &mut R) -> Coord {
    loop {
        let coord = grid.random_coord(rng);
        if !snake.occupies(coord) {
            return coord;
        }
    }
}
