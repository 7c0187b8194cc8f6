use super::direction::Direction;
use super::grid::{Coord, GridSpec};
use rand::Rng;
use std::collections::VecDeque;

/// Snake state.
///
/// The head is the front of the deque; the invariant is at least one
/// segment, and the loss condition (not an invariant here) is two segments
/// on the same cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// Every cell the snake occupies, head first
    pub(super) cells: VecDeque<Coord>,

    /// The heading the snake will move along on the next step
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a single-segment snake at a random cell, heading right
    pub(super) fn spawn<R: Rng>(grid: GridSpec, rng: &mut R) -> Snake {
        Snake {
            cells: VecDeque::from([grid.random_coord(rng)]),
            direction: Direction::Right,
        }
    }

    pub(super) fn head(&self) -> Coord {
        *self.cells.front().expect("snake should never be empty")
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn cells(&self) -> &VecDeque<Coord> {
        &self.cells
    }

    /// Change the snake's heading.  A reversal straight into the neck is
    /// dropped; with a single segment there is no neck, so any heading is
    /// accepted.
    pub(super) fn set_direction(&mut self, direction: Direction) {
        if self.cells.len() > 1 && direction.is_opposite(self.direction) {
            return;
        }
        self.direction = direction;
    }

    /// Move the snake forwards one cell along its heading, wrapping at the
    /// grid edges.  Every body segment takes the position its predecessor
    /// held before this call; pushing the new head and dropping the old tail
    /// shifts the whole body at once, so no segment ever reads an
    /// already-updated position.
    pub(super) fn step(&mut self, grid: GridSpec) {
        let (dr, dc) = self.direction.delta();
        let head = self.head();
        self.cells
            .push_front(grid.wrap(head.row + dr, head.col + dc));
        let _ = self.cells.pop_back();
    }

    /// Append one segment at `(tail.row, tail.col - 1)`, wrapped, and return
    /// its position.  Growth always lands one cell to the tail's left,
    /// regardless of the current heading.
    pub(super) fn grow(&mut self, grid: GridSpec) -> Coord {
        let tail = *self.cells.back().expect("snake should never be empty");
        let segment = grid.wrap(tail.row, tail.col - 1);
        self.cells.push_back(segment);
        segment
    }

    /// True iff some body segment shares the head's cell
    pub(super) fn is_self_colliding(&self) -> bool {
        let head = self.head();
        self.cells.iter().skip(1).any(|&c| c == head)
    }

    pub(super) fn occupies(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}
