mod direction;
mod food;
pub(crate) mod grid;
mod snake;
use self::direction::Direction;
use self::food::Food;
use self::grid::{GridError, GridSpec};
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::Globals;
use crate::view::{CellBuffer, CellHandle, CellKind, View};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::Frame;
use std::io;
use std::time::{Duration, Instant};

/// One game session: the grid, the snake, the food, and the view cells that
/// mirror them.  Everything lives here; there is no ambient state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng, V = CellBuffer> {
    rng: R,
    grid: GridSpec,
    snake: Snake,
    snake_handles: Vec<CellHandle>,
    food: Food,
    food_handle: CellHandle,
    view: V,
    state: GameState,
    pending: Option<Direction>,
    next_tick: Option<Instant>,
}

impl Game {
    pub(crate) fn new(globals: &Globals) -> Result<Game, GridError> {
        let grid = GridSpec::from_viewport(consts::BOARD_VIEWPORT, globals.cell_size)?;
        Ok(Game::from_parts(
            grid,
            CellBuffer::new(grid, globals.styles),
            rand::rng(),
        ))
    }
}

impl<R: Rng, V: View> Game<R, V> {
    pub(crate) fn from_parts(grid: GridSpec, mut view: V, mut rng: R) -> Game<R, V> {
        view.clear_all();
        let snake = Snake::spawn(grid, &mut rng);
        let snake_handles = vec![view.render_cell(snake.head(), CellKind::SnakeHead)];
        let food = Food::spawn(grid, &snake, &mut rng);
        let food_handle = view.render_cell(food.position(), CellKind::Food);
        view.show_score(snake.len());
        Game {
            rng,
            grid,
            snake,
            snake_handles,
            food,
            food_handle,
            view,
            state: GameState::Running,
            pending: None,
            next_tick: None,
        }
    }

    /// Start a fresh run on the same grid: cleared view, new single-segment
    /// snake, new food.  Any scheduled tick and any queued direction are
    /// dropped.
    fn reset(&mut self) {
        self.view.clear_all();
        self.snake = Snake::spawn(self.grid, &mut self.rng);
        self.snake_handles = vec![self
            .view
            .render_cell(self.snake.head(), CellKind::SnakeHead)];
        self.food = Food::spawn(self.grid, &self.snake, &mut self.rng);
        self.food_handle = self.view.render_cell(self.food.position(), CellKind::Food);
        self.view.show_score(self.snake.len());
        self.state = GameState::Running;
        self.pending = None;
        self.next_tick = None;
    }

    /// Wait for either the next tick deadline or an input event, whichever
    /// comes first.  Only one tick is ever in flight: the next one is not
    /// scheduled until `advance()` has fully completed.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tick_interval());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// One tick.  Any queued direction is applied first, so input only ever
    /// takes effect at a tick boundary, never mid-step.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        if let Some(direction) = self.pending.take() {
            self.snake.set_direction(direction);
        }
        self.snake.step(self.grid);
        for (&handle, &coord) in self.snake_handles.iter().zip(self.snake.cells()) {
            self.view.move_cell_to(handle, coord);
        }
        if self.snake.head() == self.food.position() {
            let segment = self.snake.grow(self.grid);
            self.snake_handles
                .push(self.view.render_cell(segment, CellKind::SnakeBody));
            self.food.relocate(self.grid, &self.snake, &mut self.rng);
            self.view.move_cell_to(self.food_handle, self.food.position());
            self.view.show_score(self.snake.len());
        } else if self.snake.is_self_colliding() {
            self.state = GameState::GameOver;
            self.view.on_game_over();
        }
    }

    /// Pacing for the next tick: the base delay divided by half the snake's
    /// length, so intervals shrink monotonically as the snake grows
    #[allow(clippy::cast_precision_loss)]
    fn tick_interval(&self) -> Duration {
        consts::BASE_TICK.div_f64(self.snake.len() as f64 * 0.5)
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.queue_direction(Direction::Up),
                Command::Down => self.queue_direction(Direction::Down),
                Command::Left => self.queue_direction(Direction::Left),
                Command::Right => self.queue_direction(Direction::Right),
                _ => (),
            },
            GameState::GameOver => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => self.reset(),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }

    /// Record a direction intent.  At most one is kept; a later keypress in
    /// the same tick replaces an earlier one.
    fn queue_direction(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }
}

impl<R> Game<R, CellBuffer> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(&self.view, frame.area());
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::grid::Coord;
    use super::*;
    use crate::config::Styles;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game(rows: i32, cols: i32) -> Game<ChaCha12Rng> {
        let grid = GridSpec::new(rows, cols).unwrap();
        Game::from_parts(
            grid,
            CellBuffer::new(grid, Styles::default()),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    /// Overwrite the spawned snake with a known one, rebuilding the view to
    /// match
    fn install_snake(game: &mut Game<ChaCha12Rng>, cells: &[(i32, i32)], direction: Direction) {
        game.view.clear_all();
        game.snake.cells = cells.iter().map(|&(r, c)| Coord::new(r, c)).collect();
        game.snake.direction = direction;
        game.snake_handles = game
            .snake
            .cells
            .iter()
            .enumerate()
            .map(|(i, &coord)| {
                let kind = if i == 0 {
                    CellKind::SnakeHead
                } else {
                    CellKind::SnakeBody
                };
                game.view.render_cell(coord, kind)
            })
            .collect();
        game.food_handle = game.view.render_cell(game.food.position(), CellKind::Food);
        game.view.show_score(game.snake.len());
    }

    #[test]
    fn default_globals_game() {
        let game = Game::new(&Globals::default()).unwrap();
        assert_eq!(game.grid.rows(), 19);
        assert_eq!(game.grid.cols(), 76);
        assert_eq!(game.snake.len(), 1);
        assert!(!game.snake.occupies(game.food.position()));
        assert_eq!(game.view.score(), 1);
    }

    #[test]
    fn fresh_game() {
        let game = new_game(5, 5);
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.direction, Direction::Right);
        assert!(!game.snake.occupies(game.food.position()));
        assert_eq!(game.view.score(), 1);
        assert_eq!(game.view.cells().len(), 2);
    }

    #[test]
    fn eating_grows_rescores_and_relocates_food() {
        let mut game = new_game(5, 5);
        install_snake(&mut game, &[(2, 2)], Direction::Right);
        game.food.pos = Coord::new(2, 3);
        game.view.move_cell_to(game.food_handle, Coord::new(2, 3));
        game.advance();
        assert_eq!(game.snake.head(), Coord::new(2, 3));
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.view.score(), 2);
        assert_eq!(
            game.snake.cells,
            VecDeque::from([Coord::new(2, 3), Coord::new(2, 2)])
        );
        let food = game.food.position();
        assert_ne!(food, Coord::new(2, 3));
        assert_ne!(food, Coord::new(2, 2));
        assert!(!game.snake.occupies(food));
        assert_eq!(game.state, GameState::Running);
        // The view knows about the new body segment and the moved food
        assert_eq!(game.view.cells().len(), 3);
        assert_eq!(game.snake_handles.len(), 2);
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut game = new_game(8, 8);
        // Heading up from (2, 2), the head lands on the snake's own tail
        install_snake(
            &mut game,
            &[(2, 2), (2, 1), (1, 1), (1, 2), (1, 3)],
            Direction::Up,
        );
        game.food.pos = Coord::new(7, 7);
        game.advance();
        assert_eq!(game.state, GameState::GameOver);
        assert!(game.view.is_game_over());
        assert!(game.snake.is_self_colliding());
        let cells = game.snake.cells.clone();
        // Terminal state: further ticks change nothing
        game.advance();
        assert_eq!(game.snake.cells, cells);
        assert_eq!(game.state, GameState::GameOver);
    }

    #[test]
    fn queued_direction_applies_at_the_tick_boundary() {
        let mut game = new_game(8, 8);
        install_snake(&mut game, &[(4, 4)], Direction::Right);
        game.food.pos = Coord::new(0, 0);
        game.queue_direction(Direction::Up);
        assert_eq!(game.snake.direction, Direction::Right);
        game.advance();
        assert_eq!(game.snake.direction, Direction::Up);
        assert_eq!(game.snake.head(), Coord::new(3, 4));
        assert_eq!(game.pending, None);
    }

    #[test]
    fn later_intent_replaces_earlier_one() {
        let mut game = new_game(8, 8);
        install_snake(&mut game, &[(4, 4)], Direction::Right);
        game.food.pos = Coord::new(0, 0);
        game.queue_direction(Direction::Up);
        game.queue_direction(Direction::Down);
        game.advance();
        assert_eq!(game.snake.head(), Coord::new(5, 4));
    }

    #[test]
    fn reversal_intent_dropped_at_the_drain_point() {
        let mut game = new_game(8, 8);
        install_snake(&mut game, &[(4, 4), (4, 3)], Direction::Right);
        game.food.pos = Coord::new(0, 0);
        game.queue_direction(Direction::Left);
        game.advance();
        assert_eq!(game.snake.direction, Direction::Right);
        assert_eq!(game.snake.head(), Coord::new(4, 5));
    }

    #[test]
    fn view_tracks_every_segment() {
        let mut game = new_game(8, 8);
        install_snake(&mut game, &[(4, 4), (4, 3), (4, 2)], Direction::Right);
        game.food.pos = Coord::new(0, 0);
        game.view.move_cell_to(game.food_handle, Coord::new(0, 0));
        game.advance();
        let rendered: Vec<Coord> = game
            .view
            .cells()
            .iter()
            .filter(|&&(_, kind)| kind != CellKind::Food)
            .map(|&(coord, _)| coord)
            .collect();
        assert_eq!(
            rendered,
            vec![Coord::new(4, 5), Coord::new(4, 4), Coord::new(4, 3)]
        );
    }

    #[test]
    fn speed_increases_with_length() {
        let mut game = new_game(8, 8);
        install_snake(&mut game, &[(4, 4), (4, 3)], Direction::Right);
        let slow = game.tick_interval();
        assert_eq!(slow, Duration::from_millis(150));
        install_snake(
            &mut game,
            &[
                (4, 4),
                (4, 3),
                (4, 2),
                (4, 1),
                (4, 0),
                (5, 0),
                (5, 1),
                (5, 2),
                (5, 3),
                (5, 4),
            ],
            Direction::Right,
        );
        let fast = game.tick_interval();
        assert_eq!(fast, Duration::from_millis(30));
        assert!(slow > fast);
    }

    #[test]
    fn reset_starts_a_fresh_run() {
        let mut game = new_game(8, 8);
        install_snake(
            &mut game,
            &[(2, 2), (2, 1), (1, 1), (1, 2), (1, 3)],
            Direction::Up,
        );
        game.food.pos = Coord::new(7, 7);
        game.advance();
        assert_eq!(game.state, GameState::GameOver);
        game.queue_direction(Direction::Down);
        game.reset();
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.direction, Direction::Right);
        assert_eq!(game.pending, None);
        assert_eq!(game.next_tick, None);
        assert!(!game.view.is_game_over());
        assert_eq!(game.view.score(), 1);
        assert_eq!(game.view.cells().len(), 2);
        assert!(!game.snake.occupies(game.food.position()));
    }
}
