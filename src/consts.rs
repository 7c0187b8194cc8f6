//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::num::NonZeroU16;
use std::time::Duration;

/// Base delay between ticks.  The actual delay is this divided by half the
/// snake's length, so the game speeds up as the snake grows.
pub(crate) const BASE_TICK: Duration = Duration::from_millis(150);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// The part of the display available to the board: the display minus the
/// score bar, the board border, and the two message rows under the board.
/// The grid dimensions are derived from this and the configured cell size.
pub(crate) const BOARD_VIEWPORT: Size = Size {
    width: 76,
    height: 19,
};

/// Viewport units per grid cell when no cell size is configured
pub(crate) const DEFAULT_CELL_SIZE: NonZeroU16 = NonZeroU16::MIN;

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '█';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head after it has bitten its own body
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
