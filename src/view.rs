use crate::config::Styles;
use crate::consts;
use crate::game::grid::{Coord, GridSpec};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// What a rendered cell depicts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CellKind {
    SnakeHead,
    SnakeBody,
    Food,
}

/// An opaque reference to a rendered cell, handed out by
/// [`View::render_cell()`] and used to reposition the cell later
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CellHandle(usize);

/// The rendering boundary the simulation drives.  The game core never draws
/// anything itself; it places cells, moves them, and reports the score and
/// the end of the game through this trait.
pub(crate) trait View {
    /// Place a new cell on the board and return a handle to it
    fn render_cell(&mut self, coord: Coord, kind: CellKind) -> CellHandle;

    /// Reposition an existing cell.  Handles invalidated by
    /// [`clear_all()`][View::clear_all] are ignored.
    fn move_cell_to(&mut self, handle: CellHandle, coord: Coord);

    /// Remove every rendered cell and clear the game-over marker
    fn clear_all(&mut self);

    fn show_score(&mut self, score: usize);

    fn on_game_over(&mut self);
}

/// The ratatui implementation of [`View`]: a retained store of cells that a
/// single [`Widget`] render pass draws in full each frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CellBuffer {
    grid: GridSpec,
    cells: Vec<(Coord, CellKind)>,
    score: usize,
    game_over: bool,
    styles: Styles,
}

impl CellBuffer {
    pub(crate) fn new(grid: GridSpec, styles: Styles) -> CellBuffer {
        CellBuffer {
            grid,
            cells: Vec::new(),
            score: 0,
            game_over: false,
            styles,
        }
    }

    #[cfg(test)]
    pub(crate) fn score(&self) -> usize {
        self.score
    }

    #[cfg(test)]
    pub(crate) fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> &[(Coord, CellKind)] {
        &self.cells
    }

    /// The size of the board block: the grid plus its border
    fn board_size(&self) -> Size {
        Size {
            width: u16::try_from(self.grid.cols())
                .unwrap_or(u16::MAX)
                .saturating_add(2),
            height: u16::try_from(self.grid.rows())
                .unwrap_or(u16::MAX)
                .saturating_add(2),
        }
    }
}

impl View for CellBuffer {
    fn render_cell(&mut self, coord: Coord, kind: CellKind) -> CellHandle {
        self.cells.push((coord, kind));
        CellHandle(self.cells.len() - 1)
    }

    fn move_cell_to(&mut self, handle: CellHandle, coord: Coord) {
        if let Some(cell) = self.cells.get_mut(handle.0) {
            cell.0 = coord;
        }
    }

    fn clear_all(&mut self) {
        self.cells.clear();
        self.game_over = false;
    }

    fn show_score(&mut self, score: usize) {
        self.score = score;
    }

    fn on_game_over(&mut self) {
        self.game_over = true;
    }
}

impl Widget for &CellBuffer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), self.styles.score_bar)
            .render(score_area, buf);

        let block_area = center_rect(board_area, self.board_size());
        // The grid wraps at every edge, so the border is always dotted.
        DottedBorder.render(block_area, buf);

        let board = block_area.inner(Margin::new(1, 1));
        let mut canvas = Canvas { area: board, buf };
        for &(coord, kind) in &self.cells {
            match kind {
                CellKind::SnakeBody => {
                    canvas.draw_cell(coord, consts::SNAKE_BODY_SYMBOL, self.styles.snake);
                }
                CellKind::Food => canvas.draw_cell(coord, consts::FOOD_SYMBOL, self.styles.food),
                CellKind::SnakeHead => (),
            }
        }
        // Draw the head last so that, if the game ended on a collision, the
        // collision marker overwrites the body cell the head landed on.
        let head = self
            .cells
            .iter()
            .find(|&&(_, kind)| kind == CellKind::SnakeHead);
        if let Some(&(coord, _)) = head {
            if self.game_over {
                canvas.draw_cell(coord, consts::COLLISION_SYMBOL, self.styles.collision);
            } else {
                canvas.draw_cell(coord, consts::SNAKE_HEAD_SYMBOL, self.styles.snake);
            }
        }

        if self.game_over {
            Span::from(" — GAME OVER —").render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Choose One: Restart ("),
                Span::styled("r", self.styles.key),
                Span::raw(") — Quit ("),
                Span::styled("q", self.styles.key),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, x_off: u16, y_off: u16, symbol: char) {
        let Some(x) = self.area.x.checked_add(x_off) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y_off) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, coord: Coord, symbol: char, style: Style) {
        let Ok(col) = u16::try_from(coord.col) else {
            return;
        };
        let Ok(row) = u16::try_from(coord.row) else {
            return;
        };
        // A rows-rounded-up grid can poke past a clipped board area; cells
        // outside it are simply not drawn.
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(0, 0, '·');
        canvas.draw_char(max_x, 0, '·');
        canvas.draw_char(max_x, max_y, '·');
        canvas.draw_char(0, max_y, '·');
        for x in 1..max_x {
            canvas.draw_char(x, 0, '⋯');
            canvas.draw_char(x, max_y, '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(0, y, '⋮');
            canvas.draw_char(max_x, y, '⋮');
        }
    }
}
