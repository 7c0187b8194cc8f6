use crate::config::Styles;
use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::num::NonZeroU16;

/// Cross-cutting session parameters assembled from the CLI and the
/// configuration file, passed down to whatever needs them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    /// Viewport units per grid cell
    pub(crate) cell_size: NonZeroU16,

    /// Resolved display styles
    pub(crate) styles: Styles,
}

#[cfg(test)]
impl Default for Globals {
    fn default() -> Globals {
        Globals {
            cell_size: consts::DEFAULT_CELL_SIZE,
            styles: Styles::default(),
        }
    }
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}
