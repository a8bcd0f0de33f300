use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::board::{BoardGeometry, Cell};
use crate::config::{BORDER_PLAY_AREA, CELL_COLUMNS, GLYPH_CELL, GLYPH_FOOD, Theme};
use crate::food::FoodState;
use crate::game::GameEngine;
use crate::snake::SnakeState;
use crate::ui::hud::{HudInfo, render_hud};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameEngine, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, &hud_info);

    let board = state.board();
    let theme = hud_info.theme;
    let block = Block::bordered()
        .border_set(BORDER_PLAY_AREA)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let board_area = centered_board_area(play_area, board);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let buffer = frame.buffer_mut();
    render_food(buffer, inner, board, &state.food, theme);
    render_snake(buffer, inner, board, &state.snake, theme);
}

/// Draws the food cell.
pub fn render_food(
    buffer: &mut Buffer,
    inner: Rect,
    board: BoardGeometry,
    food: &FoodState,
    theme: &Theme,
) {
    let Some((x, y)) = cell_to_terminal(inner, board, food.position) else {
        return;
    };

    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.play_bg));
}

/// Draws the snake tail first so the head always ends up on top.
pub fn render_snake(
    buffer: &mut Buffer,
    inner: Rect,
    board: BoardGeometry,
    snake: &SnakeState,
    theme: &Theme,
) {
    let body_style = Style::new().fg(theme.snake_body).bg(theme.play_bg);
    for segment in snake.segments().skip(1) {
        if let Some((x, y)) = cell_to_terminal(inner, board, *segment) {
            buffer.set_string(x, y, GLYPH_CELL, body_style);
        }
    }

    if let Some((x, y)) = cell_to_terminal(inner, board, snake.head()) {
        buffer.set_string(
            x,
            y,
            GLYPH_CELL,
            Style::new()
                .fg(theme.snake_head)
                .bg(theme.play_bg)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Centers the bordered board inside `area`, shrinking it if the terminal
/// is too small.
fn centered_board_area(area: Rect, board: BoardGeometry) -> Rect {
    let width = board.size().width.saturating_mul(CELL_COLUMNS).saturating_add(2);
    let height = board.size().height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    board_area
}

/// Maps a board cell to the terminal position of its left column, or `None`
/// when the cell is clipped by a small terminal.
fn cell_to_terminal(inner: Rect, board: BoardGeometry, cell: Cell) -> Option<(u16, u16)> {
    if !board.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
