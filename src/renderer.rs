use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{
    COLOR_BORDER, COLOR_FOOD, COLOR_HINT, COLOR_SNAKE, COLOR_SNAKE_DEAD, COLOR_SNAKE_HEAD,
    GLYPH_FOOD, GLYPH_SNAKE, GridSize,
};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;

/// Renders one full frame from immutable game state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [score_area, board_area, message_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_score(frame, score_area, state);

    let inner = render_board_frame(frame, board_area, state.bounds());
    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    render_message(frame, message_area, state);
}

fn render_score(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", state.score)))
            .alignment(Alignment::Center)
            .style(Style::new().add_modifier(Modifier::BOLD)),
        area,
    );
}

/// Draws the bordered board centered in `area` and returns the play area
/// inside the border.
fn render_board_frame(frame: &mut Frame<'_>, area: Rect, bounds: GridSize) -> Rect {
    let board = centered_rect(
        area,
        bounds.width.saturating_add(2),
        bounds.height.saturating_add(2),
    );

    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    inner
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let head_color = if state.status == GameStatus::Lost {
        COLOR_SNAKE_DEAD
    } else {
        COLOR_SNAKE_HEAD
    };

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new().fg(head_color).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(COLOR_SNAKE)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

fn render_message(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let (headline, hint) = match state.status {
        GameStatus::Idle => ("", "Press a direction to start"),
        GameStatus::Playing => ("", ""),
        GameStatus::Won => ("You Won!", "Press any key to play again"),
        GameStatus::Lost => ("You Lost :(", "Press any key to play again"),
    };

    let lines = vec![
        Line::from(headline),
        Line::from(hint).style(Style::new().fg(COLOR_HINT)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// Maps a board cell to a terminal coordinate inside `inner`, clipping
/// anything outside the drawable region (a dead head can sit one cell past
/// the board edge).
fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
