//! Stateless board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictac_engine::{BOARD, GameEngine, GameResult, LineKind, Player, Tile};

use crate::Roster;

/// Everything the board needs to draw one frame.
pub struct BoardView<'a> {
    /// Game being shown.
    pub engine: &'a GameEngine,
    /// Names and icons.
    pub roster: &'a Roster,
    /// Highlighted tile.
    pub cursor: Tile,
    /// Last evaluation, if someone has won.
    pub result: Option<&'a GameResult>,
}

/// Draws the 3x3 board centered in `area`.
pub fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView<'_>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, tiles) in BOARD.iter().enumerate() {
        draw_row(frame, rows[i * 2], view, tiles);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &BoardView<'_>, tiles: &[Tile; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, tile) in tiles.iter().enumerate() {
        draw_cell(frame, cols[i * 2], view, *tile);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

/// Text and style for one cell.
///
/// An empty cell under the cursor previews the mover's icon, dimmed, while
/// the game is undecided.
fn cell_label(view: &BoardView<'_>, tile: Tile) -> (String, Style) {
    match view.engine.owner_of(tile) {
        Some(player) => (
            format!(" {} ", view.roster.profile(player).icon()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        None if tile == view.cursor && view.result.is_none() => {
            let mover = view.engine.current_player();
            (
                format!(" {} ", view.roster.profile(mover).icon()),
                Style::default()
                    .fg(player_color(mover))
                    .add_modifier(Modifier::DIM),
            )
        }
        None => (format!(" {} ", tile), Style::default().fg(Color::DarkGray)),
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView<'_>, tile: Tile) {
    let (symbol, base_style) = cell_label(view, tile);

    let mut spans = vec![Span::styled(symbol, base_style)];
    if let Some(result) = view.result.filter(|r| r.contains(tile)) {
        spans.push(Span::styled(
            strike(result.line()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let style = if tile == view.cursor && view.result.is_none() {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Strike mark drawn next to each tile of the winning line.
pub fn strike(line: LineKind) -> &'static str {
    match line {
        LineKind::Row => "─",
        LineKind::Column => "│",
        LineKind::DiagonalLeft => "╲",
        LineKind::DiagonalRight => "╱",
    }
}

/// Color used for a player's marks and name.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::Player1 => Color::Blue,
        Player::Player2 => Color::Red,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Returns a `width` x `height` rectangle centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(n: u8) -> Tile {
        Tile::new(n).expect("valid tile")
    }

    #[test]
    fn test_cursor_previews_mover_icon() {
        let mut engine = GameEngine::new();
        engine.apply_move(tile(1));
        let roster = Roster::default();
        let view = BoardView {
            engine: &engine,
            roster: &roster,
            cursor: tile(5),
            result: None,
        };

        let (preview, style) = cell_label(&view, tile(5));
        assert_eq!(preview, " O ");
        assert!(style.add_modifier.contains(Modifier::DIM));

        assert_eq!(cell_label(&view, tile(1)).0, " X ");
        assert_eq!(cell_label(&view, tile(9)).0, " 9 ");
    }

    #[test]
    fn test_no_preview_once_won() {
        let engine = GameEngine::replay([1, 4, 2, 5, 3].map(tile));
        let result = engine.evaluate().expect("top row");
        let roster = Roster::default();
        let view = BoardView {
            engine: &engine,
            roster: &roster,
            cursor: tile(9),
            result: Some(&result),
        };

        assert_eq!(cell_label(&view, tile(9)).0, " 9 ");
    }

    #[test]
    fn test_strike_follows_line_kind() {
        assert_eq!(strike(LineKind::Row), "─");
        assert_eq!(strike(LineKind::DiagonalLeft), "╲");
    }
}
