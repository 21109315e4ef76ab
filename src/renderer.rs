use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{glyphs, Theme, BORDER_PLAY_AREA, CELL_WIDTH, GLYPH_CONSUMABLE};
use crate::field::Position;
use crate::game::{GameStatus, RenderSnapshot};
use crate::snake::{Orientation, SegmentShape, ShapeTag};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from a committed snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &RenderSnapshot, theme: &Theme) {
    let area = frame.area();
    let below_hud = render_hud(frame, area, snapshot, theme);
    let play_area = centered_field(below_hud, snapshot.field_size);

    let block = Block::bordered()
        .border_set(BORDER_PLAY_AREA)
        .border_style(Style::new().fg(theme.border_fg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_tiles(frame, inner, snapshot.field_size, theme);
    render_consumable(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    match snapshot.status {
        GameStatus::Idle => render_start_menu(frame, play_area, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            snapshot.end_reason,
            theme,
        ),
        GameStatus::Playing => {}
    }
}

fn centered_field(area: Rect, field_size: i32) -> Rect {
    let side = u16::try_from(field_size).unwrap_or(u16::MAX);
    let width = side.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = side.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [field] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    field
}

fn render_tiles(frame: &mut Frame<'_>, inner: Rect, field_size: i32, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for y in 0..field_size {
        for x in 0..field_size {
            let Some((column, row)) = logical_to_terminal(inner, field_size, Position::new(x, y))
            else {
                continue;
            };

            let tile = if (x + y) % 2 == 1 {
                theme.tile_dark
            } else {
                theme.tile_light
            };
            buffer.set_string(column, row, "  ", Style::new().bg(tile));
        }
    }
}

fn render_consumable(frame: &mut Frame<'_>, inner: Rect, snapshot: &RenderSnapshot, theme: &Theme) {
    let Some(position) = snapshot.consumable else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.field_size, position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_CONSUMABLE, Style::new().fg(theme.consumable));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &RenderSnapshot, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when a collision stacks two segments.
    for segment in snapshot.segments.iter().rev() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.field_size, segment.position)
        else {
            continue;
        };

        let style = match segment.shape {
            ShapeTag::Head => Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
            ShapeTag::Tail => Style::new().fg(theme.snake_tail),
            ShapeTag::Straight | ShapeTag::Bend => Style::new().fg(theme.snake_body),
        };

        buffer.set_string(x, y, segment_glyph(segment), style);
        if connects_right(segment) {
            buffer.set_string(x + 1, y, glyphs::LINK_HORIZONTAL, style);
        }
    }
}

fn segment_glyph(segment: &SegmentShape) -> &'static str {
    let index = usize::from(segment.orientation.quarter_turns());
    match segment.shape {
        ShapeTag::Head => glyphs::HEAD[index],
        ShapeTag::Straight => glyphs::STRAIGHT[index],
        ShapeTag::Bend => glyphs::BEND[index],
        ShapeTag::Tail => glyphs::TAIL[index],
    }
}

/// True when the segment links to the cell on its right.
fn connects_right(segment: &SegmentShape) -> bool {
    match (segment.shape, segment.orientation) {
        // A head facing left trails its neck to the right.
        (ShapeTag::Head, orientation) => orientation == Orientation::Deg90,
        (ShapeTag::Straight, orientation) => {
            matches!(orientation, Orientation::Deg90 | Orientation::Deg270)
        }
        (ShapeTag::Bend, orientation) => {
            matches!(orientation, Orientation::Deg0 | Orientation::Deg270)
        }
        (ShapeTag::Tail, orientation) => orientation == Orientation::Deg90,
    }
}

fn logical_to_terminal(inner: Rect, field_size: i32, position: Position) -> Option<(u16, u16)> {
    if !(0..field_size).contains(&position.x) || !(0..field_size).contains(&position.y) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::{GameConfig, THEME_MEADOW};
    use crate::field::Position;
    use crate::game::GameSession;
    use crate::snake::{Orientation, SegmentShape, ShapeTag};

    use super::{connects_right, logical_to_terminal, render, segment_glyph};

    #[test]
    fn cells_map_to_two_columns() {
        let inner = Rect::new(1, 2, 40, 20);

        assert_eq!(logical_to_terminal(inner, 20, Position::new(0, 0)), Some((1, 2)));
        assert_eq!(logical_to_terminal(inner, 20, Position::new(3, 4)), Some((7, 6)));
        assert_eq!(logical_to_terminal(inner, 20, Position::new(-1, 4)), None);
        assert_eq!(logical_to_terminal(inner, 20, Position::new(19, 20)), None);
    }

    #[test]
    fn glyphs_follow_orientation() {
        let bend = SegmentShape {
            position: Position::new(0, 0),
            shape: ShapeTag::Bend,
            orientation: Orientation::Deg0,
        };
        let head = SegmentShape {
            shape: ShapeTag::Head,
            orientation: Orientation::Deg270,
            ..bend
        };

        assert_eq!(segment_glyph(&bend), "┏");
        assert!(connects_right(&bend));
        assert_eq!(segment_glyph(&head), "▶");
        assert!(!connects_right(&head));
    }

    #[test]
    fn idle_frame_renders_without_panicking() {
        let session = GameSession::new_with_seed(GameConfig::default(), 11)
            .expect("defaults are valid");
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).expect("test backend");

        terminal
            .draw(|frame| render(frame, &session.snapshot(), &THEME_MEADOW))
            .expect("frame should draw");
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut session = GameSession::new_with_seed(GameConfig::default(), 12)
            .expect("defaults are valid");
        session.start();
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).expect("test backend");

        terminal
            .draw(|frame| render(frame, &session.snapshot(), &THEME_MEADOW))
            .expect("frame should draw");
    }
}
