use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::{GameStatus, RenderSnapshot};

const HUD_HEIGHT: u16 = 1;
const HUD_INNER_MARGIN_X: u16 = 1;

/// Draws the score band and returns the area left for the play field.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &RenderSnapshot, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(HUD_HEIGHT), Constraint::Min(0)]).areas(area);

    let band_style = Style::default().fg(theme.hud_score).bg(theme.hud_bg);
    frame.render_widget(Paragraph::new("").style(band_style), hud_area);

    let status = status_label(snapshot.status);
    let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);
    let inner = inset_horizontal(hud_area, HUD_INNER_MARGIN_X);
    let [score_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(inner);

    frame.render_widget(
        Paragraph::new(score_line(snapshot.score, snapshot.segments.len())).style(band_style),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Right)
            .style(band_style),
        status_area,
    );

    play_area
}

fn score_line(score: u32, length: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  Length: "),
        Span::raw(length.to_string()),
    ])
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "ready",
        GameStatus::Playing => "playing",
        GameStatus::GameOver => "game over",
    }
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
