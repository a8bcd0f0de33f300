use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameEngine;

const GAME_TITLE: &str = "Snake";
const SEPARATOR: &str = " · ";

/// Values shown by the HUD that the engine does not own.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best score reached this session. Never written to disk.
    pub best_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line score HUD and returns the remaining play area below it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameEngine,
    info: &HudInfo<'_>,
) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let labels = HudLabels::fitting(
        state.score,
        state.snake.len(),
        info.best_score,
        usize::from(hud_area.width),
    );
    frame.render_widget(
        Paragraph::new(hud_line(
            labels,
            state.score,
            state.snake.len(),
            info.best_score,
            info.theme,
        ))
        .alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct HudLabels {
    title: &'static str,
    score: &'static str,
    length: &'static str,
    best: &'static str,
}

const FULL_LABELS: HudLabels = HudLabels {
    title: GAME_TITLE,
    score: "Score",
    length: "Length",
    best: "Best",
};

const COMPACT_LABELS: HudLabels = HudLabels {
    title: "",
    score: "S",
    length: "L",
    best: "B",
};

impl HudLabels {
    fn fitting(score: u32, length: usize, best: u32, available_width: usize) -> Self {
        if hud_text(FULL_LABELS, score, length, best).chars().count() <= available_width {
            FULL_LABELS
        } else {
            COMPACT_LABELS
        }
    }
}

/// Plain text of the HUD line, used to measure its width.
fn hud_text(labels: HudLabels, score: u32, length: usize, best: u32) -> String {
    let stats = format!(
        "{}: {score}{SEPARATOR}{}: {length}{SEPARATOR}{}: {best}",
        labels.score, labels.length, labels.best
    );
    if labels.title.is_empty() {
        stats
    } else {
        format!("{}{SEPARATOR}{stats}", labels.title)
    }
}

fn hud_line(
    labels: HudLabels,
    score: u32,
    length: usize,
    best: u32,
    theme: &Theme,
) -> Line<'static> {
    let value = Style::default().fg(theme.hud_score).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.hud_muted);

    let mut spans = Vec::new();
    if !labels.title.is_empty() {
        spans.push(Span::styled(labels.title, value));
        spans.push(Span::styled(SEPARATOR, muted));
    }
    spans.extend([
        Span::styled(format!("{}: ", labels.score), muted),
        Span::styled(score.to_string(), value),
        Span::styled(SEPARATOR, muted),
        Span::styled(format!("{}: ", labels.length), muted),
        Span::styled(length.to_string(), value),
        Span::styled(SEPARATOR, muted),
        Span::styled(format!("{}: ", labels.best), muted),
        Span::styled(best.to_string(), value),
    ]);

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::{COMPACT_LABELS, FULL_LABELS, HudLabels, hud_text};

    #[test]
    fn full_text_lists_score_length_and_best() {
        assert_eq!(
            hud_text(FULL_LABELS, 3, 4, 7),
            "Snake · Score: 3 · Length: 4 · Best: 7"
        );
    }

    #[test]
    fn narrow_hud_switches_to_compact_labels() {
        assert_eq!(HudLabels::fitting(3, 4, 7, 80), FULL_LABELS);
        assert_eq!(HudLabels::fitting(3, 4, 7, 20), COMPACT_LABELS);
        assert_eq!(hud_text(COMPACT_LABELS, 3, 4, 7), "S: 3 · L: 4 · B: 7");
    }
}
