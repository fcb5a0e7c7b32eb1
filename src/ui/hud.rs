use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::scene::Scene;

/// Draws the one-line score/level/high-score bar.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, scene: &Scene) {
    frame.render_widget(
        Paragraph::new(hud_line(scene.score, scene.level, scene.high_score))
            .alignment(Alignment::Center),
        area,
    );
}

fn hud_line(score: u32, level: u32, high_score: u32) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(score.to_string(), value),
        Span::styled("  Level ", label),
        Span::styled(level.to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(high_score.to_string(), value),
    ])
}

#[cfg(test)]
mod tests {
    use super::hud_line;

    #[test]
    fn hud_line_lists_all_values() {
        let text: String = hud_line(12, 3, 40)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert_eq!(text, "Score 12  Level 3  Hi 40");
    }
}
