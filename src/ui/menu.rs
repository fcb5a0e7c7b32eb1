use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::GridSize;

/// Popup shown over the board outside of play.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Overlay {
    Intro {
        bounds: GridSize,
        high_score: u32,
    },
    GameOver {
        score: u32,
        level: u32,
        high_score: u32,
        new_record: bool,
    },
}

/// Draws `overlay` centered on `area`, sized to its text.
pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, overlay: Overlay) {
    let (title, lines) = overlay_text(overlay);

    let text_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(text_width).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn overlay_text(overlay: Overlay) -> (&'static str, Vec<Line<'static>>) {
    let key = Style::default().fg(Color::Yellow);
    let muted = Style::default().fg(Color::DarkGray);

    match overlay {
        Overlay::Intro { bounds, high_score } => (
            " snake ",
            vec![
                Line::styled(
                    "S N A K E",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("{}x{} field, edges wrap around", bounds.width, bounds.height),
                    muted,
                ),
                Line::from(format!("Best so far: {high_score}")),
                Line::from(""),
                Line::from(vec![Span::styled("Enter", key), Span::raw(" play")]),
                Line::from(vec![Span::styled("Arrows/WASD", key), Span::raw(" steer")]),
                Line::from(vec![Span::styled("Q", key), Span::raw(" leave")]),
            ],
        ),
        Overlay::GameOver {
            score,
            level,
            high_score,
            new_record,
        } => {
            let verdict = if new_record {
                Line::styled(
                    "New best!",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(format!("Best: {high_score}"), muted)
            };

            (
                " game over ",
                vec![
                    Line::styled(
                        "Round over",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Line::from(format!("Scored {score} reaching level {level}")),
                    verdict,
                    Line::from(""),
                    Line::from(vec![Span::styled("Enter", key), Span::raw(" again")]),
                    Line::from(vec![Span::styled("Q", key), Span::raw(" leave")]),
                ],
            )
        }
    }
}
