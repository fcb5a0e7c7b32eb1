use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::GridSize;
use crate::session::Phase;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{Overlay, render_overlay};
use crate::ui::scene::Scene;

const GLYPH_BLOCK: &str = "█";

const COLOR_HEAD: Color = Color::White;
const COLOR_BODY: Color = Color::Green;
const COLOR_FOOD: Color = Color::Red;
const COLOR_BORDER: Color = Color::DarkGray;

/// Renders the full game frame from the latest scene snapshot.
pub fn render(frame: &mut Frame<'_>, scene: &Scene, phase: Phase) {
    let [hud_area, field_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());
    render_hud(frame, hud_area, scene);

    let play_area = board_rect(field_area, scene.bounds, scene.block_size);
    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, scene);
    render_snake(frame, inner, scene);

    let overlay = match phase {
        Phase::Intro => Overlay::Intro {
            bounds: scene.bounds,
            high_score: scene.high_score,
        },
        Phase::GameOver => Overlay::GameOver {
            score: scene.final_score.unwrap_or(scene.score),
            level: scene.level,
            high_score: scene.high_score,
            new_record: scene.new_record,
        },
        Phase::Playing => return,
    };
    render_overlay(frame, play_area, overlay);
}

/// Centers a bordered board of `bounds` cells inside `area`.
fn board_rect(area: Rect, bounds: GridSize, block_size: u16) -> Rect {
    let width = bounds.width.saturating_mul(block_size).saturating_add(2);
    let height = bounds.height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, scene: &Scene) {
    let Some(food) = scene.food else {
        return;
    };

    paint_cell(frame, inner, scene, food, COLOR_FOOD);
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, scene: &Scene) {
    // Tail first so the head stays visible when cells are stacked at spawn.
    for (index, segment) in scene.trail.iter().enumerate().rev() {
        let color = if index == 0 { COLOR_HEAD } else { COLOR_BODY };
        paint_cell(frame, inner, scene, *segment, color);
    }
}

fn paint_cell(frame: &mut Frame<'_>, inner: Rect, scene: &Scene, position: Position, color: Color) {
    let Some((x, y)) = cell_origin(inner, scene.bounds, scene.block_size, position) else {
        return;
    };

    let glyph = GLYPH_BLOCK.repeat(usize::from(scene.block_size));
    frame
        .buffer_mut()
        .set_string(x, y, glyph, Style::new().fg(color));
}

/// Terminal cell of a grid cell's left edge, or `None` when it is clipped.
fn cell_origin(
    inner: Rect,
    bounds: GridSize,
    block_size: u16,
    position: Position,
) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(block_size)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.checked_add(x_offset)?;
    let y = inner.y.checked_add(y_offset)?;
    if x.saturating_add(block_size) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
