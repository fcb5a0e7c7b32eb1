//! Collaborators the game session drives.
//!
//! The session never reaches into a concrete renderer, HUD, or storage
//! backend; it calls these traits on the implementations injected through
//! [`Collaborators`].

use std::collections::VecDeque;

use crate::config::GridSize;
use crate::snake::Position;

/// Read-only view of the board handed to a [`Renderer`] once per tick.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub trail: &'a VecDeque<Position>,
    pub food: Position,
    pub bounds: GridSize,
    pub block_size: u16,
}

impl RenderFrame<'_> {
    /// Drawing-surface offset of a cell's top-left corner.
    #[must_use]
    pub fn pixel_offset(&self, position: Position) -> (i32, i32) {
        let block = i32::from(self.block_size);
        (position.x * block, position.y * block)
    }
}

pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>);
}

pub trait ScoreSink {
    fn on_score_changed(&mut self, score: u32);

    fn on_level_changed(&mut self, level: u32);

    /// Stored high score, reported when a game starts or restarts.
    fn on_high_score(&mut self, _high_score: u32) {}
}

pub trait GameOverSink {
    fn on_game_over(&mut self, final_score: u32);
}

/// Persisted best score.
pub trait HighScoreStore {
    /// `None` when nothing has been recorded or the backend is unavailable.
    fn get(&self) -> Option<u32>;

    fn set(&mut self, score: u32);
}

/// Collaborator that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Renderer for NullSink {
    fn render(&mut self, _frame: &RenderFrame<'_>) {}
}

impl ScoreSink for NullSink {
    fn on_score_changed(&mut self, _score: u32) {}

    fn on_level_changed(&mut self, _level: u32) {}
}

impl GameOverSink for NullSink {
    fn on_game_over(&mut self, _final_score: u32) {}
}

/// In-process high score that lives as long as the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHighScore {
    value: Option<u32>,
}

impl MemoryHighScore {
    #[must_use]
    pub fn with_value(value: u32) -> Self {
        Self { value: Some(value) }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn get(&self) -> Option<u32> {
        self.value
    }

    fn set(&mut self, score: u32) {
        self.value = Some(score);
    }
}

/// Every collaborator a [`GameSession`](crate::session::GameSession) talks to.
pub struct Collaborators {
    pub renderer: Box<dyn Renderer>,
    pub score_sink: Box<dyn ScoreSink>,
    pub game_over_sink: Box<dyn GameOverSink>,
    pub high_scores: Box<dyn HighScoreStore>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            renderer: Box::new(NullSink),
            score_sink: Box::new(NullSink),
            game_over_sink: Box::new(NullSink),
            high_scores: Box::new(MemoryHighScore::default()),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
