use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::config::{GridSize, DEFAULT_BLOCK_SIZE, DEFAULT_GRID_SIZE};
use crate::sinks::{Collaborators, GameOverSink, HighScoreStore, RenderFrame, Renderer, ScoreSink};
use crate::snake::Position;

/// Last state the session reported, kept for the draw loop.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Head-first copy of the trail from the latest tick.
    pub trail: Vec<Position>,
    pub food: Option<Position>,
    pub bounds: GridSize,
    pub block_size: u16,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub final_score: Option<u32>,
    /// Set when the last game beat the stored high score.
    pub new_record: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            trail: Vec::new(),
            food: None,
            bounds: GridSize::square(DEFAULT_GRID_SIZE),
            block_size: DEFAULT_BLOCK_SIZE,
            score: 0,
            level: 1,
            high_score: 0,
            final_score: None,
            new_record: false,
        }
    }
}

/// Shared handle the session writes through and the draw loop reads.
#[derive(Debug, Clone, Default)]
pub struct SceneHandle(Rc<RefCell<Scene>>);

impl SceneHandle {
    /// A scene pre-sized for the board it will show.
    #[must_use]
    pub fn new(bounds: GridSize, block_size: u16) -> Self {
        Self(Rc::new(RefCell::new(Scene {
            bounds,
            block_size,
            ..Scene::default()
        })))
    }

    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Scene> {
        self.0.borrow()
    }

    /// Wires this scene in as renderer, score sink and game-over sink.
    #[must_use]
    pub fn collaborators(&self, high_scores: Box<dyn HighScoreStore>) -> Collaborators {
        Collaborators {
            renderer: Box::new(self.clone()),
            score_sink: Box::new(self.clone()),
            game_over_sink: Box::new(self.clone()),
            high_scores,
        }
    }
}

impl Renderer for SceneHandle {
    fn render(&mut self, frame: &RenderFrame<'_>) {
        let mut scene = self.0.borrow_mut();
        scene.trail.clear();
        scene.trail.extend(frame.trail.iter().copied());
        scene.food = Some(frame.food);
        scene.bounds = frame.bounds;
        scene.block_size = frame.block_size;
    }
}

impl ScoreSink for SceneHandle {
    fn on_score_changed(&mut self, score: u32) {
        self.0.borrow_mut().score = score;
    }

    fn on_level_changed(&mut self, level: u32) {
        self.0.borrow_mut().level = level;
    }

    fn on_high_score(&mut self, high_score: u32) {
        let mut scene = self.0.borrow_mut();
        scene.high_score = high_score;
        scene.final_score = None;
        scene.new_record = false;
    }
}

impl GameOverSink for SceneHandle {
    fn on_game_over(&mut self, final_score: u32) {
        let mut scene = self.0.borrow_mut();
        scene.final_score = Some(final_score);
        scene.new_record = final_score > scene.high_score;
        if scene.new_record {
            scene.high_score = final_score;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::config::GameConfig;
    use crate::session::GameSession;
    use crate::sinks::{GameOverSink, MemoryHighScore};

    use super::SceneHandle;

    #[test]
    fn scene_mirrors_session_after_start() {
        let config = GameConfig::default();
        let scene = SceneHandle::new(config.grid(), config.block_size);
        let store = Box::new(MemoryHighScore::with_value(30));
        let mut session = GameSession::with_seed(config, 4, scene.collaborators(store));

        session.start(Instant::now());

        let view = scene.borrow();
        assert_eq!(view.trail, vec![session.snake().head()]);
        assert_eq!(view.food, Some(session.food()));
        assert_eq!(view.high_score, 30);
        assert_eq!(view.level, 1);
    }

    #[test]
    fn game_over_flags_new_record() {
        let mut scene = SceneHandle::default();
        scene.0.borrow_mut().high_score = 5;

        scene.on_game_over(3);
        assert!(!scene.borrow().new_record);

        scene.on_game_over(9);
        let view = scene.borrow();
        assert!(view.new_record);
        assert_eq!(view.high_score, 9);
        assert_eq!(view.final_score, Some(9));
    }
}
