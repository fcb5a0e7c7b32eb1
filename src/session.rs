use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::clock::Clock;
use crate::collision::is_self_collision;
use crate::config::{GameConfig, GridSize};
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::placer::RandomPlacer;
use crate::score::{ScoreEngine, ScoreRules};
use crate::sinks::{Collaborators, RenderFrame};
use crate::snake::{Position, Snake};

/// Lifecycle phase of one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for the first start; the clock is not armed.
    Intro,
    Playing,
    /// Frozen after a self-collision until restarted.
    GameOver,
}

/// One game instance: board, scoring, tick clock, and the collaborators it
/// reports to.
///
/// All mutation goes through [`GameSession::step`], driven by the clock, and
/// the lifecycle triggers. Direction input only records a pending intent.
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    phase: Phase,
    board: Board,
    pending: Option<Direction>,
    started: bool,
    engine: ScoreEngine,
    clock: Clock,
    placer: RandomPlacer<R>,
    collaborators: Collaborators,
    high_score: u32,
    final_score: Option<u32>,
}

impl GameSession<StdRng> {
    /// Creates a reproducible session for tests and seeded runs.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64, collaborators: Collaborators) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed), collaborators)
    }

    /// Creates a session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(config: GameConfig, collaborators: Collaborators) -> Self {
        Self::new(config, StdRng::from_entropy(), collaborators)
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session in the intro phase.
    ///
    /// `config` must pass [`GameConfig::validate`]; an empty grid leaves the
    /// food placer nothing to draw from.
    #[must_use]
    pub fn new(config: GameConfig, rng: R, collaborators: Collaborators) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "game session needs a valid config: {:?}",
            config.validate()
        );

        let mut placer = RandomPlacer::new(rng);
        let board = fresh_board(&config, &mut placer);
        let engine = ScoreEngine::new(ScoreRules::from(&config));
        let clock = Clock::new(config.initial_interval());
        let high_score = collaborators.high_scores.get().unwrap_or(0);

        Self {
            config,
            phase: Phase::Intro,
            board,
            pending: None,
            started: false,
            engine,
            clock,
            placer,
            collaborators,
            high_score,
            final_score: None,
        }
    }

    /// Leaves the intro and arms the clock. Ignored in other phases.
    #[instrument(level = "debug", skip_all)]
    pub fn start(&mut self, now: Instant) {
        if self.phase != Phase::Intro {
            debug!(phase = ?self.phase, "start ignored");
            return;
        }

        self.begin(now);
    }

    /// Plays again from the original configuration. Only valid after game over.
    #[instrument(level = "debug", skip_all)]
    pub fn restart(&mut self, now: Instant) {
        if self.phase != Phase::GameOver {
            debug!(phase = ?self.phase, "restart ignored");
            return;
        }

        self.begin(now);
    }

    /// Records a direction intent for the next tick.
    ///
    /// Reversing the direction currently applied is silently ignored; the
    /// last accepted intent before a tick wins.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.board.direction(), direction) {
            debug!(?direction, "reversal rejected");
            return;
        }

        self.pending = Some(direction);
        self.started = true;
    }

    /// Routes one frontend input. `Quit` is left to the caller.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::Confirm => match self.phase {
                Phase::Intro => self.start(now),
                Phase::GameOver => self.restart(now),
                Phase::Playing => {}
            },
            GameInput::Quit => {}
        }
    }

    /// Runs one tick when the clock is due. Returns whether a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.clock.poll(now) {
            return false;
        }

        self.step(now);
        true
    }

    /// Advances the simulation by one tick. No-op unless playing.
    pub fn step(&mut self, now: Instant) {
        if self.phase != Phase::Playing {
            return;
        }

        let direction = match self.pending.take() {
            Some(next) if direction_change_is_valid(self.board.direction(), next) => Some(next),
            _ => self.board.direction(),
        };
        self.board.advance(direction);

        if is_self_collision(self.board.snake(), self.started) {
            self.finish();
        } else if self.board.head_on_food() {
            self.eat_food(now);
        }

        self.render();
    }

    /// Puts the food on a chosen cell for scripted scenarios.
    ///
    /// Returns false, leaving the food where it was, when the cell is off
    /// the grid or under the snake.
    pub fn place_food(&mut self, food: Position) -> bool {
        if !food.is_within_bounds(self.board.bounds()) || self.board.snake().occupies(food) {
            return false;
        }

        self.board.set_food(food);
        true
    }

    fn begin(&mut self, now: Instant) {
        self.board = fresh_board(&self.config, &mut self.placer);
        self.engine.reset();
        self.pending = None;
        self.started = false;
        self.final_score = None;
        self.high_score = self.collaborators.high_scores.get().unwrap_or(0);
        self.phase = Phase::Playing;
        self.clock.reset(self.config.initial_interval(), now);

        let sink = &mut self.collaborators.score_sink;
        sink.on_high_score(self.high_score);
        sink.on_score_changed(self.engine.score());
        sink.on_level_changed(self.engine.level());

        info!(
            grid = self.config.grid_size,
            interval_ms = self.config.initial_interval_ms,
            high_score = self.high_score,
            "game started"
        );
        self.render();
    }

    fn eat_food(&mut self, now: Instant) {
        self.board.grow();
        let eaten = self.engine.on_food_eaten();
        self.collaborators.score_sink.on_score_changed(eaten.score);

        if let Some(level_up) = eaten.level_up {
            self.clock.reset(level_up.interval, now);
            self.collaborators.score_sink.on_level_changed(level_up.level);
            debug!(
                level = level_up.level,
                interval = ?level_up.interval,
                "level up"
            );
        }

        if self.board.is_full() {
            info!(score = eaten.score, "no free cell left for food");
            self.finish();
            return;
        }

        let snake = self.board.snake();
        let food = self
            .placer
            .place(self.board.bounds(), |cell| snake.occupies(cell));
        self.board.set_food(food);
    }

    /// Enters game over. Safe to reach more than once; only the first call
    /// reports.
    fn finish(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }

        self.clock.stop();
        self.phase = Phase::GameOver;

        let score = self.engine.score();
        self.final_score = Some(score);

        let stored = self.collaborators.high_scores.get().unwrap_or(0);
        if score > stored {
            self.collaborators.high_scores.set(score);
            self.high_score = score;
        }

        self.collaborators.game_over_sink.on_game_over(score);
        info!(score, level = self.engine.level(), "game over");
    }

    fn render(&mut self) {
        let frame = RenderFrame {
            trail: self.board.snake().trail(),
            food: self.board.food(),
            bounds: self.board.bounds(),
            block_size: self.config.block_size,
        };
        self.collaborators.renderer.render(&frame);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the player has given a direction this game.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Direction applied on the last tick; `None` while stationary.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.board.direction()
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        self.board.snake()
    }

    #[must_use]
    pub fn trail(&self) -> &VecDeque<Position> {
        self.board.snake().trail()
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.board.food()
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.board.bounds()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.engine.level()
    }

    #[must_use]
    pub fn apples(&self) -> u32 {
        self.engine.apples()
    }

    /// Current tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.clock.interval()
    }

    /// Time left before the next tick; `None` while the clock is stopped.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.time_until_due(now)
    }

    /// Stored high score as of the last start, raised on a new record.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn fresh_board<R: Rng>(config: &GameConfig, placer: &mut RandomPlacer<R>) -> Board {
    let snake = Snake::new(config.start_position(), config.initial_capacity);
    let food = placer.place(config.grid(), |cell| snake.occupies(cell));
    Board::new(config.grid(), snake, config.initial_direction, food)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use crate::config::GameConfig;
    use crate::input::{Direction, GameInput};
    use crate::sinks::{
        Collaborators, GameOverSink, HighScoreStore, RenderFrame, Renderer, ScoreSink,
    };
    use crate::snake::Position;

    use super::{GameSession, Phase};

    #[derive(Debug, Default)]
    struct Log {
        frames: usize,
        scores: Vec<u32>,
        levels: Vec<u32>,
        game_overs: Vec<u32>,
        stored: Option<u32>,
        sets: Vec<u32>,
    }

    #[derive(Debug, Clone, Default)]
    struct Recorder(Rc<RefCell<Log>>);

    impl Renderer for Recorder {
        fn render(&mut self, _frame: &RenderFrame<'_>) {
            self.0.borrow_mut().frames += 1;
        }
    }

    impl ScoreSink for Recorder {
        fn on_score_changed(&mut self, score: u32) {
            self.0.borrow_mut().scores.push(score);
        }

        fn on_level_changed(&mut self, level: u32) {
            self.0.borrow_mut().levels.push(level);
        }
    }

    impl GameOverSink for Recorder {
        fn on_game_over(&mut self, final_score: u32) {
            self.0.borrow_mut().game_overs.push(final_score);
        }
    }

    impl HighScoreStore for Recorder {
        fn get(&self) -> Option<u32> {
            self.0.borrow().stored
        }

        fn set(&mut self, score: u32) {
            let mut log = self.0.borrow_mut();
            log.sets.push(score);
            log.stored = Some(score);
        }
    }

    fn collaborators(recorder: &Recorder) -> Collaborators {
        Collaborators {
            renderer: Box::new(recorder.clone()),
            score_sink: Box::new(recorder.clone()),
            game_over_sink: Box::new(recorder.clone()),
            high_scores: Box::new(recorder.clone()),
        }
    }

    fn moving_right_config() -> GameConfig {
        GameConfig {
            grid_size: 20,
            initial_capacity: 4,
            start: Some(Position::new(10, 10)),
            initial_direction: Some(Direction::Right),
            ..GameConfig::default()
        }
    }

    fn playing_session(config: GameConfig, recorder: &Recorder) -> (GameSession, Instant) {
        let mut session = GameSession::with_seed(config, 11, collaborators(recorder));
        let now = Instant::now();
        session.start(now);
        assert!(session.place_food(Position::new(0, 0)), "parking cell should be free");
        (session, now)
    }

    /// Puts food directly ahead of the head, then ticks onto it.
    fn eat_ahead(session: &mut GameSession, now: Instant) {
        let direction = session.direction().expect("snake should be moving");
        let ahead = session.snake().head().stepped(direction).wrapped(session.bounds());
        assert!(session.place_food(ahead), "cell ahead should be free");
        session.step(now);
    }

    #[test]
    fn intro_does_not_tick() {
        let recorder = Recorder::default();
        let mut session =
            GameSession::with_seed(moving_right_config(), 1, collaborators(&recorder));
        let now = Instant::now();

        session.step(now);
        assert!(!session.poll(now + Duration::from_secs(5)));

        assert_eq!(session.phase(), Phase::Intro);
        assert_eq!(session.snake().head(), Position::new(10, 10));
        assert_eq!(session.time_until_tick(now), None);
    }

    #[test]
    fn start_arms_clock_and_ticks_move_the_head() {
        let recorder = Recorder::default();
        let (mut session, t0) = playing_session(moving_right_config(), &recorder);

        assert_eq!(session.phase(), Phase::Playing);
        assert!(!session.poll(t0 + Duration::from_millis(199)));
        assert!(session.poll(t0 + Duration::from_millis(200)));

        assert_eq!(session.snake().head(), Position::new(11, 10));
    }

    #[test]
    fn food_never_starts_under_the_snake() {
        let recorder = Recorder::default();
        let (session, _) = playing_session(moving_right_config(), &recorder);

        assert!(!session.snake().occupies(session.food()));
    }

    #[test]
    fn reversal_does_not_change_applied_direction() {
        let recorder = Recorder::default();
        let (mut session, now) = playing_session(moving_right_config(), &recorder);

        session.set_direction(Direction::Left);
        session.step(now);

        assert_eq!(session.direction(), Some(Direction::Right));
        assert_eq!(session.snake().head(), Position::new(11, 10));
    }

    #[test]
    fn last_valid_intent_before_tick_wins() {
        let recorder = Recorder::default();
        let (mut session, now) = playing_session(moving_right_config(), &recorder);

        session.set_direction(Direction::Up);
        session.set_direction(Direction::Left);
        session.set_direction(Direction::Down);
        session.step(now);

        assert_eq!(session.direction(), Some(Direction::Down));
        assert_eq!(session.snake().head(), Position::new(10, 11));
    }

    #[test]
    fn intent_before_start_is_discarded() {
        let recorder = Recorder::default();
        let mut session =
            GameSession::with_seed(moving_right_config(), 2, collaborators(&recorder));
        let now = Instant::now();

        session.set_direction(Direction::Down);
        session.start(now);

        assert!(!session.is_started());
        assert_eq!(session.pending_direction(), None);
        session.step(now);
        assert_eq!(session.snake().head(), Position::new(11, 10));
    }

    #[test]
    fn growth_is_exactly_one_segment() {
        let recorder = Recorder::default();
        let (mut session, now) = playing_session(moving_right_config(), &recorder);
        for _ in 0..4 {
            session.step(now);
        }
        assert_eq!(session.trail().len(), 4);

        eat_ahead(&mut session, now);
        assert_eq!(session.snake().capacity(), 5);
        assert_eq!(session.trail().len(), 4);

        assert!(session.place_food(Position::new(0, 0)));
        session.step(now);
        assert_eq!(session.trail().len(), 5);

        session.step(now);
        assert_eq!(session.trail().len(), 5);
    }

    #[test]
    fn score_is_weighted_by_level() {
        let recorder = Recorder::default();
        let config = GameConfig {
            start: Some(Position::new(0, 5)),
            ..moving_right_config()
        };
        let (mut session, now) = playing_session(config, &recorder);

        for _ in 0..5 {
            eat_ahead(&mut session, now);
        }
        assert_eq!(session.score(), 5);
        assert_eq!(session.level(), 2);
        assert_eq!(session.interval(), Duration::from_millis(190));

        eat_ahead(&mut session, now);
        eat_ahead(&mut session, now);
        assert_eq!(session.score(), 9);
        assert_eq!(session.apples(), 7);

        let log = recorder.0.borrow();
        assert_eq!(log.scores, vec![0, 1, 2, 3, 4, 5, 7, 9]);
        assert_eq!(log.levels, vec![1, 2]);
    }

    #[test]
    fn level_up_resets_clock_to_new_interval() {
        let recorder = Recorder::default();
        let config = GameConfig {
            apples_per_level: 1,
            ..moving_right_config()
        };
        let (mut session, t0) = playing_session(config, &recorder);

        let t1 = t0 + Duration::from_millis(200);
        let direction = session.direction().expect("moving");
        let ahead = session.snake().head().stepped(direction);
        assert!(session.place_food(ahead));
        assert!(session.poll(t1));

        assert_eq!(session.interval(), Duration::from_millis(190));
        assert_eq!(session.time_until_tick(t1), Some(Duration::from_millis(190)));
    }

    #[test]
    fn stationary_spawn_does_not_collide_before_first_intent() {
        let recorder = Recorder::default();
        let config = GameConfig {
            initial_direction: None,
            ..moving_right_config()
        };
        let (mut session, now) = playing_session(config, &recorder);

        for _ in 0..10 {
            session.step(now);
        }

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.trail().len(), 4);
        assert!(session.trail().iter().all(|cell| *cell == Position::new(10, 10)));

        session.set_direction(Direction::Up);
        session.step(now);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.snake().head(), Position::new(10, 9));
    }

    #[test]
    fn game_over_is_reported_once_and_freezes_ticks() {
        let recorder = Recorder::default();
        let config = GameConfig {
            initial_capacity: 5,
            ..moving_right_config()
        };
        let (mut session, now) = playing_session(config, &recorder);
        for _ in 0..4 {
            session.step(now);
        }

        session.set_direction(Direction::Down);
        session.step(now);
        session.set_direction(Direction::Left);
        session.step(now);
        session.set_direction(Direction::Up);
        session.step(now);

        assert_eq!(session.phase(), Phase::GameOver);
        let head = session.snake().head();
        for _ in 0..5 {
            session.step(now);
            assert!(!session.poll(now + Duration::from_secs(10)));
        }

        assert_eq!(session.snake().head(), head);
        assert_eq!(recorder.0.borrow().game_overs, vec![0]);
        assert_eq!(session.final_score(), Some(0));
    }

    #[test]
    fn high_score_is_written_only_when_beaten() {
        let recorder = Recorder::default();
        recorder.0.borrow_mut().stored = Some(10);
        let config = GameConfig {
            start: Some(Position::new(0, 5)),
            initial_capacity: 3,
            apples_per_level: 100,
            ..moving_right_config()
        };
        let (mut session, now) = playing_session(config, &recorder);
        for _ in 0..8 {
            eat_ahead(&mut session, now);
        }
        crash(&mut session, now);
        assert_eq!(session.final_score(), Some(8));
        assert!(recorder.0.borrow().sets.is_empty());
        assert_eq!(session.high_score(), 10);

        session.restart(now);
        for _ in 0..12 {
            eat_ahead(&mut session, now);
        }
        crash(&mut session, now);

        let log = recorder.0.borrow();
        assert_eq!(log.sets, vec![12]);
        assert_eq!(log.stored, Some(12));
        assert_eq!(session.high_score(), 12);
    }

    #[test]
    fn restart_restores_original_configuration() {
        let recorder = Recorder::default();
        let config = GameConfig {
            start: Some(Position::new(0, 5)),
            apples_per_level: 2,
            ..moving_right_config()
        };
        let (mut session, now) = playing_session(config, &recorder);
        for _ in 0..6 {
            eat_ahead(&mut session, now);
        }
        assert_eq!(session.level(), 4);
        crash(&mut session, now);

        session.handle_input(GameInput::Confirm, now);

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.apples(), 0);
        assert_eq!(session.interval(), Duration::from_millis(200));
        assert_eq!(session.snake().capacity(), 4);
        assert_eq!(session.trail().len(), 1);
        assert_eq!(session.snake().head(), Position::new(0, 5));
        assert_eq!(session.direction(), Some(Direction::Right));
        assert!(!session.is_started());
        assert_eq!(session.final_score(), None);
    }

    #[test]
    fn lifecycle_triggers_are_phase_checked() {
        let recorder = Recorder::default();
        let mut session =
            GameSession::with_seed(moving_right_config(), 5, collaborators(&recorder));
        let now = Instant::now();

        session.restart(now);
        assert_eq!(session.phase(), Phase::Intro);

        session.handle_input(GameInput::Confirm, now);
        assert_eq!(session.phase(), Phase::Playing);

        session.step(now);
        session.start(now);
        assert_eq!(session.snake().head(), Position::new(11, 10));
    }

    #[test]
    fn renderer_runs_once_per_tick() {
        let recorder = Recorder::default();
        let (mut session, now) = playing_session(moving_right_config(), &recorder);
        let after_start = recorder.0.borrow().frames;

        for _ in 0..3 {
            session.step(now);
        }

        assert_eq!(recorder.0.borrow().frames, after_start + 3);
    }

    /// Seeded generator that counts how often it is drawn from.
    struct CountingRng {
        inner: StdRng,
        draws: Rc<Cell<usize>>,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws.set(self.draws.get() + 1);
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws.set(self.draws.get() + 1);
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws.set(self.draws.get() + 1);
            self.inner.fill_bytes(dest);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.draws.set(self.draws.get() + 1);
            self.inner.try_fill_bytes(dest)
        }
    }

    #[test]
    fn filling_every_cell_ends_the_game_without_placing_food() {
        let recorder = Recorder::default();
        let draws = Rc::new(Cell::new(0));
        let rng = CountingRng {
            inner: StdRng::seed_from_u64(6),
            draws: Rc::clone(&draws),
        };
        let config = GameConfig {
            grid_size: 2,
            initial_capacity: 3,
            start: Some(Position::new(0, 0)),
            initial_direction: Some(Direction::Right),
            ..GameConfig::default()
        };
        let mut session = GameSession::new(config, rng, collaborators(&recorder));
        let now = Instant::now();
        session.start(now);
        assert!(session.place_food(Position::new(1, 1)));

        session.step(now);
        session.set_direction(Direction::Down);
        session.step(now);
        assert_eq!(session.apples(), 1);
        // (0, 1) is the only free cell left, so the food must be there.
        assert_eq!(session.food(), Position::new(0, 1));

        let draws_before_last_apple = draws.get();
        session.set_direction(Direction::Left);
        session.step(now);

        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.snake().distinct_cells(), 4);
        assert_eq!(draws.get(), draws_before_last_apple);
        assert_eq!(recorder.0.borrow().game_overs, vec![2]);

        session.step(now);
        assert_eq!(recorder.0.borrow().game_overs, vec![2]);
    }

    #[test]
    fn stacked_spawn_trail_does_not_count_as_full_board() {
        let recorder = Recorder::default();
        let config = GameConfig {
            grid_size: 3,
            initial_capacity: 8,
            start: Some(Position::new(1, 1)),
            initial_direction: None,
            ..GameConfig::default()
        };
        let (mut session, now) = playing_session(config, &recorder);
        for _ in 0..8 {
            session.step(now);
        }
        assert_eq!(session.trail().len(), 8);

        session.set_direction(Direction::Right);
        assert!(session.place_food(Position::new(2, 1)));
        session.step(now);
        assert!(session.place_food(Position::new(0, 1)));
        session.step(now);

        assert_eq!(session.apples(), 2);
        assert_eq!(session.trail().len(), 9);
        assert_eq!(session.phase(), Phase::Playing);
        assert!(!session.snake().occupies(session.food()));
        assert!(recorder.0.borrow().game_overs.is_empty());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "game session needs a valid config")]
    fn empty_grid_is_rejected_at_construction() {
        let config = GameConfig {
            grid_size: 0,
            ..GameConfig::default()
        };

        let _ = GameSession::with_seed(config, 1, Collaborators::default());
    }

    /// Loops the snake into itself: down, left, up.
    fn crash(session: &mut GameSession, now: Instant) {
        assert!(session.place_food(Position::new(19, 19)));
        session.set_direction(Direction::Down);
        session.step(now);
        session.set_direction(Direction::Left);
        session.step(now);
        session.set_direction(Direction::Up);
        session.step(now);
        assert_eq!(session.phase(), Phase::GameOver);
    }
}
