use std::time::Duration;

use crate::config::GameConfig;

/// Level and interval progression parameters, fixed per game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScoreRules {
    pub initial_interval: Duration,
    pub interval_decrement: Duration,
    pub interval_floor: Duration,
    pub apples_per_level: u32,
}

impl From<&GameConfig> for ScoreRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            initial_interval: config.initial_interval(),
            interval_decrement: config.interval_decrement(),
            interval_floor: config.interval_floor(),
            apples_per_level: config.apples_per_level.max(1),
        }
    }
}

/// New level and tick interval after a level-up.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LevelUp {
    pub level: u32,
    pub interval: Duration,
}

/// Result of eating one apple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodEaten {
    pub score: u32,
    pub level_up: Option<LevelUp>,
}

/// Apple count, level, weighted score, and the tick interval they imply.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    rules: ScoreRules,
    apples: u32,
    level: u32,
    score: u32,
    interval: Duration,
}

impl ScoreEngine {
    #[must_use]
    pub fn new(rules: ScoreRules) -> Self {
        Self {
            rules,
            apples: 0,
            level: 1,
            score: 0,
            interval: rules.initial_interval,
        }
    }

    /// Back to level 1 with no apples and the initial interval.
    pub fn reset(&mut self) {
        *self = Self::new(self.rules);
    }

    /// Credits one apple worth the current level, then levels up on every
    /// `apples_per_level`-th apple while the interval is above the floor.
    pub fn on_food_eaten(&mut self) -> FoodEaten {
        self.apples += 1;
        self.score += self.level;

        let level_up = if self.apples % self.rules.apples_per_level == 0
            && self.interval > self.rules.interval_floor
        {
            self.level += 1;
            self.interval = self
                .interval
                .saturating_sub(self.rules.interval_decrement)
                .max(self.rules.interval_floor);
            Some(LevelUp {
                level: self.level,
                interval: self.interval,
            })
        } else {
            None
        };

        FoodEaten {
            score: self.score,
            level_up,
        }
    }

    #[must_use]
    pub fn apples(&self) -> u32 {
        self.apples
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
