use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Snake, heading, and food on a toroidal grid.
///
/// The grid has no walls: leaving one edge re-enters at the opposite edge.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: GridSize,
    snake: Snake,
    direction: Option<Direction>,
    food: Position,
}

impl Board {
    #[must_use]
    pub fn new(
        bounds: GridSize,
        snake: Snake,
        direction: Option<Direction>,
        food: Position,
    ) -> Self {
        Self {
            bounds,
            snake,
            direction,
            food,
        }
    }

    /// Moves the head one cell in `direction` (or keeps it still when `None`),
    /// wrapping at the edges, then trims the trail to capacity.
    ///
    /// Returns the new head.
    pub fn advance(&mut self, direction: Option<Direction>) -> Position {
        self.direction = direction;

        let head = self.snake.head();
        let next = match direction {
            Some(direction) => head.stepped(direction).wrapped(self.bounds),
            None => head,
        };

        self.snake.push_head(next);
        next
    }

    /// True when the head sits on the food cell.
    #[must_use]
    pub fn head_on_food(&self) -> bool {
        self.snake.head() == self.food
    }

    pub fn set_food(&mut self, food: Position) {
        self.food = food;
    }

    pub fn grow(&mut self) {
        self.snake.grow();
    }

    /// True when every cell already holds a snake segment.
    ///
    /// Counts distinct cells, since a snake waiting at spawn stacks the same
    /// cell many times.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.snake.distinct_cells() >= self.bounds.total_cells()
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }
}
