use crate::snake::Snake;

/// True when the head shares a cell with any other trail segment.
///
/// Nothing counts until the player has moved: a snake waiting at its spawn
/// cell has every segment stacked on the head.
#[must_use]
pub fn is_self_collision(snake: &Snake, started: bool) -> bool {
    started && snake.head_overlaps_body()
}

#[cfg(test)]
mod tests {
    use crate::snake::{Position, Snake};

    use super::is_self_collision;

    #[test]
    fn stacked_spawn_is_not_a_collision_before_start() {
        let spawn = Position::new(10, 10);
        let snake = Snake::from_segments(vec![spawn, spawn, spawn], 3);

        assert!(!is_self_collision(&snake, false));
        assert!(is_self_collision(&snake, true));
    }

    #[test]
    fn straight_snake_never_collides() {
        let snake = Snake::from_segments(
            vec![Position::new(3, 1), Position::new(2, 1), Position::new(1, 1)],
            3,
        );

        assert!(!is_self_collision(&snake, true));
    }

    #[test]
    fn head_on_tail_segment_collides() {
        let snake = Snake::from_segments(
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(2, 1),
                Position::new(1, 1),
            ],
            5,
        );

        assert!(is_self_collision(&snake, true));
    }
}
