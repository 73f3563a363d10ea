//! Pure position-equality and wall-bound predicates.

use crate::config::{WALL_MAX, WALL_MIN};
use crate::snake::Snake;
use crate::types::Position;

/// Two entities collide when they occupy the same cell.
pub fn same_cell(a: Position, b: Position) -> bool {
    a == b
}

/// True when any tail block sits on the head's cell.
pub fn self_collision(head: Position, snake: &Snake) -> bool {
    snake.tail().any(|block| block.pos == head)
}

/// The playable area runs one cell past the board on every side.
pub fn wall_collision(head: Position) -> bool {
    head.x > WALL_MAX || head.x < WALL_MIN || head.y > WALL_MAX || head.y < WALL_MIN
}
