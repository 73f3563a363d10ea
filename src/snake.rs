//! The snake's body and its two mutations: the per-tick shift and the
//! growth that follows an apple.

use std::collections::VecDeque;

use crate::types::{Block, CornerRadius, Direction, Position};

/// Ordered block sequence, head first. Always at least two blocks long.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    blocks: VecDeque<Block>,
}

impl Snake {
    pub fn new(blocks: Vec<Block>) -> Self {
        debug_assert!(blocks.len() >= 2);
        Self {
            blocks: VecDeque::from(blocks),
        }
    }

    pub fn head(&self) -> &Block {
        &self.blocks[0]
    }

    pub fn last(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    /// Every block except the head.
    pub fn tail(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().skip(1)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.blocks.iter().any(|block| block.pos == pos)
    }

    /// Advance one cell in `direction`: prepend the new head, drop the
    /// last block. A turn leaves its curvature on the previous head.
    pub fn advance(&mut self, direction: Direction) {
        let old_head = self.blocks[0];
        if direction != old_head.heading {
            self.blocks[0].is_corner = true;
            self.blocks[0].radius = CornerRadius::from_turn(old_head.heading, direction);
        }

        self.blocks.push_front(Block {
            pos: old_head.pos.step(direction),
            heading: direction,
            is_corner: false,
            radius: CornerRadius::NONE,
        });
        self.blocks.pop_back();
    }

    /// Extend the tail by one block, one cell out past the current last
    /// block and keeping its heading, so growth never leaves a gap.
    pub fn grow(&mut self) {
        let last = *self.last();
        self.blocks.push_back(Block {
            pos: last.pos.step(last.heading.opposite()),
            heading: last.heading,
            is_corner: false,
            radius: CornerRadius::NONE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_block_snake() -> Snake {
        Snake::new(vec![
            Block::new(5, 1, Direction::Right),
            Block::new(4, 1, Direction::Right),
        ])
    }

    #[test]
    fn advance_shifts_without_changing_length() {
        let mut snake = two_block_snake();
        snake.advance(Direction::Right);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head().pos, Position::new(6, 1));
        assert_eq!(snake.last().pos, Position::new(5, 1));
    }

    #[test]
    fn advance_marks_the_pivot_on_a_turn() {
        let mut snake = two_block_snake();
        snake.advance(Direction::Down);

        assert_eq!(snake.head().pos, Position::new(5, 2));
        assert_eq!(snake.head().heading, Direction::Down);
        assert!(!snake.head().is_corner);

        let pivot = snake.tail().next().unwrap();
        assert!(pivot.is_corner);
        assert_eq!(
            pivot.radius,
            CornerRadius::from_turn(Direction::Right, Direction::Down)
        );
    }

    #[test]
    fn straight_advance_leaves_no_corner() {
        let mut snake = two_block_snake();
        snake.advance(Direction::Right);
        assert!(snake.blocks().all(|block| !block.is_corner));
    }

    #[test]
    fn grow_extends_the_tail_outward() {
        let mut snake = two_block_snake();
        snake.grow();

        assert_eq!(snake.len(), 3);
        // Last block headed right, so the new one sits one cell to its left.
        assert_eq!(snake.last().pos, Position::new(3, 1));
        assert_eq!(snake.last().heading, Direction::Right);
    }
}
