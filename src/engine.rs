//! Game state and the pure transitions that drive it: queued direction
//! changes, the per-tick movement/collision resolution, counter and
//! bomb timer effects, and the score/speed curve.

use std::collections::VecDeque;

use rand::Rng;

use crate::collision::{same_cell, self_collision, wall_collision};
use crate::config::{
    APPLE_TIMEOUT_MS, BOMB_PERIOD_MS, BOMB_SYMBOLS, FRUIT_SYMBOLS, POINTS_PER_APPLE, SNAKE_SPEED_MS,
    SPAWN_BOUND, SPEED_STEP, SPEED_STEP_EVERY,
};
use crate::snake::Snake;
use crate::spawn::{random_bomb, random_fruit};
use crate::types::{Block, Bomb, Direction, Fruit, Position};

/// What a movement tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteFruit,
    Died(DeathCause),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    SelfBite,
    Bomb,
}

/// Full simulation state for one playthrough.
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub moves: VecDeque<Direction>,
    pub fruit: Fruit,
    pub bomb: Bomb,
    pub bomb_active: bool,
    pub is_playing: bool,
    pub is_game_over: bool,
    /// Interval between movement ticks, in milliseconds.
    pub speed: f64,
    pub score: u32,
    pub apple_counter_ms: u32,
    pub bomb_counter_ms: u32,
}

impl GameState {
    /// Fresh state: the snake parked on its starting row, one apple on
    /// the board, the bomb parked off-board and inert.
    pub fn initial(rng: &mut impl Rng) -> Self {
        let snake = Snake::new(vec![
            Block::new(5, 1, Direction::Right),
            Block::new(4, 1, Direction::Right),
        ]);
        let fruit = random_fruit(rng, &snake, SPAWN_BOUND, FRUIT_SYMBOLS);

        Self {
            snake,
            moves: VecDeque::from([Direction::Right]),
            fruit,
            bomb: Bomb {
                pos: Position::new(-100, -100),
                symbol: BOMB_SYMBOLS[0],
            },
            bomb_active: false,
            is_playing: false,
            is_game_over: false,
            speed: SNAKE_SPEED_MS,
            score: 0,
            apple_counter_ms: 0,
            bomb_counter_ms: 0,
        }
    }

    /// Queue a direction change. Requests that repeat the pending
    /// heading or reverse straight into the neck are dropped.
    pub fn request_direction(&mut self, requested: Direction) {
        let current = self
            .moves
            .back()
            .copied()
            .unwrap_or(self.snake.head().heading);
        if requested == current || requested == current.opposite() {
            return;
        }
        self.moves.push_back(requested);
    }

    /// Advance the snake one cell, consuming one queued move, and
    /// resolve whatever the new head ran into. Callers only issue ticks
    /// while the game is live; after game over the loop is cancelled.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        let direction = self
            .moves
            .pop_front()
            .unwrap_or(self.snake.head().heading);
        self.snake.advance(direction);
        let head = self.snake.head().pos;

        let bit_self = self_collision(head, &self.snake);
        if bit_self || wall_collision(head) {
            return self.die(if bit_self {
                DeathCause::SelfBite
            } else {
                DeathCause::Wall
            });
        }

        if self.bomb_active && same_cell(head, self.bomb.pos) {
            return self.die(DeathCause::Bomb);
        }

        if same_cell(head, self.fruit.pos) {
            self.consume_fruit(rng);
            return TickOutcome::AteFruit;
        }

        TickOutcome::Moved
    }

    fn die(&mut self, cause: DeathCause) -> TickOutcome {
        self.is_game_over = true;
        self.is_playing = false;
        TickOutcome::Died(cause)
    }

    /// Growth path: extend the tail, reset the apple clock, walk the
    /// score/speed curve, then drop a fresh apple clear of the snake.
    fn consume_fruit(&mut self, rng: &mut impl Rng) {
        self.apple_counter_ms = 0;
        self.snake.grow();

        // The interval check reads the score before this apple counts.
        if self.score > 0 && (self.score + 1) % SPEED_STEP_EVERY == 0 {
            self.speed *= SPEED_STEP;
        }
        self.score += 1;

        self.fruit = random_fruit(rng, &self.snake, SPAWN_BOUND, FRUIT_SYMBOLS);
    }

    /// One-second counter callback.
    pub fn advance_counters(&mut self, ms: u32) {
        self.apple_counter_ms += ms;
        self.bomb_counter_ms += ms;
    }

    /// Thirty-second bomb callback: relocate and arm. The active flag is
    /// never cleared once set.
    pub fn activate_bomb(&mut self, rng: &mut impl Rng) {
        self.bomb = random_bomb(rng, SPAWN_BOUND, BOMB_SYMBOLS);
        self.bomb_active = true;
    }

    /// Frame-time upkeep: wrap the bomb clock and force a stale apple to
    /// respawn somewhere off the snake.
    pub fn expire_timers(&mut self, rng: &mut impl Rng) {
        if self.bomb_counter_ms >= BOMB_PERIOD_MS {
            self.bomb_counter_ms = 0;
        }
        if self.apple_counter_ms >= APPLE_TIMEOUT_MS {
            self.apple_counter_ms = 0;
            self.fruit = random_fruit(rng, &self.snake, SPAWN_BOUND, FRUIT_SYMBOLS);
        }
    }

    /// Score shown to the player.
    pub fn display_score(&self) -> u32 {
        self.score * POINTS_PER_APPLE
    }
}
