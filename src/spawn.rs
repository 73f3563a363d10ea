//! Fruit and bomb placement.

use rand::Rng;

use crate::snake::Snake;
use crate::types::{Bomb, Fruit, Position};

fn random_cell(rng: &mut impl Rng, bound: i32) -> Position {
    Position::new(rng.gen_range(1..=bound), rng.gen_range(1..=bound))
}

/// Fresh fruit on a cell the snake does not occupy, showing a random
/// symbol from `symbols`.
pub fn random_fruit(rng: &mut impl Rng, snake: &Snake, bound: i32, symbols: &[char]) -> Fruit {
    let symbol = symbols[rng.gen_range(0..symbols.len())];
    let mut pos = random_cell(rng, bound);
    while snake.occupies(pos) {
        pos = random_cell(rng, bound);
    }
    Fruit { pos, symbol }
}

/// Fresh bomb anywhere in the spawn range. Bombs may land on the snake;
/// only the fruit spawn avoids it.
pub fn random_bomb(rng: &mut impl Rng, bound: i32, symbols: &[char]) -> Bomb {
    Bomb {
        pos: random_cell(rng, bound),
        symbol: symbols[0],
    }
}
