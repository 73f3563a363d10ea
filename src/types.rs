//! Basic types for the board: directions, positions and the entities
//! that occupy cells.

use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The heading that would reverse the snake into its own neck.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Offset of one cell of movement, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Half a cell, the curvature a turn puts on its outer corner.
const HALF_CELL: f32 = 0.5;

/// Curvature hint for drawing a block: one value for all four corners,
/// or a separate value per corner. Rendering metadata only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerRadius {
    Uniform(f32),
    PerCorner { tl: f32, tr: f32, bl: f32, br: f32 },
}

impl CornerRadius {
    pub const NONE: CornerRadius = CornerRadius::Uniform(0.0);

    /// Curvature left on the block a turn pivoted over, from the heading
    /// before and after the turn.
    pub fn from_turn(from: Direction, to: Direction) -> Self {
        use Direction::*;
        let flag = |on: bool| if on { HALF_CELL } else { 0.0 };
        CornerRadius::PerCorner {
            tl: flag((to == Right && from == Up) || (to == Down && from == Left)),
            tr: flag((to == Down && from == Right) || (to == Left && from == Up)),
            br: flag((to == Left && from == Down) || (to == Up && from == Right)),
            bl: flag((to == Up && from == Left) || (to == Right && from == Down)),
        }
    }
}

/// One cell of the snake's body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    pub pos: Position,
    pub heading: Direction,
    pub is_corner: bool,
    pub radius: CornerRadius,
}

impl Block {
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            pos: Position::new(x, y),
            heading,
            is_corner: false,
            radius: CornerRadius::NONE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fruit {
    pub pos: Position,
    pub symbol: char,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bomb {
    pub pos: Position,
    pub symbol: char,
}

/// Map a pressed key to the direction it requests. WASD and the arrow
/// keys steer; every other key decodes to nothing.
pub fn decode_direction_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn step_moves_one_cell() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
        assert_eq!(p.step(Direction::Down), Position::new(5, 6));
        assert_eq!(p.step(Direction::Left), Position::new(4, 5));
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn wasd_and_arrows_decode() {
        assert_eq!(decode_direction_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(decode_direction_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(decode_direction_key(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(decode_direction_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(decode_direction_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(decode_direction_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(decode_direction_key(KeyCode::Char('d')), Some(Direction::Right));
        assert_eq!(decode_direction_key(KeyCode::Right), Some(Direction::Right));
        assert_eq!(decode_direction_key(KeyCode::Char('x')), None);
        assert_eq!(decode_direction_key(KeyCode::Enter), None);
    }

    #[test]
    fn turn_curvature_lands_on_the_outer_corner() {
        // Heading right, turning down: the pivot rounds at its top-right.
        let radius = CornerRadius::from_turn(Direction::Right, Direction::Down);
        assert_eq!(
            radius,
            CornerRadius::PerCorner {
                tl: 0.0,
                tr: 0.5,
                bl: 0.0,
                br: 0.0
            }
        );

        // Heading up, turning right: top-left.
        let radius = CornerRadius::from_turn(Direction::Up, Direction::Right);
        assert_eq!(
            radius,
            CornerRadius::PerCorner {
                tl: 0.5,
                tr: 0.0,
                bl: 0.0,
                br: 0.0
            }
        );
    }
}
