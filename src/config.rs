//! Board geometry and pacing constants.

/// The board spans this many cells per axis.
pub const BOARD_CELLS: i32 = 20;

/// Fruit and bombs spawn on cells in `1..=SPAWN_BOUND` per axis.
pub const SPAWN_BOUND: i32 = BOARD_CELLS - 2;

/// Walls sit one cell past the board edge on every side.
pub const WALL_MAX: i32 = BOARD_CELLS;
pub const WALL_MIN: i32 = -1;

pub const FRUIT_SYMBOLS: &[char] = &['*'];
pub const BOMB_SYMBOLS: &[char] = &['@'];

/// Starting interval between movement ticks, in milliseconds.
pub const SNAKE_SPEED_MS: f64 = 100.0;

/// Target cadence of the render/upkeep frame.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// An uneaten apple respawns after this long.
pub const APPLE_TIMEOUT_MS: u32 = 10_000;

/// The bomb arms and relocates on this period.
pub const BOMB_PERIOD_MS: u32 = 30_000;

/// The apple/bomb elapsed-time counters step on this period.
pub const COUNTER_PERIOD_MS: u32 = 1_000;

/// Tick interval multiplier applied every [`SPEED_STEP_EVERY`]th apple.
pub const SPEED_STEP: f64 = 1.25;
pub const SPEED_STEP_EVERY: u32 = 5;

/// Each apple is worth this many display points.
pub const POINTS_PER_APPLE: u32 = 100;
