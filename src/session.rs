//! One game session: the state, its timers and the tick cadence.
//!
//! The session is driven by elapsed time. The binary feeds it wall-clock
//! deltas from the render loop; tests feed it synthetic ones, so the
//! whole lifecycle runs without sleeping.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{BOMB_PERIOD_MS, COUNTER_PERIOD_MS};
use crate::engine::{GameState, TickOutcome};
use crate::timer::{IntervalTimers, TimerEvent};
use crate::types::Direction;

pub struct Session<R: Rng> {
    state: GameState,
    timers: IntervalTimers,
    /// Stand-in for the render-loop handle; owned per session so
    /// parallel sessions never cancel each other.
    loop_running: bool,
    move_elapsed_ms: f64,
    rng: R,
}

impl Session<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let state = GameState::initial(&mut rng);
        Self {
            state,
            timers: IntervalTimers::new(),
            loop_running: false,
            move_elapsed_ms: 0.0,
            rng,
        }
    }

    /// Read-only view of the current state, for rendering and tests.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.loop_running
    }

    /// Begin play. A still-live loop from an earlier run is cancelled
    /// first, so starting twice never doubles the timers.
    pub fn start(&mut self) {
        if self.loop_running {
            self.stop();
        }
        self.timers
            .register(COUNTER_PERIOD_MS as f64, TimerEvent::Counter);
        self.timers
            .register(BOMB_PERIOD_MS as f64, TimerEvent::BombRespawn);
        self.state.is_playing = true;
        self.loop_running = true;
        info!("session started");
    }

    /// Cancel the loop and every interval. Safe to call when already
    /// stopped.
    pub fn stop(&mut self) {
        self.loop_running = false;
        self.timers.clear();
    }

    /// Tear everything down and rebuild the initial state.
    pub fn reset(&mut self) {
        self.stop();
        self.state = GameState::initial(&mut self.rng);
        self.move_elapsed_ms = 0.0;
        info!("session reset");
    }

    pub fn request_direction(&mut self, direction: Direction) {
        self.state.request_direction(direction);
    }

    /// Drive the session forward by `dt_ms` of elapsed time: fire due
    /// interval timers, run movement ticks at the current speed, then do
    /// the per-frame upkeep. Does nothing once stopped.
    pub fn advance(&mut self, dt_ms: f64) {
        if !self.loop_running {
            return;
        }

        for event in self.timers.advance(dt_ms) {
            match event {
                TimerEvent::Counter => self.state.advance_counters(COUNTER_PERIOD_MS),
                TimerEvent::BombRespawn => {
                    self.state.activate_bomb(&mut self.rng);
                    debug!("bomb armed at {:?}", self.state.bomb.pos);
                }
            }
        }

        if !self.state.is_playing || self.state.is_game_over {
            return;
        }

        self.move_elapsed_ms += dt_ms;
        while self.move_elapsed_ms >= self.state.speed {
            self.move_elapsed_ms -= self.state.speed;
            match self.state.tick(&mut self.rng) {
                TickOutcome::Moved => {}
                TickOutcome::AteFruit => {
                    debug!("apple eaten, score {}", self.state.score);
                }
                TickOutcome::Died(cause) => {
                    info!("game over ({cause:?}), score {}", self.state.score);
                    self.stop();
                    return;
                }
            }
        }

        self.state.expire_timers(&mut self.rng);
    }
}
