//! Game resources (singleton state).

use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Duration;

use super::{ConfigError, DEFAULT_DELAY, Direction, GameConfig, Position};
use crate::food::spawn_food;
use crate::snake::{build_body, choose_start_head};

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Stopped,
    Running,
}

/// What a single [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake was empty and nothing moved.
    Skipped,
    Moved { reflected: bool },
    Ate { score: u32 },
}

/// Main game state resource.
///
/// Renderers read the public fields; all mutation during play goes through
/// [`start`](Self::start), [`tick`](Self::tick),
/// [`set_direction`](Self::set_direction) and
/// [`change_speed`](Self::change_speed).
#[derive(Resource, Debug)]
pub struct GameState {
    config: GameConfig,
    /// Body segments, head first.
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    /// Tick interval in milliseconds.
    pub delay: u64,
    pub phase: GamePhase,
    rng: StdRng,
}

impl GameState {
    /// Creates a stopped game seeded from the operating system.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a stopped game with a deterministic random sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GameState {
            delay: config.default_delay,
            config,
            snake: Vec::new(),
            food: None,
            direction: Direction::Right,
            score: 0,
            phase: GamePhase::Stopped,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Resets everything and begins a new round with a random snake.
    pub fn start(&mut self) {
        self.direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
        let head = choose_start_head(&mut self.rng, &self.config, self.direction);
        self.snake = build_body(&self.config, head, self.direction);
        if self.snake.len() < self.config.initial_length {
            warn!(
                "Board too small for a snake of length {}, starting with {}",
                self.config.initial_length,
                self.snake.len()
            );
        }

        self.place_food();
        self.score = 0;
        self.delay = self.config.default_delay;
        self.phase = GamePhase::Running;
        info!(
            "New round: head {:?} moving {:?}, food at {:?}",
            head, self.direction, self.food
        );
    }

    /// Moves the food to a random cell not covered by the snake.
    pub fn place_food(&mut self) {
        self.food = spawn_food(&mut self.rng, &self.config, &self.snake);
        if self.food.is_none() {
            warn!("No free cell left for food");
        }
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(&old_head) = self.snake.first() else {
            warn!("Attempt to move an empty snake");
            return TickOutcome::Skipped;
        };
        debug!(
            "Snake moving. Direction: {:?}, Score: {}",
            self.direction, self.score
        );

        // Each segment takes the place of the one in front of it
        let len = self.snake.len();
        self.snake.copy_within(0..len - 1, 1);

        let mut new_head = old_head.step(self.direction, self.config.unit);
        let reflected = self.reflect(&mut new_head);
        self.snake[0] = new_head;

        if self.food == Some(new_head) {
            self.score += 1;
            let tail = self.snake[self.snake.len() - 1];
            self.snake.push(tail);
            self.place_food();
            return TickOutcome::Ate { score: self.score };
        }

        TickOutcome::Moved { reflected }
    }

    /// Clamps `head` onto the board, turning the snake around on each axis it
    /// left through. Returns whether any clamping happened.
    fn reflect(&mut self, head: &mut Position) -> bool {
        let GameConfig {
            width,
            height,
            unit,
            ..
        } = self.config;
        let mut reflected = false;

        if head.x < 0 {
            head.x = 0;
            if self.direction == Direction::Left {
                self.direction = Direction::Right;
            }
            reflected = true;
        } else if head.x >= width {
            head.x = width - unit;
            if self.direction == Direction::Right {
                self.direction = Direction::Left;
            }
            reflected = true;
        }

        if head.y < 0 {
            head.y = 0;
            if self.direction == Direction::Up {
                self.direction = Direction::Down;
            }
            reflected = true;
        } else if head.y >= height {
            head.y = height - unit;
            if self.direction == Direction::Down {
                self.direction = Direction::Up;
            }
            reflected = true;
        }

        reflected
    }

    /// Player-requested turn. Reversing straight into the body is refused.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Shifts the tick delay by `delta` milliseconds within the configured
    /// bounds and returns the new delay.
    pub fn change_speed(&mut self, delta: i64) -> u64 {
        let min = self.config.min_delay as i64;
        let max = self.config.max_delay as i64;
        self.delay = (self.delay as i64 + delta).clamp(min, max) as u64;
        self.delay
    }

    /// Speed on the display scale, higher is faster.
    pub fn speed_level(&self) -> u64 {
        (self.config.max_delay - self.delay + self.config.min_delay) / 10
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}

/// Periodic clock driving [`GameState::tick`].
#[derive(Resource)]
pub struct TickClock {
    pub timer: Timer,
}

impl Default for TickClock {
    fn default() -> Self {
        TickClock::new(DEFAULT_DELAY)
    }
}

impl TickClock {
    pub fn new(delay_ms: u64) -> Self {
        TickClock {
            timer: Timer::new(Duration::from_millis(delay_ms), TimerMode::Repeating),
        }
    }

    /// Replaces the timer so the next tick fires a full `delay_ms` from now.
    pub fn restart(&mut self, delay_ms: u64) {
        *self = TickClock::new(delay_ms);
    }

    pub fn interval(&self) -> Duration {
        self.timer.duration()
    }
}
