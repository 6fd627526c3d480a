//! Game constants for board size, timing, colors, and rendering layers.

use bevy::prelude::*;

// Board dimensions, in pixels
pub const BOARD_WIDTH: i32 = 800;
pub const BOARD_HEIGHT: i32 = 600;
pub const UNIT_SIZE: i32 = 20;

pub const INITIAL_LENGTH: usize = 3;

// Tick delay in milliseconds. Lower is faster.
pub const MIN_DELAY: u64 = 50;
pub const DEFAULT_DELAY: u64 = 100;
pub const MAX_DELAY: u64 = 200;
pub const SPEED_STEP: u64 = 10;

// Upper bound on random probes before falling back to the free-cell list
pub const MAX_FOOD_ATTEMPTS: usize = 64;

// Colors
pub const SNAKE_HEAD_RGB: (u8, u8, u8) = (255, 255, 0);
pub const SNAKE_TAIL_RGB: (u8, u8, u8) = (0, 128, 0);
pub const FOOD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 1.0);
pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::WHITE;

// Z-index constants for rendering layers
pub const Z_BORDER: f32 = 0.5;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE: f32 = 1.5;
