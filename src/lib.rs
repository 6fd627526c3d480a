//! Snake that bounces off the walls instead of dying.
//!
//! [`game::GameState`] holds the whole simulation; the plugins wire it to Bevy's
//! clock, keyboard, and renderer.

pub mod food;
pub mod game;
pub mod rendering;
pub mod snake;
pub mod ui;
