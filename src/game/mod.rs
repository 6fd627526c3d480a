//! Core game module containing the simulation state, configuration, messages, and constants.

mod components;
mod config;
mod constants;
mod events;
mod resources;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
