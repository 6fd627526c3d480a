//! Game messages.

use bevy::prelude::*;

use super::Direction;

/// Player intent, applied to the game state by a single system.
#[derive(Message, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameCommand {
    SetDirection(Direction),
    /// Signed change to the tick delay in milliseconds; negative is faster.
    ChangeSpeed(i64),
    Restart,
}
