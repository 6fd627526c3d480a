//! Food placement - picks a random board cell that the snake does not occupy.

use rand::{Rng, seq::IndexedRandom};

use crate::game::{GameConfig, MAX_FOOD_ATTEMPTS, Position};

/// Returns a uniformly random grid-aligned cell on the board.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Position {
    Position {
        x: rng.random_range(0..config.columns()) * config.unit,
        y: rng.random_range(0..config.rows()) * config.unit,
    }
}

/// Picks a food position that doesn't overlap with the snake.
///
/// Random probes are tried first; once they run out the choice is made from
/// the list of free cells. Returns `None` only when the snake covers the board.
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    snake: &[Position],
) -> Option<Position> {
    for _ in 0..MAX_FOOD_ATTEMPTS {
        let position = random_cell(rng, config);
        if !snake.contains(&position) {
            return Some(position);
        }
    }

    let free: Vec<Position> = config
        .cells()
        .filter(|cell| !snake.contains(cell))
        .collect();
    free.choose(rng).copied()
}
