//! Snake plugin - handles keyboard input, command application, the tick clock, and
//! the initial body layout.

use bevy::prelude::*;
use rand::{Rng, seq::IndexedRandom};

use crate::food::random_cell;
use crate::game::{
    Direction, GameCommand, GameConfig, GamePhase, GameState, Position, TickClock, TickOutcome,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickClock>()
            .add_message::<GameCommand>()
            .add_systems(Startup, start_game)
            .add_systems(
                Update,
                (keyboard_input, apply_game_commands, advance_clock).chain(),
            );
    }
}

/// Whether a body of the configured length fits behind `head`.
pub fn is_safe_start(config: &GameConfig, head: Position, direction: Direction) -> bool {
    let reach = (config.initial_length as i32 - 1) * config.unit;
    let tail = head.step(direction.opposite(), reach);
    config.contains(head) && config.contains(tail)
}

/// Picks a random head cell with room for the whole initial body.
///
/// Falls back to any cell when the board is too short along `direction`.
pub fn choose_start_head<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    direction: Direction,
) -> Position {
    let safe: Vec<Position> = config
        .cells()
        .filter(|&cell| is_safe_start(config, cell, direction))
        .collect();
    match safe.choose(rng) {
        Some(&head) => head,
        None => random_cell(rng, config),
    }
}

/// Lays out the initial body behind `head`, stopping at the board edge.
pub fn build_body(config: &GameConfig, head: Position, direction: Direction) -> Vec<Position> {
    let behind = direction.opposite();
    let mut body = Vec::with_capacity(config.initial_length);
    body.push(head);

    let mut prev = head;
    for _ in 1..config.initial_length {
        let next = prev.step(behind, config.unit);
        if !config.contains(next) {
            break;
        }
        body.push(next);
        prev = next;
    }
    body
}

/// Maps a key press to the command it triggers.
pub fn command_for_key(key: KeyCode, speed_step: u64) -> Option<GameCommand> {
    let step = speed_step as i64;
    match key {
        KeyCode::ArrowLeft => Some(GameCommand::SetDirection(Direction::Left)),
        KeyCode::ArrowRight => Some(GameCommand::SetDirection(Direction::Right)),
        KeyCode::ArrowUp => Some(GameCommand::SetDirection(Direction::Up)),
        KeyCode::ArrowDown => Some(GameCommand::SetDirection(Direction::Down)),
        // '+' shares the '=' key on most layouts
        KeyCode::Equal | KeyCode::NumpadAdd => Some(GameCommand::ChangeSpeed(-step)),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(GameCommand::ChangeSpeed(step)),
        KeyCode::Space => Some(GameCommand::Restart),
        _ => None,
    }
}

/// Applies one command to the game, restarting the clock when the interval changes.
pub fn apply_command(game: &mut GameState, clock: &mut TickClock, command: GameCommand) {
    match command {
        GameCommand::SetDirection(direction) => {
            if !game.set_direction(direction) {
                debug!(
                    "Ignored reversal to {:?} while moving {:?}",
                    direction, game.direction
                );
            }
        }
        GameCommand::ChangeSpeed(delta) => {
            let delay = game.change_speed(delta);
            clock.restart(delay);
            info!("Tick delay {} ms (speed {})", delay, game.speed_level());
        }
        GameCommand::Restart => {
            game.start();
            clock.restart(game.delay);
        }
    }
}

/// Starts the first round as soon as the app is up.
fn start_game(mut game: ResMut<GameState>, mut clock: ResMut<TickClock>) {
    game.start();
    clock.restart(game.delay);
}

/// System to turn keyboard presses into game commands.
fn keyboard_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    mut commands: MessageWriter<GameCommand>,
) {
    let speed_step = game_state.config().speed_step;
    for key in keyboard_input.get_just_pressed() {
        if let Some(command) = command_for_key(*key, speed_step) {
            commands.write(command);
        }
    }
}

/// System to apply queued commands in arrival order.
fn apply_game_commands(
    mut reader: MessageReader<GameCommand>,
    mut game_state: ResMut<GameState>,
    mut clock: ResMut<TickClock>,
) {
    for command in reader.read() {
        apply_command(&mut game_state, &mut clock, *command);
    }
}

/// System to advance the snake each time the clock completes an interval.
fn advance_clock(time: Res<Time>, mut clock: ResMut<TickClock>, mut game_state: ResMut<GameState>) {
    if game_state.phase != GamePhase::Running {
        return;
    }

    clock.timer.tick(time.delta());
    for _ in 0..clock.timer.times_finished_this_tick() {
        if let TickOutcome::Ate { score } = game_state.tick() {
            info!("Food eaten, score {}", score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn safe_start_requires_room_behind() {
        let config = GameConfig::default();
        assert!(is_safe_start(&config, Position::new(40, 0), Direction::Right));
        assert!(!is_safe_start(&config, Position::new(20, 0), Direction::Right));
        assert!(is_safe_start(&config, Position::new(0, 540), Direction::Up));
        assert!(!is_safe_start(&config, Position::new(0, 560), Direction::Up));
        assert!(is_safe_start(&config, Position::new(740, 0), Direction::Left));
        assert!(!is_safe_start(&config, Position::new(760, 0), Direction::Left));
    }

    #[test]
    fn start_head_is_always_safe() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for direction in Direction::ALL {
            for _ in 0..100 {
                let head = choose_start_head(&mut rng, &config, direction);
                assert!(is_safe_start(&config, head, direction));
                assert_eq!(build_body(&config, head, direction).len(), 3);
            }
        }
    }

    #[test]
    fn body_stops_at_board_edge() {
        let config = GameConfig::default();
        let body = build_body(&config, Position::new(20, 100), Direction::Right);
        assert_eq!(body, vec![Position::new(20, 100), Position::new(0, 100)]);

        let body = build_body(&config, Position::new(0, 100), Direction::Right);
        assert_eq!(body, vec![Position::new(0, 100)]);
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(
            command_for_key(KeyCode::ArrowUp, 10),
            Some(GameCommand::SetDirection(Direction::Up))
        );
        assert_eq!(
            command_for_key(KeyCode::NumpadAdd, 10),
            Some(GameCommand::ChangeSpeed(-10))
        );
        assert_eq!(
            command_for_key(KeyCode::Equal, 10),
            Some(GameCommand::ChangeSpeed(-10))
        );
        assert_eq!(
            command_for_key(KeyCode::Minus, 10),
            Some(GameCommand::ChangeSpeed(10))
        );
        assert_eq!(command_for_key(KeyCode::Space, 10), Some(GameCommand::Restart));
        assert_eq!(command_for_key(KeyCode::KeyQ, 10), None);
    }

    #[test]
    fn speed_command_restarts_clock() {
        let mut game = GameState::with_seed(GameConfig::default(), 9).unwrap();
        game.start();
        let mut clock = TickClock::new(game.delay);
        clock.timer.tick(std::time::Duration::from_millis(70));

        apply_command(&mut game, &mut clock, GameCommand::ChangeSpeed(-10));

        assert_eq!(game.delay, 90);
        assert_eq!(clock.interval().as_millis(), 90);
        assert_eq!(clock.timer.elapsed().as_millis(), 0);
    }

    #[test]
    fn restart_command_starts_new_round() {
        let mut game = GameState::with_seed(GameConfig::default(), 9).unwrap();
        let mut clock = TickClock::new(200);

        apply_command(&mut game, &mut clock, GameCommand::Restart);

        assert_eq!(game.phase, GamePhase::Running);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(clock.interval().as_millis(), 100);
    }

    #[test]
    fn reversal_command_is_ignored() {
        let mut game = GameState::with_seed(GameConfig::default(), 9).unwrap();
        game.start();
        let mut clock = TickClock::new(game.delay);
        let current = game.direction;

        apply_command(
            &mut game,
            &mut clock,
            GameCommand::SetDirection(current.opposite()),
        );

        assert_eq!(game.direction, current);
    }
}
