use std::time::Duration;

use bevy::{prelude::*, time::TimeUpdateStrategy};
use snake_reflection::{
    game::{GameConfig, GamePhase, GameState, TickClock},
    snake::SnakePlugin,
};

fn headless_app(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)))
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(GameState::with_seed(GameConfig::default(), seed).expect("valid config"))
        .add_plugins(SnakePlugin);
    app.update();
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}

#[test]
fn game_starts_on_startup() {
    let app = headless_app(1);
    let game = app.world().resource::<GameState>();

    assert_eq!(game.phase, GamePhase::Running);
    assert_eq!(game.snake.len(), 3);
    assert!(game.food.is_some());
}

#[test]
fn clock_moves_the_snake() {
    let mut app = headless_app(2);
    let before = app.world().resource::<GameState>().snake.clone();

    for _ in 0..30 {
        app.update();
    }

    let game = app.world().resource::<GameState>();
    assert_ne!(game.snake, before);
    for segment in &game.snake {
        assert!(game.config().contains(*segment));
    }
}

#[test]
fn speed_keys_restart_clock() {
    let mut app = headless_app(3);

    press(&mut app, KeyCode::Minus);
    assert_eq!(app.world().resource::<GameState>().delay, 110);
    assert_eq!(
        app.world().resource::<TickClock>().interval(),
        Duration::from_millis(110)
    );

    press(&mut app, KeyCode::Equal);
    press(&mut app, KeyCode::NumpadAdd);
    assert_eq!(app.world().resource::<GameState>().delay, 90);
    assert_eq!(
        app.world().resource::<TickClock>().interval(),
        Duration::from_millis(90)
    );
}

#[test]
fn space_restarts_round() {
    let mut app = headless_app(4);
    app.world_mut().resource_mut::<GameState>().score = 5;
    press(&mut app, KeyCode::Minus);

    press(&mut app, KeyCode::Space);

    let game = app.world().resource::<GameState>();
    assert_eq!(game.score, 0);
    assert_eq!(game.delay, 100);
    assert_eq!(game.snake.len(), 3);
}
