use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use snake_reflection::{
    game::{BACKGROUND_COLOR, GameConfig, GameState},
    rendering::RenderingPlugin,
    snake::SnakePlugin,
    ui::UiPlugin,
};

fn main() -> AppExit {
    let config = GameConfig::default();

    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: WindowResolution::new(config.width as u32, config.height as u32),
                title: "Reflection Snake".to_string(),
                resizable: false,
                ..default()
            }),
            ..default()
        }),
        Shape2dPlugin::default(),
    ));

    let game_state = match GameState::new(config) {
        Ok(game_state) => game_state,
        Err(err) => {
            error!("Invalid game configuration: {}", err);
            return AppExit::error();
        }
    };

    app.insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(game_state)
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin))
        .run()
}
