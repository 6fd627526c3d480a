//! UI plugin - camera setup and the score / speed overlay.

use bevy::prelude::*;

use crate::game::{GameState, ScoreText, SpeedText, TEXT_COLOR};

/// Plugin for the camera and overlay text.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(Update, update_overlay_text);
    }
}

/// Overlay lines for the current state.
pub fn overlay_text(game_state: &GameState) -> (String, String) {
    (
        format!("Score: {}", game_state.score),
        format!("Speed: {}", game_state.speed_level()),
    )
}

/// Initial setup system - camera and overlay text.
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        Text::from("Score: 0"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    commands.spawn((
        Text::from("Speed: 0"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(30.0),
            left: Val::Px(10.0),
            ..default()
        },
        SpeedText,
    ));
}

/// System to refresh the overlay when the state changes.
fn update_overlay_text(
    game_state: Res<GameState>,
    mut score_text: Query<&mut Text, (With<ScoreText>, Without<SpeedText>)>,
    mut speed_text: Query<&mut Text, (With<SpeedText>, Without<ScoreText>)>,
) {
    if !game_state.is_changed() {
        return;
    }

    let (score, speed) = overlay_text(&game_state);
    if let Ok(mut text) = score_text.single_mut() {
        *text = Text::from(score);
    }
    if let Ok(mut text) = speed_text.single_mut() {
        *text = Text::from(speed);
    }
}
