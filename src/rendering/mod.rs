//! Rendering plugin - draws the arena, food, and snake from the game state every frame.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    ARENA_BORDER_COLOR, FOOD_COLOR, GameConfig, GamePhase, GameState, Position, SNAKE_HEAD_RGB,
    SNAKE_TAIL_RGB, Z_BORDER, Z_FOOD, Z_SNAKE,
};

/// Plugin for drawing the board.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (draw_arena, draw_food, draw_snake).chain());
    }
}

/// Converts a board cell to the world-space center of that cell.
///
/// The board origin is the top-left corner with y pointing down; the camera is
/// centered on the board with y pointing up.
pub fn cell_center(config: &GameConfig, pos: Position) -> Vec2 {
    let half_unit = config.unit as f32 / 2.0;
    Vec2::new(
        pos.x as f32 + half_unit - config.width as f32 / 2.0,
        config.height as f32 / 2.0 - pos.y as f32 - half_unit,
    )
}

/// Color of segment `index` in a snake of `len` segments, fading from the head
/// color to the tail color.
pub fn segment_color(index: usize, len: usize) -> (u8, u8, u8) {
    let t = if len > 1 {
        index as f32 / (len - 1) as f32
    } else {
        0.0
    };
    let lerp = |from: u8, to: u8| (from as f32 + t * (to as f32 - from as f32)) as u8;
    (
        lerp(SNAKE_HEAD_RGB.0, SNAKE_TAIL_RGB.0),
        lerp(SNAKE_HEAD_RGB.1, SNAKE_TAIL_RGB.1),
        lerp(SNAKE_HEAD_RGB.2, SNAKE_TAIL_RGB.2),
    )
}

/// System to outline the playing field.
fn draw_arena(mut painter: ShapePainter, game_state: Res<GameState>) {
    let config = game_state.config();
    painter.set_translation(Vec3::new(0.0, 0.0, Z_BORDER));
    painter.color = ARENA_BORDER_COLOR;
    painter.hollow = true;
    painter.thickness = 2.0;
    painter.rect(Vec2::new(config.width as f32, config.height as f32));
}

/// System to draw the food as a filled circle.
fn draw_food(mut painter: ShapePainter, game_state: Res<GameState>) {
    if game_state.phase != GamePhase::Running {
        return;
    }

    if let Some(food) = game_state.food {
        let config = game_state.config();
        painter.set_translation(cell_center(config, food).extend(Z_FOOD));
        painter.color = FOOD_COLOR;
        painter.hollow = false;
        painter.circle(config.unit as f32 / 2.0);
    }
}

/// System to draw each snake segment with the head-to-tail gradient.
fn draw_snake(mut painter: ShapePainter, game_state: Res<GameState>) {
    if game_state.phase != GamePhase::Running {
        return;
    }

    let config = game_state.config();
    let len = game_state.snake.len();
    painter.hollow = false;
    for (i, segment) in game_state.snake.iter().enumerate() {
        let (r, g, b) = segment_color(i, len);
        painter.set_translation(cell_center(config, *segment).extend(Z_SNAKE));
        painter.color = Color::srgb_u8(r, g, b);
        painter.circle(config.unit as f32 / 2.0);
    }
}
