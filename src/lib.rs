//! Block Break - a fixed-step block breaker driven through a host scene graph
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rectangles, bodies, collisions, game state)
//! - `renderer`: Renderer collaborator trait and the render sync step
//! - `platform`: Host input events and the fixed-rate timer
//! - `game`: Loop driver tying state, input, timer and renderer together
//! - `settings`: Data-driven configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Host timer rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions (origin top-left, Y grows downward)
    pub const WORLD_WIDTH: f32 = 600.0;
    pub const WORLD_HEIGHT: f32 = 800.0;
    /// Ball only moves while above this line
    pub const BALL_CEILING_GUARD: f32 = 1000.0;

    /// Paddle defaults
    pub const PADDLE_LEFT: f32 = 300.0;
    pub const PADDLE_TOP: f32 = 700.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Paddle offset applied per move command
    pub const PADDLE_STEP: f32 = 10.0;
    /// Maximum skew (degrees) the paddle adds per paddle width of offset
    pub const PADDLE_DEFLECTION: f32 = 80.0;

    /// Ball defaults
    pub const BALL_LEFT: f32 = 300.0;
    pub const BALL_TOP: f32 = 400.0;
    pub const BALL_SIZE: f32 = 20.0;
    /// Where `start_session` puts the ball back
    pub const BALL_SPAWN: Vec2 = Vec2::new(300.0, 400.0);
    pub const BALL_START_SPEED: f32 = 5.0;

    /// Block grid
    pub const BLOCK_ROWS: usize = 6;
    pub const BLOCK_COLUMNS: usize = 5;
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const BLOCK_PITCH_X: f32 = 100.0;
    pub const BLOCK_PITCH_Y: f32 = 50.0;
    pub const BLOCK_ORIGIN_X: f32 = 60.0;
    pub const BLOCK_ORIGIN_Y: f32 = 40.0;

    /// Initial heading cone, degrees either side of straight down (270)
    pub const SPAWN_CONE: i32 = 45;

    /// Wall slabs around the play field
    pub const WALL_THICKNESS: f32 = 10.0;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit step for a heading in degrees, in world space (Y down)
///
/// Headings use the math convention (counter-clockwise, 90 = up), so the Y
/// component is negated to match the downward display axis.
#[inline]
pub fn heading_to_step(direction: f32) -> Vec2 {
    let rad = direction.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// World space (Y down) to host transform space (Y up)
#[inline]
pub fn to_transform_space(world: Vec2) -> Vec2 {
    Vec2::new(world.x, consts::WORLD_HEIGHT - world.y)
}

/// Host transform space (Y up) to world space (Y down)
#[inline]
pub fn from_transform_space(transform: Vec2) -> Vec2 {
    Vec2::new(transform.x, consts::WORLD_HEIGHT - transform.y)
}
