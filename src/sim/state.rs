//! Game state and session lifecycle
//!
//! One `GameState` per session. The loop driver owns it and hands it to
//! `tick` by mutable reference each step.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::rect::{Rectangle, Shape};
use crate::consts::*;
use crate::renderer::{Color, Renderer, VisualHandle};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start command; the paddle still moves
    NotStarted,
    /// Ball in play, forever
    Running,
}

/// Something the resolver did during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A block was hit and removed from the active set
    BlockDestroyed { visual: VisualHandle, color: Color },
    /// Ball deflected by the paddle to the given heading
    PaddleHit { direction: f32 },
    /// Ball crossed the left or right bound
    SideWallBounce { direction: f32 },
    /// Ball crossed the top bound and sped up
    CeilingBounce { speed: f32 },
}

/// Row colors, top row first
pub const BLOCK_COLORS: [Color; BLOCK_ROWS] = [
    Color::new(255, 0, 0),
    Color::new(255, 165, 0),
    Color::new(242, 242, 0),
    Color::new(0, 128, 0),
    Color::new(128, 0, 128),
    Color::new(0, 0, 250),
];

pub const PADDLE_COLOR: Color = Color::new(242, 242, 0);
pub const BALL_COLOR: Color = Color::new(242, 242, 0);

/// Static slabs framing the play field
///
/// Only visual: bounces test the fixed field bounds, not these rectangles.
#[derive(Debug, Serialize, Deserialize)]
pub struct Walls {
    pub left: Rectangle,
    pub right: Rectangle,
    pub top: Rectangle,
}

impl Walls {
    pub fn new<R: Renderer + ?Sized>(renderer: &mut R) -> Self {
        let t = WALL_THICKNESS;
        let y = -2.0 * t;
        Self {
            left: Rectangle::with_depth(-2.0 * t, y, t, WORLD_HEIGHT, t, Shape::Box, renderer),
            right: Rectangle::with_depth(
                WORLD_WIDTH + t,
                y,
                t,
                WORLD_HEIGHT,
                t,
                Shape::Box,
                renderer,
            ),
            top: Rectangle::with_depth(-t, y, WORLD_WIDTH + 2.0 * t, t, t, Shape::Box, renderer),
        }
    }
}

/// Complete session state (deterministic for a given seed)
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for the spawn headings
    pub seed: u64,
    pub phase: GamePhase,
    /// Ticks simulated while running
    pub time_ticks: u64,
    pub paddle: Body,
    pub ball: Body,
    /// Live blocks in creation order (row-major)
    pub blocks: Vec<Body>,
    pub walls: Walls,
    /// Visuals of destroyed blocks not yet hidden by a sync
    pub pending_hide: Vec<VisualHandle>,
}

impl GameState {
    /// Build the paddle, ball, block grid and walls, creating their visuals
    pub fn new<R: Renderer + ?Sized>(seed: u64, renderer: &mut R) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let paddle_rect = Rectangle::new(
            PADDLE_LEFT,
            PADDLE_TOP,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            Shape::Box,
            renderer,
        );
        let paddle = Body::new(PADDLE_COLOR, paddle_rect, 0.0, &mut rng);
        paddle.attach_material(renderer);

        let ball_rect = Rectangle::new(
            BALL_LEFT,
            BALL_TOP,
            BALL_SIZE,
            BALL_SIZE,
            Shape::Sphere,
            renderer,
        );
        let ball = Body::new(BALL_COLOR, ball_rect, BALL_START_SPEED, &mut rng);
        ball.attach_material(renderer);

        let mut blocks = Vec::with_capacity(BLOCK_ROWS * BLOCK_COLUMNS);
        for (row, &color) in BLOCK_COLORS.iter().enumerate() {
            for col in 0..BLOCK_COLUMNS {
                let rect = Rectangle::new(
                    col as f32 * BLOCK_PITCH_X + BLOCK_ORIGIN_X,
                    row as f32 * BLOCK_PITCH_Y + BLOCK_ORIGIN_Y,
                    BLOCK_WIDTH,
                    BLOCK_HEIGHT,
                    Shape::Box,
                    renderer,
                );
                let block = Body::new(color, rect, 0.0, &mut rng);
                block.attach_material(renderer);
                blocks.push(block);
            }
        }

        let walls = Walls::new(renderer);

        log::info!(
            "Session initialized (seed {}, {} blocks, ball heading {})",
            seed,
            blocks.len(),
            ball.direction
        );

        Self {
            seed,
            phase: GamePhase::NotStarted,
            time_ticks: 0,
            paddle,
            ball,
            blocks,
            walls,
            pending_hide: Vec::new(),
        }
    }

    /// Put the ball back on its spawn point at start speed and run
    ///
    /// Calling this again mid-game re-centers the ball and restores its speed;
    /// players can use the start button as a manual reset.
    pub fn start_session(&mut self) {
        self.ball.rect.set_center(BALL_SPAWN);
        self.ball.speed = BALL_START_SPEED;
        if self.phase == GamePhase::NotStarted {
            log::info!("Game started");
        } else {
            log::debug!("Ball reset to spawn");
        }
        self.phase = GamePhase::Running;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
