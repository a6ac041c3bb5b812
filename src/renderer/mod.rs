//! Renderer collaborator
//!
//! The simulation never draws anything itself. Every rectangle owns an opaque
//! [`VisualHandle`] issued by a [`Renderer`], and [`sync`] pushes the
//! authoritative simulation state to those handles once per update.
//!
//! Positions crossing this boundary are in the host's transform space (Y up).

pub mod scene;

pub use scene::SceneGraph;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Opaque id of a visual owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualHandle(pub u32);

/// Geometry requested when a rectangle is created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VisualKind {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0-1 for material inputs
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Host scene graph as seen by the simulation
///
/// Reads return `None` when the handle no longer refers to a live visual
/// (deleted or detached by the host). Writes to such handles are dropped.
pub trait Renderer {
    /// Create a visual and place it at `position` (transform space)
    fn create_visual(&mut self, kind: VisualKind, position: Vec2) -> VisualHandle;

    fn position(&self, handle: VisualHandle) -> Option<Vec2>;

    fn set_position(&mut self, handle: VisualHandle, position: Vec2);

    fn is_visible(&self, handle: VisualHandle) -> Option<bool>;

    fn set_visible(&mut self, handle: VisualHandle, visible: bool);

    /// Assign a solid-color material
    fn set_color(&mut self, handle: VisualHandle, color: Color);

    /// Drop every visual (scene teardown)
    fn reset(&mut self);
}

/// Push simulation state to the renderer
///
/// Hides visuals of blocks destroyed since the last sync, then writes the
/// current paddle, ball and block positions.
pub fn sync<R: Renderer + ?Sized>(state: &mut GameState, renderer: &mut R) {
    for handle in state.pending_hide.drain(..) {
        renderer.set_visible(handle, false);
    }

    state.paddle.rect.sync(renderer);
    state.ball.rect.sync(renderer);
    for block in &state.blocks {
        block.rect.sync(renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, TickInput, tick};

    #[test]
    fn test_color_to_unit_rgb() {
        let rgb = Color::new(255, 0, 51).to_unit_rgb();
        assert_eq!(rgb, [1.0, 0.0, 0.2]);
    }

    #[test]
    fn test_sync_pushes_positions_with_flip() {
        let mut scene = SceneGraph::new();
        let mut state = GameState::new(7, &mut scene);
        state.start_session();
        tick(&mut state, &TickInput::default());
        sync(&mut state, &mut scene);

        let ball = state.ball.rect.center();
        let shown = scene.position(state.ball.rect.visual()).unwrap();
        assert!((shown.x - ball.x).abs() < 1e-4);
        assert!((shown.y - (crate::consts::WORLD_HEIGHT - ball.y)).abs() < 1e-4);
    }

    #[test]
    fn test_sync_hides_destroyed_blocks() {
        let mut scene = SceneGraph::new();
        let mut state = GameState::new(7, &mut scene);
        state.start_session();

        // Park the ball on the first block
        let target = state.blocks[0].rect.center();
        let hidden = state.blocks[0].rect.visual();
        state.ball.speed = 0.0;
        state.ball.rect.set_center(target);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.pending_hide, vec![hidden]);

        sync(&mut state, &mut scene);
        assert!(state.pending_hide.is_empty());
        assert_eq!(scene.is_visible(hidden), Some(false));
        // The visual is hidden, not removed
        assert!(scene.position(hidden).is_some());
    }
}
