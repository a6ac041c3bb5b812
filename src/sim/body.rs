//! Moving bodies: paddle, ball and blocks

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rectangle;
use crate::consts::SPAWN_CONE;
use crate::renderer::{Color, Renderer, VisualHandle};
use crate::{heading_to_step, normalize_degrees};

/// A rectangle with a speed, a heading and a color
#[derive(Debug, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rectangle,
    /// Distance travelled per tick
    pub speed: f32,
    /// Heading in degrees, [0, 360), 90 = up
    pub direction: f32,
    pub color: Color,
    /// False once destroyed
    pub active: bool,
}

impl Body {
    /// Create a body heading somewhere in the downward cone 270 ± 45 degrees
    pub fn new<G: Rng>(color: Color, rect: Rectangle, speed: f32, rng: &mut G) -> Self {
        let direction = 270 + rng.random_range(-SPAWN_CONE..=SPAWN_CONE);
        Self {
            rect,
            speed,
            direction: direction as f32,
            color,
            active: true,
        }
    }

    /// Apply the body color to its visual
    pub fn attach_material<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_color(self.rect.visual(), self.color);
    }

    /// Set the heading, wrapped into [0, 360)
    #[inline]
    pub fn set_direction(&mut self, direction: f32) {
        self.direction = normalize_degrees(direction);
    }

    /// Move one tick along the current heading
    pub fn advance(&mut self) {
        self.rect.offset(heading_to_step(self.direction) * self.speed);
    }

    /// Mark inactive; returns the visual to hide on the next sync
    pub fn destroy(&mut self) -> VisualHandle {
        self.active = false;
        self.rect.visual()
    }
}
