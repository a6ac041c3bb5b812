//! Axis-aligned rectangle geometry
//!
//! Every entity on the play field is a rectangle in world space (origin
//! top-left, Y down) described by its center and half-extents. The ball is a
//! rectangle too; only its visual is a sphere.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{Renderer, VisualHandle, VisualKind};
use crate::{from_transform_space, to_transform_space};

/// Shape of the visual backing a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Box,
    Sphere,
}

/// An axis-aligned rectangle owning one visual
#[derive(Debug, Serialize, Deserialize)]
pub struct Rectangle {
    center: Vec2,
    half_extents: Vec2,
    visual: VisualHandle,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    ///
    /// Boxes get a depth equal to their height; spheres get radius `width / 2`.
    pub fn new<R: Renderer + ?Sized>(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        shape: Shape,
        renderer: &mut R,
    ) -> Self {
        Self::with_depth(left, top, width, height, height, shape, renderer)
    }

    /// Like [`Rectangle::new`] with an explicit box depth
    #[allow(clippy::too_many_arguments)]
    pub fn with_depth<R: Renderer + ?Sized>(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        depth: f32,
        shape: Shape,
        renderer: &mut R,
    ) -> Self {
        let half_extents = Vec2::new(width / 2.0, height / 2.0);
        let center = Vec2::new(left, top) + half_extents;
        let kind = match shape {
            Shape::Box => VisualKind::Box {
                width,
                height,
                depth,
            },
            Shape::Sphere => VisualKind::Sphere { radius: width / 2.0 },
        };
        let visual = renderer.create_visual(kind, to_transform_space(center));
        Self {
            center,
            half_extents,
            visual,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// Full width
    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    #[inline]
    pub fn visual(&self) -> VisualHandle {
        self.visual
    }

    /// Translate the center
    #[inline]
    pub fn offset(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Center as currently shown by the renderer, in world space
    ///
    /// Returns `None` if the visual is gone.
    pub fn try_visual_center<R: Renderer + ?Sized>(&self, renderer: &R) -> Option<Vec2> {
        renderer.position(self.visual).map(from_transform_space)
    }

    /// Center as currently shown by the renderer, in world space
    ///
    /// Falls back to `(0, 0)` when the visual has been deleted or detached, so
    /// the view can drift from the simulation without failing.
    pub fn visual_center<R: Renderer + ?Sized>(&self, renderer: &R) -> Vec2 {
        self.try_visual_center(renderer).unwrap_or(Vec2::ZERO)
    }

    /// Push the center to the visual (dropped if the visual is gone)
    pub fn sync<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_position(self.visual, to_transform_space(self.center));
    }

    /// (min, max) corners
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        (
            self.center - self.half_extents,
            self.center + self.half_extents,
        )
    }

    /// AABB overlap test; rectangles whose edges exactly touch intersect
    pub fn intersects(&self, other: &Rectangle) -> bool {
        let (a_min, a_max) = other.bounding_box();
        let (b_min, b_max) = self.bounding_box();

        if a_max.x < b_min.x || a_min.x > b_max.x {
            return false;
        }
        if a_max.y < b_min.y || a_min.y > b_max.y {
            return false;
        }
        true
    }
}
