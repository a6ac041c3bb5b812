//! In-memory scene graph
//!
//! Stands in for the host application's scene when running headless: the
//! native binary and the tests drive the simulation against it.

use std::collections::BTreeMap;

use glam::Vec2;

use super::{Color, Renderer, VisualHandle, VisualKind};

/// A visual node as the host would store it
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: VisualKind,
    /// Transform-space translation (Y up)
    pub position: Vec2,
    pub visible: bool,
    /// Material color, 0-1 per channel
    pub color: Option<[f32; 3]>,
}

/// Headless renderer keeping every visual in a map
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: BTreeMap<VisualHandle, SceneNode>,
    next_id: u32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, handle: VisualHandle) -> Option<&SceneNode> {
        self.nodes.get(&handle)
    }

    /// Number of live visuals
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of live visuals currently shown
    pub fn visible_count(&self) -> usize {
        self.nodes.values().filter(|n| n.visible).count()
    }

    /// Delete a visual behind the simulation's back (user deleting a node in the host)
    pub fn remove(&mut self, handle: VisualHandle) -> Option<SceneNode> {
        self.nodes.remove(&handle)
    }
}

impl Renderer for SceneGraph {
    fn create_visual(&mut self, kind: VisualKind, position: Vec2) -> VisualHandle {
        let handle = VisualHandle(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            handle,
            SceneNode {
                kind,
                position,
                visible: true,
                color: None,
            },
        );
        handle
    }

    fn position(&self, handle: VisualHandle) -> Option<Vec2> {
        self.nodes.get(&handle).map(|n| n.position)
    }

    fn set_position(&mut self, handle: VisualHandle, position: Vec2) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.position = position;
        }
    }

    fn is_visible(&self, handle: VisualHandle) -> Option<bool> {
        self.nodes.get(&handle).map(|n| n.visible)
    }

    fn set_visible(&mut self, handle: VisualHandle, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.visible = visible;
        }
    }

    fn set_color(&mut self, handle: VisualHandle, color: Color) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.color = Some(color.to_unit_rgb());
        }
    }

    fn reset(&mut self) {
        log::info!("Scene reset ({} visuals dropped)", self.nodes.len());
        self.nodes.clear();
    }
}
