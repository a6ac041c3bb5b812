//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (block creation order)
//! - The renderer is only touched through the opaque `Renderer` trait when
//!   entities are created; per-tick state reaches it via `renderer::sync`

pub mod body;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{paddle_deflection, reflect_horizontal, reflect_vertical, resolve};
pub use rect::{Rectangle, Shape};
pub use state::{GameEvent, GamePhase, GameState, Walls, BLOCK_COLORS};
pub use tick::{TickInput, tick};
