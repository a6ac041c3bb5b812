//! Host input events and the pending-command slot
//!
//! The host delivers key events whenever it likes; the tick reads at most one
//! command per step. In between, only the most recent command is kept.

use serde::{Deserialize, Serialize};

/// Paddle commands understood by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
}

/// Keys as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Any other key, by host key code
    Other(u32),
}

/// Events seen by the window's event filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    KeyPress(Key),
    KeyRelease(Key),
    /// Window closed; the timer must stop
    Close,
    /// Anything else the window receives (focus, paint, mouse...)
    Other,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left => Some(Command::MoveLeft),
            Key::Right => Some(Command::MoveRight),
            Key::Other(_) => None,
        }
    }
}

/// Depth-1, latest-wins command buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSlot {
    pending: Option<Command>,
}

impl InputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a command, replacing any unconsumed one
    pub fn push(&mut self, command: Command) {
        self.pending = Some(command);
    }

    /// Drain the slot
    pub fn take(&mut self) -> Option<Command> {
        self.pending.take()
    }

    pub fn peek(&self) -> Option<Command> {
        self.pending
    }

    /// Feed a host event through the filter
    ///
    /// Arrow key presses fill the slot. Every other event, including key
    /// releases, clears whatever was pending.
    pub fn observe(&mut self, event: &HostEvent) {
        self.pending = match event {
            HostEvent::KeyPress(key) => Command::from_key(*key),
            _ => None,
        };
    }
}
