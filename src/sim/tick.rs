//! Fixed timestep simulation tick
//!
//! Core game loop step that advances simulation deterministically.

use glam::Vec2;

use super::collision::resolve;
use super::state::{GameEvent, GameState};
use crate::consts::PADDLE_STEP;
use crate::platform::input::Command;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest pending paddle command, if any
    pub command: Option<Command>,
}

impl TickInput {
    pub fn command(command: Command) -> Self {
        Self {
            command: Some(command),
        }
    }
}

/// Paddle offset for a command
#[inline]
pub fn paddle_offset(command: Command) -> Vec2 {
    match command {
        Command::MoveLeft => Vec2::new(-PADDLE_STEP, 0.0),
        Command::MoveRight => Vec2::new(PADDLE_STEP, 0.0),
    }
}

/// Advance the game state by one fixed step
///
/// Paddle input is applied even before the game starts; physics only runs
/// once the session is running. Returns what the resolver did.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if let Some(command) = input.command {
        state.paddle.rect.offset(paddle_offset(command));
    }

    if !state.is_running() {
        return Vec::new();
    }

    state.time_ticks += 1;
    resolve(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::SceneGraph;
    use crate::sim::state::GamePhase;

    #[test]
    fn test_paddle_moves_before_start() {
        let mut scene = SceneGraph::new();
        let mut state = GameState::new(12345, &mut scene);
        let ball = state.ball.rect.center();

        let events = tick(&mut state, &TickInput::command(Command::MoveLeft));
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.paddle.rect.center().x, 340.0);
        // No physics before start
        assert_eq!(state.ball.rect.center(), ball);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &TickInput::command(Command::MoveRight));
        tick(&mut state, &TickInput::command(Command::MoveRight));
        assert_eq!(state.paddle.rect.center().x, 360.0);
    }

    #[test]
    fn test_paddle_is_not_clamped() {
        let mut scene = SceneGraph::new();
        let mut state = GameState::new(1, &mut scene);
        for _ in 0..40 {
            tick(&mut state, &TickInput::command(Command::MoveRight));
        }
        assert_eq!(state.paddle.rect.center().x, 750.0);
    }

    #[test]
    fn test_running_tick_moves_ball() {
        let mut scene = SceneGraph::new();
        let mut state = GameState::new(12345, &mut scene);
        state.start_session();
        state.ball.direction = 270.0;

        tick(&mut state, &TickInput::default());
        let c = state.ball.rect.center();
        assert!((c.x - BALL_SPAWN.x).abs() < 1e-4);
        assert!((c.y - (BALL_SPAWN.y + BALL_START_SPEED)).abs() < 1e-4);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut scene = SceneGraph::new();
        let mut state1 = GameState::new(99999, &mut scene);
        let mut state2 = GameState::new(99999, &mut scene);
        state1.start_session();
        state2.start_session();

        let inputs = [
            TickInput::command(Command::MoveLeft),
            TickInput::default(),
            TickInput::command(Command::MoveRight),
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            let e1 = tick(&mut state1, input);
            let e2 = tick(&mut state2, input);
            assert_eq!(e1.len(), e2.len());
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.blocks.len(), state2.blocks.len());
        assert_eq!(state1.ball.rect.center(), state2.ball.rect.center());
        assert_eq!(state1.ball.direction, state2.ball.direction);
    }
}
