//! Collision detection and response
//!
//! Everything is an axis-aligned rectangle and every bounce is an angle rule
//! on the ball heading; there is no contact normal or penetration solving.

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Heading after striking the paddle
///
/// A dead-center hit sends the ball straight up (90). Each paddle width of
/// offset between the centers skews the heading by `PADDLE_DEFLECTION`
/// degrees, toward the side of the paddle that was struck.
#[inline]
pub fn paddle_deflection(paddle_x: f32, ball_x: f32, paddle_width: f32) -> f32 {
    90.0 + (paddle_x - ball_x) / paddle_width * PADDLE_DEFLECTION
}

/// Mirror a heading across the vertical axis (left/right wall)
#[inline]
pub fn reflect_horizontal(direction: f32) -> f32 {
    180.0 - direction
}

/// Mirror a heading across the horizontal axis (ceiling)
#[inline]
pub fn reflect_vertical(direction: f32) -> f32 {
    -direction
}

/// Turn a heading around
#[inline]
pub fn reverse(direction: f32) -> f32 {
    direction + 180.0
}

/// Outside the horizontal field bounds
#[inline]
pub fn beyond_side_walls(x: f32) -> bool {
    x < 0.0 || x > WORLD_WIDTH
}

/// Above the top of the field
#[inline]
pub fn beyond_ceiling(y: f32) -> bool {
    y < 0.0
}

/// Run one resolver pass: move the ball, then blocks, paddle and walls
///
/// The order matters: a paddle hit overrides the heading set by a block hit in
/// the same tick, and the wall checks see the result of both.
pub fn resolve(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.ball.rect.center().y < BALL_CEILING_GUARD {
        state.ball.advance();
    }

    // Blocks: every overlapping block goes in one pass, one reversal total
    let before = state.blocks.len();
    let ball_rect = &state.ball.rect;
    let pending_hide = &mut state.pending_hide;
    state.blocks.retain_mut(|block| {
        if block.rect.intersects(ball_rect) {
            let visual = block.destroy();
            pending_hide.push(visual);
            events.push(GameEvent::BlockDestroyed {
                visual,
                color: block.color,
            });
            false
        } else {
            true
        }
    });
    if state.blocks.len() != before {
        let direction = reverse(state.ball.direction);
        state.ball.set_direction(direction);
        log::debug!(
            "Ball broke {} block(s), {} left",
            before - state.blocks.len(),
            state.blocks.len()
        );
    }

    if state.paddle.rect.intersects(&state.ball.rect) {
        let direction = paddle_deflection(
            state.paddle.rect.center().x,
            state.ball.rect.center().x,
            state.paddle.rect.width(),
        );
        state.ball.set_direction(direction);
        events.push(GameEvent::PaddleHit {
            direction: state.ball.direction,
        });
    }

    let center = state.ball.rect.center();
    if beyond_side_walls(center.x) {
        let direction = reflect_horizontal(state.ball.direction);
        state.ball.set_direction(direction);
        events.push(GameEvent::SideWallBounce {
            direction: state.ball.direction,
        });
    }
    if beyond_ceiling(center.y) {
        let direction = reflect_vertical(state.ball.direction);
        state.ball.set_direction(direction);
        state.ball.speed += 1.0;
        events.push(GameEvent::CeilingBounce {
            speed: state.ball.speed,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_degrees;
    use crate::renderer::SceneGraph;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut scene = SceneGraph::new();
        let mut state = GameState::new(12345, &mut scene);
        state.start_session();
        state
    }

    /// Put the ball at `pos` with no motion this tick
    fn park_ball(state: &mut GameState, pos: Vec2, direction: f32) {
        state.ball.rect.set_center(pos);
        state.ball.speed = 0.0;
        state.ball.direction = direction;
    }

    #[test]
    fn test_paddle_deflection_law() {
        assert_eq!(paddle_deflection(350.0, 350.0, 100.0), 90.0);
        // Ball one paddle width right of center
        assert_eq!(paddle_deflection(350.0, 450.0, 100.0), 10.0);
        // Ball one paddle width left of center
        assert_eq!(paddle_deflection(350.0, 250.0, 100.0), 170.0);
        // Half a width to the left of center tilts the ball left
        assert_eq!(paddle_deflection(350.0, 300.0, 100.0), 130.0);
    }

    #[test]
    fn test_reflect_horizontal_is_involution() {
        for d in [0.0f32, 10.0, 45.0, 90.0, 135.0, 200.0, 270.0, 359.0] {
            assert_eq!(reflect_horizontal(reflect_horizontal(d)), d);
            let once = normalize_degrees(reflect_horizontal(d));
            assert!((normalize_degrees(reflect_horizontal(once)) - d).abs() < 1e-4);
        }
    }

    #[test]
    fn test_single_block_hit_reverses_once() {
        let mut state = running_state();
        let target = state.blocks[0].rect.center();
        park_ball(&mut state, target, 60.0);

        let events = resolve(&mut state);
        assert_eq!(state.blocks.len(), 29);
        assert_eq!(state.ball.direction, 240.0);
        assert_eq!(state.pending_hide.len(), 1);
        assert!(matches!(events[0], GameEvent::BlockDestroyed { .. }));
    }

    #[test]
    fn test_multiple_block_hits_reverse_once() {
        let mut state = running_state();
        // Blocks 0 and 1 are centered at x=100 and x=200 with 20 units between
        // them; a ball centered at x=150 touches both.
        park_ball(&mut state, Vec2::new(150.0, 55.0), 80.0);

        let events = resolve(&mut state);
        assert_eq!(state.blocks.len(), 28);
        assert_eq!(state.ball.direction, 260.0);
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BlockDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_blocks_keep_order_after_removal() {
        let mut state = running_state();
        let third = state.blocks[2].rect.visual();
        let target = state.blocks[1].rect.center();
        park_ball(&mut state, target, 60.0);
        resolve(&mut state);
        assert_eq!(state.blocks[1].rect.visual(), third);
    }

    #[test]
    fn test_paddle_hit_overrides_direction() {
        let mut state = running_state();
        let paddle = state.paddle.rect.center();
        park_ball(&mut state, Vec2::new(paddle.x, paddle.y - 20.0), 270.0);

        let events = resolve(&mut state);
        assert_eq!(state.ball.direction, 90.0);
        assert_eq!(events, vec![GameEvent::PaddleHit { direction: 90.0 }]);
    }

    #[test]
    fn test_paddle_hit_left_of_center_goes_left() {
        let mut state = running_state();
        let paddle = state.paddle.rect.center();
        park_ball(&mut state, Vec2::new(paddle.x - 50.0, paddle.y - 20.0), 270.0);

        resolve(&mut state);
        assert_eq!(state.ball.direction, 130.0);
    }

    #[test]
    fn test_paddle_beats_block_same_tick() {
        let mut state = running_state();
        // Drop a block onto the paddle so one ball position touches both
        let paddle = state.paddle.rect.center();
        state.blocks[0].rect.set_center(Vec2::new(paddle.x, paddle.y - 40.0));
        park_ball(&mut state, Vec2::new(paddle.x, paddle.y - 25.0), 300.0);

        resolve(&mut state);
        assert_eq!(state.blocks.len(), 29);
        assert_eq!(state.ball.direction, 90.0);
    }

    #[test]
    fn test_side_wall_reflection() {
        let mut state = running_state();
        park_ball(&mut state, Vec2::new(-1.0, 500.0), 200.0);
        resolve(&mut state);
        assert!((state.ball.direction - 340.0).abs() < 1e-4);

        park_ball(&mut state, Vec2::new(601.0, 500.0), 20.0);
        resolve(&mut state);
        assert!((state.ball.direction - 160.0).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounds_are_inclusive() {
        let mut state = running_state();
        park_ball(&mut state, Vec2::new(600.0, 500.0), 20.0);
        resolve(&mut state);
        assert_eq!(state.ball.direction, 20.0);

        park_ball(&mut state, Vec2::new(0.0, 500.0), 200.0);
        resolve(&mut state);
        assert_eq!(state.ball.direction, 200.0);
    }

    #[test]
    fn test_ceiling_reflection_speeds_up() {
        let mut state = running_state();
        park_ball(&mut state, Vec2::new(300.0, -1.0), 60.0);

        let events = resolve(&mut state);
        assert_eq!(state.ball.direction, 300.0);
        assert_eq!(state.ball.speed, 1.0);
        assert_eq!(events, vec![GameEvent::CeilingBounce { speed: 1.0 }]);
    }

    #[test]
    fn test_ball_below_guard_does_not_move() {
        let mut state = running_state();
        state.ball.rect.set_center(Vec2::new(300.0, 1000.0));
        state.ball.direction = 270.0;
        resolve(&mut state);
        assert_eq!(state.ball.rect.center(), Vec2::new(300.0, 1000.0));
    }

    #[test]
    fn test_no_blocks_left_is_fine() {
        let mut state = running_state();
        state.blocks.clear();
        let before = state.ball.rect.center();
        let events = resolve(&mut state);
        assert!(events.is_empty());
        assert_ne!(state.ball.rect.center(), before);
    }
}
