//! Block Break entry point
//!
//! Runs a headless session against the in-memory scene graph, feeding the
//! loop the same way a host timer and event filter would.

use std::path::Path;

use block_break::consts::PADDLE_STEP;
use block_break::platform::{Command, HostEvent, Key};
use block_break::renderer::SceneGraph;
use block_break::sim::GameEvent;
use block_break::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Block Break (headless) starting...");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    if let Ok(json) = settings.to_json() {
        log::debug!("Settings: {}", json);
    }
    let seed = settings.effective_seed();
    let mut game = Game::new(seed, SceneGraph::new(), &settings);
    game.start_session();

    let dt = game.clock().step();
    let mut destroyed = 0usize;
    let mut paddle_hits = 0usize;

    for _ in 0..settings.demo_ticks() {
        if settings.autoplay {
            if let Some(key) = chase_key(&game)
                && game.pending_command() != Command::from_key(key)
            {
                game.handle_event(HostEvent::KeyPress(key));
            }
        }

        for event in game.update(dt) {
            match event {
                GameEvent::BlockDestroyed { .. } => destroyed += 1,
                GameEvent::PaddleHit { .. } => paddle_hits += 1,
                _ => {}
            }
        }
    }

    let state = game.state();
    log::info!(
        "Seed {}: {} ticks, {} blocks destroyed, {} paddle hits, {} blocks left, ball speed {}",
        seed,
        state.time_ticks,
        destroyed,
        paddle_hits,
        state.blocks.len(),
        state.ball.speed
    );

    log::info!(
        "{} of {} visuals still shown",
        game.renderer().visible_count(),
        game.renderer().len()
    );

    game.handle_event(HostEvent::Close);
    game.teardown_scene();
}

/// Arrow key that moves the paddle under the ball, if it is more than a step away
fn chase_key(game: &Game<SceneGraph>) -> Option<Key> {
    let state = game.state();
    let dx = state.ball.rect.center().x - state.paddle.rect.center().x;
    if dx > PADDLE_STEP {
        Some(Key::Right)
    } else if dx < -PADDLE_STEP {
        Some(Key::Left)
    } else {
        None
    }
}
