//! Loop driver
//!
//! `Game` owns the session state, the renderer, the pending input and the
//! fixed-rate clock. The host calls `handle_event` from its event filter,
//! `update` from its timer, and `start_session`/`teardown_scene` from its UI.

use crate::platform::{Command, FixedClock, HostEvent, InputSlot};
use crate::renderer::{self, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
pub struct Game<R: Renderer> {
    state: GameState,
    renderer: R,
    input: InputSlot,
    clock: FixedClock,
    log_events: bool,
}

impl<R: Renderer> Game<R> {
    /// Build the scene in `renderer` and get ready to start
    pub fn new(seed: u64, mut renderer: R, settings: &Settings) -> Self {
        let state = GameState::new(seed, &mut renderer);
        Self {
            state,
            renderer,
            input: InputSlot::new(),
            clock: FixedClock::new(settings.tick_rate),
            log_events: settings.log_events,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    /// False once the window has been closed
    pub fn is_open(&self) -> bool {
        self.clock.is_running()
    }

    /// Event filter entry point
    pub fn handle_event(&mut self, event: HostEvent) {
        self.input.observe(&event);
        if event == HostEvent::Close {
            self.clock.stop();
        }
    }

    /// Queue a command directly, replacing any pending one
    pub fn push_command(&mut self, command: Command) {
        self.input.push(command);
    }

    /// Command waiting for the next tick, left in place
    pub fn pending_command(&self) -> Option<Command> {
        self.input.peek()
    }

    /// Take the pending command, if any
    pub fn consume_latest_event(&mut self) -> Option<Command> {
        self.input.take()
    }

    /// Start button: (re)spawn the ball and run
    pub fn start_session(&mut self) {
        self.state.start_session();
        renderer::sync(&mut self.state, &mut self.renderer);
    }

    /// Run exactly one tick and sync the view
    pub fn step(&mut self) -> Vec<GameEvent> {
        let input = TickInput {
            command: self.consume_latest_event(),
        };
        let events = tick(&mut self.state, &input);
        renderer::sync(&mut self.state, &mut self.renderer);

        for event in &events {
            if self.log_events {
                log::info!("tick {}: {:?}", self.state.time_ticks, event);
            } else {
                log::debug!("tick {}: {:?}", self.state.time_ticks, event);
            }
        }
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::BlockDestroyed { .. }))
            && self.state.blocks.is_empty()
        {
            log::info!("All blocks cleared; ball keeps bouncing");
        }

        events
    }

    /// Timer entry point: run every tick due after `dt` seconds
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let due = self.clock.advance(dt);
        let mut events = Vec::new();
        for _ in 0..due {
            events.extend(self.step());
        }
        events
    }

    /// Window closed: stop the timer and clear the scene
    pub fn teardown_scene(&mut self) {
        self.clock.stop();
        self.renderer.reset();
    }
}
