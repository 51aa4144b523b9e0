//! Per-frame dispatch of raw input events against a binding table
//!
//! Events are queued as they arrive from the window system and resolved in
//! one batch per frame: every press, release and scroll is applied in
//! arrival order before any `on_held` callback runs, and all `on_held`
//! callbacks of a frame see the same capped `dt`.

use glam::Vec2;

use super::table::BindingTable;
use super::types::Keycode;

/// Default ceiling on the per-frame time step, in seconds
pub const DEFAULT_MAX_DT: f32 = 1.0 / 15.0;

/// Raw input delivered by the window system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key or mouse button pressed; `repeat` marks OS auto-repeat
    KeyDown { keycode: Keycode, repeat: bool },
    /// Key or mouse button released
    KeyUp { keycode: Keycode },
    /// Cursor position in window pixels
    CursorMoved { x: f32, y: f32 },
    /// Scroll wheel delta; positive `dy` scrolls up, positive `dx` right
    Scroll { dx: f32, dy: f32 },
    /// Window lost input focus; all held keys are released
    FocusLost,
}

/// Queues input events and resolves them once per frame
#[derive(Debug, Clone)]
pub struct Dispatcher {
    max_dt: f32,
    pending: Vec<InputEvent>,
}

impl Dispatcher {
    /// Create a dispatcher capping the frame step at `max_dt` seconds
    pub fn new(max_dt: f32) -> Self {
        let max_dt = if max_dt.is_finite() && max_dt > 0.0 {
            max_dt
        } else {
            tracing::warn!("Invalid max_dt {}, using {}", max_dt, DEFAULT_MAX_DT);
            DEFAULT_MAX_DT
        };
        Self {
            max_dt,
            pending: Vec::new(),
        }
    }

    /// Configured frame step ceiling
    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }

    /// Clamp a raw elapsed time to `[0, max_dt]`
    pub fn cap_dt(&self, raw_dt: f32) -> f32 {
        if raw_dt.is_nan() {
            return 0.0;
        }
        raw_dt.clamp(0.0, self.max_dt)
    }

    /// Queue an event for the next frame
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Number of events waiting for the next frame
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply a single event immediately
    pub fn handle_event<C>(&self, table: &mut BindingTable<C>, ctx: &mut C, event: InputEvent) {
        match event {
            InputEvent::KeyDown { keycode, repeat } => {
                let claimed = table.press(keycode, ctx);
                if repeat && !claimed {
                    tracing::trace!("Dropping repeat of unclaimed keycode {}", keycode);
                }
            }
            InputEvent::KeyUp { keycode } => table.release(keycode, ctx),
            InputEvent::CursorMoved { x, y } => table.cursor_moved(Vec2::new(x, y)),
            InputEvent::Scroll { dx, dy } => {
                if dy > 0.0 {
                    table.pulse(Keycode::SCROLL_UP, dy, ctx);
                } else if dy < 0.0 {
                    table.pulse(Keycode::SCROLL_DOWN, dy, ctx);
                }
                if dx > 0.0 {
                    table.pulse(Keycode::SCROLL_RIGHT, dx, ctx);
                } else if dx < 0.0 {
                    table.pulse(Keycode::SCROLL_LEFT, dx, ctx);
                }
            }
            InputEvent::FocusLost => table.release_all(ctx),
        }
    }

    /// Resolve all queued events, then run the per-frame callbacks
    ///
    /// Returns the capped `dt` that was handed to `on_held`.
    pub fn frame_update<C>(&mut self, table: &mut BindingTable<C>, ctx: &mut C, raw_dt: f32) -> f32 {
        let events = std::mem::take(&mut self.pending);
        for event in &events {
            self.handle_event(table, ctx, *event);
        }

        // Reuse the allocation next frame
        self.pending = events;
        self.pending.clear();

        let dt = self.cap_dt(raw_dt);
        if dt < raw_dt {
            tracing::debug!("Frame step {:.3}s capped to {:.3}s", raw_dt, dt);
        }
        table.run_held(dt, ctx);
        dt
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DT)
    }
}
