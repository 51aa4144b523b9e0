//! Logical key targets: the handlers physical keys are bound to

use super::types::KeyArg;

/// Capability interface of a logical target over a mutable context `C`
///
/// Every callback has a default, so a target only implements what it needs.
/// A missing `on_press` counts as a successful claim; missing release and
/// per-frame callbacks do nothing.
pub trait KeyTarget<C> {
    /// Key pressed (or auto-repeated when `arg.repeat`). Returning `false`
    /// on a fresh press lets the next target in the fallback chain try.
    fn on_press(&mut self, _ctx: &mut C, _arg: KeyArg) -> bool {
        true
    }

    /// Key released after this target claimed it. Return value is ignored.
    fn on_release(&mut self, _ctx: &mut C, _arg: KeyArg) -> bool {
        true
    }

    /// Called once per frame while the claimed key stays down, with
    /// `arg.dt` and the cursor displacement since the claim.
    /// Return value is ignored.
    fn on_held(&mut self, _ctx: &mut C, _arg: KeyArg) -> bool {
        true
    }
}

type Callback<C> = Box<dyn FnMut(&mut C, KeyArg) -> bool>;

/// A key target assembled from optional closures
///
/// ```ignore
/// let sprint = Target::new()
///     .on_press(|viewer: &mut Viewer, _| { viewer.sprint = 7.0; true })
///     .on_release(|viewer, _| { viewer.sprint = 1.0; true });
/// ```
pub struct Target<C> {
    press: Option<Callback<C>>,
    release: Option<Callback<C>>,
    held: Option<Callback<C>>,
}

impl<C> Target<C> {
    /// A target with no callbacks: claims every press and does nothing
    pub fn new() -> Self {
        Self {
            press: None,
            release: None,
            held: None,
        }
    }

    /// Set the press callback (builder pattern)
    pub fn on_press(mut self, f: impl FnMut(&mut C, KeyArg) -> bool + 'static) -> Self {
        self.press = Some(Box::new(f));
        self
    }

    /// Set the release callback (builder pattern)
    pub fn on_release(mut self, f: impl FnMut(&mut C, KeyArg) -> bool + 'static) -> Self {
        self.release = Some(Box::new(f));
        self
    }

    /// Set the per-frame callback (builder pattern)
    pub fn on_held(mut self, f: impl FnMut(&mut C, KeyArg) -> bool + 'static) -> Self {
        self.held = Some(Box::new(f));
        self
    }
}

impl<C> Default for Target<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> KeyTarget<C> for Target<C> {
    fn on_press(&mut self, ctx: &mut C, arg: KeyArg) -> bool {
        self.press.as_mut().map_or(true, |f| f(ctx, arg))
    }

    fn on_release(&mut self, ctx: &mut C, arg: KeyArg) -> bool {
        self.release.as_mut().map_or(true, |f| f(ctx, arg))
    }

    fn on_held(&mut self, ctx: &mut C, arg: KeyArg) -> bool {
        self.held.as_mut().map_or(true, |f| f(ctx, arg))
    }
}

impl<C> std::fmt::Debug for Target<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("press", &self.press.is_some())
            .field("release", &self.release.is_some())
            .field("held", &self.held.is_some())
            .finish()
    }
}
