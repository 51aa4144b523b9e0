//! Binding table: logical targets, per-keycode fallback chains and the
//! claim held by each pressed key

use std::collections::{BTreeMap, HashMap, HashSet};

use glam::Vec2;

use super::parser::Binder;
use super::target::KeyTarget;
use super::types::{KeyArg, Keycode};

/// The target that owns an in-progress key press
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// Name of the claiming target
    pub target: String,
    /// Cursor position when the press was claimed (or first seen after)
    anchor: Option<Vec2>,
    /// Cursor displacement since `anchor`
    pub mouse_rel: Vec2,
}

impl Claim {
    fn new(target: &str, cursor: Option<Vec2>) -> Self {
        Self {
            target: target.to_string(),
            anchor: cursor,
            mouse_rel: Vec2::ZERO,
        }
    }

    fn arg(&self) -> KeyArg {
        KeyArg {
            mouse_rel_x: self.mouse_rel.x,
            mouse_rel_y: self.mouse_rel.y,
            ..KeyArg::default()
        }
    }
}

/// Registered targets and the keycodes bound to them
///
/// `C` is the context handed to every target callback (usually the viewer
/// state that owns the camera).
pub struct BindingTable<C> {
    /// Logical targets by name
    targets: HashMap<String, Box<dyn KeyTarget<C>>>,
    /// Candidate target names per keycode, highest priority first
    chains: HashMap<Keycode, Vec<String>>,
    /// A keycode is present iff it is held down and some target claimed it
    active: BTreeMap<Keycode, Claim>,
    /// Keys held down that no target accepted; ignored until released
    unclaimed: HashSet<Keycode>,
    /// Last known cursor position
    cursor: Option<Vec2>,
}

impl<C> BindingTable<C> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            chains: HashMap::new(),
            active: BTreeMap::new(),
            unclaimed: HashSet::new(),
            cursor: None,
        }
    }

    /// Register a logical target under `name`
    ///
    /// Returns `false` (and keeps the existing target) if the name is
    /// already taken.
    pub fn add_target(&mut self, name: impl Into<String>, target: impl KeyTarget<C> + 'static) -> bool {
        let name = name.into();
        if self.targets.contains_key(&name) {
            tracing::warn!("Key target {} registered twice; keeping the first", name);
            return false;
        }
        self.targets.insert(name, Box::new(target));
        true
    }

    /// Append `target_name` to the fallback chain of `keycode`
    pub fn bind(&mut self, keycode: Keycode, target_name: impl Into<String>) {
        self.chains.entry(keycode).or_default().push(target_name.into());
    }

    /// Whether a target with this name is registered
    pub fn has_target(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Number of registered targets
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Fallback chain for a keycode, highest priority first
    pub fn chain(&self, keycode: Keycode) -> &[String] {
        self.chains.get(&keycode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All keycodes bound to the named target, in ascending order
    pub fn keycodes_for(&self, target_name: &str) -> Vec<Keycode> {
        let mut codes: Vec<Keycode> = self
            .chains
            .iter()
            .filter(|(_, chain)| chain.iter().any(|n| n == target_name))
            .map(|(code, _)| *code)
            .collect();
        codes.sort();
        codes
    }

    /// Bindings whose target name is not registered; such bindings are inert
    pub fn dead_bindings(&self) -> Vec<(Keycode, String)> {
        let mut dead: Vec<(Keycode, String)> = self
            .chains
            .iter()
            .flat_map(|(code, chain)| chain.iter().map(move |name| (*code, name)))
            .filter(|(_, name)| !self.targets.contains_key(*name))
            .map(|(code, name)| (code, name.clone()))
            .collect();
        dead.sort();
        dead.dedup();
        dead
    }

    /// Name of the target holding `keycode`, if any
    pub fn claimant(&self, keycode: Keycode) -> Option<&str> {
        self.active.get(&keycode).map(|claim| claim.target.as_str())
    }

    /// The claim for a held keycode
    pub fn claim(&self, keycode: Keycode) -> Option<&Claim> {
        self.active.get(&keycode)
    }

    /// Keycodes currently held and claimed
    pub fn held_keycodes(&self) -> impl Iterator<Item = Keycode> + '_ {
        self.active.keys().copied()
    }

    /// Last cursor position reported to the table
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Raw key-down for `keycode`
    ///
    /// An idle key tries each target of its chain in priority order; the
    /// first whose `on_press` succeeds claims the key. A claimed key only
    /// re-notifies its claimant with `repeat = true`. A key that nobody
    /// claimed stays ignored until it is released. Returns whether the key
    /// is claimed after the event.
    pub fn press(&mut self, keycode: Keycode, ctx: &mut C) -> bool {
        if let Some(claim) = self.active.get(&keycode) {
            if let Some(target) = self.targets.get_mut(&claim.target) {
                let arg = KeyArg {
                    repeat: true,
                    ..claim.arg()
                };
                target.on_press(ctx, arg);
            }
            return true;
        }

        if self.unclaimed.contains(&keycode) {
            return false;
        }

        match self.try_claim(keycode, KeyArg::press(false), ctx) {
            Some(name) => {
                tracing::trace!("Keycode {} claimed by {}", keycode, name);
                let claim = Claim::new(&name, self.cursor);
                self.active.insert(keycode, claim);
                true
            }
            None => {
                if self.chains.contains_key(&keycode) {
                    tracing::trace!("Keycode {} not claimed by any target", keycode);
                }
                self.unclaimed.insert(keycode);
                false
            }
        }
    }

    /// Raw key-up for `keycode`; notifies the claimant, if any
    pub fn release(&mut self, keycode: Keycode, ctx: &mut C) {
        self.unclaimed.remove(&keycode);
        let Some(claim) = self.active.remove(&keycode) else {
            return;
        };
        if let Some(target) = self.targets.get_mut(&claim.target) {
            target.on_release(ctx, claim.arg());
        }
    }

    /// Release every held key, e.g. when the window loses focus
    pub fn release_all(&mut self, ctx: &mut C) {
        let held: Vec<Keycode> = self.active.keys().copied().collect();
        for keycode in held {
            self.release(keycode, ctx);
        }
        self.unclaimed.clear();
    }

    /// Immediate press without a held state, used for scroll directions
    ///
    /// Returns whether some target accepted it.
    pub fn pulse(&mut self, keycode: Keycode, amount: f32, ctx: &mut C) -> bool {
        self.try_claim(keycode, KeyArg::scroll(amount), ctx).is_some()
    }

    /// Cursor moved to `pos`; updates the displacement of every claim
    pub fn cursor_moved(&mut self, pos: Vec2) {
        self.cursor = Some(pos);
        for claim in self.active.values_mut() {
            let anchor = *claim.anchor.get_or_insert(pos);
            claim.mouse_rel = pos - anchor;
        }
    }

    /// Run `on_held` for every claimed key with this frame's `dt`
    pub fn run_held(&mut self, dt: f32, ctx: &mut C) {
        for claim in self.active.values() {
            if let Some(target) = self.targets.get_mut(&claim.target) {
                let arg = KeyArg { dt, ..claim.arg() };
                target.on_held(ctx, arg);
            }
        }
    }

    /// First target in the chain whose `on_press` accepts `arg`
    fn try_claim(&mut self, keycode: Keycode, arg: KeyArg, ctx: &mut C) -> Option<String> {
        let chain = self.chains.get(&keycode)?;
        for name in chain {
            // Unregistered names are silently inert
            let Some(target) = self.targets.get_mut(name) else {
                continue;
            };
            if target.on_press(ctx, arg) {
                return Some(name.clone());
            }
        }
        None
    }
}

impl<C> Default for BindingTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Binder for BindingTable<C> {
    fn bind_keycode(&mut self, keycode: Keycode, target_name: &str) {
        self.bind(keycode, target_name);
    }
}

impl<C> std::fmt::Debug for BindingTable<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut targets: Vec<&String> = self.targets.keys().collect();
        targets.sort();
        f.debug_struct("BindingTable")
            .field("targets", &targets)
            .field("chains", &self.chains)
            .field("active", &self.active)
            .finish()
    }
}
