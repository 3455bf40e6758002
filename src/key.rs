//! Type-safe key bindings with built-in help metadata.
//!
//! A [`Binding`] couples the key combinations that trigger an action with the
//! short help text shown in the footer. Components expose their bindings
//! through the [`KeyMap`] trait so help lines can be assembled generically.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single action bound to one or more key combinations.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<(KeyCode, KeyModifiers)>,
    /// Key legend shown in help, e.g. "↑/k".
    pub help_key: String,
    /// Short action description shown in help, e.g. "scroll up".
    pub help_desc: String,
}

impl Binding {
    /// Creates a binding for plain (unmodified) keys.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(|k| (k, KeyModifiers::NONE)).collect(),
            help_key: String::new(),
            help_desc: String::new(),
        }
    }

    /// Creates a binding from explicit key/modifier combinations.
    pub fn with_combos(keys: Vec<(KeyCode, KeyModifiers)>) -> Self {
        Self {
            keys,
            help_key: String::new(),
            help_desc: String::new(),
        }
    }

    /// Attaches help metadata.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help_key = key.to_string();
        self.help_desc = desc.to_string();
        self
    }

    /// Returns true when the incoming key message triggers this binding.
    ///
    /// Plain bindings match on the key code alone so that terminals reporting
    /// an implicit SHIFT for upper-case characters still match; bindings with
    /// explicit modifiers require them exactly.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.iter().any(|(code, mods)| {
            if *mods == KeyModifiers::NONE {
                *code == msg.key
            } else {
                *code == msg.key && msg.modifiers.contains(*mods)
            }
        })
    }
}

/// Components implement this to surface their bindings to help rendering.
pub trait KeyMap {
    /// The handful of bindings worth showing in the one-line help footer.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
