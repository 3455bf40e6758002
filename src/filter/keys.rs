//! Key bindings for the filter component.
//!
//! ## Browse mode
//!
//! - **Search**: `/` focuses the search input
//! - **Solo chip**: `s` toggles the solo-support filter
//! - **Range selects**: `[`/`]` cycle the minimum, `{`/`}` the maximum
//! - **Sort chips**: `t` title order, `y` year order
//! - **Scrolling**: `↑/k` and `↓/j`
//! - **Reset**: `esc` clears every filter
//! - **Help**: `?` toggles the expanded help, `q`/`ctrl+c` quit
//!
//! ## While searching
//!
//! Characters edit the query and re-filter live; `enter` or `esc` returns to
//! browse mode, keeping the query.

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for filter navigation and control-panel interaction.
#[derive(Debug, Clone)]
pub struct FilterKeyMap {
    /// Focus the search input.
    pub focus_search: key::Binding,
    /// Leave the search input, keeping the query.
    pub accept_search: key::Binding,
    /// Toggle the solo-support chip.
    pub toggle_solo: key::Binding,
    /// Step the minimum player select backward.
    pub min_prev: key::Binding,
    /// Step the minimum player select forward.
    pub min_next: key::Binding,
    /// Step the maximum player select backward.
    pub max_prev: key::Binding,
    /// Step the maximum player select forward.
    pub max_next: key::Binding,
    /// Activate title order.
    pub sort_title: key::Binding,
    /// Activate year order.
    pub sort_year: key::Binding,
    /// Scroll the rows up.
    pub scroll_up: key::Binding,
    /// Scroll the rows down.
    pub scroll_down: key::Binding,
    /// Reset every filter to its default.
    pub reset: key::Binding,
    /// Toggle the expanded help.
    pub toggle_help: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Force quit.
    pub force_quit: key::Binding,
}

impl Default for FilterKeyMap {
    fn default() -> Self {
        Self {
            focus_search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter, KeyCode::Esc])
                .with_help("enter", "done"),
            toggle_solo: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "solo only"),
            min_prev: key::Binding::new(vec![KeyCode::Char('[')]).with_help("[", "min down"),
            min_next: key::Binding::new(vec![KeyCode::Char(']')]).with_help("]", "min up"),
            max_prev: key::Binding::new(vec![KeyCode::Char('{')]).with_help("{", "max down"),
            max_next: key::Binding::new(vec![KeyCode::Char('}')]).with_help("}", "max up"),
            sort_title: key::Binding::new(vec![KeyCode::Char('t')]).with_help("t", "sort: title"),
            sort_year: key::Binding::new(vec![KeyCode::Char('y')]).with_help("y", "sort: year"),
            scroll_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            scroll_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            reset: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "reset filters"),
            toggle_help: key::Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::Binding::with_combos(vec![(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            )])
            .with_help("ctrl+c", "force quit"),
        }
    }
}

impl key::KeyMap for FilterKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.focus_search,
            &self.toggle_solo,
            &self.sort_title,
            &self.sort_year,
            &self.quit,
            &self.toggle_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.scroll_up, &self.scroll_down],
            vec![
                &self.focus_search,
                &self.toggle_solo,
                &self.min_prev,
                &self.min_next,
                &self.max_prev,
                &self.max_next,
                &self.reset,
            ],
            vec![
                &self.sort_title,
                &self.sort_year,
                &self.toggle_help,
                &self.quit,
            ],
        ]
    }
}
