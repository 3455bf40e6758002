//! Filter component: a control panel plus a filtered, sorted catalog list.
//!
//! The component owns one list's records and filter state. The control panel
//! sits directly above the rows and offers:
//! - a free-text search input (case-folded substring match on titles)
//! - a solo-support toggle chip
//! - min/max player-count selectors seeded from the shared value domain
//! - two mutually exclusive sort chips (title order active by default)
//! - a count label that appears only while rows are filtered out
//!
//! Every input event re-evaluates the whole record set through the pure
//! engine in [`engine`]; there is no incremental path. Rows are fully
//! re-ordered on every change so hidden rows already hold a deterministic
//! position when they reappear.
//!
//! ## States
//!
//! The component is either browsing (keys drive chips, selects, sorting, and
//! scrolling) or searching (keys edit the query live; `enter`/`esc` returns
//! to browsing and keeps the query).

pub mod keys;
pub mod style;

mod engine;
mod model;
mod panel;
mod rendering;
mod types;

pub use engine::{apply, normalize_range, title_order, year_order};
pub use keys::FilterKeyMap;
pub use model::Model;
pub use panel::{ChipSpec, PanelSpec, SelectSpec};
pub use style::FilterStyles;
pub use types::{FilterState, Outcome, SortKey};

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::new(vec![], 80, 24), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return None;
        };

        if self.search.focused() {
            if self.keymap.accept_search.matches(key_msg) {
                self.search.blur();
                return None;
            }
            if self.search.update(key_msg) {
                let query = self.search.value().to_string();
                self.set_query(&query);
            }
            return None;
        }

        if self.keymap.force_quit.matches(key_msg) || self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        } else if self.keymap.focus_search.matches(key_msg) {
            self.search.focus();
        } else if self.keymap.toggle_solo.matches(key_msg) {
            self.toggle_solo();
        } else if self.keymap.min_prev.matches(key_msg) {
            self.cycle_min(false);
        } else if self.keymap.min_next.matches(key_msg) {
            self.cycle_min(true);
        } else if self.keymap.max_prev.matches(key_msg) {
            self.cycle_max(false);
        } else if self.keymap.max_next.matches(key_msg) {
            self.cycle_max(true);
        } else if self.keymap.sort_title.matches(key_msg) {
            self.set_sort(SortKey::Title);
        } else if self.keymap.sort_year.matches(key_msg) {
            self.set_sort(SortKey::Year);
        } else if self.keymap.scroll_up.matches(key_msg) {
            self.scroll_up();
        } else if self.keymap.scroll_down.matches(key_msg) {
            self.scroll_down();
        } else if self.keymap.reset.matches(key_msg) {
            self.reset();
        } else if self.keymap.toggle_help.matches(key_msg) {
            self.show_help = !self.show_help;
        }
        None
    }

    fn view(&self) -> String {
        let sections = [
            self.view_header(),
            self.view_panel(),
            self.view_rows(),
            self.view_footer(),
        ];
        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameCard;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(m: &mut Model, code: KeyCode) -> Option<Cmd> {
        m.update(Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg)
    }

    fn sample_model() -> Model {
        Model::new(
            vec![
                GameCard::new("Ito", Some(2016), Some(1), Some(5)),
                GameCard::new("Hanabi", Some(2013), Some(2), Some(5)),
                GameCard::new("Kitchen Rush", None, Some(2), Some(5)),
            ],
            80,
            24,
        )
    }

    #[test]
    fn slash_enters_search_and_typing_filters_live() {
        let mut m = sample_model();
        press(&mut m, KeyCode::Char('/'));
        press(&mut m, KeyCode::Char('i'));
        press(&mut m, KeyCode::Char('t'));
        press(&mut m, KeyCode::Char('o'));

        assert_eq!(m.state().query, "ito");
        assert_eq!(m.visible_count(), 1);

        // Leaving search keeps the query applied.
        press(&mut m, KeyCode::Enter);
        assert_eq!(m.visible_count(), 1);
    }

    #[test]
    fn search_keys_do_not_trigger_browse_bindings() {
        let mut m = sample_model();
        press(&mut m, KeyCode::Char('/'));
        // 's' must type into the query, not toggle the solo chip.
        press(&mut m, KeyCode::Char('s'));
        assert!(!m.state().solo_only);
        assert_eq!(m.state().query, "s");
    }

    #[test]
    fn solo_key_toggles_chip() {
        let mut m = sample_model();
        press(&mut m, KeyCode::Char('s'));
        assert!(m.state().solo_only);
        assert_eq!(m.visible_count(), 1);
        press(&mut m, KeyCode::Char('s'));
        assert!(!m.state().solo_only);
    }

    #[test]
    fn sort_keys_switch_orders_and_ignore_repeats() {
        let mut m = sample_model();
        press(&mut m, KeyCode::Char('y'));
        assert_eq!(m.state().sort_by, SortKey::Year);
        let before = m.panel_spec();
        press(&mut m, KeyCode::Char('y'));
        assert_eq!(m.panel_spec(), before);
        press(&mut m, KeyCode::Char('t'));
        assert_eq!(m.state().sort_by, SortKey::Title);
    }

    #[test]
    fn bracket_keys_drive_range_selects() {
        let mut m = sample_model();
        press(&mut m, KeyCode::Char(']'));
        assert_eq!(m.state().range_min, Some(1));
        press(&mut m, KeyCode::Char('['));
        assert_eq!(m.state().range_min, None);
        press(&mut m, KeyCode::Char('}'));
        assert_eq!(m.state().range_max, Some(1));
    }

    #[test]
    fn escape_resets_filters_in_browse_mode() {
        let mut m = sample_model();
        press(&mut m, KeyCode::Char('s'));
        press(&mut m, KeyCode::Char(']'));
        press(&mut m, KeyCode::Esc);
        assert_eq!(*m.state(), FilterState::default());
        assert_eq!(m.visible_count(), 3);
    }

    #[test]
    fn quit_key_returns_command() {
        let mut m = sample_model();
        assert!(press(&mut m, KeyCode::Char('q')).is_some());
    }

    #[test]
    fn view_contains_panel_rows_and_help() {
        let mut m = sample_model();
        m.toggle_solo();
        let view = m.view();
        assert!(view.contains("[solo]"));
        assert!(view.contains("Ito"));
        assert!(view.contains("1 / 3"));
        assert!(view.contains("search"));
    }
}
