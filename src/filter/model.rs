//! The filter component model: record set, filter state, panel controls, and
//! the cached engine outcome.

use super::engine;
use super::keys::FilterKeyMap;
use super::style::FilterStyles;
use super::types::{FilterState, Outcome, SortKey};
use crate::catalog::{player_value_domain, GameCard};
use crate::{searchinput, select};

/// One list's filter controller.
///
/// Owns the immutable record set, the mutable [`FilterState`], the panel
/// controls, and the last engine [`Outcome`]. Every state mutation re-runs
/// the engine over the full record set; the view then renders rows in the
/// resulting order, skipping hidden ones.
pub struct Model {
    pub(super) title: String,
    pub(super) cards: Vec<GameCard>,
    pub(super) state: FilterState,
    pub(super) outcome: Outcome,
    pub(super) domain: Vec<i32>,

    // Panel controls
    pub(super) search: searchinput::Model,
    pub(super) min_select: select::Model,
    pub(super) max_select: select::Model,

    // UI state
    pub(super) keymap: FilterKeyMap,
    pub(super) styles: FilterStyles,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) viewport_start: usize,
    pub(super) show_help: bool,
}

impl Model {
    /// Creates a controller over the given records.
    ///
    /// The player-count domain is computed once here and seeds both range
    /// selectors identically; the initial outcome shows every record in
    /// title order.
    pub fn new(cards: Vec<GameCard>, width: usize, height: usize) -> Self {
        let domain = player_value_domain(&cards);
        let state = FilterState::default();
        let outcome = engine::apply(&cards, &state);

        let styles = FilterStyles::default();
        let mut search = searchinput::new();
        search.placeholder = "title".to_string();
        search.prompt_style = styles.search_prompt.clone();
        search.cursor_style = styles.search_cursor.clone();

        Self {
            title: "Games".to_string(),
            min_select: select::Model::new("min", &domain),
            max_select: select::Model::new("max", &domain),
            cards,
            state,
            outcome,
            domain,
            search,
            keymap: FilterKeyMap::default(),
            styles,
            width,
            height,
            viewport_start: 0,
            show_help: false,
        }
    }

    /// Sets the heading shown above the panel.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// The current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The player-count domain seeding both selectors.
    pub fn domain(&self) -> &[i32] {
        &self.domain
    }

    /// Total number of records.
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Number of currently visible records.
    pub fn visible_count(&self) -> usize {
        self.outcome.visible_count
    }

    /// Whether the record set is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Visible records in display order.
    pub fn visible_cards(&self) -> Vec<&GameCard> {
        self.outcome
            .order
            .iter()
            .filter(|&&i| self.outcome.visible[i])
            .map(|&i| &self.cards[i])
            .collect()
    }

    /// Replaces the query and re-evaluates.
    pub fn set_query(&mut self, query: &str) {
        if self.state.query == query {
            return;
        }
        self.state.query = query.to_string();
        self.reapply();
    }

    /// Flips the solo-support filter and re-evaluates.
    pub fn toggle_solo(&mut self) {
        self.state.solo_only = !self.state.solo_only;
        self.reapply();
    }

    /// Steps the minimum selector and re-evaluates on change.
    pub fn cycle_min(&mut self, forward: bool) {
        let changed = if forward {
            self.min_select.next()
        } else {
            self.min_select.prev()
        };
        if changed {
            self.state.range_min = self.min_select.value();
            self.reapply();
        }
    }

    /// Steps the maximum selector and re-evaluates on change.
    pub fn cycle_max(&mut self, forward: bool) {
        let changed = if forward {
            self.max_select.next()
        } else {
            self.max_select.prev()
        };
        if changed {
            self.state.range_max = self.max_select.value();
            self.reapply();
        }
    }

    /// Activates a sort order; pressing the already-active order is a no-op.
    pub fn set_sort(&mut self, sort_by: SortKey) {
        if self.state.sort_by == sort_by {
            return;
        }
        self.state.sort_by = sort_by;
        self.reapply();
    }

    /// Clears every filter back to its default and re-evaluates.
    pub fn reset(&mut self) {
        self.search.set_value("");
        self.min_select.reset();
        self.max_select.reset();
        self.state = FilterState::default();
        self.reapply();
    }

    /// Resizes the component.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp_viewport();
    }

    pub(super) fn reapply(&mut self) {
        self.outcome = engine::apply(&self.cards, &self.state);
        // Results form a new logical list; show them from the top.
        self.viewport_start = 0;
    }

    pub(super) fn scroll_up(&mut self) {
        self.viewport_start = self.viewport_start.saturating_sub(1);
    }

    pub(super) fn scroll_down(&mut self) {
        self.viewport_start += 1;
        self.clamp_viewport();
    }

    pub(super) fn clamp_viewport(&mut self) {
        let max_start = self
            .outcome
            .visible_count
            .saturating_sub(self.rows_per_view());
        if self.viewport_start > max_start {
            self.viewport_start = max_start;
        }
    }

    /// Rows that fit between the panel and the footer.
    pub(super) fn rows_per_view(&self) -> usize {
        // Heading + two panel lines above, count + help below.
        let chrome = 5;
        self.height.saturating_sub(chrome).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn visible_titles(m: &Model) -> Vec<&str> {
        m.visible_cards().iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn new_model_shows_everything_in_title_order() {
        let m = sample_model();
        assert_eq!(visible_titles(&m), vec!["Hanabi", "Ito", "Kitchen Rush"]);
        assert_eq!(m.visible_count(), 3);
        assert_eq!(m.count_label(), None);
    }

    #[test]
    fn domain_seeds_both_selectors() {
        let m = sample_model();
        assert_eq!(m.domain(), &[1, 2, 3, 4, 5]);
        assert_eq!(m.min_select.option_labels(), m.max_select.option_labels());
        assert_eq!(m.min_select.option_labels().len(), 6);
    }

    #[test]
    fn solo_toggle_filters_and_labels_count() {
        let mut m = sample_model();
        m.toggle_solo();
        assert_eq!(visible_titles(&m), vec!["Ito"]);
        assert_eq!(m.count_label(), Some("1 / 3".to_string()));

        m.toggle_solo();
        assert_eq!(m.visible_count(), 3);
        assert_eq!(m.count_label(), None);
    }

    #[test]
    fn query_mutation_reapplies() {
        let mut m = sample_model();
        m.set_query("hana");
        assert_eq!(visible_titles(&m), vec!["Hanabi"]);
        m.set_query("");
        assert_eq!(m.visible_count(), 3);
    }

    #[test]
    fn selecting_active_sort_is_a_no_op() {
        let mut m = sample_model();
        m.set_sort(SortKey::Year);
        let before = m.outcome.clone();
        m.set_sort(SortKey::Year);
        assert_eq!(m.outcome, before);
        assert_eq!(m.state().sort_by, SortKey::Year);
    }

    #[test]
    fn sort_switch_reorders_rows() {
        let mut m = sample_model();
        m.set_sort(SortKey::Year);
        assert_eq!(visible_titles(&m), vec!["Hanabi", "Ito", "Kitchen Rush"]);
        m.set_sort(SortKey::Title);
        assert_eq!(visible_titles(&m), vec!["Hanabi", "Ito", "Kitchen Rush"]);
    }

    #[test]
    fn cycling_selects_updates_range_state() {
        let mut m = sample_model();
        m.cycle_min(true);
        assert_eq!(m.state().range_min, Some(1));
        m.cycle_min(false);
        assert_eq!(m.state().range_min, None);

        m.cycle_max(false);
        assert_eq!(m.state().range_max, Some(5));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut m = sample_model();
        m.set_query("hana");
        m.toggle_solo();
        m.cycle_min(true);
        m.set_sort(SortKey::Year);

        m.reset();
        assert_eq!(*m.state(), FilterState::default());
        assert_eq!(m.visible_count(), 3);
        assert_eq!(m.min_select.value(), None);
    }

    #[test]
    fn panel_spec_reflects_state() {
        let mut m = sample_model();
        m.toggle_solo();
        m.set_sort(SortKey::Year);
        let spec = m.panel_spec();

        assert!(spec.solo_chip.active);
        assert_eq!(spec.min_select.options[0], "any");
        let active: Vec<&str> = spec
            .sort_chips
            .iter()
            .filter(|c| c.active)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(active, vec!["year"]);
        assert_eq!(spec.count_label, Some("1 / 3".to_string()));
    }

    #[test]
    fn reapply_resets_viewport() {
        let mut m = sample_model();
        m.viewport_start = 2;
        m.set_query("ito");
        assert_eq!(m.viewport_start, 0);
    }
}
