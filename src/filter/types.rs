//! Core types for the filter component: sort keys, filter state, and the
//! engine outcome.

/// Which total order the rows follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Collation order over titles (default).
    #[default]
    Title,
    /// Ascending year, missing years last, title as tiebreak.
    Year,
}

/// The full filter state of one list.
///
/// Mutated exclusively by input handlers; every mutation triggers a complete
/// re-evaluation of the record set. One instance per initialized list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search query as typed; normalized at match time.
    pub query: String,
    /// When set, only entries supporting a single player remain visible.
    pub solo_only: bool,
    /// Lower bound of the requested player-count range, if any.
    pub range_min: Option<i32>,
    /// Upper bound of the requested player-count range, if any.
    pub range_max: Option<i32>,
    /// Active sort order.
    pub sort_by: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            solo_only: false,
            range_min: None,
            range_max: None,
            sort_by: SortKey::Title,
        }
    }
}

/// Result of one engine evaluation over the full record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Card indices in display order; covers every card, hidden ones
    /// included, so a card that becomes visible again already has a
    /// deterministic position.
    pub order: Vec<usize>,
    /// Per-card visibility, indexed by original card index.
    pub visible: Vec<bool>,
    /// Number of visible cards.
    pub visible_count: usize,
}

impl Outcome {
    /// Total number of cards evaluated.
    pub fn total(&self) -> usize {
        self.visible.len()
    }

    /// Whether every card is visible (the count label hides in that case).
    pub fn all_visible(&self) -> bool {
        self.visible_count == self.total()
    }
}
