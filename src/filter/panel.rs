//! Pure structure description of the control panel.
//!
//! The panel is described as plain data first and rendered from that
//! description second, so the structure (which chips exist, which options the
//! selects offer, whether the count label shows) can be asserted in tests
//! without any rendering surface.

use super::types::SortKey;
use super::Model;

/// A toggle or sort chip: a label plus an active flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSpec {
    /// Chip caption.
    pub label: String,
    /// Whether the chip is currently engaged.
    pub active: bool,
}

/// A range selector: label, the full option list, and the selected index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSpec {
    /// Selector caption.
    pub label: String,
    /// Display labels, "no constraint" first, then every domain value.
    pub options: Vec<String>,
    /// Index of the selected option.
    pub selected: usize,
}

/// The whole control panel as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSpec {
    /// Current search query as typed.
    pub query: String,
    /// Solo-support toggle chip.
    pub solo_chip: ChipSpec,
    /// Minimum player-count selector.
    pub min_select: SelectSpec,
    /// Maximum player-count selector.
    pub max_select: SelectSpec,
    /// Sort chips; exactly one is active.
    pub sort_chips: Vec<ChipSpec>,
    /// Count label text, or `None` while every row is visible.
    pub count_label: Option<String>,
}

impl Model {
    /// Builds the control-panel structure for the current state.
    pub fn panel_spec(&self) -> PanelSpec {
        PanelSpec {
            query: self.state.query.clone(),
            solo_chip: ChipSpec {
                label: "solo".to_string(),
                active: self.state.solo_only,
            },
            min_select: SelectSpec {
                label: self.min_select.label.clone(),
                options: self.min_select.option_labels(),
                selected: self.min_select.selected_index(),
            },
            max_select: SelectSpec {
                label: self.max_select.label.clone(),
                options: self.max_select.option_labels(),
                selected: self.max_select.selected_index(),
            },
            sort_chips: vec![
                ChipSpec {
                    label: "title".to_string(),
                    active: self.state.sort_by == SortKey::Title,
                },
                ChipSpec {
                    label: "year".to_string(),
                    active: self.state.sort_by == SortKey::Year,
                },
            ],
            count_label: self.count_label(),
        }
    }

    /// `"<visible> / <total>"` while anything is filtered out, else `None`.
    pub fn count_label(&self) -> Option<String> {
        if self.outcome.all_visible() {
            None
        } else {
            Some(format!(
                "{} / {}",
                self.outcome.visible_count,
                self.outcome.total()
            ))
        }
    }
}
