//! View rendering for the filter component.
//!
//! The panel renders from the pure [`PanelSpec`](super::panel::PanelSpec)
//! built by the model, rows render from the engine outcome, and the footer
//! carries the count label and the help line.

use super::style::ELLIPSIS;
use super::Model;
use crate::key::KeyMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

impl Model {
    pub(super) fn view_header(&self) -> String {
        let title = self.styles.title.clone().render(&self.title);
        self.styles.title_bar.clone().render(&title)
    }

    /// The two panel lines: the search input, then chips and selects.
    pub(super) fn view_panel(&self) -> String {
        let spec = self.panel_spec();

        let mut controls = Vec::new();
        controls.push(self.view_chip(&spec.solo_chip));
        controls.push(format!(
            "{} {}{}{}",
            self.styles.group_label.clone().render("players"),
            self.min_select
                .view(&self.styles.group_label, &self.styles.select_value),
            self.styles.group_label.clone().render("–"),
            self.max_select
                .view(&self.styles.group_label, &self.styles.select_value),
        ));
        let sort_chips: Vec<String> = spec
            .sort_chips
            .iter()
            .map(|chip| self.view_chip(chip))
            .collect();
        controls.push(format!(
            "{} {}",
            self.styles.group_label.clone().render("sort"),
            sort_chips.join(" "),
        ));

        format!("{}\n{}", self.search.view(), controls.join("  "))
    }

    fn view_chip(&self, chip: &super::panel::ChipSpec) -> String {
        let style = if chip.active {
            &self.styles.chip_active
        } else {
            &self.styles.chip_inactive
        };
        style.clone().render(&format!("[{}]", chip.label))
    }

    pub(super) fn view_rows(&self) -> String {
        if self.is_empty() {
            return self.styles.no_matches.clone().render("No games.");
        }
        if self.visible_count() == 0 {
            return self.styles.no_matches.clone().render("No games match.");
        }

        let rows: Vec<String> = self
            .visible_cards()
            .iter()
            .skip(self.viewport_start)
            .take(self.rows_per_view())
            .map(|card| {
                let mut meta = Vec::new();
                if let Some(year) = card.year {
                    meta.push(year.to_string());
                }
                if let Some((min, max)) = card.players() {
                    if min == max {
                        meta.push(format!("{}p", min));
                    } else {
                        meta.push(format!("{}–{}p", min, max));
                    }
                }
                let meta = meta.join(" · ");

                // Reserve room for the meta text; truncate the title to fit.
                let reserved = if meta.is_empty() {
                    0
                } else {
                    meta.width() + 2
                };
                let title_room = self.width.saturating_sub(reserved).max(4);
                let title = truncate_to_width(&card.title, title_room);

                if meta.is_empty() {
                    self.styles.row_title.clone().render(&title)
                } else {
                    format!(
                        "{}  {}",
                        self.styles.row_title.clone().render(&title),
                        self.styles.row_meta.clone().render(&meta),
                    )
                }
            })
            .collect();

        rows.join("\n")
    }

    /// Count label (blank while everything is visible) above the help line.
    pub(super) fn view_footer(&self) -> String {
        let count = match self.count_label() {
            Some(label) => self.styles.count.clone().render(&label),
            None => String::new(),
        };
        format!("{}\n{}", count, self.view_help())
    }

    fn view_help(&self) -> String {
        let entry = |b: &crate::key::Binding| format!("{} {}", b.help_key, b.help_desc);
        let text = if self.show_help {
            self.keymap
                .full_help()
                .iter()
                .map(|column| {
                    column
                        .iter()
                        .map(|b| entry(b))
                        .collect::<Vec<_>>()
                        .join(" • ")
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.keymap
                .short_help()
                .iter()
                .map(|b| entry(b))
                .collect::<Vec<_>>()
                .join(" • ")
        };
        self.styles.help.clone().render(&text)
    }
}

/// Cuts `s` to at most `max` display columns, appending an ellipsis when
/// anything was removed.
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}
