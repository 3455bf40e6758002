//! Styling for the filter component.
//!
//! Built on lipgloss with adaptive colors throughout, so the panel reads well
//! on both light and dark terminal themes.

use lipgloss_extras::prelude::*;

/// Unicode ellipsis used when a row is truncated to the component width.
pub const ELLIPSIS: &str = "…";

/// Styling configuration for every visual element of the filter component.
#[derive(Debug, Clone)]
pub struct FilterStyles {
    /// Style for the list heading.
    pub title: Style,
    /// Container padding for the heading line.
    pub title_bar: Style,
    /// Style for the search prompt label.
    pub search_prompt: Style,
    /// Style for the grapheme under the search cursor.
    pub search_cursor: Style,
    /// Style for panel group labels ("players", "sort").
    pub group_label: Style,
    /// Style for an active chip.
    pub chip_active: Style,
    /// Style for an inactive chip.
    pub chip_inactive: Style,
    /// Style for the selected value of a range selector.
    pub select_value: Style,
    /// Style for a visible row title.
    pub row_title: Style,
    /// Style for the secondary row text (year, player span).
    pub row_meta: Style,
    /// Style for the "nothing matches" message.
    pub no_matches: Style,
    /// Style for the count label.
    pub count: Style,
    /// Style for the help line.
    pub help: Style,
}

impl Default for FilterStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            title_bar: Style::new().padding(0, 0, 1, 0),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_cursor: Style::new().underline(true).foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            group_label: Style::new().foreground(subdued.clone()),
            chip_active: Style::new()
                .foreground(Color::from("230"))
                .background(Color::from("62"))
                .bold(true),
            chip_inactive: Style::new().foreground(subdued.clone()),
            select_value: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            row_title: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            row_meta: Style::new().foreground(subdued.clone()),
            no_matches: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            count: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            help: Style::new().foreground(subdued),
        }
    }
}
