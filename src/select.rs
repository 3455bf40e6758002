//! Cycling option selector for the player-count range bounds.
//!
//! The browser rendition of this control is a `<select>`; in the terminal it
//! is a compact chip the user steps through with prev/next keys. The option
//! list is always a leading "no constraint" entry followed by every value of
//! the player-count domain, so both bounds offer identical choices.

use lipgloss_extras::prelude::*;

/// Label shown for the "no constraint" option.
pub const ANY_LABEL: &str = "any";

/// A cycling selector over `None` (no constraint) plus a fixed value list.
#[derive(Debug, Clone)]
pub struct Model {
    /// Short label rendered before the value, e.g. "min".
    pub label: String,
    options: Vec<Option<i32>>,
    index: usize,
}

impl Model {
    /// Creates a selector seeded with the domain values, "no constraint"
    /// selected.
    pub fn new(label: &str, values: &[i32]) -> Self {
        let mut options = Vec::with_capacity(values.len() + 1);
        options.push(None);
        options.extend(values.iter().copied().map(Some));
        Self {
            label: label.to_string(),
            options,
            index: 0,
        }
    }

    /// Currently selected value; `None` means no constraint.
    pub fn value(&self) -> Option<i32> {
        self.options.get(self.index).copied().flatten()
    }

    /// Steps to the next option, wrapping; returns true when the selection
    /// changed.
    pub fn next(&mut self) -> bool {
        if self.options.len() < 2 {
            return false;
        }
        self.index = (self.index + 1) % self.options.len();
        true
    }

    /// Steps to the previous option, wrapping; returns true when the
    /// selection changed.
    pub fn prev(&mut self) -> bool {
        if self.options.len() < 2 {
            return false;
        }
        self.index = (self.index + self.options.len() - 1) % self.options.len();
        true
    }

    /// Returns to the "no constraint" option.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Index of the selected option within [`option_labels`](Self::option_labels).
    pub fn selected_index(&self) -> usize {
        self.index
    }

    /// Display labels for every option, "no constraint" first.
    pub fn option_labels(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|o| match o {
                Some(v) => v.to_string(),
                None => ANY_LABEL.to_string(),
            })
            .collect()
    }

    /// Renders the selector as `label ‹value›`.
    pub fn view(&self, label_style: &Style, value_style: &Style) -> String {
        let value = match self.value() {
            Some(v) => v.to_string(),
            None => ANY_LABEL.to_string(),
        };
        format!(
            "{} {}",
            label_style.clone().render(&self.label),
            value_style.clone().render(&format!("‹{}›", value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unconstrained() {
        let s = Model::new("min", &[1, 2, 3]);
        assert_eq!(s.value(), None);
    }

    #[test]
    fn cycles_forward_through_domain_and_wraps() {
        let mut s = Model::new("min", &[2, 4]);
        assert!(s.next());
        assert_eq!(s.value(), Some(2));
        assert!(s.next());
        assert_eq!(s.value(), Some(4));
        assert!(s.next());
        assert_eq!(s.value(), None);
    }

    #[test]
    fn cycles_backward_from_unconstrained_to_last() {
        let mut s = Model::new("max", &[2, 4]);
        assert!(s.prev());
        assert_eq!(s.value(), Some(4));
    }

    #[test]
    fn empty_domain_never_changes() {
        let mut s = Model::new("min", &[]);
        assert!(!s.next());
        assert!(!s.prev());
        assert_eq!(s.value(), None);
    }

    #[test]
    fn option_labels_lead_with_any() {
        let s = Model::new("min", &[1, 5]);
        assert_eq!(s.option_labels(), vec!["any", "1", "5"]);
    }
}
