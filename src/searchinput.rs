//! Single-line search input used by the filter panel.
//!
//! A deliberately small cousin of a full text input: it holds a value, a
//! cursor, and focus state, and edits grapheme-by-grapheme so multi-scalar
//! characters are deleted and traversed as a unit. There is no scrolling,
//! suggestion, or clipboard surface; the filter panel does not need them.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// Search input model.
pub struct Model {
    /// Prompt rendered before the text, e.g. "Search: ".
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style for the grapheme under the cursor while focused.
    pub cursor_style: Style,

    value: String,
    /// Byte offset of the cursor; always on a grapheme boundary.
    pos: usize,
    focus: bool,
}

/// Creates a new search input with default styling.
pub fn new() -> Model {
    Model::default()
}

impl Default for Model {
    fn default() -> Self {
        Self {
            prompt: "Search: ".to_string(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder: String::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().underline(true),
            value: String::new(),
            pos: 0,
            focus: false,
        }
    }
}

impl Model {
    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.to_string();
        self.pos = self.value.len();
    }

    /// Focuses the input so key messages edit the value.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Returns whether the input currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Handles one key message; returns true when the value changed.
    ///
    /// Cursor movement returns false so callers can skip recomputation when
    /// nothing observable changed.
    pub fn update(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }
        match msg.key {
            KeyCode::Char(c) if !c.is_control() => {
                self.value.insert(self.pos, c);
                self.pos += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if let Some(start) = self.prev_boundary() {
                    self.value.replace_range(start..self.pos, "");
                    self.pos = start;
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if let Some(end) = self.next_boundary() {
                    self.value.replace_range(self.pos..end, "");
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if let Some(start) = self.prev_boundary() {
                    self.pos = start;
                }
                false
            }
            KeyCode::Right => {
                if let Some(end) = self.next_boundary() {
                    self.pos = end;
                }
                false
            }
            KeyCode::Home => {
                self.pos = 0;
                false
            }
            KeyCode::End => {
                self.pos = self.value.len();
                false
            }
            _ => false,
        }
    }

    /// Renders the prompt, value, and cursor.
    pub fn view(&self) -> String {
        let mut out = self.prompt_style.clone().render(&self.prompt);

        if self.value.is_empty() && !self.focus && !self.placeholder.is_empty() {
            out.push_str(&self.placeholder_style.clone().render(&self.placeholder));
            return out;
        }

        if !self.focus {
            out.push_str(&self.text_style.clone().render(&self.value));
            return out;
        }

        let before = &self.value[..self.pos];
        if !before.is_empty() {
            out.push_str(&self.text_style.clone().render(before));
        }
        match self.next_boundary() {
            Some(end) => {
                out.push_str(&self.cursor_style.clone().render(&self.value[self.pos..end]));
                let after = &self.value[end..];
                if !after.is_empty() {
                    out.push_str(&self.text_style.clone().render(after));
                }
            }
            // Cursor sits past the last grapheme.
            None => out.push_str(&self.cursor_style.clone().render(" ")),
        }
        out
    }

    /// Byte offset of the grapheme boundary before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.pos]
            .grapheme_indices(true)
            .last()
            .map(|(i, _)| i)
    }

    /// Byte offset of the grapheme boundary after the cursor.
    fn next_boundary(&self) -> Option<usize> {
        self.value[self.pos..]
            .graphemes(true)
            .next()
            .map(|g| self.pos + g.len())
    }
}
