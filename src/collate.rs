//! Text normalization for search matching and title ordering.
//!
//! Two distinct normalizations live here:
//! - [`query_key`] produces the key used for substring search: trimmed and
//!   Unicode-lowercased. Kana have no case, so Japanese titles pass through
//!   unchanged while Latin text folds case.
//! - [`title_key`] produces the collation key used for title ordering. It
//!   approximates Japanese dictionary order at the first level: full-width
//!   Latin folds to ASCII, ASCII folds case, katakana folds to hiragana, and
//!   small kana fold to their base forms so e.g. "ガーデン" and "があでん"
//!   collate adjacently. Ties are broken by the raw title, keeping the order
//!   total.

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Small kana fold onto their base forms for first-level collation.
static SMALL_KANA: Lazy<HashMap<char, char>> = Lazy::new(|| {
    [
        ('ぁ', 'あ'),
        ('ぃ', 'い'),
        ('ぅ', 'う'),
        ('ぇ', 'え'),
        ('ぉ', 'お'),
        ('っ', 'つ'),
        ('ゃ', 'や'),
        ('ゅ', 'ゆ'),
        ('ょ', 'よ'),
        ('ゎ', 'わ'),
    ]
    .into_iter()
    .collect()
});

/// Normalizes free text into a search key: trimmed and Unicode-lowercased.
pub fn query_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Builds the collation key for a title.
pub fn title_key(title: &str) -> String {
    title.chars().map(fold_char).collect()
}

/// Compares two titles in collation-key order, raw titles as tiebreak.
pub fn title_cmp(a: &str, b: &str) -> Ordering {
    title_key(a).cmp(&title_key(b)).then_with(|| a.cmp(b))
}

fn fold_char(c: char) -> char {
    // Full-width ASCII block down to half-width before case folding.
    if ('\u{FF01}'..='\u{FF5E}').contains(&c) {
        let half = char::from_u32(c as u32 - 0xFEE0).unwrap_or(c);
        return fold_char(half);
    }
    // Katakana block down to hiragana; same column layout, fixed offset.
    let c = if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    };
    if let Some(&base) = SMALL_KANA.get(&c) {
        return base;
    }
    c.to_lowercase().next().unwrap_or(c)
}
