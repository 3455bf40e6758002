//! The predicate/sort engine.
//!
//! Pure functions from the record set and a [`FilterState`] to an
//! [`Outcome`]; no rendering surface is involved, so everything here is
//! testable against plain data. Every state change re-evaluates the entire
//! record set; nothing is incremental.

use super::types::{FilterState, Outcome, SortKey};
use crate::catalog::GameCard;
use crate::collate;
use std::cmp::Ordering;

/// Normalizes the two requested bounds so that, when both are set, the
/// effective lower bound is ≤ the effective upper bound.
pub fn normalize_range(min: Option<i32>, max: Option<i32>) -> (Option<i32>, Option<i32>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        other => other,
    }
}

/// Title order: collation keys ascending, raw title as tiebreak.
pub fn title_order(a: &GameCard, b: &GameCard) -> Ordering {
    collate::title_cmp(&a.title, &b.title)
}

/// Year order: ascending year, records without a year after all dated
/// records, ties broken by title order.
pub fn year_order(a: &GameCard, b: &GameCard) -> Ordering {
    match (a.year, b.year) {
        (Some(ay), Some(by)) => ay.cmp(&by).then_with(|| title_order(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => title_order(a, b),
    }
}

fn matches_name(card: &GameCard, query: &str) -> bool {
    query.is_empty() || card.title_key.contains(query)
}

fn matches_solo(card: &GameCard, solo_only: bool) -> bool {
    if !solo_only {
        return true;
    }
    matches!(card.players(), Some((min, max)) if min <= 1 && 1 <= max)
}

fn matches_range(card: &GameCard, min: Option<i32>, max: Option<i32>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some((card_min, card_max)) = card.players() else {
        return false;
    };
    match (min, max) {
        // The record's supported span must fully cover the requested range.
        (Some(lo), Some(hi)) => card_min <= lo && card_max >= hi,
        // A single bound is a single-value request: it must lie in the span.
        (Some(target), None) | (None, Some(target)) => {
            card_min <= target && card_max >= target
        }
        (None, None) => true,
    }
}

/// Evaluates visibility and ordering for the full record set.
pub fn apply(cards: &[GameCard], state: &FilterState) -> Outcome {
    let query = collate::query_key(&state.query);
    let (min, max) = normalize_range(state.range_min, state.range_max);

    let visible: Vec<bool> = cards
        .iter()
        .map(|card| {
            matches_name(card, &query)
                && matches_solo(card, state.solo_only)
                && matches_range(card, min, max)
        })
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();

    let compare = match state.sort_by {
        SortKey::Title => title_order,
        SortKey::Year => year_order,
    };
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&a, &b| compare(&cards[a], &cards[b]));

    Outcome {
        order,
        visible,
        visible_count,
    }
}
