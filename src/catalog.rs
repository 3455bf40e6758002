//! Catalog records, the player-count value domain, and per-list bootstrap.
//!
//! Entries arrive as raw string attributes (the host renders them from
//! whatever metadata it has; absent values are simply absent). Parsing is
//! total: anything that is not a base-10 integer becomes `None` and the entry
//! still participates in the catalog. A [`Shelf`] turns list sources into
//! filter controllers exactly once per list id, and a [`NavigationHub`] lets
//! single-page-style hosts re-run initialization on navigation, with an
//! explicit disposer per subscription.

use crate::filter;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

/// Raw, unparsed attributes of one catalog entry.
#[derive(Debug, Clone, Default)]
pub struct CardAttrs {
    /// Display title; also the search target.
    pub title: String,
    /// Publication year attribute, if present.
    pub year: Option<String>,
    /// Minimum supported player count attribute, if present.
    pub players_min: Option<String>,
    /// Maximum supported player count attribute, if present.
    pub players_max: Option<String>,
}

/// Parsed, immutable record of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    /// Display title.
    pub title: String,
    /// Title normalized for substring search.
    pub title_key: String,
    /// Publication year, if the attribute parsed.
    pub year: Option<i32>,
    /// Minimum supported player count, if the attribute parsed.
    pub players_min: Option<i32>,
    /// Maximum supported player count, if the attribute parsed.
    pub players_max: Option<i32>,
}

impl GameCard {
    /// Builds a record from already-parsed values.
    pub fn new(
        title: &str,
        year: Option<i32>,
        players_min: Option<i32>,
        players_max: Option<i32>,
    ) -> Self {
        Self {
            title: title.to_string(),
            title_key: crate::collate::query_key(title),
            year,
            players_min,
            players_max,
        }
    }

    /// Builds a record from raw attributes; malformed numbers become `None`.
    pub fn from_attrs(attrs: &CardAttrs) -> Self {
        Self::new(
            attrs.title.trim(),
            parse_int_attr(attrs.year.as_deref()),
            parse_int_attr(attrs.players_min.as_deref()),
            parse_int_attr(attrs.players_max.as_deref()),
        )
    }

    /// Both player bounds, when both attributes parsed.
    pub fn players(&self) -> Option<(i32, i32)> {
        match (self.players_min, self.players_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// The inclusive supported span, when present and not inverted.
    pub fn span(&self) -> Option<(i32, i32)> {
        self.players().filter(|(min, max)| min <= max)
    }
}

/// Parses a base-10 integer attribute; absent, blank, or malformed → `None`.
pub fn parse_int_attr(raw: Option<&str>) -> Option<i32> {
    raw?.trim().parse::<i32>().ok()
}

/// Sorted distinct union of every integer in every valid supported span.
///
/// Spans with a missing bound or `min > max` contribute nothing. The result
/// seeds both range selectors identically.
pub fn player_value_domain(cards: &[GameCard]) -> Vec<i32> {
    let mut values = BTreeSet::new();
    for card in cards {
        if let Some((min, max)) = card.span() {
            values.extend(min..=max);
        }
    }
    values.into_iter().collect()
}

/// One list of catalog entries, identified by a stable id.
#[derive(Debug, Clone, Default)]
pub struct ListSource {
    /// Stable identifier; the idempotency key for initialization.
    pub id: String,
    /// Heading shown above the list.
    pub title: String,
    /// Raw entries in document order.
    pub cards: Vec<CardAttrs>,
}

/// Holds the catalog's list sources and one filter controller per
/// initialized list.
///
/// Controllers are keyed by the source id, so repeated initialization (for
/// example on every navigation event) never builds a second panel for the
/// same list. Lists with no entries are skipped and stay uninitialized.
pub struct Shelf {
    sources: Vec<ListSource>,
    controllers: BTreeMap<String, filter::Model>,
}

impl Shelf {
    /// Creates a shelf over the given list sources.
    pub fn new(sources: Vec<ListSource>) -> Self {
        Self {
            sources,
            controllers: BTreeMap::new(),
        }
    }

    /// Initializes a controller for every eligible, not-yet-ready list.
    ///
    /// Returns the number of lists initialized by this call. Calling this
    /// again is a no-op for lists that already have a controller.
    pub fn init_all(&mut self, width: usize, height: usize) -> usize {
        let mut initialized = 0;
        for source in &self.sources {
            if self.controllers.contains_key(&source.id) {
                continue;
            }
            let cards: Vec<GameCard> = source.cards.iter().map(GameCard::from_attrs).collect();
            if cards.is_empty() {
                continue;
            }
            let model = filter::Model::new(cards, width, height).with_title(&source.title);
            self.controllers.insert(source.id.clone(), model);
            initialized += 1;
        }
        initialized
    }

    /// The controller for a list, if that list has been initialized.
    pub fn controller(&self, id: &str) -> Option<&filter::Model> {
        self.controllers.get(id)
    }

    /// Mutable access to a list's controller.
    pub fn controller_mut(&mut self, id: &str) -> Option<&mut filter::Model> {
        self.controllers.get_mut(id)
    }

    /// Ids of all initialized lists, in stable order.
    pub fn ready_ids(&self) -> Vec<&str> {
        self.controllers.keys().map(String::as_str).collect()
    }

    /// Number of initialized lists.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether no list has been initialized yet.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

type Handler = Rc<RefCell<dyn FnMut()>>;

struct HubInner {
    next_id: usize,
    handlers: Vec<(usize, Handler)>,
}

/// Subscribe-style navigation notifications for single-page hosts.
///
/// Hosts that re-render their document on navigation call [`notify`] from
/// that path; hosts without such a lifecycle simply run their ready hook once
/// and never construct a hub.
///
/// [`notify`]: NavigationHub::notify
pub struct NavigationHub {
    inner: Rc<RefCell<HubInner>>,
}

impl Default for NavigationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Registers a handler; the returned [`Subscription`] unregisters it on
    /// dispose or drop.
    pub fn subscribe<F: FnMut() + 'static>(&self, handler: F) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Rc::new(RefCell::new(handler))));
        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Invokes every live handler once.
    ///
    /// Handlers registered or disposed from inside a handler take effect for
    /// the next notification.
    pub fn notify(&self) {
        let snapshot: Vec<(usize, Handler)> = self.inner.borrow().handlers.to_vec();
        for (id, handler) in snapshot {
            let live = self
                .inner
                .borrow()
                .handlers
                .iter()
                .any(|(hid, _)| *hid == id);
            if live {
                (&mut *handler.borrow_mut())();
            }
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Disposer handle for one navigation subscription.
pub struct Subscription {
    id: usize,
    hub: Weak<RefCell<HubInner>>,
}

impl Subscription {
    /// Unregisters the handler now instead of at drop time.
    pub fn dispose(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            inner.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(title: &str, year: &str, min: &str, max: &str) -> CardAttrs {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        CardAttrs {
            title: title.to_string(),
            year: opt(year),
            players_min: opt(min),
            players_max: opt(max),
        }
    }

    #[test]
    fn parse_int_attr_accepts_plain_integers() {
        assert_eq!(parse_int_attr(Some("2016")), Some(2016));
        assert_eq!(parse_int_attr(Some(" 3 ")), Some(3));
    }

    #[test]
    fn parse_int_attr_rejects_absent_blank_and_junk() {
        assert_eq!(parse_int_attr(None), None);
        assert_eq!(parse_int_attr(Some("")), None);
        assert_eq!(parse_int_attr(Some("  ")), None);
        assert_eq!(parse_int_attr(Some("abc")), None);
        assert_eq!(parse_int_attr(Some("2.5")), None);
    }

    #[test]
    fn from_attrs_degrades_missing_values_to_none() {
        let card = GameCard::from_attrs(&attrs("Ito", "", "1", "x"));
        assert_eq!(card.title, "Ito");
        assert_eq!(card.title_key, "ito");
        assert_eq!(card.year, None);
        assert_eq!(card.players_min, Some(1));
        assert_eq!(card.players_max, None);
    }

    #[test]
    fn domain_unions_valid_spans() {
        let cards = vec![
            GameCard::new("A", None, Some(1), Some(3)),
            GameCard::new("B", None, Some(2), Some(5)),
        ];
        assert_eq!(player_value_domain(&cards), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn domain_skips_inverted_and_partial_spans() {
        let cards = vec![
            GameCard::new("Inverted", None, Some(4), Some(2)),
            GameCard::new("Partial", None, Some(2), None),
            GameCard::new("Absent", None, None, None),
            GameCard::new("Valid", None, Some(2), Some(2)),
        ];
        assert_eq!(player_value_domain(&cards), vec![2]);
    }

    #[test]
    fn init_all_is_idempotent_per_list() {
        let sources = vec![ListSource {
            id: "games".to_string(),
            title: "Games".to_string(),
            cards: vec![attrs("Ito", "2016", "1", "5")],
        }];
        let mut shelf = Shelf::new(sources);
        assert_eq!(shelf.init_all(80, 24), 1);
        assert_eq!(shelf.init_all(80, 24), 0);
        assert_eq!(shelf.len(), 1);
        assert!(shelf.controller("games").is_some());
    }

    #[test]
    fn init_all_skips_empty_lists() {
        let sources = vec![ListSource {
            id: "empty".to_string(),
            title: "Empty".to_string(),
            cards: vec![],
        }];
        let mut shelf = Shelf::new(sources);
        assert_eq!(shelf.init_all(80, 24), 0);
        assert!(shelf.is_empty());
        assert!(shelf.controller("empty").is_none());
    }

    #[test]
    fn navigation_subscription_fires_until_disposed() {
        let hub = NavigationHub::new();
        let count = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&count);
        let sub = hub.subscribe(move || *seen.borrow_mut() += 1);

        hub.notify();
        hub.notify();
        assert_eq!(*count.borrow(), 2);

        sub.dispose();
        assert_eq!(hub.subscriber_count(), 0);
        hub.notify();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let hub = NavigationHub::new();
        {
            let _sub = hub.subscribe(|| {});
            assert_eq!(hub.subscriber_count(), 1);
        }
        assert_eq!(hub.subscriber_count(), 0);
    }
}
