#![warn(missing_docs)]

//! # gameshelf
//!
//! A filterable, sortable game-catalog list component for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) terminal
//! applications.
//!
//! The crate takes a static catalog of game entries — each carrying a title
//! and optional year and player-count attributes — and puts a small control
//! panel above it: a search box, a solo-support toggle chip, min/max
//! player-count selectors, two sort chips, and a result counter. Filtering
//! and ordering re-apply in full on every input event.
//!
//! ## Components
//!
//! - [`filter::Model`]: the list component itself, implementing
//!   `bubbletea_rs::Model` with the usual `init`/`update`/`view` shape
//! - [`catalog`]: record parsing, the player-count value domain, the
//!   [`catalog::Shelf`] bootstrap, and navigation subscriptions
//! - [`searchinput`] and [`select`]: the panel's input widgets
//! - [`key`]: type-safe key bindings with help metadata
//!
//! ## Quick start
//!
//! ```rust
//! use gameshelf::catalog::{CardAttrs, ListSource, Shelf};
//!
//! let sources = vec![ListSource {
//!     id: "games".to_string(),
//!     title: "Games".to_string(),
//!     cards: vec![
//!         CardAttrs {
//!             title: "Ito".to_string(),
//!             year: Some("2016".to_string()),
//!             players_min: Some("1".to_string()),
//!             players_max: Some("5".to_string()),
//!         },
//!         CardAttrs {
//!             title: "Hanabi".to_string(),
//!             year: Some("2013".to_string()),
//!             players_min: Some("2".to_string()),
//!             players_max: Some("5".to_string()),
//!         },
//!     ],
//! }];
//!
//! let mut shelf = Shelf::new(sources);
//! assert_eq!(shelf.init_all(80, 24), 1);
//! // Initialization is idempotent per list.
//! assert_eq!(shelf.init_all(80, 24), 0);
//!
//! let list = shelf.controller("games").expect("initialized");
//! assert_eq!(list.visible_count(), 2);
//! ```
//!
//! ## Filtering rules
//!
//! A row stays visible only when every predicate holds:
//!
//! 1. its normalized title contains the normalized query as a substring
//!    (an empty query always matches);
//! 2. with the solo chip engaged, its player span covers a single player;
//! 3. with a range requested, its span fully covers the requested range —
//!    or contains the single requested value when only one bound is set.
//!
//! Title order uses a kana-aware collation key; year order puts undated
//! entries last and breaks ties by title. Both orders are total.
//!
//! ## Single-page hosts
//!
//! Hosts that re-render on navigation can re-run initialization from a
//! [`catalog::NavigationHub`] subscription; the returned
//! [`catalog::Subscription`] unregisters the handler on dispose or drop.
//! Hosts without such a lifecycle call [`catalog::Shelf::init_all`] once
//! from their ready path.

pub mod catalog;
pub mod collate;
pub mod filter;
pub mod key;
pub mod searchinput;
pub mod select;

pub use catalog::{
    parse_int_attr, player_value_domain, CardAttrs, GameCard, ListSource, NavigationHub, Shelf,
    Subscription,
};
pub use filter::{
    FilterKeyMap, FilterState, FilterStyles, Model as Filter, Outcome, PanelSpec, SortKey,
};
pub use key::{Binding, KeyMap};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{
        parse_int_attr, player_value_domain, CardAttrs, GameCard, ListSource, NavigationHub,
        Shelf, Subscription,
    };
    pub use crate::filter::{
        ChipSpec, FilterKeyMap, FilterState, FilterStyles, Model as Filter, Outcome, PanelSpec,
        SelectSpec, SortKey,
    };
    pub use crate::key::{Binding, KeyMap};
    pub use crate::searchinput::Model as SearchInput;
    pub use crate::select::Model as RangeSelect;
}
