//! The catalogue engine - filter, sort and paginate the resource snapshot.
//!
//! The full verified resource list is fetched once per session and treated
//! as immutable; everything here is a deterministic derivation from that
//! snapshot plus a [`CatalogueQuery`]. Search input is debounced before it
//! reaches the query state (see [`debounce`]).

pub mod debounce;
mod engine;
mod types;

pub use debounce::{debounced, Debouncer};
pub use engine::{category_options, visible_page, CatalogueEngine};
pub use types::*;
