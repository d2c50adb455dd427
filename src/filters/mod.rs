//! Brewery filtering
//!
//! This module holds the active filter predicates and the pure functions that
//! derive the visible subset and the city index from a dataset.
//!
//! # Predicates
//!
//! - **Type**: exact match on [`BreweryType`](crate::BreweryType)
//! - **Cities**: city is a member of the selected set
//! - **Name**: case-insensitive substring of the brewery name
//!
//! Active predicates combine with AND logic. With no active predicate the
//! visible subset is the whole dataset.
//!
//! # Examples
//!
//! ```
//! use brewtour::{Brewery, BreweryType, FilterState, apply_filters};
//!
//! let dataset = vec![
//!     Brewery::new(1, "Ale House", BreweryType::Micro, "Austin"),
//!     Brewery::new(2, "Hop Yard", BreweryType::Regional, "Austin"),
//! ];
//!
//! let mut filter = FilterState::default();
//! filter.set_name_query("ale");
//!
//! let visible = apply_filters(&dataset, &filter);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "Ale House");
//! ```

pub mod operations;
pub mod types;

pub use operations::{apply_filters, city_index};
pub use types::FilterState;
