//! In-memory client roster: a growable container of records and a stable
//! merge sort that can reorder the whole roster or only a selected subset.

pub mod cli;
pub mod collection;
pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod record;
pub mod sort;
pub mod strategy;

pub use collection::GrowableContainer;
pub use compare::{Comparator, FieldKey};
pub use error::{Result, RosterError};
pub use record::Record;
pub use strategy::{SortStrategy, SortingManager};
