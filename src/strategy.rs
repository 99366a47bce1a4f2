//! Sort strategy selection
//!
//! A [`SortStrategy`] is a plain tag; its comparator is only built when a
//! sort actually runs.

use crate::collection::GrowableContainer;
use crate::compare::{Comparator, FieldKey};
use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::sort::{is_even_id, merge_sort, sort_selected};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortStrategy {
    /// Name, then id, then phone
    Default,
    ByField { field: FieldKey, ascending: bool },
}

impl SortStrategy {
    pub fn by_field(field: FieldKey, ascending: bool) -> Self {
        SortStrategy::ByField { field, ascending }
    }

    /// Human readable label, used in logs and output headers
    pub fn name(&self) -> String {
        match self {
            SortStrategy::Default => "Merge sort (default: name -> id -> phone)".to_string(),
            SortStrategy::ByField { field, ascending } => format!(
                "Merge sort by {} ({})",
                field,
                if *ascending { "ascending" } else { "descending" }
            ),
        }
    }

    pub fn comparator(&self) -> Comparator<'static, Record> {
        match *self {
            SortStrategy::Default => Comparator::default_order(),
            SortStrategy::ByField { field, ascending } => Comparator::by_field(field, ascending),
        }
    }

    /// Sort the whole container in place
    pub fn sort(&self, records: &mut GrowableContainer<Record>) -> Result<()> {
        tracing::debug!(strategy = %self.name(), len = records.len(), "sorting");
        let comparator = self.comparator();
        merge_sort(records, |a, b| comparator.compare(a, b))
    }

    /// Sort only records with an even id, leaving odd ids in place
    pub fn sort_even_ids(&self, records: &mut GrowableContainer<Record>) -> Result<()> {
        tracing::debug!(strategy = %self.name(), len = records.len(), "sorting even ids");
        let comparator = self.comparator();
        sort_selected(records, is_even_id, |a, b| comparator.compare(a, b))
    }
}

/// Holds the strategy the next sort will use
#[derive(Debug, Default)]
pub struct SortingManager {
    current: Option<SortStrategy>,
}

impl SortingManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: SortStrategy) -> Self {
        Self {
            current: Some(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: SortStrategy) {
        self.current = Some(strategy);
    }

    pub fn current(&self) -> Result<&SortStrategy> {
        self.current
            .as_ref()
            .ok_or_else(|| RosterError::InvalidArgument("no sorting strategy set".to_string()))
    }

    pub fn sort(&self, records: &mut GrowableContainer<Record>) -> Result<()> {
        self.current()?.sort(records)
    }

    pub fn sort_even_ids(&self, records: &mut GrowableContainer<Record>) -> Result<()> {
        self.current()?.sort_even_ids(records)
    }
}
