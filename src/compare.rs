use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::record::Record;

/// Record fields that can drive a sort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Id,
    Phone,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Id => "id",
            FieldKey::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a field name, case-insensitively
///
/// Accepts the short names plus the longer `id-number` / `phone-number` spellings.
impl FromStr for FieldKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FieldKey::Name),
            "id" | "id-number" => Ok(FieldKey::Id),
            "phone" | "phone-number" => Ok(FieldKey::Phone),
            _ => Err(RosterError::UnsupportedField(s.to_string())),
        }
    }
}

/// Natural ordering of a single field
///
/// Strings compare lexically by bytes, the id numerically.
pub fn compare_by_field(a: &Record, b: &Record, field: FieldKey) -> Ordering {
    match field {
        FieldKey::Name => a.name().cmp(b.name()),
        FieldKey::Id => a.id().cmp(&b.id()),
        FieldKey::Phone => a.phone().cmp(b.phone()),
    }
}

/// Default multi-key order: name, then id, then phone
pub fn compare_default(a: &Record, b: &Record) -> Ordering {
    compare_by_field(a, b, FieldKey::Name)
        .then_with(|| compare_by_field(a, b, FieldKey::Id))
        .then_with(|| compare_by_field(a, b, FieldKey::Phone))
}

fn maybe_reverse(ord: Ordering, reverse: bool) -> Ordering {
    if reverse { ord.reverse() } else { ord }
}

/// An owned, composable ordering over `T`
pub struct Comparator<'a, T> {
    cmp: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
}

impl<'a, T: 'a> Comparator<'a, T> {
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'a) -> Self {
        Self { cmp: Box::new(cmp) }
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Consult `next` only when this comparator reports `Equal`
    pub fn then(self, next: Comparator<'a, T>) -> Self {
        Self::new(move |a, b| self.compare(a, b).then_with(|| next.compare(a, b)))
    }

    /// Swap `Less` and `Greater`
    pub fn reversed(self) -> Self {
        Self::new(move |a, b| self.compare(a, b).reverse())
    }
}

impl<'a> Comparator<'a, Record> {
    /// Natural order of `field`, descending when `ascending` is false
    pub fn by_field(field: FieldKey, ascending: bool) -> Self {
        Self::new(move |a, b| maybe_reverse(compare_by_field(a, b, field), !ascending))
    }

    pub fn default_order() -> Self {
        Self::new(compare_default)
    }
}
