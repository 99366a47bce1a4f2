//! Client record value type
//!
//! Records are immutable once built. The only way to obtain one is through
//! [`RecordBuilder`], which refuses to produce a value until name, phone and
//! id are all present.

use std::fmt;

use crate::error::{Result, RosterError};

/// A single client entry
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    phone: String,
    id: i32,
}

impl Record {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

/// Serialized form, also the line format read back by the file source
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.name, self.phone, self.id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordBuilder {
    name: Option<String>,
    phone: Option<String>,
    id: Option<i32>,
}

impl RecordBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Finish the record
    ///
    /// Fails if any field is missing or if name/phone are blank.
    pub fn build(self) -> Result<Record> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| RosterError::InvalidRecord("name must not be empty".to_string()))?;
        let phone = self
            .phone
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| RosterError::InvalidRecord("phone must not be empty".to_string()))?;
        let id = self
            .id
            .ok_or_else(|| RosterError::InvalidRecord("id is required".to_string()))?;

        Ok(Record { name, phone, id })
    }
}
