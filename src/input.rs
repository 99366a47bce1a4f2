use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collection::GrowableContainer;
use crate::error::{Result, RosterError};
use crate::record::Record;

/// Anything that can produce a populated roster
pub trait RecordSource {
    fn load(&mut self) -> Result<GrowableContainer<Record>>;
}

/// Reads `Name|Phone|ID` lines from a text file
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(RosterError::InvalidArgument(
                "file path must not be empty".to_string(),
            ));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn load(&mut self) -> Result<GrowableContainer<Record>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let records = read_records(reader)?;
        tracing::info!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}

/// Read every valid record from `reader`
///
/// Blank lines are ignored. Malformed lines are logged and skipped; only
/// I/O failures abort the read.
pub fn read_records<R: BufRead>(reader: R) -> Result<GrowableContainer<Record>> {
    let mut records = GrowableContainer::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(&line) {
            Ok(record) => {
                records.append(record);
            }
            Err(e) => tracing::warn!(line = number + 1, error = %e, "skipping record"),
        }
    }

    Ok(records)
}

/// Parse one `Name|Phone|ID` line
pub fn parse_record(line: &str) -> Result<Record> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(RosterError::InvalidRecord(format!(
            "expected 3 fields, found {}: {}",
            parts.len(),
            line
        )));
    }

    let (name, phone, id) = (parts[0], parts[1], parts[2]);
    let id: i32 = id
        .parse()
        .map_err(|_| RosterError::InvalidRecord(format!("id is not a number: {}", id)))?;
    if !is_valid_phone(phone) {
        return Err(RosterError::InvalidRecord(format!(
            "phone must be +7 followed by 10 digits: {}",
            phone
        )));
    }

    Record::builder().name(name).phone(phone).id(id).build()
}

/// `+7` followed by exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    match phone.strip_prefix("+7") {
        Some(digits) => digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Exclusive upper bound of generated ids
pub const ID_LIMIT: u32 = 1000;

const FIRST_NAMES: &[&str] = &[
    "Aleksei", "Anna", "Boris", "Daria", "Dmitri", "Elena", "Fyodor", "Galina", "Igor", "Irina",
    "Konstantin", "Ludmila", "Maksim", "Natalia", "Oleg", "Olga", "Pavel", "Svetlana", "Viktor",
    "Yulia",
];

const LAST_NAMES: &[&str] = &[
    "Ivanov", "Smirnov", "Kuznetsov", "Popov", "Vasiliev", "Petrov", "Sokolov", "Mikhailov",
    "Novikov", "Fedorov", "Morozov", "Volkov", "Alekseev", "Lebedev", "Semenov",
];

/// Generates `count` random records with ids unique within the batch
pub struct RandomSource {
    count: usize,
    rng: StdRng,
    used_ids: HashSet<u32>,
}

impl RandomSource {
    pub fn new(count: usize) -> Result<Self> {
        Self::with_rng(count, StdRng::from_entropy())
    }

    /// Reproducible generator for a fixed seed
    pub fn seeded(count: usize, seed: u64) -> Result<Self> {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, rng: StdRng) -> Result<Self> {
        if count == 0 {
            return Err(RosterError::InvalidArgument(
                "record count must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            count,
            rng,
            used_ids: HashSet::new(),
        })
    }

    fn next_record(&mut self) -> Result<Record> {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        let digits: String = (0..9)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect();
        let id = self.next_id()?;

        Record::builder()
            .name(format!("{} {}", first, last))
            .phone(format!("+79{}", digits))
            .id(id as i32)
            .build()
    }

    fn next_id(&mut self) -> Result<u32> {
        if self.used_ids.len() as u32 >= ID_LIMIT {
            return Err(RosterError::IdsExhausted(ID_LIMIT));
        }
        loop {
            let id = self.rng.gen_range(0..ID_LIMIT);
            if self.used_ids.insert(id) {
                return Ok(id);
            }
        }
    }
}

impl RecordSource for RandomSource {
    fn load(&mut self) -> Result<GrowableContainer<Record>> {
        // ids are unique per batch
        self.used_ids.clear();
        // no batch can hold more than ID_LIMIT records
        let mut records = GrowableContainer::with_capacity(self.count.min(ID_LIMIT as usize))?;
        for _ in 0..self.count {
            records.append(self.next_record()?);
        }
        tracing::info!(count = records.len(), "generated random records");
        Ok(records)
    }
}

/// Holds the source the next load will read from
#[derive(Default)]
pub struct InputManager {
    current: Option<Box<dyn RecordSource>>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: Box<dyn RecordSource>) -> Self {
        Self {
            current: Some(source),
        }
    }

    pub fn set_source(&mut self, source: Box<dyn RecordSource>) {
        self.current = Some(source);
    }

    pub fn has_source(&self) -> bool {
        self.current.is_some()
    }

    pub fn load(&mut self) -> Result<GrowableContainer<Record>> {
        match self.current.as_mut() {
            Some(source) => source.load(),
            None => Err(RosterError::InvalidArgument(
                "no input source set".to_string(),
            )),
        }
    }
}
