//! Result identifier generation.

use std::collections::{HashSet, VecDeque};

use uuid::Uuid;

/// Produces identifier tokens on demand.
pub trait IdGenerator {
    /// Produce a new identifier.
    fn generate(&mut self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers for tests.
///
/// Returns queued ids first, then `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    queued: VecDeque<String>,
    prefix: String,
    counter: u64,
}

impl SequenceGenerator {
    /// Create a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            queued: VecDeque::new(),
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Queue ids to be returned before the counter kicks in.
    pub fn with_queued(mut self, ids: Vec<&str>) -> Self {
        self.queued = ids.into_iter().map(String::from).collect();
        self
    }
}

impl IdGenerator for SequenceGenerator {
    fn generate(&mut self) -> String {
        if let Some(id) = self.queued.pop_front() {
            return id;
        }
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

/// Keep `base` if it is non-empty and unused, otherwise generate ids until
/// one is free.
pub fn unique_id(
    base: Option<&str>,
    taken: &HashSet<String>,
    generator: &mut dyn IdGenerator,
) -> String {
    if let Some(base) = base.filter(|b| !b.is_empty()) {
        if !taken.contains(base) {
            return base.to_string();
        }
    }

    loop {
        let candidate = generator.generate();
        if !candidate.is_empty() && !taken.contains(&candidate) {
            return candidate;
        }
        tracing::debug!("Generated id '{}' already in use, retrying", candidate);
    }
}
