//! Unique identifier generation
//!
//! Every element and group placed into a scene needs an identifier that is
//! fresh with respect to the scene and to everything minted earlier in the
//! process. Two strategies are provided:
//!
//! - [`UuidIds`]: random v4 UUIDs. 122 random bits per identifier, so the
//!   chance of any collision across 10^12 identifiers is below 10^-12.
//!   This is the process-wide default, see [`process_ids`].
//! - [`CounterIds`]: a prefix plus an atomic counter. Distinct by
//!   construction for a single instance, but unaware of identifiers loaded
//!   into a scene from elsewhere. [`process_counter`] keeps one instance per
//!   prefix for the whole process.
//!
//! [`FreshIds`] wraps either one and checks each candidate against the
//! identifiers already in use, retrying a bounded number of times.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError};

use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::error::ShapeError;

/// Default bound on collision retries in [`FreshIds`]
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// A source of unique identifiers
pub trait IdSource {
    /// Produce the next identifier, or fail if the source is exhausted.
    fn next_id(&self) -> Result<String, ShapeError>;
}

impl<T: IdSource + ?Sized> IdSource for &T {
    fn next_id(&self) -> Result<String, ShapeError> {
        (**self).next_id()
    }
}

impl<T: IdSource + ?Sized> IdSource for Box<T> {
    fn next_id(&self) -> Result<String, ShapeError> {
        (**self).next_id()
    }
}

/// Random UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> Result<String, ShapeError> {
        Ok(Uuid::new_v4().to_string())
    }
}

static PROCESS_IDS: UuidIds = UuidIds;

/// The process-wide identifier generator
pub fn process_ids() -> &'static UuidIds {
    &PROCESS_IDS
}

static PROCESS_COUNTERS: LazyLock<Mutex<HashMap<String, &'static CounterIds>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// The process-wide counter for `prefix`, created on first use.
///
/// Every caller asking for the same prefix shares one counter, so its output
/// never repeats within the process.
pub fn process_counter(prefix: &str) -> &'static CounterIds {
    let mut counters = PROCESS_COUNTERS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *counters
        .entry(prefix.to_string())
        .or_insert_with(|| Box::leak(Box::new(CounterIds::new(prefix))))
}

/// `<prefix>-<n>` identifiers from a shared atomic counter
#[derive(Debug)]
pub struct CounterIds {
    prefix: String,
    next: AtomicU64,
}

impl CounterIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(start),
        }
    }
}

impl IdSource for CounterIds {
    fn next_id(&self) -> Result<String, ShapeError> {
        let n = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|_| ShapeError::IdentifierExhausted { attempts: 1 })?;
        Ok(format!("{}-{}", self.prefix, n))
    }
}

/// Identifier strategy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Counter,
}

impl IdStrategy {
    /// The process-wide generator for this strategy
    pub fn build(self, prefix: &str) -> &'static (dyn IdSource + Send + Sync) {
        match self {
            IdStrategy::Uuid => process_ids(),
            IdStrategy::Counter => process_counter(prefix),
        }
    }
}

/// Wraps a source and rejects candidates that are already in use.
///
/// A candidate is rejected when `in_use` reports it or when this wrapper has
/// already handed it out. After `max_attempts` consecutive rejections the
/// call fails with [`ShapeError::IdentifierExhausted`]; a reused identifier is
/// never returned.
pub struct FreshIds<'a, S: IdSource + ?Sized> {
    source: &'a S,
    in_use: Box<dyn Fn(&str) -> bool + 'a>,
    minted: RefCell<HashSet<String>>,
    max_attempts: u32,
}

impl<'a, S: IdSource + ?Sized> FreshIds<'a, S> {
    pub fn new(source: &'a S, in_use: impl Fn(&str) -> bool + 'a) -> Self {
        Self {
            source,
            in_use: Box::new(in_use),
            minted: RefCell::new(HashSet::new()),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Number of identifiers handed out so far
    pub fn minted_count(&self) -> usize {
        self.minted.borrow().len()
    }
}

impl<S: IdSource + ?Sized> IdSource for FreshIds<'_, S> {
    fn next_id(&self) -> Result<String, ShapeError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.source.next_id()?;
            if (self.in_use)(&candidate) || self.minted.borrow().contains(&candidate) {
                warn!(id = %candidate, attempt, "identifier collision, retrying");
                continue;
            }
            self.minted.borrow_mut().insert(candidate.clone());
            return Ok(candidate);
        }
        Err(ShapeError::IdentifierExhausted {
            attempts: self.max_attempts,
        })
    }
}
