//! Fallback-chain resolution
//!
//! The decision procedure shared by all three planning features: try each
//! candidate-producing strategy in priority order, accept the first result
//! that passes its quality predicate, and degrade to a static default when
//! none qualifies. No state survives a resolution; every call starts fresh.

use std::future::Future;

use futures::future::BoxFuture;
use tracing::debug;

use crate::fetch::Fetched;

/// Where a resolved value came from, in decreasing order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A live external lookup
    Live,
    /// The static knowledge base, selected by matching the request
    KnowledgeBase,
    /// Text-model output
    Generated,
    /// The unconditional static default
    Static,
}

/// One rung of a fallback chain: a way to produce candidates plus the
/// predicate its result must pass to be accepted.
pub struct Strategy<'a, T> {
    origin: Origin,
    fetch: BoxFuture<'a, Fetched<T>>,
    accept: Box<dyn Fn(&T) -> bool + Send + Sync + 'a>,
}

impl<'a, T> Strategy<'a, T> {
    /// Build a strategy from a fetch future and an acceptance predicate
    pub fn new<F, P>(origin: Origin, fetch: F, accept: P) -> Self
    where
        F: Future<Output = Fetched<T>> + Send + 'a,
        P: Fn(&T) -> bool + Send + Sync + 'a,
    {
        Self {
            origin,
            fetch: Box::pin(fetch),
            accept: Box::new(accept),
        }
    }
}

/// A resolved value together with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
}

/// Run a fallback chain.
///
/// Strategies are awaited one at a time in the order given; an `Unavailable`
/// fetch or a rejected result moves on to the next rung. When every strategy
/// is exhausted the static default wins unconditionally.
pub async fn resolve<T>(
    strategies: Vec<Strategy<'_, T>>,
    default: impl FnOnce() -> T,
) -> Resolved<T> {
    for strategy in strategies {
        let origin = strategy.origin;
        match strategy.fetch.await {
            Fetched::Ok(value) if (strategy.accept)(&value) => {
                debug!("Resolved via {:?}", origin);
                return Resolved { value, origin };
            }
            Fetched::Ok(_) => {
                debug!("{:?} produced a result below the quality bar", origin);
            }
            Fetched::Unavailable => {
                debug!("{:?} unavailable", origin);
            }
        }
    }

    debug!("All strategies exhausted, using static default");
    Resolved {
        value: default(),
        origin: Origin::Static,
    }
}

/// Drop case-insensitive duplicates, keeping first-seen order
pub fn dedup_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for item in items {
        let key = item.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(item);
        }
    }
    out
}

/// Pad `items` from `pool` up to `count`, skipping entries already present
/// case-insensitively. The pool is read, never mutated.
pub fn pad_unique(items: &mut Vec<String>, pool: &[&str], count: usize) {
    for candidate in pool {
        if items.len() >= count {
            break;
        }
        if !items.iter().any(|i| i.eq_ignore_ascii_case(candidate)) {
            items.push((*candidate).to_string());
        }
    }
}

/// Normalize to exactly `count` entries: case-insensitive dedup, truncate,
/// then pad from `pool`.
pub fn fit_count(items: Vec<String>, pool: &[&str], count: usize) -> Vec<String> {
    let mut items = dedup_case_insensitive(items);
    items.truncate(count);
    pad_unique(&mut items, pool, count);
    items
}
