//! External data fetchers
//!
//! Thin clients for the places-lookup API and the text-generation model.
//! Fetchers never surface network problems as errors: a missing credential,
//! a timeout, a non-2xx status, or an unparsable body all collapse into
//! [`Fetched::Unavailable`], which the fallback-chain resolver treats as
//! "move on to the next strategy".

mod model;
mod places;

pub use model::ModelClient;
pub use places::{Coordinates, PlacesClient};

/// Outcome of a single external fetch.
///
/// `Unavailable` covers every failure mode uniformly, so callers never need
/// to distinguish "no credential" from "the network ate the request"; the
/// cause is logged at the fetch site instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    /// The source answered with a usable value
    Ok(T),
    /// The source could not be reached or gave nothing usable
    Unavailable,
}

impl<T> Fetched<T> {
    /// Map the contained value, preserving availability
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Ok(value) => Fetched::Ok(f(value)),
            Fetched::Unavailable => Fetched::Unavailable,
        }
    }

}

impl<T> From<Option<T>> for Fetched<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Fetched::Ok(value),
            None => Fetched::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_map() {
        assert_eq!(Fetched::Ok(2).map(|v| v * 3), Fetched::Ok(6));
        assert_eq!(Fetched::<i32>::Unavailable.map(|v| v * 3), Fetched::Unavailable);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Fetched::from(Some(1)), Fetched::Ok(1));
        assert_eq!(Fetched::<i32>::from(None), Fetched::Unavailable);
    }
}
