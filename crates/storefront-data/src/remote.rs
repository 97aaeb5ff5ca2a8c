//! Load state for data coming from the catalog.

use crate::FetchError;

/// What a view holds while catalog data is (or is not) available.
///
/// There is no "empty but loaded" default: until the gateway answers the
/// state is [`Remote::Pending`], and a failed lookup stays distinguishable
/// from a missing product.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Remote<T> {
    /// Request issued, no answer yet.
    #[default]
    Pending,
    /// Data arrived.
    Ready(T),
    /// The catalog has no such product.
    NotFound,
    /// The catalog could not be reached or read.
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Remote::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Remote::Ready(_))
    }

    /// Borrow the data if it arrived.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Take the data if it arrived.
    pub fn into_ready(self) -> Option<T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Remote::Pending => Remote::Pending,
            Remote::Ready(value) => Remote::Ready(f(value)),
            Remote::NotFound => Remote::NotFound,
            Remote::Failed(message) => Remote::Failed(message),
        }
    }
}

impl<T> From<Result<T, FetchError>> for Remote<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(FetchError::NotFound(_)) => Remote::NotFound,
            Err(e) => Remote::Failed(e.to_string()),
        }
    }
}
