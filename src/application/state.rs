use serde::Serialize;

use crate::domain::errors::FetchError;

/// Fetch state of one resource as seen by a view.
#[derive(Debug)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> Loadable<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Loadable::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self, Loadable::Ready(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Ready(value) => Loadable::Ready(f(value)),
            Loadable::Failed(err) => Loadable::Failed(err),
        }
    }

    pub fn status(&self) -> ViewStatus {
        match self {
            Loadable::Loading => ViewStatus::Loading,
            Loadable::Ready(_) => ViewStatus::Ready,
            Loadable::Failed(err) => ViewStatus::Failed {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// Items when ready; loading and failed states read as empty.
    pub fn items(&self) -> &[T] {
        self.data().map(Vec::as_slice).unwrap_or_default()
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> From<Result<T, FetchError>> for Loadable<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(err) => Loadable::Failed(err),
        }
    }
}

/// Serializable summary of a [`Loadable`] for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Ready,
    Failed { kind: &'static str, message: String },
}

impl ViewStatus {
    pub const fn is_ready(&self) -> bool {
        matches!(self, ViewStatus::Ready)
    }
}
