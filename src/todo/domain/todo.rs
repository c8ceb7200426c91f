//! Todo record type managed by the service.

use super::TodoId;
use serde::{Deserialize, Serialize};

/// A todo record: a title and description pair with an optional
/// storage-assigned identifier.
///
/// The identifier is `None` until the record has been persisted for the
/// first time; the backing store assigns it on save. The same shape doubles
/// as the wire representation, so a request body without an `id` field
/// deserializes to an unpersisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned identifier, absent until first persisted.
    pub id: Option<TodoId>,
    /// Short free-form summary of the work item.
    pub title: String,
    /// Longer free-form detail text.
    pub description: String,
}

impl Todo {
    /// Creates a not-yet-persisted record with the given title and
    /// description and no identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns a copy of this record carrying the given identifier.
    #[must_use]
    pub fn with_id(self, id: TodoId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
