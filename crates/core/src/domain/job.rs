// Job Record Domain Model

use serde::{Deserialize, Serialize};

/// A single saved job, keyed by `(user_id, name)`.
///
/// The store enforces the composite-key uniqueness invariant: no two
/// records share the same `(user_id, name)` pair. Records carry no other
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Opaque per-user identifier supplied by the voice platform.
    pub user_id: String,
    /// User-supplied job label, as spoken.
    pub name: String,
}

impl JobRecord {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}
