// Slot State Domain Model

use serde::{Deserialize, Serialize};

/// Platform-tracked confirmation state of a slot within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

impl std::fmt::Display for ConfirmationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmationStatus::None => write!(f, "NONE"),
            ConfirmationStatus::Confirmed => write!(f, "CONFIRMED"),
            ConfirmationStatus::Denied => write!(f, "DENIED"),
        }
    }
}

/// Transient slot state, re-derived from each inbound event.
///
/// Never persisted: the platform carries slot value and confirmation
/// status across turns, so every turn supplies a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SlotState {
    /// Raw spoken slot content, absent until the user supplies it.
    pub value: Option<String>,
    pub confirmation: ConfirmationStatus,
}

impl SlotState {
    /// Slot with no value yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slot with a value the user has not been asked to confirm.
    pub fn unconfirmed(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            confirmation: ConfirmationStatus::None,
        }
    }

    /// Slot with a value the user affirmed.
    pub fn confirmed(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            confirmation: ConfirmationStatus::Confirmed,
        }
    }

    /// Slot with a value the user rejected.
    pub fn denied(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            confirmation: ConfirmationStatus::Denied,
        }
    }
}
