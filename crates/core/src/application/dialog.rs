// Slot Confirmation Dialog Gate

use crate::domain::response::SpeechResponse;
use crate::domain::slot::{ConfirmationStatus, SlotState};

/// Prompt strings for one required slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotPrompts {
    pub slot: &'static str,
    pub elicit: &'static str,
    pub reprompt: &'static str,
}

impl SlotPrompts {
    /// Re-prompt for the slot value.
    pub fn elicit_response(&self) -> SpeechResponse {
        SpeechResponse::ElicitSlot {
            slot: self.slot.to_string(),
            speech: self.elicit.to_string(),
            reprompt: self.reprompt.to_string(),
        }
    }

    /// Ask for yes/no confirmation; the question doubles as the reprompt.
    pub fn confirm_response(&self, question: String) -> SpeechResponse {
        SpeechResponse::ConfirmSlot {
            slot: self.slot.to_string(),
            speech: question.clone(),
            reprompt: question,
        }
    }
}

/// What to do with the current turn, decided by the slot gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Ask the user to supply the slot value.
    Elicit,
    /// Ask the user to affirm the value heard.
    Confirm { name: String },
    /// Value present and affirmed; run the store operation.
    Proceed { name: String },
}

/// Gate progression on a required slot.
///
/// A three-state linear gate, re-derived from the platform payload every
/// turn (stateless, idempotent per event): an absent value elicits, a
/// present-but-unconfirmed value asks for confirmation, a denied value
/// elicits again with the same prompts. Only a confirmed value proceeds
/// to the store gateway.
pub fn slot_gate(slot: &SlotState) -> DialogAction {
    match &slot.value {
        None => DialogAction::Elicit,
        Some(name) => match slot.confirmation {
            ConfirmationStatus::Confirmed => DialogAction::Proceed { name: name.clone() },
            ConfirmationStatus::Denied => DialogAction::Elicit,
            ConfirmationStatus::None => DialogAction::Confirm { name: name.clone() },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_elicits() {
        assert_eq!(slot_gate(&SlotState::empty()), DialogAction::Elicit);
    }

    #[test]
    fn absent_value_elicits_regardless_of_confirmation() {
        // The platform should never send a confirmation without a value,
        // but the gate must still elicit if it does.
        for confirmation in [
            ConfirmationStatus::None,
            ConfirmationStatus::Confirmed,
            ConfirmationStatus::Denied,
        ] {
            let slot = SlotState {
                value: None,
                confirmation,
            };
            assert_eq!(slot_gate(&slot), DialogAction::Elicit);
        }
    }

    #[test]
    fn unconfirmed_value_confirms() {
        assert_eq!(
            slot_gate(&SlotState::unconfirmed("Dishes")),
            DialogAction::Confirm {
                name: "Dishes".to_string()
            }
        );
    }

    #[test]
    fn denied_value_elicits_again() {
        assert_eq!(slot_gate(&SlotState::denied("Dishes")), DialogAction::Elicit);
    }

    #[test]
    fn confirmed_value_proceeds() {
        assert_eq!(
            slot_gate(&SlotState::confirmed("Dishes")),
            DialogAction::Proceed {
                name: "Dishes".to_string()
            }
        );
    }

    #[test]
    fn confirm_question_doubles_as_reprompt() {
        let prompts = SlotPrompts {
            slot: "JobName",
            elicit: "What job?",
            reprompt: "Please tell me a job.",
        };

        match prompts.confirm_response("Dishes, correct?".to_string()) {
            SpeechResponse::ConfirmSlot {
                slot,
                speech,
                reprompt,
            } => {
                assert_eq!(slot, "JobName");
                assert_eq!(speech, reprompt);
            }
            other => panic!("expected ConfirmSlot, got {other:?}"),
        }
    }
}
