//! Wire Types for the Voice Platform Envelope
//!
//! The hosting platform posts one JSON envelope per turn and expects a
//! response envelope back. Everything here stays at the wire boundary:
//! core only ever sees `SkillEvent` and `SpeechResponse`.

use std::collections::HashMap;

use jobjar_core::application::skill::JOB_NAME_SLOT;
use jobjar_core::domain::{ConfirmationStatus, SkillEvent, SlotState, SpeechResponse};
use jobjar_core::error::{AppError, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    pub session: Option<Session>,
    pub request: Request,
}

#[derive(Debug, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub application: Option<Application>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct Application {
    #[serde(rename = "applicationId")]
    pub application_id: String,
}

/// The request half of the envelope. The type is kept as a string so an
/// unknown request type degrades to `Unhandled` instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    pub intent: Option<Intent>,
}

#[derive(Debug, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Deserialize)]
pub struct Slot {
    pub value: Option<String>,
    #[serde(rename = "confirmationStatus", default)]
    pub confirmation_status: ConfirmationStatus,
}

impl RequestEnvelope {
    /// The platform-supplied per-user identifier.
    pub fn user_id(&self) -> Result<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .map(|u| u.user_id.as_str())
            .ok_or_else(|| AppError::Validation("missing session.user.userId".to_string()))
    }

    /// The skill application id the event was sent for, when present.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .map(|a| a.application_id.as_str())
    }

    /// Session teardown notification; no speech response is expected.
    pub fn is_session_ended(&self) -> bool {
        self.request.request_type == "SessionEndedRequest"
    }

    /// Decode the envelope into a typed event. Unknown intents and
    /// malformed intent requests map to `Unhandled`.
    pub fn to_event(&self) -> SkillEvent {
        match self.request.request_type.as_str() {
            "LaunchRequest" => SkillEvent::Launch,
            "IntentRequest" => match &self.request.intent {
                Some(intent) => intent.to_event(),
                None => SkillEvent::Unhandled,
            },
            _ => SkillEvent::Unhandled,
        }
    }
}

impl Intent {
    fn to_event(&self) -> SkillEvent {
        match self.name.as_str() {
            "AddJobIntent" => SkillEvent::AddJob {
                slot: self.job_name_slot(),
            },
            "GetAllJobsIntent" => SkillEvent::ListJobs,
            "GetJobIntent" => SkillEvent::GrabJob,
            "DeleteJobIntent" => SkillEvent::DeleteJob {
                slot: self.job_name_slot(),
            },
            "AMAZON.HelpIntent" => SkillEvent::Help,
            "AMAZON.CancelIntent" => SkillEvent::Cancel,
            "AMAZON.StopIntent" => SkillEvent::Stop,
            _ => SkillEvent::Unhandled,
        }
    }

    fn job_name_slot(&self) -> SlotState {
        match self.slots.get(JOB_NAME_SLOT) {
            Some(slot) => SlotState {
                value: slot.value.clone(),
                confirmation: slot.confirmation_status,
            },
            None => SlotState::empty(),
        }
    }
}

// ---------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub response: Response,
}

#[derive(Debug, Serialize, Default)]
pub struct Response {
    #[serde(rename = "outputSpeech", skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: &'static str,
    pub ssml: String,
}

impl OutputSpeech {
    fn ssml(speech: &str) -> Self {
        Self {
            speech_type: "SSML",
            ssml: format!("<speak>{speech}</speak>"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Reprompt {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Serialize)]
pub struct Directive {
    #[serde(rename = "type")]
    pub directive_type: &'static str,
    #[serde(rename = "slotToElicit", skip_serializing_if = "Option::is_none")]
    pub slot_to_elicit: Option<String>,
    #[serde(rename = "slotToConfirm", skip_serializing_if = "Option::is_none")]
    pub slot_to_confirm: Option<String>,
}

impl ResponseEnvelope {
    /// Response with no speech, for session teardown notifications.
    pub fn empty() -> Self {
        Self {
            version: "1.0",
            response: Response {
                should_end_session: true,
                ..Default::default()
            },
        }
    }
}

impl From<SpeechResponse> for ResponseEnvelope {
    fn from(response: SpeechResponse) -> Self {
        let response = match response {
            SpeechResponse::Ask { speech, reprompt } => Response {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: Some(Reprompt {
                    output_speech: OutputSpeech::ssml(&reprompt),
                }),
                should_end_session: false,
                directives: vec![],
            },
            SpeechResponse::Tell { speech } => Response {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: None,
                should_end_session: true,
                directives: vec![],
            },
            SpeechResponse::ElicitSlot {
                slot,
                speech,
                reprompt,
            } => Response {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: Some(Reprompt {
                    output_speech: OutputSpeech::ssml(&reprompt),
                }),
                should_end_session: false,
                directives: vec![Directive {
                    directive_type: "Dialog.ElicitSlot",
                    slot_to_elicit: Some(slot),
                    slot_to_confirm: None,
                }],
            },
            SpeechResponse::ConfirmSlot {
                slot,
                speech,
                reprompt,
            } => Response {
                output_speech: Some(OutputSpeech::ssml(&speech)),
                reprompt: Some(Reprompt {
                    output_speech: OutputSpeech::ssml(&reprompt),
                }),
                should_end_session: false,
                directives: vec![Directive {
                    directive_type: "Dialog.ConfirmSlot",
                    slot_to_elicit: None,
                    slot_to_confirm: Some(slot),
                }],
            },
        };

        Self {
            version: "1.0",
            response,
        }
    }
}
