// Outbound Speech Responses

/// SSML fragments understood by the platform's text-to-speech engine.
pub mod ssml {
    pub const BREAK_MEDIUM: &str = r#"<break strength="medium" />"#;
    pub const BREAK_X_STRONG: &str = r#"<break strength="x-strong" />"#;
    pub const BREAK_500MS: &str = r#"<break time="500ms"/>"#;
}

/// One outbound response, encoded into the platform envelope by the
/// HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechResponse {
    /// Open-turn response; the session stays open.
    Ask { speech: String, reprompt: String },
    /// Closing response; the session ends.
    Tell { speech: String },
    /// Platform re-prompts for a specific slot next turn.
    ElicitSlot {
        slot: String,
        speech: String,
        reprompt: String,
    },
    /// Platform asks for yes/no confirmation of a specific slot next turn.
    ConfirmSlot {
        slot: String,
        speech: String,
        reprompt: String,
    },
}

impl SpeechResponse {
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        SpeechResponse::Ask {
            speech: speech.into(),
            reprompt: reprompt.into(),
        }
    }

    pub fn tell(speech: impl Into<String>) -> Self {
        SpeechResponse::Tell {
            speech: speech.into(),
        }
    }

    /// The primary speech text of this response.
    pub fn speech(&self) -> &str {
        match self {
            SpeechResponse::Ask { speech, .. }
            | SpeechResponse::Tell { speech }
            | SpeechResponse::ElicitSlot { speech, .. }
            | SpeechResponse::ConfirmSlot { speech, .. } => speech,
        }
    }

    /// Whether the platform should close the session after speaking.
    pub fn ends_session(&self) -> bool {
        matches!(self, SpeechResponse::Tell { .. })
    }
}
