// Inbound Skill Events

use crate::domain::slot::SlotState;

/// One inbound intent event, decoded from the platform envelope.
///
/// One variant per intent the skill understands; anything else maps to
/// `Unhandled`. The wire parsing lives in the HTTP adapter, so adding an
/// intent here forces every dispatch site to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillEvent {
    /// "Alexa, open Job Jar" - no intent, just the session start.
    Launch,
    /// Save a new job. Slot: JobName.
    AddJob { slot: SlotState },
    /// Speak every saved job for this user.
    ListJobs,
    /// Pick a random job, speak it, and consume it.
    GrabJob,
    /// Remove a job by name. Slot: JobName.
    DeleteJob { slot: SlotState },
    Help,
    Cancel,
    Stop,
    /// Unknown intent name or malformed intent request.
    Unhandled,
}

impl SkillEvent {
    /// Intent label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            SkillEvent::Launch => "Launch",
            SkillEvent::AddJob { .. } => "AddJob",
            SkillEvent::ListJobs => "ListJobs",
            SkillEvent::GrabJob => "GrabJob",
            SkillEvent::DeleteJob { .. } => "DeleteJob",
            SkillEvent::Help => "Help",
            SkillEvent::Cancel => "Cancel",
            SkillEvent::Stop => "Stop",
            SkillEvent::Unhandled => "Unhandled",
        }
    }
}
