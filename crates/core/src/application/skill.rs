// Skill Service - Store gateway behind the dialog gate

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::dialog::{slot_gate, DialogAction, SlotPrompts};
use crate::domain::response::{ssml, SpeechResponse};
use crate::domain::{JobRecord, SkillEvent, SlotState};
use crate::error::Result;
use crate::port::{JobPicker, JobStore};

/// Slot carrying the spoken job name.
pub const JOB_NAME_SLOT: &str = "JobName";

const ADD_PROMPTS: SlotPrompts = SlotPrompts {
    slot: JOB_NAME_SLOT,
    elicit: "What job would you like to add?",
    reprompt: "Please tell me a job you would like to add.",
};

const DELETE_PROMPTS: SlotPrompts = SlotPrompts {
    slot: JOB_NAME_SLOT,
    elicit: "What is the name of the job you would like to delete?",
    reprompt: "Please tell me the job you would like to delete.",
};

/// Opening speech, also used for help.
fn instructions() -> String {
    format!(
        "Welcome to Job Jar{} The following commands are available: \
         grab a job, add a job, delete a job, and list all jobs. \
         What would you like to do?",
        ssml::BREAK_MEDIUM
    )
}

/// Skill service with injected dependencies.
///
/// Handles each inbound event independently and to completion: at most
/// one sequential chain of store calls per intent, no retries, no shared
/// state between invocations beyond the store's records.
pub struct SkillService {
    store: Arc<dyn JobStore>,
    picker: Arc<dyn JobPicker>,
}

impl SkillService {
    pub fn new(store: Arc<dyn JobStore>, picker: Arc<dyn JobPicker>) -> Self {
        Self { store, picker }
    }

    /// Handle one inbound event for one user.
    pub async fn handle(&self, user_id: &str, event: SkillEvent) -> Result<SpeechResponse> {
        info!(intent = event.name(), "Handling intent");

        match event {
            SkillEvent::Launch | SkillEvent::Help => {
                Ok(SpeechResponse::ask(instructions(), instructions()))
            }
            SkillEvent::AddJob { slot } => self.add_job(user_id, &slot).await,
            SkillEvent::ListJobs => self.list_jobs(user_id).await,
            SkillEvent::GrabJob => self.grab_job(user_id).await,
            SkillEvent::DeleteJob { slot } => self.delete_job(user_id, &slot).await,
            SkillEvent::Cancel | SkillEvent::Stop => Ok(SpeechResponse::tell("Goodbye!")),
            SkillEvent::Unhandled => {
                warn!("Unhandled intent");
                Ok(SpeechResponse::ask(
                    "An unhandled problem occurred!",
                    "An unhandled problem occurred!",
                ))
            }
        }
    }

    /// Existence-check-then-insert. The lookup/insert race between two
    /// near-concurrent turns for the same key is accepted; no locking.
    async fn add_job(&self, user_id: &str, slot: &SlotState) -> Result<SpeechResponse> {
        let name = match slot_gate(slot) {
            DialogAction::Elicit => return Ok(ADD_PROMPTS.elicit_response()),
            DialogAction::Confirm { name } => {
                return Ok(ADD_PROMPTS
                    .confirm_response(format!("The job you want to add is: {name}, correct?")))
            }
            DialogAction::Proceed { name } => name,
        };

        if self.store.get(user_id, &name).await?.is_some() {
            return Ok(SpeechResponse::tell(format!("Job {name} already exists!")));
        }

        self.store.put(&JobRecord::new(user_id, &name)).await?;
        info!(job = %name, "Job added");
        Ok(SpeechResponse::tell(format!("Job {name} added!")))
    }

    async fn list_jobs(&self, user_id: &str) -> Result<SpeechResponse> {
        let jobs = self.store.list(user_id).await?;

        if jobs.is_empty() {
            return Ok(SpeechResponse::tell("No jobs found!"));
        }

        let mut output = format!("The following jobs were found: {}", ssml::BREAK_X_STRONG);
        for job in &jobs {
            output.push_str(&job.name);
            output.push_str(ssml::BREAK_X_STRONG);
        }
        Ok(SpeechResponse::tell(output))
    }

    /// Grab-and-consume: a fetched job is immediately removed, keyed by
    /// the selected record itself, not the user-wide filter.
    async fn grab_job(&self, user_id: &str) -> Result<SpeechResponse> {
        let jobs = self.store.list(user_id).await?;

        if jobs.is_empty() {
            return Ok(SpeechResponse::tell("No jobs added."));
        }

        let job = &jobs[self.picker.pick(jobs.len())];
        self.store.delete(user_id, &job.name).await?;
        info!(job = %job.name, "Job grabbed");
        Ok(SpeechResponse::tell(format!(
            "You grabbed {} {}. Get to work!",
            job.name,
            ssml::BREAK_500MS
        )))
    }

    /// Existence-check-then-delete.
    async fn delete_job(&self, user_id: &str, slot: &SlotState) -> Result<SpeechResponse> {
        let name = match slot_gate(slot) {
            DialogAction::Elicit => return Ok(DELETE_PROMPTS.elicit_response()),
            DialogAction::Confirm { name } => {
                return Ok(DELETE_PROMPTS
                    .confirm_response(format!("You would like to delete the job {name}, correct?")))
            }
            DialogAction::Proceed { name } => name,
        };

        if self.store.get(user_id, &name).await?.is_none() {
            return Ok(SpeechResponse::tell(format!("Job {name} not found!")));
        }

        self.store.delete(user_id, &name).await?;
        info!(job = %name, "Job deleted");
        Ok(SpeechResponse::tell(format!("Job {name} deleted!")))
    }
}
