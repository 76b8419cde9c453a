// Domain Layer - Pure types, no I/O

pub mod event;
pub mod job;
pub mod response;
pub mod slot;

pub use event::SkillEvent;
pub use job::JobRecord;
pub use response::{ssml, SpeechResponse};
pub use slot::{ConfirmationStatus, SlotState};
