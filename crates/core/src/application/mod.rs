// Application Layer - Use cases

pub mod dialog;
pub mod skill;

pub use dialog::{slot_gate, DialogAction, SlotPrompts};
pub use skill::SkillService;
