pub mod lifecycle;
pub mod types;

pub use lifecycle::{apply_transition, due_transition, FreezeReason, IllegalTransition, Transition};
pub use types::{
    DrawKind, DrawSchedule, DrawStatus, MiniCycle, ScheduleError, SelectionMethod, Winner,
};
