//! State machine module
//!
//! Contains the FSM implementation for the report entry workflow.

mod events;
mod states;
mod transitions;

pub use events::ReportEvent;
pub use states::ReportState;
pub use transitions::{
    MenuOption, Reply, ReportMachine, StateTransition, StepError, StepOutcome,
};
