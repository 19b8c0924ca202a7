//! report_state - State machine for the guided KPI report workflow
//!
//! This crate drives one report session: given the current step, the
//! accumulated record and an inbound chat event, it updates the record,
//! advances the step pointer and produces the outbound prompts.

pub mod machine;

// Re-export commonly used types
pub use machine::{
    MenuOption, Reply, ReportEvent, ReportMachine, ReportState, StateTransition, StepError,
    StepOutcome,
};
