//! Session data structures

use chrono::{DateTime, Utc};

use report_core::Record;
use report_state::{ReportEvent, ReportMachine, StepError, StepOutcome};

/// One user's report session: the accumulating record plus the step
/// machine driving it.
#[derive(Debug, Clone)]
pub struct ReportSession {
    /// Accumulated report fields.
    pub record: Record,

    /// Step machine for this session.
    pub machine: ReportMachine,

    /// When the session was created.
    pub started_at: DateTime<Utc>,

    /// Last time an event was processed.
    pub last_activity: DateTime<Utc>,
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            record: Record::new(),
            machine: ReportMachine::new(),
            started_at: now,
            last_activity: now,
        }
    }

    /// Feed one event through this session's machine.
    pub fn step(&mut self, event: ReportEvent) -> Result<StepOutcome, StepError> {
        self.last_activity = Utc::now();
        self.machine.step(&mut self.record, event)
    }

    /// Drop all entered data and return to idle.
    pub fn reset(&mut self) {
        self.record.clear();
        self.machine.reset();
        self.last_activity = Utc::now();
    }

    /// Whether any report data has been entered yet.
    pub fn has_data(&self) -> bool {
        self.record.has_shift()
    }
}
