//! session_store - In-memory per-user session registry
//!
//! One `ReportSession` per chat id, held only for the lifetime of the
//! process. There is deliberately no persistence: abandoning a session
//! and starting over is the recovery model.

mod store;
mod structs;

pub use store::SessionStore;
pub use structs::ReportSession;
