//! report_bot - Dispatcher and transport boundary
//!
//! Routes inbound chat events (commands, button callbacks, free text)
//! into per-user report sessions and forwards the resulting prompts
//! through the chat transport. The transport itself is an opaque
//! collaborator behind the `ChatTransport` trait.

pub mod config;
pub mod dispatcher;
pub mod transport;

pub use config::{BotConfig, DeliveryMode};
pub use dispatcher::{BotCommand, Dispatcher, Incoming, IncomingKind};
pub use transport::{ChatTransport, ConsoleTransport};
