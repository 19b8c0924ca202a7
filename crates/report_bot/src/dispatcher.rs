//! Event dispatcher
//!
//! One inbound event is handled to completion before the next for the
//! same session: the session's own lock is held across the step, so a
//! user's events serialize without blocking other sessions.

use report_core::render_report;
use report_state::{Reply, ReportEvent, StepError};
use session_store::SessionStore;

use crate::transport::ChatTransport;

const HELP_TEXT: &str = "Panduan:\n\
• /start → pilih shift\n\
• Shift 2: bot minta data Shift 1 dulu (Struk & Variance) → auto isi TRX CPU/Variance Shift 1\n\
• Tanggal → sales → struk → (tanya produk khusus) → variance → preview\n\
• Tombol /start /help /preview /batal ada di bawah.";

const WELCOME_TEXT: &str = "Selamat datang! Klik tombol untuk mulai laporan.";
const NO_DATA_TEXT: &str = "Belum ada data. Ketik /start dulu ya.";
const RESET_TEXT: &str = "Sesi di-reset. Ketik /start untuk mulai lagi.";
const IDLE_HINT_TEXT: &str = "Ketik /start untuk memulai.";
const UNKNOWN_STEP_TEXT: &str = "Langkah tidak dikenali. /batal lalu /start untuk ulang.";

/// Recognized slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    Preview,
    Cancel,
}

impl BotCommand {
    /// Parse a command from message text. The permanent keyboard sends
    /// commands as plain text, so free text is matched here too.
    pub fn from_text(text: &str) -> Option<BotCommand> {
        match text.trim() {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/preview" => Some(Self::Preview),
            "/batal" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// One inbound chat event, tagged with its session.
#[derive(Debug, Clone)]
pub struct Incoming {
    pub session_id: String,
    pub kind: IncomingKind,
}

#[derive(Debug, Clone)]
pub enum IncomingKind {
    Command(BotCommand),
    Callback(String),
    Text(String),
}

impl Incoming {
    pub fn command(session_id: impl Into<String>, command: BotCommand) -> Self {
        Self {
            session_id: session_id.into(),
            kind: IncomingKind::Command(command),
        }
    }

    pub fn callback(session_id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            kind: IncomingKind::Callback(data.into()),
        }
    }

    pub fn text(session_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            kind: IncomingKind::Text(text.into()),
        }
    }
}

/// Routes inbound events into sessions and replies through the
/// transport.
pub struct Dispatcher<T: ChatTransport> {
    store: SessionStore,
    transport: T,
}

impl<T: ChatTransport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            store: SessionStore::new(),
            transport,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one inbound event to completion.
    pub async fn handle(&self, incoming: Incoming) -> anyhow::Result<()> {
        let session_id = incoming.session_id.as_str();
        match incoming.kind {
            IncomingKind::Command(command) => self.handle_command(session_id, command).await,
            IncomingKind::Callback(data) => match ReportEvent::from_callback(&data) {
                Some(event) => self.run_step(session_id, event).await,
                None => {
                    log::warn!("session {session_id}: unknown callback {data:?}");
                    self.transport
                        .send_text(session_id, UNKNOWN_STEP_TEXT, false)
                        .await
                }
            },
            IncomingKind::Text(text) => {
                let text = text.trim();
                // The permanent keyboard delivers commands as plain text
                if let Some(command) = BotCommand::from_text(text) {
                    return self.handle_command(session_id, command).await;
                }
                self.run_step(session_id, ReportEvent::Text(text.to_string()))
                    .await
            }
        }
    }

    async fn handle_command(&self, session_id: &str, command: BotCommand) -> anyhow::Result<()> {
        log::info!("session {session_id}: {command:?}");
        match command {
            BotCommand::Start => {
                self.store.reset(session_id).await;
                self.transport
                    .send_choice_menu(
                        session_id,
                        WELCOME_TEXT,
                        &[report_state::MenuOption::new(
                            "Mulai Laporan KPI",
                            "start_laporan",
                        )],
                    )
                    .await
            }
            BotCommand::Help => self.transport.send_text(session_id, HELP_TEXT, true).await,
            BotCommand::Preview => {
                let session = self.store.session(session_id).await;
                let session = session.read().await;
                if !session.has_data() {
                    self.transport.send_text(session_id, NO_DATA_TEXT, false).await
                } else {
                    let report = render_report(&session.record);
                    self.transport.send_text(session_id, &report, true).await
                }
            }
            BotCommand::Cancel => {
                self.store.reset(session_id).await;
                self.transport.send_text(session_id, RESET_TEXT, false).await
            }
        }
    }

    /// Feed one event through the session's machine and forward every
    /// reply. Step errors are reported to the user; the session stays
    /// at the step that failed.
    async fn run_step(&self, session_id: &str, event: ReportEvent) -> anyhow::Result<()> {
        let session = self.store.session(session_id).await;
        let mut session = session.write().await;

        match session.step(event) {
            Ok(outcome) => {
                for reply in outcome.replies {
                    self.send_reply(session_id, reply).await?;
                }
                Ok(())
            }
            Err(err @ StepError::UnexpectedEvent { .. }) => {
                log::warn!("session {session_id}: {err}");
                if session.machine.state().is_idle() {
                    self.transport.send_text(session_id, IDLE_HINT_TEXT, false).await
                } else {
                    let message = format!("Input tidak valid: {err}\nCoba lagi.");
                    self.transport.send_text(session_id, &message, false).await
                }
            }
        }
    }

    async fn send_reply(&self, session_id: &str, reply: Reply) -> anyhow::Result<()> {
        match reply {
            Reply::Text { body, markdown } => {
                self.transport.send_text(session_id, &body, markdown).await
            }
            Reply::Menu { prompt, options } => {
                self.transport
                    .send_choice_menu(session_id, &prompt, &options)
                    .await
            }
        }
    }
}
