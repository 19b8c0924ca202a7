//! Chat transport boundary
//!
//! The external chat platform is reduced to two primitives: send text
//! and send a choice menu. Everything upstream of that (webhook or
//! polling plumbing, platform API calls) lives behind this trait.

use async_trait::async_trait;

use report_state::MenuOption;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver a text message to a session.
    async fn send_text(&self, session_id: &str, text: &str, markdown: bool) -> anyhow::Result<()>;

    /// Deliver a structured choice menu to a session.
    async fn send_choice_menu(
        &self,
        session_id: &str,
        prompt: &str,
        options: &[MenuOption],
    ) -> anyhow::Result<()>;
}

/// Stdout transport for local dry runs: prompts are printed, menu
/// options are shown with the callback id to type back.
#[derive(Debug, Clone, Default)]
pub struct ConsoleTransport;

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_text(&self, _session_id: &str, text: &str, _markdown: bool) -> anyhow::Result<()> {
        println!("{text}");
        Ok(())
    }

    async fn send_choice_menu(
        &self,
        _session_id: &str,
        prompt: &str,
        options: &[MenuOption],
    ) -> anyhow::Result<()> {
        println!("{prompt}");
        for option in options {
            println!("  [{}] {}", option.callback, option.label);
        }
        Ok(())
    }
}
