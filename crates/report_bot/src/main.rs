use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use report_bot::{BotConfig, ConsoleTransport, DeliveryMode, Dispatcher, Incoming};

#[derive(Parser, Debug, Clone)]
#[command(name = "report-bot")]
#[command(about = "Guided KPI shift-report chat workflow")]
#[command(version)]
struct Cli {
    /// Chat platform access token (startup fails without one)
    #[arg(long, env = "BOT_TOKEN")]
    token: String,

    /// Public base URL for push delivery; pull delivery when unset
    #[arg(long, env = "WEBHOOK_BASE_URL")]
    webhook_base_url: Option<String>,

    /// Listen port for push delivery
    #[arg(long, env = "PORT", default_value = "10000")]
    port: u16,
}

const CONSOLE_SESSION: &str = "console";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    let config = BotConfig {
        token: cli.token,
        webhook_base_url: cli.webhook_base_url,
        port: cli.port,
    };

    match config.delivery_mode() {
        DeliveryMode::Webhook => log::info!(
            "push delivery configured on 0.0.0.0:{} -> {}",
            config.port,
            config.normalized_base_url().unwrap_or_default()
        ),
        DeliveryMode::Polling => log::info!("pull delivery configured (no WEBHOOK_BASE_URL set)"),
    }

    // The chat platform itself is out of scope here; drive the workflow
    // over stdin/stdout. Button presses are entered as their callback
    // ids (shown in brackets next to each option).
    log::info!("console mode: type /start to begin, Ctrl-D to exit");
    run_console().await
}

async fn run_console() -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(ConsoleTransport);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let incoming = if report_state::ReportEvent::from_callback(line).is_some() {
            Incoming::callback(CONSOLE_SESSION, line)
        } else {
            Incoming::text(CONSOLE_SESSION, line)
        };
        dispatcher.handle(incoming).await?;
    }
    Ok(())
}
