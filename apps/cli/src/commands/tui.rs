use std::{path::PathBuf, time::Duration};

use anyhow::Context;

use crate::{
    app::App,
    config::AppConfig,
    event::{AppEvent, EventHandler},
    runtime::ChannelRuntime,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Detector tick interval
    #[arg(long, default_value_t = 33)]
    pub tick_ms: u64,

    /// Log file; the terminal belongs to the UI while it runs
    #[arg(long, env = "SIGNLINE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("signline.log"))
    }
}

fn setup_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        original(info);
    }));
}

pub async fn run(args: Args, config: AppConfig) -> anyhow::Result<()> {
    let export_path = config.export_path().context("cannot resolve export path")?;

    let (session_tx, session_rx) = tokio::sync::mpsc::unbounded_channel();
    let runtime = ChannelRuntime::new(session_tx, Some(config.speech_backend()));
    let mut app = App::new(&config, runtime, export_path).context("invalid pose config")?;
    let mut events = EventHandler::new(session_rx, Duration::from_millis(args.tick_ms.max(1)));

    tracing::info!(tick_ms = args.tick_ms, "tui_started");

    setup_panic_hook();
    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| crate::ui::draw(frame, &app)).ok();

        match events.next().await {
            Some(AppEvent::Key(key)) => app.handle_key(key),
            Some(AppEvent::Session(event)) => app.handle_session_event(event),
            Some(AppEvent::Tick) => app.handle_tick(),
            Some(AppEvent::Resize) => {}
            None => break,
        }

        if app.export_requested {
            app.export().await;
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();

    let transcript = app.frame().transcript;
    for entry in &transcript {
        println!("{}", entry.text);
    }
    tracing::info!(sentences = transcript.len(), "tui_finished");

    Ok(())
}
