use std::path::PathBuf;

use anyhow::Context;
use signline_hand_pose::PosePipeline;
use signline_subtitle::{GestureLabel, SubtitleRuntime, SubtitleSession};

use crate::{
    config::AppConfig,
    fixture::{Action, Fixture, Reading},
    runtime::PrintRuntime,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Fixture JSON; the built-in demo when omitted
    pub fixture: Option<PathBuf>,

    /// Print the final frame as JSON instead of each sentence
    #[arg(long)]
    pub json: bool,

    /// Also write the transcript to the export path
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub accepted: usize,
    pub committed: usize,
}

pub fn run(args: Args, config: &AppConfig) -> anyhow::Result<()> {
    let fixture = match args.fixture.as_deref() {
        Some(path) => Fixture::load(path)?,
        None => Fixture::demo()?,
    };

    let mut pipeline = PosePipeline::from_config(&config.pose).context("invalid pose config")?;
    let speech = config
        .subtitle
        .speech_enabled
        .then(|| config.speech_backend());
    let runtime = PrintRuntime::new(speech, args.json);
    let mut session = SubtitleSession::new(&config.subtitle, runtime);

    let summary = replay(&fixture, &mut pipeline, &mut session)?;
    tracing::info!(
        fixture = %fixture.name,
        frames = summary.frames,
        accepted = summary.accepted,
        committed = summary.committed,
        "replay_finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.frame())?);
    }

    if args.save {
        let target = config.export_path()?;
        signline_storage::export_transcript(&target, &session.export())
            .with_context(|| format!("failed to export to {}", target.display()))?;
        eprintln!("exported to {}", target.display());
    }

    Ok(())
}

/// Feeds every fixture frame through the pose pipeline and the session, in
/// order.
pub fn replay<R: SubtitleRuntime>(
    fixture: &Fixture,
    pipeline: &mut PosePipeline,
    session: &mut SubtitleSession<R>,
) -> anyhow::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for frame in &fixture.frames {
        summary.frames += 1;

        if let Some(reading) = frame.reading()? {
            let raw = match reading {
                Reading::Hand(hand) => pipeline.observe(Some(&hand)),
                Reading::Label(label) => pipeline.observe_label(Some(&label)),
                Reading::Empty => pipeline.observe(None),
            };
            let raw = GestureLabel::from_reading(raw);
            if session.tick(raw.as_ref(), frame.t_ms).is_some() {
                summary.accepted += 1;
            }
        }

        if let Some(action) = frame.action {
            tracing::debug!(%action, t_ms = frame.t_ms, "replay_action");
            match action {
                Action::Commit => {
                    if session.commit().is_some() {
                        summary.committed += 1;
                    }
                }
                Action::Undo => session.undo_last(),
                Action::Clear => session.clear(),
                Action::ResetInput => {
                    pipeline.reset();
                    session.reset_input();
                }
                Action::ResetTranscript => session.reset_transcript(),
            }
        }
    }

    Ok(summary)
}
