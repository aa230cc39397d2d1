mod app;
mod cli;
mod composer;
mod source;

use std::process::ExitCode;

use eyespeak_common::{EyespeakError, Result};
use eyespeak_config::schema::LogLevel;
use eyespeak_config::EyespeakConfig;
use tracing_subscriber::EnvFilter;

use app::EyespeakApp;
use source::FrameRecord;

/// Crates whose log output the level setting controls.
const LOG_TARGETS: [&str; 5] = [
    "eyespeak",
    "eyespeak_common",
    "eyespeak_config",
    "eyespeak_gesture",
    "eyespeak_app",
];

/// Filter directives for `--log-level`: a bare level applies to every
/// eyespeak crate, anything else is passed through as written.
fn log_filter(log_level: Option<&str>, config_level: LogLevel) -> String {
    let level = log_level.unwrap_or(config_level.as_str());
    if level.contains('=') {
        return level.to_string();
    }
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(filter).unwrap_or_else(|e| {
            eprintln!("invalid log filter '{filter}': {e}");
            EnvFilter::new("eyespeak=info")
        })
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so `[logging] level` can seed the filter; load
    // errors are reported once logging is up.
    let loaded = eyespeak_config::load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(&log_filter(args.log_level.as_deref(), config_level));

    tracing::info!("EyeSpeak v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            EyespeakConfig::default()
        }
    };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args, config: &EyespeakConfig) -> Result<()> {
    let frames = source::read_frames(&args.frames)?;

    let speech = composer::sink_from_config(&config.speech);
    let mut app = EyespeakApp::new(config, speech);
    if let Some(screen) = args.screen {
        app = app.with_screen(screen.into());
    }

    if args.realtime {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        runtime.block_on(replay_realtime(&mut app, frames))?;
    } else {
        for frame in &frames {
            app.handle_frame(frame);
        }
    }

    let (frame_count, intent_count) = app.stats();
    tracing::info!("Processed {frame_count} frames, {intent_count} intents");
    println!("{}", app.composer().sentence().as_str().trim_end());
    Ok(())
}

async fn replay_realtime(app: &mut EyespeakApp, frames: Vec<FrameRecord>) -> Result<()> {
    let (handle, mut rx) = source::spawn_realtime(frames);
    while rx.changed().await.is_ok() {
        let frame = rx.borrow_and_update().clone();
        if let Some(frame) = frame {
            app.handle_frame(&frame);
        }
    }
    handle
        .await
        .map_err(|e| EyespeakError::Source(format!("replay task failed: {e}")))?
}
