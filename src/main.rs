use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use livecam_ascii::cli::{init_config, list_cameras, show_config, Args, Command, ConfigAction};
use livecam_ascii::config::{Config, Settings};
use livecam_ascii::error::{AppError, EXIT_OK};
use livecam_ascii::session::{
    launch, InterruptFlag, QuitSignals, SessionError, SessionSummary, StopReason, SystemClock,
};
use livecam_ascii::terminal::{KeyboardQuit, RawModeGuard, Screen};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Logs go to stderr so they never interleave with the frame buffer on stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolve settings: CLI > config file > built-in defaults.
fn resolve_settings(args: &Args) -> Result<Settings, AppError> {
    let config = Config::load(args.config.as_deref())?;
    let mut settings = Settings::from_config(&config)?;
    args.apply(&mut settings);
    log::debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

fn run_session(settings: &Settings) -> Result<SessionSummary, AppError> {
    let mut converter = settings.converter();
    let session_config = settings.session_config()?.with_banner(true);
    let camera_settings = settings.camera_settings();

    let interrupt = InterruptFlag::install()?;
    let interactive = io::stdin().is_terminal();

    let mut quit = QuitSignals::new().with(interrupt);
    let mut guard = if interactive {
        quit = quit.with(KeyboardQuit::new());
        Some(RawModeGuard::enter()?)
    } else {
        log::info!("stdin is not a terminal; use Ctrl+C to stop");
        None
    };

    let mut clock = SystemClock::new();
    let mut screen = Screen::new(io::stdout());

    let result = launch(
        || settings.backend.open(&camera_settings),
        &mut converter,
        &session_config,
        &mut clock,
        &mut screen,
        &mut quit,
    );

    if let Some(guard) = guard.as_mut() {
        guard.exit()?;
    }
    drop(guard);

    let ran = !matches!(result, Err(SessionError::CameraUnavailable(_)));
    if ran {
        if let Ok(summary) = &result {
            if summary.reason == StopReason::Interrupted {
                println!("\n\nInterrupted by user.");
            }
        }
        println!("\nCamera released. Goodbye!");
    }

    result.map_err(AppError::from)
}

fn report(err: &AppError) {
    eprintln!("{}", err.headline());
    eprintln!("  {}", err);
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{}", hint);
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    let result = match &args.command {
        Some(Command::ListCameras) => list_cameras().map_err(AppError::from),
        Some(Command::Config {
            action: ConfigAction::Init,
        }) => init_config(args.config.as_deref())
            .map(|_| ())
            .map_err(AppError::from),
        Some(Command::Config {
            action: ConfigAction::Show,
        }) => resolve_settings(&args).map(|settings| show_config(&settings, args.config.as_deref())),
        None => resolve_settings(&args).and_then(|settings| run_session(&settings).map(|_| ())),
    };

    match result {
        Ok(()) => process::exit(EXIT_OK),
        Err(e) => {
            report(&e);
            process::exit(e.exit_code());
        }
    }
}
