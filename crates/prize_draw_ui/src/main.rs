use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use prize_draw_core::Route;
use prize_draw_ui::app::session::session_file_path;
use prize_draw_ui::app::PrizeDrawApp;
use prize_draw_ui::config::{init_logging, DrawArgs, ServiceArgs};
use prize_draw_ui::ui::app_shell::run;
use tracing::{error, warn};

#[derive(Parser)]
#[command(about = "Desktop prize draw")]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,
    #[command(flatten)]
    draw: DrawArgs,
    /// Start on a location such as `/lottery?id=E1` instead of the saved session
    #[arg(long)]
    open: Option<String>,
    /// Do not read or write the session file
    #[arg(long)]
    no_session: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let service = match cli.service.connect() {
        Ok(service) => service,
        Err(err) => {
            error!(error = %err, "failed to start");
            return ExitCode::FAILURE;
        }
    };

    let session_path = if cli.no_session {
        None
    } else {
        match session_file_path() {
            Ok(path) => Some(path),
            Err(err) => {
                warn!(error = %err, "running without a session file");
                None
            }
        }
    };

    let start = cli.open.as_deref().map(Route::parse);
    let app = PrizeDrawApp::new(
        Arc::new(service),
        cli.draw.shake_delay(),
        session_path,
        start,
    );

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "ui exited with an error");
            ExitCode::FAILURE
        }
    }
}
