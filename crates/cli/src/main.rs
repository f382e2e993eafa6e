use std::process::ExitCode;

use clap::Parser;
use panel_order_cli::args::Args;
use panel_order_cli::config::Config;
use panel_order_cli::{app, logging};
use panel_order_shared_kernel::PanelOrderError;

/// Exit status for rejected order input, distinct from I/O failures.
const EXIT_INVALID_ORDER: u8 = 2;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn run(args: Args) -> panel_order_shared_kernel::Result<()> {
    let config = Config::try_from(args)?;
    if let Err(e) = logging::init(config.verbosity) {
        eprintln!("Warning: logging unavailable: {e}");
    }
    app::run(&config)
}

fn report(error: &PanelOrderError) -> ExitCode {
    if let Some(order_err) = error.as_domain() {
        eprintln!("{order_err}");
        return ExitCode::from(EXIT_INVALID_ORDER);
    }
    match error {
        PanelOrderError::Presentation(e) => eprintln!("Configuration Error: {e}"),
        other => eprintln!("Application Error: {other}"),
    }
    ExitCode::FAILURE
}
