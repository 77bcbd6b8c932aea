//! Main application entry point (native).

use framemark_app::{SessionError, SessionScript, run_session};
use framemark_core::JsonSink;
use framemark_render::{Painter, SvgPainter, render_frame};
use std::process::ExitCode;

const USAGE: &str = "usage: framemark <session.json> [frame.svg]";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting framemark");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SessionError> {
    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .ok_or_else(|| SessionError::Usage(USAGE.to_string()))?;
    let output = args.next();

    let script = SessionScript::load(&script_path)?;
    let stdout = std::io::stdout();
    let mut sink = JsonSink::new(stdout.lock());
    let report = run_session(&script, &mut sink)?;

    for outcome in &report.outcomes {
        log::info!("Submit outcome: {outcome:?}");
    }

    if let Some(output) = output {
        let mut painter = SvgPainter::new();
        render_frame(Some(&mut painter as &mut dyn Painter), &report.frame);
        painter.save(output)?;
    }
    Ok(())
}
