//! Delete command handler
//!
//! Runs the guarded deletion pipeline over the requested paths.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Result};

use storekeep::application::delete::DeletionOrchestrator;
use storekeep::config::Config;
use storekeep::domain::ports::{EventSink, NoopEventSink};
use storekeep::infrastructure::{JsonEventSink, LocalStore, StderrEventSink};
use storekeep::ui::render_report;

/// Execute the delete command.
///
/// Returns whether every requested path was deleted; the caller turns a
/// partial failure into a non-zero exit code.
pub fn cmd_delete(
    config: Option<&Path>,
    paths: &[String],
    yes: bool,
    json: bool,
    verbose: u8,
) -> Result<bool> {
    let config = Config::resolve(config)?;
    let roots = config.root_set()?;

    if json && !yes {
        bail!("--json runs non-interactively, pass --yes to confirm deletion");
    }
    if !yes && !confirm(paths.len())? {
        eprintln!("aborted");
        return Ok(true);
    }

    let storage = LocalStore::new();
    let sink: Box<dyn EventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else if verbose > 0 {
        Box::new(StderrEventSink::new())
    } else {
        Box::new(NoopEventSink)
    };

    let orchestrator = DeletionOrchestrator::new(&storage, &roots, sink.as_ref());
    let report = orchestrator.delete_many(paths);

    if json {
        println!(
            "{}",
            serde_json::json!({ "event": "result", "result": report })
        );
    } else {
        print!("{}", render_report(&report));
    }

    Ok(report.all_succeeded())
}

fn confirm(count: usize) -> Result<bool> {
    eprint!("Delete {} file(s) from the content store? [y/N] ", count);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
