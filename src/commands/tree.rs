//! Tree command handler
//!
//! Enumerates the allowed roots and prints the forest.

use std::path::Path;

use anyhow::{bail, Result};

use storekeep::application::enumerate::TreeBuilder;
use storekeep::config::Config;
use storekeep::domain::ports::{EventSink, NoopEventSink};
use storekeep::domain::value_objects::RootSet;
use storekeep::infrastructure::{JsonEventSink, LocalStore, StderrEventSink};
use storekeep::ui::render_forest;

/// Execute the tree command
pub fn cmd_tree(
    config: Option<&Path>,
    root: Option<&str>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let config = Config::resolve(config)?;
    let roots = config.root_set()?;
    let roots = narrow(roots, root)?;

    let storage = LocalStore::new();
    let sink: Box<dyn EventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else if verbose > 0 {
        Box::new(StderrEventSink::new())
    } else {
        Box::new(NoopEventSink)
    };

    let builder = TreeBuilder::new(&storage, &roots, sink.as_ref());
    let forest = builder.build_forest();

    if json {
        println!(
            "{}",
            serde_json::json!({ "event": "result", "result": forest })
        );
    } else {
        print!("{}", render_forest(&forest));
    }

    Ok(())
}

/// Narrow the configured set to one root when --root was given.
fn narrow(roots: RootSet, name: Option<&str>) -> Result<RootSet> {
    match name {
        None => Ok(roots),
        Some(name) => match roots.by_name(name) {
            Some(found) => Ok(RootSet::new(vec![found.clone()])?),
            None => bail!("unknown root '{}'", name),
        },
    }
}
