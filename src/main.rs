//! Taskdeck - interactive single-user task list manager

use anyhow::{Context, Result};

use taskdeck::menu;
use taskdeck::task::TaskStore;

/// Backing file in the working directory. The store takes the path as a
/// construction parameter, so tests point it at temp locations instead.
const TASK_FILE: &str = "tasks.json";

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let mut store = TaskStore::load(TASK_FILE)
        .with_context(|| format!("Cannot start with task file '{}'", TASK_FILE))?;

    menu::run(&mut store)
}
