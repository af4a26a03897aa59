//! Execution of command scripts

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use startlist_core::infrastructure::StartlistVersion;
use startlist_core::{InMemoryStartlistSystem, StartlistCommand, StartlistId, StartlistSnapshot};
use tracing::info;

/// Final state of every startlist a script touched.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub startlists: Vec<StartlistReport>,
}

#[derive(Debug, Serialize)]
pub struct StartlistReport {
    pub snapshot: StartlistSnapshot,
    pub versions: Vec<StartlistVersion>,
}

/// Read and parse a script file.
///
/// # Errors
/// Returns an error if the file is unreadable or not a JSON array of commands.
pub fn load_script(path: &Path) -> Result<Vec<StartlistCommand>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", path.display()))
}

/// Dispatch commands in order, stopping at the first failure.
///
/// # Errors
/// Returns the failing command's error, annotated with its position and name.
pub async fn run_commands(
    system: &InMemoryStartlistSystem,
    commands: Vec<StartlistCommand>,
) -> Result<RunReport> {
    let mut touched: Vec<StartlistId> = Vec::new();

    for (index, command) in commands.into_iter().enumerate() {
        let name = command.name();
        let startlist_id = command.startlist_id().clone();
        system.application.dispatch(command).await.map_err(|error| {
            anyhow::anyhow!(
                "Command #{} ({name}) failed with status {}: {error}",
                index + 1,
                error.http_status()
            )
        })?;
        info!(step = index + 1, command = name, startlist_id = %startlist_id, "Command applied");
        if !touched.contains(&startlist_id) {
            touched.push(startlist_id);
        }
    }

    let mut startlists = Vec::with_capacity(touched.len());
    for startlist_id in &touched {
        startlists.push(StartlistReport {
            snapshot: system.application.get(startlist_id).await?,
            versions: system.versions.versions(startlist_id)?,
        });
    }
    Ok(RunReport { startlists })
}
