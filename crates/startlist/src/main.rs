//! Startlist CLI - orienteering startlist scheduling
//!
//! Binary name: `startlist`

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use startlist_core::domain::SystemClock;
use startlist_core::{load_config, InMemoryStartlistSystem};

mod cli;
mod demo;
mod script;
mod setup;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: {error:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    setup::init_tracing(&config)?;

    let system = InMemoryStartlistSystem::build(&config, Arc::new(SystemClock))?;
    let commands = match &cli.command {
        Commands::Run { script } => script::load_script(script)?,
        Commands::Demo => demo::demo_commands()?,
    };
    let report = script::run_commands(&system, commands).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use startlist_core::{StartlistConfig, StartlistStatus};

    fn wired_system() -> InMemoryStartlistSystem {
        InMemoryStartlistSystem::build(&StartlistConfig::default(), Arc::new(SystemClock))
            .expect("system wired")
    }

    #[tokio::test]
    async fn test_demo_finalizes_with_one_version() {
        let system = wired_system();

        let commands = demo::demo_commands().expect("demo data valid");

        let report = script::run_commands(&system, commands)
            .await
            .expect("demo runs");

        assert_eq!(report.startlists.len(), 1);
        let startlist = &report.startlists[0];
        assert_eq!(startlist.snapshot.status, StartlistStatus::Finalized);
        assert_eq!(startlist.snapshot.start_times.len(), 2);
        assert_eq!(startlist.versions.len(), 1);
    }

    #[tokio::test]
    async fn test_script_stops_at_first_failure() {
        let system = wired_system();
        let commands: Vec<startlist_core::StartlistCommand> = serde_json::from_str(
            r#"[{"command": "finalize", "startlist_id": "missing"}]"#,
        )
        .expect("script parses");

        let error = script::run_commands(&system, commands)
            .await
            .expect_err("missing startlist");

        assert!(error.to_string().contains("Command #1 (finalize) failed with status 404"));
    }

    #[test]
    fn test_script_file_parses() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("script.json");
        std::fs::write(
            &path,
            r#"[{"command": "invalidate_start_times", "startlist_id": "sl-1", "reason": "redo"}]"#,
        )
        .expect("script written");

        let commands = script::load_script(&path).expect("script loads");

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name(), "invalidate_start_times");
    }
}
