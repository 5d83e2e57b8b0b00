//! vibes-commit - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use vibes_commit::config::{resolve_api_key, store_api_key};
use vibes_commit::git::SystemGit;
use vibes_commit::hook::install_hook;
use vibes_commit::sink::TerminalPrompt;
use vibes_commit::workflow::TerminalNotifier;
use vibes_commit::{
    CommitSurface, CompletionClient, ConfigScope, Invocation, Notifier, Placement, Workflow,
};

/// Write a commit message for the staged changes using an LLM.
#[derive(Parser, Debug)]
#[command(name = "vibes-commit")]
#[command(about = "Write a commit message for the staged changes using an LLM")]
#[command(version)]
struct Cli {
    /// Workspace root (defaults to the current directory)
    #[arg(short = 'w', long, global = true)]
    workspace: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// API key for this run (overrides VIBES_COMMIT_API_KEY and git config)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Commit message file to fill instead of prompting (prepare-commit-msg hook mode)
    #[arg(long, global = true)]
    message_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a message for the staged changes (the default)
    Generate,
    /// Store the API key as vibesCommitIt.apiKey in git config
    SetApiKey {
        /// The API key
        key: String,

        /// Write to the repository's config instead of the global one
        #[arg(long)]
        local: bool,
    },
    /// Install a prepare-commit-msg hook that fills in generated messages
    InstallHook {
        /// Overwrite an existing prepare-commit-msg hook
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let workspace = cli
        .workspace
        .or_else(|| std::env::current_dir().ok());

    match cli.command {
        None | Some(Commands::Generate) => Ok(generate(cli.generate, workspace).await),
        Some(Commands::SetApiKey { key, local }) => {
            let workspace = workspace.context("Could not determine the workspace directory")?;
            let scope = if local {
                ConfigScope::Local
            } else {
                ConfigScope::Global
            };
            store_api_key(&key, scope, &workspace).context("Failed to store API key")?;
            println!("✓ API key saved to {} git config", if local { "local" } else { "global" });
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::InstallHook { force }) => {
            let workspace = workspace.context("Could not determine the workspace directory")?;
            let path = install_hook(&workspace, force).context("Failed to install hook")?;
            println!("✓ Installed {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run the generate workflow once.
async fn generate(args: GenerateArgs, workspace: Option<PathBuf>) -> ExitCode {
    let notifier = TerminalNotifier;

    let client = match CompletionClient::new() {
        Ok(client) => client,
        Err(e) => {
            notifier.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let invocation = Invocation {
        api_key: resolve_api_key(args.api_key.as_deref(), workspace.as_deref()),
        surface: CommitSurface::detect(args.message_file),
        workspace,
    };

    let workflow = Workflow::new(SystemGit, client, TerminalPrompt);
    match workflow.execute(invocation, &notifier).await {
        Some(Placement::Committed(message)) => {
            println!("✓ Committed: {}", message.lines().next().unwrap_or_default());
            ExitCode::SUCCESS
        }
        Some(Placement::SurfaceUpdated) | Some(Placement::Cancelled) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}
