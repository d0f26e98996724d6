//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use gwasgene_cli::error::exit_code_for;
use gwasgene_cli::handlers::create_test_data::CreateTestDataArgs;
use gwasgene_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    dispatch(command, CliConfig::resolve(cli.data_dir.as_deref())).await
}

/// Validation runs offline; every other command bootstraps the catalog client.
async fn dispatch(command: Commands, config: CliConfig) -> anyhow::Result<()> {
    match command {
        Commands::Validate {
            paths,
            max_errors,
            json,
        } => handlers::validate::execute(&paths, max_errors, json),
        Commands::CreateTestData {
            sources,
            overwrite,
            rows,
            seed,
            workers,
        } => {
            let ctx = bootstrap(config)?;
            let args = CreateTestDataArgs {
                sources: &sources,
                overwrite,
                rows,
                seed,
                workers,
            };
            handlers::create_test_data::execute(&ctx, args).await
        }
        Commands::Query { sources } => {
            let ctx = bootstrap(config)?;
            handlers::query::execute(&ctx, &sources).await
        }
        Commands::FtpUrl { gcst, resolve } => {
            let ctx = bootstrap(config)?;
            handlers::ftp_url::execute(&ctx, &gcst, resolve).await
        }
        Commands::Paths => handlers::paths::execute(&bootstrap(config)?),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads GWASGENE_* fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = exit_code_for(&e);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
