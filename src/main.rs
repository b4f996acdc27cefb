//! bluegreen-hook
//!
//! Validates test traffic after a blue/green deployment controller has
//! routed its test listener to the new (green) task set.
//!
//! # Architecture Overview
//!
//! ```text
//!   deployment controller
//!          │  event (opaque JSON)
//!          ▼
//!   ┌──────────────┐   ┌──────────────┐   ┌───────────────────┐
//!   │ invoke / HTTP│──▶│     hook     │──▶│  probe (GET)      │──▶ test listener
//!   │   endpoint   │   │  retry loop  │◀──│  timeout-bounded  │◀── (green tasks)
//!   └──────────────┘   └──────┬───────┘   └───────────────────┘
//!          ▲                  │
//!          └──────────────────┘
//!   {"status":"Succeeded","code":200}  |  error → controller rolls back
//! ```

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use bluegreen_hook::config::{loader, validation, HookConfig, ProcessEnv, SharedEnv};
use bluegreen_hook::cli;
use bluegreen_hook::hook::InvocationContext;
use bluegreen_hook::observability::{logging, metrics};
use bluegreen_hook::{lifecycle, HttpServer, Shutdown, TrafficValidationHook};

#[derive(Parser)]
#[command(name = "bluegreen-hook", version)]
#[command(about = "Test traffic validation hook for blue/green deployments", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "HOOK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one validation and print the result as JSON
    Invoke {
        /// Event payload file, or `-` for stdin (defaults to `{}`)
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Serve invocations over HTTP
    Serve {
        /// Override server.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Validate configuration and report the worst-case validation time
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    let config = loader::load_or_default(cli.config.as_deref())?;

    logging::init_logging(&config.observability);

    if let Some(warning) = validation::check_invocation_budget(&config) {
        tracing::warn!(%warning, "Platform may stop the hook before validation completes");
    }

    match cli.command {
        Commands::Invoke { event } => invoke(&config, event.as_deref()).await,
        Commands::Serve { bind } => serve(config, bind).await.map(|()| ExitCode::SUCCESS),
        Commands::CheckConfig => check_config(&config),
    }
}

async fn invoke(config: &HookConfig, event: Option<&str>) -> Result<ExitCode, Box<dyn Error>> {
    let event = cli::read_event(event, std::io::stdin())?;
    let hook = TrafficValidationHook::from_config(&config.probe)?;

    let result = hook.validate(&event, &InvocationContext::default()).await;
    println!("{}", serde_json::to_string(&cli::result_json(&result))?);

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn serve(mut config: HookConfig, bind: Option<String>) -> Result<(), Box<dyn Error>> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let env: SharedEnv = Arc::new(ProcessEnv);
    let hook = TrafficValidationHook::http(&config.probe, env)?;

    let worst_case = hook
        .policy()
        .worst_case(Duration::from_millis(config.probe.timeout_ms));
    if Duration::from_secs(config.server.request_timeout_secs) <= worst_case {
        tracing::warn!(
            request_timeout_secs = config.server.request_timeout_secs,
            worst_case = ?worst_case,
            "Server request timeout may cut validations short"
        );
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(hook, &config.server);

    let listener = TcpListener::bind(&config.server.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        lifecycle::signals::shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn check_config(config: &HookConfig) -> Result<ExitCode, Box<dyn Error>> {
    let report = cli::BudgetReport::from_config(config);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.fits_invocation_timeout {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
