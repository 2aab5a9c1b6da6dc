mod routes;
mod services;
mod state;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use site::CatalogError;
use tracing_subscriber::EnvFilter;

use crate::services::build::{BuildError, build_site};
use crate::services::listing::format_listing;
use crate::services::watch::{WatchError, spawn_watcher};
use crate::state::{AppState, CatalogSource};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error validating catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Error building static site: {0}")]
    Build(#[from] BuildError),
    #[error("Error watching catalog: {0}")]
    Watch(#[from] WatchError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Validate, preview, and build the portfolio site")]
struct Cli {
    /// Tools file mapping technology tags to badge icons and colors.
    #[arg(long, global = true, env = "PORTFOLIO_TOOLS")]
    tools: Option<PathBuf>,

    /// Directory of stylesheets, images, and the WASM bundle.
    #[arg(long, global = true, env = "PORTFOLIO_STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CatalogArg {
    /// Catalog YAML file. Uses the built-in catalog when omitted.
    catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a catalog parses and every record is complete.
    Validate(CatalogArg),
    /// Serve a live preview and watch the catalog for changes.
    Serve {
        #[command(flatten)]
        catalog: CatalogArg,
        #[arg(long, env = "PORTFOLIO_HOST", default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "PORTFOLIO_PORT", default_value_t = 3000)]
        port: u16,
    },
    /// Write the static site.
    Build {
        #[command(flatten)]
        catalog: CatalogArg,
        #[arg(long, short, env = "PORTFOLIO_OUTPUT", default_value = "build")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Validate(arg) => validate(&CatalogSource::from_arg(arg.catalog)),
        Command::Serve {
            catalog,
            host,
            port,
        } => {
            let source = CatalogSource::from_arg(catalog.catalog);
            let state = AppState::new(source, cli.tools, cli.static_dir);
            serve(state, &host, port).await
        }
        Command::Build { catalog, output } => {
            let source = CatalogSource::from_arg(catalog.catalog);
            let state = AppState::new(source, cli.tools, cli.static_dir);
            build(&state, &output)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn validate(source: &CatalogSource) -> Result<(), CliError> {
    println!("Validating projects from {source}...");
    let catalog = source.load()?;
    println!("✅ Catalog is valid! Found {} projects.", catalog.len());
    Ok(())
}

async fn serve(state: AppState, host: &str, port: u16) -> Result<(), CliError> {
    // An invalid catalog is reported, not fatal: the watcher picks up the fix.
    report_catalog(&state.catalog);

    let _watcher = match state.catalog.path() {
        Some(path) => {
            println!("Watching {} for changes. Press Ctrl+C to stop.", path.display());
            let source = state.catalog.clone();
            Some(spawn_watcher(path, move || {
                println!("\n📝 Changes detected in {source}");
                report_catalog(&source);
            })?)
        }
        None => None,
    };

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(%addr, "preview server listening");
    println!("Preview at http://{addr}/");
    axum::serve(listener, routes::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CliError::Serve)
}

fn build(state: &AppState, output: &std::path::Path) -> Result<(), CliError> {
    println!("Building static site from {} in {}...", state.catalog, output.display());
    let report = build_site(state, output)?;
    println!("✅ Catalog is valid! Found {} projects.", report.projects);
    if report.missing_bundle {
        println!(
            "⚠️  No WASM bundle in {}; the theme toggle will be inert. See the `site` crate docs.",
            state.static_dir.display()
        );
    }
    println!(
        "✅ Static site built successfully in {}! ({} pages, {} assets)",
        report.output.display(),
        report.pages,
        report.assets
    );
    Ok(())
}

fn report_catalog(source: &CatalogSource) {
    match source.load() {
        Ok(catalog) => {
            println!("✅ Catalog is valid! Found {} projects.", catalog.len());
            print!("{}", format_listing(&catalog));
        }
        Err(e) => {
            tracing::warn!(%source, error = %e, "catalog failed validation");
            eprintln!("❌ Error validating catalog: {e}");
        }
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
