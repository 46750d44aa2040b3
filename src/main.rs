//! File Manager - browse and edit one directory tree from the browser
//!
//! # Usage
//! ```bash
//! file-manager                       # Serve ./workDir on port 8080
//! file-manager --root /srv/share     # Serve a different directory
//! file-manager --port 9000 --open    # Pick a port and open the browser
//! ```

mod error;
mod models;
mod routes;
mod storage;
mod views;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storage::{DEFAULT_ROOT_DIR, WorkDir};

/// File Manager - list, create, rename, delete, upload and download files over HTTP
#[derive(Parser)]
#[command(name = "file-manager")]
#[command(about = "A minimal web-based file manager", long_about = None)]
struct Cli {
    /// Directory to expose (default: ./workDir, created if missing)
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Address or hostname to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Stop the listing walk this many levels below the root
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,
}

/// Resolved startup settings.
struct ServerConfig {
    root: PathBuf,
    host: String,
    port: u16,
    max_depth: Option<usize>,
    open: bool,
}

impl ServerConfig {
    fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("cannot read working directory")?;
        let root = match cli.root {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => cwd.join(DEFAULT_ROOT_DIR),
        };

        Ok(Self {
            root,
            host: cli.host,
            port: cli.port,
            max_depth: cli.max_depth,
            open: cli.open,
        })
    }

    /// Resolves `host` (IP literal or hostname) to the first matching socket address.
    async fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("cannot resolve bind address {}:{}", self.host, self.port))?
            .next()
            .with_context(|| format!("no address found for {}:{}", self.host, self.port))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_cli(Cli::parse())?;
    let addr = config.bind_addr().await?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let root = match WorkDir::bootstrap(&config.root, config.max_depth) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Failed to prepare root directory: {}", e);
            std::process::exit(1);
        }
    };
    let root_display = root.path().display().to_string();

    let app = routes::create_router(Arc::new(root)).layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let url = format!("http://localhost:{}", addr.port());
    println!();
    println!("  File Manager");
    println!();
    println!("  Root:   {}", root_display);
    println!("  Server: {}", url);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();
    tracing::info!(root = %root_display, addr = %addr, "server started");

    if config.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
