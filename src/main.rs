use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csvgrid::{
    config::Config,
    fetch::{fetch_text, Base},
    page::scan_page,
    parse::build_table,
    pipeline,
    render::Format,
    report::Report,
};
use reqwest::Client;
use std::{fs, path::PathBuf, sync::Arc};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Render CSV files referenced from an HTML page as grids.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a page for marked elements and render a grid for each one
    Render {
        /// HTML page to scan
        #[arg(long)]
        page: PathBuf,

        /// Directory or http(s) URL that resource names resolve against
        /// (defaults to the page's directory)
        #[arg(long)]
        base: Option<String>,

        /// Report file (overrides the config file)
        #[arg(long)]
        output: Option<PathBuf>,

        /// YAML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// html or json
        #[arg(long, default_value = "html")]
        format: Format,
    },
    /// Fetch one resource and print its header and rows as JSON
    Parse {
        resource: String,

        #[arg(long, default_value = ".")]
        base: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = Client::new();

    match args.command {
        Command::Render {
            page,
            base,
            output,
            config,
            format,
        } => {
            // ─── 2) configuration ─────────────────────────────────────
            let config = Config::load_or_default(config.as_deref())?;
            let output = output.unwrap_or_else(|| config.output.clone());
            let base = match base {
                Some(raw) => Base::parse(&raw)?,
                None => Base::beside(&page),
            };
            info!(page = %page.display(), ?base, output = %output.display(), "startup");

            // ─── 3) discover containers ───────────────────────────────
            let html = fs::read_to_string(&page)
                .with_context(|| format!("reading page {}", page.display()))?;
            let containers = scan_page(&html, &config.marker_attribute)?;

            // ─── 4) fan out one job per container ─────────────────────
            let outcome = pipeline::run(
                &client,
                Arc::new(base),
                format.renderer(config.row_height),
                containers,
            )
            .await;

            // ─── 5) write report ──────────────────────────────────────
            let mut report = Report::new(&config, format);
            report.insert(outcome.rendered);
            report.save(&output)?;
            info!("all done");
        }
        Command::Parse { resource, base } => {
            let base = Base::parse(&base)?;
            let text = fetch_text(&client, &base, &resource).await?;
            let table = build_table(&text);
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }

    Ok(())
}
