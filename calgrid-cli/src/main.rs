use anyhow::{Result, bail};
use calgrid::{
    associate::Extraction,
    config::SinkConfig,
    data::AssociatedEvent,
    error::ExtractError,
    extract::TextExtractor,
    extract_events,
    sink::{Sink, WebhookSink},
    snapshot::PageSnapshot,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use cli_table::{WithTitle, print_stdout};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
struct Args {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, clap::Parser)]
enum Cmd {
    /// Extract events from a captured calendar page and print them
    Extract {
        /// JSON snapshot of the rendered calendar page
        snapshot: Utf8PathBuf,
        /// Print the JSON payload instead of a table
        #[clap(long)]
        json: bool,
    },
    /// Extract events and deliver them to `WEBHOOK_URL`
    Push {
        /// JSON snapshot of the rendered calendar page
        snapshot: Utf8PathBuf,
        /// Deliver even if no events were found
        #[clap(long)]
        allow_empty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    // we load env vars before setting up logging, so a `.env` can set `RUST_LOG`
    dotenv::dotenv().ok();
    // stdout is reserved for the table or JSON payload
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = match args.cmd {
        Cmd::Extract { snapshot, json } => extract(snapshot, json),
        Cmd::Push {
            snapshot,
            allow_empty,
        } => push(snapshot, allow_empty).await,
    } {
        tracing::error!("{e:?}");
        std::process::exit(1);
    }
    Ok(())
}

fn load_events(snapshot: &Utf8Path) -> Result<Extraction> {
    let page = PageSnapshot::from_file(snapshot)?;
    match extract_events(&page, &TextExtractor::default()) {
        Ok(extraction) => {
            tracing::info!("{} events extracted", extraction.events.len());
            Ok(extraction)
        }
        Err(ExtractError::GeometryUnavailable) => {
            bail!("no day geometry found in `{snapshot}`, was the calendar grid rendered?")
        }
        Err(e) => Err(e.into()),
    }
}

fn extract(snapshot: Utf8PathBuf, json: bool) -> Result<()> {
    let extraction = load_events(&snapshot)?;
    if json {
        println!("{}", payload(&extraction.events)?);
    } else {
        print_stdout(extraction.events.with_title())?;
    }
    Ok(())
}

async fn push(snapshot: Utf8PathBuf, allow_empty: bool) -> Result<()> {
    let config = SinkConfig::from_env()?;
    let extraction = load_events(&snapshot)?;
    println!("{}", payload(&extraction.events)?);

    if extraction.events.is_empty() && !allow_empty {
        tracing::warn!("no events were extracted, skipping delivery");
        return Ok(());
    }
    let Some(sink) = WebhookSink::from_config(&config)? else {
        tracing::warn!("`WEBHOOK_URL` is not set, skipping delivery");
        return Ok(());
    };
    let delivery = sink.deliver(&extraction.events).await?;
    tracing::info!("delivered to {}, status {}", sink.url(), delivery.status);
    tracing::info!("webhook response: {}", delivery.body);
    Ok(())
}

/// The JSON document written to stdout, exactly what the sink receives.
fn payload(events: &[AssociatedEvent]) -> Result<String> {
    Ok(serde_json::to_string_pretty(events)?)
}
