//! Print what an amoCRM list URL filters on.
//!
//! ```sh
//! parse-list-url 'https://example.amocrm.ru/leads/list/?filter[name]=Test&page=2'
//! parse-list-url --entity contacts 'https://example.amocrm.ru/contacts/list/'
//! ```
//!
//! Set `RUST_LOG=debug` to see parser and CLI logs on stderr.

use amocrm_api::{Entity, EntityFilter};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "parse-list-url")]
#[command(about = "Parse an amoCRM web UI list URL into API filter parameters", long_about = None)]
struct Cli {
    /// List URL copied from the browser.
    url: String,

    /// Require the URL to be the list page of this entity and convert page/limit to integers.
    #[arg(long, value_name = "NAME")]
    entity: Option<Entity>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("parse-list-url error: {:#}", err);
            std::process::exit(1);
        }
    }
}

#[instrument(skip(cli), fields(entity = ?cli.entity))]
fn run(cli: &Cli) -> Result<String> {
    let value = match cli.entity {
        Some(entity) => {
            let filter = EntityFilter::for_entity(&cli.url, entity)
                .with_context(|| format!("not a valid {} list URL", entity))?;
            serde_json::json!({
                "entity": filter.entity(),
                "page": filter.page(),
                "limit": filter.limit(),
                "filters": filter.as_filter_map(),
            })
        }
        None => {
            let descriptor = amocrm_api::filters::parse(&cli.url).context("failed to parse URL")?;
            serde_json::to_value(&descriptor)?
        }
    };

    debug!(
        filters = value["filters"].as_object().map_or(0, |filters| filters.len()),
        "List URL parsed"
    );

    Ok(serde_json::to_string_pretty(&value)?)
}
