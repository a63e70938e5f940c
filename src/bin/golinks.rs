//! golinks admin tool
//!
//! Inspects and maintains a link log from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use golinks::link::{delete_existing, prepare_link};
use golinks::log::LogReplay;
use golinks::{Config, FileStore, Result, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// golinks admin tool
#[derive(Parser, Debug)]
#[command(name = "golinks")]
#[command(about = "Inspect and maintain a golinks link log")]
#[command(version)]
struct Args {
    /// Link log file
    #[arg(short, long)]
    file: PathBuf,

    /// Use fuzzy name matching (case, '-' and '_' insensitive)
    #[arg(long)]
    fuzzy: bool,

    /// fsync after every write instead of batching
    #[arg(long)]
    sync_every_write: bool,

    /// Redirect host used when a link names another entry (`go/<name>`)
    #[arg(long, default_value = "go")]
    host: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the link for a name
    Get {
        /// The name to resolve
        name: String,
    },

    /// Set the link for a name
    Set {
        /// The name to set
        name: String,

        /// An absolute URL, or `go/<name>` of an existing entry; empty deletes
        link: String,
    },

    /// Delete a name that exists
    Del {
        /// The name to delete
        name: String,
    },

    /// List live names, most recently written first
    List,

    /// Write a compacted copy of the log to another file
    Dump {
        /// Destination file (truncated)
        target: PathBuf,
    },

    /// Compact the log in place
    Compact,

    /// Check that every line of the log parses
    Check,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,golinks=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("golinks v{}", golinks::VERSION);

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

/// Run one command; returns the process exit code
fn run(args: Args) -> Result<i32> {
    let Args {
        file,
        fuzzy,
        sync_every_write,
        host,
        command,
    } = args;

    let sync_strategy = if sync_every_write {
        SyncStrategy::EveryWrite
    } else {
        Config::default().sync_strategy
    };

    let builder = Config::builder()
        .path(&file)
        .fuzzy(fuzzy)
        .sync_strategy(sync_strategy);

    match command {
        Commands::Get { name } => with_store(builder.build(), |store| match store.get(&name) {
            Some(link) => {
                println!("{}", link);
                Ok(0)
            }
            None => {
                tracing::warn!("{} not found", name);
                Ok(2)
            }
        }),
        Commands::Set { name, link } if link.is_empty() => {
            with_store(builder.build(), |store| delete(store, &name))
        }
        Commands::Set { name, link } => with_store(builder.build(), |store| {
            let link = prepare_link(store, &host, &link)?;
            store.set(&name, &link)?;
            println!("{} {}", name, link);
            Ok(0)
        }),
        Commands::Del { name } => with_store(builder.build(), |store| delete(store, &name)),
        Commands::List => with_store(builder.build(), |store| {
            store.iterate(|name, link| {
                println!("{} {}", name, link);
                Ok(())
            })?;
            Ok(0)
        }),
        Commands::Dump { target } => with_store(builder.build(), |store| {
            let written = store.dump(&target)?;
            println!("wrote {} records to {}", written, target.display());
            Ok(0)
        }),
        Commands::Compact => with_store(builder.compact_on_open(true).build(), |store| {
            println!("{} live names", store.len());
            Ok(0)
        }),
        Commands::Check => {
            let result = LogReplay::verify(&file)?;
            println!(
                "ok: {} records ({} live, {} tombstones)",
                result.records_replayed, result.live_records, result.tombstones
            );
            Ok(0)
        }
    }
}

/// Delete `name`; exit code 2 when it does not exist
fn delete(store: &FileStore, name: &str) -> Result<i32> {
    if delete_existing(store, name)? {
        Ok(0)
    } else {
        tracing::warn!("{} not found", name);
        Ok(2)
    }
}

/// Open the store, run `f`, and close the store even when `f` found nothing
fn with_store<T>(config: Config, f: impl FnOnce(&FileStore) -> Result<T>) -> Result<T> {
    let store = FileStore::open(config)?;
    let out = f(&store)?;
    store.close()?;
    Ok(out)
}
