//! CLI for protolink - follow or publish links through the protocol registry

use clap::{Parser, Subcommand};
use protolink::{
    Placement, ProtocolConfig, ProtocolRegistry, RecordingNavigator, Result, SystemNavigator,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with additional protocol definitions
    #[arg(long, global = true)]
    protocols: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the publish-time form of each link
    Resolve {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Follow a link with its protocol's browse handler
    Browse {
        url: String,

        /// Ask the host to show the target in another window
        #[arg(long)]
        other_window: bool,

        /// Print what would be opened instead of opening it
        #[arg(long)]
        dry_run: bool,
    },
    /// List registered protocol patterns in match order
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut registry = ProtocolRegistry::with_defaults()?;
    if let Some(path) = &args.protocols {
        ProtocolConfig::load(path)?.apply(&mut registry)?;
    }

    match args.command {
        Commands::Resolve { urls } => {
            for url in urls {
                match registry.resolve(&url) {
                    Some(resolved) => println!("{}", resolved),
                    None => println!("(omitted)"),
                }
            }
        }
        Commands::Browse {
            url,
            other_window,
            dry_run,
        } => {
            let placement = if other_window {
                Placement::OtherWindow
            } else {
                Placement::SameWindow
            };
            if dry_run {
                let mut navigator = RecordingNavigator::new();
                registry.browse(&url, placement, &mut navigator)?;
                if navigator.visits.is_empty() {
                    println!("(no handler)");
                }
                for visit in &navigator.visits {
                    println!("{}", visit);
                }
            } else {
                registry.browse(&url, placement, &mut SystemNavigator)?;
            }
        }
        Commands::List => {
            for descriptor in registry.descriptors() {
                println!("{}", descriptor.pattern());
            }
        }
    }
    Ok(())
}
