//! wfclink CLI
//!
//! Command-line access to the three queries.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use wfclink::{Config, WfcClient};

/// wfclink CLI
#[derive(Parser, Debug)]
#[command(name = "wfclink")]
#[command(about = "Client for legacy Wi-Fi-era game discovery services")]
#[command(version)]
struct Args {
    /// Backend service domain (e.g. an alternative WFC reimplementation)
    #[arg(short, long)]
    domain: String,

    /// Read timeout in milliseconds (0 = block indefinitely)
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate profile ids into nicknames
    Nicknames {
        /// The game name, e.g. mariokartwii
        game: String,

        /// Profile id of the requester
        requester: u32,

        /// Profile ids to translate (at least one)
        #[arg(required = true)]
        profile_ids: Vec<u32>,
    },

    /// Check UDP availability status for a game's service
    Available {
        /// The game name
        game: String,
    },

    /// Derive the master-server hostname for a game
    Master {
        /// The game name
        game: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wfclink=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder(&args.domain)
        .read_timeout_ms(args.timeout_ms)
        .build();
    let client = WfcClient::new(config);

    match args.command {
        Commands::Nicknames {
            game,
            requester,
            profile_ids,
        } => match client.nicknames(&game, requester, &profile_ids) {
            Ok(pairs) => {
                for pair in pairs {
                    println!("{:>12} = {}", pair.key, pair.value.as_deref().unwrap_or(""));
                }
            }
            Err(e) => {
                tracing::error!("nickname query failed: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Available { game } => match client.availability(&game) {
            Ok(reply) => {
                println!("raw:         {}", reply.hex());
                println!("available:   {}", reply.is_available());
                println!("down:        {}", reply.is_down());
                println!("maintenance: {}", reply.is_maintenance());
            }
            Err(e) => {
                tracing::error!("availability check failed: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Master { game } => {
            println!("{}", client.master_host(&game));
        }
    }
}
