//! session-blind - Session ID conversion and blinding from the command line
//!
//! # Usage
//!
//! ```bash
//! # Edwards form of a Session ID
//! session-blind to-ed25519 05d871fc80ca007eed9b2f4df72853e2a2d5465a92fcb1889fb5c84aa2833b3b40
//!
//! # Blinded IDs for a community server
//! session-blind blind15 <SESSION_ID> <SERVER_PK> --all
//! session-blind blind25 <SESSION_ID> <SERVER_PK>
//!
//! # Recover a Session ID from a 15-blinded ID
//! session-blind unblind15 <BLINDED_ID> <SERVER_PK>
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use session_blinding::{
    blind_15, blind_25, matches_blinded, unblind_15, BlindedId, Ed25519Pk, Identifier, ServerPk,
    SessionId,
};
use tracing_subscriber::EnvFilter;

/// Session ID conversion, blinding and swarm-space tool
#[derive(Parser, Debug)]
#[command(name = "session-blind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a Session ID (05…) to its Ed25519 public key
    ToEd25519 {
        /// Session ID, with or without the 05 prefix
        session_id: String,
    },

    /// Convert an Ed25519 public key to a Session ID
    ToSession {
        /// Ed25519 public key (64 hex chars)
        ed25519_pk: String,
    },

    /// Legacy (15) blinded ID for a server
    Blind15 {
        session_id: String,
        server_pk: String,
        /// Print both sign candidates instead of the canonical one
        #[arg(long, default_value_t = false)]
        all: bool,
    },

    /// Session-bound (25) blinded ID for a server
    Blind25 { session_id: String, server_pk: String },

    /// Recover the Session ID behind a 15 blinded ID
    Unblind15 {
        /// Blinded ID, with or without the 15 prefix
        blinded_id: String,
        server_pk: String,
    },

    /// Check whether a blinded ID (15… or 25…) belongs to a Session ID
    Matches {
        session_id: String,
        blinded_id: String,
        server_pk: String,
    },

    /// Swarm-space value of a Session ID
    SwarmSpace { session_id: String },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "session_blinding=debug,session_blind=debug" } else { "session_blinding=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_session_id(s: &str) -> Result<SessionId> {
    let id: Identifier = s.parse().with_context(|| format!("malformed session id {s:?}"))?;
    Ok(id.session_id()?)
}

fn parse_server_pk(s: &str) -> Result<ServerPk> {
    s.parse::<ServerPk>().with_context(|| format!("malformed server public key {s:?}"))
}

fn parse_blinded(s: &str) -> Result<BlindedId> {
    if s.len() == 64 {
        return s.parse::<BlindedId>().with_context(|| format!("malformed blinded id {s:?}"));
    }
    let id: Identifier = s.parse().with_context(|| format!("malformed blinded id {s:?}"))?;
    Ok(id.legacy_blinded_id()?)
}

/// Runs one command. `Ok(false)` means the command completed with a negative
/// answer (no match).
fn run(command: &Commands) -> Result<bool> {
    match command {
        Commands::ToEd25519 { session_id } => {
            let pk = parse_session_id(session_id)?.to_ed25519()?;
            println!("{pk}");
        },
        Commands::ToSession { ed25519_pk } => {
            let pk: Ed25519Pk = ed25519_pk
                .parse()
                .with_context(|| format!("malformed ed25519 public key {ed25519_pk:?}"))?;
            println!("{}", Identifier::session(pk.to_session_id()?));
        },
        Commands::Blind15 { session_id, server_pk, all } => {
            let candidates = blind_15(&parse_session_id(session_id)?, &parse_server_pk(server_pk)?)?;
            if *all {
                for candidate in candidates.to_array() {
                    println!("{}", Identifier::blinded_15(candidate));
                }
            } else {
                println!("{}", Identifier::blinded_15(candidates.canonical()));
            }
        },
        Commands::Blind25 { session_id, server_pk } => {
            let blinded = blind_25(&parse_session_id(session_id)?, &parse_server_pk(server_pk)?)?;
            println!("{}", Identifier::blinded_25(blinded));
        },
        Commands::Unblind15 { blinded_id, server_pk } => {
            let sid = unblind_15(&parse_blinded(blinded_id)?, &parse_server_pk(server_pk)?)?;
            println!("{}", Identifier::session(sid));
        },
        Commands::Matches { session_id, blinded_id, server_pk } => {
            let blinded: Identifier = blinded_id
                .parse()
                .with_context(|| format!("malformed blinded id {blinded_id:?}"))?;
            let matched =
                matches_blinded(&parse_session_id(session_id)?, &blinded, &parse_server_pk(server_pk)?)?;
            println!("{matched}");
            return Ok(matched);
        },
        Commands::SwarmSpace { session_id } => {
            println!("{:016x}", parse_session_id(session_id)?.swarm_space());
        },
    }

    Ok(true)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("session-blind v{}", session_blinding::VERSION);

    Ok(if run(&cli.command)? { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
