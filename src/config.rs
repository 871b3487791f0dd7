//! Server configuration read from the command line and the environment.

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// The environment variable holding the secret used to encrypt flash cookies.
pub const SESSION_SECRET_VAR: &str = "SESSION_SECRET";

/// The secret used when [SESSION_SECRET_VAR] is not set.
///
/// This value is public, so cookies encrypted with it offer no protection.
pub const DEFAULT_SESSION_SECRET: &str = "default-secret-key-change-in-production";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;

/// The web server for budget_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The IP address to listen on.
    #[arg(long, default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// File path to a SQLite database for storing transactions.
    ///
    /// Transactions are kept in memory and lost on restart when this is not set.
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

impl Args {
    /// The address the server should bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read the session secret from [SESSION_SECRET_VAR], falling back to
/// [DEFAULT_SESSION_SECRET] with a warning when it is unset or empty.
pub fn session_secret_from_env() -> String {
    resolve_session_secret(env::var(SESSION_SECRET_VAR).ok())
}

fn resolve_session_secret(value: Option<String>) -> String {
    match value {
        Some(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!(
                "{SESSION_SECRET_VAR} is not set, using an insecure default session secret"
            );
            DEFAULT_SESSION_SECRET.to_owned()
        }
    }
}
