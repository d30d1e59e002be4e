//! Server configuration, read from the environment once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REGIONS_PATH: &str = "data/regions_and_cities.csv";
const DEFAULT_PAYOFFS_PATH: &str = "data/payoffs.json";

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Region/city chart CSV (`REGIONS_PATH`).
    pub regions_path: PathBuf,
    /// Payoff matrix JSON (`PAYOFFS_PATH`).
    pub payoffs_path: PathBuf,
    /// Directory served under `/static`, if any (`STATIC_DIR`).
    pub static_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible rolls, if any (`RNG_SEED`).
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `RNG_SEED` does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `RNG_SEED` does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let rng_seed: Option<u64> = var("RNG_SEED")
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|e| AppError::Config(format!("RNG_SEED must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            regions_path: var("REGIONS_PATH")
                .map_or_else(|| DEFAULT_REGIONS_PATH.into(), PathBuf::from),
            payoffs_path: var("PAYOFFS_PATH")
                .map_or_else(|| DEFAULT_PAYOFFS_PATH.into(), PathBuf::from),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            rng_seed,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
