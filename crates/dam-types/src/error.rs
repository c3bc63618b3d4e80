// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DamError {
    #[error("Invalid parameter {field} = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid simulation record: {0}")]
    InvalidRecord(String),

    #[error("Simulation record not found: {0}")]
    RecordNotFound(String),

    #[error("Simulation record {id} is not owned by user '{user_id}'")]
    NotOwner { id: String, user_id: String },

    #[error("Simulation record {0} results do not match its parameters")]
    RecordMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type DamResult<T> = Result<T, DamError>;
