// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Simulation Record
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use chrono::{DateTime, Utc};
use dam_engineering::compute;
use dam_types::{DamError, DamParameters, DamResult, DamResults};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Simulation record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = DamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DamError::InvalidRecord(format!("bad record id '{s}': {e}")))
    }
}

/// A named parameter set owned by a user, with the results it produced.
///
/// Only constructible from parameters, so `results == compute(parameters)`
/// holds for every record built in-process; deserialized records are
/// checked with [`SimulationRecord::verify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    id: RecordId,
    user_id: String,
    name: String,
    created_at: DateTime<Utc>,
    parameters: DamParameters,
    results: DamResults,
}

impl SimulationRecord {
    /// Validate the inputs and compute the paired result set.
    pub fn new(user_id: &str, name: &str, parameters: DamParameters) -> DamResult<Self> {
        check_owner_and_name(user_id, name)?;
        parameters.validate()?;

        Ok(SimulationRecord {
            id: RecordId::new(),
            user_id: user_id.to_string(),
            name: name.trim().to_string(),
            created_at: Utc::now(),
            parameters,
            results: compute(&parameters),
        })
    }

    /// Check a deserialized record against the rules `new` enforces: a
    /// non-blank owner and name, valid parameters, and results exactly equal
    /// to what those parameters compute to.
    pub fn verify(&self) -> DamResult<()> {
        check_owner_and_name(&self.user_id, &self.name)
            .map_err(|e| DamError::InvalidRecord(format!("{}: {e}", self.id)))?;
        self.parameters.validate()?;
        if compute(&self.parameters) != self.results {
            return Err(DamError::RecordMismatch(self.id.to_string()));
        }
        Ok(())
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn parameters(&self) -> &DamParameters {
        &self.parameters
    }

    pub fn results(&self) -> &DamResults {
        &self.results
    }
}

fn check_owner_and_name(user_id: &str, name: &str) -> DamResult<()> {
    if user_id.trim().is_empty() {
        return Err(DamError::InvalidRecord("user id is empty".to_string()));
    }
    if name.trim().is_empty() {
        return Err(DamError::InvalidRecord("name is empty".to_string()));
    }
    Ok(())
}
