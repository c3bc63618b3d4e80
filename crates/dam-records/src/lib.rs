// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Dam Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simulation records and their stores.
//!
//! A stored record always pairs one parameter set with the result set
//! computed from it.

pub mod record;
pub mod store;

pub use record::{RecordId, SimulationRecord};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
