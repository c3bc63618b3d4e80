// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Dam Engineering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Engineering modules.
//!
//! Performance calculator, overturning safety classification, display
//! rounding, and design-space exploration (sweeps, stability maps, sampling).

pub mod performance;
pub mod rounding;
pub mod safety;
pub mod scanner;
pub mod stability_map;

pub use performance::{compute, compute_detailed, PerformanceBreakdown};
pub use rounding::rounded;
pub use safety::classify;
