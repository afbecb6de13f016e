//! Rule-Based Fallback System
//!
//! Provides a heuristic price estimate when the trained model artifact is
//! unavailable. Estimates are rough and callers must flag them as such.

mod rules;

pub use rules::{FallbackRules, HeuristicPriceModel};
