//! Scoring — per-document experience scores and whole-corpus ranking.

pub mod experience;
pub mod ranking;

pub use ranking::{rank_records, BuiltRecord};
