//! Fixed-point computation of FIRST_k, FOLLOW_k and the combined
//! `firstfollow` lookahead relation.

mod engine;

pub use self::engine::PredictEngine;
