//! # commons_testkit
//!
//! Test utilities for `commons_model`: ready-made record fixtures and
//! proptest generators for exercising the serialization engine's
//! skip/limit behavior across arbitrary field selections.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
