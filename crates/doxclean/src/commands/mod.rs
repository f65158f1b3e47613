//! CLI command implementations.

pub(crate) mod clean;

pub(crate) use clean::CleanArgs;
