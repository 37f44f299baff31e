//! CLI subcommand modules.
//!
//! This module contains the implementations for all bizval CLI subcommands.

pub(crate) mod benchmark;
pub(crate) mod industries;
pub(crate) mod saleability;
pub(crate) mod valuate;
