//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`interactive`]: Terminal UI for rewriting problems
//! - [`one_shot`]: Rewrite a single problem and print the record
//! - [`service_status`]: Probe the rewrite service and print its status
//!
//! Provider construction is shared through [`provider`]; output formatting
//! utilities are in [`output`].

pub mod interactive;
pub mod one_shot;
pub mod output;
pub mod provider;
pub mod service_status;
