//! Reframe library crate for rewriting math word problems in a chosen theme.
//!
//! The library provides the rewrite client (a live HTTP provider and a
//! simulated fixture provider), retry theme selection, clipboard access,
//! layered configuration, and the interactive terminal UI. The binary wires
//! these together into service status, one-shot, and interactive modes.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod rewrite;
pub mod telemetry;
pub mod tui;

pub use config::{OperationMode, ProviderKind, ReframeConfig};
pub use error::RewriteError;
pub use rewrite::{
    FixtureRewriteProvider, HttpRewriteProvider, RetryPolicy, RewriteProvider, RewriteRequest,
    RewriteResult, fetch_rewritten_problem,
};
