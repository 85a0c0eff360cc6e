//! # Audit Abstraction
//!
//! The unified interface for the three extraction routines. Each audit
//! borrows an already-launched [`BrowserSession`], performs its page work,
//! and returns a serializable report. Session teardown stays with the
//! caller so the browser is released on every exit path.

use async_trait::async_trait;
use serde::Serialize;

use crate::session::BrowserSession;

pub mod accessibility;
pub mod headers;
pub mod responsive;

#[async_trait]
pub trait Audit {
    type Report: Serialize;

    /// Runs the audit against a running browser session.
    async fn run(&self, session: &BrowserSession) -> anyhow::Result<Self::Report>;
}
