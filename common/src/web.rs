//! Validated CLI input types shared by the audit tools.
//!
//! Every type here parses via [`FromStr`](std::str::FromStr), so clap
//! rejects malformed input before any browser work begins.

pub mod device;
pub mod target;
pub mod viewport;
