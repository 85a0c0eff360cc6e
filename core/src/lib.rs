//! Browser session control and the audit implementations behind the
//! webaudit command line.

pub mod audit;
pub mod session;
