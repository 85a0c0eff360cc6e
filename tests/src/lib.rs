//! Workspace-level integration tests for the webaudit binary.
//!
//! Everything here exercises the validation surface and report contracts
//! without a browser, so the suite runs in environments without Chromium.
