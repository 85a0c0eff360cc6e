//! Argument-validation behavior of the webaudit binary.
//!
//! All of these invocations must fail before any browser work begins:
//! non-zero exit, diagnostic on stderr, nothing on stdout.

use assert_cmd::Command;
use predicates::str::contains;

fn webaudit() -> Command {
    Command::cargo_bin("webaudit").unwrap()
}

#[test]
fn axe_rejects_url_without_scheme() {
    webaudit()
        .args(["axe", "example.com"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("http://"));
}

#[test]
fn headers_rejects_url_without_scheme() {
    webaudit()
        .args(["headers", "example.com"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("http://"));
}

#[test]
fn responsive_rejects_url_without_scheme() {
    webaudit()
        .args(["responsive", "example.com", "360x640"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("http://"));
}

#[test]
fn url_scheme_check_is_case_sensitive() {
    webaudit()
        .args(["headers", "HTTPS://example.com"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn responsive_requires_at_least_one_viewport() {
    webaudit()
        .args(["responsive", "https://example.com"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("required"));
}

#[test]
fn responsive_rejects_a_malformed_viewport_anywhere() {
    // A bad entry rejects the whole invocation; no viewport is processed.
    webaudit()
        .args(["responsive", "https://example.com", "360x640", "800x"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("invalid viewport format"));
}

#[test]
fn responsive_rejects_zero_dimensions() {
    webaudit()
        .args(["responsive", "https://example.com", "0x640"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn axe_rejects_unknown_device_profile() {
    webaudit()
        .args(["axe", "https://example.com", "tablet"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("device"));
}

#[test]
fn missing_url_is_a_usage_error() {
    for tool in ["axe", "responsive", "headers"] {
        webaudit().arg(tool).assert().failure().stdout("");
    }
}

#[test]
fn help_lists_the_three_tools() {
    webaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("axe"))
        .stdout(contains("responsive"))
        .stdout(contains("headers"));
}
