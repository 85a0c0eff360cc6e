use serde::Serialize;
use serde_json::json;

/// Writes the success report as pretty-printed JSON, the only bytes this
/// process puts on stdout.
pub fn report<T: Serialize>(report: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a structured diagnostic to stderr for a failed invocation.
pub fn failure(error: &anyhow::Error) {
    let diagnostic = json!({
        "error": error.to_string(),
        "stack": format!("{error:?}"),
    });
    eprintln!("{diagnostic}");
}
