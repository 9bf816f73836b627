use std::io::Write;
use std::process::{Command, Stdio};

use super::Formatter;
use crate::error;
use crate::Result;

const EDITION: &str = "2021";

/// Checks the text parses as a Rust file, then pipes it through `rustfmt`.
/// Comments survive; only layout changes.
pub struct RustFormatter;

fn rustfmt(source: &str) -> Result<std::process::Output> {
    let mut cmd = Command::new("rustfmt")
        .arg("--edition")
        .arg(EDITION)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| error::file_error(format!("rustfmt: {}", e)))?;

    {
        let stdin = cmd
            .stdin
            .as_mut()
            .ok_or_else(|| error::file_error("rustfmt: stdin unavailable"))?;
        stdin
            .write_all(source.as_bytes())
            .map_err(|e| error::file_error(format!("rustfmt: {}", e)))?;
    }
    drop(cmd.stdin.take());

    cmd.wait_with_output()
        .map_err(|e| error::file_error(format!("rustfmt: {}", e)))
}

impl Formatter for RustFormatter {
    fn format(&self, name: &str, source: &str) -> Result<String> {
        syn::parse_file(source).map_err(|e| error::format_syntax(name, e))?;

        debug!("Running rustfmt on {}", name);

        let output = rustfmt(source)?;

        if !output.status.success() {
            return Err(error::format_syntax(
                name,
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        String::from_utf8(output.stdout).map_err(|e| error::format_syntax(name, e))
    }
}
