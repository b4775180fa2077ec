//! Output Rendering
//!
//! Status lines for humans (styled with crossterm when the stream is a
//! terminal) and JSON documents for scripts.

use std::fmt::Display;

use crossterm::style::Stylize;
use is_terminal::IsTerminal;
use serde::Serialize;
use serde_json::json;

use crate::application::{CheckReport, GenerateResult};
use crate::config::{ColorMode, ConfigWarning};

/// Styles text for one output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn stdout(mode: ColorMode) -> Self {
        Self::detect(mode, std::io::stdout().is_terminal())
    }

    pub fn stderr(mode: ColorMode) -> Self {
        Self::detect(mode, std::io::stderr().is_terminal())
    }

    fn detect(mode: ColorMode, is_terminal: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(mode.enabled(is_terminal, no_color))
    }

    pub fn success(&self, text: impl Display) -> String {
        self.paint(text, |s| s.green().to_string())
    }

    pub fn error(&self, text: impl Display) -> String {
        self.paint(text, |s| s.red().to_string())
    }

    pub fn warning(&self, text: impl Display) -> String {
        self.paint(text, |s| s.yellow().to_string())
    }

    pub fn highlight(&self, text: impl Display) -> String {
        self.paint(text, |s| s.yellow().bold().to_string())
    }

    fn paint(&self, text: impl Display, style: impl Fn(String) -> String) -> String {
        let text = text.to_string();
        if self.color {
            style(text)
        } else {
            text
        }
    }
}

/// The success line printed after `generate`
pub fn generate_summary(console: &Console, result: &GenerateResult) -> String {
    let mut line = console.success(format!(
        "Java classes generated successfully: {}",
        console.highlight(result.output_dir.display())
    ));
    if !result.unchanged.is_empty() {
        line.push_str(&format!(
            " ({} written, {} unchanged)",
            result.written.len(),
            result.unchanged.len()
        ));
    }
    line
}

pub fn check_summary(console: &Console, report: &CheckReport) -> String {
    console.success(format!(
        "Model is valid: {} entities, {} datatypes in {} file(s)",
        report.entities,
        report.datatypes,
        report.files
    ))
}

pub fn config_warning(console: &Console, warning: &ConfigWarning) -> String {
    format!("{} {}", console.warning("warning:"), warning)
}

pub fn error_line(console: &Console, err: &anyhow::Error) -> String {
    console.error(format!("error: {:#}", err))
}

/// `{"event": ..., ...payload}` as pretty JSON
pub fn json_event<T: Serialize>(event: &str, payload: &T) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(payload)?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("event".to_string(), json!(event));
        }
        None => value = json!({ "event": event, "data": value }),
    }
    serde_json::to_string_pretty(&value)
}

pub fn json_error(err: &anyhow::Error) -> String {
    json!({
        "event": "error",
        "message": format!("{:#}", err),
    })
    .to_string()
}
