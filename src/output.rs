//! Rendering of the interface report
//!
//! Three formats are supported: a line-oriented `value` listing, compact
//! `json` on a single line with `", "` and `": "` separators, and
//! `json-indent` pretty-printed with two spaces.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::ser::Formatter;
use std::fmt;
use std::io;
use std::str::FromStr;

use crate::constants::{error_messages, formats};
use crate::error::{ConfigError, MapError, Result};
use crate::interface::NicStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Value,
    #[default]
    Json,
    JsonIndent,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            formats::VALUE => Ok(OutputFormat::Value),
            formats::JSON => Ok(OutputFormat::Json),
            formats::JSON_INDENT => Ok(OutputFormat::JsonIndent),
            _ => Err(ConfigError::InvalidValue {
                field: "format".to_string(),
                value: s.to_string(),
                reason: error_messages::INVALID_FORMAT.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Value => formats::VALUE,
            OutputFormat::Json => formats::JSON,
            OutputFormat::JsonIndent => formats::JSON_INDENT,
        };
        f.write_str(name)
    }
}

// Config files use the same spelling as the command line
impl Serialize for OutputFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Full listing plus the candidate subset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NicReport {
    pub nics: Vec<NicStatus>,
    pub candidates: Vec<String>,
}

impl NicReport {
    pub fn new(nics: Vec<NicStatus>, candidates: Vec<String>) -> Self {
        Self { nics, candidates }
    }
}

/// Render the report in the requested format. The result carries no
/// trailing newline.
pub fn render(report: &NicReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Value => Ok(render_value(report)),
        OutputFormat::Json => to_spaced_json(report),
        OutputFormat::JsonIndent => serde_json::to_string_pretty(report).map_output_error(),
    }
}

/// Single-line JSON with a space after every `,` and `:`
struct SpacedCompact;

impl Formatter for SpacedCompact {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn to_spaced_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedCompact);
    value.serialize(&mut serializer).map_output_error()?;
    String::from_utf8(buf).map_output_error()
}

fn title_bool(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

fn render_value(report: &NicReport) -> String {
    let mut lines = vec!["All nics:".to_string()];
    for nic in &report.nics {
        lines.push(format!(
            "{} , configured: {} up: {} connected: {}",
            nic.name,
            title_bool(nic.configured),
            title_bool(nic.up),
            title_bool(nic.connected)
        ));
    }

    if !report.candidates.is_empty() {
        lines.push("Candidate nics:".to_string());
        lines.extend(report.candidates.iter().cloned());
    }

    lines.join("\n")
}
