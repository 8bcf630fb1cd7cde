// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering bundles back out for the dashboard build.

use crate::bundle::LocaleBundle;
use anyhow::Result;
use clap::ValueEnum;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    /// `export default { ... };` module as consumed by the dashboard.
    Js,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Js => "js",
        }
    }
}

pub fn render(bundle: &LocaleBundle, format: ExportFormat) -> Result<String> {
    let map: BTreeMap<&str, &str> = bundle.iter().map(|(k, t)| (k, t.source())).collect();
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&map)?),
        ExportFormat::Yaml => Ok(serde_yaml::to_string(&map)?),
        ExportFormat::Js => Ok(render_js(&map)),
    }
}

fn js_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

fn render_js(map: &BTreeMap<&str, &str>) -> String {
    let mut lines = Vec::with_capacity(map.len() + 2);
    lines.push("export default {".to_string());
    for (key, value) in map {
        lines.push(format!("  {}: {},", js_quote(key), js_quote(value)));
    }
    lines.push("};".to_string());
    lines.join("\n") + "\n"
}

/// SHA-256 over the sorted entries, hex encoded. Stable across formats and
/// file order, so it can key a client-side cache.
pub fn fingerprint(bundle: &LocaleBundle) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bundle.locale().as_str().as_bytes());
    hasher.update([0u8]);
    for (key, template) in bundle.iter() {
        hasher.update(key.as_bytes());
        hasher.update([0u8]);
        hasher.update(template.source().as_bytes());
        hasher.update([b'\n']);
    }
    hex::encode(hasher.finalize())
}
