// SPDX-License-Identifier: PMPL-1.0-or-later

//! Cross-locale consistency checks.
//!
//! Every locale must carry exactly the reference locale's key set, and each
//! translation must use the same placeholders as the reference template.
//! Duplicate keys never reach this point; bundles reject them on insert.

use crate::error::TranslationError;
use crate::locale::LocaleCode;
use crate::table::LocaleTable;
use anyhow::Result;
use chrono::Utc;
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Key present in the reference locale but not in `locale`.
    MissingKey { locale: LocaleCode, key: String },
    /// Key present in `locale` but not in the reference locale.
    ExtraKey { locale: LocaleCode, key: String },
    PlaceholderMismatch {
        locale: LocaleCode,
        key: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
    EmptyTemplate { locale: LocaleCode, key: String },
}

impl Finding {
    pub fn locale(&self) -> &LocaleCode {
        match self {
            Finding::MissingKey { locale, .. }
            | Finding::ExtraKey { locale, .. }
            | Finding::PlaceholderMismatch { locale, .. }
            | Finding::EmptyTemplate { locale, .. } => locale,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Finding::MissingKey { key, .. }
            | Finding::ExtraKey { key, .. }
            | Finding::PlaceholderMismatch { key, .. }
            | Finding::EmptyTemplate { key, .. } => key,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Finding::MissingKey { .. } => "missing translation".to_string(),
            Finding::ExtraKey { .. } => "not in reference locale".to_string(),
            Finding::PlaceholderMismatch {
                expected, found, ..
            } => format!(
                "placeholders {{{}}} expected, found {{{}}}",
                expected.join(", "),
                found.join(", ")
            ),
            Finding::EmptyTemplate { .. } => "empty template".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: String,
    pub reference: LocaleCode,
    pub locales: Vec<LocaleCode>,
    pub keys_checked: usize,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Compare every registered locale against `reference`.
///
/// Fails only if `reference` is not registered.
pub fn audit(table: &LocaleTable, reference: &LocaleCode) -> Result<AuditReport, TranslationError> {
    let reference_bundle = table.bundle(reference.as_str())?;
    let mut findings = Vec::new();

    for (key, template) in reference_bundle.iter() {
        if template.source().trim().is_empty() {
            findings.push(Finding::EmptyTemplate {
                locale: reference.clone(),
                key: key.to_string(),
            });
        }
    }

    for bundle in table.bundles() {
        let locale = bundle.locale();
        if locale == reference {
            continue;
        }

        for (key, expected) in reference_bundle.iter() {
            let Some(found) = bundle.get(key) else {
                findings.push(Finding::MissingKey {
                    locale: locale.clone(),
                    key: key.to_string(),
                });
                continue;
            };
            if found.source().trim().is_empty() {
                findings.push(Finding::EmptyTemplate {
                    locale: locale.clone(),
                    key: key.to_string(),
                });
            }
            if found.placeholder_set() != expected.placeholder_set() {
                findings.push(Finding::PlaceholderMismatch {
                    locale: locale.clone(),
                    key: key.to_string(),
                    expected: expected.placeholder_set().into_iter().map(String::from).collect(),
                    found: found.placeholder_set().into_iter().map(String::from).collect(),
                });
            }
        }

        for key in bundle.keys().filter(|k| !reference_bundle.contains_key(k)) {
            findings.push(Finding::ExtraKey {
                locale: locale.clone(),
                key: key.to_string(),
            });
        }
    }

    findings.sort_by(|a, b| (a.locale(), a.key()).cmp(&(b.locale(), b.key())).then_with(|| a.cmp(b)));

    Ok(AuditReport {
        generated_at: Utc::now().to_rfc3339(),
        reference: reference.clone(),
        locales: table.locales().cloned().collect(),
        keys_checked: reference_bundle.len(),
        findings,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuditFormat {
    Json,
    Yaml,
}

impl AuditFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AuditFormat::Json => "json",
            AuditFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, report: &AuditReport) -> Result<String> {
        match self {
            AuditFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            AuditFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

pub fn print_report(report: &AuditReport) {
    println!("\n{}", "=== LOCALE PARITY AUDIT ===".bold().cyan());
    println!("  Reference: {}", report.reference);
    let locales: Vec<&str> = report.locales.iter().map(LocaleCode::as_str).collect();
    println!("  Locales: {}", locales.join(", "));
    println!("  Keys checked: {}", report.keys_checked);
    println!();

    if report.is_clean() {
        println!("  {}", "No findings: all locales are in parity".green());
        return;
    }

    println!("  Findings: {}", report.findings.len().to_string().red());
    for (i, finding) in report.findings.iter().enumerate() {
        let tag = match finding {
            Finding::MissingKey { .. } | Finding::PlaceholderMismatch { .. } => "ERROR".red(),
            Finding::ExtraKey { .. } | Finding::EmptyTemplate { .. } => "WARN".yellow(),
        };
        println!(
            "    {}. [{}] {} {} - {}",
            i + 1,
            tag,
            finding.locale(),
            finding.key().bold(),
            finding.describe()
        );
    }
}
