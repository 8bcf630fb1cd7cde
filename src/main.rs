// SPDX-License-Identifier: PMPL-1.0-or-later

//! operator-locales: inspect, format, audit and export the operator
//! dashboard's locale tables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use operator_locales::audit::{self, AuditFormat};
use operator_locales::export::{self, ExportFormat};
use operator_locales::logging;
use operator_locales::{Config, LocaleCode, LocaleTable, MessageArg};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "operator-locales")]
#[command(version)]
#[command(about = "Locale tables for the operator dashboard")]
#[command(long_about = None)]
struct Cli {
    /// Config file (JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Load locales from this directory instead of the built-in catalogs
    #[arg(short, long, global = true)]
    resources: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the template registered for a key
    Resolve {
        #[arg(value_name = "LOCALE")]
        locale: String,
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Resolve a key and substitute placeholders
    Format {
        #[arg(value_name = "LOCALE")]
        locale: String,
        #[arg(value_name = "KEY")]
        key: String,
        /// Placeholder value as name=value (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<MessageArg>,
    },

    /// List registered locales
    Locales,

    /// List keys of a locale
    Keys {
        /// Locale to list (default locale when omitted)
        #[arg(value_name = "LOCALE")]
        locale: Option<String>,
        /// Only keys starting with this prefix
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Check key and placeholder parity across locales
    Audit {
        /// Reference locale (default locale when omitted)
        #[arg(long)]
        reference: Option<String>,
        /// Machine-readable output instead of the summary
        #[arg(short, long, value_enum)]
        format: Option<AuditFormat>,
        /// Write the report to a file, or into a directory as locale-audit.<ext>
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a locale bundle for the dashboard build
    Export {
        #[arg(value_name = "LOCALE")]
        locale: String,
        #[arg(short, long, value_enum, default_value = "js")]
        format: ExportFormat,
        /// Write to a file, or into a directory as <locale>.<ext>
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_param(raw: &str) -> Result<MessageArg, String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok(MessageArg::new(name.trim(), value)),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

/// `path` itself, or `<path>/<stem>.<extension>` when `path` is a directory.
fn output_path(path: PathBuf, stem: &str, extension: &str) -> PathBuf {
    if path.is_dir() {
        path.join(format!("{}.{}", stem, extension))
    } else {
        path
    }
}

fn load_table(cli: &Cli) -> Result<LocaleTable> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env(),
    };
    if let Some(dir) = &cli.resources {
        config.resources_dir = Some(dir.clone());
    }
    config.build_table().context("building locale table")
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;
    let table = load_table(&cli)?;

    match cli.command {
        Commands::Resolve { locale, key } => {
            println!("{}", table.resolve(&locale, &key)?);
        }

        Commands::Format {
            locale,
            key,
            params,
        } => {
            println!("{}", table.format(&locale, &key, &params)?);
        }

        Commands::Locales => {
            for locale in table.locales() {
                let bundle = table.bundle(locale.as_str())?;
                let marker = if locale == table.default_locale() {
                    " (default)".green().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {:8} {:10} {} keys{}",
                    locale.to_string().bold(),
                    locale.native_name(),
                    bundle.len(),
                    marker
                );
            }
        }

        Commands::Keys { locale, prefix } => {
            let locale = locale.unwrap_or_else(|| table.default_locale().to_string());
            let prefix = prefix.unwrap_or_default();
            for key in table.keys(&locale)?.filter(|k| k.starts_with(&prefix)) {
                println!("{}", key);
            }
        }

        Commands::Audit {
            reference,
            format,
            output,
        } => {
            let reference = match reference {
                Some(raw) => LocaleCode::parse(&raw)?,
                None => table.default_locale().clone(),
            };
            let report = audit::audit(&table, &reference)?;

            if format.is_none() && output.is_none() {
                audit::print_report(&report);
            } else {
                let format = format.unwrap_or(AuditFormat::Json);
                let content = format.serialize(&report)?;
                match output {
                    Some(path) => {
                        let path = output_path(path, "locale-audit", format.extension());
                        std::fs::write(&path, content)
                            .with_context(|| format!("writing {}", path.display()))?;
                        println!("Audit report saved to: {}", path.display());
                    }
                    None => println!("{}", content),
                }
            }

            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Export {
            locale,
            format,
            output,
        } => {
            let bundle = table.bundle(&locale)?;
            let content = export::render(bundle, format)?;
            match output {
                Some(path) => {
                    let path = output_path(path, bundle.locale().as_str(), format.extension());
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!(
                        "Exported {} ({} keys, sha256 {}) to: {}",
                        bundle.locale(),
                        bundle.len(),
                        export::fingerprint(bundle),
                        path.display()
                    );
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_split_on_first_equals() {
        let arg = parse_param("name=a=b").unwrap();
        assert_eq!(arg, MessageArg::new("name", "a=b"));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn format_collects_repeated_params() {
        let cli = Cli::try_parse_from([
            "operator-locales",
            "format",
            "en-US",
            "app.operator.agent.create.success",
            "-p",
            "name=foo",
            "--param",
            "extra=1",
        ])
        .unwrap();
        match cli.command {
            Commands::Format { params, .. } => assert_eq!(params.len(), 2),
            _ => panic!("expected format command"),
        }
    }

    #[test]
    fn output_into_directory_uses_format_extension() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            output_path(dir.path().to_path_buf(), "zh-CN", ExportFormat::Js.extension()),
            dir.path().join("zh-CN.js")
        );
        assert_eq!(
            output_path(dir.path().to_path_buf(), "locale-audit", AuditFormat::Yaml.extension()),
            dir.path().join("locale-audit.yaml")
        );
        let file = dir.path().join("report.json");
        assert_eq!(output_path(file.clone(), "locale-audit", "yaml"), file);
    }

    #[test]
    fn export_defaults_to_js() {
        let cli = Cli::try_parse_from(["operator-locales", "export", "zh-CN"]).unwrap();
        match cli.command {
            Commands::Export { format, .. } => assert_eq!(format, ExportFormat::Js),
            _ => panic!("expected export command"),
        }
    }
}
