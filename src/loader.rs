// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading locale bundles from a resource directory.
//!
//! Layout, one directory per locale and one file per feature area:
//!
//! ```text
//! locales/
//!   en-US/operatorAgent.json
//!   en-US/operatorChaincode.yaml
//!   zh-CN/operatorChaincode.js
//! ```
//!
//! Each file is a flat map of message key to template string. JSON, YAML and
//! the dashboard's `export default { 'key': 'value', ... };` modules are
//! accepted. Directories whose name is not a locale code are skipped.

use crate::bundle::LocaleBundle;
use crate::catalog::FeatureArea;
use crate::error::LoadError;
use crate::locale::LocaleCode;
use regex::Regex;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Key/value pairs in file order. Duplicates are kept so the bundle can
/// reject them instead of the parser silently keeping the last one.
struct FlatEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for FlatEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = FlatEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a flat map of message keys to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FlatEntries, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, String>()? {
            entries.push(entry);
        }
        Ok(FlatEntries(entries))
    }
}

fn js_entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"^\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*:\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*,?\s*$"#,
        )
        .expect("js entry pattern is valid")
    })
}

fn hex_value(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn take_hex(chars: &mut std::str::Chars<'_>, count: usize) -> Option<u32> {
    let digits: String = chars.by_ref().take(count).collect();
    if digits.len() != count {
        return None;
    }
    hex_value(&digits)
}

/// Code unit after `\u`: either `XXXX` or `{X...}`.
fn take_unicode_escape(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    if chars.as_str().starts_with('{') {
        chars.next();
        let rest = chars.as_str();
        let end = rest.find('}')?;
        let value = hex_value(&rest[..end]);
        for _ in 0..=end {
            chars.next();
        }
        return value.filter(|v| *v <= 0x10FFFF);
    }
    take_hex(chars, 4)
}

/// Decode the escapes of a JS string literal body.
fn unescape_js(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escape = chars.next().ok_or("dangling backslash")?;
        match escape {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.as_str().starts_with(|c: char| c.is_ascii_digit()) => out.push('\0'),
            'x' => {
                let value = take_hex(&mut chars, 2).ok_or("invalid \\x escape")?;
                out.push(char::from_u32(value).ok_or("invalid \\x escape")?);
            }
            'u' => {
                let unit = take_unicode_escape(&mut chars).ok_or("invalid \\u escape")?;
                let code = if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: must pair with a following \uDC00-\uDFFF.
                    let low = chars
                        .as_str()
                        .strip_prefix("\\u")
                        .and_then(|rest| rest.get(..4))
                        .and_then(hex_value)
                        .filter(|low| (0xDC00..0xE000).contains(low))
                        .ok_or("unpaired surrogate in \\u escape")?;
                    for _ in 0..6 {
                        chars.next();
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                out.push(char::from_u32(code).ok_or("invalid \\u escape")?);
            }
            '1'..='9' | '0' => return Err(format!("octal escape \\{} is not supported", escape)),
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Parse a dashboard locale module: `export default { 'key': 'value', ... };`
/// with one entry per line. Blank lines and `//` comments are ignored.
pub fn parse_js_module(content: &str) -> Result<Vec<(String, String)>, String> {
    let mut entries = Vec::new();
    let mut opened = false;
    let mut closed = false;

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if !opened {
            if trimmed.starts_with("export default") && trimmed.ends_with('{') {
                opened = true;
                continue;
            }
            return Err(format!("line {}: expected `export default {{`", idx + 1));
        }
        if closed {
            return Err(format!("line {}: content after closing brace", idx + 1));
        }
        if trimmed == "};" || trimmed == "}" {
            closed = true;
            continue;
        }
        let caps = js_entry_pattern()
            .captures(line)
            .ok_or_else(|| format!("line {}: expected `'key': 'value',`", idx + 1))?;
        let key = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        let value = caps.get(3).or_else(|| caps.get(4)).map_or("", |m| m.as_str());
        let unescape = |raw: &str| unescape_js(raw).map_err(|e| format!("line {}: {}", idx + 1, e));
        entries.push((unescape(key)?, unescape(value)?));
    }

    if !opened || !closed {
        return Err("unterminated `export default` object".to_string());
    }
    Ok(entries)
}

/// The locale a directory holds, if its name is exactly a locale code.
///
/// Only case and `_`/`-` spelling may differ from the canonical form, so
/// siblings such as `en-US.bak` or `zh-CN@old` are not mistaken for the
/// locale they were copied from.
fn locale_dir_code(name: &str) -> Option<LocaleCode> {
    let code = LocaleCode::parse(name).ok()?;
    let spelled = name.replace('_', "-");
    code.as_str().eq_ignore_ascii_case(&spelled).then_some(code)
}

/// Parse one resource file by extension. Returns `None` for files that are
/// not locale resources.
pub fn read_resource(path: &Path) -> Result<Option<Vec<(String, String)>>, LoadError> {
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext @ ("json" | "yaml" | "yml" | "js")) => ext,
        _ => return Ok(None),
    };
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |message: String| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let entries = match ext {
        "json" => serde_json::from_str::<FlatEntries>(&content)
            .map_err(|e| parse_err(e.to_string()))?
            .0,
        "js" => parse_js_module(&content).map_err(parse_err)?,
        _ => serde_yaml::from_str::<FlatEntries>(&content)
            .map_err(|e| parse_err(e.to_string()))?
            .0,
    };
    Ok(Some(entries))
}

/// Load every locale directory under `root` into one bundle per locale.
///
/// A key defined twice within a locale, in one file or across feature-area
/// files, is a [`LoadError::DuplicateKey`].
pub fn load_dir(root: &Path) -> Result<Vec<LocaleBundle>, LoadError> {
    let mut bundles: BTreeMap<LocaleCode, LocaleBundle> = BTreeMap::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() != 1 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if locale_dir_code(&name).is_some() {
                return true;
            }
            warn!(dir = %entry.path().display(), "skipping directory: not a locale code");
            false
        });

    for entry in walker {
        let entry = entry.map_err(|source| LoadError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.depth() != 2 || !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(entries) = read_resource(path)? else {
            debug!(file = %path.display(), "skipping non-resource file");
            continue;
        };

        let dir_name = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let locale = locale_dir_code(&dir_name).ok_or_else(|| LoadError::InvalidLocale {
            value: dir_name.clone(),
        })?;

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if FeatureArea::from_file_stem(stem).is_none() {
            debug!(file = %path.display(), "loading resource for an unrecognised feature area");
        }

        bundles
            .entry(locale.clone())
            .or_insert_with(|| LocaleBundle::new(locale))
            .extend(entries)?;
    }

    for bundle in bundles.values() {
        info!(locale = %bundle.locale(), keys = bundle.len(), "loaded locale bundle");
    }
    Ok(bundles.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashboard_module() {
        let source = "export default {\n  'app.operator.agent.title': 'Agent Management',\n  \
                      // comment\n  'app.operator.agent.create.success': 'Create agent {name} success',\n};";
        let entries = parse_js_module(source).unwrap();
        assert_eq!(
            entries,
            vec![
                ("app.operator.agent.title".to_string(), "Agent Management".to_string()),
                (
                    "app.operator.agent.create.success".to_string(),
                    "Create agent {name} success".to_string()
                ),
            ]
        );
    }

    #[test]
    fn js_module_handles_escapes_and_double_quotes() {
        let source = "export default {\n  \"a.b\": 'It\\'s here',\n  'a.c': \"say \\\"hi\\\"\"\n}";
        let entries = parse_js_module(source).unwrap();
        assert_eq!(entries[0].1, "It's here");
        assert_eq!(entries[1].1, "say \"hi\"");
    }

    #[test]
    fn js_module_last_entry_without_comma() {
        let source = "export default {\n  'app.operator.chainCode.form.create.fileSelect': '请选择链码文件'\n};\n";
        let entries = parse_js_module(source).unwrap();
        assert_eq!(entries[0].1, "请选择链码文件");
    }

    fn decode(body: &str) -> String {
        let source = format!("export default {{\n  'k': '{}',\n}};", body);
        let mut entries = parse_js_module(&source).unwrap();
        entries.remove(0).1
    }

    #[test]
    fn js_module_decodes_control_escapes() {
        assert_eq!(decode(r"a\rb"), "a\rb");
        assert_eq!(decode(r"a\nb\tc"), "a\nb\tc");
        assert_eq!(decode(r"nul\0"), "nul\0");
        assert_eq!(decode(r"\q"), "q");
    }

    #[test]
    fn js_module_decodes_hex_escapes() {
        assert_eq!(decode(r"\x41\x7e"), "A~");
    }

    #[test]
    fn js_module_decodes_unicode_escapes() {
        assert_eq!(decode(r"x\ry\u4e2d"), "x\ry中");
        assert_eq!(decode(r"\u{1F600}"), "\u{1F600}");
        assert_eq!(decode(r"\ud83d\ude00"), "\u{1F600}");
        assert_eq!(decode(r"\u2028"), "\u{2028}");
    }

    #[test]
    fn js_module_rejects_bad_escapes() {
        for body in [r"\x4", r"\xzz", r"\u12", r"\u{110000}", r"\ud83d", r"\01", r"\7"] {
            let source = format!("export default {{\n  'k': '{}',\n}};", body);
            let err = parse_js_module(&source).unwrap_err();
            assert!(err.starts_with("line 2"), "{body}: {err}");
        }
    }

    #[test]
    fn locale_dirs_must_be_exact_codes() {
        assert_eq!(locale_dir_code("en-US"), Some(LocaleCode::en_us()));
        assert_eq!(locale_dir_code("zh_cn"), Some(LocaleCode::zh_cn()));
        assert_eq!(locale_dir_code("en-US.bak"), None);
        assert_eq!(locale_dir_code("zh-CN@old"), None);
        assert_eq!(locale_dir_code("shared"), None);
    }

    #[test]
    fn js_module_rejects_malformed_lines() {
        assert!(parse_js_module("module.exports = {};").is_err());
        assert!(parse_js_module("export default {\n  key: value,\n};").is_err());
        assert!(parse_js_module("export default {\n  'a': 'b',\n").is_err());
    }

    #[test]
    fn json_keeps_duplicates_for_the_bundle_to_reject() {
        let entries: FlatEntries = serde_json::from_str(r#"{"a": "1", "a": "2"}"#).unwrap();
        assert_eq!(entries.0.len(), 2);
    }

    #[test]
    fn json_rejects_nested_values() {
        assert!(serde_json::from_str::<FlatEntries>(r#"{"a": {"b": "c"}}"#).is_err());
        assert!(serde_json::from_str::<FlatEntries>(r#"{"a": 1}"#).is_err());
    }
}
