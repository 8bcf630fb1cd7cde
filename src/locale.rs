// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale codes.
//!
//! A [`LocaleCode`] is a normalized `language[-Script][-REGION]` tag. The
//! dashboard's resource directories are named with these codes (`en-US/`,
//! `zh-CN/`), so parsing is lenient about case and separators but always
//! yields the canonical spelling.

use crate::error::TranslationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse and normalize a locale code.
    ///
    /// `zh_cn`, `ZH-cn` and `zh-CN` all normalize to `zh-CN`. Encoding and
    /// modifier suffixes (`en_US.UTF-8`, `de_DE@euro`) are stripped, so
    /// POSIX `LANG` values parse too.
    pub fn parse(value: &str) -> Result<LocaleCode, TranslationError> {
        let invalid = || TranslationError::UnknownLocale {
            locale: value.to_string(),
        };

        let mut raw = value.trim();
        if let Some(idx) = raw.find(['.', '@']) {
            raw = &raw[..idx];
        }
        if raw.is_empty() {
            return Err(invalid());
        }

        let mut parts = Vec::new();
        for (i, subtag) in raw.split(['-', '_']).enumerate() {
            if subtag.is_empty() || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            let normalized = if i == 0 {
                if !(2..=3).contains(&subtag.len())
                    || !subtag.chars().all(|c| c.is_ascii_alphabetic())
                {
                    return Err(invalid());
                }
                subtag.to_ascii_lowercase()
            } else if subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                let lower = subtag.to_ascii_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => lower,
                }
            } else if subtag.len() == 2 {
                subtag.to_ascii_uppercase()
            } else {
                subtag.to_ascii_lowercase()
            };
            parts.push(normalized);
        }

        Ok(LocaleCode(parts.join("-")))
    }

    pub fn en_us() -> LocaleCode {
        LocaleCode("en-US".to_string())
    }

    pub fn zh_cn() -> LocaleCode {
        LocaleCode("zh-CN".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`zh` for `zh-CN`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Human-readable name for selection menus, written in the language
    /// itself. Falls back to the code for languages we have no name for.
    pub fn native_name(&self) -> &str {
        match self.0.as_str() {
            "zh-CN" | "zh-Hans" | "zh-SG" => "简体中文",
            "zh-TW" | "zh-Hant" | "zh-HK" => "繁體中文",
            _ => match self.language() {
                "en" => "English",
                "zh" => "中文",
                "ja" => "日本語",
                "ko" => "한국어",
                "fr" => "Français",
                "de" => "Deutsch",
                "es" => "Español",
                "pt" => "Português",
                "ru" => "Русский",
                _ => self.0.as_str(),
            },
        }
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        LocaleCode::en_us()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleCode::parse(s)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for LocaleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LocaleCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LocaleCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_separators() {
        assert_eq!(LocaleCode::parse("zh_cn").unwrap().as_str(), "zh-CN");
        assert_eq!(LocaleCode::parse("ZH-cn").unwrap().as_str(), "zh-CN");
        assert_eq!(LocaleCode::parse("en").unwrap().as_str(), "en");
        assert_eq!(LocaleCode::parse("zh-hant-tw").unwrap().as_str(), "zh-Hant-TW");
    }

    #[test]
    fn strips_posix_suffixes() {
        assert_eq!(LocaleCode::parse("en_US.UTF-8").unwrap().as_str(), "en-US");
        assert_eq!(LocaleCode::parse("de_DE@euro").unwrap().as_str(), "de-DE");
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "  ", "e", "english", "en--US", "en US", "12-US"] {
            let err = LocaleCode::parse(bad).unwrap_err();
            assert_eq!(err.kind(), crate::error::ErrorKind::UnknownLocale, "{bad:?}");
        }
    }

    #[test]
    fn language_subtag() {
        assert_eq!(LocaleCode::zh_cn().language(), "zh");
        assert_eq!(LocaleCode::parse("fr").unwrap().language(), "fr");
    }

    #[test]
    fn native_names_resolve() {
        assert_eq!(LocaleCode::zh_cn().native_name(), "简体中文");
        assert_eq!(LocaleCode::en_us().native_name(), "English");
        assert_eq!(LocaleCode::parse("sw-KE").unwrap().native_name(), "sw-KE");
    }

    #[test]
    fn serde_uses_canonical_spelling() {
        let code: LocaleCode = serde_json::from_str("\"zh_cn\"").unwrap();
        assert_eq!(code, LocaleCode::zh_cn());
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"zh-CN\"");
    }
}
