// SPDX-License-Identifier: PMPL-1.0-or-later

//! One locale's key → template mapping.

use crate::error::LoadError;
use crate::locale::LocaleCode;
use crate::template::Template;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// All messages for a single locale.
///
/// Keys are unique: inserting a key twice is a [`LoadError::DuplicateKey`]
/// rather than a silent overwrite, so two feature-area files cannot shadow
/// each other. Iteration order is sorted by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    locale: LocaleCode,
    messages: BTreeMap<String, Template>,
}

impl LocaleBundle {
    pub fn new(locale: LocaleCode) -> Self {
        Self {
            locale,
            messages: BTreeMap::new(),
        }
    }

    pub fn from_entries<I, K, V>(locale: LocaleCode, entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut bundle = LocaleBundle::new(locale);
        bundle.extend(entries)?;
        Ok(bundle)
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) -> Result<(), LoadError> {
        match self.messages.entry(key.into()) {
            Entry::Occupied(entry) => Err(LoadError::DuplicateKey {
                locale: self.locale.to_string(),
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(Template::new(template));
                Ok(())
            }
        }
    }

    pub fn extend<I, K, V>(&mut self, entries: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, template) in entries {
            self.insert(key, template)?;
        }
        Ok(())
    }

    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&Template> {
        self.messages.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_keys() {
        let err = LocaleBundle::from_entries(
            LocaleCode::en_us(),
            [("a.b", "one"), ("a.c", "two"), ("a.b", "three")],
        )
        .unwrap_err();
        match err {
            LoadError::DuplicateKey { locale, key } => {
                assert_eq!(locale, "en-US");
                assert_eq!(key, "a.b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn iterates_in_key_order() {
        let bundle =
            LocaleBundle::from_entries(LocaleCode::zh_cn(), [("b", "2"), ("a", "1")]).unwrap();
        let keys: Vec<&str> = bundle.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(bundle.get("a").map(Template::source), Some("1"));
        assert!(bundle.get("c").is_none());
        assert_eq!(bundle.len(), 2);
    }
}
