// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for lookups, formatting and resource loading.
//!
//! Translation errors are local and recoverable: callers are expected to
//! degrade the display (show the key, an empty string, or the partially
//! substituted template) rather than abort.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`TranslationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingTranslation,
    MissingParameter,
    UnknownLocale,
}

/// Failure while resolving or formatting a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("no translation for '{key}' in locale {locale}")]
    MissingTranslation { locale: String, key: String },

    #[error("message '{key}' needs parameter '{name}' but none was supplied")]
    MissingParameter { key: String, name: String },

    #[error("locale '{locale}' is not registered")]
    UnknownLocale { locale: String },
}

impl TranslationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::MissingTranslation { .. } => ErrorKind::MissingTranslation,
            TranslationError::MissingParameter { .. } => ErrorKind::MissingParameter,
            TranslationError::UnknownLocale { .. } => ErrorKind::UnknownLocale,
        }
    }
}

/// Failure while assembling bundles from static tables or from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("key '{key}' is defined more than once in locale {locale}")]
    DuplicateKey { locale: String, key: String },

    #[error("'{value}' is not a valid locale code")]
    InvalidLocale { value: String },

    #[error("default locale {locale} has no bundle")]
    MissingDefault { locale: String },

    #[error("walking {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
