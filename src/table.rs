// SPDX-License-Identifier: PMPL-1.0-or-later

//! The locale table: lookups with locale negotiation and fallback.
//!
//! ## Fallback order
//!
//! 1. The requested locale, negotiated to a registered one: exact code,
//!    then any registered locale with the same language (`zh` → `zh-CN`),
//!    then the default locale.
//! 2. The default locale's bundle, if the key is missing in (1).
//! 3. The missing-key policy: return the key itself (default) or fail.
//!
//! An unknown locale never fails a lookup; it only changes which bundle is
//! consulted. The table is immutable once built, so shared references can be
//! used from any thread without locking.

use crate::bundle::LocaleBundle;
use crate::catalog;
use crate::config::Config;
use crate::error::{LoadError, TranslationError};
use crate::locale::LocaleCode;
use crate::template::{MessageArg, MissingParameterPolicy, Template};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Formats a message from a table, a locale, a key and named arguments.
///
/// Expands to a call to [`LocaleTable::format`], so the result is a
/// `Result<String, TranslationError>`.
///
/// ```
/// use operator_locales::{keys, tr, LocaleTable};
///
/// let table = LocaleTable::builtin().unwrap();
/// let text = tr!(table, "en-US", keys::agent::CREATE_SUCCESS, name = "org1-peer").unwrap();
/// assert_eq!(text, "Create agent org1-peer success");
/// ```
#[macro_export]
macro_rules! tr {
    ($table:expr, $locale:expr, $key:expr $(, $name:ident = $value:expr )* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::MessageArg> = ::std::vec![
            $(
                $crate::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $table.format($locale, $key, &args)
    }};
}

/// What to do when a key is absent from both the negotiated and the
/// default locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKeyPolicy {
    /// Return the key itself so the gap is visible in the UI.
    #[default]
    ReturnKey,
    /// Fail with `MissingTranslation`.
    Error,
}

#[derive(Debug, Clone)]
pub struct LocaleTable {
    bundles: BTreeMap<LocaleCode, LocaleBundle>,
    default_locale: LocaleCode,
    missing_key: MissingKeyPolicy,
    missing_parameter: MissingParameterPolicy,
}

impl LocaleTable {
    pub fn builder() -> LocaleTableBuilder {
        LocaleTableBuilder::default()
    }

    /// Table over the compiled-in catalogs with `en-US` as default and
    /// default policies.
    pub fn builtin() -> Result<LocaleTable, LoadError> {
        LocaleTable::builder()
            .bundles(catalog::builtin_bundles()?)
            .build()
    }

    /// Degraded table with an empty default bundle. Every lookup falls
    /// through to the missing-key policy.
    fn empty(default_locale: LocaleCode) -> LocaleTable {
        let mut bundles = BTreeMap::new();
        bundles.insert(default_locale.clone(), LocaleBundle::new(default_locale.clone()));
        LocaleTable {
            bundles,
            default_locale,
            missing_key: MissingKeyPolicy::ReturnKey,
            missing_parameter: MissingParameterPolicy::Keep,
        }
    }

    pub fn default_locale(&self) -> &LocaleCode {
        &self.default_locale
    }

    pub fn missing_key_policy(&self) -> MissingKeyPolicy {
        self.missing_key
    }

    pub fn missing_parameter_policy(&self) -> MissingParameterPolicy {
        self.missing_parameter
    }

    /// Registered locales in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.bundles.keys()
    }

    pub fn bundles(&self) -> impl Iterator<Item = &LocaleBundle> {
        self.bundles.values()
    }

    /// Strict bundle lookup: no negotiation, no fallback.
    pub fn bundle(&self, locale: &str) -> Result<&LocaleBundle, TranslationError> {
        let code = LocaleCode::parse(locale)?;
        self.bundles
            .get(&code)
            .ok_or_else(|| TranslationError::UnknownLocale {
                locale: locale.to_string(),
            })
    }

    /// Keys of one registered locale, sorted.
    pub fn keys(&self, locale: &str) -> Result<impl Iterator<Item = &str>, TranslationError> {
        Ok(self.bundle(locale)?.keys())
    }

    /// Pick the registered locale that serves `locale`.
    pub fn negotiate(&self, locale: &str) -> &LocaleCode {
        let code = match LocaleCode::parse(locale) {
            Ok(code) => code,
            Err(err) => {
                debug!(%err, fallback = %self.default_locale, "unparseable locale, using default");
                return &self.default_locale;
            }
        };

        if let Some((registered, _)) = self.bundles.get_key_value(&code) {
            return registered;
        }

        let language = code.language();
        if self.default_locale.language() == language {
            return &self.default_locale;
        }
        if let Some(registered) = self.bundles.keys().find(|k| k.language() == language) {
            debug!(requested = %code, using = %registered, "matched locale by language");
            return registered;
        }

        debug!(requested = %code, fallback = %self.default_locale, "locale not registered, using default");
        &self.default_locale
    }

    /// Checked lookup in exactly one locale. No negotiation, no fallback.
    pub fn lookup(&self, locale: &LocaleCode, key: &str) -> Option<&Template> {
        self.bundles.get(locale).and_then(|bundle| bundle.get(key))
    }

    fn template(&self, locale: &str, key: &str) -> Option<&Template> {
        let code = self.negotiate(locale);
        if let Some(template) = self.lookup(code, key) {
            return Some(template);
        }
        if *code == self.default_locale {
            return None;
        }
        let fallback = self.lookup(&self.default_locale, key);
        if fallback.is_some() {
            debug!(%key, locale = %code, fallback = %self.default_locale, "key missing, using default locale");
        }
        fallback
    }

    fn on_missing_key(&self, locale: &str, key: &str) -> Result<(), TranslationError> {
        match self.missing_key {
            MissingKeyPolicy::ReturnKey => {
                debug!(%key, %locale, "no translation, rendering key");
                Ok(())
            }
            MissingKeyPolicy::Error => Err(TranslationError::MissingTranslation {
                locale: self.negotiate(locale).to_string(),
                key: key.to_string(),
            }),
        }
    }

    /// The template text registered for `key`, after locale fallback.
    ///
    /// Under [`MissingKeyPolicy::ReturnKey`] a missing key yields the key
    /// itself, so this only fails under [`MissingKeyPolicy::Error`].
    pub fn resolve<'a>(&'a self, locale: &str, key: &'a str) -> Result<&'a str, TranslationError> {
        match self.template(locale, key) {
            Some(template) => Ok(template.source()),
            None => {
                self.on_missing_key(locale, key)?;
                Ok(key)
            }
        }
    }

    /// Resolve `key` and substitute `args` into its placeholders.
    ///
    /// A key that falls back to the raw key string is returned unchanged.
    pub fn format(&self, locale: &str, key: &str, args: &[MessageArg]) -> Result<String, TranslationError> {
        let Some(template) = self.template(locale, key) else {
            self.on_missing_key(locale, key)?;
            return Ok(key.to_string());
        };
        template
            .render(args, self.missing_parameter)
            .map_err(|name| TranslationError::MissingParameter {
                key: key.to_string(),
                name: name.to_string(),
            })
    }

    /// Like [`format`](Self::format) but never fails: a missing key renders
    /// as the key, a missing parameter leaves its `{name}` token in place.
    pub fn format_lossy(&self, locale: &str, key: &str, args: &[MessageArg]) -> String {
        match self.template(locale, key) {
            Some(template) => template
                .render(args, MissingParameterPolicy::Keep)
                .unwrap_or_else(|_| template.source().to_string()),
            None => key.to_string(),
        }
    }
}

static GLOBAL: OnceLock<LocaleTable> = OnceLock::new();

/// Install the process-wide table. Only the first call wins; later calls
/// hand the rejected table back.
pub fn init_global(table: LocaleTable) -> Result<(), LocaleTable> {
    GLOBAL.set(table)
}

/// The process-wide table, built on first use from [`Config::from_env`]
/// unless [`init_global`] ran first.
pub fn global() -> &'static LocaleTable {
    GLOBAL.get_or_init(|| from_config_or_fallback(&Config::from_env()))
}

/// Build from `config`, degrading to the built-in catalogs under the same
/// default locale and policies, and then to an empty raw-key table.
fn from_config_or_fallback(config: &Config) -> LocaleTable {
    let err = match config.build_table() {
        Ok(table) => return table,
        Err(err) => err,
    };
    warn!(error = %err, "failed to build locale table, falling back to built-in catalogs");

    let builtin = Config {
        resources_dir: None,
        ..config.clone()
    };
    builtin.build_table().unwrap_or_else(|err| {
        warn!(error = %err, "built-in catalogs unusable, rendering raw keys");
        LocaleTable::empty(config.default_locale.clone())
    })
}

#[derive(Debug, Clone, Default)]
pub struct LocaleTableBuilder {
    bundles: Vec<LocaleBundle>,
    default_locale: Option<LocaleCode>,
    missing_key: MissingKeyPolicy,
    missing_parameter: MissingParameterPolicy,
}

impl LocaleTableBuilder {
    pub fn bundle(mut self, bundle: LocaleBundle) -> Self {
        self.bundles.push(bundle);
        self
    }

    pub fn bundles(mut self, bundles: impl IntoIterator<Item = LocaleBundle>) -> Self {
        self.bundles.extend(bundles);
        self
    }

    /// Defaults to `en-US`.
    pub fn default_locale(mut self, locale: LocaleCode) -> Self {
        self.default_locale = Some(locale);
        self
    }

    pub fn missing_key(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key = policy;
        self
    }

    pub fn missing_parameter(mut self, policy: MissingParameterPolicy) -> Self {
        self.missing_parameter = policy;
        self
    }

    /// Bundles for the same locale are merged; a key present in both is a
    /// [`LoadError::DuplicateKey`]. Fails if the default locale has no bundle.
    pub fn build(self) -> Result<LocaleTable, LoadError> {
        let default_locale = self.default_locale.unwrap_or_default();
        let mut bundles: BTreeMap<LocaleCode, LocaleBundle> = BTreeMap::new();

        for bundle in self.bundles {
            match bundles.get_mut(bundle.locale()) {
                Some(existing) => existing.extend(
                    bundle
                        .iter()
                        .map(|(key, template)| (key.to_string(), template.source().to_string())),
                )?,
                None => {
                    bundles.insert(bundle.locale().clone(), bundle);
                }
            }
        }

        if !bundles.contains_key(&default_locale) {
            return Err(LoadError::MissingDefault {
                locale: default_locale.to_string(),
            });
        }

        Ok(LocaleTable {
            bundles,
            default_locale,
            missing_key: self.missing_key,
            missing_parameter: self.missing_parameter,
        })
    }
}
