// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in translation catalogs.
//!
//! Strings are embedded at compile time, one table per feature area and
//! locale, mirroring the dashboard's `locales/<locale>/<featureArea>.js`
//! layout. `en-US` is the reference locale; every other locale carries the
//! same key set.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to `Builtin` and its code to `Builtin::code()`
//! 2. Create `catalog/xx_yy.rs` with one table per [`FeatureArea`]
//! 3. Add the tables to the match in `entries()`

mod en_us;
mod zh_cn;

use crate::bundle::LocaleBundle;
use crate::error::LoadError;
use crate::locale::LocaleCode;
use serde::{Deserialize, Serialize};

/// A feature-area resource file within a locale directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureArea {
    #[serde(rename = "operatorAgent")]
    OperatorAgent,
    #[serde(rename = "operatorChaincode")]
    OperatorChaincode,
}

impl FeatureArea {
    /// File stem used by the dashboard (`operatorAgent.js`).
    pub fn file_stem(&self) -> &'static str {
        match self {
            FeatureArea::OperatorAgent => "operatorAgent",
            FeatureArea::OperatorChaincode => "operatorChaincode",
        }
    }

    pub fn from_file_stem(stem: &str) -> Option<FeatureArea> {
        match stem {
            "operatorAgent" => Some(FeatureArea::OperatorAgent),
            "operatorChaincode" => Some(FeatureArea::OperatorChaincode),
            _ => None,
        }
    }

    pub fn all() -> &'static [FeatureArea] {
        &[FeatureArea::OperatorAgent, FeatureArea::OperatorChaincode]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    EnUs,
    ZhCn,
}

impl Builtin {
    const ALL: [Builtin; 2] = [Builtin::EnUs, Builtin::ZhCn];

    fn code(&self) -> LocaleCode {
        match self {
            Builtin::EnUs => LocaleCode::en_us(),
            Builtin::ZhCn => LocaleCode::zh_cn(),
        }
    }
}

fn entries(locale: Builtin, area: FeatureArea) -> &'static [(&'static str, &'static str)] {
    match (locale, area) {
        (Builtin::EnUs, FeatureArea::OperatorAgent) => en_us::OPERATOR_AGENT,
        (Builtin::EnUs, FeatureArea::OperatorChaincode) => en_us::OPERATOR_CHAINCODE,
        (Builtin::ZhCn, FeatureArea::OperatorAgent) => zh_cn::OPERATOR_AGENT,
        (Builtin::ZhCn, FeatureArea::OperatorChaincode) => zh_cn::OPERATOR_CHAINCODE,
    }
}

/// Locales compiled into the crate, reference locale first.
pub fn builtin_locales() -> Vec<LocaleCode> {
    Builtin::ALL.iter().map(Builtin::code).collect()
}

/// Assemble one bundle per built-in locale, merging all feature areas.
pub fn builtin_bundles() -> Result<Vec<LocaleBundle>, LoadError> {
    Builtin::ALL
        .iter()
        .map(|locale| {
            let mut bundle = LocaleBundle::new(locale.code());
            for area in FeatureArea::all() {
                bundle.extend(entries(*locale, *area).iter().copied())?;
            }
            Ok(bundle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use std::collections::BTreeSet;

    fn builtin_entries(
        locale: &LocaleCode,
        area: FeatureArea,
    ) -> Option<&'static [(&'static str, &'static str)]> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.code() == *locale)
            .map(|b| entries(b, area))
    }

    #[test]
    fn builtin_bundles_assemble_without_duplicates() {
        let bundles = builtin_bundles().expect("built-in catalogs are well formed");
        assert_eq!(bundles.len(), 2);
        assert_eq!(bundles[0].locale(), &LocaleCode::en_us());
        for bundle in &bundles {
            assert_eq!(bundle.len(), keys::ALL.len(), "{} key count", bundle.locale());
        }
    }

    #[test]
    fn every_key_constant_has_a_translation() {
        for bundle in builtin_bundles().unwrap() {
            for key in keys::ALL {
                let template = bundle
                    .get(key)
                    .unwrap_or_else(|| panic!("{} missing {}", bundle.locale(), key));
                assert!(!template.source().is_empty(), "{} {} is empty", bundle.locale(), key);
            }
        }
    }

    #[test]
    fn feature_areas_do_not_overlap() {
        let en = LocaleCode::en_us();
        let agent: BTreeSet<&str> = builtin_entries(&en, FeatureArea::OperatorAgent)
            .unwrap()
            .iter()
            .map(|(k, _)| *k)
            .collect();
        let chaincode: BTreeSet<&str> = builtin_entries(&en, FeatureArea::OperatorChaincode)
            .unwrap()
            .iter()
            .map(|(k, _)| *k)
            .collect();
        assert!(agent.is_disjoint(&chaincode));
        assert_eq!(agent.len(), 51);
        assert_eq!(chaincode.len(), 21);
    }

    #[test]
    fn reference_locale_is_listed_first() {
        assert_eq!(builtin_locales(), vec![LocaleCode::en_us(), LocaleCode::zh_cn()]);
    }

    #[test]
    fn unknown_locale_has_no_entries() {
        let fr = LocaleCode::parse("fr-FR").unwrap();
        assert!(builtin_entries(&fr, FeatureArea::OperatorAgent).is_none());
    }

    #[test]
    fn file_stem_roundtrip() {
        for area in FeatureArea::all() {
            assert_eq!(FeatureArea::from_file_stem(area.file_stem()), Some(*area));
        }
        assert_eq!(FeatureArea::from_file_stem("operatorUser"), None);
    }
}
