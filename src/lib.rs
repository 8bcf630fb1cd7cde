// SPDX-License-Identifier: PMPL-1.0-or-later

//! Operator dashboard locales.
//!
//! Immutable locale tables mapping dotted message keys
//! (`app.operator.agent.title`) to message templates, one bundle per locale.
//! Templates may carry `{identifier}` placeholders that are filled in at
//! display time.
//!
//! PILLARS:
//! 1. **Table**: `resolve` and `format` with locale negotiation, default-locale
//!    fallback and configurable missing-key / missing-parameter policies.
//! 2. **Catalog**: the built-in `en-US` and `zh-CN` bundles for the agent and
//!    chaincode feature areas, keyed by the constants in [`keys`].
//! 3. **Audit**: key parity and placeholder parity across locales.
//!
//! ```
//! use operator_locales::{keys, LocaleTable, MessageArg};
//!
//! let table = LocaleTable::builtin().unwrap();
//! assert_eq!(table.resolve("fr-FR", keys::agent::TITLE).unwrap(), "Agent Management");
//! let text = table
//!     .format("en-US", keys::agent::CREATE_SUCCESS, &[MessageArg::new("name", "foo")])
//!     .unwrap();
//! assert_eq!(text, "Create agent foo success");
//! ```

pub mod audit;
pub mod bundle;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod keys;
pub mod loader;
pub mod locale;
pub mod logging;
pub mod table;
pub mod template;

pub use bundle::LocaleBundle;
pub use config::Config;
pub use error::{ErrorKind, LoadError, TranslationError};
pub use locale::LocaleCode;
pub use table::{global, init_global, LocaleTable, LocaleTableBuilder, MissingKeyPolicy};
pub use template::{MessageArg, MissingParameterPolicy, Template};
