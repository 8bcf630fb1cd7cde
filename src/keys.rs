// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message keys for the operator dashboard.
//!
//! Keys use the dashboard's dotted namespaces (`app.operator.agent.*`,
//! `app.operator.newAgent.*`, `app.operator.chainCode.*`). The built-in
//! catalogs are written against these constants, so a misspelt key in a
//! catalog fails to compile instead of silently rendering the raw key.
//!
//! ## Adding a new key
//!
//! 1. Add the constant to the matching module below
//! 2. Add an entry for it to every locale under `catalog/`

macro_rules! message_keys {
    ($(
        $(#[$meta:meta])*
        pub mod $module:ident {
            $( $name:ident = $key:literal; )*
        }
    )*) => {
        $(
            $(#[$meta])*
            pub mod $module {
                $( pub const $name: &str = $key; )*
            }
        )*

        /// Every key above, in declaration order.
        pub const ALL: &[&str] = &[ $( $( $module::$name, )* )* ];
    };
}

message_keys! {
    /// Agent list, detail and delete dialogs.
    pub mod agent {
        TITLE = "app.operator.agent.title";
        TABLE_HEADER_NAME = "app.operator.agent.table.header.name";
        TABLE_HEADER_CREATE_TIME = "app.operator.agent.table.header.createTime";
        TABLE_HEADER_TYPE = "app.operator.agent.table.header.type";
        FORM_NEW_TITLE = "app.operator.agent.form.new.title";
        FORM_UPDATE_TITLE = "app.operator.agent.form.update.title";
        FORM_NAME_LABEL = "app.operator.agent.form.name.label";
        FORM_NAME_REQUIRED = "app.operator.agent.form.name.required";
        CREATE_SUCCESS = "app.operator.agent.create.success";
        CREATE_FAIL = "app.operator.agent.create.fail";
        UPDATE_SUCCESS = "app.operator.agent.update.success";
        UPDATE_FAIL = "app.operator.agent.update.fail";
        FORM_DELETE_TITLE = "app.operator.agent.form.delete.title";
        FORM_DELETE_CONTENT = "app.operator.agent.form.delete.content";
        DELETE_FAIL = "app.operator.agent.delete.fail";
        DELETE_SUCCESS = "app.operator.agent.delete.success";
        LIST_ITEM_ORGANIZATION = "app.operator.agent.listItem.organization";
        TYPE = "app.operator.agent.type";
    }

    /// Create/edit agent form: labels and validation messages.
    pub mod new_agent {
        ERROR_WORKER_API = "app.operator.newAgent.error.workerApi";
        ERROR_NFS_SERVER = "app.operator.newAgent.error.NFSServer";
        TITLE = "app.operator.newAgent.title";
        EDIT_TITLE = "app.operator.editAgent.title";
        LABEL_NAME = "app.operator.newAgent.label.name";
        REQUIRED_NAME = "app.operator.newAgent.required.name";
        LABEL_DAEMON_URL = "app.operator.newAgent.label.daemonUrl";
        REQUIRED_DAEMON_URL = "app.operator.newAgent.required.daemonUrl";
        LABEL_TYPE = "app.operator.newAgent.label.type";
        REQUIRED_TYPE = "app.operator.newAgent.required.type";
        LABEL_CREDENTIAL_TYPE = "app.operator.newAgent.label.credentialType";
        REQUIRED_CREDENTIAL_TYPE = "app.operator.newAgent.required.credentialType";
        LABEL_CERTIFICATE_CONTENT = "app.operator.newAgent.label.certificateContent";
        REQUIRED_CERTIFICATE_CONTENT = "app.operator.newAgent.required.certificateContent";
        LABEL_CERTIFICATE_KEY = "app.operator.newAgent.label.certificateKey";
        REQUIRED_CERTIFICATE_KEY = "app.operator.newAgent.required.certificateKey";
        LABEL_CONFIGURATION_CONTENT = "app.operator.newAgent.label.configurationContent";
        REQUIRED_CONFIGURATION_CONTENT = "app.operator.newAgent.required.configurationContent";
        LABEL_USERNAME = "app.operator.newAgent.label.username";
        REQUIRED_USERNAME = "app.operator.newAgent.required.username";
        LABEL_PASSWORD = "app.operator.newAgent.label.password";
        REQUIRED_PASSWORD = "app.operator.newAgent.required.password";
        LABEL_EXTRA_PARAMETERS = "app.operator.newAgent.label.extraParameters";
        LABEL_USE_SSL = "app.operator.newAgent.label.useSSL";
        LABEL_SSL_CA = "app.operator.newAgent.label.SSLCa";
        REQUIRED_SSL_CA = "app.operator.newAgent.required.SSLCa";
        LABEL_LOG_LEVEL = "app.operator.newAgent.label.logLevel";
        REQUIRED_LOG_LEVEL = "app.operator.newAgent.required.logLevel";
        LABEL_SCHEDULABLE = "app.operator.newAgent.label.schedulable";
        LABEL_CAPACITY = "app.operator.newAgent.label.capacity";
        REQUIRED_CAPACITY = "app.operator.newAgent.required.capacity";
        LABEL_NFS_SERVER = "app.operator.newAgent.label.NFSServer";
        REQUIRED_NFS_SERVER = "app.operator.newAgent.required.NFSServer";
    }

    /// Chaincode list and upload form.
    pub mod chaincode {
        TITLE = "app.operator.chainCode.title";
        TABLE_HEADER_NAME = "app.operator.chainCode.table.header.name";
        TABLE_HEADER_VERSION = "app.operator.chainCode.table.header.version";
        TABLE_HEADER_LANGUAGE = "app.operator.chainCode.table.header.language";
        TABLE_HEADER_TIME = "app.operator.chainCode.table.header.time";
        TABLE_HEADER_MD5 = "app.operator.chainCode.table.header.md5";
        TABLE_OPERATE_INSTALL = "app.operator.chainCode.table.operate.install";
        TABLE_OPERATE_DELETE = "app.operator.chainCode.table.operate.delete";
        CREATE_HEADER_TITLE = "app.operator.chainCode.form.create.header.title";
        CREATE_NAME = "app.operator.chainCode.form.create.name";
        CREATE_CHECK_NAME = "app.operator.chainCode.form.create.checkName";
        CREATE_VERSION = "app.operator.chainCode.form.create.version";
        CREATE_CHECK_VERSION = "app.operator.chainCode.form.create.checkVersion";
        CREATE_LANGUAGE = "app.operator.chainCode.form.create.language";
        CREATE_CHECK_LANGUAGE = "app.operator.chainCode.form.create.checkLanguage";
        CREATE_FAIL = "app.operator.chainCode.form.create.fail";
        CREATE_SUCCESS = "app.operator.chainCode.form.create.success";
        CREATE_MD5 = "app.operator.chainCode.form.create.md5";
        CREATE_CHECK_MD5 = "app.operator.chainCode.form.create.checkMd5";
        CREATE_FILE = "app.operator.chainCode.form.create.file";
        CREATE_FILE_SELECT = "app.operator.chainCode.form.create.fileSelect";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for key in ALL {
            assert!(seen.insert(*key), "duplicate key constant: {}", key);
        }
        assert_eq!(ALL.len(), 72);
    }

    #[test]
    fn keys_are_namespaced() {
        for key in ALL {
            assert!(key.starts_with("app.operator."), "{} is outside app.operator", key);
            assert!(!key.ends_with('.'));
        }
    }
}
