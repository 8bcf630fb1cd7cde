// SPDX-License-Identifier: PMPL-1.0-or-later

//! English (United States). Reference locale: every key is defined here.

use crate::keys::{agent, chaincode, new_agent};

pub(super) const OPERATOR_AGENT: &[(&str, &str)] = &[
    (agent::TITLE, "Agent Management"),
    (agent::TABLE_HEADER_NAME, "Name"),
    (agent::TABLE_HEADER_CREATE_TIME, "Create Time"),
    (agent::TABLE_HEADER_TYPE, "Type"),
    (agent::FORM_NEW_TITLE, "New Agent"),
    (agent::FORM_UPDATE_TITLE, "Update Agent"),
    (agent::FORM_NAME_LABEL, "Agent Name"),
    (agent::FORM_NAME_REQUIRED, "Please input organization name"),
    (agent::CREATE_SUCCESS, "Create agent {name} success"),
    (agent::CREATE_FAIL, "Create agent {name} failed"),
    (agent::UPDATE_SUCCESS, "Update agent {name} success"),
    (agent::UPDATE_FAIL, "Update agent {name} failed"),
    (agent::FORM_DELETE_TITLE, "Delete Agent"),
    (agent::FORM_DELETE_CONTENT, "Confirm to delete agent {name}"),
    (agent::DELETE_FAIL, "Delete Agent {name} failed"),
    (agent::DELETE_SUCCESS, "Delete Agent {name} success"),
    (agent::LIST_ITEM_ORGANIZATION, "Organization"),
    (agent::TYPE, "Type"),
    // Create/edit form
    (new_agent::ERROR_WORKER_API, "Please input validate worker api."),
    (new_agent::ERROR_NFS_SERVER, "Please input validate NFS Server address."),
    (new_agent::TITLE, "Create Agent"),
    (new_agent::EDIT_TITLE, "Edit Agent"),
    (new_agent::LABEL_NAME, "Name"),
    (new_agent::REQUIRED_NAME, "Please input name."),
    (new_agent::LABEL_DAEMON_URL, "Daemon Url"),
    (new_agent::REQUIRED_DAEMON_URL, "Please input daemon url."),
    (new_agent::LABEL_TYPE, "Type"),
    (new_agent::REQUIRED_TYPE, "Please select a type."),
    (new_agent::LABEL_CREDENTIAL_TYPE, "Credential Type"),
    (new_agent::REQUIRED_CREDENTIAL_TYPE, "Please select a credential type."),
    (new_agent::LABEL_CERTIFICATE_CONTENT, "Certificate Content"),
    (new_agent::REQUIRED_CERTIFICATE_CONTENT, "Please input certificate content."),
    (new_agent::LABEL_CERTIFICATE_KEY, "Certificate Key"),
    (new_agent::REQUIRED_CERTIFICATE_KEY, "Please input certificate key."),
    (new_agent::LABEL_CONFIGURATION_CONTENT, "Configuration Content"),
    (new_agent::REQUIRED_CONFIGURATION_CONTENT, "Please input configuration content."),
    (new_agent::LABEL_USERNAME, "Username"),
    (new_agent::REQUIRED_USERNAME, "Please input username."),
    (new_agent::LABEL_PASSWORD, "Password"),
    (new_agent::REQUIRED_PASSWORD, "Please input password."),
    (new_agent::LABEL_EXTRA_PARAMETERS, "Extra Parameters"),
    (new_agent::LABEL_USE_SSL, "Use SSL Verification"),
    (new_agent::LABEL_SSL_CA, "SSL CA"),
    (new_agent::REQUIRED_SSL_CA, "Please input ssl ca cert."),
    (new_agent::LABEL_LOG_LEVEL, "Log Level"),
    (new_agent::REQUIRED_LOG_LEVEL, "Please select a log level."),
    (new_agent::LABEL_SCHEDULABLE, "Schedulable"),
    (new_agent::LABEL_CAPACITY, "Capacity"),
    (new_agent::REQUIRED_CAPACITY, "Please input capacity."),
    (new_agent::LABEL_NFS_SERVER, "NFS Server Address"),
    (new_agent::REQUIRED_NFS_SERVER, "Please input NFS server address."),
];

pub(super) const OPERATOR_CHAINCODE: &[(&str, &str)] = &[
    (chaincode::TITLE, "Chaincode Management"),
    (chaincode::TABLE_HEADER_NAME, "Name"),
    (chaincode::TABLE_HEADER_VERSION, "Version"),
    (chaincode::TABLE_HEADER_LANGUAGE, "Language"),
    (chaincode::TABLE_HEADER_TIME, "Time"),
    (chaincode::TABLE_HEADER_MD5, "MD5"),
    (chaincode::TABLE_OPERATE_INSTALL, "Install"),
    (chaincode::TABLE_OPERATE_DELETE, "Delete"),
    (chaincode::CREATE_HEADER_TITLE, "Upload Chaincode"),
    (chaincode::CREATE_NAME, "Name"),
    (chaincode::CREATE_CHECK_NAME, "Please input chaincode name"),
    (chaincode::CREATE_VERSION, "Version"),
    (chaincode::CREATE_CHECK_VERSION, "Please input chaincode version"),
    (chaincode::CREATE_LANGUAGE, "Language"),
    (chaincode::CREATE_CHECK_LANGUAGE, "Please select language"),
    (chaincode::CREATE_FAIL, "Upload chaincode failed"),
    (chaincode::CREATE_SUCCESS, "Upload chaincode success"),
    (chaincode::CREATE_MD5, "md5"),
    (chaincode::CREATE_CHECK_MD5, "Please input md5"),
    (chaincode::CREATE_FILE, "File"),
    (chaincode::CREATE_FILE_SELECT, "Please select chaincode file"),
];
