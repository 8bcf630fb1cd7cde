// SPDX-License-Identifier: PMPL-1.0-or-later

//! Simplified Chinese (China).

use crate::keys::{agent, chaincode, new_agent};

pub(super) const OPERATOR_AGENT: &[(&str, &str)] = &[
    (agent::TITLE, "代理管理"),
    (agent::TABLE_HEADER_NAME, "名称"),
    (agent::TABLE_HEADER_CREATE_TIME, "创建时间"),
    (agent::TABLE_HEADER_TYPE, "类型"),
    (agent::FORM_NEW_TITLE, "新建代理"),
    (agent::FORM_UPDATE_TITLE, "更新代理"),
    (agent::FORM_NAME_LABEL, "代理名称"),
    (agent::FORM_NAME_REQUIRED, "请输入组织名称"),
    (agent::CREATE_SUCCESS, "创建代理 {name} 成功"),
    (agent::CREATE_FAIL, "创建代理 {name} 失败"),
    (agent::UPDATE_SUCCESS, "更新代理 {name} 成功"),
    (agent::UPDATE_FAIL, "更新代理 {name} 失败"),
    (agent::FORM_DELETE_TITLE, "删除代理"),
    (agent::FORM_DELETE_CONTENT, "确认删除代理 {name}"),
    (agent::DELETE_FAIL, "删除代理 {name} 失败"),
    (agent::DELETE_SUCCESS, "删除代理 {name} 成功"),
    (agent::LIST_ITEM_ORGANIZATION, "组织"),
    (agent::TYPE, "类型"),
    // 创建/编辑表单
    (new_agent::ERROR_WORKER_API, "请输入有效的 worker api。"),
    (new_agent::ERROR_NFS_SERVER, "请输入有效的 NFS 服务器地址。"),
    (new_agent::TITLE, "创建代理"),
    (new_agent::EDIT_TITLE, "编辑代理"),
    (new_agent::LABEL_NAME, "名称"),
    (new_agent::REQUIRED_NAME, "请输入名称。"),
    (new_agent::LABEL_DAEMON_URL, "守护进程地址"),
    (new_agent::REQUIRED_DAEMON_URL, "请输入守护进程地址。"),
    (new_agent::LABEL_TYPE, "类型"),
    (new_agent::REQUIRED_TYPE, "请选择类型。"),
    (new_agent::LABEL_CREDENTIAL_TYPE, "凭证类型"),
    (new_agent::REQUIRED_CREDENTIAL_TYPE, "请选择凭证类型。"),
    (new_agent::LABEL_CERTIFICATE_CONTENT, "证书内容"),
    (new_agent::REQUIRED_CERTIFICATE_CONTENT, "请输入证书内容。"),
    (new_agent::LABEL_CERTIFICATE_KEY, "证书密钥"),
    (new_agent::REQUIRED_CERTIFICATE_KEY, "请输入证书密钥。"),
    (new_agent::LABEL_CONFIGURATION_CONTENT, "配置内容"),
    (new_agent::REQUIRED_CONFIGURATION_CONTENT, "请输入配置内容。"),
    (new_agent::LABEL_USERNAME, "用户名"),
    (new_agent::REQUIRED_USERNAME, "请输入用户名。"),
    (new_agent::LABEL_PASSWORD, "密码"),
    (new_agent::REQUIRED_PASSWORD, "请输入密码。"),
    (new_agent::LABEL_EXTRA_PARAMETERS, "额外参数"),
    (new_agent::LABEL_USE_SSL, "启用 SSL 验证"),
    (new_agent::LABEL_SSL_CA, "SSL CA"),
    (new_agent::REQUIRED_SSL_CA, "请输入 SSL CA 证书。"),
    (new_agent::LABEL_LOG_LEVEL, "日志级别"),
    (new_agent::REQUIRED_LOG_LEVEL, "请选择日志级别。"),
    (new_agent::LABEL_SCHEDULABLE, "可调度"),
    (new_agent::LABEL_CAPACITY, "容量"),
    (new_agent::REQUIRED_CAPACITY, "请输入容量。"),
    (new_agent::LABEL_NFS_SERVER, "NFS 服务器地址"),
    (new_agent::REQUIRED_NFS_SERVER, "请输入 NFS 服务器地址。"),
];

pub(super) const OPERATOR_CHAINCODE: &[(&str, &str)] = &[
    (chaincode::TITLE, "链码管理"),
    (chaincode::TABLE_HEADER_NAME, "名称"),
    (chaincode::TABLE_HEADER_VERSION, "版本"),
    (chaincode::TABLE_HEADER_LANGUAGE, "语言"),
    (chaincode::TABLE_HEADER_TIME, "时间"),
    (chaincode::TABLE_HEADER_MD5, "MD5"),
    (chaincode::TABLE_OPERATE_INSTALL, "安装"),
    (chaincode::TABLE_OPERATE_DELETE, "删除"),
    (chaincode::CREATE_HEADER_TITLE, "上传链码"),
    (chaincode::CREATE_NAME, "名称"),
    (chaincode::CREATE_CHECK_NAME, "请输入链码名称"),
    (chaincode::CREATE_VERSION, "版本"),
    (chaincode::CREATE_CHECK_VERSION, "请输入链码版本"),
    (chaincode::CREATE_LANGUAGE, "语言"),
    (chaincode::CREATE_CHECK_LANGUAGE, "请选择语言"),
    (chaincode::CREATE_FAIL, "上传链码失败"),
    (chaincode::CREATE_SUCCESS, "上传链码成功"),
    (chaincode::CREATE_MD5, "md5"),
    (chaincode::CREATE_CHECK_MD5, "请输入md5"),
    (chaincode::CREATE_FILE, "文件"),
    (chaincode::CREATE_FILE_SELECT, "请选择链码文件"),
];
