// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading locale bundles from a resource directory

use operator_locales::export::{self, ExportFormat};
use operator_locales::loader;
use operator_locales::{Config, LoadError, LocaleCode, LocaleTable};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("relative path has a parent")).expect("mkdir");
    fs::write(path, content).expect("write resource");
}

fn dashboard_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "en-US/operatorAgent.js",
        "export default {\n  'app.operator.agent.title': 'Agent Management',\n  \
         'app.operator.agent.create.success': 'Create agent {name} success',\n};\n",
    );
    write(
        dir.path(),
        "en-US/operatorChaincode.json",
        r#"{"app.operator.chainCode.title": "Chaincode Management"}"#,
    );
    write(
        dir.path(),
        "zh-CN/operatorAgent.yaml",
        "app.operator.agent.title: 代理管理\napp.operator.agent.create.success: 创建代理 {name} 成功\n",
    );
    write(
        dir.path(),
        "zh-CN/operatorChaincode.js",
        "export default {\n  'app.operator.chainCode.title': '链码管理'\n};\n",
    );
    write(dir.path(), "README.md", "not a locale");
    write(dir.path(), "shared/operatorAgent.json", r#"{"ignored": "yes"}"#);
    write(dir.path(), "zh-CN/notes.txt", "ignored");
    dir
}

#[test]
fn loads_mixed_formats_per_locale() {
    let dir = dashboard_tree();
    let bundles = loader::load_dir(dir.path()).expect("load should succeed");
    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0].locale(), &LocaleCode::en_us());
    assert_eq!(bundles[0].len(), 3);
    assert_eq!(bundles[1].locale(), &LocaleCode::zh_cn());
    assert_eq!(bundles[1].len(), 3);

    let table = LocaleTable::builder()
        .bundles(bundles)
        .build()
        .expect("table should build");
    assert_eq!(
        table
            .resolve("zh-CN", "app.operator.chainCode.title")
            .expect("resolve"),
        "链码管理"
    );
}

#[test]
fn duplicate_key_across_feature_areas_is_rejected() {
    let dir = dashboard_tree();
    write(
        dir.path(),
        "en-US/operatorUser.json",
        r#"{"app.operator.agent.title": "Shadowed"}"#,
    );
    let err = loader::load_dir(dir.path()).expect_err("duplicate should fail");
    match err {
        LoadError::DuplicateKey { locale, key } => {
            assert_eq!(locale, "en-US");
            assert_eq!(key, "app.operator.agent.title");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn duplicate_key_within_a_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "en-US/operatorAgent.json",
        r#"{"app.operator.agent.type": "Type", "app.operator.agent.type": "Kind"}"#,
    );
    assert!(matches!(
        loader::load_dir(dir.path()),
        Err(LoadError::DuplicateKey { .. })
    ));
}

#[test]
fn backup_copies_of_locale_dirs_are_skipped() {
    let dir = dashboard_tree();
    write(
        dir.path(),
        "en-US.bak/operatorAgent.json",
        r#"{"app.operator.agent.title": "Agent Management (old)"}"#,
    );
    write(
        dir.path(),
        "zh-CN@old/operatorAgent.json",
        r#"{"app.operator.agent.title": "旧代理管理"}"#,
    );
    let bundles = loader::load_dir(dir.path()).expect("backups should be ignored");
    assert_eq!(bundles.len(), 2);
    assert_eq!(
        bundles[0].get("app.operator.agent.title").map(|t| t.source()),
        Some("Agent Management")
    );
    assert_eq!(
        bundles[1].get("app.operator.agent.title").map(|t| t.source()),
        Some("代理管理")
    );
}

#[test]
fn escaped_js_templates_load_decoded() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "zh-CN/operatorAgent.js",
        "export default {\n  'app.operator.agent.title': '\\u4ee3\\u7406\\r\\x21',\n};\n",
    );
    let bundles = loader::load_dir(dir.path()).expect("load");
    assert_eq!(
        bundles[0].get("app.operator.agent.title").map(|t| t.source()),
        Some("代理\r!")
    );
}

#[test]
fn malformed_resource_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "en-US/operatorAgent.json", r#"{"a": ["not", "a", "string"]}"#);
    let err = loader::load_dir(dir.path()).expect_err("parse should fail");
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("operatorAgent.json"));
}

#[test]
fn config_points_table_at_resources() {
    let dir = dashboard_tree();
    let config = Config {
        resources_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let table = config.build_table().expect("table should build");
    assert_eq!(table.locales().count(), 2);
    assert_eq!(
        table
            .format(
                "zh",
                "app.operator.agent.create.success",
                &[operator_locales::MessageArg::new("name", "peer0")]
            )
            .expect("format"),
        "创建代理 peer0 成功"
    );
}

#[test]
fn exported_js_reloads_to_the_same_bundle() {
    let table = LocaleTable::builtin().expect("builtin");
    let bundle = table.bundle("zh-CN").expect("zh-CN");
    let js = export::render(bundle, ExportFormat::Js).expect("render");

    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "zh-CN/operatorAll.js", &js);
    let reloaded = loader::load_dir(dir.path()).expect("reload");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(&reloaded[0], bundle);
    assert_eq!(export::fingerprint(&reloaded[0]), export::fingerprint(bundle));
}
