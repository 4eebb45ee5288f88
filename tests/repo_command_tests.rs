mod common;

use common::{Call, FakePlatform};
use jfrog_cli_artifactory::config::parse_template_vars;
use jfrog_cli_artifactory::error::CliError;
use jfrog_cli_artifactory::repository::{load_template, perform_repo_cmd, Template};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn template(json: serde_json::Value) -> Template {
    Template::parse(&json.to_string()).unwrap()
}

fn two_repos() -> Template {
    template(json!([
        {"key": "npm-local", "rclass": "local", "packageType": "npm"},
        {"key": "npm-remote", "rclass": "remote", "packageType": "npm", "url": "https://registry.npmjs.org"}
    ]))
}

#[tokio::test]
async fn test_bulk_create_below_minimum_version_makes_no_batch_call() {
    let platform = FakePlatform::with_version("7.84.2");
    let err = perform_repo_cmd(&platform, &two_repos(), false)
        .await
        .unwrap_err();

    match err {
        CliError::UnsupportedVersion { required, actual, .. } => {
            assert_eq!(required, "7.84.3");
            assert_eq!(actual, "7.84.2");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(platform.calls(), vec![Call::Version]);
}

#[tokio::test]
async fn test_bulk_update_requires_newer_version_than_create() {
    let platform = FakePlatform::with_version("7.90.1");
    perform_repo_cmd(&platform, &two_repos(), false).await.unwrap();
    assert!(matches!(
        perform_repo_cmd(&platform, &two_repos(), true).await,
        Err(CliError::UnsupportedVersion { required, .. }) if required == "7.104.2"
    ));
}

#[tokio::test]
async fn test_bulk_update_sends_whole_array_once() {
    let platform = FakePlatform::with_version("7.104.2");
    perform_repo_cmd(&platform, &two_repos(), true).await.unwrap();

    let calls = platform.calls();
    assert_eq!(calls.len(), 2);
    match &calls[1] {
        Call::Batch { body, is_update } => {
            assert!(*is_update);
            assert_eq!(body.as_array().unwrap().len(), 2);
            assert_eq!(body[1]["key"], "npm-remote");
        }
        other => panic!("expected a batch call, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_key_lists_offending_configs() {
    let platform = FakePlatform::with_version("7.104.2");
    let t = template(json!([
        {"rclass": "local", "packageType": "maven", "description": "first"},
        {"key": "ok", "rclass": "local", "packageType": "maven"},
        {"key": "", "rclass": "local", "packageType": "go"}
    ]));
    let err = perform_repo_cmd(&platform, &t, false).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("'key' is missing in the following configs:"));
    assert!(msg.contains("\"description\":\"first\""));
    assert!(msg.contains("\"packageType\":\"go\""));
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_single_object_missing_key_fails() {
    let platform = FakePlatform::default();
    let t = template(json!({"rclass": "local", "packageType": "npm"}));
    assert!(matches!(
        perform_repo_cmd(&platform, &t, false).await,
        Err(CliError::MissingKeys { configs }) if configs.len() == 1 && configs[0].contains("npm")
    ));
}

#[tokio::test]
async fn test_single_create_from_yaml_template_with_vars() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("repo.yaml");
    fs::write(
        &path,
        "key: ${name}\nrclass: local\npackageType: maven\nhandleSnapshots: \"false\"\nmaxUniqueSnapshots: 5\nxrayIndex: true\nenvironments: DEV\n",
    )
    .unwrap();

    let vars = parse_template_vars("name=libs-snapshot-local").unwrap();
    let t = load_template(&path, &vars).unwrap();
    let platform = FakePlatform::default();
    perform_repo_cmd(&platform, &t, false).await.unwrap();

    assert_eq!(
        platform.calls(),
        vec![Call::PutRepository {
            key: "libs-snapshot-local".into(),
            body: json!({
                "key": "libs-snapshot-local",
                "rclass": "local",
                "packageType": "maven",
                "environments": ["DEV"],
                "xrayIndex": true,
                "handleSnapshots": false,
                "maxUniqueSnapshots": 5
            }),
            is_update: false,
        }]
    );
}

#[tokio::test]
async fn test_single_update_remote_with_content_synchronisation() {
    let platform = FakePlatform::default();
    let t = template(json!({
        "key": "generic-remote",
        "rclass": "remote",
        "packageType": "generic",
        "url": "https://edge.example.com/artifactory/generic",
        "contentSynchronisation": "true,false,true,false"
    }));
    perform_repo_cmd(&platform, &t, true).await.unwrap();

    match &platform.calls()[0] {
        Call::PutRepository { key, body, is_update } => {
            assert_eq!(key, "generic-remote");
            assert!(*is_update);
            assert_eq!(
                body["contentSynchronisation"],
                json!({
                    "enabled": true,
                    "statistics": {"enabled": false},
                    "properties": {"enabled": true},
                    "source": {"originAbsenceDetection": false}
                })
            );
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[tokio::test]
async fn test_single_unsupported_pair_is_rejected_before_any_call() {
    let platform = FakePlatform::default();
    let t = template(json!({"key": "v", "rclass": "virtual", "packageType": "vagrant"}));
    assert!(matches!(
        perform_repo_cmd(&platform, &t, false).await,
        Err(CliError::UnsupportedPackageType { rclass, package_type })
            if rclass == "virtual" && package_type == "vagrant"
    ));
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_single_bad_boolean_names_field_and_value() {
    let platform = FakePlatform::default();
    let t = template(json!({
        "key": "m", "rclass": "local", "packageType": "maven", "handleReleases": "maybe"
    }));
    let err = perform_repo_cmd(&platform, &t, false).await.unwrap_err();
    assert!(matches!(
        err,
        CliError::Coercion { ref field, ref value, .. }
            if field == "handleReleases" && value == "maybe"
    ));
}

#[tokio::test]
async fn test_single_remote_with_url_and_mandatory_url() {
    let platform = FakePlatform::with_version("7.90.0");
    let config = template(json!({
        "key": "npm-remote",
        "rclass": "remote",
        "packageType": "npm",
        "url": "https://registry.npmjs.org",
        "mandatoryUrl": "https://registry.npmjs.org"
    }));
    perform_repo_cmd(&platform, &config, false).await.unwrap();

    match &platform.calls()[..] {
        [Call::PutRepository { key, body, .. }] => {
            assert_eq!(key, "npm-remote");
            assert_eq!(body["url"], "https://registry.npmjs.org");
            assert!(body.get("mandatoryUrl").is_none());
        }
        other => panic!("unexpected calls {other:?}"),
    }
}
