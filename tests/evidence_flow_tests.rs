mod common;

use common::{Call, FakePlatform};
use ed25519_dalek::SigningKey;
use jfrog_cli_artifactory::error::CliError;
use jfrog_cli_artifactory::evidence::envelope::{Envelope, Statement, PAYLOAD_TYPE};
use jfrog_cli_artifactory::evidence::{
    create_evidence, resolve_subject, CreateEvidenceRequest, EvidenceServices, EvidenceSubject,
    SubjectFlags,
};
use jfrog_cli_artifactory::lifecycle::ReleaseBundleDetails;
use serde_json::{json, Value};

fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[11u8; 32])
}

fn request(subject: EvidenceSubject) -> CreateEvidenceRequest {
    CreateEvidenceRequest {
        subject,
        predicate: json!({"scanner": "xray", "passed": true}),
        predicate_type: "https://jfrog.com/evidence/signature/v1".into(),
        markdown: None,
        key: signing_key(),
        key_alias: "ci-key".into(),
        created_by: Some("ci-bot".into()),
    }
}

async fn run(platform: &FakePlatform, subject: EvidenceSubject) -> (String, Envelope) {
    let services = EvidenceServices {
        artifactory: platform,
        evidence: platform,
        metadata: platform,
    };
    create_evidence(&services, &request(subject)).await.unwrap();
    platform
        .calls()
        .into_iter()
        .find_map(|c| match c {
            Call::UploadEvidence {
                subject_path,
                envelope,
            } => Some((subject_path, serde_json::from_value::<Envelope>(envelope).unwrap())),
            _ => None,
        })
        .expect("evidence was uploaded")
}

fn statement(envelope: &Envelope) -> Value {
    serde_json::from_slice(&base64::decode(&envelope.payload).unwrap()).unwrap()
}

#[tokio::test]
async fn test_repo_path_subject_reads_digest_from_storage() {
    let mut platform = FakePlatform::default();
    platform
        .checksums
        .insert("generic-local/app.tgz".into(), "aa11".into());

    let (path, envelope) = run(
        &platform,
        EvidenceSubject::RepoPath {
            path: "generic-local/app.tgz".into(),
            sha256: None,
        },
    )
    .await;

    assert_eq!(path, "generic-local/app.tgz");
    assert_eq!(envelope.payload_type, PAYLOAD_TYPE);
    assert_eq!(envelope.signatures[0].keyid, "ci-key");
    envelope.verify(&signing_key().verifying_key()).unwrap();

    let statement = statement(&envelope);
    assert_eq!(statement["subject"][0]["digest"]["sha256"], "aa11");
    assert_eq!(statement["predicate"]["scanner"], "xray");
    assert_eq!(statement["createdBy"], "ci-bot");
}

#[tokio::test]
async fn test_repo_path_with_explicit_digest_skips_storage() {
    let platform = FakePlatform::default();
    run(
        &platform,
        EvidenceSubject::RepoPath {
            path: "generic-local/app.tgz".into(),
            sha256: Some("bb22".into()),
        },
    )
    .await;
    assert!(!platform
        .calls()
        .iter()
        .any(|c| matches!(c, Call::FileSha256(_))));
}

#[tokio::test]
async fn test_release_bundle_subject_uses_manifest_path() {
    let mut platform = FakePlatform::default();
    let manifest = "proj-release-bundles-v2/rb1/1.0/release-bundle.json.evd";
    platform.checksums.insert(manifest.into(), "cc33".into());

    let (path, envelope) = run(
        &platform,
        EvidenceSubject::ReleaseBundle(ReleaseBundleDetails::new("rb1", "1.0", "proj")),
    )
    .await;
    assert_eq!(path, manifest);
    assert_eq!(statement(&envelope)["subject"][0]["digest"]["sha256"], "cc33");
}

#[tokio::test]
async fn test_build_subject_from_environment() {
    let subject = resolve_subject(&SubjectFlags::default(), |var| match var {
        "JFROG_CLI_BUILD_NAME" => Some("nightly".to_string()),
        "JFROG_CLI_BUILD_NUMBER" => Some("42".to_string()),
        _ => None,
    })
    .unwrap();

    let mut platform = FakePlatform::default();
    platform.build_info = json!({"buildInfo": {
        "name": "nightly",
        "number": "42",
        "started": "2024-03-01T10:00:00.123+0000"
    }});
    let build_path = "artifactory-build-info/nightly/42-1709287200123.json";
    platform.checksums.insert(build_path.into(), "dd44".into());

    let (path, _) = run(&platform, subject).await;
    assert_eq!(path, build_path);
    assert_eq!(
        platform.calls()[0],
        Call::BuildInfo {
            name: "nightly".into(),
            number: "42".into(),
            project: String::new(),
        }
    );
}

#[tokio::test]
async fn test_package_subject_uses_lead_artifact() {
    let mut platform = FakePlatform::default();
    platform
        .repositories
        .insert("npm-local".into(), json!({"key": "npm-local", "packageType": "npm"}));
    platform.graphql_response = json!({"data": {"versions": {"edges": [{"node": {"repos": [
        {"name": "npm-local", "leadFilePath": "lib/-/lib-1.2.3.tgz"}
    ]}}]}}});
    platform
        .checksums
        .insert("npm-local/lib/-/lib-1.2.3.tgz".into(), "ee55".into());

    let (path, _) = run(
        &platform,
        EvidenceSubject::Package {
            name: "lib".into(),
            version: "1.2.3".into(),
            repo_name: "npm-local".into(),
            project: String::new(),
        },
    )
    .await;
    assert_eq!(path, "npm-local/lib/-/lib-1.2.3.tgz");
    assert!(platform
        .calls()
        .iter()
        .any(|c| matches!(c, Call::Graphql(q) if q.contains("npm://lib"))));
}

#[tokio::test]
async fn test_package_without_lead_artifact_fails_before_upload() {
    let mut platform = FakePlatform::default();
    platform
        .repositories
        .insert("npm-local".into(), json!({"packageType": "npm"}));
    platform.graphql_response = json!({"data": {"versions": {"edges": []}}});

    let services = EvidenceServices {
        artifactory: &platform,
        evidence: &platform,
        metadata: &platform,
    };
    let err = create_evidence(
        &services,
        &request(EvidenceSubject::Package {
            name: "lib".into(),
            version: "9.9.9".into(),
            repo_name: "npm-local".into(),
            project: String::new(),
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::Validation(msg) if msg.contains("no lead artifact")));
    assert!(!platform
        .calls()
        .iter()
        .any(|c| matches!(c, Call::UploadEvidence { .. })));
}

#[test]
fn test_statement_round_trips_through_envelope() {
    let statement = Statement::new(json!({}), "t", None).with_subject("00");
    let envelope = Envelope::sign_statement(&statement, &signing_key(), "").unwrap();
    assert!(envelope.verify(&SigningKey::from_bytes(&[12u8; 32]).verifying_key()).is_err());
}
