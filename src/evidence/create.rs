use super::envelope::{Envelope, Statement};
use super::subject::EvidenceSubject;
use crate::error::{CliError, Result};
use crate::platform::{ArtifactoryService, EvidenceService, MetadataService};
use chrono::DateTime;
use ed25519_dalek::SigningKey;
use serde_json::Value;
use tracing::{debug, info};

const BUILD_INFO_REPO_SUFFIX: &str = "build-info";
const DEFAULT_BUILD_INFO_PROJECT: &str = "artifactory";
const BUILD_STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// The platform services evidence creation talks to.
pub struct EvidenceServices<'a> {
    pub artifactory: &'a dyn ArtifactoryService,
    pub evidence: &'a dyn EvidenceService,
    pub metadata: &'a dyn MetadataService,
}

pub struct CreateEvidenceRequest {
    pub subject: EvidenceSubject,
    pub predicate: Value,
    pub predicate_type: String,
    pub markdown: Option<String>,
    pub key: SigningKey,
    pub key_alias: String,
    pub created_by: Option<String>,
}

/// Attach signed evidence to the request's subject and return the service's answer.
pub async fn create_evidence(
    services: &EvidenceServices<'_>,
    request: &CreateEvidenceRequest,
) -> Result<Value> {
    let (subject_path, sha256) = resolve_subject_path(services, &request.subject).await?;
    debug!("evidence subject {} ({})", subject_path, sha256);

    let statement = Statement::new(
        request.predicate.clone(),
        &request.predicate_type,
        request.created_by.as_deref(),
    )
    .with_subject(&sha256)
    .with_markdown(request.markdown.clone());
    let envelope = Envelope::sign_statement(&statement, &request.key, &request.key_alias)?;

    let body = serde_json::to_vec(&envelope)?;
    let resp = services.evidence.upload_evidence(&subject_path, &body).await?;
    info!("evidence created for {} '{}'", request.subject.kind(), subject_path);
    Ok(resp)
}

/// Subject path in Artifactory and its SHA-256.
pub async fn resolve_subject_path(
    services: &EvidenceServices<'_>,
    subject: &EvidenceSubject,
) -> Result<(String, String)> {
    let path = match subject {
        EvidenceSubject::RepoPath {
            path,
            sha256: Some(sha256),
        } => return Ok((path.clone(), sha256.clone())),
        EvidenceSubject::RepoPath { path, sha256: None } => path.clone(),
        EvidenceSubject::ReleaseBundle(details) => details.manifest_path(),
        EvidenceSubject::Build {
            name,
            number,
            project,
        } => {
            let build_info = services.artifactory.build_info(name, number, project).await?;
            build_info_path(name, number, project, &build_info)?
        }
        EvidenceSubject::Package {
            name,
            version,
            repo_name,
            ..
        } => {
            let details = services.artifactory.repository_details(repo_name).await?;
            let package_type = details
                .get("packageType")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    CliError::Validation(format!(
                        "unable to determine the package type of repository '{repo_name}'"
                    ))
                })?;
            let resp = services
                .metadata
                .graphql(&lead_artifact_query(package_type, name, version, repo_name))
                .await?;
            let lead = lead_artifact_path(&resp, repo_name).ok_or_else(|| {
                CliError::Validation(format!(
                    "no lead artifact found for package {name}:{version} in repository '{repo_name}'"
                ))
            })?;
            format!("{repo_name}/{lead}")
        }
    };
    let sha256 = services.artifactory.file_sha256(&path).await?;
    Ok((path, sha256))
}

fn build_info_repo(project: &str) -> String {
    let prefix = if project.is_empty() {
        DEFAULT_BUILD_INFO_PROJECT
    } else {
        project
    };
    format!("{prefix}-{BUILD_INFO_REPO_SUFFIX}")
}

/// `{project}-build-info/{name}/{number}-{startedMillis}.json`
pub fn build_info_path(
    name: &str,
    number: &str,
    project: &str,
    build_info: &Value,
) -> Result<String> {
    let started = build_info
        .pointer("/buildInfo/started")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            CliError::Validation(format!("build info for {name}/{number} has no start time"))
        })?;
    let started = DateTime::parse_from_str(started, BUILD_STARTED_FORMAT).map_err(|e| {
        CliError::Validation(format!("invalid build start time '{started}': {e}"))
    })?;
    Ok(format!(
        "{}/{name}/{number}-{}.json",
        build_info_repo(project),
        started.timestamp_millis()
    ))
}

pub fn lead_artifact_query(package_type: &str, name: &str, version: &str, repo: &str) -> String {
    format!(
        r#"{{versions(filter: {{packageId: "{package_type}://{name}", name: "{version}", repositoriesIn: [{{name: "{repo}"}}]}}) {{ edges {{ node {{ repos {{ name leadFilePath }} }} }} }} }}"#
    )
}

fn lead_artifact_path(resp: &Value, repo: &str) -> Option<String> {
    resp.pointer("/data/versions/edges")?
        .as_array()?
        .iter()
        .filter_map(|edge| edge.pointer("/node/repos")?.as_array())
        .flatten()
        .find(|r| r.get("name").and_then(Value::as_str) == Some(repo))
        .and_then(|r| r.get("leadFilePath")?.as_str())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}
