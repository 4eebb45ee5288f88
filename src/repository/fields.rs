//! Known template fields and how their values are coerced.
//!
//! Every field a repository template may carry is listed in [`FIELDS`] together with the
//! single coercion it goes through before the configuration is dispatched.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const KEY: &str = "key";
pub const RCLASS: &str = "rclass";
pub const PACKAGE_TYPE: &str = "packageType";
pub const MANDATORY_URL: &str = "mandatoryUrl";
pub const URL: &str = "url";
pub const DESCRIPTION: &str = "description";
pub const NOTES: &str = "notes";
pub const INCLUDE_PATTERNS: &str = "includesPattern";
pub const EXCLUDE_PATTERNS: &str = "excludesPattern";
pub const REPO_LAYOUT_REF: &str = "repoLayoutRef";
pub const PROJECT_KEY: &str = "projectKey";
// The repository schema holds an array, but only one environment is allowed in practice.
pub const ENVIRONMENTS: &str = "environments";

pub const HANDLE_RELEASES: &str = "handleReleases";
pub const HANDLE_SNAPSHOTS: &str = "handleSnapshots";
pub const MAX_UNIQUE_SNAPSHOTS: &str = "maxUniqueSnapshots";
pub const SUPPRESS_POM_CONSISTENCY_CHECKS: &str = "suppressPomConsistencyChecks";
pub const BLACKED_OUT: &str = "blackedOut";
pub const DOWNLOAD_REDIRECT: &str = "downloadRedirect";
pub const PRIORITY_RESOLUTION: &str = "priorityResolution";
pub const CDN_REDIRECT: &str = "cdnRedirect";
pub const BLOCK_PUSHING_SCHEMA1: &str = "blockPushingSchema1";
pub const DEBIAN_TRIVIAL_LAYOUT: &str = "debianTrivialLayout";
pub const EXTERNAL_DEPENDENCIES_ENABLED: &str = "externalDependenciesEnabled";
pub const EXTERNAL_DEPENDENCIES_PATTERNS: &str = "externalDependenciesPatterns";
pub const CHECKSUM_POLICY_TYPE: &str = "checksumPolicyType";
pub const MAX_UNIQUE_TAGS: &str = "maxUniqueTags";
pub const SNAPSHOT_VERSION_BEHAVIOR: &str = "snapshotVersionBehavior";
pub const XRAY_INDEX: &str = "xrayIndex";
pub const PROPERTY_SETS: &str = "propertySets";
pub const ARCHIVE_BROWSING_ENABLED: &str = "archiveBrowsingEnabled";
pub const CALCULATE_YUM_METADATA: &str = "calculateYumMetadata";
pub const YUM_ROOT_DEPTH: &str = "yumRootDepth";
pub const DOCKER_API_VERSION: &str = "dockerApiVersion";
pub const ENABLE_FILE_LISTS_INDEXING: &str = "enableFileListsIndexing";
pub const OPTIONAL_INDEX_COMPRESSION_FORMATS: &str = "optionalIndexCompressionFormats";

pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const PROXY: &str = "proxy";
pub const REMOTE_REPO_CHECKSUM_POLICY_TYPE: &str = "remoteRepoChecksumPolicyType";
pub const HARD_FAIL: &str = "hardFail";
pub const OFFLINE: &str = "offline";
pub const STORE_ARTIFACTS_LOCALLY: &str = "storeArtifactsLocally";
pub const SOCKET_TIMEOUT_MILLIS: &str = "socketTimeoutMillis";
pub const LOCAL_ADDRESS: &str = "localAddress";
pub const RETRIEVAL_CACHE_PERIOD_SECS: &str = "retrievalCachePeriodSecs";
pub const FAILED_RETRIEVAL_CACHE_PERIOD_SECS: &str = "failedRetrievalCachePeriodSecs";
pub const MISSED_RETRIEVAL_CACHE_PERIOD_SECS: &str = "missedRetrievalCachePeriodSecs";
pub const UNUSED_ARTIFACTS_CLEANUP_ENABLED: &str = "unusedArtifactsCleanupEnabled";
pub const UNUSED_ARTIFACTS_CLEANUP_PERIOD_HOURS: &str = "unusedArtifactsCleanupPeriodHours";
pub const ASSUMED_OFFLINE_PERIOD_SECS: &str = "assumedOfflinePeriodSecs";
pub const FETCH_JARS_EAGERLY: &str = "fetchJarsEagerly";
pub const FETCH_SOURCES_EAGERLY: &str = "fetchSourcesEagerly";
pub const SHARE_CONFIGURATION: &str = "shareConfiguration";
pub const SYNCHRONIZE_PROPERTIES: &str = "synchronizeProperties";
pub const BLOCK_MISMATCHING_MIME_TYPES: &str = "blockMismatchingMimeTypes";
pub const ALLOW_ANY_HOST_AUTH: &str = "allowAnyHostAuth";
pub const ENABLE_COOKIE_MANAGEMENT: &str = "enableCookieManagement";
pub const BOWER_REGISTRY_URL: &str = "bowerRegistryUrl";
pub const COMPOSER_REGISTRY_URL: &str = "composerRegistryUrl";
pub const PYPI_REGISTRY_URL: &str = "pyPIRegistryUrl";
pub const VCS_TYPE: &str = "vcsType";
pub const VCS_GIT_PROVIDER: &str = "vcsGitProvider";
pub const VCS_GIT_DOWNLOAD_URL: &str = "vcsGitDownloadUrl";
pub const BYPASS_HEAD_REQUESTS: &str = "bypassHeadRequests";
pub const CLIENT_TLS_CERTIFICATE: &str = "clientTlsCertificate";
pub const FEED_CONTEXT_PATH: &str = "feedContextPath";
pub const DOWNLOAD_CONTEXT_PATH: &str = "downloadContextPath";
pub const V3_FEED_URL: &str = "v3FeedUrl";
pub const CONTENT_SYNCHRONISATION: &str = "contentSynchronisation";
pub const LIST_REMOTE_FOLDER_ITEMS: &str = "listRemoteFolderItems";
pub const REJECT_INVALID_JARS: &str = "rejectInvalidJars";
pub const PODS_SPECS_REPO_URL: &str = "podsSpecsRepoUrl";
pub const ENABLE_TOKEN_AUTHENTICATION: &str = "enableTokenAuthentication";

pub const REPOSITORIES: &str = "repositories";
pub const ARTIFACTORY_REQUESTS_CAN_RETRIEVE_REMOTE_ARTIFACTS: &str =
    "artifactoryRequestsCanRetrieveRemoteArtifacts";
pub const KEY_PAIR: &str = "keyPair";
pub const POM_REPOSITORY_REFERENCES_CLEANUP_POLICY: &str = "pomRepositoryReferencesCleanupPolicy";
pub const DEFAULT_DEPLOYMENT_REPO: &str = "defaultDeploymentRepo";
pub const FORCE_MAVEN_AUTHENTICATION: &str = "forceMavenAuthentication";
pub const FORCE_NUGET_AUTHENTICATION: &str = "forceNugetAuthentication";
pub const EXTERNAL_DEPENDENCIES_REMOTE_REPO: &str = "externalDependenciesRemoteRepo";

/// The coercion a field's raw value goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Bool,
    Int,
    StringList,
    ContentSynchronisation,
}

/// Every supported template field, each with exactly one coercion.
pub const FIELDS: &[(&str, FieldKind)] = &[
    (KEY, FieldKind::String),
    (RCLASS, FieldKind::String),
    (PACKAGE_TYPE, FieldKind::String),
    (MANDATORY_URL, FieldKind::String),
    (URL, FieldKind::String),
    (DESCRIPTION, FieldKind::String),
    (NOTES, FieldKind::String),
    (INCLUDE_PATTERNS, FieldKind::String),
    (EXCLUDE_PATTERNS, FieldKind::String),
    (REPO_LAYOUT_REF, FieldKind::String),
    (PROJECT_KEY, FieldKind::String),
    (ENVIRONMENTS, FieldKind::StringList),
    (HANDLE_RELEASES, FieldKind::Bool),
    (HANDLE_SNAPSHOTS, FieldKind::Bool),
    (MAX_UNIQUE_SNAPSHOTS, FieldKind::Int),
    (SUPPRESS_POM_CONSISTENCY_CHECKS, FieldKind::Bool),
    (BLACKED_OUT, FieldKind::Bool),
    (DOWNLOAD_REDIRECT, FieldKind::Bool),
    (PRIORITY_RESOLUTION, FieldKind::Bool),
    (CDN_REDIRECT, FieldKind::Bool),
    (BLOCK_PUSHING_SCHEMA1, FieldKind::Bool),
    (DEBIAN_TRIVIAL_LAYOUT, FieldKind::Bool),
    (EXTERNAL_DEPENDENCIES_ENABLED, FieldKind::Bool),
    (EXTERNAL_DEPENDENCIES_PATTERNS, FieldKind::StringList),
    (CHECKSUM_POLICY_TYPE, FieldKind::String),
    (MAX_UNIQUE_TAGS, FieldKind::Int),
    (SNAPSHOT_VERSION_BEHAVIOR, FieldKind::String),
    (XRAY_INDEX, FieldKind::Bool),
    (PROPERTY_SETS, FieldKind::StringList),
    (ARCHIVE_BROWSING_ENABLED, FieldKind::Bool),
    (CALCULATE_YUM_METADATA, FieldKind::Bool),
    (YUM_ROOT_DEPTH, FieldKind::Int),
    (DOCKER_API_VERSION, FieldKind::String),
    (ENABLE_FILE_LISTS_INDEXING, FieldKind::Bool),
    (OPTIONAL_INDEX_COMPRESSION_FORMATS, FieldKind::StringList),
    (USERNAME, FieldKind::String),
    (PASSWORD, FieldKind::String),
    (PROXY, FieldKind::String),
    (REMOTE_REPO_CHECKSUM_POLICY_TYPE, FieldKind::String),
    (HARD_FAIL, FieldKind::Bool),
    (OFFLINE, FieldKind::Bool),
    (STORE_ARTIFACTS_LOCALLY, FieldKind::Bool),
    (SOCKET_TIMEOUT_MILLIS, FieldKind::Int),
    (LOCAL_ADDRESS, FieldKind::String),
    (RETRIEVAL_CACHE_PERIOD_SECS, FieldKind::Int),
    (FAILED_RETRIEVAL_CACHE_PERIOD_SECS, FieldKind::Int),
    (MISSED_RETRIEVAL_CACHE_PERIOD_SECS, FieldKind::Int),
    (UNUSED_ARTIFACTS_CLEANUP_ENABLED, FieldKind::Bool),
    (UNUSED_ARTIFACTS_CLEANUP_PERIOD_HOURS, FieldKind::Int),
    (ASSUMED_OFFLINE_PERIOD_SECS, FieldKind::Int),
    (FETCH_JARS_EAGERLY, FieldKind::Bool),
    (FETCH_SOURCES_EAGERLY, FieldKind::Bool),
    (SHARE_CONFIGURATION, FieldKind::Bool),
    (SYNCHRONIZE_PROPERTIES, FieldKind::Bool),
    (BLOCK_MISMATCHING_MIME_TYPES, FieldKind::Bool),
    (ALLOW_ANY_HOST_AUTH, FieldKind::Bool),
    (ENABLE_COOKIE_MANAGEMENT, FieldKind::Bool),
    (BOWER_REGISTRY_URL, FieldKind::String),
    (COMPOSER_REGISTRY_URL, FieldKind::String),
    (PYPI_REGISTRY_URL, FieldKind::String),
    (VCS_TYPE, FieldKind::String),
    (VCS_GIT_PROVIDER, FieldKind::String),
    (VCS_GIT_DOWNLOAD_URL, FieldKind::String),
    (BYPASS_HEAD_REQUESTS, FieldKind::Bool),
    (CLIENT_TLS_CERTIFICATE, FieldKind::String),
    (FEED_CONTEXT_PATH, FieldKind::String),
    (DOWNLOAD_CONTEXT_PATH, FieldKind::String),
    (V3_FEED_URL, FieldKind::String),
    (CONTENT_SYNCHRONISATION, FieldKind::ContentSynchronisation),
    (LIST_REMOTE_FOLDER_ITEMS, FieldKind::Bool),
    (REJECT_INVALID_JARS, FieldKind::Bool),
    (PODS_SPECS_REPO_URL, FieldKind::String),
    (ENABLE_TOKEN_AUTHENTICATION, FieldKind::Bool),
    (REPOSITORIES, FieldKind::StringList),
    (ARTIFACTORY_REQUESTS_CAN_RETRIEVE_REMOTE_ARTIFACTS, FieldKind::Bool),
    (KEY_PAIR, FieldKind::String),
    (POM_REPOSITORY_REFERENCES_CLEANUP_POLICY, FieldKind::String),
    (DEFAULT_DEPLOYMENT_REPO, FieldKind::String),
    (FORCE_MAVEN_AUTHENTICATION, FieldKind::Bool),
    (FORCE_NUGET_AUTHENTICATION, FieldKind::Bool),
    (EXTERNAL_DEPENDENCIES_REMOTE_REPO, FieldKind::String),
];

pub fn kind_of(field: &str) -> Option<FieldKind> {
    FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, kind)| *kind)
}

/// Remote content synchronisation settings, decoded from `enabled,statistics,properties,source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSynchronisation {
    pub enabled: bool,
    pub statistics: SyncToggle,
    pub properties: SyncToggle,
    pub source: SyncSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncToggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSource {
    pub origin_absence_detection: bool,
}

impl ContentSynchronisation {
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        let &[enabled, statistics, properties, source] = parts.as_slice() else {
            return Err(coercion_error(
                CONTENT_SYNCHRONISATION,
                raw,
                "expected four comma-separated booleans",
            ));
        };
        let flag = |v: &str| parse_bool(CONTENT_SYNCHRONISATION, v);
        Ok(ContentSynchronisation {
            enabled: flag(enabled)?,
            statistics: SyncToggle {
                enabled: flag(statistics)?,
            },
            properties: SyncToggle {
                enabled: flag(properties)?,
            },
            source: SyncSource {
                origin_absence_detection: flag(source)?,
            },
        })
    }
}

/// Typed value produced by a coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    Int(i64),
    StringList(Vec<String>),
    ContentSynchronisation(ContentSynchronisation),
}

impl FieldValue {
    pub fn into_json(self) -> Value {
        match self {
            FieldValue::String(s) => Value::String(s),
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Int(i) => Value::from(i),
            FieldValue::StringList(items) => {
                Value::Array(items.into_iter().map(Value::String).collect())
            }
            FieldValue::ContentSynchronisation(cs) => serde_json::json!(cs),
        }
    }
}

impl FieldKind {
    pub fn coerce(self, field: &str, raw: &str) -> Result<FieldValue> {
        match self {
            FieldKind::String => Ok(FieldValue::String(raw.to_string())),
            FieldKind::Bool => parse_bool(field, raw).map(FieldValue::Bool),
            FieldKind::Int => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|e| coercion_error(field, raw, &e.to_string())),
            FieldKind::StringList => Ok(FieldValue::StringList(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            FieldKind::ContentSynchronisation => {
                ContentSynchronisation::parse(raw).map(FieldValue::ContentSynchronisation)
            }
        }
    }
}

/// Accepts the same spellings as Go's `strconv.ParseBool`, which templates were written against.
fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(coercion_error(field, raw, "expected a boolean")),
    }
}

fn coercion_error(field: &str, raw: &str, reason: &str) -> CliError {
    CliError::Coercion {
        field: field.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

/// Check that `field` is known and that its value is usable before coercion.
pub fn validate(field: &str, value: &Value) -> Result<()> {
    if kind_of(field).is_none() {
        return Err(CliError::InvalidField {
            field: field.to_string(),
        });
    }
    match value {
        Value::Null => Err(CliError::Validation(format!(
            "template syntax error: the value for the key '{field}' is empty"
        ))),
        Value::String(s) if s.is_empty() => Err(CliError::Validation(format!(
            "template syntax error: the value for the key '{field}' is empty"
        ))),
        Value::Object(_) => Err(CliError::Validation(format!(
            "template syntax error: the value for the key '{field}' must be a scalar or a list"
        ))),
        Value::Array(items) if items.iter().any(|i| i.is_object() || i.is_array()) => {
            Err(CliError::Validation(format!(
                "template syntax error: the value for the key '{field}' must be a list of scalars"
            )))
        }
        _ => Ok(()),
    }
}

/// Render a template value in the textual form coercions consume.
pub fn raw_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(raw_value).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerce `raw` according to the field's registered kind and store it in `config`.
pub fn write(config: &mut Map<String, Value>, field: &str, raw: &str) -> Result<()> {
    let kind = kind_of(field).ok_or_else(|| CliError::InvalidField {
        field: field.to_string(),
    })?;
    let value = kind.coerce(field, raw)?;
    config.insert(field.to_string(), value.into_json());
    Ok(())
}
