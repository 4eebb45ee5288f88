//! Release bundle (v2) commands and the paths derived from a bundle's identity.

use crate::constants::{MIN_LIFECYCLE_VERSION, MIN_MULTI_SOURCE_AND_PACKAGES_VERSION};
use crate::error::{CliError, Result};
use crate::platform::{ArtifactoryService, LifecycleService, PromotionQuery};
use crate::version::{validate_minimum_version, ARTIFACTORY};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;
use tracing::{debug, info};

pub const RELEASE_BUNDLES_V2: &str = "release-bundles-v2";
pub const MANIFEST_NAME: &str = "release-bundle.json.evd";

/// Repository holding release bundle manifests for `project`.
pub fn repo_key(project: &str) -> String {
    if project.is_empty() || project == "default" {
        RELEASE_BUNDLES_V2.to_string()
    } else {
        format!("{project}-{RELEASE_BUNDLES_V2}")
    }
}

pub fn manifest_path(project: &str, name: &str, version: &str) -> String {
    format!("{}/{name}/{version}/{MANIFEST_NAME}", repo_key(project))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseBundleDetails {
    #[serde(rename = "release_bundle_name")]
    pub name: String,
    #[serde(rename = "release_bundle_version")]
    pub version: String,
    #[serde(skip)]
    pub project_key: String,
}

impl ReleaseBundleDetails {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Self {
        ReleaseBundleDetails {
            name: name.into(),
            version: version.into(),
            project_key: project_key.into(),
        }
    }

    pub fn manifest_path(&self) -> String {
        manifest_path(&self.project_key, &self.name, &self.version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Builds,
    ReleaseBundles,
    Artifacts,
    Packages,
}

/// One entry of a source spec: a type tag plus the type's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseBundleSource {
    #[serde(alias = "sourceType")]
    pub source_type: SourceType,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub sources: Vec<ReleaseBundleSource>,
}

impl SourceSpec {
    pub fn parse(content: &str) -> Result<Self> {
        let spec: SourceSpec = serde_json::from_str(content)?;
        if spec.sources.is_empty() {
            return Err(CliError::Validation(
                "the source spec must contain at least one source".into(),
            ));
        }
        Ok(spec)
    }

    fn source_types(&self) -> BTreeSet<SourceType> {
        self.sources.iter().map(|s| s.source_type).collect()
    }

    /// Mixed source types and package sources need the multi-source API.
    pub fn needs_multi_source(&self) -> bool {
        self.source_types().len() > 1 || self.source_types().contains(&SourceType::Packages)
    }
}

/// Request body for release bundle creation.
///
/// Single-type specs use the `source_type`/`source` form older platforms understand;
/// mixed specs use the `sources` array.
pub fn create_body(details: &ReleaseBundleDetails, spec: &SourceSpec) -> Result<Value> {
    let mut body = serde_json::to_value(details)?;
    let fields = body
        .as_object_mut()
        .ok_or_else(|| CliError::Validation("invalid release bundle details".into()))?;

    if spec.needs_multi_source() {
        fields.insert("sources".into(), serde_json::to_value(&spec.sources)?);
        return Ok(body);
    }

    let mut merged = Map::new();
    for source in &spec.sources {
        for (name, value) in &source.content {
            match (merged.get_mut(name), value) {
                (Some(Value::Array(existing)), Value::Array(more)) => {
                    existing.extend(more.iter().cloned())
                }
                _ => {
                    merged.insert(name.clone(), value.clone());
                }
            }
        }
    }
    let source_type = spec.sources[0].source_type;
    fields.insert("source_type".into(), serde_json::to_value(source_type)?);
    fields.insert("source".into(), Value::Object(merged));
    Ok(body)
}

async fn validate_artifactory_version(
    client: &dyn ArtifactoryService,
    feature: &str,
    required: &str,
) -> Result<()> {
    let version = client.version().await?;
    validate_minimum_version(ARTIFACTORY, feature, &version, required)
}

pub async fn validate_lifecycle_supported(client: &dyn ArtifactoryService) -> Result<()> {
    validate_artifactory_version(client, "release bundle lifecycle", MIN_LIFECYCLE_VERSION).await
}

pub struct CreateOptions<'a> {
    pub is_async: bool,
    pub signing_key: Option<&'a str>,
}

pub async fn create_release_bundle(
    artifactory: &dyn ArtifactoryService,
    lifecycle: &dyn LifecycleService,
    details: &ReleaseBundleDetails,
    spec: &SourceSpec,
    options: CreateOptions<'_>,
) -> Result<Value> {
    validate_lifecycle_supported(artifactory).await?;
    if spec.needs_multi_source() {
        validate_artifactory_version(
            artifactory,
            "release bundle creation from multiple source types or packages",
            MIN_MULTI_SOURCE_AND_PACKAGES_VERSION,
        )
        .await?;
    }

    let body = create_body(details, spec)?;
    debug!("creating release bundle {}/{}", details.name, details.version);
    let resp = lifecycle
        .create_release_bundle(&body, &details.project_key, options.is_async, options.signing_key)
        .await?;
    info!("release bundle {}/{} created", details.name, details.version);
    Ok(resp)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country_codes: Vec<String>,
}

impl DistributionRule {
    pub fn is_empty(&self) -> bool {
        self.site_name.is_empty() && self.city_name.is_empty() && self.country_codes.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRules {
    #[serde(default)]
    pub distribution_rules: Vec<DistributionRule>,
}

/// Distribution targets; absent or empty rules mean every edge.
pub fn aggregated_dist_rules(rules: Option<&DistributionRules>) -> Vec<DistributionRule> {
    match rules {
        Some(r) if !is_rules_empty(r) => r.distribution_rules.clone(),
        _ => vec![DistributionRule {
            site_name: "*".into(),
            ..Default::default()
        }],
    }
}

fn is_rules_empty(rules: &DistributionRules) -> bool {
    match rules.distribution_rules.as_slice() {
        [] => true,
        [only] => only.is_empty(),
        _ => false,
    }
}

pub struct DistributeOptions {
    pub dry_run: bool,
    pub auto_create_repo: bool,
}

pub async fn distribute_release_bundle(
    artifactory: &dyn ArtifactoryService,
    lifecycle: &dyn LifecycleService,
    details: &ReleaseBundleDetails,
    rules: Option<&DistributionRules>,
    options: DistributeOptions,
) -> Result<Value> {
    validate_lifecycle_supported(artifactory).await?;

    let body = json!({
        "dry_run": options.dry_run,
        "auto_create_missing_repositories": options.auto_create_repo,
        "distribution_rules": aggregated_dist_rules(rules),
    });
    debug!("distributing release bundle {}/{}", details.name, details.version);
    let resp = lifecycle
        .distribute_release_bundle(&details.name, &details.version, &details.project_key, &body)
        .await?;
    info!(
        "release bundle {}/{} {}",
        details.name,
        details.version,
        if options.dry_run { "distribution dry run completed" } else { "distributed" }
    );
    Ok(resp)
}

/// How artifacts reach the target environment's repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromotionType {
    #[default]
    Copy,
    Move,
}

impl PromotionType {
    pub fn as_str(self) -> &'static str {
        match self {
            PromotionType::Copy => "copy",
            PromotionType::Move => "move",
        }
    }
}

/// Repository keys from a `;` separated list, e.g. `"dev-local;qa-local"`.
pub fn split_repos(list: Option<&str>) -> Vec<String> {
    list.unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromotionTarget {
    pub environment: String,
    #[serde(rename = "included_repository_keys", skip_serializing_if = "Vec::is_empty")]
    pub include_repos: Vec<String>,
    #[serde(rename = "excluded_repository_keys", skip_serializing_if = "Vec::is_empty")]
    pub exclude_repos: Vec<String>,
}

pub struct PromoteOptions<'a> {
    pub is_async: bool,
    pub promotion_type: PromotionType,
    pub signing_key: Option<&'a str>,
}

pub async fn promote_release_bundle(
    artifactory: &dyn ArtifactoryService,
    lifecycle: &dyn LifecycleService,
    details: &ReleaseBundleDetails,
    target: &PromotionTarget,
    options: PromoteOptions<'_>,
) -> Result<Value> {
    if target.environment.trim().is_empty() {
        return Err(CliError::Validation(
            "a target environment is mandatory for promotion".into(),
        ));
    }
    validate_lifecycle_supported(artifactory).await?;

    let body = serde_json::to_value(target)?;
    let query = PromotionQuery {
        project: details.project_key.clone(),
        is_async: options.is_async,
        operation: options.promotion_type.as_str().to_string(),
        signing_key: options.signing_key.map(str::to_string),
    };
    debug!(
        "promoting release bundle {}/{} to {}",
        details.name, details.version, target.environment
    );
    let resp = lifecycle
        .promote_release_bundle(&details.name, &details.version, &body, &query)
        .await?;
    info!(
        "release bundle {}/{} promoted to {}",
        details.name, details.version, target.environment
    );
    Ok(resp)
}
