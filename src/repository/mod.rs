//! Repository templates: loading, validation and create/update dispatch.
//!
//! A template holds one repository configuration or an array of them. A single
//! configuration is coerced field by field and submitted through its typed handler; an
//! array is submitted as one batch, which requires a recent enough Artifactory.

pub mod dispatch;
pub mod fields;
pub mod params;

use crate::config::expand_template_vars;
use crate::constants::{MIN_BATCH_CREATE_VERSION, MIN_BATCH_UPDATE_VERSION};
use crate::error::{CliError, Result};
use crate::platform::ArtifactoryService;
use crate::version::{validate_minimum_version, ARTIFACTORY};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

pub type RepositoryConfig = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    Single(RepositoryConfig),
    Multiple(Vec<RepositoryConfig>),
}

impl Template {
    /// Parse template text as JSON, falling back to YAML.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(content)?,
        };
        match value {
            Value::Object(config) => Ok(Template::Single(config)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(config) => Ok(config),
                    other => Err(CliError::Validation(format!(
                        "template array entries must be objects, found: {other}"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Template::Multiple),
            other => Err(CliError::Validation(format!(
                "unexpected repository configuration type: {other}"
            ))),
        }
    }

    pub fn configs(&self) -> Box<dyn Iterator<Item = &RepositoryConfig> + '_> {
        match self {
            Template::Single(config) => Box::new(std::iter::once(config)),
            Template::Multiple(configs) => Box::new(configs.iter()),
        }
    }
}

/// Read a template file, substituting `${name}` placeholders from `vars`.
pub fn load_template(path: &Path, vars: &HashMap<String, String>) -> Result<Template> {
    let content = std::fs::read_to_string(path)?;
    Template::parse(&expand_template_vars(&content, vars))
}

fn has_key(config: &RepositoryConfig) -> bool {
    match config.get(fields::KEY) {
        Some(Value::String(key)) => !key.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

/// Fail with every configuration that lacks a `key`, not only the first.
pub fn ensure_keys(template: &Template) -> Result<()> {
    let configs: Vec<String> = template
        .configs()
        .filter(|c| !has_key(c))
        .map(|c| Value::Object(c.clone()).to_string())
        .collect();
    if configs.is_empty() {
        Ok(())
    } else {
        Err(CliError::MissingKeys { configs })
    }
}

/// Create (`is_update == false`) or update the repositories described by `template`.
pub async fn perform_repo_cmd(
    client: &dyn ArtifactoryService,
    template: &Template,
    is_update: bool,
) -> Result<()> {
    ensure_keys(template)?;
    match template {
        Template::Single(config) => perform_single(client, config, is_update).await,
        Template::Multiple(configs) => perform_batch(client, configs, is_update).await,
    }
}

/// Validate and coerce every field through the registry.
pub fn coerce_config(config: &RepositoryConfig) -> Result<RepositoryConfig> {
    let mut typed = Map::new();
    for (field, value) in config {
        fields::validate(field, value)?;
        fields::write(&mut typed, field, &fields::raw_value(value))?;
    }
    // `mandatoryUrl` names a remote's `url`; an explicit `url` wins.
    if let Some(url) = typed.remove(fields::MANDATORY_URL) {
        typed.entry(fields::URL).or_insert(url);
    }
    Ok(typed)
}

fn discriminator<'a>(config: &'a RepositoryConfig, field: &str) -> Result<&'a str> {
    config
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| CliError::Validation(format!("'{field}' is missing in the configuration")))
}

async fn perform_single(
    client: &dyn ArtifactoryService,
    config: &RepositoryConfig,
    is_update: bool,
) -> Result<()> {
    let typed = coerce_config(config)?;
    let handler = dispatch::lookup(
        discriminator(&typed, fields::RCLASS)?,
        discriminator(&typed, fields::PACKAGE_TYPE)?,
    )?;
    let json = serde_json::to_vec(&typed)?;
    handler.handle(client, &json, is_update).await?;

    let key = typed.get(fields::KEY).and_then(Value::as_str).unwrap_or_default();
    info!(
        "{} repository '{}' {}",
        handler.rclass(),
        key,
        if is_update { "updated" } else { "created" }
    );
    Ok(())
}

async fn perform_batch(
    client: &dyn ArtifactoryService,
    configs: &[RepositoryConfig],
    is_update: bool,
) -> Result<()> {
    let (feature, required) = if is_update {
        ("bulk repository update", MIN_BATCH_UPDATE_VERSION)
    } else {
        ("bulk repository creation", MIN_BATCH_CREATE_VERSION)
    };
    let version = client.version().await?;
    validate_minimum_version(ARTIFACTORY, feature, &version, required)?;

    debug!("submitting {} repository configurations in one batch", configs.len());
    let body = serde_json::to_vec(configs)?;
    client.put_repositories_batch(&body, is_update).await?;
    info!(
        "{} repositories {}",
        configs.len(),
        if is_update { "updated" } else { "created" }
    );
    Ok(())
}
