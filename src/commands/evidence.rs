use crate::config::{server_details, Credentials, ServerDetails, ServerSelection};
use crate::constants::{KEY_ALIAS_ENV, SIGNING_KEY_ENV};
use crate::evidence::key::{load_key_argument, read_key};
use crate::evidence::{
    create_evidence, resolve_subject, CreateEvidenceRequest, EvidenceServices, SubjectFlags,
};
use crate::platform::PlatformClient;
use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use serde_json::Value;
use std::{env, fs};

#[derive(Args, Debug, Default)]
pub struct CreateEvidenceArgs {
    /// Path to the predicate JSON file
    #[arg(long)]
    pub predicate: Option<String>,
    /// Predicate type URI
    #[arg(long)]
    pub predicate_type: Option<String>,
    /// Path to a markdown file attached to the evidence
    #[arg(long)]
    pub markdown: Option<String>,
    /// Private key path or content [env: JFROG_CLI_SIGNING_KEY]
    #[arg(long)]
    pub key: Option<String>,
    /// Key alias recorded as the signature's key id [env: JFROG_CLI_KEY_ALIAS]
    #[arg(long)]
    pub key_alias: Option<String>,

    /// Artifact path in Artifactory, e.g. `generic-local/app.tgz`
    #[arg(long)]
    pub repo_path: Option<String>,
    /// SHA-256 of the artifact, skips the storage lookup
    #[arg(long)]
    pub subject_sha256: Option<String>,
    #[arg(long)]
    pub release_bundle: Option<String>,
    #[arg(long)]
    pub release_bundle_version: Option<String>,
    /// Build name [env: JFROG_CLI_BUILD_NAME]
    #[arg(long)]
    pub build_name: Option<String>,
    /// Build number [env: JFROG_CLI_BUILD_NUMBER]
    #[arg(long)]
    pub build_number: Option<String>,
    #[arg(long)]
    pub package_name: Option<String>,
    #[arg(long)]
    pub package_version: Option<String>,
    #[arg(long)]
    pub package_repo_name: Option<String>,
    /// Project key of the subject
    #[arg(long)]
    pub project: Option<String>,

    #[command(flatten)]
    pub server: ServerSelection,
}

impl CreateEvidenceArgs {
    fn subject_flags(&self) -> SubjectFlags {
        SubjectFlags {
            repo_path: self.repo_path.clone(),
            subject_sha256: self.subject_sha256.clone(),
            release_bundle: self.release_bundle.clone(),
            release_bundle_version: self.release_bundle_version.clone(),
            build_name: self.build_name.clone(),
            build_number: self.build_number.clone(),
            package_name: self.package_name.clone(),
            package_version: self.package_version.clone(),
            package_repo_name: self.package_repo_name.clone(),
            project: self.project.clone(),
        }
    }
}

fn mandatory<'a>(value: &'a Option<String>, flag: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("'{flag}' is a mandatory field for creating evidence: --{flag}"))
}

fn flag_or_env(flag: &Option<String>, var: &str) -> Option<String> {
    flag.clone()
        .filter(|v| !v.is_empty())
        .or_else(|| env::var(var).ok().filter(|v| !v.is_empty()))
}

/// Evidence requires a platform URL and token-based authentication.
pub fn evidence_server_details(selection: &ServerSelection) -> Result<ServerDetails> {
    let details = server_details(selection)?;
    if matches!(details.credentials, Credentials::Basic { .. }) {
        bail!("evidence service does not support basic authentication");
    }
    Ok(details)
}

pub async fn run(args: CreateEvidenceArgs) -> Result<()> {
    let predicate_path = mandatory(&args.predicate, "predicate")?;
    let predicate_type = mandatory(&args.predicate_type, "predicate-type")?;
    let key_arg = flag_or_env(&args.key, SIGNING_KEY_ENV).ok_or_else(|| {
        anyhow!("{SIGNING_KEY_ENV} env variable or --key flag must be provided when creating evidence")
    })?;
    let key_alias = flag_or_env(&args.key_alias, KEY_ALIAS_ENV).unwrap_or_default();

    let subject = resolve_subject(&args.subject_flags(), |var| env::var(var).ok())?;
    let details = evidence_server_details(&args.server)?;

    let predicate: Value = serde_json::from_str(
        &fs::read_to_string(predicate_path)
            .with_context(|| format!("reading predicate file {predicate_path}"))?,
    )
    .with_context(|| format!("parsing predicate file {predicate_path}"))?;
    let markdown = match args.markdown.as_deref().filter(|m| !m.is_empty()) {
        Some(path) => Some(
            fs::read_to_string(path).with_context(|| format!("reading markdown file {path}"))?,
        ),
        None => None,
    };
    let key = read_key(&load_key_argument(&key_arg).context("reading signing key")?)?;

    let created_by = details.user();
    let client = PlatformClient::new(details)?;
    let services = EvidenceServices {
        artifactory: &client,
        evidence: &client,
        metadata: &client,
    };
    let request = CreateEvidenceRequest {
        subject,
        predicate,
        predicate_type: predicate_type.to_string(),
        markdown,
        key,
        key_alias,
        created_by,
    };
    let resp = create_evidence(&services, &request).await?;
    if !resp.is_null() {
        println!("{}", serde_json::to_string_pretty(&resp)?);
    }
    Ok(())
}
