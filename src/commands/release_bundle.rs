use crate::config::{server_details, ServerSelection};
use crate::lifecycle::{
    create_release_bundle, distribute_release_bundle, promote_release_bundle, split_repos,
    CreateOptions, DistributeOptions, DistributionRules, PromoteOptions, PromotionTarget,
    PromotionType, ReleaseBundleDetails, SourceSpec,
};
use crate::platform::PlatformClient;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RbCreateArgs {
    /// Release bundle name
    pub name: String,
    /// Release bundle version
    pub version: String,
    /// JSON file listing the bundle's sources
    #[arg(long)]
    pub source_spec: PathBuf,
    /// Name of the signing key pair on the platform
    #[arg(long)]
    pub signing_key: Option<String>,
    /// Wait for the operation to complete instead of returning immediately
    #[arg(long)]
    pub sync: bool,
    #[arg(long)]
    pub project: Option<String>,
    #[command(flatten)]
    pub server: ServerSelection,
}

#[derive(Args, Debug)]
pub struct RbDistributeArgs {
    pub name: String,
    pub version: String,
    /// JSON file with distribution rules; all edges when omitted
    #[arg(long)]
    pub dist_rules: Option<PathBuf>,
    #[arg(long)]
    pub dry_run: bool,
    /// Create missing repositories on the edges
    #[arg(long)]
    pub create_repo: bool,
    #[arg(long)]
    pub project: Option<String>,
    #[command(flatten)]
    pub server: ServerSelection,
}

#[derive(Args, Debug)]
pub struct RbPromoteArgs {
    pub name: String,
    pub version: String,
    /// Target environment, e.g. PROD
    pub environment: String,
    /// Only promote into these repositories, e.g. "prod-local;prod-docker"
    #[arg(long)]
    pub include_repos: Option<String>,
    /// Skip these repositories of the environment
    #[arg(long)]
    pub exclude_repos: Option<String>,
    #[arg(long, value_enum, default_value_t = PromotionType::Copy)]
    pub promotion_type: PromotionType,
    /// Name of the signing key pair on the platform
    #[arg(long)]
    pub signing_key: Option<String>,
    /// Wait for the promotion to complete instead of returning immediately
    #[arg(long)]
    pub sync: bool,
    #[arg(long)]
    pub project: Option<String>,
    #[command(flatten)]
    pub server: ServerSelection,
}

fn bundle_details(name: String, version: String, project: Option<String>) -> ReleaseBundleDetails {
    ReleaseBundleDetails::new(name, version, project.unwrap_or_default())
}

fn print_response(resp: &serde_json::Value) -> Result<()> {
    if !resp.is_null() {
        println!("{}", serde_json::to_string_pretty(resp)?);
    }
    Ok(())
}

pub async fn create(args: RbCreateArgs) -> Result<()> {
    let content = fs::read_to_string(&args.source_spec)
        .with_context(|| format!("reading source spec {}", args.source_spec.display()))?;
    let spec = SourceSpec::parse(&content)
        .with_context(|| format!("parsing source spec {}", args.source_spec.display()))?;
    let details = bundle_details(args.name, args.version, args.project);

    let client = PlatformClient::new(server_details(&args.server)?)?;
    let options = CreateOptions {
        is_async: !args.sync,
        signing_key: args.signing_key.as_deref(),
    };
    let resp = create_release_bundle(&client, &client, &details, &spec, options).await?;
    print_response(&resp)
}

pub async fn distribute(args: RbDistributeArgs) -> Result<()> {
    let rules = match &args.dist_rules {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading distribution rules {}", path.display()))?;
            Some(
                serde_json::from_str::<DistributionRules>(&content)
                    .with_context(|| format!("parsing distribution rules {}", path.display()))?,
            )
        }
        None => None,
    };
    let details = bundle_details(args.name, args.version, args.project);

    let client = PlatformClient::new(server_details(&args.server)?)?;
    let options = DistributeOptions {
        dry_run: args.dry_run,
        auto_create_repo: args.create_repo,
    };
    let resp =
        distribute_release_bundle(&client, &client, &details, rules.as_ref(), options).await?;
    print_response(&resp)
}

pub async fn promote(args: RbPromoteArgs) -> Result<()> {
    let target = PromotionTarget {
        environment: args.environment,
        include_repos: split_repos(args.include_repos.as_deref()),
        exclude_repos: split_repos(args.exclude_repos.as_deref()),
    };
    let details = bundle_details(args.name, args.version, args.project);

    let client = PlatformClient::new(server_details(&args.server)?)?;
    let options = PromoteOptions {
        is_async: !args.sync,
        promotion_type: args.promotion_type,
        signing_key: args.signing_key.as_deref(),
    };
    let resp = promote_release_bundle(&client, &client, &details, &target, options).await?;
    print_response(&resp)
}
