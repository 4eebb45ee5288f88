use crate::config::{parse_template_vars, server_details, ServerSelection};
use crate::platform::PlatformClient;
use crate::repository::{ensure_keys, load_template, perform_repo_cmd};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RepoTemplateArgs {
    /// JSON or YAML template holding one repository configuration or an array of them
    pub template: PathBuf,
    /// Template variables in the form "key1=value1;key2=value2"
    #[arg(long)]
    pub vars: Option<String>,
    #[command(flatten)]
    pub server: ServerSelection,
}

pub async fn run(args: RepoTemplateArgs, is_update: bool) -> Result<()> {
    let vars = match args.vars.as_deref() {
        Some(vars) => parse_template_vars(vars)?,
        None => Default::default(),
    };
    let template = load_template(&args.template, &vars)
        .with_context(|| format!("loading repository template {}", args.template.display()))?;
    ensure_keys(&template)?;

    let client = PlatformClient::new(server_details(&args.server)?)?;
    perform_repo_cmd(&client, &template, is_update).await?;
    Ok(())
}
