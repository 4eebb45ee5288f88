use anyhow::Result;
use clap::Subcommand;

pub mod completions;
pub mod evidence;
pub mod release_bundle;
pub mod repo;
pub mod server;

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        alias = "create",
        about = "Create signed evidence for an artifact, release bundle, build or package"
    )]
    CreateEvidence(evidence::CreateEvidenceArgs),
    #[command(about = "Create repositories from a JSON or YAML template")]
    RepoCreate(repo::RepoTemplateArgs),
    #[command(about = "Update existing repositories from a JSON or YAML template")]
    RepoUpdate(repo::RepoTemplateArgs),
    #[command(about = "Create a release bundle from builds, artifacts, packages or other bundles")]
    RbCreate(release_bundle::RbCreateArgs),
    #[command(about = "Distribute a release bundle to edge nodes")]
    RbDistribute(release_bundle::RbDistributeArgs),
    #[command(about = "Promote a release bundle to a target environment")]
    RbPromote(release_bundle::RbPromoteArgs),
    #[command(about = "Subcommand: manage configured platform servers (add/list/remove/use)")]
    Server {
        #[command(subcommand)]
        cmd: server::ServerCommands,
    },
    #[command(about = "Emit shell completion scripts (bash/zsh/fish)")]
    Completions { shell: String },
}

pub async fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::CreateEvidence(args) => evidence::run(args).await,
        Commands::RepoCreate(args) => repo::run(args, false).await,
        Commands::RepoUpdate(args) => repo::run(args, true).await,
        Commands::RbCreate(args) => release_bundle::create(args).await,
        Commands::RbDistribute(args) => release_bundle::distribute(args).await,
        Commands::RbPromote(args) => release_bundle::promote(args).await,
        Commands::Server { cmd } => server::run(cmd).await,
        Commands::Completions { shell } => completions::run(shell),
    }
}
