//! Strongly-typed repository parameters, one structure per repository class and package type.
//!
//! A structure is a class-level base (local, remote, virtual, federated) flattened together
//! with package-specific settings. Unknown JSON fields are ignored; fields of the wrong JSON
//! type fail decoding.

use super::fields::ContentSynchronisation;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Fields shared by every repository.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryBaseParams {
    pub key: String,
    pub rclass: Option<String>,
    pub package_type: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub includes_pattern: Option<String>,
    pub excludes_pattern: Option<String>,
    pub repo_layout_ref: Option<String>,
    pub project_key: Option<String>,
    pub environments: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRepositoryBaseParams {
    #[serde(flatten)]
    pub base: RepositoryBaseParams,
    pub blacked_out: Option<bool>,
    pub xray_index: Option<bool>,
    pub property_sets: Option<Vec<String>>,
    pub archive_browsing_enabled: Option<bool>,
    pub download_redirect: Option<bool>,
    pub cdn_redirect: Option<bool>,
    pub priority_resolution: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRepositoryBaseParams {
    #[serde(flatten)]
    pub base: RepositoryBaseParams,
    #[serde(alias = "mandatoryUrl")]
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub proxy: Option<String>,
    pub disable_proxy: Option<bool>,
    pub hard_fail: Option<bool>,
    pub offline: Option<bool>,
    pub blacked_out: Option<bool>,
    pub xray_index: Option<bool>,
    pub store_artifacts_locally: Option<bool>,
    pub socket_timeout_millis: Option<i64>,
    pub local_address: Option<String>,
    pub retrieval_cache_period_secs: Option<i64>,
    pub failed_retrieval_cache_period_secs: Option<i64>,
    pub missed_retrieval_cache_period_secs: Option<i64>,
    pub unused_artifacts_cleanup_enabled: Option<bool>,
    pub unused_artifacts_cleanup_period_hours: Option<i64>,
    pub assumed_offline_period_secs: Option<i64>,
    pub share_configuration: Option<bool>,
    pub synchronize_properties: Option<bool>,
    pub block_mismatching_mime_types: Option<bool>,
    pub property_sets: Option<Vec<String>>,
    pub allow_any_host_auth: Option<bool>,
    pub enable_cookie_management: Option<bool>,
    pub bypass_head_requests: Option<bool>,
    pub client_tls_certificate: Option<String>,
    pub download_redirect: Option<bool>,
    pub cdn_redirect: Option<bool>,
    pub priority_resolution: Option<bool>,
    pub archive_browsing_enabled: Option<bool>,
    pub content_synchronisation: Option<ContentSynchronisation>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualRepositoryBaseParams {
    #[serde(flatten)]
    pub base: RepositoryBaseParams,
    pub repositories: Option<Vec<String>>,
    pub artifactory_requests_can_retrieve_remote_artifacts: Option<bool>,
    pub default_deployment_repo: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedRepositoryBaseParams {
    #[serde(flatten)]
    pub local: LocalRepositoryBaseParams,
    pub members: Option<Vec<FederatedMember>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FederatedMember {
    pub url: String,
    pub enabled: Option<bool>,
}

/// Access to the shared fields of a class-level base.
pub trait ClassParams {
    fn base_mut(&mut self) -> &mut RepositoryBaseParams;
}

impl ClassParams for LocalRepositoryBaseParams {
    fn base_mut(&mut self) -> &mut RepositoryBaseParams {
        &mut self.base
    }
}

impl ClassParams for RemoteRepositoryBaseParams {
    fn base_mut(&mut self) -> &mut RepositoryBaseParams {
        &mut self.base
    }
}

impl ClassParams for VirtualRepositoryBaseParams {
    fn base_mut(&mut self) -> &mut RepositoryBaseParams {
        &mut self.base
    }
}

impl ClassParams for FederatedRepositoryBaseParams {
    fn base_mut(&mut self) -> &mut RepositoryBaseParams {
        &mut self.local.base
    }
}

/// A class-level base combined with package-specific settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryParams<C, P> {
    #[serde(flatten)]
    pub class: C,
    #[serde(flatten)]
    pub package: P,
}

/// Parameters a repository handler can decode and submit.
pub trait TypedRepositoryParams: DeserializeOwned + Serialize + Send + Sync + 'static {
    fn base_mut(&mut self) -> &mut RepositoryBaseParams;
}

impl<C, P> TypedRepositoryParams for RepositoryParams<C, P>
where
    C: ClassParams + DeserializeOwned + Serialize + Send + Sync + 'static,
    P: DeserializeOwned + Serialize + Send + Sync + 'static,
{
    fn base_mut(&mut self) -> &mut RepositoryBaseParams {
        self.class.base_mut()
    }
}

/// Package types without settings of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoPackageParams {}

// Local package settings

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaLocalParams {
    pub max_unique_snapshots: Option<i64>,
    pub handle_releases: Option<bool>,
    pub handle_snapshots: Option<bool>,
    pub suppress_pom_consistency_checks: Option<bool>,
    pub snapshot_version_behavior: Option<String>,
    pub checksum_policy_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NugetLocalParams {
    pub max_unique_snapshots: Option<i64>,
    pub force_nuget_authentication: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerLocalParams {
    pub max_unique_tags: Option<i64>,
    pub docker_api_version: Option<String>,
    pub block_pushing_schema1: Option<bool>,
    pub docker_tag_retention: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpmLocalParams {
    pub yum_root_depth: Option<i64>,
    pub calculate_yum_metadata: Option<bool>,
    pub enable_file_lists_indexing: Option<bool>,
    pub yum_group_file_names: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebianLocalParams {
    pub debian_trivial_layout: Option<bool>,
    pub optional_index_compression_formats: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConanLocalParams {
    pub force_conan_authentication: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoLocalParams {
    pub cargo_anonymous_access: Option<bool>,
    pub cargo_internal_index: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerraformLocalParams {
    pub terraform_type: Option<String>,
}

// Remote package settings

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaRemoteParams {
    pub fetch_jars_eagerly: Option<bool>,
    pub fetch_sources_eagerly: Option<bool>,
    pub remote_repo_checksum_policy_type: Option<String>,
    pub list_remote_folder_items: Option<bool>,
    pub handle_releases: Option<bool>,
    pub handle_snapshots: Option<bool>,
    pub suppress_pom_consistency_checks: Option<bool>,
    pub reject_invalid_jars: Option<bool>,
    pub max_unique_snapshots: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerRemoteParams {
    pub external_dependencies_enabled: Option<bool>,
    pub external_dependencies_patterns: Option<Vec<String>>,
    pub enable_token_authentication: Option<bool>,
    pub block_pushing_schema1: Option<bool>,
    pub max_unique_tags: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NugetRemoteParams {
    pub feed_context_path: Option<String>,
    pub download_context_path: Option<String>,
    pub v3_feed_url: Option<String>,
    pub force_nuget_authentication: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PypiRemoteParams {
    #[serde(rename = "pyPIRegistryUrl")]
    pub pypi_registry_url: Option<String>,
    #[serde(rename = "pyPIRepositorySuffix")]
    pub pypi_repository_suffix: Option<String>,
    pub list_remote_folder_items: Option<bool>,
}

/// Remotes that may resolve packages from version control.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcsRemoteParams {
    pub vcs_type: Option<String>,
    pub vcs_git_provider: Option<String>,
    pub vcs_git_download_url: Option<String>,
    pub max_unique_snapshots: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowerRemoteParams {
    pub bower_registry_url: Option<String>,
    #[serde(flatten)]
    pub vcs: VcsRemoteParams,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerRemoteParams {
    pub composer_registry_url: Option<String>,
    #[serde(flatten)]
    pub vcs: VcsRemoteParams,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CocoapodsRemoteParams {
    pub pods_specs_repo_url: Option<String>,
    #[serde(flatten)]
    pub vcs: VcsRemoteParams,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoRemoteParams {
    pub vcs_git_provider: Option<String>,
    pub list_remote_folder_items: Option<bool>,
}

/// Remotes whose only own setting is remote folder listing.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRemoteParams {
    pub list_remote_folder_items: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerraformRemoteParams {
    pub terraform_registry_url: Option<String>,
    pub terraform_providers_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoRemoteParams {
    pub git_registry_url: Option<String>,
    pub cargo_anonymous_access: Option<bool>,
    pub cargo_internal_index: Option<bool>,
}

// Virtual package settings

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaVirtualParams {
    pub key_pair: Option<String>,
    pub pom_repository_references_cleanup_policy: Option<String>,
    pub force_maven_authentication: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDependenciesVirtualParams {
    pub external_dependencies_enabled: Option<bool>,
    pub external_dependencies_patterns: Option<Vec<String>>,
    pub external_dependencies_remote_repo: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerVirtualParams {
    pub resolve_docker_tags_by_timestamp: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NugetVirtualParams {
    pub force_nuget_authentication: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmVirtualParams {
    pub virtual_retrieval_cache_period_secs: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct P2VirtualParams {
    pub p2_urls: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebianVirtualParams {
    pub debian_default_architectures: Option<String>,
    pub optional_index_compression_formats: Option<Vec<String>>,
}

/// Virtual repositories that sign their metadata with a key pair.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairVirtualParams {
    pub key_pair: Option<String>,
}

type Local<P> = RepositoryParams<LocalRepositoryBaseParams, P>;
type Remote<P> = RepositoryParams<RemoteRepositoryBaseParams, P>;
type Virtual<P> = RepositoryParams<VirtualRepositoryBaseParams, P>;
type Federated<P> = RepositoryParams<FederatedRepositoryBaseParams, P>;

pub type MavenLocalRepositoryParams = Local<JavaLocalParams>;
pub type GradleLocalRepositoryParams = Local<JavaLocalParams>;
pub type IvyLocalRepositoryParams = Local<JavaLocalParams>;
pub type SbtLocalRepositoryParams = Local<JavaLocalParams>;
pub type HelmLocalRepositoryParams = Local<NoPackageParams>;
pub type CocoapodsLocalRepositoryParams = Local<NoPackageParams>;
pub type OpkgLocalRepositoryParams = Local<NoPackageParams>;
pub type RpmLocalRepositoryParams = Local<RpmLocalParams>;
pub type NugetLocalRepositoryParams = Local<NugetLocalParams>;
pub type CranLocalRepositoryParams = Local<NoPackageParams>;
pub type GemsLocalRepositoryParams = Local<NoPackageParams>;
pub type NpmLocalRepositoryParams = Local<NoPackageParams>;
pub type BowerLocalRepositoryParams = Local<NoPackageParams>;
pub type DebianLocalRepositoryParams = Local<DebianLocalParams>;
pub type ComposerLocalRepositoryParams = Local<NoPackageParams>;
pub type PypiLocalRepositoryParams = Local<NoPackageParams>;
pub type DockerLocalRepositoryParams = Local<DockerLocalParams>;
pub type VagrantLocalRepositoryParams = Local<NoPackageParams>;
pub type GitlfsLocalRepositoryParams = Local<NoPackageParams>;
pub type GoLocalRepositoryParams = Local<NoPackageParams>;
pub type YumLocalRepositoryParams = Local<RpmLocalParams>;
pub type ConanLocalRepositoryParams = Local<ConanLocalParams>;
pub type CondaLocalRepositoryParams = Local<NoPackageParams>;
pub type ChefLocalRepositoryParams = Local<NoPackageParams>;
pub type PuppetLocalRepositoryParams = Local<NoPackageParams>;
pub type AlpineLocalRepositoryParams = Local<NoPackageParams>;
pub type GenericLocalRepositoryParams = Local<NoPackageParams>;
pub type SwiftLocalRepositoryParams = Local<NoPackageParams>;
pub type TerraformLocalRepositoryParams = Local<TerraformLocalParams>;
pub type CargoLocalRepositoryParams = Local<CargoLocalParams>;

pub type MavenRemoteRepositoryParams = Remote<JavaRemoteParams>;
pub type GradleRemoteRepositoryParams = Remote<JavaRemoteParams>;
pub type IvyRemoteRepositoryParams = Remote<JavaRemoteParams>;
pub type SbtRemoteRepositoryParams = Remote<JavaRemoteParams>;
pub type HelmRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type CocoapodsRemoteRepositoryParams = Remote<CocoapodsRemoteParams>;
pub type OpkgRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type RpmRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type NugetRemoteRepositoryParams = Remote<NugetRemoteParams>;
pub type CranRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type GemsRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type NpmRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type BowerRemoteRepositoryParams = Remote<BowerRemoteParams>;
pub type DebianRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type ComposerRemoteRepositoryParams = Remote<ComposerRemoteParams>;
pub type PypiRemoteRepositoryParams = Remote<PypiRemoteParams>;
pub type DockerRemoteRepositoryParams = Remote<DockerRemoteParams>;
pub type GitlfsRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type GoRemoteRepositoryParams = Remote<GoRemoteParams>;
pub type YumRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type ConanRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type CondaRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type ChefRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type PuppetRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type P2RemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type VcsRemoteRepositoryParams = Remote<VcsRemoteParams>;
pub type AlpineRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type GenericRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type SwiftRemoteRepositoryParams = Remote<ListingRemoteParams>;
pub type TerraformRemoteRepositoryParams = Remote<TerraformRemoteParams>;
pub type CargoRemoteRepositoryParams = Remote<CargoRemoteParams>;

pub type MavenVirtualRepositoryParams = Virtual<JavaVirtualParams>;
pub type GradleVirtualRepositoryParams = Virtual<JavaVirtualParams>;
pub type IvyVirtualRepositoryParams = Virtual<JavaVirtualParams>;
pub type SbtVirtualRepositoryParams = Virtual<JavaVirtualParams>;
pub type HelmVirtualRepositoryParams = Virtual<HelmVirtualParams>;
pub type RpmVirtualRepositoryParams = Virtual<KeyPairVirtualParams>;
pub type NugetVirtualRepositoryParams = Virtual<NugetVirtualParams>;
pub type CranVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type GemsVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type NpmVirtualRepositoryParams = Virtual<ExternalDependenciesVirtualParams>;
pub type BowerVirtualRepositoryParams = Virtual<ExternalDependenciesVirtualParams>;
pub type DebianVirtualRepositoryParams = Virtual<DebianVirtualParams>;
pub type PypiVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type DockerVirtualRepositoryParams = Virtual<DockerVirtualParams>;
pub type GitlfsVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type GoVirtualRepositoryParams = Virtual<ExternalDependenciesVirtualParams>;
pub type YumVirtualRepositoryParams = Virtual<KeyPairVirtualParams>;
pub type ConanVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type ChefVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type PuppetVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type CondaVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type P2VirtualRepositoryParams = Virtual<P2VirtualParams>;
pub type AlpineVirtualRepositoryParams = Virtual<KeyPairVirtualParams>;
pub type GenericVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type SwiftVirtualRepositoryParams = Virtual<NoPackageParams>;
pub type TerraformVirtualRepositoryParams = Virtual<NoPackageParams>;

pub type MavenFederatedRepositoryParams = Federated<JavaLocalParams>;
pub type GradleFederatedRepositoryParams = Federated<JavaLocalParams>;
pub type IvyFederatedRepositoryParams = Federated<JavaLocalParams>;
pub type SbtFederatedRepositoryParams = Federated<JavaLocalParams>;
pub type HelmFederatedRepositoryParams = Federated<NoPackageParams>;
pub type CocoapodsFederatedRepositoryParams = Federated<NoPackageParams>;
pub type OpkgFederatedRepositoryParams = Federated<NoPackageParams>;
pub type RpmFederatedRepositoryParams = Federated<RpmLocalParams>;
pub type NugetFederatedRepositoryParams = Federated<NugetLocalParams>;
pub type CranFederatedRepositoryParams = Federated<NoPackageParams>;
pub type GemsFederatedRepositoryParams = Federated<NoPackageParams>;
pub type NpmFederatedRepositoryParams = Federated<NoPackageParams>;
pub type BowerFederatedRepositoryParams = Federated<NoPackageParams>;
pub type DebianFederatedRepositoryParams = Federated<DebianLocalParams>;
pub type ComposerFederatedRepositoryParams = Federated<NoPackageParams>;
pub type PypiFederatedRepositoryParams = Federated<NoPackageParams>;
pub type DockerFederatedRepositoryParams = Federated<DockerLocalParams>;
pub type VagrantFederatedRepositoryParams = Federated<NoPackageParams>;
pub type GitlfsFederatedRepositoryParams = Federated<NoPackageParams>;
pub type GoFederatedRepositoryParams = Federated<NoPackageParams>;
pub type ConanFederatedRepositoryParams = Federated<ConanLocalParams>;
pub type CondaFederatedRepositoryParams = Federated<NoPackageParams>;
pub type ChefFederatedRepositoryParams = Federated<NoPackageParams>;
pub type PuppetFederatedRepositoryParams = Federated<NoPackageParams>;
pub type AlpineFederatedRepositoryParams = Federated<NoPackageParams>;
pub type GenericFederatedRepositoryParams = Federated<NoPackageParams>;
pub type YumFederatedRepositoryParams = Federated<RpmLocalParams>;
pub type SwiftFederatedRepositoryParams = Federated<NoPackageParams>;
pub type TerraformFederatedRepositoryParams = Federated<TerraformLocalParams>;
pub type CargoFederatedRepositoryParams = Federated<CargoLocalParams>;
