//! Per-class handler tables keyed by package type.

use super::params::*;
use crate::error::{CliError, Result};
use crate::platform::ArtifactoryService;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rclass {
    Local,
    Remote,
    Virtual,
    Federated,
}

impl Rclass {
    pub const ALL: [Rclass; 4] = [
        Rclass::Local,
        Rclass::Remote,
        Rclass::Virtual,
        Rclass::Federated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rclass::Local => "local",
            Rclass::Remote => "remote",
            Rclass::Virtual => "virtual",
            Rclass::Federated => "federated",
        }
    }
}

impl fmt::Display for Rclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rclass {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        Rclass::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CliError::UnsupportedRclass {
                rclass: s.to_string(),
            })
    }
}

macro_rules! package_types {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PackageType {
            $($variant),+
        }

        impl PackageType {
            pub const ALL: &'static [PackageType] = &[$(PackageType::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(PackageType::$variant => $name),+
                }
            }

            pub fn parse(s: &str) -> Option<PackageType> {
                match s {
                    $($name => Some(PackageType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

package_types! {
    Alpine => "alpine",
    Bower => "bower",
    Cargo => "cargo",
    Chef => "chef",
    Cocoapods => "cocoapods",
    Composer => "composer",
    Conan => "conan",
    Conda => "conda",
    Cran => "cran",
    Debian => "debian",
    Docker => "docker",
    Gems => "gems",
    Generic => "generic",
    Gitlfs => "gitlfs",
    Go => "go",
    Gradle => "gradle",
    Helm => "helm",
    Ivy => "ivy",
    Maven => "maven",
    Npm => "npm",
    Nuget => "nuget",
    Opkg => "opkg",
    P2 => "p2",
    Puppet => "puppet",
    Pypi => "pypi",
    Rpm => "rpm",
    Sbt => "sbt",
    Swift => "swift",
    Terraform => "terraform",
    Vagrant => "vagrant",
    Vcs => "vcs",
    Yum => "yum",
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes one repository configuration and submits it to Artifactory.
#[async_trait]
pub trait RepoHandler: Send + Sync {
    fn rclass(&self) -> Rclass;

    fn package_type(&self) -> PackageType;

    /// Decode `json` into the typed parameters and return the key and canonical body.
    fn decode(&self, json: &[u8]) -> Result<(String, Value)>;

    async fn handle(
        &self,
        client: &dyn ArtifactoryService,
        json: &[u8],
        is_update: bool,
    ) -> Result<()> {
        let (key, body) = self.decode(json)?;
        debug!(
            "{} {} {} repository '{}'",
            if is_update { "updating" } else { "creating" },
            self.rclass(),
            self.package_type(),
            key
        );
        client.put_repository(&key, &body, is_update).await
    }
}

struct TypedHandler<P> {
    rclass: Rclass,
    package_type: PackageType,
    params: PhantomData<fn() -> P>,
}

#[async_trait]
impl<P: TypedRepositoryParams> RepoHandler for TypedHandler<P> {
    fn rclass(&self) -> Rclass {
        self.rclass
    }

    fn package_type(&self) -> PackageType {
        self.package_type
    }

    fn decode(&self, json: &[u8]) -> Result<(String, Value)> {
        let mut params: P =
            serde_json::from_slice(json).map_err(|source| CliError::MalformedConfig {
                rclass: self.rclass.to_string(),
                package_type: self.package_type.to_string(),
                source,
            })?;
        let base = params.base_mut();
        base.rclass = Some(self.rclass.to_string());
        base.package_type = Some(self.package_type.to_string());
        let key = base.key.clone();
        Ok((key, serde_json::to_value(&params)?))
    }
}

pub type HandlerTable = HashMap<PackageType, Box<dyn RepoHandler>>;

fn handler<P: TypedRepositoryParams>(
    rclass: Rclass,
    package_type: PackageType,
) -> Box<dyn RepoHandler> {
    Box::new(TypedHandler::<P> {
        rclass,
        package_type,
        params: PhantomData,
    })
}

macro_rules! handler_table {
    ($rclass:expr; $($pt:ident => $params:ty),+ $(,)?) => {{
        let mut table: HandlerTable = HashMap::new();
        $(table.insert(PackageType::$pt, handler::<$params>($rclass, PackageType::$pt));)+
        table
    }};
}

fn local_handlers() -> HandlerTable {
    handler_table! { Rclass::Local;
        Maven => MavenLocalRepositoryParams,
        Gradle => GradleLocalRepositoryParams,
        Ivy => IvyLocalRepositoryParams,
        Sbt => SbtLocalRepositoryParams,
        Helm => HelmLocalRepositoryParams,
        Cocoapods => CocoapodsLocalRepositoryParams,
        Opkg => OpkgLocalRepositoryParams,
        Rpm => RpmLocalRepositoryParams,
        Nuget => NugetLocalRepositoryParams,
        Cran => CranLocalRepositoryParams,
        Gems => GemsLocalRepositoryParams,
        Npm => NpmLocalRepositoryParams,
        Bower => BowerLocalRepositoryParams,
        Debian => DebianLocalRepositoryParams,
        Composer => ComposerLocalRepositoryParams,
        Pypi => PypiLocalRepositoryParams,
        Docker => DockerLocalRepositoryParams,
        Vagrant => VagrantLocalRepositoryParams,
        Gitlfs => GitlfsLocalRepositoryParams,
        Go => GoLocalRepositoryParams,
        Yum => YumLocalRepositoryParams,
        Conan => ConanLocalRepositoryParams,
        Conda => CondaLocalRepositoryParams,
        Chef => ChefLocalRepositoryParams,
        Puppet => PuppetLocalRepositoryParams,
        Alpine => AlpineLocalRepositoryParams,
        Generic => GenericLocalRepositoryParams,
        Swift => SwiftLocalRepositoryParams,
        Terraform => TerraformLocalRepositoryParams,
        Cargo => CargoLocalRepositoryParams,
    }
}

fn remote_handlers() -> HandlerTable {
    handler_table! { Rclass::Remote;
        Maven => MavenRemoteRepositoryParams,
        Gradle => GradleRemoteRepositoryParams,
        Ivy => IvyRemoteRepositoryParams,
        Sbt => SbtRemoteRepositoryParams,
        Helm => HelmRemoteRepositoryParams,
        Cocoapods => CocoapodsRemoteRepositoryParams,
        Opkg => OpkgRemoteRepositoryParams,
        Rpm => RpmRemoteRepositoryParams,
        Nuget => NugetRemoteRepositoryParams,
        Cran => CranRemoteRepositoryParams,
        Gems => GemsRemoteRepositoryParams,
        Npm => NpmRemoteRepositoryParams,
        Bower => BowerRemoteRepositoryParams,
        Debian => DebianRemoteRepositoryParams,
        Composer => ComposerRemoteRepositoryParams,
        Pypi => PypiRemoteRepositoryParams,
        Docker => DockerRemoteRepositoryParams,
        Gitlfs => GitlfsRemoteRepositoryParams,
        Go => GoRemoteRepositoryParams,
        Yum => YumRemoteRepositoryParams,
        Conan => ConanRemoteRepositoryParams,
        Conda => CondaRemoteRepositoryParams,
        Chef => ChefRemoteRepositoryParams,
        Puppet => PuppetRemoteRepositoryParams,
        P2 => P2RemoteRepositoryParams,
        Vcs => VcsRemoteRepositoryParams,
        Alpine => AlpineRemoteRepositoryParams,
        Generic => GenericRemoteRepositoryParams,
        Swift => SwiftRemoteRepositoryParams,
        Terraform => TerraformRemoteRepositoryParams,
        Cargo => CargoRemoteRepositoryParams,
    }
}

fn virtual_handlers() -> HandlerTable {
    handler_table! { Rclass::Virtual;
        Maven => MavenVirtualRepositoryParams,
        Gradle => GradleVirtualRepositoryParams,
        Ivy => IvyVirtualRepositoryParams,
        Sbt => SbtVirtualRepositoryParams,
        Helm => HelmVirtualRepositoryParams,
        Rpm => RpmVirtualRepositoryParams,
        Nuget => NugetVirtualRepositoryParams,
        Cran => CranVirtualRepositoryParams,
        Gems => GemsVirtualRepositoryParams,
        Npm => NpmVirtualRepositoryParams,
        Bower => BowerVirtualRepositoryParams,
        Debian => DebianVirtualRepositoryParams,
        Pypi => PypiVirtualRepositoryParams,
        Docker => DockerVirtualRepositoryParams,
        Gitlfs => GitlfsVirtualRepositoryParams,
        Go => GoVirtualRepositoryParams,
        Yum => YumVirtualRepositoryParams,
        Conan => ConanVirtualRepositoryParams,
        Chef => ChefVirtualRepositoryParams,
        Puppet => PuppetVirtualRepositoryParams,
        Conda => CondaVirtualRepositoryParams,
        P2 => P2VirtualRepositoryParams,
        Alpine => AlpineVirtualRepositoryParams,
        Generic => GenericVirtualRepositoryParams,
        Swift => SwiftVirtualRepositoryParams,
        Terraform => TerraformVirtualRepositoryParams,
    }
}

fn federated_handlers() -> HandlerTable {
    handler_table! { Rclass::Federated;
        Maven => MavenFederatedRepositoryParams,
        Gradle => GradleFederatedRepositoryParams,
        Ivy => IvyFederatedRepositoryParams,
        Sbt => SbtFederatedRepositoryParams,
        Helm => HelmFederatedRepositoryParams,
        Cocoapods => CocoapodsFederatedRepositoryParams,
        Opkg => OpkgFederatedRepositoryParams,
        Rpm => RpmFederatedRepositoryParams,
        Nuget => NugetFederatedRepositoryParams,
        Cran => CranFederatedRepositoryParams,
        Gems => GemsFederatedRepositoryParams,
        Npm => NpmFederatedRepositoryParams,
        Bower => BowerFederatedRepositoryParams,
        Debian => DebianFederatedRepositoryParams,
        Composer => ComposerFederatedRepositoryParams,
        Pypi => PypiFederatedRepositoryParams,
        Docker => DockerFederatedRepositoryParams,
        Vagrant => VagrantFederatedRepositoryParams,
        Gitlfs => GitlfsFederatedRepositoryParams,
        Go => GoFederatedRepositoryParams,
        Conan => ConanFederatedRepositoryParams,
        Conda => CondaFederatedRepositoryParams,
        Chef => ChefFederatedRepositoryParams,
        Puppet => PuppetFederatedRepositoryParams,
        Alpine => AlpineFederatedRepositoryParams,
        Generic => GenericFederatedRepositoryParams,
        Yum => YumFederatedRepositoryParams,
        Swift => SwiftFederatedRepositoryParams,
        Terraform => TerraformFederatedRepositoryParams,
        Cargo => CargoFederatedRepositoryParams,
    }
}

/// The handler table for `rclass`, built on first use.
pub fn handlers(rclass: Rclass) -> &'static HandlerTable {
    static LOCAL: OnceLock<HandlerTable> = OnceLock::new();
    static REMOTE: OnceLock<HandlerTable> = OnceLock::new();
    static VIRTUAL: OnceLock<HandlerTable> = OnceLock::new();
    static FEDERATED: OnceLock<HandlerTable> = OnceLock::new();

    match rclass {
        Rclass::Local => LOCAL.get_or_init(local_handlers),
        Rclass::Remote => REMOTE.get_or_init(remote_handlers),
        Rclass::Virtual => VIRTUAL.get_or_init(virtual_handlers),
        Rclass::Federated => FEDERATED.get_or_init(federated_handlers),
    }
}

/// Resolve the handler for a `(rclass, packageType)` pair.
pub fn lookup(rclass: &str, package_type: &str) -> Result<&'static dyn RepoHandler> {
    let rclass: Rclass = rclass.parse()?;
    PackageType::parse(package_type)
        .and_then(|pt| handlers(rclass).get(&pt))
        .map(|h| h.as_ref())
        .ok_or_else(|| CliError::UnsupportedPackageType {
            rclass: rclass.to_string(),
            package_type: package_type.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn supported(rclass: Rclass) -> Vec<&'static str> {
        let mut names: Vec<_> = handlers(rclass).keys().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(handlers(Rclass::Local).len(), 30);
        assert_eq!(handlers(Rclass::Remote).len(), 31);
        assert_eq!(handlers(Rclass::Virtual).len(), 26);
        assert_eq!(handlers(Rclass::Federated).len(), 30);
    }

    #[test]
    fn test_every_supported_pair_resolves() {
        for rclass in Rclass::ALL {
            for (pt, h) in handlers(rclass) {
                let found = lookup(rclass.as_str(), pt.as_str()).unwrap();
                assert_eq!(found.rclass(), rclass);
                assert_eq!(found.package_type(), *pt);
                assert_eq!(h.package_type(), *pt);
            }
        }
    }

    #[test]
    fn test_tables_are_not_symmetric() {
        assert!(!supported(Rclass::Virtual).contains(&"vagrant"));
        assert!(!supported(Rclass::Remote).contains(&"vagrant"));
        assert!(!supported(Rclass::Federated).contains(&"vcs"));
        assert!(!supported(Rclass::Federated).contains(&"p2"));
        assert!(supported(Rclass::Remote).contains(&"vcs"));
        assert!(supported(Rclass::Virtual).contains(&"p2"));
    }

    #[test]
    fn test_every_pair_outside_the_tables_is_unsupported() {
        let mut unsupported = 0;
        for rclass in Rclass::ALL {
            for &pt in PackageType::ALL {
                let result = lookup(rclass.as_str(), pt.as_str());
                if handlers(rclass).contains_key(&pt) {
                    assert!(result.is_ok(), "{rclass}/{} should resolve", pt.as_str());
                    continue;
                }
                unsupported += 1;
                assert!(
                    matches!(
                        &result,
                        Err(CliError::UnsupportedPackageType { rclass: r, package_type: p })
                            if r == rclass.as_str() && p == pt.as_str()
                    ),
                    "{rclass}/{} should be unsupported",
                    pt.as_str()
                );
            }
        }
        // 32 package types against tables of 30, 31, 26 and 30 entries.
        assert_eq!(unsupported, 4 * PackageType::ALL.len() - (30 + 31 + 26 + 30));
    }

    #[test]
    fn test_unsupported_pairs_are_errors() {
        for (rclass, pt) in [
            ("virtual", "vagrant"),
            ("federated", "vcs"),
            ("federated", "p2"),
            ("virtual", "cargo"),
            ("local", "not-a-type"),
        ] {
            match lookup(rclass, pt) {
                Err(CliError::UnsupportedPackageType {
                    rclass: r,
                    package_type: p,
                }) => {
                    assert_eq!(r, rclass);
                    assert_eq!(p, pt);
                }
                Err(other) => panic!("unexpected error for {rclass}/{pt}: {other}"),
                Ok(_) => panic!("{rclass}/{pt} should not resolve"),
            }
        }
    }

    #[test]
    fn test_unknown_rclass() {
        assert!(matches!(
            lookup("distribution", "maven"),
            Err(CliError::UnsupportedRclass { rclass }) if rclass == "distribution"
        ));
    }

    #[test]
    fn test_decode_forces_discriminators() {
        let h = lookup("remote", "docker").unwrap();
        let (key, body) = h
            .decode(
                br#"{"key":"docker-remote","url":"https://registry-1.docker.io","enableTokenAuthentication":true}"#,
            )
            .unwrap();
        assert_eq!(key, "docker-remote");
        assert_eq!(
            body,
            json!({
                "key": "docker-remote",
                "rclass": "remote",
                "packageType": "docker",
                "url": "https://registry-1.docker.io",
                "enableTokenAuthentication": true
            })
        );
    }

    #[test]
    fn test_decode_malformed_config() {
        let h = lookup("local", "maven").unwrap();
        let err = h.decode(br#"{"key":"m","handleReleases":"sometimes"}"#).unwrap_err();
        assert!(matches!(
            err,
            CliError::MalformedConfig { ref rclass, ref package_type, .. }
                if rclass == "local" && package_type == "maven"
        ));
    }
}
