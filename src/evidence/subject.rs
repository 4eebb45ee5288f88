//! Resolving which entity an evidence attests about.

use crate::constants::{BUILD_NAME_ENV, BUILD_NUMBER_ENV};
use crate::error::{CliError, Result};
use crate::lifecycle::ReleaseBundleDetails;

pub const REPO_PATH: &str = "repo-path";
pub const RELEASE_BUNDLE: &str = "release-bundle";
pub const BUILD_NAME: &str = "build-name";
pub const PACKAGE_NAME: &str = "package-name";

/// Subject flags in the order they are checked.
pub const SUBJECT_TYPES: [&str; 4] = [REPO_PATH, RELEASE_BUNDLE, BUILD_NAME, PACKAGE_NAME];

/// Raw subject-related flag values; empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct SubjectFlags {
    pub repo_path: Option<String>,
    pub subject_sha256: Option<String>,
    pub release_bundle: Option<String>,
    pub release_bundle_version: Option<String>,
    pub build_name: Option<String>,
    pub build_number: Option<String>,
    pub package_name: Option<String>,
    pub package_version: Option<String>,
    pub package_repo_name: Option<String>,
    pub project: Option<String>,
}

impl SubjectFlags {
    fn value(&self, subject_type: &str) -> Option<&str> {
        let v = match subject_type {
            REPO_PATH => &self.repo_path,
            RELEASE_BUNDLE => &self.release_bundle,
            BUILD_NAME => &self.build_name,
            PACKAGE_NAME => &self.package_name,
            _ => return None,
        };
        non_empty(v.as_deref())
    }

    fn project(&self) -> String {
        self.project.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceSubject {
    RepoPath {
        path: String,
        sha256: Option<String>,
    },
    ReleaseBundle(ReleaseBundleDetails),
    Build {
        name: String,
        number: String,
        project: String,
    },
    Package {
        name: String,
        version: String,
        repo_name: String,
        project: String,
    },
}

impl EvidenceSubject {
    /// The flag that selected this subject.
    pub fn kind(&self) -> &'static str {
        match self {
            EvidenceSubject::RepoPath { .. } => REPO_PATH,
            EvidenceSubject::ReleaseBundle(_) => RELEASE_BUNDLE,
            EvidenceSubject::Build { .. } => BUILD_NAME,
            EvidenceSubject::Package { .. } => PACKAGE_NAME,
        }
    }
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

/// Flag value, else the environment variable.
fn flag_or_env(
    flag: Option<&str>,
    var: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> Option<String> {
    non_empty(flag)
        .map(str::to_string)
        .or_else(|| env(var).filter(|s| !s.is_empty()))
}

fn required(value: Option<&str>, flag: &str, subject: &str) -> Result<String> {
    non_empty(value).map(str::to_string).ok_or_else(|| {
        CliError::Validation(format!(
            "--{flag} is mandatory when creating evidence for a {subject}"
        ))
    })
}

/// Resolve exactly one subject from `flags`, falling back to the build name and number
/// environment variables when no subject flag is set.
pub fn resolve_subject(
    flags: &SubjectFlags,
    env: impl Fn(&str) -> Option<String>,
) -> Result<EvidenceSubject> {
    let mut found: Vec<&str> = SUBJECT_TYPES
        .into_iter()
        .filter(|t| flags.value(t).is_some())
        .collect();

    if found.is_empty() {
        let name = flag_or_env(None, BUILD_NAME_ENV, &env);
        let number = flag_or_env(flags.build_number.as_deref(), BUILD_NUMBER_ENV, &env);
        return match (name, number) {
            (Some(name), Some(number)) => Ok(EvidenceSubject::Build {
                name,
                number,
                project: flags.project(),
            }),
            _ => Err(CliError::NoSubject {
                expected: SUBJECT_TYPES.iter().map(|s| s.to_string()).collect(),
            }),
        };
    }

    if found.len() > 1 {
        return Err(CliError::AmbiguousSubject {
            fields: found.iter().map(|s| s.to_string()).collect(),
        });
    }

    match found.remove(0) {
        REPO_PATH => Ok(EvidenceSubject::RepoPath {
            path: required(flags.repo_path.as_deref(), REPO_PATH, "repository path")?,
            sha256: non_empty(flags.subject_sha256.as_deref()).map(str::to_string),
        }),
        RELEASE_BUNDLE => Ok(EvidenceSubject::ReleaseBundle(ReleaseBundleDetails::new(
            required(flags.release_bundle.as_deref(), RELEASE_BUNDLE, "release bundle")?,
            required(
                flags.release_bundle_version.as_deref(),
                "release-bundle-version",
                "release bundle",
            )?,
            flags.project(),
        ))),
        BUILD_NAME => {
            let number = flag_or_env(flags.build_number.as_deref(), BUILD_NUMBER_ENV, &env)
                .ok_or_else(|| {
                    CliError::Validation(
                        "--build-number is mandatory when creating evidence for a build".into(),
                    )
                })?;
            Ok(EvidenceSubject::Build {
                name: required(flags.build_name.as_deref(), BUILD_NAME, "build")?,
                number,
                project: flags.project(),
            })
        }
        _ => Ok(EvidenceSubject::Package {
            name: required(flags.package_name.as_deref(), PACKAGE_NAME, "package")?,
            version: required(flags.package_version.as_deref(), "package-version", "package")?,
            repo_name: required(
                flags.package_repo_name.as_deref(),
                "package-repo-name",
                "package",
            )?,
            project: flags.project(),
        }),
    }
}
