//! Configuration management for the JFrog CLI plugin
//!
//! This module handles:
//! - The servers file listing platform instances and how to authenticate against them
//! - Resolving the server a command talks to from flags, the servers file and env vars
//! - Template placeholder expansion for repository templates
//!
//! ## Servers File
//!
//! Stored in `~/.config/jfrog-cli-artifactory/servers.yaml` or the path specified by
//! `JFROG_CLI_SERVERS_PATH`. Secrets are never written to the file; entries name the
//! environment variables that hold them.
//!
//! ## Template Placeholders
//!
//! Repository templates may contain `${name}` placeholders which are replaced from the
//! `--vars "name=value;other=value"` flag before the template is parsed.

use crate::constants::{SERVERS_FILE, SERVERS_PATH_ENV};
use anyhow::{anyhow, bail, Context};
use clap::Args;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{env, fs, path::PathBuf};

/// All configured platform servers.
///
/// # Example
///
/// ```yaml
/// servers:
///   - serverId: prod
///     url: https://acme.jfrog.io
///     default: true
///     auth:
///       type: accessToken
///       tokenEnv: JFROG_ACCESS_TOKEN
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServersConfig {
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

/// One platform instance.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Unique identifier used with `--server-id`
    pub server_id: String,
    /// Platform base URL
    pub url: String,
    /// Artifactory URL when it is not served under `<url>/artifactory/`
    #[serde(default)]
    pub artifactory_url: Option<String>,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Used when no server is selected explicitly
    #[serde(default)]
    pub default: bool,
}

/// Authentication configuration for a server.
///
/// Credentials are always sourced from environment variables.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "type")]
pub enum AuthConfig {
    /// Anonymous access
    #[default]
    None,
    /// HTTP Basic authentication
    #[serde(rename_all = "camelCase")]
    Basic {
        username: String,
        /// Environment variable containing the password
        password_env: String,
    },
    /// Platform access token sent as a bearer token
    #[serde(rename_all = "camelCase")]
    AccessToken {
        /// Environment variable containing the token
        token_env: String,
    },
}

/// Connection flags shared by every command that talks to the platform.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerSelection {
    /// Server ID from the servers file
    #[arg(long)]
    pub server_id: Option<String>,
    /// Platform URL, overrides the configured server
    #[arg(long)]
    pub url: Option<String>,
    /// Platform access token
    #[arg(long)]
    pub access_token: Option<String>,
    /// User for basic authentication
    #[arg(long)]
    pub user: Option<String>,
    /// Password for basic authentication
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Anonymous,
    Basic { username: String, password: String },
    AccessToken(String),
}

/// Fully resolved connection details with per-service URLs.
#[derive(Debug, Clone)]
pub struct ServerDetails {
    pub url: String,
    pub artifactory_url: String,
    pub evidence_url: String,
    pub metadata_url: String,
    pub lifecycle_url: String,
    pub credentials: Credentials,
}

impl ServerDetails {
    pub fn new(url: &str, artifactory_url: Option<&str>, credentials: Credentials) -> Self {
        let url = with_trailing_slash(url);
        let artifactory_url = artifactory_url
            .map(with_trailing_slash)
            .unwrap_or_else(|| format!("{url}artifactory/"));
        ServerDetails {
            evidence_url: format!("{url}evidence/"),
            metadata_url: format!("{url}metadata/"),
            lifecycle_url: format!("{url}lifecycle/"),
            artifactory_url,
            url,
            credentials,
        }
    }

    /// User name from basic credentials, or from the subject of an access token.
    pub fn user(&self) -> Option<String> {
        match &self.credentials {
            Credentials::Basic { username, .. } => Some(username.clone()),
            Credentials::AccessToken(token) => username_from_access_token(token),
            Credentials::Anonymous => None,
        }
    }
}

/// Access token subjects look like `jfrt@<service-id>/users/<name>`.
fn username_from_access_token(token: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct Claims {
        sub: String,
    }

    let payload = token.split('.').nth(1)?;
    let bytes = base64::decode_config(payload, base64::URL_SAFE_NO_PAD).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    claims
        .sub
        .rsplit_once("/users/")
        .map(|(_, name)| name.to_string())
        .filter(|name| !name.is_empty())
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

impl ServersConfig {
    pub fn find(&self, server_id: &str) -> Option<&ServerConfig> {
        self.servers.iter().find(|s| s.server_id == server_id)
    }

    /// The server marked as default, or the only configured server.
    pub fn default_server(&self) -> Option<&ServerConfig> {
        self.servers
            .iter()
            .find(|s| s.default)
            .or_else(|| match self.servers.as_slice() {
                [only] => Some(only),
                _ => None,
            })
    }
}

/// Resolve the server a command talks to.
///
/// Explicit `--url` wins, then `--server-id`, then the default server. Credential flags
/// override whatever the selected server is configured with.
pub fn resolve_server_details(
    selection: &ServerSelection,
    servers: &ServersConfig,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ServerDetails> {
    let configured = match (&selection.url, &selection.server_id) {
        (Some(_), _) => None,
        (None, Some(id)) => Some(
            servers
                .find(id)
                .ok_or_else(|| anyhow!("server '{}' is not configured", id))?,
        ),
        (None, None) => servers.default_server(),
    };

    let url = match (&selection.url, configured) {
        (Some(url), _) => url.clone(),
        (None, Some(server)) => server.url.clone(),
        (None, None) => bail!(
            "no platform URL: pass --url or --server-id, or add a server with 'server add'"
        ),
    };
    if url.trim().is_empty() {
        bail!("platform URL is mandatory");
    }

    let credentials = match (&selection.access_token, &selection.user, &selection.password) {
        (Some(token), _, _) => Credentials::AccessToken(token.clone()),
        (None, Some(user), Some(password)) => Credentials::Basic {
            username: user.clone(),
            password: password.clone(),
        },
        (None, Some(_), None) | (None, None, Some(_)) => {
            bail!("--user and --password must be provided together")
        }
        (None, None, None) => match configured.map(|s| &s.auth) {
            None | Some(AuthConfig::None) => Credentials::Anonymous,
            Some(AuthConfig::Basic {
                username,
                password_env,
            }) => Credentials::Basic {
                username: username.clone(),
                password: lookup_env(password_env)
                    .ok_or_else(|| anyhow!("environment variable {} is not set", password_env))?,
            },
            Some(AuthConfig::AccessToken { token_env }) => Credentials::AccessToken(
                lookup_env(token_env)
                    .ok_or_else(|| anyhow!("environment variable {} is not set", token_env))?,
            ),
        },
    };

    let artifactory_url = configured.and_then(|s| s.artifactory_url.as_deref());
    Ok(ServerDetails::new(&url, artifactory_url, credentials))
}

pub fn servers_config_path() -> PathBuf {
    env::var(SERVERS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push(SERVERS_FILE);
            p
        })
}

pub fn load_servers_config() -> anyhow::Result<ServersConfig> {
    let path = servers_config_path();
    if !path.exists() {
        return Ok(ServersConfig::default());
    }
    let data = fs::read_to_string(&path)
        .with_context(|| format!("reading servers file {}", path.display()))?;
    let cfg: ServersConfig = serde_yaml::from_str(&data)
        .with_context(|| format!("parsing servers file {}", path.display()))?;
    Ok(cfg)
}

pub fn save_servers_config(cfg: &ServersConfig) -> anyhow::Result<()> {
    let path = servers_config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_yaml::to_string(cfg)?;
    fs::write(&path, data)?;
    tracing::debug!("saved servers to {}", path.display());
    Ok(())
}

/// Load the servers file and resolve the selected server against the process env.
pub fn server_details(selection: &ServerSelection) -> anyhow::Result<ServerDetails> {
    let servers = load_servers_config()?;
    resolve_server_details(selection, &servers, |name| env::var(name).ok())
}

/// Parse `--vars` in the form `key1=value1;key2=value2`.
pub fn parse_template_vars(vars: &str) -> anyhow::Result<HashMap<String, String>> {
    let mut out = HashMap::new();
    for pair in vars.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid template variable '{}', expected key=value", pair))?;
        out.insert(key.trim().to_string(), value.to_string());
    }
    Ok(out)
}

/// Replace `${name}` placeholders with template variables; unknown names are left intact.
pub fn expand_template_vars(input: &str, vars: &HashMap<String, String>) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_.-]*)\}").expect("placeholder regex is valid");
    re.replace_all(input, |caps: &regex::Captures| {
        vars.get(&caps[1])
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servers() -> ServersConfig {
        ServersConfig {
            servers: vec![
                ServerConfig {
                    server_id: "prod".into(),
                    url: "https://acme.jfrog.io".into(),
                    auth: AuthConfig::AccessToken {
                        token_env: "PROD_TOKEN".into(),
                    },
                    default: true,
                    ..Default::default()
                },
                ServerConfig {
                    server_id: "legacy".into(),
                    url: "https://legacy.example.com/".into(),
                    artifactory_url: Some("https://rt.example.com".into()),
                    auth: AuthConfig::Basic {
                        username: "admin".into(),
                        password_env: "LEGACY_PW".into(),
                    },
                    default: false,
                },
            ],
        }
    }

    fn env(name: &str) -> Option<String> {
        match name {
            "PROD_TOKEN" => Some("tok".into()),
            "LEGACY_PW" => Some("secret".into()),
            _ => None,
        }
    }

    #[test]
    fn test_default_server_with_token_from_env() {
        let details =
            resolve_server_details(&ServerSelection::default(), &servers(), env).unwrap();
        assert_eq!(details.url, "https://acme.jfrog.io/");
        assert_eq!(details.artifactory_url, "https://acme.jfrog.io/artifactory/");
        assert_eq!(details.evidence_url, "https://acme.jfrog.io/evidence/");
        assert_eq!(details.credentials, Credentials::AccessToken("tok".into()));
    }

    #[test]
    fn test_server_id_with_artifactory_override() {
        let selection = ServerSelection {
            server_id: Some("legacy".into()),
            ..Default::default()
        };
        let details = resolve_server_details(&selection, &servers(), env).unwrap();
        assert_eq!(details.artifactory_url, "https://rt.example.com/");
        assert_eq!(details.user().as_deref(), Some("admin"));
    }

    #[test]
    fn test_url_flag_skips_servers_file() {
        let selection = ServerSelection {
            url: Some("https://other.io".into()),
            access_token: Some("t".into()),
            ..Default::default()
        };
        let details = resolve_server_details(&selection, &servers(), env).unwrap();
        assert_eq!(details.lifecycle_url, "https://other.io/lifecycle/");
    }

    #[test]
    fn test_user_from_access_token_subject() {
        let claims = base64::encode_config(
            r#"{"sub":"jfrt@01abc/users/jane","scp":"applied-permissions/user"}"#,
            base64::URL_SAFE_NO_PAD,
        );
        let details = ServerDetails::new(
            "https://acme.jfrog.io",
            None,
            Credentials::AccessToken(format!("eyJhbGciOiJSUzI1NiJ9.{claims}.sig")),
        );
        assert_eq!(details.user().as_deref(), Some("jane"));

        let opaque = ServerDetails::new(
            "https://acme.jfrog.io",
            None,
            Credentials::AccessToken("t".into()),
        );
        assert_eq!(opaque.user(), None);
    }

    #[test]
    fn test_unknown_server_id_fails() {
        let selection = ServerSelection {
            server_id: Some("nope".into()),
            ..Default::default()
        };
        assert!(resolve_server_details(&selection, &servers(), env).is_err());
    }

    #[test]
    fn test_expand_template_vars() {
        let vars = parse_template_vars("repo=libs-local; type=maven").unwrap();
        let out = expand_template_vars(
            r#"{"key":"${repo}","packageType":"${type}","x":"${missing}"}"#,
            &vars,
        );
        assert_eq!(
            out,
            r#"{"key":"libs-local","packageType":"maven","x":"${missing}"}"#
        );
    }

    #[test]
    fn test_parse_template_vars_rejects_pairs_without_equals() {
        assert!(parse_template_vars("a=1;b").is_err());
    }
}
