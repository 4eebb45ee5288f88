//! HTTP access to the JFrog platform services.
//!
//! Each service is a trait so that orchestration code can run against in-memory fakes;
//! [`PlatformClient`] implements all of them over one `reqwest` client.

use crate::config::{Credentials, ServerDetails};
use crate::error::{CliError, Result};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, RequestBuilder, Url,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Artifactory REST operations used by the repository and evidence commands.
#[async_trait]
pub trait ArtifactoryService: Send + Sync {
    /// Version string reported by `api/system/version`.
    async fn version(&self) -> Result<String>;

    /// Create (`PUT`) or update (`POST`) a single repository.
    async fn put_repository(&self, key: &str, body: &Value, is_update: bool) -> Result<()>;

    /// Create or update many repositories in one call.
    async fn put_repositories_batch(&self, body: &[u8], is_update: bool) -> Result<()>;

    /// Repository configuration as returned by `api/repositories/{key}`.
    async fn repository_details(&self, key: &str) -> Result<Value>;

    /// SHA-256 of a stored file.
    async fn file_sha256(&self, path: &str) -> Result<String>;

    /// Build info document for a build run.
    async fn build_info(&self, name: &str, number: &str, project: &str) -> Result<Value>;
}

#[async_trait]
pub trait EvidenceService: Send + Sync {
    /// Upload a signed envelope attached to `subject_path`.
    async fn upload_evidence(&self, subject_path: &str, envelope: &[u8]) -> Result<Value>;
}

#[async_trait]
pub trait MetadataService: Send + Sync {
    /// Run a GraphQL query against the metadata service.
    async fn graphql(&self, query: &str) -> Result<Value>;
}

#[async_trait]
pub trait LifecycleService: Send + Sync {
    async fn create_release_bundle(
        &self,
        body: &Value,
        project: &str,
        is_async: bool,
        signing_key: Option<&str>,
    ) -> Result<Value>;

    async fn distribute_release_bundle(
        &self,
        name: &str,
        version: &str,
        project: &str,
        body: &Value,
    ) -> Result<Value>;

    async fn promote_release_bundle(
        &self,
        name: &str,
        version: &str,
        body: &Value,
        query: &PromotionQuery,
    ) -> Result<Value>;
}

/// Query parameters and headers of a promotion request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionQuery {
    pub project: String,
    pub is_async: bool,
    /// `copy` or `move`
    pub operation: String,
    pub signing_key: Option<String>,
}

pub struct PlatformClient {
    pub details: ServerDetails,
    pub client: Client,
}

impl PlatformClient {
    pub fn new(details: ServerDetails) -> Result<Self> {
        let mut headers = HeaderMap::new();
        match &details.credentials {
            Credentials::Anonymous => {}
            Credentials::Basic { username, password } => {
                let token =
                    base64::encode_config(format!("{}:{}", username, password), base64::STANDARD);
                let hv = HeaderValue::from_str(&format!("Basic {}", token))
                    .map_err(|e| CliError::Validation(format!("invalid credentials: {e}")))?;
                headers.insert(AUTHORIZATION, hv);
            }
            Credentials::AccessToken(token) => {
                let hv = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| CliError::Validation(format!("invalid access token: {e}")))?;
                headers.insert(AUTHORIZATION, hv);
            }
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(PlatformClient { details, client })
    }

    /// Join a base service URL with path segments, percent-encoding each segment.
    fn url(&self, base: &str, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(base)
            .map_err(|e| CliError::Validation(format!("invalid URL '{base}': {e}")))?;
        url.path_segments_mut()
            .map_err(|_| CliError::Validation(format!("URL '{base}' cannot be a base")))?
            .pop_if_empty()
            .extend(segments.iter().flat_map(|s| s.split('/')).filter(|s| !s.is_empty()));
        Ok(url)
    }

    fn artifactory(&self, segments: &[&str]) -> Result<Url> {
        self.url(&self.details.artifactory_url, segments)
    }

    /// `promotion/records/{name}/{version}?project=&async=&operation=`
    fn promotion_url(&self, name: &str, version: &str, query: &PromotionQuery) -> Result<Url> {
        let mut url = self.url(
            &self.details.lifecycle_url,
            &["api", "v2", "promotion", "records"],
        )?;
        url.path_segments_mut()
            .map_err(|_| CliError::Validation("invalid lifecycle URL".into()))?
            .push(name)
            .push(version);
        {
            let mut pairs = url.query_pairs_mut();
            if !query.project.is_empty() {
                pairs.append_pair("project", &query.project);
            }
            pairs.append_pair("async", if query.is_async { "true" } else { "false" });
            pairs.append_pair("operation", &query.operation);
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        req: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<String> {
        debug!("{} {}", method, url);
        let resp = req(self.client.request(method.clone(), url.clone()))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(CliError::Service {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn send_json(
        &self,
        method: Method,
        url: Url,
        req: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Value> {
        let body = self.send(method, url, req).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ArtifactoryService for PlatformClient {
    async fn version(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct VersionResponse {
            version: String,
        }

        let url = self.artifactory(&["api", "system", "version"])?;
        let body = self.send(Method::GET, url, |r| r).await?;
        let resp: VersionResponse = serde_json::from_str(&body)?;
        Ok(resp.version)
    }

    async fn put_repository(&self, key: &str, body: &Value, is_update: bool) -> Result<()> {
        let url = self.artifactory(&["api", "repositories", key])?;
        let method = if is_update { Method::POST } else { Method::PUT };
        self.send(method, url, |r| r.json(body)).await?;
        Ok(())
    }

    async fn put_repositories_batch(&self, body: &[u8], is_update: bool) -> Result<()> {
        let url = self.artifactory(&["api", "v2", "repositories", "batch"])?;
        let method = if is_update { Method::POST } else { Method::PUT };
        let body = body.to_vec();
        self.send(method, url, |r| {
            r.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body)
        })
        .await?;
        Ok(())
    }

    async fn repository_details(&self, key: &str) -> Result<Value> {
        let url = self.artifactory(&["api", "repositories", key])?;
        self.send_json(Method::GET, url, |r| r).await
    }

    async fn file_sha256(&self, path: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct StorageInfo {
            checksums: Checksums,
        }

        #[derive(Deserialize)]
        struct Checksums {
            sha256: String,
        }

        let url = self.artifactory(&["api", "storage", path])?;
        let body = self.send(Method::GET, url, |r| r).await?;
        let info: StorageInfo = serde_json::from_str(&body)?;
        Ok(info.checksums.sha256)
    }

    async fn build_info(&self, name: &str, number: &str, project: &str) -> Result<Value> {
        let mut url = self.url(&self.details.artifactory_url, &["api", "build"])?;
        url.path_segments_mut()
            .map_err(|_| CliError::Validation("invalid Artifactory URL".into()))?
            .push(name)
            .push(number);
        if !project.is_empty() {
            url.query_pairs_mut().append_pair("project", project);
        }
        self.send_json(Method::GET, url, |r| r).await
    }
}

#[async_trait]
impl EvidenceService for PlatformClient {
    async fn upload_evidence(&self, subject_path: &str, envelope: &[u8]) -> Result<Value> {
        let url = self.url(&self.details.evidence_url, &["api", "v1", "subject", subject_path])?;
        let body = envelope.to_vec();
        self.send_json(Method::POST, url, |r| {
            r.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body)
        })
        .await
    }
}

#[async_trait]
impl MetadataService for PlatformClient {
    async fn graphql(&self, query: &str) -> Result<Value> {
        let url = self.url(&self.details.metadata_url, &["api", "v1", "query"])?;
        let body = serde_json::json!({ "query": query });
        self.send_json(Method::POST, url, |r| r.json(&body)).await
    }
}

#[async_trait]
impl LifecycleService for PlatformClient {
    async fn create_release_bundle(
        &self,
        body: &Value,
        project: &str,
        is_async: bool,
        signing_key: Option<&str>,
    ) -> Result<Value> {
        let mut url = self.url(&self.details.lifecycle_url, &["api", "v2", "release_bundle"])?;
        {
            let mut query = url.query_pairs_mut();
            if !project.is_empty() {
                query.append_pair("project", project);
            }
            query.append_pair("async", if is_async { "true" } else { "false" });
        }
        let signing_key = signing_key.map(str::to_string);
        self.send_json(Method::POST, url, |r| {
            let r = r.json(body);
            match signing_key {
                Some(key) => r.header("X-JFrog-Signing-Key-Name", key),
                None => r,
            }
        })
        .await
    }

    async fn distribute_release_bundle(
        &self,
        name: &str,
        version: &str,
        project: &str,
        body: &Value,
    ) -> Result<Value> {
        let mut url = self.url(
            &self.details.lifecycle_url,
            &["api", "v2", "distribution", "distribute"],
        )?;
        url.path_segments_mut()
            .map_err(|_| CliError::Validation("invalid lifecycle URL".into()))?
            .push(name)
            .push(version);
        if !project.is_empty() {
            url.query_pairs_mut().append_pair("project", project);
        }
        self.send_json(Method::POST, url, |r| r.json(body)).await
    }

    async fn promote_release_bundle(
        &self,
        name: &str,
        version: &str,
        body: &Value,
        query: &PromotionQuery,
    ) -> Result<Value> {
        let url = self.promotion_url(name, version, query)?;
        let signing_key = query.signing_key.clone();
        self.send_json(Method::POST, url, |r| {
            let r = r.json(body);
            match signing_key {
                Some(key) => r.header("X-JFrog-Signing-Key-Name", key),
                None => r,
            }
        })
        .await
    }
}
