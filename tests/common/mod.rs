#![allow(dead_code)]

use async_trait::async_trait;
use jfrog_cli_artifactory::error::{CliError, Result};
use jfrog_cli_artifactory::platform::{
    ArtifactoryService, EvidenceService, LifecycleService, MetadataService, PromotionQuery,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Version,
    PutRepository { key: String, body: Value, is_update: bool },
    Batch { body: Value, is_update: bool },
    RepositoryDetails(String),
    FileSha256(String),
    BuildInfo { name: String, number: String, project: String },
    UploadEvidence { subject_path: String, envelope: Value },
    Graphql(String),
    CreateReleaseBundle {
        body: Value,
        project: String,
        is_async: bool,
        signing_key: Option<String>,
    },
    Distribute { name: String, version: String, project: String, body: Value },
    Promote { name: String, version: String, body: Value, query: PromotionQuery },
}

/// In-memory platform recording every call it receives.
#[derive(Default)]
pub struct FakePlatform {
    pub version: String,
    pub checksums: HashMap<String, String>,
    pub repositories: HashMap<String, Value>,
    pub build_info: Value,
    pub graphql_response: Value,
    pub calls: Mutex<Vec<Call>>,
}

impl FakePlatform {
    pub fn with_version(version: &str) -> Self {
        FakePlatform {
            version: version.to_string(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(what: &str) -> CliError {
    CliError::Service {
        method: "GET".into(),
        url: what.into(),
        status: 404,
        body: String::new(),
    }
}

#[async_trait]
impl ArtifactoryService for FakePlatform {
    async fn version(&self) -> Result<String> {
        self.record(Call::Version);
        Ok(self.version.clone())
    }

    async fn put_repository(&self, key: &str, body: &Value, is_update: bool) -> Result<()> {
        self.record(Call::PutRepository {
            key: key.to_string(),
            body: body.clone(),
            is_update,
        });
        Ok(())
    }

    async fn put_repositories_batch(&self, body: &[u8], is_update: bool) -> Result<()> {
        self.record(Call::Batch {
            body: serde_json::from_slice(body)?,
            is_update,
        });
        Ok(())
    }

    async fn repository_details(&self, key: &str) -> Result<Value> {
        self.record(Call::RepositoryDetails(key.to_string()));
        self.repositories.get(key).cloned().ok_or_else(|| not_found(key))
    }

    async fn file_sha256(&self, path: &str) -> Result<String> {
        self.record(Call::FileSha256(path.to_string()));
        self.checksums.get(path).cloned().ok_or_else(|| not_found(path))
    }

    async fn build_info(&self, name: &str, number: &str, project: &str) -> Result<Value> {
        self.record(Call::BuildInfo {
            name: name.to_string(),
            number: number.to_string(),
            project: project.to_string(),
        });
        Ok(self.build_info.clone())
    }
}

#[async_trait]
impl EvidenceService for FakePlatform {
    async fn upload_evidence(&self, subject_path: &str, envelope: &[u8]) -> Result<Value> {
        self.record(Call::UploadEvidence {
            subject_path: subject_path.to_string(),
            envelope: serde_json::from_slice(envelope)?,
        });
        Ok(serde_json::json!({ "subject": { "path": subject_path } }))
    }
}

#[async_trait]
impl MetadataService for FakePlatform {
    async fn graphql(&self, query: &str) -> Result<Value> {
        self.record(Call::Graphql(query.to_string()));
        Ok(self.graphql_response.clone())
    }
}

#[async_trait]
impl LifecycleService for FakePlatform {
    async fn create_release_bundle(
        &self,
        body: &Value,
        project: &str,
        is_async: bool,
        signing_key: Option<&str>,
    ) -> Result<Value> {
        self.record(Call::CreateReleaseBundle {
            body: body.clone(),
            project: project.to_string(),
            is_async,
            signing_key: signing_key.map(str::to_string),
        });
        Ok(Value::Null)
    }

    async fn distribute_release_bundle(
        &self,
        name: &str,
        version: &str,
        project: &str,
        body: &Value,
    ) -> Result<Value> {
        self.record(Call::Distribute {
            name: name.to_string(),
            version: version.to_string(),
            project: project.to_string(),
            body: body.clone(),
        });
        Ok(Value::Null)
    }

    async fn promote_release_bundle(
        &self,
        name: &str,
        version: &str,
        body: &Value,
        query: &PromotionQuery,
    ) -> Result<Value> {
        self.record(Call::Promote {
            name: name.to_string(),
            version: version.to_string(),
            body: body.clone(),
            query: query.clone(),
        });
        Ok(Value::Null)
    }
}
