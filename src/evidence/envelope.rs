//! in-toto statements wrapped in signed DSSE envelopes.

use crate::error::{KeyError, Result};
use chrono::{SecondsFormat, Utc};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

pub const STATEMENT_TYPE: &str = "https://in-toto.io/Statement/v1";
pub const PAYLOAD_TYPE: &str = "application/vnd.in-toto+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub digest: Digest,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    #[serde(rename = "_type")]
    pub statement_type: String,
    pub subject: Vec<ResourceDescriptor>,
    pub predicate_type: String,
    pub predicate: Value,
    pub created_at: String,
    pub created_by: Option<String>,
    pub markdown: Option<String>,
}

impl Statement {
    pub fn new(predicate: Value, predicate_type: &str, created_by: Option<&str>) -> Self {
        Statement {
            statement_type: STATEMENT_TYPE.to_string(),
            subject: Vec::new(),
            predicate_type: predicate_type.to_string(),
            predicate,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            created_by: created_by.filter(|u| !u.is_empty()).map(str::to_string),
            markdown: None,
        }
    }

    pub fn with_subject(mut self, sha256: &str) -> Self {
        self.subject = vec![ResourceDescriptor {
            digest: Digest {
                sha256: sha256.to_string(),
            },
        }];
        self
    }

    pub fn with_markdown(mut self, markdown: Option<String>) -> Self {
        self.markdown = markdown;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeSignature {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keyid: String,
    pub sig: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub payload: String,
    pub payload_type: String,
    pub signatures: Vec<EnvelopeSignature>,
}

/// DSSE pre-authentication encoding: `DSSEv1 <len> <type> <len> <body>`.
pub fn pae(payload_type: &str, payload: &[u8]) -> Vec<u8> {
    let mut out = format!(
        "DSSEv1 {} {} {} ",
        payload_type.len(),
        payload_type,
        payload.len()
    )
    .into_bytes();
    out.extend_from_slice(payload);
    out
}

impl Envelope {
    pub fn sign(payload: &[u8], payload_type: &str, key: &SigningKey, key_id: &str) -> Self {
        let sig = key.sign(&pae(payload_type, payload));
        Envelope {
            payload: base64::encode(payload),
            payload_type: payload_type.to_string(),
            signatures: vec![EnvelopeSignature {
                keyid: key_id.to_string(),
                sig: base64::encode(sig.to_bytes()),
            }],
        }
    }

    pub fn sign_statement(statement: &Statement, key: &SigningKey, key_id: &str) -> Result<Self> {
        let payload = serde_json::to_vec(statement)?;
        Ok(Envelope::sign(&payload, PAYLOAD_TYPE, key, key_id))
    }

    /// Check that at least one signature verifies under `key`.
    ///
    /// Offered to library callers; no CLI command verifies envelopes.
    pub fn verify(&self, key: &VerifyingKey) -> std::result::Result<(), KeyError> {
        let payload =
            base64::decode(&self.payload).map_err(|e| KeyError::Malformed(e.to_string()))?;
        let message = pae(&self.payload_type, &payload);
        let verified = self.signatures.iter().any(|s| {
            base64::decode(&s.sig)
                .ok()
                .and_then(|bytes| Signature::from_slice(&bytes).ok())
                .is_some_and(|sig| key.verify(&message, &sig).is_ok())
        });
        if verified {
            Ok(())
        } else {
            Err(KeyError::Malformed("no signature matches the public key".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key() -> SigningKey {
        SigningKey::from_bytes(&[3u8; 32])
    }

    #[test]
    fn test_pae_layout() {
        assert_eq!(
            pae("application/vnd.in-toto+json", b"{}"),
            b"DSSEv1 28 application/vnd.in-toto+json 2 {}".to_vec()
        );
    }

    #[test]
    fn test_statement_json_shape() {
        let statement = Statement::new(
            json!({"ok": true}),
            "https://slsa.dev/provenance/v1",
            Some("ci-user"),
        )
        .with_subject("abc123")
            .with_markdown(Some("# Report".into()));
        let value = serde_json::to_value(&statement).unwrap();
        assert_eq!(value["_type"], STATEMENT_TYPE);
        assert_eq!(value["subject"], json!([{"digest": {"sha256": "abc123"}}]));
        assert_eq!(value["predicateType"], "https://slsa.dev/provenance/v1");
        assert_eq!(value["createdBy"], "ci-user");
        assert_eq!(value["markdown"], "# Report");
        assert!(value["createdAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_anonymous_statement_omits_creator() {
        let value = serde_json::to_value(Statement::new(json!({}), "t", None)).unwrap();
        assert!(value.get("createdBy").is_none());
        assert!(value.get("markdown").is_none());
    }

    #[test]
    fn test_signed_envelope_verifies() {
        let statement = Statement::new(json!({"a": 1}), "t", None).with_subject("ff");
        let envelope = Envelope::sign_statement(&statement, &key(), "my-alias").unwrap();
        assert_eq!(envelope.payload_type, PAYLOAD_TYPE);
        assert_eq!(envelope.signatures[0].keyid, "my-alias");
        envelope.verify(&key().verifying_key()).unwrap();

        let decoded: Statement =
            serde_json::from_slice(&base64::decode(&envelope.payload).unwrap()).unwrap();
        assert_eq!(decoded, statement);
    }

    #[test]
    fn test_tampered_payload_fails_verification() {
        let mut envelope = Envelope::sign(b"{\"a\":1}", PAYLOAD_TYPE, &key(), "");
        envelope.payload = base64::encode(b"{\"a\":2}");
        assert!(envelope.verify(&key().verifying_key()).is_err());
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json["signatures"][0].get("keyid").is_none());
    }
}
