//! Signed evidence over artifacts, builds, release bundles and packages.

pub mod create;
pub mod envelope;
pub mod key;
pub mod subject;

pub use create::{create_evidence, CreateEvidenceRequest, EvidenceServices};
pub use subject::{resolve_subject, EvidenceSubject, SubjectFlags};
