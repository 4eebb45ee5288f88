//! Error taxonomy shared by the repository, lifecycle and evidence flows.
//!
//! Every failure is returned to the caller as-is; nothing in the library retries or
//! recovers locally. The binary renders the chain and sets the exit code.

/// Errors raised while turning user input into platform calls.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Missing or malformed user input.
    #[error("{0}")]
    Validation(String),

    /// Template field that has no registered coercion.
    #[error("template syntax error: unknown key '{field}'")]
    InvalidField { field: String },

    /// Template value that cannot be coerced into the field's type.
    #[error("invalid value '{value}' for key '{field}': {reason}")]
    Coercion {
        field: String,
        value: String,
        reason: String,
    },

    /// One or more configurations lack a `key`; all offenders are reported together.
    #[error("'key' is missing in the following configs:\n{}", .configs.join("\n"))]
    MissingKeys { configs: Vec<String> },

    #[error("unsupported rclass: {rclass}")]
    UnsupportedRclass { rclass: String },

    #[error("unsupported package type '{package_type}' for rclass '{rclass}'")]
    UnsupportedPackageType {
        rclass: String,
        package_type: String,
    },

    /// The platform reports a version older than the feature requires.
    #[error("{feature} is supported from {product} version {required}, current version: {actual}")]
    UnsupportedVersion {
        product: String,
        feature: String,
        required: String,
        actual: String,
    },

    /// A configuration could not be decoded into its typed parameters.
    #[error("malformed {rclass} {package_type} repository configuration")]
    MalformedConfig {
        rclass: String,
        package_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("multiple subjects found: [{}]", .fields.join(", "))]
    AmbiguousSubject { fields: Vec<String> },

    #[error("subject must be one of the fields: [{}]", .expected.join(", "))]
    NoSubject { expected: Vec<String> },

    #[error(transparent)]
    Key(#[from] KeyError),

    /// Non-2xx answer from a platform service.
    #[error("{method} {url} returned {status}: {body}")]
    Service {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Problems with signing key material.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("key does not contain a private key")]
    MissingPrivateKey,

    #[error("key does not contain a public key")]
    MissingPublicKey,

    #[error("unsupported key type '{0}', only ed25519 keys are supported")]
    UnsupportedKeyType(String),

    #[error("unable to parse key: {0}")]
    Malformed(String),

    #[error("unable to read key file '{path}'")]
    KeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
