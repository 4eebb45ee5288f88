pub const SERVERS_FILE: &str = "jfrog-cli-artifactory/servers.yaml";
pub const SERVERS_PATH_ENV: &str = "JFROG_CLI_SERVERS_PATH";
pub const LOG_LEVEL_ENV: &str = "JFROG_CLI_LOG_LEVEL";

pub const SIGNING_KEY_ENV: &str = "JFROG_CLI_SIGNING_KEY";
pub const KEY_ALIAS_ENV: &str = "JFROG_CLI_KEY_ALIAS";
pub const BUILD_NAME_ENV: &str = "JFROG_CLI_BUILD_NAME";
pub const BUILD_NUMBER_ENV: &str = "JFROG_CLI_BUILD_NUMBER";

pub const MIN_LIFECYCLE_VERSION: &str = "7.63.2";
pub const MIN_BATCH_CREATE_VERSION: &str = "7.84.3";
pub const MIN_BATCH_UPDATE_VERSION: &str = "7.104.2";
pub const MIN_MULTI_SOURCE_AND_PACKAGES_VERSION: &str = "7.114.0";
