/// Constants used throughout the credkit codebase
// Environment variable names read by the environment source
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

// Profile selection
pub const PROFILE_VAR: &str = "AWS_PROFILE";
pub const SHARED_CREDENTIALS_FILE_VAR: &str = "AWS_SHARED_CREDENTIALS_FILE";
pub const DEFAULT_PROFILE: &str = "default";

// Shared credentials file layout, relative to the home directory
pub const DEFAULT_CREDENTIALS_DIR: &str = ".aws";
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials";

// Keys inside a profile section
pub const PROFILE_ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const PROFILE_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";

// Logging
pub const CREDKIT_LOG_VAR: &str = "CREDKIT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
