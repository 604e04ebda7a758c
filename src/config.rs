//! Guard configuration
//!
//! Redirect targets used when an access decision denies a request.

use thiserror::Error;

pub const SIGN_IN_PATH_VAR: &str = "CAKRANESIA_SIGN_IN_PATH";
pub const HOME_PATH_VAR: &str = "CAKRANESIA_HOME_PATH";

pub const DEFAULT_SIGN_IN_PATH: &str = "/auth/sign-in";
pub const DEFAULT_HOME_PATH: &str = "/";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an absolute path starting with '/', got {value:?}")]
    InvalidPath { var: &'static str, value: String },
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Where denied requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    pub sign_in_path: String,
    pub home_path: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
        }
    }
}

impl GuardConfig {
    /// Loads redirect targets from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `CAKRANESIA_SIGN_IN_PATH` (default: `/auth/sign-in`)
    /// - `CAKRANESIA_HOME_PATH` (default: `/`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but:
    /// - is not valid unicode
    /// - is empty or does not start with `/`
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            sign_in_path: path_from_env(SIGN_IN_PATH_VAR, DEFAULT_SIGN_IN_PATH)?,
            home_path: path_from_env(HOME_PATH_VAR, DEFAULT_HOME_PATH)?,
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            sign_in = %config.sign_in_path,
            home = %config.home_path,
            "guard configuration loaded"
        );

        Ok(config)
    }
}

fn path_from_env(var: &'static str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) => validate_path(var, value),
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(std::env::VarError::NotUnicode(_)) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Guard configuration FAILED: {} is not unicode", var);
            Err(ConfigError::NotUnicode(var))
        }
    }
}

fn validate_path(var: &'static str, value: String) -> Result<String, ConfigError> {
    if !value.starts_with('/') {
        #[cfg(feature = "tracing")]
        tracing::error!("Guard configuration FAILED: {} = {:?}", var, value);
        return Err(ConfigError::InvalidPath { var, value });
    }
    Ok(value)
}
