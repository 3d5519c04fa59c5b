//! Deployment mode detection.

/// Deployment mode of the running process.
///
/// Derived once from the `NODE_ENV` environment variable. Only the exact
/// string `development` selects [`DeploymentMode::Development`]; any other
/// value, or an unset variable, means [`DeploymentMode::Production`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    Development,
    Production,
}

impl DeploymentMode {
    /// Read the deployment mode from the process environment.
    ///
    /// The comparison is case-sensitive: `Development`, `dev` and friends
    /// all resolve to production.
    pub fn from_env() -> Self {
        match std::env::var("NODE_ENV") {
            Ok(value) if value == "development" => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}
