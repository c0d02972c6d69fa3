use serde::de::DeserializeOwned;

/// Error returned when configuration cannot be read from the environment.
#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] envy::Error);

/// Trait for loading configuration from prefixed environment variables.
///
/// Implementors derive `serde::Deserialize` with `#[serde(default = ...)]` on
/// optional fields, then call `Config::from_env()` at startup.
pub trait Config: Sized + DeserializeOwned {
    /// Variable prefix, e.g. `"FIELDOPS_"`.
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(Self::PREFIX).from_env()?)
    }

    /// Load from an explicit set of variables instead of the process environment.
    fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(Self::PREFIX).from_iter(vars)?)
    }
}
