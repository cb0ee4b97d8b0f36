use crate::constants::API_KEY_ENV_VAR;

/// An opaque TomTom API credential.
#[derive(Clone, Debug)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// Read the key from the `TOMTOM_API_KEY` environment variable.
    ///
    /// An unset variable yields an empty key, which is rejected on the first
    /// search rather than here.
    pub fn from_env() -> Self {
        Self {
            key: std::env::var(API_KEY_ENV_VAR).unwrap_or_default(),
        }
    }

    /// From a raw API key string.
    pub fn from_raw(key: &str) -> Self {
        Self {
            key: key.to_owned(),
        }
    }

    pub fn get(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}
