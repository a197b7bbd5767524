use crate::error::{ConfigError, Result};
use std::path::PathBuf;

/// Environment variable consulted when no API key is passed explicitly
pub const API_KEY_ENV: &str = "MANDRILL_APIKEY";

/// Configuration for the Mandrill API client
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the API, operation paths are appended to it
    pub base_url: String,

    /// Log request URLs, statuses and response bodies at debug level
    pub debug: bool,
}

fn default_base_url() -> String {
    "https://mandrillapp.com/api/1.0".to_string()
}

/// Places an API key is looked up when none is given explicitly.
#[derive(Debug, Clone)]
pub struct KeySources {
    /// Environment variable holding the key
    pub env_var: String,

    /// Key files, tried in order
    pub files: Vec<PathBuf>,
}

impl Default for KeySources {
    fn default() -> Self {
        let mut files = Vec::new();
        if let Some(home) = dirs::home_dir() {
            files.push(home.join(".mandrill.key"));
        }
        files.push(PathBuf::from("/etc/mandrill.key"));

        Self {
            env_var: API_KEY_ENV.to_string(),
            files,
        }
    }
}

impl KeySources {
    fn env_key(&self) -> Option<String> {
        std::env::var(&self.env_var).ok().and_then(non_empty)
    }

    fn file_key(&self) -> Option<(&PathBuf, String)> {
        self.files.iter().find_map(|path| {
            // Missing or unreadable files fall through to the next candidate.
            let contents = std::fs::read_to_string(path).ok()?;
            non_empty(contents).map(|key| (path, key))
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Config {
    /// Create a new Config with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            debug: false,
        }
    }

    /// Load configuration from the default sources with priority:
    /// 1. Provided api_key argument
    /// 2. `MANDRILL_APIKEY` environment variable
    /// 3. `~/.mandrill.key`
    /// 4. `/etc/mandrill.key`
    pub fn load(api_key: Option<String>) -> Result<Self> {
        Self::load_from(api_key, &KeySources::default())
    }

    /// Load configuration, looking the key up in `sources` when `api_key` is
    /// absent. Blank values count as absent at every step. An explicit key is
    /// used exactly as given; env and file values are trimmed.
    pub fn load_from(api_key: Option<String>, sources: &KeySources) -> Result<Self> {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            tracing::debug!("using API key passed explicitly");
            return Ok(Self::new(key));
        }

        if let Some(key) = sources.env_key() {
            tracing::debug!(var = %sources.env_var, "using API key from environment");
            return Ok(Self::new(key));
        }

        if let Some((path, key)) = sources.file_key() {
            tracing::debug!(path = %path.display(), "using API key from file");
            return Ok(Self::new(key));
        }

        Err(ConfigError::MissingCredential.into())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential.into());
        }

        Ok(())
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Toggle debug logging of requests and responses
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
