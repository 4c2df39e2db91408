//! Client configuration.
//!
//! Every value has a hard-coded default matching what the chat service
//! expects from its own web front end. The CLI overrides individual fields.

/// Default chat service origin
pub const DEFAULT_BASE_URL: &str = "https://c.kuku.lu";

/// Default display name attached to posted messages
pub const DEFAULT_PROFILE_NAME: &str = "匿名とむ";

/// Default display color attached to posted messages
pub const DEFAULT_PROFILE_COLOR: &str = "#000000";

/// Browser user agent sent with message posts
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36";

/// Configuration for a [`ChatClient`](crate::ChatClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Service origin, without trailing slash (e.g. `https://c.kuku.lu`)
    pub base_url: String,
    /// `profile_name` form field for sent messages
    pub profile_name: String,
    /// `profile_color` form field for sent messages
    pub profile_color: String,
    /// `User-Agent` header for sent messages
    pub user_agent: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_name: DEFAULT_PROFILE_NAME.to_string(),
            profile_color: DEFAULT_PROFILE_COLOR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ChatConfig {
    /// Default configuration pointed at another origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Origin with any trailing slashes removed
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Absolute URL for a path on the service (path must start with `/`)
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin(), path)
    }
}
