use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// The short identifier under which a long URL is stored.
///
/// Extensions are opaque keys. No normalization or character validation is
/// applied; callers that surface extensions through a transport (HTTP paths,
/// query strings) are responsible for keeping them legal there.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Extension(SmolStr);

impl Extension {
    /// Creates an extension from the given string, verbatim.
    pub fn new(extension: impl AsRef<str>) -> Self {
        Self(SmolStr::new(extension))
    }

    /// Interprets a caller-supplied extension.
    ///
    /// An empty string means "no custom extension" and yields `None`, so the
    /// caller falls back to a generated one.
    pub fn custom(extension: impl AsRef<str>) -> Option<Self> {
        let extension = extension.as_ref();
        if extension.is_empty() {
            None
        } else {
            Some(Self::new(extension))
        }
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the extension as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Extension {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Extension {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Extension {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
