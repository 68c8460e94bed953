use crate::extension::Extension;
use crate::repository::UrlRecord;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    /// The original URL to be shortened.
    pub long_url: String,
    /// Optional custom extension. `None` asks for a generated one.
    pub extension: Option<Extension>,
}

impl ShortenParams {
    /// Parameters for a randomly generated extension.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            extension: None,
        }
    }

    /// Requests a custom extension. An empty string is treated as no request.
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = Extension::custom(extension);
        self
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores a long URL and returns the extension it can be resolved by.
    ///
    /// Fails with `DuplicateKey` if a custom extension is already taken.
    async fn create(&self, params: ShortenParams) -> Result<Extension>;

    /// Removes the mapping for an extension.
    ///
    /// Fails with `NotFound` if the extension does not exist.
    async fn delete(&self, extension: &Extension) -> Result<()>;

    /// Returns the long URL for an extension and counts the access.
    ///
    /// Fails with `NotFound` if the extension does not exist.
    async fn resolve(&self, extension: &Extension) -> Result<String>;

    /// Returns the stored record without counting an access.
    ///
    /// Fails with `NotFound` if the extension does not exist.
    async fn stats(&self, extension: &Extension) -> Result<UrlRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extension_means_generated() {
        let params = ShortenParams::new("https://example.com").with_extension("");
        assert!(params.extension.is_none());
    }

    #[test]
    fn custom_extension_is_kept() {
        let params = ShortenParams::new("https://example.com").with_extension("abc123");
        assert_eq!(params.extension, Some(Extension::new("abc123")));
    }
}
