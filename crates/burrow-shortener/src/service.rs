use async_trait::async_trait;
use burrow_core::{
    Extension, Repository, ShortenParams, Shortener, ShortenerError, StorageError, UrlRecord,
};
use burrow_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 256;

/// Tunables for [`ShortenerService`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ShortenerSettings {
    /// How many generated candidates to try before giving up with
    /// [`ShortenerError::GenerationExhausted`].
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Extension allocation (generated or custom)
/// - Access counting on resolution
/// - Mapping storage errors to caller-facing errors
///
/// Generated candidates are inserted directly; the repository rejects a
/// taken extension atomically and the service draws a new candidate, up to
/// `max_attempts` times.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_settings(repository, generator, ShortenerSettings::default())
    }

    pub fn with_settings(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    async fn insert_custom(
        &self,
        extension: Extension,
        record: UrlRecord,
    ) -> Result<Extension, ShortenerError> {
        self.repository
            .insert(&extension, record)
            .await
            .map_err(storage_to_shortener_error)?;
        debug!(extension = %extension, "created custom extension");
        Ok(extension)
    }

    /// Rejection sampling: draw candidates until one inserts cleanly.
    async fn insert_generated(&self, record: UrlRecord) -> Result<Extension, ShortenerError> {
        let max_attempts = self.settings.max_attempts;

        for attempt in 1..=max_attempts {
            let candidate: Extension = self.generator.generate().into();

            match self.repository.insert(&candidate, record.clone()).await {
                Ok(()) => {
                    debug!(extension = %candidate, attempt, "created generated extension");
                    return Ok(candidate);
                }
                Err(StorageError::Conflict(_)) => {
                    trace!(extension = %candidate, attempt, "generated extension collided");
                }
                Err(e) => return Err(storage_to_shortener_error(e)),
            }
        }

        warn!(attempts = max_attempts, "gave up generating a free extension");
        Err(ShortenerError::GenerationExhausted {
            attempts: max_attempts,
        })
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn create(&self, params: ShortenParams) -> Result<Extension, ShortenerError> {
        let record = UrlRecord::new(params.long_url);

        // An empty custom extension is the same as none.
        match params.extension.filter(|e| !e.is_empty()) {
            Some(extension) => self.insert_custom(extension, record).await,
            None => self.insert_generated(record).await,
        }
    }

    async fn delete(&self, extension: &Extension) -> Result<(), ShortenerError> {
        let removed = self
            .repository
            .delete(extension)
            .await
            .map_err(storage_to_shortener_error)?;

        if !removed {
            return Err(ShortenerError::NotFound(extension.to_string()));
        }

        debug!(extension = %extension, "deleted extension");
        Ok(())
    }

    async fn resolve(&self, extension: &Extension) -> Result<String, ShortenerError> {
        trace!(extension = %extension, "resolving extension");

        self.repository
            .hit(extension)
            .await
            .map_err(storage_to_shortener_error)?
            .ok_or_else(|| ShortenerError::NotFound(extension.to_string()))
    }

    async fn stats(&self, extension: &Extension) -> Result<UrlRecord, ShortenerError> {
        self.repository
            .get(extension)
            .await
            .map_err(storage_to_shortener_error)?
            .ok_or_else(|| ShortenerError::NotFound(extension.to_string()))
    }
}

/// Converts a StorageError to a ShortenerError.
fn storage_to_shortener_error(e: StorageError) -> ShortenerError {
    match e {
        StorageError::Conflict(extension) => ShortenerError::DuplicateKey(extension),
        other => ShortenerError::Storage(other.to_string()),
    }
}
