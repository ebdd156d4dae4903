//! Identity resolution ports
//!
//! Converts a free-text token into a stable player identity. The engine
//! bounds the lookup with `tokio::time::timeout`; an elapsed deadline is
//! reported distinctly from not-found, because the two drive different
//! fallback behaviour: the alias fallback only applies to not-found.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use wayfare_core_types::PlayerId;

/// Failure modes of the external directory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The directory itself is unreachable or failed
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// External identity directory
///
/// `lookup` returns `Ok(None)` for a token the directory does not know;
/// deadline enforcement is the caller's job.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    async fn lookup(&self, token: &str) -> Result<Option<PlayerId>, LookupError>;
}

/// Resolve a free-text token into zero or one player identity
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the token
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if the underlying directory fails outright.
    async fn resolve(&self, token: &str) -> Result<Option<PlayerId>, LookupError>;
}

/// Resolver that consults a fast local cache before the directory
///
/// Successful directory hits populate the cache; misses are not cached,
/// so a player who joins later is found on the next call.
pub struct CachedResolver {
    directory: Arc<dyn PlayerDirectory>,
    cache: RwLock<HashMap<String, PlayerId>>,
}

impl CachedResolver {
    pub fn new(directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            directory,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Pre-populate the cache with a known token/identity pair
    pub async fn prime(&self, token: impl Into<String>, id: PlayerId) {
        self.cache.write().await.insert(token.into(), id);
    }
}

#[async_trait]
impl IdentityResolver for CachedResolver {
    async fn resolve(&self, token: &str) -> Result<Option<PlayerId>, LookupError> {
        if let Some(id) = self.cache.read().await.get(token) {
            return Ok(Some(*id));
        }
        // UUID-shaped tokens resolve without a directory round trip.
        if let Some(id) = PlayerId::parse(token) {
            return Ok(Some(id));
        }
        match self.directory.lookup(token).await? {
            Some(id) => {
                self.cache.write().await.insert(token.to_string(), id);
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }
}

/// Fixed-map resolver for tests and offline embedders
#[derive(Default)]
pub struct StaticResolver {
    entries: HashMap<String, PlayerId>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: impl Into<String>, id: PlayerId) -> Self {
        self.entries.insert(token.into(), id);
        self
    }
}

#[async_trait]
impl IdentityResolver for StaticResolver {
    async fn resolve(&self, token: &str) -> Result<Option<PlayerId>, LookupError> {
        Ok(self
            .entries
            .get(token)
            .copied()
            .or_else(|| PlayerId::parse(token)))
    }
}
