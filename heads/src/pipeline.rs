use std::sync::Arc;

use common::CanonicalId;
use fetcher::Fetcher;
use image_cache::DiskCache;
use mojang::{AssetLocator, IdentityResolver};
use tracing::debug;

use crate::{
    errors::{DecodeError, HeadError},
    face::extract_face,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadImage {
    pub id: CanonicalId,
    pub image: Vec<u8>,
}

/// Name or id in, cropped face PNG out.
///
/// A fresh cache entry short-circuits every remote call. Anything else
/// (missing or stale) goes profile -> skin download -> crop -> cache write.
/// Nothing is retried, and a stale entry is never served when the refetch
/// fails.
pub struct HeadPipeline {
    cache: DiskCache,
    resolver: IdentityResolver,
    locator: AssetLocator,
    fetcher: Arc<dyn Fetcher>,
}

impl HeadPipeline {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        cache: DiskCache,
        name_lookup_url: &str,
        profile_lookup_url: &str,
    ) -> Self {
        Self {
            cache,
            resolver: IdentityResolver::new(fetcher.clone(), name_lookup_url),
            locator: AssetLocator::new(fetcher.clone(), profile_lookup_url),
            fetcher,
        }
    }

    pub async fn get_head_by_name(&self, name: &str) -> Result<HeadImage, HeadError> {
        let id = self.resolver.resolve(name).await?;

        self.get_head(id).await
    }

    pub async fn get_head_by_id(&self, raw_id: &str) -> Result<HeadImage, HeadError> {
        let id = CanonicalId::parse(raw_id)?;

        self.get_head(id).await
    }

    async fn get_head(&self, id: CanonicalId) -> Result<HeadImage, HeadError> {
        if let Some(cached) = self.cache.get_item(&id).await {
            if cached.fresh {
                debug!("Disk cache hit for {}", id);
                return Ok(HeadImage {
                    id,
                    image: cached.image,
                });
            }

            debug!("Cached head for {} is stale, refetching", id);
        } else {
            debug!("Disk cache miss for {}", id);
        }

        let skin_url = self.locator.locate(&id).await?;
        let skin = self.fetcher.get(&skin_url).await?;

        let image = tokio::task::spawn_blocking(move || extract_face(&skin.raw_bytes))
            .await
            .map_err(DecodeError::TaskFailed)??;

        self.cache.insert_item(&id, &image).await?;

        Ok(HeadImage { id, image })
    }
}
