use crate::dependency_info::domain::Gav;
use crate::ports::outbound::{PomLocator, PomSource};
use crate::shared::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingPomLocator wraps a PomLocator and memoizes successful lookups.
///
/// Parent POMs and BOMs are shared by many modules, so the same Gav is
/// requested repeatedly while building effective models. Failures are not
/// cached.
pub struct CachingPomLocator<L: PomLocator> {
    inner: L,
    cache: Arc<DashMap<Gav, PomSource>>,
}

impl<L: PomLocator> CachingPomLocator<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<L: PomLocator> PomLocator for CachingPomLocator<L> {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        if let Some(cached) = self.cache.get(gav) {
            return Ok(cached.clone());
        }

        let source = self.inner.locate(gav)?;
        self.cache.insert(gav.clone(), source.clone());
        Ok(source)
    }
}
