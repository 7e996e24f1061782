use crate::dependency_info::domain::Gav;
use crate::shared::Result;
use std::sync::Arc;

/// Raw POM text together with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomSource {
    /// File path or URL the POM was read from
    pub location: String,
    pub content: String,
}

impl PomSource {
    pub fn new(location: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            content: content.into(),
        }
    }
}

/// PomLocator port for finding the POM of a module
///
/// Implementations are repository-aware: a local repository layout, a remote
/// HTTP repository, or a decorator over other locators. The effective model
/// builder also uses the locator to fetch parent POMs and imported BOMs.
pub trait PomLocator: Send + Sync {
    /// Locates the POM for `gav`
    ///
    /// # Errors
    /// Returns an error if the POM does not exist in this repository or
    /// cannot be read
    fn locate(&self, gav: &Gav) -> Result<PomSource>;
}

impl<L: PomLocator + ?Sized> PomLocator for Box<L> {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        (**self).locate(gav)
    }
}

impl<L: PomLocator + ?Sized> PomLocator for Arc<L> {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        (**self).locate(gav)
    }
}

impl<L: PomLocator + ?Sized> PomLocator for &L {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        (**self).locate(gav)
    }
}
