use crate::adapters::outbound::filesystem::LocalRepositoryLocator;
use crate::adapters::outbound::maven::ChainedPomLocator;
use crate::adapters::outbound::network::{CachingPomLocator, RemoteRepositoryLocator};
use crate::ports::outbound::PomLocator;
use crate::shared::Result;
use std::path::PathBuf;
use tracing::debug;

/// Repository settings after CLI and config file have been merged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositorySettings {
    /// Local repository root; the user's `~/.m2/repository` when unset
    pub local_repository: Option<PathBuf>,
    /// Remote repositories, tried in order after the local one
    pub remote_repositories: Vec<String>,
    /// When set, no remote repository is contacted
    pub offline: bool,
}

/// Factory assembling the POM locator chain: the local repository first,
/// then each remote repository behind a cache
pub struct LocatorFactory;

impl LocatorFactory {
    /// # Errors
    /// Returns an error if a remote repository URL is invalid
    pub fn create(settings: &RepositorySettings) -> Result<ChainedPomLocator> {
        let mut locators: Vec<Box<dyn PomLocator>> = Vec::new();

        match settings
            .local_repository
            .clone()
            .or_else(LocalRepositoryLocator::default_root)
        {
            Some(root) => {
                debug!("Local repository: {}", root.display());
                locators.push(Box::new(LocalRepositoryLocator::new(root)));
            }
            None => debug!("No local repository available"),
        }

        if settings.offline {
            debug!("Offline mode: remote repositories are not used");
        } else {
            for url in &settings.remote_repositories {
                debug!("Remote repository: {}", url);
                let remote = RemoteRepositoryLocator::new(url)?;
                locators.push(Box::new(CachingPomLocator::new(remote)));
            }
        }

        Ok(ChainedPomLocator::new(locators))
    }
}
