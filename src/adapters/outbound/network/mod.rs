/// Network adapters fetching POMs from remote Maven repositories
mod caching_locator;
mod remote_repository;

pub use caching_locator::CachingPomLocator;
pub use remote_repository::{RemoteRepositoryLocator, MAVEN_CENTRAL_URL};
