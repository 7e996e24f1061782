mod formatter_factory;
mod locator_factory;
mod presenter_factory;

pub use formatter_factory::FormatterFactory;
pub use locator_factory::{LocatorFactory, RepositorySettings};
pub use presenter_factory::{PresenterFactory, PresenterType};
