use crate::dependency_info::domain::Gav;
use crate::ports::outbound::{PomLocator, PomSource};
use crate::shared::Result;
use tracing::debug;

/// ChainedPomLocator tries a list of locators in order and returns the first
/// POM found
pub struct ChainedPomLocator {
    locators: Vec<Box<dyn PomLocator>>,
}

impl ChainedPomLocator {
    pub fn new(locators: Vec<Box<dyn PomLocator>>) -> Self {
        Self { locators }
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

impl PomLocator for ChainedPomLocator {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        let mut failures = Vec::with_capacity(self.locators.len());

        for locator in &self.locators {
            match locator.locate(gav) {
                Ok(source) => return Ok(source),
                Err(e) => {
                    debug!("Locator miss for {}: {:#}", gav, e);
                    failures.push(format!("{:#}", e));
                }
            }
        }

        if failures.is_empty() {
            anyhow::bail!("No repository configured to locate POM of {}", gav);
        }
        anyhow::bail!(
            "POM of {} not found in any repository:\n  - {}",
            gav,
            failures.join("\n  - ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl PomLocator for Fixed {
        fn locate(&self, gav: &Gav) -> Result<PomSource> {
            match self.0 {
                Some(content) => Ok(PomSource::new(gav.to_string(), content)),
                None => anyhow::bail!("missing {}", gav),
            }
        }
    }

    #[test]
    fn test_first_hit_wins() {
        let chain = ChainedPomLocator::new(vec![
            Box::new(Fixed(None)),
            Box::new(Fixed(Some("<first/>"))),
            Box::new(Fixed(Some("<second/>"))),
        ]);
        let source = chain.locate(&Gav::new("g", "a", "1")).unwrap();
        assert_eq!(source.content, "<first/>");
    }

    #[test]
    fn test_all_failures_are_reported() {
        let chain = ChainedPomLocator::new(vec![Box::new(Fixed(None)), Box::new(Fixed(None))]);
        let message = chain
            .locate(&Gav::new("g", "a", "1"))
            .unwrap_err()
            .to_string();
        assert_eq!(message.matches("missing g:a:1").count(), 2);
    }

    #[test]
    fn test_empty_chain() {
        let chain = ChainedPomLocator::new(vec![]);
        assert!(chain.is_empty());
        assert!(chain.locate(&Gav::new("g", "a", "1")).is_err());
    }
}
