use depinfo::ports::outbound::PomSource;
use depinfo::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock PomLocator serving POM text from memory and counting lookups
#[derive(Default)]
pub struct MockPomLocator {
    poms: HashMap<Gav, String>,
    calls: Arc<AtomicUsize>,
}

impl MockPomLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pom(mut self, group_id: &str, artifact_id: &str, version: &str, pom: &str) -> Self {
        self.poms
            .insert(Gav::new(group_id, artifact_id, version), pom.to_string());
        self
    }

    /// Shared lookup counter, still readable after the locator is moved
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PomLocator for MockPomLocator {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.poms.get(gav) {
            Some(content) => Ok(PomSource::new(format!("mock://{}", gav), content.clone())),
            None => anyhow::bail!("Mock POM not found: {}", gav),
        }
    }
}
