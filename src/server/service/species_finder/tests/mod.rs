
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    model::species::SpeciesMetadata,
    server::{
        cache::{MemoryCache, SpeciesCache},
        error::provider::ProviderError,
        provider::MetadataProvider,
    },
};

/// Provider double that answers (or fails) after an optional delay and counts its calls
struct MockProvider {
    name: &'static str,
    fail: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockProvider {
    fn answering(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: false,
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: true,
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn slow(name: &'static str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: false,
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataProvider for MockProvider {
    async fn fetch_metadata(&self, name: &str) -> Result<SpeciesMetadata, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(ProviderError::Api {
                provider: self.name,
                status: 500,
                message: "mock failure".to_string(),
            });
        }

        Ok(record(name, self.name))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Memory cache wrapper counting writes
#[derive(Default)]
struct RecordingCache {
    inner: MemoryCache,
    puts: AtomicUsize,
}

impl RecordingCache {
    fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeciesCache for RecordingCache {
    async fn get(&self, key: &str) -> Option<Vec<SpeciesMetadata>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, metadata: &[SpeciesMetadata]) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, metadata).await
    }
}

fn record(species: &str, source: &str) -> SpeciesMetadata {
    SpeciesMetadata {
        species: species.to_string(),
        source: source.to_string(),
        link: format!("https://{}.example/{}", source, species),
        name: species.to_string(),
        image_path: String::new(),
        summary: format!("{} according to {}", species, source),
    }
}

fn providers(mocks: &[&Arc<MockProvider>]) -> Vec<Arc<dyn MetadataProvider>> {
    mocks
        .iter()
        .map(|mock| Arc::clone(*mock) as Arc<dyn MetadataProvider>)
        .collect()
}

fn sorted_sources(metadata: &[SpeciesMetadata]) -> Vec<String> {
    let mut sources: Vec<String> = metadata.iter().map(|m| m.source.clone()).collect();
    sources.sort();
    sources
}
