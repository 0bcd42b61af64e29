//! Recording provider and progress sink for tests

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::provider::{BucketApi, LockTableApi, Progress, ProviderError, ProviderResult, Step};
use crate::resource::LockTableSpec;
use crate::settings::SseAlgorithm;

/// A remote call observed by [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateBucket { name: String, region: String },
    EnableVersioning { name: String },
    EnableEncryption { name: String, algorithm: SseAlgorithm },
    CreateTable(LockTableSpec),
    WaitUntilActive { name: String, max_wait: Duration },
}

/// Provider that records every call and fails at chosen steps
#[derive(Debug, Default)]
pub struct MockProvider {
    calls: Mutex<Vec<Call>>,
    failing: Vec<Step>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(steps: &[Step]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: steps.to_vec(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, resource: &str, step: Step, call: Call) -> ProviderResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(&step) {
            Err(ProviderError::new(resource, step, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BucketApi for MockProvider {
    async fn create_bucket(&self, name: &str, region: &str) -> ProviderResult<()> {
        let call = Call::CreateBucket {
            name: name.to_string(),
            region: region.to_string(),
        };
        self.record(name, Step::CreateBucket, call)
    }

    async fn enable_versioning(&self, name: &str) -> ProviderResult<()> {
        let call = Call::EnableVersioning {
            name: name.to_string(),
        };
        self.record(name, Step::EnableVersioning, call)
    }

    async fn enable_encryption(&self, name: &str, algorithm: SseAlgorithm) -> ProviderResult<()> {
        let call = Call::EnableEncryption {
            name: name.to_string(),
            algorithm,
        };
        self.record(name, Step::EnableEncryption, call)
    }
}

#[async_trait]
impl LockTableApi for MockProvider {
    async fn create_table(&self, spec: &LockTableSpec) -> ProviderResult<()> {
        self.record(&spec.name, Step::CreateTable, Call::CreateTable(spec.clone()))
    }

    async fn wait_until_active(&self, name: &str, max_wait: Duration) -> ProviderResult<()> {
        let call = Call::WaitUntilActive {
            name: name.to_string(),
            max_wait,
        };
        self.record(name, Step::WaitForTable, call)
    }
}

/// Progress event observed by [`RecordingProgress`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String, Step),
    Succeeded(String, Step),
    Ready(String),
    Failed(ProviderError),
}

#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Progress for RecordingProgress {
    fn step_started(&self, resource: &str, step: Step) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Started(resource.to_string(), step));
    }

    fn step_succeeded(&self, resource: &str, step: Step) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Succeeded(resource.to_string(), step));
    }

    fn resource_ready(&self, resource: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Ready(resource.to_string()));
    }

    fn resource_failed(&self, error: &ProviderError) {
        self.events.lock().unwrap().push(Event::Failed(error.clone()));
    }
}
