//! Shared test helpers: an in-memory management API.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use spacefetch_client::{ClientError, ClientResult, ManagementApi, SpaceApi};
use spacefetch_types::{Collection, PageQuery, Record, ResourceKind, SpaceId};
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Builds a record with the given `sys.id` and `sys.type`.
pub fn record(id: &str, sys_type: &str) -> Record {
    Record::from_value(json!({"sys": {"id": id, "type": sys_type}})).unwrap()
}

/// Builds `count` records named `{prefix}-{n}`.
pub fn records(prefix: &str, sys_type: &str, count: usize) -> Vec<Record> {
    (0..count)
        .map(|n| record(&format!("{prefix}-{n}"), sys_type))
        .collect()
}

/// A space served from memory, recording every list request.
#[derive(Default)]
pub struct FakeSpace {
    pub space_id: Option<SpaceId>,
    pub collections: HashMap<ResourceKind, Vec<Record>>,
    pub editor_interfaces: HashMap<String, Record>,
    pub failing_editor_interfaces: HashSet<String>,
    pub rate_limited_editor_interfaces: HashSet<String>,
    /// Fails list requests of this kind once skip reaches the given offset.
    pub fail_list_at: Option<(ResourceKind, u64)>,
    pub requests: Mutex<Vec<(ResourceKind, PageQuery)>>,
    pub editor_interface_requests: Mutex<Vec<String>>,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl FakeSpace {
    pub fn new() -> Self {
        Self {
            space_id: Some(SpaceId::parse("space1").unwrap()),
            ..Default::default()
        }
    }

    pub fn with(mut self, kind: ResourceKind, items: Vec<Record>) -> Self {
        self.collections.insert(kind, items);
        self
    }

    pub fn with_editor_interface(mut self, content_type_id: &str) -> Self {
        self.editor_interfaces.insert(
            content_type_id.to_string(),
            Record::from_value(json!({
                "sys": {
                    "id": "default",
                    "type": "EditorInterface",
                    "contentType": {"sys": {"id": content_type_id}}
                },
                "controls": []
            }))
            .unwrap(),
        );
        self
    }

    pub fn with_failing_editor_interface(mut self, content_type_id: &str) -> Self {
        self.failing_editor_interfaces
            .insert(content_type_id.to_string());
        self
    }

    pub fn with_rate_limited_editor_interface(mut self, content_type_id: &str) -> Self {
        self.rate_limited_editor_interfaces
            .insert(content_type_id.to_string());
        self
    }

    /// Most editor-interface requests observed in flight at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn failing_list_at(mut self, kind: ResourceKind, skip: u64) -> Self {
        self.fail_list_at = Some((kind, skip));
        self
    }

    pub fn requests_for(&self, kind: ResourceKind) -> Vec<PageQuery> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, q)| q.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SpaceApi for FakeSpace {
    fn space_id(&self) -> &SpaceId {
        self.space_id.as_ref().unwrap()
    }

    async fn list(&self, kind: ResourceKind, query: &PageQuery) -> ClientResult<Collection<Record>> {
        self.requests.lock().unwrap().push((kind, query.clone()));

        if let Some((fail_kind, fail_skip)) = self.fail_list_at {
            if fail_kind == kind && query.skip >= fail_skip {
                return Err(ClientError::Api {
                    status: 500,
                    message: "internal error".to_string(),
                });
            }
        }

        let all = self.collections.get(&kind).cloned().unwrap_or_default();
        let items = all
            .iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();

        Ok(Collection {
            total: all.len() as u64,
            skip: query.skip,
            limit: query.limit,
            items,
        })
    }

    async fn get_editor_interface(&self, content_type_id: &str) -> ClientResult<Record> {
        self.editor_interface_requests
            .lock()
            .unwrap()
            .push(content_type_id.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.rate_limited_editor_interfaces.contains(content_type_id) {
            return Err(ClientError::RateLimited { retry_after_secs: 1 });
        }
        if self.failing_editor_interfaces.contains(content_type_id) {
            return Err(ClientError::Api {
                status: 500,
                message: "editor interface unavailable".to_string(),
            });
        }
        self.editor_interfaces
            .get(content_type_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(content_type_id.to_string()))
    }
}

/// Shared handle so tests can inspect the space after the fetch.
pub struct SharedSpace(pub Arc<FakeSpace>);

#[async_trait]
impl SpaceApi for SharedSpace {
    fn space_id(&self) -> &SpaceId {
        self.0.space_id()
    }

    async fn list(&self, kind: ResourceKind, query: &PageQuery) -> ClientResult<Collection<Record>> {
        self.0.list(kind, query).await
    }

    async fn get_editor_interface(&self, content_type_id: &str) -> ClientResult<Record> {
        self.0.get_editor_interface(content_type_id).await
    }
}

/// A client handing out one shared [`FakeSpace`].
pub struct FakeClient {
    pub space: Option<Arc<FakeSpace>>,
    pub lookups: Mutex<Vec<SpaceId>>,
}

impl FakeClient {
    pub fn new(space: FakeSpace) -> Self {
        Self {
            space: Some(Arc::new(space)),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// A client for which every space lookup fails.
    pub fn missing_space() -> Self {
        Self {
            space: None,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn space(&self) -> &FakeSpace {
        self.space.as_ref().unwrap()
    }
}

#[async_trait]
impl ManagementApi for FakeClient {
    type Space = SharedSpace;

    async fn get_space(&self, space_id: &SpaceId) -> ClientResult<SharedSpace> {
        self.lookups.lock().unwrap().push(space_id.clone());
        self.space
            .clone()
            .map(SharedSpace)
            .ok_or_else(|| ClientError::NotFound(format!("/spaces/{space_id}")))
    }
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Installs a subscriber writing into this buffer for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
