//! In-memory transport and navigator for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::{ApiRequest, RawResponse, Transport};
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;

pub(crate) const TEST_BASE_URL: &str = "http://api.test/api";

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    responses: Rc<RefCell<VecDeque<Result<RawResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    /// Suspend once before answering, like a real network round-trip.
    yield_first: bool,
}

impl FakeTransport {
    pub(crate) fn suspending() -> Self {
        Self { yield_first: true, ..Self::default() }
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(RawResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn fail(&self, err: ApiError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        if self.yield_first {
            YieldOnce(false).await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_owned())))
    }
}

/// Returns `Pending` once, waking itself so the executor polls again.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Navigator that records target paths.
pub(crate) fn recording_navigator() -> (Navigator, Arc<Mutex<Vec<String>>>) {
    let visited = Arc::new(Mutex::new(Vec::new()));
    let sink = visited.clone();
    let navigator = Navigator::new(move |path| sink.lock().unwrap().push(path.to_owned()));
    (navigator, visited)
}

/// Client wired to a fake transport, a fresh session store and a recording navigator.
pub(crate) fn test_client(transport: FakeTransport) -> (ApiClient<FakeTransport>, Arc<Mutex<Vec<String>>>) {
    let (navigator, visited) = recording_navigator();
    let client = ApiClient::new(TEST_BASE_URL, transport, SessionStore::new(), navigator);
    (client, visited)
}
