// Fakes shared by the application tests
use crate::application::errors::FetchError;
use crate::application::transport::{HttpResponse, HttpTransport, Sleeper};
use async_trait::async_trait;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

pub const BASE_URL: &str = "http://api.test";

/// Records requested delays and returns immediately
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}

/// Replays a fixed script; the last entry repeats once the script runs out
pub struct ScriptedTransport {
    script: Vec<Result<HttpResponse, FetchError>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn sequence(responses: Vec<HttpResponse>) -> Self {
        Self {
            script: responses.into_iter().map(Ok).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(response: HttpResponse) -> Self {
        Self::sequence(vec![response])
    }

    pub fn unreachable(message: &str) -> Self {
        Self {
            script: vec![Err(FetchError::Transport(message.to_string()))],
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let index = call.min(self.script.len() - 1);
        self.script[index].clone()
    }
}

/// Answers by URL; unknown URLs get a 404
pub struct RoutedTransport {
    routes: Mutex<HashMap<String, HttpResponse>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl RoutedTransport {
    pub fn new(routes: HashMap<String, HttpResponse>) -> Self {
        Self {
            routes: Mutex::new(routes),
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn set(&self, url: &str, response: HttpResponse) {
        self.routes.lock().unwrap().insert(url.to_string(), response);
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl HttpTransport for RoutedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;
        let response = self.routes.lock().unwrap().get(url).cloned();
        tokio::task::yield_now().await;
        Ok(response.unwrap_or_else(|| HttpResponse::new(404, "")))
    }
}

/// Hands out queued responses in call order, each optionally held until released
pub struct GatedTransport {
    queue: Mutex<VecDeque<(Option<oneshot::Receiver<()>>, HttpResponse)>>,
    calls: AtomicUsize,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a response that is only returned once the sender fires
    pub fn push(&self, response: HttpResponse) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.queue.lock().unwrap().push_back((Some(rx), response));
        tx
    }

    pub fn push_ready(&self, response: HttpResponse) {
        self.queue.lock().unwrap().push_back((None, response));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn wait_for_calls(&self, count: usize) {
        while self.calls.load(Ordering::SeqCst) < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl HttpTransport for GatedTransport {
    async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
        let entry = self.queue.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);

        match entry {
            Some((gate, response)) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                Ok(response)
            }
            None => Err(FetchError::Transport("no response queued".to_string())),
        }
    }
}

/// One healthy response per endpoint under `BASE_URL`
pub fn fixture_routes() -> HashMap<String, HttpResponse> {
    let mut routes = HashMap::new();
    routes.insert(
        format!("{}/health", BASE_URL),
        HttpResponse::new(
            200,
            json!({"status": "healthy", "version": "1.0.0", "timestamp": "2024-03-05T14:07:09"})
                .to_string(),
        ),
    );
    routes.insert(
        format!("{}/api/v1/corporate-data", BASE_URL),
        HttpResponse::new(
            200,
            json!({
                "status": "success",
                "data": {
                    "executive_summary": "Steady growth",
                    "fund_overview": "Balanced fund",
                    "investment_strategy": "Value investing",
                    "risk_assessment": "Low",
                    "aum": 1500000.0
                }
            })
            .to_string(),
        ),
    );
    routes.insert(
        format!("{}/api/v1/corporate-structure", BASE_URL),
        HttpResponse::new(
            200,
            json!({
                "status": "success",
                "data": {
                    "departments": [
                        {"name": "Eng", "teams": [{"name": "Core", "size": 5, "role": "dev"}]}
                    ]
                }
            })
            .to_string(),
        ),
    );
    routes.insert(
        format!("{}/api/v1/real-assets", BASE_URL),
        HttpResponse::new(
            200,
            json!({
                "status": "success",
                "data": [
                    {"symbol": "XOM", "market_cap": 410000000000.0, "revenue": null, "last_updated": "2024-03-05T14:07:09"}
                ],
                "total_assets": 1,
                "last_updated": "2024-03-05T14:07:09"
            })
            .to_string(),
        ),
    );
    routes
}
