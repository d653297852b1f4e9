//! Async event feed client.
//!
//! Fetches the public events endpoint and bridges the result back to egui's
//! synchronous update loop through a channel. Fetches are stamped with a
//! monotonically increasing generation so a slow earlier fetch that lands
//! after a newer one was issued can be recognized and discarded instead of
//! overwriting fresher data.

use std::cell::Cell;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use eframe::egui;

use super::types::{parse_feed, GeoEvent};

/// Public events endpoint polled by the dashboard.
pub const EVENTS_FEED_URL: &str = "https://eonet.gsfc.nasa.gov/api/v2.1/events";

/// Interval between event refreshes.
pub const EVENT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Result of one fetch attempt.
#[derive(Debug, Clone)]
pub enum FetchResult {
    /// Feed fetched and parsed.
    Success {
        generation: u64,
        events: Vec<GeoEvent>,
        fetch_latency_ms: f64,
    },
    /// Network failure or malformed body.
    Error { generation: u64, message: String },
}

impl FetchResult {
    /// Generation of the fetch attempt that produced this result.
    pub fn generation(&self) -> u64 {
        match self {
            Self::Success { generation, .. } | Self::Error { generation, .. } => *generation,
        }
    }
}

/// Generation bookkeeping for supersession checks.
struct GenerationCounter {
    issued: Cell<u64>,
}

impl GenerationCounter {
    fn new() -> Self {
        Self { issued: Cell::new(0) }
    }

    /// Stamps a new fetch attempt.
    fn next(&self) -> u64 {
        let generation = self.issued.get() + 1;
        self.issued.set(generation);
        generation
    }

    /// A result is current only if no newer fetch has been issued since.
    fn is_current(&self, generation: u64) -> bool {
        generation == self.issued.get()
    }
}

/// Channel-based fetcher for the events feed.
///
/// Fetches are async but egui's `update()` is synchronous; results are sent
/// through an mpsc channel and polled with [`try_recv`](Self::try_recv).
pub struct FeedChannel {
    sender: Sender<FetchResult>,
    receiver: Receiver<FetchResult>,
    generations: GenerationCounter,
    in_flight: Cell<u32>,
}

impl Default for FeedChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            generations: GenerationCounter::new(),
            in_flight: Cell::new(0),
        }
    }

    /// Whether a fetch is currently in flight.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Whether a result belongs to the most recently issued fetch.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generations.is_current(generation)
    }

    /// Spawns a fetch of the events feed. Returns the attempt's generation.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context, url: String) -> u64 {
        let generation = self.generations.next();
        self.in_flight.set(self.in_flight.get() + 1);
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Fetching events feed (generation {})", generation);
            let result = fetch_events(&url, generation).await;
            let _ = sender.send(result);
            ctx.request_repaint();
        });

        generation
    }

    /// Native fetch on a worker thread using a blocking HTTP client.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context, url: String) -> u64 {
        let generation = self.generations.next();
        self.in_flight.set(self.in_flight.get() + 1);
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            log::info!("Fetching events feed (generation {})", generation);
            let result = fetch_events_blocking(&url, generation);
            let _ = sender.send(result);
            ctx.request_repaint();
        });

        generation
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<FetchResult> {
        let result = self.receiver.try_recv().ok()?;
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
        Some(result)
    }
}

fn result_from_body(body: Result<Vec<u8>, String>, generation: u64, latency_ms: f64) -> FetchResult {
    match body.and_then(|bytes| parse_feed(&bytes)) {
        Ok(events) => FetchResult::Success {
            generation,
            events,
            fetch_latency_ms: latency_ms,
        },
        Err(message) => FetchResult::Error { generation, message },
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_events(url: &str, generation: u64) -> FetchResult {
    let started = web_time::Instant::now();
    let body = fetch_body(url).await;
    result_from_body(body, generation, started.elapsed().as_secs_f64() * 1000.0)
}

/// Browser fetch of the feed body.
#[cfg(target_arch = "wasm32")]
async fn fetch_body(url: &str) -> Result<Vec<u8>, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(target_arch = "wasm32")]
fn js_err(value: wasm_bindgen::JsValue) -> String {
    format!("{:?}", value)
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_events_blocking(url: &str, generation: u64) -> FetchResult {
    let started = web_time::Instant::now();
    let body = fetch_body_blocking(url);
    result_from_body(body, generation, started.elapsed().as_secs_f64() * 1000.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_body_blocking(url: &str) -> Result<Vec<u8>, String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("terrawatch/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| format!("HTTP client error: {}", e))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .bytes()
        .map(|bytes| bytes.to_vec())
        .map_err(|e| format!("Body read failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_supersession() {
        let counter = GenerationCounter::new();

        let first = counter.next();
        assert!(counter.is_current(first));

        // Issuing a newer fetch makes the earlier one stale even though its
        // result has not arrived yet.
        let second = counter.next();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_fetch_result_generation_accessor() {
        let ok = FetchResult::Success {
            generation: 3,
            events: Vec::new(),
            fetch_latency_ms: 1.0,
        };
        let err = FetchResult::Error {
            generation: 7,
            message: "boom".to_string(),
        };
        assert_eq!(ok.generation(), 3);
        assert_eq!(err.generation(), 7);
    }

    #[test]
    fn test_malformed_body_becomes_error_result() {
        let result = result_from_body(Ok(b"not json".to_vec()), 1, 0.0);
        assert!(matches!(result, FetchResult::Error { generation: 1, .. }));

        let result = result_from_body(Err("offline".to_string()), 2, 0.0);
        match result {
            FetchResult::Error { message, .. } => assert_eq!(message, "offline"),
            other => panic!("expected error, got {:?}", other),
        }
    }
}
