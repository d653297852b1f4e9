//! Event feed: wire types, severity classification, and the async client.

pub mod classify;
pub mod feed;
pub mod types;

pub use classify::{classify, SeverityTier};
pub use feed::{FeedChannel, FetchResult, EVENTS_FEED_URL, EVENT_REFRESH_INTERVAL};
pub use types::{sample_events, GeoEvent};
