//! # news-digest
//!
//! Digest composition and the subscription registry. [`DigestComposer`] combines concurrent
//! news, trending, and analysis fetches into one MarkdownV2 document with per-section
//! degradation; [`SubscriberStore`] is the pluggable registry seam with an in-memory default;
//! [`ScheduledDigestJob`] is the zero-argument entry point an external scheduler invokes for
//! the daily fan-out.

pub mod composer;
pub mod job;
pub mod registry;

pub use composer::DigestComposer;
pub use job::{FanoutReport, ScheduledDigestJob};
pub use registry::{
    InMemorySubscriberStore, SubscribeOutcome, SubscriberStore, UnsubscribeOutcome,
};
