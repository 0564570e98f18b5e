//! Topic push-notification dispatch for VietCal
//!
//! A thin, stateless dispatch layer over an external push-messaging
//! provider:
//!
//! - [`PushProvider`]: the provider seam; one outbound call per dispatch,
//!   no internal retry.
//! - [`HttpPushProvider`]: client for the push gateway.
//! - [`NotificationDispatcher`]: topic defaulting and structured results.
//!
//! Retry policy, if any, belongs to the caller; a failed dispatch surfaces
//! the provider's cause untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dispatch;
pub mod http;
pub mod provider;

pub use config::MessagingConfig;
pub use dispatch::{DispatchError, DispatchResult, NotificationDispatcher, DEFAULT_TOPIC};
pub use http::HttpPushProvider;
pub use provider::{ProviderError, PushProvider};
