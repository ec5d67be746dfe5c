//! Client for the Cachet status-page REST API.
//!
//! # Overview
//! Exposes the Cachet v1 resource catalog — components, component groups,
//! incidents, metrics, and metric points — as methods on [`CachetClient`].
//! Caller-supplied parameters are validated and defaulted against a static
//! per-operation schema before anything is sent; status levels are
//! range-checked; the response is normalized into `Result<Value, Error>`
//! with the service's `data` payload on success.
//!
//! # Design
//! - The client performs no I/O itself: HTTP goes through the [`Transport`]
//!   trait and configuration through [`ConfigSource`], both supplied by the
//!   host. This keeps the core deterministic and testable.
//! - Per-call state only — the parameter schema in [`schema`] is the sole
//!   static data, immutable and safe for concurrent reads.
//! - One blocking HTTP exchange per operation; no retries, no pagination.
//!
//! Component status runs 1 (operational) to 4 (major outage); incident
//! status runs 0 (scheduled) to 4 (fixed).

pub mod args;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod ops;
pub mod schema;
pub mod status;

#[cfg(test)]
pub(crate) mod testutil;

pub use args::{build_args, Params};
pub use client::CachetClient;
pub use config::ConfigSource;
pub use error::Error;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use schema::{operation_schema, DefaultValue, FieldSpec, Operation, Resource};
pub use status::{check_component_status, check_incident_status};
