//! Remote friend directory client layer.
//!
//! This module owns everything about talking to the backend: building the
//! four authenticated HTTP operations, tagging them so their asynchronous
//! results can be routed back, and reducing raw responses to explicit
//! success/failure outcomes.
//!
//! # Request lifecycle
//!
//! ```text
//! Action → DirectoryClient (build) → web_request (host) → ... →
//!     Event::WebRequestResult → ApiOperation::from_context → parse_* → Event
//! ```
//!
//! # Modules
//!
//! - `client`: Request construction and dispatch
//! - `operation`: Context tags routing responses back to operations
//! - `response`: Envelope DTOs and outcome parsing

pub mod client;
pub mod operation;
pub mod response;

pub use client::{DirectoryClient, DirectoryRequest};
pub use operation::{ApiOperation, CONTEXT_OP, CONTEXT_SENDER_EMAIL};
