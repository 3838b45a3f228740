//! Headless core of a paginated, searchable contact book backed by a remote
//! contacts API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `ContactBook` owns all view
//! state and turns user actions into `Call`s; the host executes each call,
//! either itself or through a `Transport`, and hands the outcome back.
//!
//! # Design
//! - `ContactClient` is stateless: it holds only `base_url`.
//! - Each remote operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Remote failures are logged with `tracing` and otherwise ignored by the
//!   store; the visible list only changes on success.
//! - Filtering and pagination are pure functions in `view`, recomputed on
//!   every `ContactBook::view`.

pub mod book;
pub mod client;
pub mod error;
pub mod favorites;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use book::{Applied, Call, ContactBook, Ticket};
pub use client::{ContactClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use favorites::Favorites;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Contact, ContactId, Draft, NewContact};
pub use view::{ContactPage, PageButton, Row, PAGE_SIZE};
