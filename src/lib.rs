//! clarity360 - workplace feedback client
//!
//! Library behind the `clarity` binary. Holds the draft/form controller, the
//! submissions list controller, the view session that ties them together, and
//! the HTTP service that talks to the feedback API.

pub mod api;
pub mod badge;
pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod list;
pub mod types;
pub mod view;
