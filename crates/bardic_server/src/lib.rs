//! HTTP front end for Bardic.
//!
//! Serves a single HTML form (prompt, optional image) and renders each
//! invocation's status banner, generated text and audio player.

#![warn(missing_docs)]

mod api;
mod form;
mod page;

pub use api::{AppState, create_router};
pub use form::read_request;
pub use page::{Banner, Page, escape_html};
