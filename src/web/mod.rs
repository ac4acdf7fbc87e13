//! Web server module: router, request handlers, and HTML rendering.

mod server;
pub mod templates;

pub use server::{AppServer, build_router, start_server};
