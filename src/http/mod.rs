//! HTTP boundary: routing, request handlers, and the HTML renderer.

pub mod handlers;
pub mod server;
pub mod views;
