//! # loadcast-server
//!
//! The HTTP surface of loadcast: CLI, application context, route dispatch,
//! and the tiny_http server loop. The `loadcast` binary in `main.rs` is a
//! thin shell over these modules; they are a library so the integration
//! tests can drive a real bound server.

pub mod cli;
pub mod context;
pub mod predict;
pub mod routes;
pub mod schema;
pub mod server;
