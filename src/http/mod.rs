//! HTTP server module.
//!
//! Serves the router over plain HTTP (the usual setup behind a load balancer)
//! or over TLS with user-provided certificates. Both modes shut down
//! gracefully on SIGTERM/SIGINT; manual TLS reloads certificates on SIGHUP.

mod server;
mod shutdown;

pub use server::start_server;
