// Composition root.
//
// - Read config from the command line and environment.
// - Instantiate the event store and publisher.
// - Wire them into the HTTP router and the worker pool.
// - Run the ordered shutdown on termination.

pub mod config;
pub mod http;
pub mod state;
pub mod workers;
