//! Event handlers for Windows.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
