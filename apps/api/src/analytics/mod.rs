pub mod handlers;
pub mod snapshot;
