pub mod application;
pub mod candidate;
pub mod envelope;
pub mod job;
pub mod review;
pub mod user;
