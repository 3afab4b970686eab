// Job postings: HR management endpoints and the public job board.

pub mod board;
pub mod handlers;
pub mod listing;
