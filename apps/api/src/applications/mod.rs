// Job applications submitted by signed-in users from the job board.

pub mod handlers;
pub mod submission;
