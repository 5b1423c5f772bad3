pub mod digest;
pub mod feedback_hook;
