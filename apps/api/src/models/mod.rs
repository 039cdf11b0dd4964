pub mod requirement;
pub mod resume;
