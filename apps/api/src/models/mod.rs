pub mod resume;
pub mod wizard;
