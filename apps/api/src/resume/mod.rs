// Resume editing: the per-user aggregate, its patch interface, and the sample data.

pub mod handlers;
pub mod patch;
pub mod repository;
pub mod sample;
