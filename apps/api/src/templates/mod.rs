// Presentation settings: template style registry, accent color palette, and
// the per-user selection of both.

pub mod handlers;
pub mod preferences;
pub mod registry;
