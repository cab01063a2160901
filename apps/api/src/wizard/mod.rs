// Build track: eight sequential steps, each unlocked by an uploaded artifact,
// followed by a proof page that gates the final submission.
//
// No step state is stored. Completion and the submission gate are derived from
// the artifact, checklist and link records on every read.

pub mod gating;
pub mod handlers;
pub mod repository;
pub mod steps;
pub mod submission;
