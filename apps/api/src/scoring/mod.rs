// Resume scoring: ATS readiness score, per-bullet guidance, top improvements.
// Everything here is a pure function of its input; handlers load the resume first.

pub mod ats;
pub mod bullets;
pub mod handlers;
pub mod improvements;
