// Export: plain-text rendering of the resume and the pre-export completeness check.
pub mod plain_text;
pub mod validation;
