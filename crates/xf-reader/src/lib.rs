//! Reads XForms survey definitions and normalizes their submissions.
//!
//! [`XForm`] flattens a definition into a path-indexed table of questions,
//! resolving `itext` translations and choice items once. Result documents are
//! then walked against that table and every answered leaf becomes an
//! [`xf_core::AnswerRecord`].

mod definition;
mod itext;
mod result;

#[cfg(test)]
mod test_support;

pub use definition::XForm;
pub use xf_core::{Answer, AnswerRecord, Label, QuestionEntry, XFormError};
