use std::collections::BTreeMap;

use serde::Serialize;
use xf_core::{AnswerRecord, QuestionEntry};

#[derive(Debug, Serialize)]
pub(crate) struct FlattenOutput<'a> {
    pub(crate) languages: &'a [String],
    pub(crate) preferred_language: Option<&'a str>,
    pub(crate) questions: &'a BTreeMap<String, QuestionEntry>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum ResultsOutput {
    File(Vec<AnswerRecord>),
    Directory(BTreeMap<String, Vec<AnswerRecord>>),
}
