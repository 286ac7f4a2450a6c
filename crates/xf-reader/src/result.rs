use std::path::Path;

use tracing::debug;
use xf_core::{Answer, AnswerRecord, QuestionEntry, XFormError};
use xf_parser::{parse_xml_document, parse_xml_file, XmlDocument, XmlElementNode};

use crate::XForm;

impl XForm {
    /// Normalizes one submission of this form, in document order.
    pub fn parse_result_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<AnswerRecord>, XFormError> {
        let document = parse_xml_file(path.as_ref())?;
        Ok(self.normalize_document(&document))
    }

    pub fn parse_result_xml(
        &self,
        source_name: &str,
        xml: &str,
    ) -> Result<Vec<AnswerRecord>, XFormError> {
        let document = parse_xml_document(source_name, xml)?;
        Ok(self.normalize_document(&document))
    }

    fn normalize_document(&self, document: &XmlDocument) -> Vec<AnswerRecord> {
        let root_path = format!("/{}", document.root.name);
        self.normalize_children(&document.root, &root_path)
    }

    fn normalize_children(&self, node: &XmlElementNode, current_path: &str) -> Vec<AnswerRecord> {
        let mut records = Vec::new();
        for child in node.element_children() {
            let child_path = format!("{}/{}", current_path, child.name);
            if child.has_element_children() {
                records.extend(self.normalize_children(child, &child_path));
                continue;
            }

            match self.question(&child_path) {
                Some(entry) => records.push(self.normalize_leaf(entry, &child.text_content())),
                None => debug!(path = child_path.as_str(), "skipping unmapped result leaf"),
            }
        }
        records
    }

    fn normalize_leaf(&self, entry: &QuestionEntry, content: &str) -> AnswerRecord {
        let label = self.record_label(entry);
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return AnswerRecord::unanswered(label, entry.machine_label.as_str());
        }

        let (value, machine_value) = if entry.items.is_none() {
            (
                Answer::Single(Some(content.to_string())),
                Answer::Single(content.to_string()),
            )
        } else if entry.has_item(trimmed) {
            (
                Answer::Single(self.item_label(entry, trimmed)),
                Answer::Single(trimmed.to_string()),
            )
        } else {
            let keys = trimmed
                .split_whitespace()
                .filter(|token| entry.has_item(token))
                .collect::<Vec<_>>();
            (
                Answer::Multiple(keys.iter().map(|key| self.item_label(entry, key)).collect()),
                Answer::Multiple(keys.iter().map(|key| key.to_string()).collect()),
            )
        };

        AnswerRecord {
            label,
            machine_label: entry.machine_label.clone(),
            value: Some(value),
            machine_value: Some(machine_value),
        }
    }

    fn record_label(&self, entry: &QuestionEntry) -> Option<String> {
        if entry.system {
            return entry.display_label(None);
        }
        entry.display_label(self.preferred_language())
    }

    fn item_label(&self, entry: &QuestionEntry, key: &str) -> Option<String> {
        entry.item_label(key, self.preferred_language())
    }
}
