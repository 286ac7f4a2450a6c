use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Human-readable text of a question or item.
///
/// Untranslated forms carry the label text inline. Translated forms carry one
/// entry per declared language; a language without a translation for this
/// label maps to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Plain(String),
    Translated(BTreeMap<String, Option<String>>),
}

impl Label {
    /// Picks the text for `language`. Plain labels ignore the language.
    pub fn resolve(&self, language: Option<&str>) -> Option<String> {
        match self {
            Self::Plain(text) => Some(text.clone()),
            Self::Translated(by_language) => {
                language.and_then(|language| by_language.get(language).cloned().flatten())
            }
        }
    }
}

/// One bound question of a form definition, keyed by its logical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub machine_label: String,
    pub r#type: String,
    pub label: Option<Label>,
    /// Bound in the model but never presented in the body.
    pub system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<BTreeMap<String, Option<Label>>>,
}

impl QuestionEntry {
    pub fn display_label(&self, language: Option<&str>) -> Option<String> {
        self.label.as_ref()?.resolve(language)
    }

    pub fn item_label(&self, key: &str, language: Option<&str>) -> Option<String> {
        self.items
            .as_ref()?
            .get(key)?
            .as_ref()?
            .resolve(language)
    }

    pub fn has_item(&self, key: &str) -> bool {
        self.items
            .as_ref()
            .is_some_and(|items| items.contains_key(key))
    }
}
