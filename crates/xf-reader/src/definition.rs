use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};
use xf_core::{Label, QuestionEntry, XFormError};
use xf_parser::{parse_xml_document, parse_xml_file, XmlDocument, XmlElementNode, XFORMS_NS, XHTML_NS};

use crate::itext::{translation_blocks, Itext};

/// A flattened form definition.
///
/// Built once from the definition document; afterwards only the preferred
/// language can change. One instance can normalize any number of result
/// documents of the same form.
#[derive(Debug, Clone)]
pub struct XForm {
    languages: Vec<String>,
    preferred_language: Option<String>,
    questions: BTreeMap<String, QuestionEntry>,
}

impl XForm {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, XFormError> {
        let document = parse_xml_file(path.as_ref())?;
        Ok(Self::from_document(&document))
    }

    pub fn from_xml(source_name: &str, xml: &str) -> Result<Self, XFormError> {
        let document = parse_xml_document(source_name, xml)?;
        Ok(Self::from_document(&document))
    }

    fn from_document(document: &XmlDocument) -> Self {
        let languages = discover_languages(&document.root);
        let preferred_language = default_language(&languages);
        let itext = Itext::new(&document.root, &languages);
        let questions = flatten_binds(&document.root, &itext);

        info!(
            questions = questions.len(),
            languages = languages.len(),
            "flattened form definition"
        );

        Self {
            languages,
            preferred_language,
            questions,
        }
    }

    /// Switches the display language. Unknown languages are ignored.
    pub fn set_language(&mut self, language: &str) {
        if self.languages.iter().any(|known| known == language) {
            self.preferred_language = Some(language.to_string());
        } else {
            debug!(language, "ignoring unknown form language");
        }
    }

    /// `None` when the form declares no translations.
    pub fn preferred_language(&self) -> Option<&str> {
        self.preferred_language.as_deref()
    }

    pub fn is_translated(&self) -> bool {
        !self.languages.is_empty()
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn flatten(&self) -> &BTreeMap<String, QuestionEntry> {
        &self.questions
    }

    pub fn question(&self, path: &str) -> Option<&QuestionEntry> {
        self.questions.get(path)
    }
}

fn discover_languages(root: &XmlElementNode) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for (language, _) in translation_blocks(root) {
        if !languages.iter().any(|known| known == language) {
            languages.push(language.to_string());
        }
    }
    languages
}

fn default_language(languages: &[String]) -> Option<String> {
    languages
        .iter()
        .find(|language| language.eq_ignore_ascii_case("english"))
        .or_else(|| languages.first())
        .cloned()
}

fn flatten_binds(root: &XmlElementNode, itext: &Itext<'_>) -> BTreeMap<String, QuestionEntry> {
    let controls = index_controls(root);
    let mut questions = BTreeMap::new();

    for bind in root
        .descendants()
        .filter(|element| element.is(XFORMS_NS, "bind"))
    {
        let (Some(path), Some(r#type)) = (bind.attr("nodeset"), bind.attr("type")) else {
            continue;
        };
        if is_read_only(bind) {
            continue;
        }

        let machine_label = path.rsplit('/').next().unwrap_or(path).to_string();
        let entry = match controls.get(path) {
            Some(control) => QuestionEntry {
                machine_label,
                r#type: r#type.to_string(),
                label: control
                    .child(XFORMS_NS, "label")
                    .and_then(|label| itext.resolve_label(label)),
                system: false,
                items: control_items(control, itext),
            },
            None => QuestionEntry {
                label: Some(Label::Plain(machine_label.clone())),
                machine_label,
                r#type: r#type.to_string(),
                system: true,
                items: None,
            },
        };
        questions.insert(path.to_string(), entry);
    }

    questions
}

fn is_read_only(bind: &XmlElementNode) -> bool {
    bind.attr("readonly")
        .is_some_and(|value| matches!(value.trim(), "true()" | "true"))
}

// Body controls keyed by their `ref`; the first control wins on duplicates.
fn index_controls(root: &XmlElementNode) -> BTreeMap<&str, &XmlElementNode> {
    let body = root.child(XHTML_NS, "body").unwrap_or(root);
    let mut controls = BTreeMap::new();
    for element in body.descendants() {
        if let Some(reference) = element.attr("ref") {
            controls.entry(reference).or_insert(element);
        }
    }
    controls
}

fn control_items(
    control: &XmlElementNode,
    itext: &Itext<'_>,
) -> Option<BTreeMap<String, Option<Label>>> {
    let mut items = BTreeMap::new();
    for item in control
        .element_children()
        .filter(|element| element.is(XFORMS_NS, "item"))
    {
        let Some(value) = item.child(XFORMS_NS, "value") else {
            continue;
        };
        let label = item
            .child(XFORMS_NS, "label")
            .and_then(|label| itext.resolve_label(label));
        items.insert(value.text_content().trim().to_string(), label);
    }

    (!items.is_empty()).then_some(items)
}
