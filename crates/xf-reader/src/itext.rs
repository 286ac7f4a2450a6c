use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;
use xf_core::Label;
use xf_parser::{XmlElementNode, XFORMS_NS};

/// Per-language `<translation>` blocks of a form's `<itext>` section.
pub(crate) struct Itext<'a> {
    languages: &'a [String],
    translations: Vec<(&'a str, &'a XmlElementNode)>,
}

impl<'a> Itext<'a> {
    pub(crate) fn new(root: &'a XmlElementNode, languages: &'a [String]) -> Self {
        Self {
            languages,
            translations: translation_blocks(root).collect(),
        }
    }

    pub(crate) fn is_translated(&self) -> bool {
        !self.languages.is_empty()
    }

    /// Resolves a `<label>` element. Translated forms need an
    /// `itext('<id>')` reference; anything else resolves to `None`.
    pub(crate) fn resolve_label(&self, label: &XmlElementNode) -> Option<Label> {
        if !self.is_translated() {
            return Some(Label::Plain(label.text_content().trim().to_string()));
        }

        let reference = label.attr("ref").unwrap_or_default();
        let Some(text_id) = itext_reference(reference) else {
            debug!(reference, "label has no itext reference, leaving it unresolved");
            return None;
        };

        let by_language = self
            .languages
            .iter()
            .map(|language| (language.clone(), self.lookup(language, text_id)))
            .collect::<BTreeMap<_, _>>();
        Some(Label::Translated(by_language))
    }

    fn lookup(&self, language: &str, text_id: &str) -> Option<String> {
        self.translations
            .iter()
            .filter(|(lang, _)| *lang == language)
            .find_map(|(_, translation)| {
                translation
                    .element_children()
                    .filter(|element| element.is(XFORMS_NS, "text"))
                    .find(|element| element.attr("id") == Some(text_id))
                    .and_then(text_value)
            })
    }
}

pub(crate) fn translation_blocks(
    root: &XmlElementNode,
) -> impl Iterator<Item = (&str, &XmlElementNode)> {
    root.descendants()
        .filter(|element| element.is(XFORMS_NS, "itext"))
        .flat_map(|itext| itext.element_children())
        .filter(|element| element.is(XFORMS_NS, "translation"))
        .filter_map(|translation| translation.attr("lang").map(|lang| (lang, translation)))
}

/// Extracts `<id>` from `itext('<id>')`, with or without a namespace prefix.
pub(crate) fn itext_reference(raw: &str) -> Option<&str> {
    static ITEXT_REF: OnceLock<Regex> = OnceLock::new();
    let regex = ITEXT_REF.get_or_init(|| {
        Regex::new(r"itext\(\s*'([^']*)'\s*\)").expect("itext regex must compile")
    });
    regex
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// A text may carry several <value> forms; the untagged one is the label,
// long/short forms are accepted in that order, media forms never are.
fn text_value(text: &XmlElementNode) -> Option<String> {
    let values = text
        .element_children()
        .filter(|element| element.is(XFORMS_NS, "value"))
        .collect::<Vec<_>>();
    [None, Some("long"), Some("short")]
        .into_iter()
        .find_map(|form| values.iter().find(|value| value.attr("form") == form))
        .map(|value| value.text_content().trim().to_string())
}
