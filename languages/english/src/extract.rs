//! Pull definitions out of free-form chat-model answers.
//!
//! Models are asked for strict JSON but often wrap it in prose or code
//! fences. Parsing tries the first balanced JSON object that carries a
//! results key, then falls back to a regex scrape that yields at most one
//! low-confidence sense.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use wordlog_core::dictionary::{PartOfSpeech, Sense};

/// Keys a results object may use for its sense list
const RESULT_KEYS: &[&str] = &["definitions", "senses"];

static QUOTED_POS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:partOfSpeech|part_of_speech|pos)"\s*:\s*"([^"]*)""#).expect("valid regex")
});

static QUOTED_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:definition|meaning|gloss)"\s*:\s*"([^"]+)""#).expect("valid regex")
});

static POS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?mi)^\s*(?:[-*]\s*)?[\[(]?(noun|verb|adjective|adverb|pronoun|preposition|conjunction|interjection|n\.|v\.|vt\.|vi\.|adj\.|adv\.)[\])]?\s*[:：.\-]?\s+(\S.*?)\s*$",
    )
    .expect("valid regex")
});

/// Outcome of parsing a model answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDefinitions {
    /// A JSON results object was found and parsed
    Strict(Vec<Sense>),
    /// Only a best-effort scrape succeeded
    Heuristic(Sense),
    Failed,
}

impl ParsedDefinitions {
    pub fn into_senses(self) -> Vec<Sense> {
        match self {
            ParsedDefinitions::Strict(senses) => senses,
            ParsedDefinitions::Heuristic(sense) => vec![sense],
            ParsedDefinitions::Failed => Vec::new(),
        }
    }

    pub fn is_heuristic(&self) -> bool {
        matches!(self, ParsedDefinitions::Heuristic(_))
    }
}

#[derive(Debug, Deserialize)]
struct ResultsPayload {
    #[serde(alias = "senses")]
    definitions: Vec<RawSense>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSense {
    #[serde(default, alias = "part_of_speech", alias = "pos")]
    part_of_speech: Option<String>,
    #[serde(default, alias = "meaning", alias = "gloss")]
    definition: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default, alias = "example_translation")]
    example_translation: Option<String>,
}

impl RawSense {
    fn into_sense(self) -> Option<Sense> {
        let definition = self.definition?.trim().to_string();
        if definition.is_empty() {
            return None;
        }

        let label = self.part_of_speech.as_deref().unwrap_or_default();
        let pos = PartOfSpeech::from_provider_label(label);

        let mut sense = Sense::new(pos, definition);
        if let Some(example) = self.example {
            sense = sense.with_example(example.trim());
        }
        if let Some(translation) = self.example_translation {
            sense = sense.with_example_translation(translation.trim());
        }
        Some(sense)
    }
}

/// Parse a raw model answer into senses
pub fn parse_definitions(raw: &str) -> ParsedDefinitions {
    if let Some(senses) = parse_strict(raw) {
        return ParsedDefinitions::Strict(senses);
    }

    match scrape(raw) {
        Some(sense) => ParsedDefinitions::Heuristic(sense),
        None => ParsedDefinitions::Failed,
    }
}

fn parse_strict(raw: &str) -> Option<Vec<Sense>> {
    for block in json_objects(raw) {
        if !RESULT_KEYS.iter().any(|key| block.contains(&format!("\"{key}\""))) {
            continue;
        }

        match serde_json::from_str::<ResultsPayload>(block) {
            Ok(payload) => {
                let senses: Vec<Sense> = payload
                    .definitions
                    .into_iter()
                    .filter_map(RawSense::into_sense)
                    .collect();
                if !senses.is_empty() {
                    return Some(senses);
                }
            }
            Err(e) => {
                tracing::debug!("Results block did not parse: {}", e);
            }
        }
    }

    None
}

fn scrape(raw: &str) -> Option<Sense> {
    if let Some(definition) = QUOTED_DEFINITION.captures(raw).and_then(|c| c.get(1)) {
        let pos = QUOTED_POS
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| PartOfSpeech::from_provider_label(m.as_str()))
            .unwrap_or(PartOfSpeech::Other);
        let definition = definition.as_str().trim();
        if !definition.is_empty() {
            return Some(Sense::new(pos, definition));
        }
    }

    POS_LINE.captures(raw).and_then(|caps| {
        let pos = PartOfSpeech::from_provider_label(caps.get(1)?.as_str());
        let definition = caps.get(2)?.as_str().trim();
        (!definition.is_empty()).then(|| Sense::new(pos, definition))
    })
}

/// Top-level balanced `{...}` blocks in order of appearance.
///
/// Braces inside JSON string literals are ignored. An unterminated block
/// ends the scan.
fn json_objects(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = Some(idx);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if let Some(s) = start.take() {
                        blocks.push(&text[s..=idx]);
                    }
                }
            }
            _ => {}
        }
    }

    blocks
}
