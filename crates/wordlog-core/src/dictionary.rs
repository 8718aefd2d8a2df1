use serde::{Deserialize, Serialize};

/// Definition text used by synthesized placeholder senses
pub const PLACEHOLDER_DEFINITION: &str = "Definition unavailable, refresh later or add one manually";

/// Definition strings that mark a sense as unresolved
pub const PLACEHOLDER_SENTINELS: &[&str] = &[
    "definition pending",
    "definition unavailable",
    PLACEHOLDER_DEFINITION,
];

/// Check if a definition string is one of the known placeholder markers
pub fn is_placeholder_definition(definition: &str) -> bool {
    let trimmed = definition.trim();
    PLACEHOLDER_SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

/// Controlled part-of-speech vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Other,
    /// Only used by placeholder senses
    Unknown,
}

impl PartOfSpeech {
    /// Map a free-form provider label onto the controlled vocabulary.
    ///
    /// Accepts full names, common dictionary abbreviations (`n.`, `adj`, `vt`)
    /// and the Chinese labels chat models tend to answer with. Compound labels
    /// such as `verb/noun` take their first component.
    pub fn from_label(label: &str) -> Self {
        let lowered = label.trim().to_lowercase();
        let head = lowered
            .split(['/', ',', ';', '|', '、', '；'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_end_matches('.');

        match head {
            "" | "unknown" | "未知" => PartOfSpeech::Unknown,
            "noun" | "n" | "nouns" | "名词" | "名" => PartOfSpeech::Noun,
            "verb" | "v" | "vt" | "vi" | "auxiliary verb" | "动词" | "动" => PartOfSpeech::Verb,
            "adjective" | "adj" | "a" | "形容词" | "形" => PartOfSpeech::Adjective,
            "adverb" | "adv" | "副词" | "副" => PartOfSpeech::Adverb,
            "pronoun" | "pron" | "代词" => PartOfSpeech::Pronoun,
            "preposition" | "prep" | "介词" => PartOfSpeech::Preposition,
            "conjunction" | "conj" | "连词" => PartOfSpeech::Conjunction,
            "interjection" | "exclamation" | "int" | "interj" | "感叹词" | "叹词" => {
                PartOfSpeech::Interjection
            }
            _ => PartOfSpeech::Other,
        }
    }

    /// Normalize a label taken from provider data.
    ///
    /// `Unknown` is reserved for placeholders, so blank or `unknown` labels
    /// from a real source become `Other`.
    pub fn from_provider_label(label: &str) -> Self {
        match Self::from_label(label) {
            PartOfSpeech::Unknown => PartOfSpeech::Other,
            pos => pos,
        }
    }
}

/// One grammatical/semantic reading of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    pub part_of_speech: PartOfSpeech,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
}

impl Sense {
    pub fn new(part_of_speech: PartOfSpeech, definition: impl Into<String>) -> Self {
        Self {
            part_of_speech,
            definition: definition.into(),
            example: None,
            example_translation: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = non_empty(example.into());
        self
    }

    pub fn with_example_translation(mut self, translation: impl Into<String>) -> Self {
        self.example_translation = non_empty(translation.into());
        self
    }

    /// Placeholder sense synthesized when no source yields data
    pub fn placeholder() -> Self {
        Self::new(PartOfSpeech::Unknown, PLACEHOLDER_DEFINITION)
    }

    /// A sense is valid when its definition is non-empty and not a placeholder marker
    pub fn is_valid(&self) -> bool {
        !self.definition.trim().is_empty() && !is_placeholder_definition(&self.definition)
    }
}

/// Which lookup source produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntrySource {
    #[serde(rename = "builtin")]
    Builtin,
    /// First chat-completion provider
    #[serde(rename = "provider-a")]
    PrimaryModel,
    /// Second chat-completion provider, same contract as the first
    #[serde(rename = "provider-b")]
    BackupModel,
    /// Free public dictionary API
    #[serde(rename = "dictionary-fallback")]
    Dictionary,
    #[serde(rename = "placeholder")]
    Placeholder,
}

impl EntrySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySource::Builtin => "builtin",
            EntrySource::PrimaryModel => "provider-a",
            EntrySource::BackupModel => "provider-b",
            EntrySource::Dictionary => "dictionary-fallback",
            EntrySource::Placeholder => "placeholder",
        }
    }
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved result for one query word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Surface form as the user queried it
    pub word: String,
    pub senses: Vec<Sense>,
    pub source: EntrySource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Set when the senses were borrowed from a guessed base form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_form: Option<String>,
}

impl Entry {
    pub fn new(word: impl Into<String>, senses: Vec<Sense>, source: EntrySource) -> Self {
        Self {
            word: word.into(),
            senses,
            source,
            pronunciation: None,
            audio_url: None,
            base_form: None,
        }
    }

    /// Entry holding a single placeholder sense
    pub fn placeholder(word: impl Into<String>) -> Self {
        Self::new(word, vec![Sense::placeholder()], EntrySource::Placeholder)
    }

    pub fn has_valid_sense(&self) -> bool {
        self.senses.iter().any(Sense::is_valid)
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == EntrySource::Placeholder || !self.has_valid_sense()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
