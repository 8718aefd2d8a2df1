use serde::{Deserialize, Serialize};

/// Base-form analysis for a language with inflection/derivation
pub trait FormAnalyzer: Send + Sync {
    /// Guess the dictionary form of a surface word. Never fails; the worst
    /// case is the input returned unchanged with no label.
    fn analyze(&self, word: &str) -> MorphResult;

    /// Generate the common inflections of a base form
    fn forms(&self, base: &str) -> WordForms;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphResult {
    /// Best-guess dictionary form
    pub base: String,
    /// Detected transformation, `None` when the word already looks like a base form
    pub label: Option<FormLabel>,
}

impl MorphResult {
    pub fn unchanged(word: impl Into<String>) -> Self {
        Self {
            base: word.into(),
            label: None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.label.is_none()
    }
}

/// Transformation observed between a surface form and its base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormLabel {
    PresentTense,
    PresentParticiple,
    ThirdPersonSingular,
    PastTense,
    PastParticiple,
    /// `-ed` forms are ambiguous between the two
    PastTenseOrParticiple,
    PluralOrThirdPerson,
    Comparative,
    Superlative,
    AdjectiveFul,
    AdjectiveLess,
    AdjectiveAble,
    AdjectiveIble,
    AdjectiveOus,
    AdjectiveIve,
    AdjectiveAl,
    AdverbLy,
    NounMent,
    NounNess,
    NounTion,
    NounSion,
    NounIty,
    NounAnce,
    NounEnce,
    NounDom,
    NounShip,
}

impl FormLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormLabel::PresentTense => "present tense",
            FormLabel::PresentParticiple => "present participle",
            FormLabel::ThirdPersonSingular => "third-person singular",
            FormLabel::PastTense => "past tense",
            FormLabel::PastParticiple => "past participle",
            FormLabel::PastTenseOrParticiple => "past tense/past participle",
            FormLabel::PluralOrThirdPerson => "plural/3rd-person-singular",
            FormLabel::Comparative => "comparative",
            FormLabel::Superlative => "superlative",
            FormLabel::AdjectiveFul => "adjective via -ful suffix",
            FormLabel::AdjectiveLess => "adjective via -less suffix",
            FormLabel::AdjectiveAble => "adjective via -able suffix",
            FormLabel::AdjectiveIble => "adjective via -ible suffix",
            FormLabel::AdjectiveOus => "adjective via -ous suffix",
            FormLabel::AdjectiveIve => "adjective via -ive suffix",
            FormLabel::AdjectiveAl => "adjective via -al suffix",
            FormLabel::AdverbLy => "adverb via -ly suffix",
            FormLabel::NounMent => "noun via -ment suffix",
            FormLabel::NounNess => "noun via -ness suffix",
            FormLabel::NounTion => "noun via -tion suffix",
            FormLabel::NounSion => "noun via -sion suffix",
            FormLabel::NounIty => "noun via -ity suffix",
            FormLabel::NounAnce => "noun via -ance suffix",
            FormLabel::NounEnce => "noun via -ence suffix",
            FormLabel::NounDom => "noun via -dom suffix",
            FormLabel::NounShip => "noun via -ship suffix",
        }
    }

    /// True for labels that describe a past form
    pub fn is_past(&self) -> bool {
        matches!(
            self,
            FormLabel::PastTense | FormLabel::PastParticiple | FormLabel::PastTenseOrParticiple
        )
    }
}

impl std::fmt::Display for FormLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inflections of a base form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordForms {
    pub base: String,
    pub past: String,
    pub past_participle: String,
    pub present_participle: String,
    pub third_person: String,
}
