use wordlog_core::language::{FormAnalyzer, FormLabel, MorphResult, WordForms};

use crate::tables::{self, IRREGULAR_FORMS, PAST_PARTICIPLE_SET};

/// Extra length a word must have beyond the suffix before it is stripped
const MIN_STEM_MARGIN: usize = 3;

/// Shortest base form a suffix rule may produce
const MIN_BASE_LEN: usize = 3;

/// One regular suffix-stripping rule
struct SuffixRule {
    suffix: &'static str,
    /// Appended to the stem after the suffix is removed (`-ies` → `y`)
    replacement: &'static str,
    label: FormLabel,
    /// When non-empty, the stem must end with one of these
    required_stem_endings: &'static [&'static str],
    /// The stem must not end with any of these
    rejected_stem_endings: &'static [&'static str],
}

impl SuffixRule {
    const fn strip(suffix: &'static str, label: FormLabel) -> Self {
        Self {
            suffix,
            replacement: "",
            label,
            required_stem_endings: &[],
            rejected_stem_endings: &[],
        }
    }
}

/// Most specific suffixes first
const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule {
        suffix: "ies",
        replacement: "y",
        label: FormLabel::PluralOrThirdPerson,
        required_stem_endings: &[],
        rejected_stem_endings: &[],
    },
    SuffixRule {
        suffix: "es",
        replacement: "",
        label: FormLabel::PluralOrThirdPerson,
        required_stem_endings: &["s", "x", "z", "ch", "sh"],
        rejected_stem_endings: &[],
    },
    SuffixRule::strip("ed", FormLabel::PastTenseOrParticiple),
    SuffixRule::strip("ing", FormLabel::PresentParticiple),
    // `-ss`, `-us` and `-is` endings are not inflections (glass, virus, axis)
    SuffixRule {
        suffix: "s",
        replacement: "",
        label: FormLabel::PluralOrThirdPerson,
        required_stem_endings: &[],
        rejected_stem_endings: &["s", "u", "i"],
    },
    SuffixRule::strip("er", FormLabel::Comparative),
    SuffixRule::strip("est", FormLabel::Superlative),
    SuffixRule::strip("ful", FormLabel::AdjectiveFul),
    SuffixRule::strip("less", FormLabel::AdjectiveLess),
    SuffixRule::strip("able", FormLabel::AdjectiveAble),
    SuffixRule::strip("ible", FormLabel::AdjectiveIble),
    SuffixRule::strip("ous", FormLabel::AdjectiveOus),
    SuffixRule::strip("ive", FormLabel::AdjectiveIve),
    SuffixRule::strip("al", FormLabel::AdjectiveAl),
    SuffixRule::strip("ly", FormLabel::AdverbLy),
    SuffixRule::strip("ment", FormLabel::NounMent),
    SuffixRule::strip("ness", FormLabel::NounNess),
    SuffixRule::strip("tion", FormLabel::NounTion),
    SuffixRule::strip("sion", FormLabel::NounSion),
    SuffixRule::strip("ity", FormLabel::NounIty),
    SuffixRule::strip("ance", FormLabel::NounAnce),
    SuffixRule::strip("ence", FormLabel::NounEnce),
    SuffixRule::strip("dom", FormLabel::NounDom),
    SuffixRule::strip("ship", FormLabel::NounShip),
];

/// Heuristic English base-form guesser.
///
/// Prefers leaving a word unchanged over producing a wrong stem: the
/// allowlist and length guards suppress known bad reductions such as
/// `butter` → `butt`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMorphology;

impl EnglishMorphology {
    pub fn new() -> Self {
        Self
    }

    /// Guess the base form of a surface word
    pub fn analyze(&self, word: &str) -> MorphResult {
        let lower = word.trim().to_lowercase();

        if lower.is_empty() {
            return MorphResult::unchanged(word);
        }

        if let Some(base) = tables::irregular_base(&lower) {
            let label = irregular_label(&lower, base);
            return MorphResult {
                base: base.to_string(),
                label,
            };
        }

        SUFFIX_RULES
            .iter()
            .find_map(|rule| apply_rule(rule, &lower))
            .unwrap_or_else(|| MorphResult::unchanged(lower))
    }

    /// Generate past, participle and third-person forms of a base word
    pub fn forms(&self, base: &str) -> WordForms {
        let base = base.trim().to_lowercase();

        if base == "be" {
            return WordForms {
                base,
                past: "was".to_string(),
                past_participle: "been".to_string(),
                present_participle: "being".to_string(),
                third_person: "is".to_string(),
            };
        }

        let mut past = None;
        let mut past_participle = None;
        let mut present_participle = None;
        let mut third_person = None;

        for (form, form_base) in IRREGULAR_FORMS {
            if *form_base != base {
                continue;
            }
            if *form == base {
                // Self-mapped verbs (cut, put, read) keep one past form
                past.get_or_insert_with(|| base.clone());
            } else if form.ends_with("ing") {
                present_participle.get_or_insert_with(|| form.to_string());
            } else if PAST_PARTICIPLE_SET.contains(form) {
                past_participle.get_or_insert_with(|| form.to_string());
            } else if form.ends_with('s') && !form.ends_with("ss") {
                third_person.get_or_insert_with(|| form.to_string());
            } else {
                past.get_or_insert_with(|| form.to_string());
            }
        }

        let past = past.unwrap_or_else(|| regular_past(&base));
        let past_participle = past_participle.unwrap_or_else(|| past.clone());
        let present_participle = present_participle.unwrap_or_else(|| regular_participle(&base));
        let third_person = third_person.unwrap_or_else(|| regular_third_person(&base));

        WordForms {
            base,
            past,
            past_participle,
            present_participle,
            third_person,
        }
    }
}

impl FormAnalyzer for EnglishMorphology {
    fn analyze(&self, word: &str) -> MorphResult {
        EnglishMorphology::analyze(self, word)
    }

    fn forms(&self, base: &str) -> WordForms {
        EnglishMorphology::forms(self, base)
    }
}

fn apply_rule(rule: &SuffixRule, word: &str) -> Option<MorphResult> {
    if !word.ends_with(rule.suffix) {
        return None;
    }
    if word.len() < rule.suffix.len() + MIN_STEM_MARGIN {
        return None;
    }
    if tables::is_atomic(word) {
        return None;
    }

    let stem = &word[..word.len() - rule.suffix.len()];

    if !rule.required_stem_endings.is_empty()
        && !rule.required_stem_endings.iter().any(|e| stem.ends_with(e))
    {
        return None;
    }
    if rule.rejected_stem_endings.iter().any(|e| stem.ends_with(e)) {
        return None;
    }

    let candidate = format!("{}{}", stem, rule.replacement);
    if candidate.len() < MIN_BASE_LEN || tables::is_atomic(&candidate) {
        return None;
    }

    let base = if rule.suffix == "ed" {
        repair_ed_stem(word, candidate)
    } else {
        candidate
    };

    Some(MorphResult {
        base,
        label: Some(rule.label),
    })
}

/// Fix up the stem left by stripping `-ed`.
///
/// `-eed` words only lose the `d` (agreed → agree). Words of five or more
/// letters ending in consonant + `red` get an `e` back. The second case is a
/// narrow heuristic and mis-handles doubled consonants: `starred` becomes
/// `starre`.
fn repair_ed_stem(word: &str, stem: String) -> String {
    if word.ends_with("eed") {
        return word[..word.len() - 1].to_string();
    }

    if word.len() >= 5 && word.ends_with("red") {
        let before = word[..word.len() - 3].chars().last();
        if before.is_some_and(is_consonant) {
            return format!("{stem}e");
        }
    }

    stem
}

fn irregular_label(form: &str, base: &str) -> Option<FormLabel> {
    if form == base {
        return None;
    }

    if base == "be" {
        return Some(match form {
            "am" | "is" | "are" => FormLabel::PresentTense,
            "was" | "were" => FormLabel::PastTense,
            "being" => FormLabel::PresentParticiple,
            _ => FormLabel::PastParticiple,
        });
    }

    let label = if form.ends_with("ing") {
        FormLabel::PresentParticiple
    } else if form.ends_with('s') && !form.ends_with("ss") {
        FormLabel::ThirdPersonSingular
    } else if form.ends_with("ed") {
        FormLabel::PastTenseOrParticiple
    } else if PAST_PARTICIPLE_SET.contains(form) {
        FormLabel::PastParticiple
    } else {
        FormLabel::PastTense
    };

    Some(label)
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    chars.next() == Some('y') && chars.next().is_some_and(is_consonant)
}

fn regular_past(base: &str) -> String {
    if base.ends_with('e') {
        format!("{base}d")
    } else if ends_with_consonant_y(base) {
        format!("{}ied", &base[..base.len() - 1])
    } else {
        format!("{base}ed")
    }
}

fn regular_participle(base: &str) -> String {
    if base.ends_with("ie") {
        format!("{}ying", &base[..base.len() - 2])
    } else if base.ends_with('e') && !base.ends_with("ee") && base.len() > 2 {
        format!("{}ing", &base[..base.len() - 1])
    } else {
        format!("{base}ing")
    }
}

fn regular_third_person(base: &str) -> String {
    if ends_with_consonant_y(base) {
        format!("{}ies", &base[..base.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|e| base.ends_with(e)) {
        format!("{base}es")
    } else {
        format!("{base}s")
    }
}
