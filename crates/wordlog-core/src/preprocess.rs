use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query normalizer: trim, NFKC, single spaces, lowercase
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC) folds full-width letters from pasted text
        let text: String = text.nfkc().collect();

        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
