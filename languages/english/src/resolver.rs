use std::sync::LazyLock;

use futures_util::StreamExt;
use futures_util::stream;
use regex::Regex;
use wordlog_config::Config;
use wordlog_core::dictionary::{Entry, Sense};
use wordlog_core::language::FormAnalyzer;
use wordlog_core::preprocess::{DefaultPreprocessor, Preprocessor};
use wordlog_provider::{DefinitionProvider, ProviderError};

use crate::builtin::BuiltinDictionary;
use crate::chat::ChatCompletionProvider;
use crate::free_dictionary::FreeDictionaryProvider;
use crate::morphology::EnglishMorphology;

/// Longest query sent to remote providers
const MAX_QUERY_LEN: usize = 50;

static WORD_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:['-][a-z]+)*$").expect("valid regex"));

/// Whether a normalized query looks like a single English word
pub fn is_plausible_word(query: &str) -> bool {
    !query.is_empty() && query.len() <= MAX_QUERY_LEN && WORD_SHAPE.is_match(query)
}

/// Ordered definition lookup: builtin table, remote providers, placeholder.
///
/// Resolution never fails. Provider errors and timeouts are logged and the
/// next source is tried; when nothing answers, a placeholder entry is
/// returned so callers always get at least one sense.
pub struct DefinitionResolver {
    builtin: Option<&'static BuiltinDictionary>,
    providers: Vec<Box<dyn DefinitionProvider>>,
    morphology: Box<dyn FormAnalyzer>,
    preprocessor: DefaultPreprocessor,
    batch_concurrency: usize,
    retry_with_base_form: bool,
}

impl DefinitionResolver {
    /// Builtin table only, no remote providers
    pub fn new() -> Self {
        Self {
            builtin: Some(BuiltinDictionary::shared()),
            providers: Vec::new(),
            morphology: Box::new(EnglishMorphology::new()),
            preprocessor: DefaultPreprocessor,
            batch_concurrency: 3,
            retry_with_base_form: true,
        }
    }

    /// Build the standard chain from configuration
    pub fn from_config(config: &Config) -> Self {
        let providers = &config.providers;
        let resolver = Self::new()
            .with_batch_concurrency(config.resolver.batch_concurrency)
            .with_retry_with_base_form(config.resolver.retry_with_base_form)
            .with_provider(ChatCompletionProvider::primary(providers.primary.clone()))
            .with_provider(ChatCompletionProvider::backup(providers.backup.clone()))
            .with_provider(FreeDictionaryProvider::new(providers.dictionary.clone()));

        if config.resolver.builtin_enabled {
            resolver
        } else {
            resolver.without_builtin()
        }
    }

    /// Append a provider; providers are consulted in insertion order
    pub fn with_provider(mut self, provider: impl DefinitionProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn without_builtin(mut self) -> Self {
        self.builtin = None;
        self
    }

    pub fn with_batch_concurrency(mut self, limit: usize) -> Self {
        self.batch_concurrency = limit.max(1);
        self
    }

    pub fn with_retry_with_base_form(mut self, enabled: bool) -> Self {
        self.retry_with_base_form = enabled;
        self
    }

    /// Replace the analyzer used for base-form retries
    pub fn with_analyzer(mut self, analyzer: impl FormAnalyzer + 'static) -> Self {
        self.morphology = Box::new(analyzer);
        self
    }

    pub fn analyzer(&self) -> &dyn FormAnalyzer {
        self.morphology.as_ref()
    }

    /// Resolve one word through the lookup chain
    pub async fn resolve(&self, word: &str) -> Entry {
        let surface = word.trim();
        let query = self.preprocessor.process(word);

        if let Some(entry) = self.builtin.and_then(|b| b.lookup(&query)) {
            tracing::info!("Resolved '{}' from builtin table", query);
            return rekey(entry, surface);
        }

        if !is_plausible_word(&query) {
            tracing::debug!("Skipping remote lookup for implausible query '{}'", query);
            return Entry::placeholder(surface);
        }

        for provider in &self.providers {
            let name = provider.metadata().name;
            if !provider.is_configured() {
                tracing::debug!("Provider {} not configured, skipping", name);
                continue;
            }

            tracing::debug!("Looking up '{}' with {}", query, name);
            match self.attempt(provider.as_ref(), &query).await {
                Ok(mut entry) => {
                    entry.senses.retain(Sense::is_valid);
                    if entry.senses.is_empty() {
                        tracing::debug!("{} returned no usable senses for '{}'", name, query);
                        continue;
                    }
                    tracing::info!("Resolved '{}' from {}", query, entry.source);
                    return rekey(entry, surface);
                }
                Err(ProviderError::NotFound) => {
                    tracing::debug!("{} has no entry for '{}'", name, query);
                }
                Err(e) => {
                    tracing::warn!("{} lookup for '{}' failed: {}", name, query, e);
                }
            }
        }

        tracing::info!("No source resolved '{}', using placeholder", query);
        Entry::placeholder(surface)
    }

    async fn attempt(
        &self,
        provider: &dyn DefinitionProvider,
        query: &str,
    ) -> Result<Entry, ProviderError> {
        let limit = provider.timeout();
        tokio::time::timeout(limit, provider.lookup(query))
            .await
            .unwrap_or(Err(ProviderError::Timeout(limit)))
    }

    /// Resolve, then retry with the guessed base form when nothing was found.
    ///
    /// A base-form hit is returned under the word as typed, with `base_form`
    /// recording where the senses came from.
    pub async fn resolve_with_base_form(&self, word: &str) -> Entry {
        let entry = self.resolve(word).await;
        if entry.has_valid_sense() {
            return entry;
        }

        let query = self.preprocessor.process(word);
        let analysis = self.morphology.analyze(&query);
        if analysis.is_unchanged() || analysis.base.is_empty() || analysis.base == query {
            return entry;
        }

        tracing::debug!(
            "Retrying '{}' as base form '{}' ({})",
            query,
            analysis.base,
            analysis.label.as_ref().map(|l| l.as_str()).unwrap_or("no label")
        );

        let base_entry = self.resolve(&analysis.base).await;
        if !base_entry.has_valid_sense() {
            return entry;
        }

        let mut found = rekey(base_entry, word.trim());
        found.base_form = Some(analysis.base);
        found
    }

    /// Resolve many words with bounded concurrency, keeping input order
    pub async fn resolve_batch<S: AsRef<str>>(&self, words: &[S]) -> Vec<Entry> {
        stream::iter(words.iter().map(|word| self.resolve_with_policy(word.as_ref())))
            .buffered(self.batch_concurrency)
            .collect()
            .await
    }

    /// Re-resolve entries that hold no valid sense.
    ///
    /// Entries that already resolved are kept as they are, as are entries
    /// whose refresh still yields nothing.
    pub async fn refresh_placeholders(&self, entries: Vec<Entry>) -> Vec<Entry> {
        stream::iter(entries.into_iter().map(|entry| async move {
            if entry.has_valid_sense() {
                return entry;
            }

            let refreshed = self.resolve_with_policy(&entry.word).await;
            if refreshed.has_valid_sense() {
                tracing::info!("Refreshed placeholder for '{}'", entry.word);
                refreshed
            } else {
                entry
            }
        }))
        .buffered(self.batch_concurrency)
        .collect()
        .await
    }

    async fn resolve_with_policy(&self, word: &str) -> Entry {
        if self.retry_with_base_form {
            self.resolve_with_base_form(word).await
        } else {
            self.resolve(word).await
        }
    }
}

impl Default for DefinitionResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Key an entry under the surface form the user typed
fn rekey(mut entry: Entry, surface: &str) -> Entry {
    entry.word = surface.to_string();
    entry
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use wordlog_core::dictionary::{EntrySource, PartOfSpeech, is_placeholder_definition};
    use wordlog_provider::ProviderMetadata;

    use super::*;

    #[derive(Default)]
    struct Counters {
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    /// In-process provider that answers from a fixed table
    struct ScriptedProvider {
        source: EntrySource,
        answers: HashMap<String, Vec<Sense>>,
        configured: bool,
        delay: Duration,
        timeout: Duration,
        failure: Option<fn() -> ProviderError>,
        counters: Arc<Counters>,
    }

    impl ScriptedProvider {
        fn new(source: EntrySource) -> Self {
            Self {
                source,
                answers: HashMap::new(),
                configured: true,
                delay: Duration::ZERO,
                timeout: Duration::from_secs(5),
                failure: None,
                counters: Arc::new(Counters::default()),
            }
        }

        fn knows(mut self, word: &str, definition: &str) -> Self {
            self.answers.insert(
                word.to_string(),
                vec![Sense::new(PartOfSpeech::Verb, definition)],
            );
            self
        }

        fn answers_with(mut self, word: &str, senses: Vec<Sense>) -> Self {
            self.answers.insert(word.to_string(), senses);
            self
        }

        fn unconfigured(mut self) -> Self {
            self.configured = false;
            self
        }

        fn slow(mut self, delay: Duration, timeout: Duration) -> Self {
            self.delay = delay;
            self.timeout = timeout;
            self
        }

        fn failing(mut self, failure: fn() -> ProviderError) -> Self {
            self.failure = Some(failure);
            self
        }

        fn counters(&self) -> Arc<Counters> {
            Arc::clone(&self.counters)
        }
    }

    #[async_trait]
    impl DefinitionProvider for ScriptedProvider {
        async fn lookup(&self, word: &str) -> Result<Entry, ProviderError> {
            let counters = &self.counters;
            counters.calls.fetch_add(1, Ordering::SeqCst);
            let now = counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            counters.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            counters.in_flight.fetch_sub(1, Ordering::SeqCst);

            if let Some(failure) = self.failure {
                return Err(failure());
            }

            self.answers
                .get(word)
                .map(|senses| Entry::new(word, senses.clone(), self.source))
                .ok_or(ProviderError::NotFound)
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        fn timeout(&self) -> Duration {
            self.timeout
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: format!("scripted-{}", self.source),
                source: self.source,
            }
        }
    }

    fn assert_non_empty(entry: &Entry) {
        assert!(!entry.senses.is_empty(), "'{}' resolved with no senses", entry.word);
    }

    #[tokio::test]
    async fn builtin_hit_skips_providers() {
        let provider = ScriptedProvider::new(EntrySource::PrimaryModel).knows("apple", "remote");
        let counters = provider.counters();
        let resolver = DefinitionResolver::new().with_provider(provider);

        let entry = resolver.resolve("  Apple ").await;
        assert_eq!(entry.source, EntrySource::Builtin);
        assert_eq!(entry.word, "Apple");
        assert_eq!(counters.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn third_provider_wins_and_chain_stops() {
        let first = ScriptedProvider::new(EntrySource::PrimaryModel);
        let second = ScriptedProvider::new(EntrySource::BackupModel)
            .failing(|| ProviderError::RateLimitExceeded);
        let third = ScriptedProvider::new(EntrySource::Dictionary).knows("bloviate", "talk pompously");
        let fourth = ScriptedProvider::new(EntrySource::Dictionary).knows("bloviate", "never reached");
        let (c1, c2, c3, c4) = (
            first.counters(),
            second.counters(),
            third.counters(),
            fourth.counters(),
        );

        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_provider(first)
            .with_provider(second)
            .with_provider(third)
            .with_provider(fourth);

        let entry = resolver.resolve("bloviate").await;
        assert_eq!(entry.source, EntrySource::Dictionary);
        assert_eq!(entry.senses[0].definition, "talk pompously");
        assert_eq!(c1.calls.load(Ordering::SeqCst), 1);
        assert_eq!(c2.calls.load(Ordering::SeqCst), 1);
        assert_eq!(c3.calls.load(Ordering::SeqCst), 1);
        assert_eq!(c4.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn all_failures_give_placeholder() {
        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_provider(ScriptedProvider::new(EntrySource::PrimaryModel))
            .with_provider(
                ScriptedProvider::new(EntrySource::BackupModel)
                    .failing(|| ProviderError::AuthenticationError),
            )
            .with_provider(
                ScriptedProvider::new(EntrySource::Dictionary)
                    .failing(|| ProviderError::Http { status: 500 }),
            );

        let entry = resolver.resolve("zzxqword").await;
        assert_eq!(entry.source, EntrySource::Placeholder);
        assert_eq!(entry.senses.len(), 1);
        assert!(is_placeholder_definition(&entry.senses[0].definition));
        assert!(!entry.has_valid_sense());
    }

    #[tokio::test]
    async fn never_returns_empty_senses() {
        let resolver = DefinitionResolver::new()
            .with_provider(ScriptedProvider::new(EntrySource::PrimaryModel));

        for word in ["", "   ", "zzxq", "你好", "hello world", "12345", "apple"] {
            assert_non_empty(&resolver.resolve(word).await);
            assert_non_empty(&resolver.resolve_with_base_form(word).await);
        }
    }

    #[tokio::test]
    async fn implausible_queries_never_reach_providers() {
        let provider = ScriptedProvider::new(EntrySource::PrimaryModel);
        let counters = provider.counters();
        let resolver = DefinitionResolver::new().without_builtin().with_provider(provider);

        let long = "a".repeat(51);
        for word in ["", "你好", "two words", "x1", long.as_str()] {
            let entry = resolver.resolve(word).await;
            assert_eq!(entry.source, EntrySource::Placeholder);
        }
        resolver.resolve("well-being").await;
        resolver.resolve("don't").await;
        assert_eq!(counters.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalid_senses_are_dropped_from_winner() {
        let provider = ScriptedProvider::new(EntrySource::PrimaryModel).answers_with(
            "gleam",
            vec![
                Sense::new(PartOfSpeech::Noun, "definition pending"),
                Sense::new(PartOfSpeech::Verb, "to shine brightly"),
                Sense::new(PartOfSpeech::Noun, "  "),
            ],
        );
        let resolver = DefinitionResolver::new().without_builtin().with_provider(provider);

        let entry = resolver.resolve("gleam").await;
        assert_eq!(
            entry.senses,
            vec![Sense::new(PartOfSpeech::Verb, "to shine brightly")]
        );
    }

    #[tokio::test]
    async fn placeholder_only_answer_falls_through() {
        let first = ScriptedProvider::new(EntrySource::PrimaryModel).answers_with(
            "gleam",
            vec![Sense::placeholder()],
        );
        let second = ScriptedProvider::new(EntrySource::BackupModel).knows("gleam", "to shine");
        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_provider(first)
            .with_provider(second);

        assert_eq!(resolver.resolve("gleam").await.source, EntrySource::BackupModel);
    }

    #[tokio::test]
    async fn unconfigured_provider_is_skipped() {
        let skipped = ScriptedProvider::new(EntrySource::PrimaryModel)
            .knows("gleam", "never used")
            .unconfigured();
        let skipped_counters = skipped.counters();
        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_provider(skipped)
            .with_provider(ScriptedProvider::new(EntrySource::BackupModel).knows("gleam", "to shine"));

        let entry = resolver.resolve("gleam").await;
        assert_eq!(entry.source, EntrySource::BackupModel);
        assert_eq!(skipped_counters.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn slow_provider_times_out_and_chain_continues() {
        let slow = ScriptedProvider::new(EntrySource::PrimaryModel)
            .knows("gleam", "too late")
            .slow(Duration::from_millis(500), Duration::from_millis(20));
        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_provider(slow)
            .with_provider(ScriptedProvider::new(EntrySource::BackupModel).knows("gleam", "to shine"));

        let entry = resolver.resolve("gleam").await;
        assert_eq!(entry.source, EntrySource::BackupModel);
        assert_eq!(entry.senses[0].definition, "to shine");
    }

    #[tokio::test]
    async fn base_form_retry_keeps_surface_word() {
        let provider = ScriptedProvider::new(EntrySource::PrimaryModel).knows("run", "to move fast");
        let resolver = DefinitionResolver::new().without_builtin().with_provider(provider);

        let plain = resolver.resolve("running").await;
        assert!(!plain.has_valid_sense());

        let entry = resolver.resolve_with_base_form("running").await;
        assert_eq!(entry.word, "running");
        assert_eq!(entry.base_form.as_deref(), Some("run"));
        assert_eq!(entry.source, EntrySource::PrimaryModel);
        assert_eq!(entry.senses[0].definition, "to move fast");
    }

    #[tokio::test]
    async fn base_form_retry_falls_back_to_builtin() {
        let resolver = DefinitionResolver::new()
            .with_provider(ScriptedProvider::new(EntrySource::PrimaryModel));

        let entry = resolver.resolve_with_base_form("walked").await;
        assert_eq!(entry.word, "walked");
        assert_eq!(entry.source, EntrySource::Builtin);
        assert_eq!(entry.base_form.as_deref(), Some("walk"));
    }

    #[tokio::test]
    async fn unknown_base_keeps_original_placeholder() {
        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_provider(ScriptedProvider::new(EntrySource::PrimaryModel));

        let entry = resolver.resolve_with_base_form("glorped").await;
        assert_eq!(entry.word, "glorped");
        assert_eq!(entry.source, EntrySource::Placeholder);
        assert_eq!(entry.base_form, None);
    }

    struct PluralAnalyzer;

    impl FormAnalyzer for PluralAnalyzer {
        fn analyze(&self, word: &str) -> wordlog_core::language::MorphResult {
            match word {
                "mice" => wordlog_core::language::MorphResult {
                    base: "mouse".to_string(),
                    label: Some(wordlog_core::language::FormLabel::PluralOrThirdPerson),
                },
                other => wordlog_core::language::MorphResult::unchanged(other),
            }
        }

        fn forms(&self, base: &str) -> wordlog_core::language::WordForms {
            EnglishMorphology::new().forms(base)
        }
    }

    #[tokio::test]
    async fn custom_analyzer_drives_retry() {
        let provider = ScriptedProvider::new(EntrySource::Dictionary).knows("mouse", "a small rodent");
        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_analyzer(PluralAnalyzer)
            .with_provider(provider);

        let entry = resolver.resolve_with_base_form("Mice").await;
        assert_eq!(entry.word, "Mice");
        assert_eq!(entry.base_form.as_deref(), Some("mouse"));
        assert_eq!(resolver.analyzer().analyze("mice").base, "mouse");
    }

    #[tokio::test]
    async fn batch_respects_concurrency_limit_and_order() {
        let words: Vec<String> = [
            "amber", "brisk", "cinder", "dwell", "ember", "fjord", "glint", "haven", "inlet", "jolt",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();
        let mut provider = ScriptedProvider::new(EntrySource::PrimaryModel)
            .slow(Duration::from_millis(30), Duration::from_secs(5));
        for word in &words {
            provider = provider.knows(word, &format!("meaning of {word}"));
        }
        let counters = provider.counters();

        let resolver = DefinitionResolver::new()
            .without_builtin()
            .with_batch_concurrency(3)
            .with_provider(provider);

        let entries = resolver.resolve_batch(&words).await;

        let resolved: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        let expected: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(resolved, expected);
        assert!(entries.iter().all(|e| e.source == EntrySource::PrimaryModel));
        assert_eq!(counters.calls.load(Ordering::SeqCst), 10);

        let max = counters.max_in_flight.load(Ordering::SeqCst);
        assert!(max <= 3, "{max} lookups were in flight");
        assert!(max >= 2, "batch ran sequentially");
    }

    #[tokio::test]
    async fn refresh_only_touches_placeholders() {
        let provider = ScriptedProvider::new(EntrySource::PrimaryModel).knows("gleam", "to shine");
        let counters = provider.counters();
        let resolver = DefinitionResolver::new().without_builtin().with_provider(provider);

        let resolved = Entry::new(
            "kept",
            vec![Sense::new(PartOfSpeech::Noun, "already known")],
            EntrySource::Dictionary,
        );
        let entries = vec![
            resolved.clone(),
            Entry::placeholder("gleam"),
            Entry::placeholder("zzxq"),
        ];

        let refreshed = resolver.refresh_placeholders(entries).await;
        assert_eq!(refreshed[0], resolved);
        assert_eq!(refreshed[1].source, EntrySource::PrimaryModel);
        assert_eq!(refreshed[2], Entry::placeholder("zzxq"));
        // gleam once, zzxq once (its base form equals the query)
        assert_eq!(counters.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn config_builds_chain_in_fixed_order() {
        let resolver = DefinitionResolver::from_config(&Config::default());

        let sources: Vec<EntrySource> = resolver
            .providers
            .iter()
            .map(|p| p.metadata().source)
            .collect();
        assert_eq!(
            sources,
            vec![
                EntrySource::PrimaryModel,
                EntrySource::BackupModel,
                EntrySource::Dictionary,
            ]
        );
        assert!(resolver.builtin.is_some());
        assert_eq!(resolver.batch_concurrency, 3);
        assert!(resolver.retry_with_base_form);
    }

    #[test]
    fn config_can_disable_builtin_and_retry() {
        let config = Config::from_json(
            r#"{ "resolver": { "builtin_enabled": false, "retry_with_base_form": false, "batch_concurrency": 0 } }"#,
        )
        .unwrap();
        let resolver = DefinitionResolver::from_config(&config);

        assert!(resolver.builtin.is_none());
        assert!(!resolver.retry_with_base_form);
        assert_eq!(resolver.batch_concurrency, 1);
        assert_eq!(resolver.providers.len(), 3);
    }

    #[tokio::test]
    async fn config_without_builtin_misses_curated_words() {
        let mut config = Config::default();
        config.resolver.builtin_enabled = false;
        config.providers.dictionary.enabled = false;
        let resolver = DefinitionResolver::from_config(&config);

        let entry = resolver.resolve("apple").await;
        assert_eq!(entry.source, EntrySource::Placeholder);
    }

    #[test]
    fn plausible_word_shape() {
        assert!(is_plausible_word("run"));
        assert!(is_plausible_word("well-being"));
        assert!(is_plausible_word("o'clock"));
        assert!(!is_plausible_word(""));
        assert!(!is_plausible_word("-run"));
        assert!(!is_plausible_word("run2"));
        assert!(!is_plausible_word("ice cream"));
        assert!(!is_plausible_word(&"a".repeat(51)));
    }
}
