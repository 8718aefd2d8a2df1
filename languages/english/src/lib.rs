pub mod builtin;
pub mod chat;
pub mod extract;
pub mod free_dictionary;
pub mod morphology;
pub mod resolver;
pub mod tables;

#[cfg(test)]
mod test_support;

pub use builtin::BuiltinDictionary;
pub use chat::ChatCompletionProvider;
pub use extract::{ParsedDefinitions, parse_definitions};
pub use free_dictionary::FreeDictionaryProvider;
pub use morphology::EnglishMorphology;
pub use resolver::{DefinitionResolver, is_plausible_word};
