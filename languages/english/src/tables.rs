//! Static morphology tables.
//!
//! Built once on first use and never mutated, so concurrent lookups need no
//! synchronization.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Irregular verb forms as `(surface, base)` pairs.
///
/// Kept as an ordered slice so base-to-forms generation is deterministic. A
/// few regular verbs are listed too where suffix stripping would produce a
/// wrong stem (`scared` would otherwise end up as `scar`).
pub const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // be
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("being", "be"), ("been", "be"),
    // have
    ("has", "have"), ("had", "have"), ("having", "have"),
    // do
    ("does", "do"), ("did", "do"), ("doing", "do"), ("done", "do"),
    // go
    ("goes", "go"), ("went", "go"), ("gone", "go"), ("going", "go"),
    // scare
    ("scared", "scare"), ("scares", "scare"), ("scaring", "scare"),
    ("became", "become"), ("become", "become"), ("becomes", "become"), ("becoming", "become"),
    ("began", "begin"), ("begun", "begin"), ("begins", "begin"), ("beginning", "begin"),
    ("bit", "bite"), ("bitten", "bite"), ("bites", "bite"), ("biting", "bite"),
    ("blew", "blow"), ("blown", "blow"), ("blows", "blow"), ("blowing", "blow"),
    ("broke", "break"), ("broken", "break"), ("breaks", "break"), ("breaking", "break"),
    ("brought", "bring"), ("brings", "bring"), ("bringing", "bring"),
    ("built", "build"), ("builds", "build"), ("building", "build"),
    ("bought", "buy"), ("buys", "buy"), ("buying", "buy"),
    ("caught", "catch"), ("catches", "catch"), ("catching", "catch"),
    ("chose", "choose"), ("chosen", "choose"), ("chooses", "choose"), ("choosing", "choose"),
    ("came", "come"), ("comes", "come"), ("coming", "come"),
    ("cost", "cost"), ("costs", "cost"), ("costing", "cost"),
    ("cut", "cut"), ("cuts", "cut"), ("cutting", "cut"),
    ("drew", "draw"), ("drawn", "draw"), ("draws", "draw"), ("drawing", "draw"),
    ("drank", "drink"), ("drunk", "drink"), ("drinks", "drink"), ("drinking", "drink"),
    ("drove", "drive"), ("driven", "drive"), ("drives", "drive"), ("driving", "drive"),
    ("ate", "eat"), ("eaten", "eat"), ("eats", "eat"), ("eating", "eat"),
    ("fell", "fall"), ("fallen", "fall"), ("falls", "fall"), ("falling", "fall"),
    ("fed", "feed"), ("feeds", "feed"), ("feeding", "feed"),
    ("felt", "feel"), ("feels", "feel"), ("feeling", "feel"),
    ("fought", "fight"), ("fights", "fight"), ("fighting", "fight"),
    ("found", "find"), ("finds", "find"), ("finding", "find"),
    ("flew", "fly"), ("flown", "fly"), ("flies", "fly"), ("flying", "fly"),
    ("forbade", "forbid"), ("forbidden", "forbid"), ("forbids", "forbid"), ("forbidding", "forbid"),
    ("forgot", "forget"), ("forgotten", "forget"), ("forgets", "forget"), ("forgetting", "forget"),
    ("froze", "freeze"), ("frozen", "freeze"), ("freezes", "freeze"), ("freezing", "freeze"),
    ("got", "get"), ("gotten", "get"), ("gets", "get"), ("getting", "get"),
    ("gave", "give"), ("given", "give"), ("gives", "give"), ("giving", "give"),
    ("grew", "grow"), ("grown", "grow"), ("grows", "grow"), ("growing", "grow"),
    ("hung", "hang"), ("hangs", "hang"), ("hanging", "hang"),
    ("heard", "hear"), ("hears", "hear"), ("hearing", "hear"),
    ("hid", "hide"), ("hidden", "hide"), ("hides", "hide"), ("hiding", "hide"),
    ("hit", "hit"), ("hits", "hit"), ("hitting", "hit"),
    ("held", "hold"), ("holds", "hold"), ("holding", "hold"),
    ("hurt", "hurt"), ("hurts", "hurt"), ("hurting", "hurt"),
    ("kept", "keep"), ("keeps", "keep"), ("keeping", "keep"),
    ("knew", "know"), ("known", "know"), ("knows", "know"), ("knowing", "know"),
    ("laid", "lay"), ("lays", "lay"), ("laying", "lay"),
    ("led", "lead"), ("leads", "lead"), ("leading", "lead"),
    ("left", "leave"), ("leaves", "leave"), ("leaving", "leave"),
    ("lent", "lend"), ("lends", "lend"), ("lending", "lend"),
    ("lay", "lie"), ("lain", "lie"), ("lies", "lie"), ("lying", "lie"),
    ("lit", "light"), ("lights", "light"), ("lighting", "light"),
    ("lost", "lose"), ("loses", "lose"), ("losing", "lose"),
    ("made", "make"), ("makes", "make"), ("making", "make"),
    ("meant", "mean"), ("means", "mean"), ("meaning", "mean"),
    ("met", "meet"), ("meets", "meet"), ("meeting", "meet"),
    ("paid", "pay"), ("pays", "pay"), ("paying", "pay"),
    ("put", "put"), ("puts", "put"), ("putting", "put"),
    ("read", "read"), ("reads", "read"), ("reading", "read"),
    ("rode", "ride"), ("ridden", "ride"), ("rides", "ride"), ("riding", "ride"),
    ("rang", "ring"), ("rung", "ring"), ("rings", "ring"), ("ringing", "ring"),
    ("rose", "rise"), ("risen", "rise"), ("rises", "rise"), ("rising", "rise"),
    ("ran", "run"), ("runs", "run"), ("running", "run"),
    ("said", "say"), ("says", "say"), ("saying", "say"),
    ("saw", "see"), ("seen", "see"), ("sees", "see"), ("seeing", "see"),
    ("sold", "sell"), ("sells", "sell"), ("selling", "sell"),
    ("sent", "send"), ("sends", "send"), ("sending", "send"),
    ("set", "set"), ("sets", "set"), ("setting", "set"),
    ("shook", "shake"), ("shaken", "shake"), ("shakes", "shake"), ("shaking", "shake"),
    ("shot", "shoot"), ("shoots", "shoot"), ("shooting", "shoot"),
    ("showed", "show"), ("shown", "show"), ("shows", "show"), ("showing", "show"),
    ("shut", "shut"), ("shuts", "shut"), ("shutting", "shut"),
    ("sang", "sing"), ("sung", "sing"), ("sings", "sing"), ("singing", "sing"),
    ("sat", "sit"), ("sits", "sit"), ("sitting", "sit"),
    ("slept", "sleep"), ("sleeps", "sleep"), ("sleeping", "sleep"),
    ("slid", "slide"), ("slides", "slide"), ("sliding", "slide"),
    ("smelt", "smell"), ("smells", "smell"), ("smelling", "smell"),
    ("spoke", "speak"), ("spoken", "speak"), ("speaks", "speak"), ("speaking", "speak"),
    ("spent", "spend"), ("spends", "spend"), ("spending", "spend"),
    ("spilled", "spill"), ("spills", "spill"), ("spilling", "spill"),
    ("spat", "spit"), ("spits", "spit"), ("spitting", "spit"),
    ("split", "split"), ("splits", "split"), ("splitting", "split"),
    ("spread", "spread"), ("spreads", "spread"), ("spreading", "spread"),
    ("stood", "stand"), ("stands", "stand"), ("standing", "stand"),
    ("stole", "steal"), ("stolen", "steal"), ("steals", "steal"), ("stealing", "steal"),
    ("stuck", "stick"), ("sticks", "stick"), ("sticking", "stick"),
    ("stung", "sting"), ("stings", "sting"), ("stinging", "sting"),
    ("strode", "stride"), ("stridden", "stride"), ("strides", "stride"), ("striding", "stride"),
    ("struck", "strike"), ("stricken", "strike"), ("strikes", "strike"), ("striking", "strike"),
    ("swore", "swear"), ("sworn", "swear"), ("swears", "swear"), ("swearing", "swear"),
    ("swept", "sweep"), ("sweeps", "sweep"), ("sweeping", "sweep"),
    ("swam", "swim"), ("swum", "swim"), ("swims", "swim"), ("swimming", "swim"),
    ("swung", "swing"), ("swings", "swing"), ("swinging", "swing"),
    ("took", "take"), ("taken", "take"), ("takes", "take"), ("taking", "take"),
    ("taught", "teach"), ("teaches", "teach"), ("teaching", "teach"),
    ("tore", "tear"), ("torn", "tear"), ("tears", "tear"), ("tearing", "tear"),
    ("told", "tell"), ("tells", "tell"), ("telling", "tell"),
    ("thought", "think"), ("thinks", "think"), ("thinking", "think"),
    ("threw", "throw"), ("thrown", "throw"), ("throws", "throw"), ("throwing", "throw"),
    ("tied", "tie"), ("ties", "tie"), ("tying", "tie"),
    ("understood", "understand"), ("understands", "understand"), ("understanding", "understand"),
    ("woke", "wake"), ("woken", "wake"), ("wakes", "wake"), ("waking", "wake"),
    ("wore", "wear"), ("worn", "wear"), ("wears", "wear"), ("wearing", "wear"),
    ("won", "win"), ("wins", "win"), ("winning", "win"),
    ("wrote", "write"), ("written", "write"), ("writes", "write"), ("writing", "write"),
    ("wrapped", "wrap"), ("wraps", "wrap"), ("wrapping", "wrap"),
];

/// Irregular forms that are past participles rather than simple past
pub const PAST_PARTICIPLES: &[&str] = &[
    "been", "done", "gone", "seen", "begun", "bitten", "blown", "broken", "chosen",
    "drawn", "drunk", "driven", "eaten", "fallen", "flown", "forbidden", "forgotten",
    "frozen", "gotten", "given", "grown", "hidden", "known", "lain", "ridden", "rung",
    "risen", "shaken", "shown", "sung", "spoken", "stolen", "stridden", "stricken",
    "sworn", "swum", "taken", "torn", "thrown", "woken", "worn", "written",
];

/// Words that look like stem + suffix but are atomic lexical items
pub const DO_NOT_SPLIT: &[&str] = &[
    // -er
    "butter", "mother", "father", "brother", "sister", "water", "paper", "letter",
    "number", "winter", "summer", "doctor", "actor", "author", "corner", "danger",
    "finger", "hammer", "master", "tower", "flower", "power", "silver", "sugar",
    "tiger", "laser", "radar", "scar", "star", "bar", "car", "never", "other",
    "after", "under", "over", "either", "rather", "whether", "weather", "feather",
    "leather", "river", "cover", "offer", "order", "answer", "enter", "matter",
    "member", "monster", "proper", "wonder", "ginger", "copper", "pepper", "bitter",
    "better", "ladder", "dinner", "super", "together", "computer", "centre", "center",
    // -le
    "apple", "table", "able", "simple", "people", "gentle", "little", "middle", "noble",
    "subtle", "title", "bottle", "candle", "handle", "castle",
    // -ed
    "hundred", "sacred", "kindred", "naked", "wicked", "speed", "breed", "bred",
    // -ing
    "thing", "string", "spring", "morning", "evening", "ceiling", "during", "nothing",
    "something", "anything", "everything", "wedding", "pudding", "sibling", "darling",
    // -s / -es / -ies
    "news", "always", "perhaps", "series", "species", "movies", "cookies", "calories",
    "lens", "atlas", "canvas", "chaos", "thus", "plus",
    // -ly
    "family", "early", "supply", "apply", "reply", "belly", "jelly", "holly", "silly",
    "bully", "italy",
    // -al
    "animal", "metal", "total", "hospital", "capital", "festival", "interval", "normal",
    "final", "local", "royal", "pedal", "petal", "medal", "crystal", "mammal",
    // -est
    "forest", "honest", "interest", "contest", "harvest", "request", "protest",
    // -ous, -ive, -able
    "famous", "nervous", "jealous", "native", "olive", "vegetable",
    // -ment, -tion, -dom, -ance, -ence
    "comment", "segment", "element", "station", "question", "mention", "random",
    "seldom", "balance", "finance", "entrance", "science", "sentence", "silence",
];

pub static IRREGULAR_VERBS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_FORMS.iter().copied().collect());

pub static PAST_PARTICIPLE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PAST_PARTICIPLES.iter().copied().collect());

pub static DO_NOT_SPLIT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DO_NOT_SPLIT.iter().copied().collect());

/// Look up the base form of an irregular surface form
pub fn irregular_base(word: &str) -> Option<&'static str> {
    IRREGULAR_VERBS.get(word).copied()
}

/// Check the do-not-split allowlist
pub fn is_atomic(word: &str) -> bool {
    DO_NOT_SPLIT_SET.contains(word)
}
