use std::collections::HashMap;
use std::sync::LazyLock;

use wordlog_core::dictionary::{Entry, EntrySource, PartOfSpeech, Sense};

/// One curated entry: word, pronunciation, part of speech, definition,
/// example, example translation
type BuiltinRecord = (
    &'static str,
    &'static str,
    PartOfSpeech,
    &'static str,
    &'static str,
    &'static str,
);

const BUILTIN_RECORDS: &[BuiltinRecord] = &[
    ("extension", "/ɪkˈstenʃn/", PartOfSpeech::Noun,
        "an addition that extends something; a browser add-on; a telephone line",
        "I installed a new browser extension.", "我安装了一个新的浏览器扩展。"),
    ("proceed", "/prəˈsiːd/", PartOfSpeech::Verb,
        "to continue; to go forward",
        "Please proceed with your presentation.", "请继续你的演示。"),
    ("beaming", "/ˈbiːmɪŋ/", PartOfSpeech::Adjective,
        "smiling broadly; radiant",
        "She was beaming with happiness.", "她开心地微笑着。"),
    ("method", "/ˈmeθəd/", PartOfSpeech::Noun,
        "a way of doing something",
        "This is a good method to learn English.", "这是一个学习英语的好方法。"),
    ("philosophising", "/fɪˈlɒsəfaɪzɪŋ/", PartOfSpeech::Verb,
        "thinking or talking about deep questions in a philosophical way",
        "He is philosophising about the nature of reality.", "他正在思考现实的本质。"),
    ("sprouting", "/ˈspraʊtɪŋ/", PartOfSpeech::Verb,
        "starting to grow; putting out shoots",
        "The seeds are sprouting early this year.", "种子今年发芽很早。"),
    ("crunched", "/krʌntʃt/", PartOfSpeech::Verb,
        "crushed or chewed noisily; processed (numbers) quickly",
        "She crunched the numbers in her head.", "她在脑海中盘算着这些数字。"),
    ("bloating", "/ˈbləʊtɪŋ/", PartOfSpeech::Verb,
        "swelling up; becoming inflated",
        "The bread dough kept bloating in the heat.", "面团在高温下不断膨胀。"),
    ("tempering", "/ˈtempərɪŋ/", PartOfSpeech::Noun,
        "the hardening of metal by heating and cooling; moderating something",
        "The tempering of steel requires skill.", "钢材的回火处理需要技巧。"),
    ("twisting", "/ˈtwɪstɪŋ/", PartOfSpeech::Verb,
        "turning or winding something around",
        "She was twisting her hair nervously.", "她紧张地卷着头发。"),
    ("log", "/lɔːɡ/", PartOfSpeech::Noun,
        "a record of events; a piece of a tree trunk",
        "Check the server logs.", "检查服务器日志。"),
    ("get", "/ɡet/", PartOfSpeech::Verb,
        "to obtain or receive; to become",
        "I get a new book.", "我得到一本新书。"),
    ("have", "/hæv/", PartOfSpeech::Verb,
        "to own or possess; to experience",
        "I have a dog.", "我有一只狗。"),
    ("hello", "/həˈləʊ/", PartOfSpeech::Interjection,
        "a greeting",
        "Hello, how are you?", "你好，你好吗？"),
    ("world", "/wɜːld/", PartOfSpeech::Noun,
        "the earth and all the people on it",
        "She wants to travel the world.", "她想环游世界。"),
    ("test", "/test/", PartOfSpeech::Noun,
        "an examination or trial",
        "We have a test tomorrow.", "我们明天有考试。"),
    ("apple", "/ˈæpl/", PartOfSpeech::Noun,
        "a round fruit with red, green or yellow skin",
        "An apple a day keeps the doctor away.", "一天一苹果，医生远离我。"),
    ("book", "/bʊk/", PartOfSpeech::Noun,
        "a set of printed pages bound together",
        "I am reading a good book.", "我在读一本好书。"),
    ("love", "/lʌv/", PartOfSpeech::Verb,
        "to feel deep affection for",
        "I love my family.", "我爱我的家人。"),
    ("happy", "/ˈhæpi/", PartOfSpeech::Adjective,
        "feeling or showing pleasure",
        "She looks happy today.", "她今天看起来很开心。"),
    ("sad", "/sæd/", PartOfSpeech::Adjective,
        "feeling unhappy",
        "The movie made me sad.", "这部电影让我很难过。"),
    ("good", "/ɡʊd/", PartOfSpeech::Adjective,
        "of high quality; pleasant",
        "This is a good idea.", "这是个好主意。"),
    ("bad", "/bæd/", PartOfSpeech::Adjective,
        "of poor quality; unpleasant",
        "The weather is bad today.", "今天天气很糟糕。"),
    ("big", "/bɪɡ/", PartOfSpeech::Adjective,
        "large in size or amount",
        "They live in a big house.", "他们住在一栋大房子里。"),
    ("small", "/smɔːl/", PartOfSpeech::Adjective,
        "little in size or amount",
        "I have a small car.", "我有一辆小车。"),
    ("run", "/rʌn/", PartOfSpeech::Verb,
        "to move quickly on foot",
        "I run every morning.", "我每天早上跑步。"),
    ("walk", "/wɔːk/", PartOfSpeech::Verb,
        "to move on foot at a normal pace",
        "Let's walk to the park.", "我们走路去公园吧。"),
    ("eat", "/iːt/", PartOfSpeech::Verb,
        "to put food in the mouth and swallow it",
        "We eat dinner at seven.", "我们七点吃晚饭。"),
    ("drink", "/drɪŋk/", PartOfSpeech::Verb,
        "to take liquid into the mouth and swallow it",
        "Drink more water.", "多喝水。"),
    ("see", "/siː/", PartOfSpeech::Verb,
        "to notice with the eyes; to understand",
        "I can see the mountains.", "我能看见群山。"),
    ("think", "/θɪŋk/", PartOfSpeech::Verb,
        "to use the mind; to have an opinion",
        "I think it will rain.", "我觉得要下雨了。"),
    ("make", "/meɪk/", PartOfSpeech::Verb,
        "to create or produce",
        "She can make a cake.", "她会做蛋糕。"),
    ("go", "/ɡəʊ/", PartOfSpeech::Verb,
        "to move from one place to another",
        "Let's go home.", "我们回家吧。"),
    ("come", "/kʌm/", PartOfSpeech::Verb,
        "to move toward the speaker; to arrive",
        "Please come here.", "请过来。"),
    ("time", "/taɪm/", PartOfSpeech::Noun,
        "the measured passing of moments; an occasion",
        "What time is it?", "现在几点？"),
    ("day", "/deɪ/", PartOfSpeech::Noun,
        "a period of 24 hours; daytime",
        "Have a nice day.", "祝你有美好的一天。"),
    ("night", "/naɪt/", PartOfSpeech::Noun,
        "the time of darkness between evening and morning",
        "Good night.", "晚安。"),
    ("morning", "/ˈmɔːnɪŋ/", PartOfSpeech::Noun,
        "the early part of the day",
        "Good morning!", "早上好！"),
    ("learn", "/lɜːn/", PartOfSpeech::Verb,
        "to gain knowledge or skill",
        "I want to learn English.", "我想学英语。"),
    ("study", "/ˈstʌdi/", PartOfSpeech::Verb,
        "to spend time learning about a subject",
        "She studies at the library.", "她在图书馆学习。"),
    ("know", "/nəʊ/", PartOfSpeech::Verb,
        "to have information in the mind; to be familiar with",
        "I know the answer.", "我知道答案。"),
    ("understand", "/ˌʌndəˈstænd/", PartOfSpeech::Verb,
        "to grasp the meaning of",
        "Do you understand the question?", "你理解这个问题吗？"),
    ("speak", "/spiːk/", PartOfSpeech::Verb,
        "to say words; to talk",
        "Can you speak Chinese?", "你会说中文吗？"),
    ("write", "/raɪt/", PartOfSpeech::Verb,
        "to form letters or words on a surface",
        "Please write your name here.", "请在这里写下你的名字。"),
    ("read", "/riːd/", PartOfSpeech::Verb,
        "to look at and understand written words",
        "I like to read before bed.", "我喜欢睡前阅读。"),
    ("work", "/wɜːk/", PartOfSpeech::Verb,
        "to do a job; to function",
        "I work from home.", "我在家工作。"),
    ("bloviating", "/ˈbləʊviˌeɪtɪŋ/", PartOfSpeech::Verb,
        "talking at length in a pompous or boastful way",
        "He kept bloviating about his achievements.", "他一直夸耀自己的成就。"),
];

static SHARED: LazyLock<BuiltinDictionary> = LazyLock::new(BuiltinDictionary::with_defaults);

struct BuiltinEntry {
    pronunciation: &'static str,
    sense: Sense,
}

/// Curated, hand-written entries consulted before any remote provider
pub struct BuiltinDictionary {
    entries: HashMap<&'static str, BuiltinEntry>,
}

impl BuiltinDictionary {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create with the embedded curated entries
    pub fn with_defaults() -> Self {
        let entries = BUILTIN_RECORDS
            .iter()
            .map(|&(word, pronunciation, pos, definition, example, translation)| {
                let sense = Sense::new(pos, definition)
                    .with_example(example)
                    .with_example_translation(translation);
                (word, BuiltinEntry { pronunciation, sense })
            })
            .collect();

        Self { entries }
    }

    /// Process-wide read-only instance of the default table
    pub fn shared() -> &'static BuiltinDictionary {
        &SHARED
    }

    /// Look up a normalized word
    pub fn lookup(&self, word: &str) -> Option<Entry> {
        self.entries.get(word).map(|builtin| {
            let mut entry = Entry::new(word, vec![builtin.sense.clone()], EntrySource::Builtin);
            entry.pronunciation = Some(builtin.pronunciation.to_string());
            entry
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BuiltinDictionary {
    fn default() -> Self {
        Self::new()
    }
}
