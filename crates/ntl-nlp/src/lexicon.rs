//! Word lists backing the rule-based tagger and lemmatizer.
//!
//! Closed word classes (determiners, adpositions, auxiliaries and so on)
//! are small and stable, so they are enumerated here. Everything not
//! listed falls through to the suffix rules in the tagger.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::token::PosTag;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every",
    "either", "neither", "some", "any", "no", "all", "both", "few", "many",
    "most", "much", "several", "other", "another", "such", "what", "which",
    "whose",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself",
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
    "its", "itself", "we", "us", "our", "ours", "ourselves", "they", "them",
    "their", "theirs", "themselves", "who", "whom", "someone", "anyone",
    "everyone", "something", "anything", "everything", "nothing", "nobody",
    "it's", "that's", "there's", "i'm", "you're", "we're", "they're",
];

const ADPOSITIONS: &[&str] = &[
    "aboard", "about", "above", "across", "after", "against", "along",
    "amid", "among", "around", "at", "before", "behind", "below", "beneath",
    "beside", "besides", "between", "beyond", "by", "despite", "down",
    "during", "except", "for", "from", "in", "inside", "into", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "past", "per", "since",
    "through", "throughout", "to", "toward", "towards", "under",
    "underneath", "until", "unto", "up", "upon", "via", "with", "within",
    "without",
];

const COORDINATORS: &[&str] = &["and", "but", "nor", "or", "plus", "versus", "so"];

const SUBORDINATORS: &[&str] = &[
    "although", "as", "because", "if", "lest", "once", "than", "though",
    "unless", "whereas", "whether", "while", "when", "where",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does",
    "did", "has", "have", "had", "will", "would", "shall", "should", "may",
    "might", "must", "can", "could", "ought", "don't", "doesn't", "didn't",
    "isn't", "aren't", "wasn't", "weren't", "won't", "wouldn't", "can't",
    "couldn't", "shouldn't", "i've", "we've", "you've", "they've", "i'll",
    "you'll", "he'll", "she'll", "we'll", "they'll",
];

const PARTICLES: &[&str] = &["not"];

const INTERJECTIONS: &[&str] = &["oh", "hey", "wow", "ouch", "hello", "hi", "yeah"];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
    "sixteen", "seventeen", "eighteen", "nineteen", "twenty", "thirty",
    "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred",
    "thousand", "million", "billion", "trillion",
];

// Ordinals and sequencers are adjectives, which keeps "the second quarter"
// from fusing into a single noun run.
const ORDINAL_ADJECTIVES: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh",
    "eighth", "ninth", "tenth", "last", "next", "previous", "same",
];

// High-frequency verbs whose inflections carry no telltale suffix. Without
// this list "grew" or "rose" would fall through to the noun default.
const VERB_FORMS: &[&str] = &[
    "go", "goes", "went", "gone", "say", "says", "said", "make", "makes",
    "made", "take", "takes", "took", "taken", "get", "gets", "got",
    "gotten", "give", "gives", "gave", "given", "come", "comes", "came",
    "see", "sees", "saw", "seen", "know", "knows", "knew", "known", "rise",
    "rose", "risen", "fall", "fell", "fallen", "grow", "grows", "grew",
    "grown", "buy", "bought", "sell", "sells", "sold", "hold", "holds",
    "held", "lead", "leads", "led", "leave", "left", "lose", "lost", "pay",
    "pays", "paid", "win", "wins", "won", "write", "writes", "wrote",
    "written", "drive", "drives", "drove", "driven", "show", "shows",
    "showed", "shown", "keep", "kept", "begin", "began", "begun", "become",
    "became", "bring", "brought", "stand", "stood", "meet", "met", "find",
    "found", "run", "ran", "sit", "sat", "put",
];

static CLOSED_CLASS: LazyLock<HashMap<&'static str, PosTag>> = LazyLock::new(|| {
    let classes: &[(&[&str], PosTag)] = &[
        (DETERMINERS, PosTag::Det),
        (PRONOUNS, PosTag::Pron),
        (ADPOSITIONS, PosTag::Adp),
        (COORDINATORS, PosTag::Cconj),
        (SUBORDINATORS, PosTag::Sconj),
        (AUXILIARIES, PosTag::Aux),
        (PARTICLES, PosTag::Part),
        (INTERJECTIONS, PosTag::Intj),
        (NUMBER_WORDS, PosTag::Num),
        (ORDINAL_ADJECTIVES, PosTag::Adj),
        (VERB_FORMS, PosTag::Verb),
    ];
    let mut map = HashMap::new();
    for &(words, tag) in classes {
        for &word in words {
            map.insert(word, tag);
        }
    }
    map
});

/// Irregular inflections that the suffix rules would mangle, mapped to
/// their dictionary form. Verbs with a silent final "e" are listed for
/// their "-ed" and "-ing" forms because stripping the suffix alone loses
/// the "e".
static IRREGULAR_LEMMAS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let pairs: &[(&str, &str)] = &[
        // be / do / have
        ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"),
        ("were", "be"), ("been", "be"), ("being", "be"),
        ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
        ("has", "have"), ("had", "have"), ("having", "have"),
        // strong verbs
        ("went", "go"), ("gone", "go"), ("goes", "go"), ("going", "go"),
        ("said", "say"), ("saying", "say"),
        ("made", "make"), ("making", "make"),
        ("took", "take"), ("taken", "take"), ("taking", "take"),
        ("got", "get"), ("gotten", "get"), ("getting", "get"),
        ("gave", "give"), ("given", "give"), ("giving", "give"),
        ("came", "come"), ("coming", "come"),
        ("saw", "see"), ("seen", "see"), ("seeing", "see"),
        ("knew", "know"), ("known", "know"), ("knowing", "know"),
        ("rose", "rise"), ("risen", "rise"), ("rising", "rise"),
        ("fell", "fall"), ("fallen", "fall"),
        ("grew", "grow"), ("grown", "grow"),
        ("bought", "buy"), ("sold", "sell"), ("held", "hold"),
        ("led", "lead"), ("left", "leave"), ("leaving", "leave"),
        ("lost", "lose"), ("losing", "lose"), ("paid", "pay"),
        ("won", "win"), ("wrote", "write"), ("written", "write"),
        ("writing", "write"), ("drove", "drive"), ("driven", "drive"),
        ("driving", "drive"), ("shown", "show"),
        ("kept", "keep"), ("began", "begin"), ("begun", "begin"),
        ("became", "become"), ("brought", "bring"), ("stood", "stand"),
        ("met", "meet"), ("found", "find"), ("ran", "run"), ("sat", "sit"),
        // silent-e verbs
        ("used", "use"), ("using", "use"),
        ("increased", "increase"), ("increasing", "increase"),
        ("decreased", "decrease"), ("decreasing", "decrease"),
        ("declined", "decline"), ("declining", "decline"),
        ("improved", "improve"), ("improving", "improve"),
        ("changed", "change"), ("changing", "change"),
        ("closed", "close"), ("closing", "close"),
        ("moved", "move"), ("moving", "move"),
        ("managed", "manage"), ("managing", "manage"),
        ("priced", "price"), ("pricing", "price"),
        ("shared", "share"), ("sharing", "share"),
        ("compared", "compare"), ("comparing", "compare"),
        ("created", "create"), ("creating", "create"),
        ("provided", "provide"), ("providing", "provide"),
        ("reduced", "reduce"), ("reducing", "reduce"),
        ("doubled", "double"), ("doubling", "double"),
        ("tripled", "triple"), ("tripling", "triple"),
        ("noted", "note"), ("rated", "rate"),
        ("fed", "feed"), ("agreed", "agree"), ("freed", "free"),
        // irregular noun plurals
        ("children", "child"), ("men", "man"), ("women", "woman"),
        ("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"),
        ("geese", "goose"), ("oxen", "ox"), ("indices", "index"),
        ("axes", "axis"), ("criteria", "criterion"),
        ("leaves", "leaf"), ("lives", "life"), ("knives", "knife"),
        ("wives", "wife"), ("halves", "half"), ("shelves", "shelf"),
        ("wolves", "wolf"), ("thieves", "thief"), ("loaves", "loaf"),
        ("shoes", "shoe"), ("buses", "bus"), ("viruses", "virus"),
        ("statuses", "status"), ("bonuses", "bonus"), ("campuses", "campus"),
        // invariant forms the suffix rules must not touch
        ("series", "series"), ("species", "species"), ("news", "news"),
        ("data", "data"), ("media", "media"), ("always", "always"),
        ("need", "need"), ("speed", "speed"), ("seed", "seed"),
        ("deed", "deed"), ("creed", "creed"), ("indeed", "indeed"),
    ];
    pairs.iter().copied().collect()
});

/// Fixed tag for a closed-class word, if the word is one. Expects the
/// lowercased form.
pub(crate) fn closed_class_tag(word: &str) -> Option<PosTag> {
    CLOSED_CLASS.get(word).copied()
}

/// Irregular dictionary form for a word, if it has one. Expects the
/// lowercased form.
pub(crate) fn irregular_lemma(word: &str) -> Option<&'static str> {
    IRREGULAR_LEMMAS.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_class_lookups() {
        assert_eq!(closed_class_tag("the"), Some(PosTag::Det));
        assert_eq!(closed_class_tag("in"), Some(PosTag::Adp));
        assert_eq!(closed_class_tag("was"), Some(PosTag::Aux));
        assert_eq!(closed_class_tag("seven"), Some(PosTag::Num));
        assert_eq!(closed_class_tag("car"), None);
    }

    #[test]
    fn irregular_lookups() {
        assert_eq!(irregular_lemma("went"), Some("go"));
        assert_eq!(irregular_lemma("children"), Some("child"));
        assert_eq!(irregular_lemma("series"), Some("series"));
        assert_eq!(irregular_lemma("cars"), None);
    }
}
