//! Rule-based part-of-speech assignment.
//!
//! Tags are decided per token, without context, by a fixed cascade:
//! closed-class lookup, then digit and capitalization shape, then word
//! suffixes. Anything left over is a noun, which biases extraction toward
//! noun phrases and is the right failure mode for picking out referring
//! expressions.

use crate::lexicon;
use crate::token::PosTag;

// Nouns that happen to end in "-ly".
const NOT_ADVERBS: &[&str] = &[
    "family", "supply", "reply", "assembly", "monopoly", "ally",
    "butterfly", "jelly", "belly", "rally", "tally", "lily",
];

// Words a verb suffix would misclassify.
const NOT_VERBS: &[&str] = &[
    "thing", "spring", "string", "morning", "evening", "building",
    "ceiling", "naked", "sacred", "wicked", "rugged", "ragged", "promise",
    "otherwise", "sunrise", "premise",
];

// Words an adjective suffix would misclassify.
const NOT_ADJECTIVES: &[&str] = &[
    "variable", "vegetable", "executive", "objective", "alternative",
    "representative", "initiative", "perspective", "incentive",
    "detective", "olive", "motive",
];

/// Assigns a tag to one segment. `lower` must be the lowercased form of
/// `text`.
pub(crate) fn tag(text: &str, lower: &str) -> PosTag {
    if !text.chars().any(char::is_alphanumeric) {
        return if text.chars().all(is_symbol_char) {
            PosTag::Sym
        } else {
            PosTag::Punct
        };
    }
    if let Some(tag) = lexicon::closed_class_tag(lower) {
        return tag;
    }
    if text.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return PosTag::Num;
    }
    // Capitalization outranks suffixes so that "United States" stays a
    // proper-noun run instead of splitting at "United".
    if text.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::Propn;
    }
    shape_tag(lower)
}

fn shape_tag(lower: &str) -> PosTag {
    let n = lower.len();
    if n > 3 && lower.ends_with("ly") && !NOT_ADVERBS.contains(&lower) {
        return PosTag::Adv;
    }
    if n > 4 && !NOT_VERBS.contains(&lower) {
        let verbish = ["ize", "ise", "ify", "ing"].iter().any(|s| lower.ends_with(s));
        if verbish || lower.ends_with("ed") {
            return PosTag::Verb;
        }
    }
    if !NOT_ADJECTIVES.contains(&lower) {
        let adjective = (n > 4
            && ["ous", "ful", "ive", "less"].iter().any(|s| lower.ends_with(s)))
            || (n > 5 && (lower.ends_with("able") || lower.ends_with("ible")));
        if adjective {
            return PosTag::Adj;
        }
    }
    PosTag::Noun
}

fn is_symbol_char(c: char) -> bool {
    matches!(
        c,
        '$' | '%' | '+' | '=' | '<' | '>' | '^' | '|' | '~' | '°' | '€' | '£' | '¥' | '§'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(word: &str) -> PosTag {
        tag(word, &word.to_lowercase())
    }

    #[test]
    fn closed_class_wins() {
        assert_eq!(tag_of("The"), PosTag::Det);
        assert_eq!(tag_of("in"), PosTag::Adp);
        assert_eq!(tag_of("was"), PosTag::Aux);
        assert_eq!(tag_of("and"), PosTag::Cconj);
        assert_eq!(tag_of("not"), PosTag::Part);
    }

    #[test]
    fn digits_are_numerals() {
        assert_eq!(tag_of("2020"), PosTag::Num);
        assert_eq!(tag_of("3.5"), PosTag::Num);
        assert_eq!(tag_of("2,020"), PosTag::Num);
        assert_eq!(tag_of("seven"), PosTag::Num);
    }

    #[test]
    fn capitalized_words_are_proper_nouns() {
        assert_eq!(tag_of("Paris"), PosTag::Propn);
        assert_eq!(tag_of("Humpty"), PosTag::Propn);
        assert_eq!(tag_of("GDP"), PosTag::Propn);
    }

    #[test]
    fn suffix_rules() {
        assert_eq!(tag_of("quickly"), PosTag::Adv);
        assert_eq!(tag_of("increased"), PosTag::Verb);
        assert_eq!(tag_of("running"), PosTag::Verb);
        assert_eq!(tag_of("notable"), PosTag::Adj);
        assert_eq!(tag_of("useful"), PosTag::Adj);
    }

    #[test]
    fn irregular_verbs_are_listed() {
        assert_eq!(tag_of("grew"), PosTag::Verb);
        assert_eq!(tag_of("rose"), PosTag::Verb);
        assert_eq!(tag_of("fell"), PosTag::Verb);
    }

    #[test]
    fn unknown_words_default_to_noun() {
        assert_eq!(tag_of("car"), PosTag::Noun);
        assert_eq!(tag_of("revenue"), PosTag::Noun);
        // Short or unsuffixed modifiers land here too; extraction relies
        // on "red car" forming a single noun run.
        assert_eq!(tag_of("red"), PosTag::Noun);
    }

    #[test]
    fn suffix_exceptions_hold() {
        assert_eq!(tag_of("family"), PosTag::Noun);
        assert_eq!(tag_of("morning"), PosTag::Noun);
        assert_eq!(tag_of("variable"), PosTag::Noun);
        assert_eq!(tag_of("table"), PosTag::Noun);
    }

    #[test]
    fn punctuation_and_symbols() {
        assert_eq!(tag_of(","), PosTag::Punct);
        assert_eq!(tag_of("..."), PosTag::Punct);
        assert_eq!(tag_of("%"), PosTag::Sym);
        assert_eq!(tag_of("$"), PosTag::Sym);
    }
}
