//! Heuristic reduction of words to their dictionary form.
//!
//! Lemmas are what matching runs on: a span mentioning "cars" should find
//! a column labeled "car". The rules here are deliberately shallow.
//! Possessives come off first, then the irregular table, then ordinary
//! suffix stripping. Lemmas are always lowercase.

use crate::lexicon;

/// Dictionary form of a single word.
pub(crate) fn lemma(word: &str) -> String {
    let mut lower = word.to_lowercase();
    if let Some(stripped) = lower.strip_suffix("'s") {
        lower.truncate(stripped.len());
    } else if lower.len() > 1 && lower.ends_with('\'') {
        lower.pop();
    }

    if let Some(irregular) = lexicon::irregular_lemma(&lower) {
        return irregular.to_string();
    }
    // Numbers pass through untouched, including forms like "2020s".
    if lower.chars().any(|c| c.is_ascii_digit()) {
        return lower;
    }
    strip_inflection(&lower)
}

// All suffixes below are ASCII, so the byte arithmetic stays on char
// boundaries whenever ends_with matched.
fn strip_inflection(lower: &str) -> String {
    let n = lower.len();
    if n > 4 && lower.ends_with("ies") {
        return format!("{}y", &lower[..n - 3]);
    }
    for es_suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if n > es_suffix.len() + 1 && lower.ends_with(es_suffix) {
            return lower[..n - 2].to_string();
        }
    }
    if n > 4 && lower.ends_with("oes") {
        return lower[..n - 2].to_string();
    }
    if n > 4 && lower.ends_with("ied") {
        return format!("{}y", &lower[..n - 3]);
    }
    if n > 5 && lower.ends_with("ing") {
        return undouble(&lower[..n - 3]);
    }
    if n > 4 && lower.ends_with("ed") {
        return undouble(&lower[..n - 2]);
    }
    if n > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return lower[..n - 1].to_string();
    }
    lower.to_string()
}

// "running" strips to "runn"; collapse the doubled consonant that the
// inflection introduced. Letters that legitimately double at the end of a
// stem (ll, ss, zz, ff, ee) are left alone.
fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    if bytes.len() >= 3 {
        let last = bytes[bytes.len() - 1];
        if last == bytes[bytes.len() - 2]
            && last.is_ascii_alphabetic()
            && !matches!(last, b'a' | b'e' | b'i' | b'o' | b'u' | b'l' | b's' | b'z' | b'f')
        {
            return stem[..stem.len() - 1].to_string();
        }
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_nouns() {
        assert_eq!(lemma("cars"), "car");
        assert_eq!(lemma("cities"), "city");
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("dishes"), "dish");
        assert_eq!(lemma("heroes"), "hero");
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("buses"), "bus");
    }

    #[test]
    fn verb_inflections() {
        assert_eq!(lemma("running"), "run");
        assert_eq!(lemma("selling"), "sell");
        assert_eq!(lemma("walked"), "walk");
        assert_eq!(lemma("planned"), "plan");
        assert_eq!(lemma("tried"), "try");
        assert_eq!(lemma("increased"), "increase");
        assert_eq!(lemma("grew"), "grow");
        assert_eq!(lemma("was"), "be");
    }

    #[test]
    fn possessives_come_off() {
        assert_eq!(lemma("company's"), "company");
        assert_eq!(lemma("companies'"), "company");
    }

    #[test]
    fn lowercasing_is_unconditional() {
        assert_eq!(lemma("The"), "the");
        assert_eq!(lemma("Revenue"), "revenue");
    }

    #[test]
    fn numbers_and_invariants_pass_through() {
        assert_eq!(lemma("2020"), "2020");
        assert_eq!(lemma("3.5"), "3.5");
        assert_eq!(lemma("series"), "series");
        assert_eq!(lemma("news"), "news");
        assert_eq!(lemma("bus"), "bus");
        assert_eq!(lemma("analysis"), "analysis");
    }
}
