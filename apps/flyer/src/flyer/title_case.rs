//! MLA-style title casing for event names.
//!
//! Principal words are capitalized. Articles, prepositions and coordinating
//! conjunctions stay lowercase unless they open the title, close it, or follow
//! a colon. Words that already carry internal capitals ("iPhone", "NASA") are
//! left untouched.

const MINOR_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // coordinating conjunctions
    "and", "but", "or", "nor", "for", "so", "yet",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "as", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "down",
    "during", "except", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "past", "per", "since", "through", "to", "toward", "under",
    "until", "up", "upon", "via", "with", "within", "without",
];

/// Title-cases `text` following MLA rules. Runs of whitespace collapse to one space.
pub fn mla_title_case(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut force_capital = true;

    for (i, word) in words.iter().enumerate() {
        let cased = if has_inner_capitals(word) {
            word.to_string()
        } else if !force_capital && i != last && is_minor(word) {
            word.to_lowercase()
        } else {
            case_compound(word)
        };
        force_capital = word.ends_with(':');
        out.push(cased);
    }
    out.join(" ")
}

/// "back-to-school" -> "Back-to-School": the first part is always capitalized.
fn case_compound(word: &str) -> String {
    word.split('-')
        .enumerate()
        .map(|(i, part)| {
            if i > 0 && is_minor(part) {
                part.to_lowercase()
            } else {
                capitalize_first(part)
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn is_minor(word: &str) -> bool {
    let core = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    MINOR_WORDS.contains(&core.as_str())
}

fn has_inner_capitals(word: &str) -> bool {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .skip(1)
        .any(char::is_uppercase)
}

fn capitalize_first(part: &str) -> String {
    let mut done = false;
    part.chars()
        .flat_map(|c| {
            if !done && c.is_alphabetic() {
                done = true;
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                vec![c]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_words_lowercase_inside_title() {
        assert_eq!(mla_title_case("a night at the museum"), "A Night at the Museum");
        assert_eq!(mla_title_case("the lord of the rings"), "The Lord of the Rings");
        assert_eq!(mla_title_case("gone With the wind"), "Gone with the Wind");
    }

    #[test]
    fn test_last_word_always_capitalized() {
        assert_eq!(
            mla_title_case("what are you looking for"),
            "What Are You Looking For"
        );
    }

    #[test]
    fn test_word_after_colon_capitalized() {
        assert_eq!(
            mla_title_case("jazz night: an evening of swing"),
            "Jazz Night: An Evening of Swing"
        );
    }

    #[test]
    fn test_hyphenated_compounds() {
        assert_eq!(mla_title_case("back-to-school bash"), "Back-to-School Bash");
    }

    #[test]
    fn test_inner_capitals_preserved() {
        assert_eq!(
            mla_title_case("NASA night at the iMax"),
            "NASA Night at the iMax"
        );
    }

    #[test]
    fn test_punctuation_around_minor_words() {
        assert_eq!(
            mla_title_case("\"salsa\" (and bachata) social"),
            "\"Salsa\" (and Bachata) Social"
        );
    }

    #[test]
    fn test_whitespace_collapses_and_empty_stays_empty() {
        assert_eq!(mla_title_case("  spring   fair "), "Spring Fair");
        assert_eq!(mla_title_case(""), "");
    }
}
