use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"<[^>]+>").ok());

/// Count words in a piece of copy, ignoring any inline markup tags.
#[must_use]
pub fn count_words(text: &str) -> usize {
    let stripped = TAG
        .as_ref()
        .map_or(std::borrow::Cow::Borrowed(text), |re| re.replace_all(text, ""));
    stripped.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::count_words;

    #[test]
    fn counts_plain_words() {
        assert_eq!(count_words("Chain calm whistles first"), 4);
        assert_eq!(count_words("  spaced \n\t out  "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn ignores_tags_but_keeps_their_text() {
        assert_eq!(count_words("Tap <strong>twice</strong> to open"), 4);
        assert_eq!(count_words("<br/>"), 0);
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(count_words("50/35/15 split — fuel, gadgets."), 5);
    }
}
