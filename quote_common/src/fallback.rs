//! Embedded fallback corpus.
//!
//! Used whenever the remote provider cannot deliver a quote. The first entry is also the
//! deterministic quote shown before the first fetch completes.
use crate::quote::Quote;

const ENTRIES: [(&str, &str); 15] = [
    ("Be yourself; everyone else is already taken.", "Oscar Wilde"),
    (
        "Two things are infinite: the universe and human stupidity; and I'm not sure about the universe.",
        "Albert Einstein",
    ),
    ("So many books, so little time.", "Frank Zappa"),
    ("A room without books is like a body without a soul.", "Marcus Tullius Cicero"),
    ("Be the change that you wish to see in the world.", "Mahatma Gandhi"),
    (
        "In three words I can sum up everything I've learned about life: it goes on.",
        "Robert Frost",
    ),
    ("If you tell the truth, you don't have to remember anything.", "Mark Twain"),
    (
        "To live is the rarest thing in the world. Most people exist, that is all.",
        "Oscar Wilde",
    ),
    ("Without music, life would be a mistake.", "Friedrich Nietzsche"),
    ("We accept the love we think we deserve.", "Stephen Chbosky"),
    (
        "Imperfection is beauty, madness is genius and it's better to be absolutely ridiculous than absolutely boring.",
        "Marilyn Monroe",
    ),
    ("Life is what happens to us while we are making other plans.", "Allen Saunders"),
    ("Do what you can, with what you have, where you are.", "Theodore Roosevelt"),
    (
        "Success is not final, failure is not fatal: It is the courage to continue that counts.",
        "Winston Churchill",
    ),
    ("Happiness depends upon ourselves.", "Aristotle"),
];

/// Number of quotes in the corpus.
pub const FALLBACK_LEN: usize = ENTRIES.len();

/// Returns the fallback quote at `index`, or `None` past the end of the corpus.
pub fn fallback_quote(index: usize) -> Option<Quote> {
    ENTRIES
        .get(index)
        .map(|(text, author)| Quote::new(*text, *author))
}

/// The quote shown before anything has been fetched.
pub fn first_fallback() -> Quote {
    let (text, author) = ENTRIES[0];
    Quote::new(text, author)
}

/// All fallback quotes in corpus order.
pub fn fallback_quotes() -> Vec<Quote> {
    ENTRIES
        .iter()
        .map(|(text, author)| Quote::new(*text, *author))
        .collect()
}

/// Returns `true` if `quote` belongs to the corpus.
pub fn is_fallback(quote: &Quote) -> bool {
    ENTRIES
        .iter()
        .any(|(text, author)| quote.text == *text && quote.author == *author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_has_fifteen_distinct_quotes() {
        let quotes = fallback_quotes();
        assert_eq!(quotes.len(), 15);
        for (i, a) in quotes.iter().enumerate() {
            assert!(quotes.iter().skip(i + 1).all(|b| !a.same_as(b)));
        }
    }

    #[test]
    fn first_entry_is_the_seed() {
        assert_eq!(first_fallback().author, "Oscar Wilde");
        assert_eq!(fallback_quote(0), Some(first_fallback()));
        assert_eq!(fallback_quote(FALLBACK_LEN), None);
    }

    #[test]
    fn membership_check() {
        assert!(is_fallback(&Quote::new("Happiness depends upon ourselves.", "Aristotle")));
        assert!(!is_fallback(&Quote::new("Hello", "Alice")));
    }
}
