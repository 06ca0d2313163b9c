//! Outbound links built from a quote.
use quote_common::Quote;
use quote_common::net::{AUTHOR_BASE, SEARCH_BASE, SHARE_BASE, SHARE_HASHTAG};
use urlencoding::encode;

/// Prefilled social post: `"<text>" — <author>` tagged `#quotes`.
pub fn share_url(quote: &Quote) -> String {
    format!(
        "{}?hashtags={}&text={}",
        SHARE_BASE,
        SHARE_HASHTAG,
        encode(&quote.to_string())
    )
}

/// Web search for the quote text.
pub fn search_url(quote: &Quote) -> String {
    format!("{}?q={}", SEARCH_BASE, encode(&quote.text))
}

/// Encyclopedia article for the author.
pub fn author_url(quote: &Quote) -> String {
    format!("{}{}", AUTHOR_BASE, encode(&quote.author))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zappa() -> Quote {
        Quote::new("So many books, so little time.", "Frank Zappa")
    }

    #[test]
    fn share_link_carries_quote_and_hashtag() {
        assert_eq!(
            share_url(&zappa()),
            "https://twitter.com/intent/tweet?hashtags=quotes&text=%22So%20many%20books%2C%20so%20little%20time.%22%20%E2%80%94%20Frank%20Zappa"
        );
    }

    #[test]
    fn search_link_encodes_text() {
        assert_eq!(
            search_url(&zappa()),
            "https://www.google.com/search?q=So%20many%20books%2C%20so%20little%20time."
        );
    }

    #[test]
    fn author_link_encodes_name() {
        assert_eq!(author_url(&zappa()), "https://en.wikipedia.org/wiki/Frank%20Zappa");
        let quote = Quote::new("x", "Marcus Tullius Cicero & co");
        assert_eq!(
            author_url(&quote),
            "https://en.wikipedia.org/wiki/Marcus%20Tullius%20Cicero%20%26%20co"
        );
    }
}
