//! Remote endpoints used by the widget.

/// Random-quote endpoint of the quote provider.
pub const QUOTE_ENDPOINT: &str = "https://quotes15.p.rapidapi.com/quotes/random/?language_code=en";
/// Value of the `x-rapidapi-host` request header.
pub const QUOTE_API_HOST: &str = "quotes15.p.rapidapi.com";
/// Header carrying the provider host.
pub const HOST_HEADER: &str = "x-rapidapi-host";
/// Header carrying the caller's API key.
pub const KEY_HEADER: &str = "x-rapidapi-key";

/// Prefilled social-share intent.
pub const SHARE_BASE: &str = "https://twitter.com/intent/tweet";
/// Hashtag attached to every shared quote.
pub const SHARE_HASHTAG: &str = "quotes";
/// Web search by quote text.
pub const SEARCH_BASE: &str = "https://www.google.com/search";
/// Encyclopedia lookup by author name.
pub const AUTHOR_BASE: &str = "https://en.wikipedia.org/wiki/";
