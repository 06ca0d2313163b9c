//! Ambient theme side channel.
//!
//! Besides coloring the quote itself, every fetch recolors the whole screen's text. That
//! global effect is an explicit output of the quote source: a `ThemeSink` receives each
//! newly chosen color. Sources built without a sink have no global effect.
use quote_common::AccentColor;

/// Receiver of the ambient text color.
pub trait ThemeSink: Send {
    /// Applies `color` as the default text color of the whole screen.
    fn apply(&mut self, color: AccentColor);
}
