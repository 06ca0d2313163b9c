//! Screen rendering and the terminal theme sink.
//!
//! The quote box is drawn in the accent color. Text outside it uses the ambient color,
//! which `TerminalTheme` sets as the terminal's default foreground whenever the quote
//! source picks a new color. Quote content comes from the network or from an editable
//! file, so control characters are stripped before it reaches the terminal.
use std::borrow::Cow;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use quote_common::{AccentColor, Quote};
use quote_source::ThemeSink;

pub const EMPTY_FAVORITES: &str = "No favorite quotes yet.";

/// Terminal color of a palette entry.
pub fn term_color(color: AccentColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}

/// Drops control characters so displayed text cannot carry terminal escapes.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(text.chars().filter(|c| !c.is_control()).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Snapshot of everything drawn on screen.
pub struct Screen<'a> {
    pub quote: &'a Quote,
    pub color: AccentColor,
    /// Ambient text color, `None` when theming is disabled.
    pub ambient: Option<AccentColor>,
    pub is_favorite: bool,
    pub author_focused: bool,
    pub favorites: &'a [Quote],
    pub panel_open: bool,
    pub toast: Option<&'a str>,
    pub hint: Option<&'a str>,
}

impl Screen<'_> {
    pub fn panel_label(&self) -> String {
        if self.panel_open {
            "Hide Favorites".to_string()
        } else {
            format!("Show Favorites ({})", self.favorites.len())
        }
    }

    pub fn favorite_label(&self) -> &'static str {
        if self.is_favorite {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    }

    fn accent(&self) -> SetForegroundColor {
        SetForegroundColor(term_color(self.color))
    }

    fn ambient_fg(&self) -> SetForegroundColor {
        SetForegroundColor(self.ambient.map(term_color).unwrap_or(Color::Reset))
    }

    /// Renders the full screen.
    pub fn render(&self) -> io::Result<String> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Print(format!("[ {} ]\n", self.panel_label())))?;
        if self.panel_open {
            queue!(
                out,
                self.accent(),
                SetAttribute(Attribute::Bold),
                Print("Favorites\n"),
                SetAttribute(Attribute::NormalIntensity),
                self.ambient_fg()
            )?;
            if self.favorites.is_empty() {
                queue!(out, Print(format!("  {}\n", EMPTY_FAVORITES)))?;
            }
            for (i, fav) in self.favorites.iter().enumerate() {
                queue!(
                    out,
                    Print(format!("  {:>2}. ", i + 1)),
                    SetAttribute(Attribute::Bold),
                    Print(sanitize(fav.display_author())),
                    SetAttribute(Attribute::NormalIntensity),
                    Print("\n      "),
                    SetAttribute(Attribute::Italic),
                    Print(format!("\"{}\"", sanitize(&fav.text))),
                    SetAttribute(Attribute::NoItalic),
                    Print("\n")
                )?;
            }
        }

        let star = if self.is_favorite { "★" } else { "☆" };
        queue!(
            out,
            Print("\n"),
            self.accent(),
            Print(format!("  {} {}\n", star, self.favorite_label())),
            Print(format!("  “ {}\n      ", sanitize(&self.quote.text)))
        )?;
        if self.author_focused {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            SetAttribute(Attribute::Italic),
            SetAttribute(Attribute::Underlined),
            Print(format!("— {}", sanitize(&self.quote.author))),
            SetAttribute(Attribute::NoItalic),
            SetAttribute(Attribute::NoUnderline),
            SetAttribute(Attribute::NoReverse),
            Print("\n"),
            self.ambient_fg(),
            Print("\n  [X]  [Copy]  [New Quote]\n")
        )?;

        if let Some(message) = self.toast {
            queue!(
                out,
                Print("\n  "),
                SetAttribute(Attribute::Reverse),
                Print(format!(" {} ", sanitize(message))),
                SetAttribute(Attribute::NoReverse),
                Print("  (dismiss)\n")
            )?;
        }
        if let Some(hint) = self.hint {
            let hint: String = hint
                .lines()
                .map(|line| sanitize(line).into_owned())
                .collect::<Vec<_>>()
                .join("\n");
            queue!(out, Print(format!("\n{}\n", hint)))?;
        }
        Ok(())
    }
}

/// Draws `screen` over the whole terminal.
pub fn draw(screen: &Screen<'_>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    screen.write_to(&mut stdout)?;
    queue!(stdout, Print("> "))?;
    stdout.flush()
}

/// Puts the terminal's own colors back when dropped, on every exit path.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Print("\n"));
    }
}

/// Ambient theme that recolors all terminal text.
pub struct TerminalTheme;

impl ThemeSink for TerminalTheme {
    fn apply(&mut self, color: AccentColor) {
        let _ = execute!(io::stdout(), SetForegroundColor(term_color(color)));
    }
}
