//! CLI styling utilities
//!
//! Provides semantic styling via the [`Stylize`] trait with automatic
//! terminal color support detection (delegated to `owo-colors`), plus the
//! badge palette used by feedback cards.
//!
//! # Color Palette
//!
//! | Method       | Color  | Stream | Semantic Use                  |
//! |--------------|--------|--------|-------------------------------|
//! | `.accent()`  | Cyan   | stdout | Ids, counts, catalog slugs    |
//! | `.success()` | Green  | stdout | Completion: checkmarks, done  |
//! | `.error()`   | Red    | stderr | Failures, error messages      |
//! | `.warn()`    | Yellow | stderr | Warnings, retry hints         |
//! | `.muted()`   | Dim    | stdout | Secondary: timestamps, labels |
//! | `.emphasis()`| Bold   | stdout | Headers, card titles          |

use clarity360::badge::{Badge, Tone};
use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{self, Display};
use std::sync::OnceLock;

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const WARN: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value with semantic styling applied.
///
/// Implements [`Display`] to render with ANSI codes when supported.
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }

    /// Override to render for stderr stream detection.
    #[must_use]
    pub const fn for_stderr(mut self) -> Self {
        self.stream = Stream::Stderr;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // owo-colors handles NO_COLOR, CLICOLOR, CLICOLOR_FORCE, TTY detection.
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling.
///
/// Automatically implemented for all [`Display`] types.
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Success color (green) for completion states.
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, SUCCESS, Stream::Stdout)
    }

    /// Error color (red) for failures. Default stream: stderr
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, ERROR, Stream::Stderr)
    }

    /// Warning color (yellow). Default stream: stderr
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, WARN, Stream::Stderr)
    }

    /// Muted style (dim) for secondary information.
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Emphasis style (bold) for important text.
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Success checkmark
pub const CHECK: &str = "✓";

/// Error/failure cross
pub const CROSS: &str = "✗";

/// Separator between card metadata items
pub const DOT: &str = "·";

/// Green checkmark for success states.
#[inline]
pub const fn check() -> Styled<&'static str> {
    Styled::new(CHECK, SUCCESS, Stream::Stdout)
}

/// Red cross for error/failure states (renders to stderr by default).
#[inline]
pub const fn cross() -> Styled<&'static str> {
    Styled::new(CROSS, ERROR, Stream::Stderr)
}

// ============================================================================
// Badges
// ============================================================================

/// Terminal style for a badge tone
const fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Pending => Style::new().yellow(),
        Tone::Active => Style::new().blue(),
        Tone::Positive => Style::new().green(),
        Tone::Neutral => Style::new().bright_black(),
        Tone::Elevated => Style::new().bright_red(),
        Tone::Critical => Style::new().red().bold(),
    }
}

/// A badge rendered as `[label]` in its tone's color.
pub fn badge(badge: &Badge) -> Styled<String> {
    Styled::new(
        format!("[{}]", badge.label),
        tone_style(badge.tone),
        Stream::Stdout,
    )
}

/// Default spinner style - cyan dots.
///
/// Template validated once on first call via `OnceLock`.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
