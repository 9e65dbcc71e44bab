//! Styled text.
//!
//! A [`RichText`] is an immutable sequence of [`Run`]s, each a maximal
//! substring sharing one [`Style`]. Styles are partial: every attribute is
//! optional and only overrides the corresponding property of the font the
//! text is eventually rendered with.

use core::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::color::Rgba8;

/// Matches runs of whitespace; used to split text into fragments.
pub fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

// ============================================================================
// Style
// ============================================================================

/// Partial font attributes attached to a run of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub family: Option<String>,
    pub size: Option<f32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strike_through: Option<bool>,
    pub color: Option<Rgba8>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Self::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: Some(true),
            ..Self::default()
        }
    }

    pub fn strike_through() -> Self {
        Self {
            strike_through: Some(true),
            ..Self::default()
        }
    }

    pub fn color(color: Rgba8) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn size(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    /// True if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay `other` on `self`: attributes set in `other` win.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            family: other.family.clone().or_else(|| self.family.clone()),
            size: other.size.or(self.size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            strike_through: other.strike_through.or(self.strike_through),
            color: other.color.or(self.color),
        }
    }
}

// ============================================================================
// Run
// ============================================================================

/// A substring with uniform style.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

impl Run {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// True if the run contains only whitespace (or nothing).
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

// ============================================================================
// RichText
// ============================================================================

/// Immutable sequence of styled runs.
///
/// Runs are never empty and adjacent runs never share a style; all
/// constructors normalize their input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichText {
    runs: Vec<Run>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::default())
    }

    /// Text with a single style.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::from_runs([Run::new(text, style)])
    }

    /// Build from runs, dropping empty runs and merging neighbours with
    /// equal style.
    pub fn from_runs<I: IntoIterator<Item = Run>>(runs: I) -> Self {
        let mut out: Vec<Run> = Vec::new();
        for run in runs {
            if run.text.is_empty() {
                continue;
            }
            match out.last_mut() {
                Some(last) if last.style == run.style => last.text.push_str(&run.text),
                _ => out.push(run),
            }
        }
        Self { runs: out }
    }

    pub fn builder() -> RichTextBuilder {
        RichTextBuilder::new()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Plain text content.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.text.chars().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// True if the text contains only whitespace (or nothing).
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(Run::is_blank)
    }

    /// Concatenation of `self` and `other`.
    pub fn concat(&self, other: &RichText) -> RichText {
        RichText::from_runs(self.runs.iter().chain(other.runs.iter()).cloned())
    }

    /// Split into logical lines at `'\n'`; a `"\r\n"` pair is a single
    /// break. Empty text has no lines, a trailing newline opens an empty
    /// last line.
    pub fn lines(&self) -> Vec<RichText> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut lines = Vec::new();
        let mut current: Vec<Run> = Vec::new();
        for run in &self.runs {
            let mut parts = run.text.split('\n').peekable();
            while let Some(part) = parts.next() {
                let at_break = parts.peek().is_some();
                let part = if at_break {
                    part.strip_suffix('\r').unwrap_or(part)
                } else {
                    part
                };
                current.push(Run::new(part, run.style.clone()));
                if at_break {
                    lines.push(RichText::from_runs(current.drain(..)));
                }
            }
        }
        lines.push(RichText::from_runs(current));
        lines
    }

    /// Split every run at the start and end of each match of `pattern`.
    ///
    /// Each returned piece is a single-run text; concatenating the pieces
    /// gives back `self`. With [`whitespace_pattern`] the pieces alternate
    /// between whitespace and non-whitespace.
    pub fn split_runs(&self, pattern: &Regex) -> Vec<RichText> {
        let mut pieces = Vec::new();
        for run in &self.runs {
            let mut pos = 0;
            let mut push = |from: usize, to: usize| {
                if to > from {
                    pieces.push(RichText::styled(&run.text[from..to], run.style.clone()));
                }
            };
            for m in pattern.find_iter(&run.text) {
                push(pos, m.start());
                push(m.start(), m.end());
                pos = m.end();
            }
            push(pos, run.text.len());
        }
        pieces
    }

    /// Remove leading whitespace, across run boundaries.
    pub fn strip_leading(&self) -> RichText {
        let mut runs = self.runs.clone();
        while let Some(first) = runs.first_mut() {
            let trimmed = first.text.trim_start();
            if trimmed.is_empty() {
                runs.remove(0);
            } else {
                first.text = trimmed.to_string();
                break;
            }
        }
        RichText { runs }
    }

    /// Remove trailing whitespace, across run boundaries.
    pub fn strip_trailing(&self) -> RichText {
        let mut runs = self.runs.clone();
        while let Some(last) = runs.last_mut() {
            let trimmed = last.text.trim_end();
            if trimmed.is_empty() {
                runs.pop();
            } else {
                last.text.truncate(trimmed.len());
                break;
            }
        }
        RichText { runs }
    }

    /// Remove leading and trailing whitespace.
    pub fn strip(&self) -> RichText {
        self.strip_leading().strip_trailing()
    }

    /// Characters `start..end` (char indices, clamped to the length).
    pub fn subsequence(&self, start: usize, end: usize) -> RichText {
        let mut runs = Vec::new();
        let mut offset = 0;
        for run in &self.runs {
            let n = run.text.chars().count();
            let from = start.max(offset).min(offset + n) - offset;
            let to = end.max(offset).min(offset + n) - offset;
            if to > from {
                let text: String = run.text.chars().skip(from).take(to - from).collect();
                runs.push(Run::new(text, run.style.clone()));
            }
            offset += n;
        }
        RichText::from_runs(runs)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        RichText::plain(s)
    }
}

impl From<String> for RichText {
    fn from(s: String) -> Self {
        RichText::plain(s)
    }
}

// ============================================================================
// RichTextBuilder
// ============================================================================

/// Incremental construction with a stack of nested styles.
#[derive(Debug, Default)]
pub struct RichTextBuilder {
    runs: Vec<Run>,
    styles: Vec<Style>,
}

impl RichTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style in effect: all pushed styles merged, innermost last.
    pub fn current_style(&self) -> Style {
        self.styles
            .iter()
            .fold(Style::default(), |acc, s| acc.merge(s))
    }

    pub fn push_style(&mut self, style: Style) -> &mut Self {
        self.styles.push(style);
        self
    }

    /// Pop the innermost style; a no-op when the stack is empty.
    pub fn pop_style(&mut self) -> &mut Self {
        self.styles.pop();
        self
    }

    /// Append text in the current style.
    pub fn append(&mut self, text: &str) -> &mut Self {
        let style = self.current_style();
        self.runs.push(Run::new(text, style));
        self
    }

    /// Append text with `style` merged over the current style.
    pub fn append_styled(&mut self, text: &str, style: &Style) -> &mut Self {
        let style = self.current_style().merge(style);
        self.runs.push(Run::new(text, style));
        self
    }

    pub fn build(&self) -> RichText {
        RichText::from_runs(self.runs.iter().cloned())
    }
}

// ============================================================================
// Tests
// ============================================================================
