//! Rich-text fragment layout.
//!
//! Styled text is cut into fragments: indivisible pieces with a single font
//! that are either whitespace-only or whitespace-free. Fragments are placed
//! greedily into lines against a wrap width, then aligned horizontally per
//! line, placed vertically inside the requested height, and finally moved so
//! that the requested anchor of the block sits at the origin.
//!
//! Layout is a pure function of its inputs; the result is plain data that
//! any [`Graphics`](crate::graphics::Graphics) implementation can render.

use log::{debug, trace};

use crate::font::{Font, FontUtil};
use crate::rect::Rectangle2f;
use crate::rich_text::{whitespace_pattern, RichText, Style};
use crate::vector::Vector2f;

/// Wrap width meaning "never wrap".
pub const NO_WRAP: f32 = f32::INFINITY;

// ============================================================================
// Alignment and anchors
// ============================================================================

/// Horizontal alignment of lines within the layout width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    /// Widen whitespace so that lines fill the width; the last line of each
    /// paragraph stays left-aligned.
    Justify,
}

/// Vertical placement of the text within the layout height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
    /// Spread lines evenly over the full height.
    Distributed,
}

/// Horizontal reference point of the block that is placed at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HAnchor {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical reference point of the block that is placed at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
    /// Baseline of the first line.
    Baseline,
}

/// Parameters of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Maximum line width; [`NO_WRAP`] disables wrapping.
    pub wrap_width: f32,
    /// Height available for vertical alignment.
    pub height: f32,
    pub h_align: Alignment,
    pub v_align: VerticalAlignment,
    pub h_anchor: HAnchor,
    pub v_anchor: VAnchor,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrap_width(self, wrap_width: f32) -> Self {
        Self { wrap_width, ..self }
    }

    pub fn height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    pub fn align(self, h_align: Alignment, v_align: VerticalAlignment) -> Self {
        Self {
            h_align,
            v_align,
            ..self
        }
    }

    pub fn anchor(self, h_anchor: HAnchor, v_anchor: VAnchor) -> Self {
        Self {
            h_anchor,
            v_anchor,
            ..self
        }
    }

    /// True unless the wrap width is [`NO_WRAP`] (or any non-finite value).
    pub fn is_wrapping(&self) -> bool {
        self.wrap_width.is_finite()
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            wrap_width: NO_WRAP,
            height: 0.0,
            h_align: Alignment::Left,
            v_align: VerticalAlignment::Top,
            h_anchor: HAnchor::Left,
            v_anchor: VAnchor::Top,
        }
    }
}

// ============================================================================
// Fragment
// ============================================================================

/// A laid-out piece of text with uniform font.
///
/// `x`/`y` is the top-left corner of the fragment's line box; the glyphs
/// sit on `y + baseline`, which is shared by all fragments of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub baseline: f32,
    pub font: Font,
    pub text: String,
}

impl Fragment {
    /// Copy moved by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Fragment {
        Fragment {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    /// Absolute y coordinate of the baseline.
    #[inline]
    pub fn baseline_y(&self) -> f32 {
        self.y + self.baseline
    }

    pub fn bounds(&self) -> Rectangle2f {
        Rectangle2f::new(self.x, self.y, self.width, self.height)
    }
}

// ============================================================================
// FragmentedText
// ============================================================================

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FragmentedText {
    /// Fragments per line, top to bottom, each line left to right.
    pub lines: Vec<Vec<Fragment>>,
    /// Width of the longest line.
    pub text_width: f32,
    /// Summed line heights, plus the space added by distributed alignment.
    pub text_height: f32,
    /// Layout width: the wrap width, or the text width when not wrapping.
    pub width: f32,
    /// Requested layout height.
    pub height: f32,
    /// Layout area grown to the text extents.
    pub actual_width: f32,
    pub actual_height: f32,
    /// Distance from the top of the layout area to the first baseline.
    pub baseline: f32,
    /// Top-left corner of the layout area after anchoring.
    pub origin: Vector2f,
}

impl FragmentedText {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All fragments in drawing order.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.lines.iter().flatten()
    }

    /// Anchored layout area, grown to the text extents.
    pub fn bounds(&self) -> Rectangle2f {
        Rectangle2f::new(self.origin.x, self.origin.y, self.actual_width, self.actual_height)
    }

    /// Copy with every fragment and the origin moved by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> FragmentedText {
        FragmentedText {
            lines: self
                .lines
                .iter()
                .map(|line| line.iter().map(|f| f.translate(dx, dy)).collect())
                .collect(),
            origin: self.origin + Vector2f::new(dx, dy),
            ..self.clone()
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// A line under construction; fragment `y` is still 0 and `baseline` holds
/// the fragment's own ascent.
#[derive(Default)]
struct Line {
    fragments: Vec<Fragment>,
    width: f32,
    ascent: f32,
    descent: f32,
    paragraph_end: bool,
}

impl Line {
    fn push(&mut self, mut f: Fragment) {
        f.x = self.width;
        self.width += f.width;
        self.ascent = self.ascent.max(f.baseline);
        self.descent = self.descent.max(f.height - f.baseline);
        self.fragments.push(f);
    }

    fn drop_trailing_blank(&mut self) {
        while self.fragments.last().is_some_and(Fragment::is_blank) {
            if let Some(f) = self.fragments.pop() {
                self.width -= f.width;
            }
        }
    }

    fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Lay out `text` with `font` as base font.
///
/// Never fails: empty text gives an empty result, and a fragment wider than
/// the wrap width is placed alone on its line.
pub fn layout(
    text: &RichText,
    options: &LayoutOptions,
    font_util: &dyn FontUtil,
    font: &Font,
) -> FragmentedText {
    if text.is_empty() {
        return FragmentedText::empty();
    }

    let wrapping = options.is_wrapping();
    let wrap_width = options.wrap_width.max(0.0);

    let mut lines: Vec<Line> = Vec::new();
    for paragraph in text.lines() {
        let paragraph = match options.h_align {
            Alignment::Left => paragraph.strip_trailing(),
            Alignment::Right => paragraph.strip_leading(),
            Alignment::Center | Alignment::Justify => paragraph.strip(),
        };
        wrap_paragraph(&paragraph, wrapping, wrap_width, font_util, font, &mut lines);
    }

    let text_width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
    let layout_width = if wrapping { wrap_width } else { text_width };
    for line in &mut lines {
        apply_h_align(line, layout_width, options.h_align);
    }

    // Vertical placement.
    let natural_height: f32 = lines.iter().map(Line::height).sum();
    let height = options.height.max(0.0);
    let free = height - natural_height;
    let (offset, spacing) = match options.v_align {
        VerticalAlignment::Top => (0.0, 0.0),
        VerticalAlignment::Middle => (free.max(0.0) / 2.0, 0.0),
        VerticalAlignment::Bottom => (free.max(0.0), 0.0),
        VerticalAlignment::Distributed if lines.len() >= 2 && free > 0.0 => {
            (0.0, free / (lines.len() - 1) as f32)
        }
        VerticalAlignment::Distributed => (0.0, 0.0),
    };
    let text_height = natural_height + spacing * lines.len().saturating_sub(1) as f32;

    let actual_width = layout_width.max(text_width);
    let actual_height = height.max(text_height);
    let baseline = offset + lines.first().map_or(0.0, |l| l.ascent);

    let dx = match options.h_anchor {
        HAnchor::Left => 0.0,
        HAnchor::Center => -actual_width / 2.0,
        HAnchor::Right => -actual_width,
    };
    let dy = match options.v_anchor {
        VAnchor::Top => 0.0,
        VAnchor::Middle => -actual_height / 2.0,
        VAnchor::Bottom => -actual_height,
        VAnchor::Baseline => -baseline,
    };

    let mut y = offset;
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let ascent = line.ascent;
        let line_height = line.height();
        out.push(
            line.fragments
                .into_iter()
                .map(|f| Fragment {
                    x: f.x + dx,
                    y: y + dy,
                    baseline: ascent,
                    ..f
                })
                .collect::<Vec<_>>(),
        );
        y += line_height + spacing;
    }

    debug!(
        "layout: {} lines, text {}x{}, area {}x{}",
        out.len(),
        text_width,
        text_height,
        actual_width,
        actual_height
    );

    FragmentedText {
        lines: out,
        text_width,
        text_height,
        width: layout_width,
        height,
        actual_width,
        actual_height,
        baseline,
        origin: Vector2f::new(dx, dy),
    }
}

/// Measure `text` as one fragment at x = 0.
fn measure(text: &str, style: &Style, font_util: &dyn FontUtil, base: &Font) -> Fragment {
    let font = font_util.derive_font(base, style);
    let r = font_util.text_bounds(text, &font);
    Fragment {
        x: 0.0,
        y: 0.0,
        width: r.width,
        height: r.height,
        baseline: -r.y_min(),
        font,
        text: text.to_string(),
    }
}

/// Break one logical line into layout lines, appending them to `lines`.
fn wrap_paragraph(
    paragraph: &RichText,
    wrapping: bool,
    wrap_width: f32,
    font_util: &dyn FontUtil,
    font: &Font,
    lines: &mut Vec<Line>,
) {
    let whole: Vec<Fragment> = paragraph
        .runs()
        .iter()
        .map(|run| measure(&run.text, &run.style, font_util, font))
        .collect();
    let total: f32 = whole.iter().map(|f| f.width).sum();

    // Split at whitespace only when the paragraph does not fit anyway.
    let pieces = if wrapping && total > wrap_width {
        paragraph
            .split_runs(whitespace_pattern())
            .iter()
            .flat_map(|piece| piece.runs().iter())
            .map(|run| measure(&run.text, &run.style, font_util, font))
            .collect()
    } else {
        whole
    };

    // Consecutive pieces of the same kind form a group: a word, or a run of
    // whitespace across style changes. Breaks only fall between groups.
    let mut groups: Vec<Vec<Fragment>> = Vec::new();
    for f in pieces {
        let joins = groups
            .last()
            .and_then(|g| g.last())
            .is_some_and(|p| p.is_blank() == f.is_blank());
        if joins {
            if let Some(g) = groups.last_mut() {
                g.push(f);
                continue;
            }
        }
        groups.push(vec![f]);
    }

    let first_line = lines.len();
    let mut line = Line::default();
    let mut armed = false;
    for group in groups {
        let group_width: f32 = group.iter().map(|f| f.width).sum();
        let blank = group.iter().all(Fragment::is_blank);
        if wrapping && armed && line.width + group_width > wrap_width {
            line.drop_trailing_blank();
            trace!("wrap after {} fragments at width {}", line.fragments.len(), line.width);
            lines.push(std::mem::take(&mut line));
            armed = false;
            if blank {
                continue;
            }
        }
        for f in group {
            line.push(f);
        }
        armed |= !blank;
    }

    if line.fragments.is_empty() {
        // A wrap on trailing whitespace closes the paragraph's last line.
        if lines.len() > first_line {
            if let Some(last) = lines.last_mut() {
                last.paragraph_end = true;
            }
            return;
        }
        let r = font_util.text_bounds("", font);
        line.ascent = -r.y_min();
        line.descent = r.y_max();
    }
    line.paragraph_end = true;
    lines.push(line);
}

/// Position the fragments of a finished line within `width`.
fn apply_h_align(line: &mut Line, width: f32, align: Alignment) {
    let unused = width - line.width;
    match align {
        Alignment::Left => {}
        Alignment::Right => shift(line, unused.max(0.0)),
        Alignment::Center => shift(line, unused.max(0.0) / 2.0),
        Alignment::Justify => {
            if line.paragraph_end || unused <= 0.0 {
                return;
            }
            let whitespace: f32 = line
                .fragments
                .iter()
                .filter(|f| f.is_blank())
                .map(|f| f.width)
                .sum();
            if whitespace <= 0.0 {
                return;
            }
            let factor = 1.0 + unused / whitespace;
            let mut x = 0.0;
            for f in &mut line.fragments {
                if f.is_blank() {
                    f.width *= factor;
                }
                f.x = x;
                x += f.width;
            }
            line.width = x;
        }
    }
}

fn shift(line: &mut Line, dx: f32) {
    for f in &mut line.fragments {
        f.x += dx;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::LAYOUT_EPSILON;
    use crate::font::FixedMetrics;
    use crate::rich_text::Run;

    // 5 units per char, line height 10, ascent 8 at size 10.
    const METRICS: FixedMetrics = FixedMetrics::new(0.5, 0.8, 0.2);

    fn font() -> Font {
        Font::new("Mono", 10.0)
    }

    fn run(text: &RichText, options: LayoutOptions) -> FragmentedText {
        layout(text, &options, &METRICS, &font())
    }

    fn line_texts(ft: &FragmentedText) -> Vec<String> {
        ft.lines
            .iter()
            .map(|l| l.iter().map(|f| f.text.as_str()).collect())
            .collect()
    }

    fn black_is_darker() -> RichText {
        RichText::from_runs([
            Run::new("Black ", Style::default()),
            Run::new("is darker", Style::bold()),
            Run::new(" than ", Style::default()),
            Run::new("Gray.", Style::italic()),
        ])
    }

    #[test]
    fn test_empty_text() {
        let ft = run(&RichText::new(), LayoutOptions::new().wrap_width(50.0));
        assert!(ft.is_empty());
        assert_eq!(ft.text_width, 0.0);
        assert_eq!(ft.text_height, 0.0);
    }

    #[test]
    fn test_single_line_one_fragment_per_run() {
        let text = RichText::from_runs([
            Run::new("Hello ", Style::default()),
            Run::new("big", Style::bold()),
            Run::new(" world", Style::default()),
        ]);
        let ft = run(&text, LayoutOptions::new().wrap_width(200.0));
        assert_eq!(ft.line_count(), 1);
        assert_eq!(ft.lines[0].len(), 3);
        assert!((ft.text_width - 75.0).abs() < LAYOUT_EPSILON);
        assert!(ft.lines[0][1].font.bold);
        assert_eq!(ft.lines[0][1].x, 30.0);
    }

    #[test]
    fn test_no_wrap_never_splits_runs() {
        let text = RichText::plain("aaaa bbbb cccc dddd eeee ffff");
        let ft = run(&text, LayoutOptions::new());
        assert_eq!(ft.line_count(), 1);
        assert_eq!(ft.lines[0].len(), 1);
        assert_eq!(ft.width, ft.text_width);
    }

    #[test]
    fn test_wrap_at_whitespace_only() {
        let ft = run(&black_is_darker(), LayoutOptions::new().wrap_width(60.0));
        assert_eq!(line_texts(&ft), vec!["Black is", "darker than", "Gray."]);
        for line in &ft.lines {
            assert!(!line.first().unwrap().is_blank());
            assert!(!line.last().unwrap().is_blank());
        }
        assert_eq!(ft.lines[1][0].x, 0.0);
        assert!(ft.lines[1][0].font.bold);
    }

    #[test]
    fn test_leading_whitespace_dropped_on_wrap() {
        let ft = run(&black_is_darker(), LayoutOptions::new().wrap_width(40.0));
        let texts = line_texts(&ft);
        assert_eq!(texts[0], "Black is");
        assert_eq!(texts[1], "darker");
        assert!(texts.iter().all(|t| !t.starts_with(' ')));
    }

    #[test]
    fn test_oversized_fragment_alone_on_line() {
        let ft = run(&RichText::plain("abcdefgh ij"), LayoutOptions::new().wrap_width(10.0));
        assert_eq!(line_texts(&ft), vec!["abcdefgh", "ij"]);
        assert_eq!(ft.text_width, 40.0);
        assert_eq!(ft.actual_width, 40.0);
    }

    #[test]
    fn test_no_break_inside_styled_word() {
        let text = RichText::from_runs([
            Run::new("Bl", Style::bold()),
            Run::new("ack is", Style::default()),
        ]);
        let ft = run(&text, LayoutOptions::new().wrap_width(20.0));
        assert_eq!(line_texts(&ft), vec!["Black", "is"]);
        assert_eq!(ft.lines[0].len(), 2);
    }

    #[test]
    fn test_line_positions() {
        let ft = run(&RichText::plain("a\n\nb"), LayoutOptions::new());
        assert_eq!(ft.line_count(), 3);
        assert!(ft.lines[1].is_empty());
        assert_eq!(ft.lines[0][0].y, 0.0);
        assert_eq!(ft.lines[2][0].y, 20.0);
        assert_eq!(ft.lines[2][0].baseline_y(), 28.0);
        assert_eq!(ft.text_height, 30.0);
        assert_eq!(ft.baseline, 8.0);
    }

    #[test]
    fn test_right_and_center_alignment() {
        let text = RichText::plain("ab\nabcd");
        let ft = run(&text, LayoutOptions::new().align(Alignment::Right, VerticalAlignment::Top));
        assert_eq!(ft.lines[0][0].x, 10.0);
        assert_eq!(ft.lines[1][0].x, 0.0);
        let ft = run(&text, LayoutOptions::new().align(Alignment::Center, VerticalAlignment::Top));
        assert_eq!(ft.lines[0][0].x, 5.0);
    }

    #[test]
    fn test_alignment_trims_whitespace() {
        let text = RichText::plain("  ab  ");
        let left = run(&text, LayoutOptions::new());
        assert_eq!(left.lines[0][0].text, "  ab");
        let right = run(&text, LayoutOptions::new().align(Alignment::Right, VerticalAlignment::Top));
        assert_eq!(right.lines[0][0].text, "ab  ");
        let center =
            run(&text, LayoutOptions::new().align(Alignment::Center, VerticalAlignment::Top));
        assert_eq!(center.lines[0][0].text, "ab");
    }

    #[test]
    fn test_right_aligned_trailing_whitespace_adds_no_line() {
        let opts = LayoutOptions::new()
            .wrap_width(10.0)
            .align(Alignment::Right, VerticalAlignment::Top);
        let ft = run(&RichText::plain("ab cd "), opts);
        assert_eq!(line_texts(&ft), vec!["ab", "cd"]);
        assert_eq!(ft.text_height, 20.0);

        // The following paragraph starts right below.
        let ft = run(&RichText::plain("ab cd \nef"), opts);
        assert_eq!(line_texts(&ft), vec!["ab", "cd", "ef"]);
        assert_eq!(ft.lines[2][0].y, 20.0);

        let mid = run(
            &RichText::plain("ab cd "),
            opts.height(40.0).align(Alignment::Right, VerticalAlignment::Middle),
        );
        assert_eq!(mid.lines[0][0].y, 10.0);
    }

    #[test]
    fn test_justify() {
        let text = RichText::plain("aaa bb cc ddd ee");
        let ft = run(
            &text,
            LayoutOptions::new()
                .wrap_width(50.0)
                .align(Alignment::Justify, VerticalAlignment::Top),
        );
        assert_eq!(line_texts(&ft), vec!["aaa bb cc", "ddd ee"]);
        let first = &ft.lines[0];
        assert!((first.last().unwrap().x_max() - 50.0).abs() < LAYOUT_EPSILON);
        // Only whitespace grows.
        assert_eq!(first[0].width, 15.0);
        assert_eq!(first[2].width, 10.0);
        assert!((first[1].width - 7.5).abs() < LAYOUT_EPSILON);
        // Last line is ragged.
        let last = &ft.lines[1];
        assert_eq!(last[1].width, 5.0);
        assert!((last.last().unwrap().x_max() - 30.0).abs() < LAYOUT_EPSILON);
    }

    #[test]
    fn test_vertical_alignment() {
        let text = RichText::plain("a\nb");
        let opts = LayoutOptions::new().height(50.0);
        let mid = run(&text, opts.align(Alignment::Left, VerticalAlignment::Middle));
        assert_eq!(mid.lines[0][0].y, 15.0);
        let bottom = run(&text, opts.align(Alignment::Left, VerticalAlignment::Bottom));
        assert_eq!(bottom.lines[1][0].y, 40.0);
        assert_eq!(bottom.baseline, 38.0);
        assert_eq!(bottom.actual_height, 50.0);
    }

    #[test]
    fn test_distributed() {
        let text = RichText::plain("a\nb\nc");
        let ft = run(
            &text,
            LayoutOptions::new()
                .height(60.0)
                .align(Alignment::Left, VerticalAlignment::Distributed),
        );
        let b0 = ft.lines[0][0].baseline_y();
        let b1 = ft.lines[1][0].baseline_y();
        let b2 = ft.lines[2][0].baseline_y();
        assert!((b1 - b0 - 25.0).abs() < LAYOUT_EPSILON);
        assert!((b2 - b1 - 25.0).abs() < LAYOUT_EPSILON);
        assert_eq!(ft.text_height, 60.0);
    }

    #[test]
    fn test_distributed_single_line_is_top() {
        let ft = run(
            &RichText::plain("a"),
            LayoutOptions::new()
                .height(60.0)
                .align(Alignment::Left, VerticalAlignment::Distributed),
        );
        assert_eq!(ft.lines[0][0].y, 0.0);
        assert_eq!(ft.text_height, 10.0);
    }

    #[test]
    fn test_anchors() {
        let text = RichText::plain("abcd");
        let ft = run(&text, LayoutOptions::new().anchor(HAnchor::Center, VAnchor::Middle));
        assert_eq!(ft.lines[0][0].x, -10.0);
        assert_eq!(ft.lines[0][0].y, -5.0);
        assert_eq!(ft.bounds(), Rectangle2f::new(-10.0, -5.0, 20.0, 10.0));

        let ft = run(&text, LayoutOptions::new().anchor(HAnchor::Right, VAnchor::Baseline));
        assert_eq!(ft.lines[0][0].x, -20.0);
        assert_eq!(ft.lines[0][0].baseline_y(), 0.0);

        let ft = run(&text, LayoutOptions::new().anchor(HAnchor::Left, VAnchor::Bottom));
        assert_eq!(ft.lines[0][0].y, -10.0);
    }

    #[test]
    fn test_mixed_sizes_share_baseline() {
        let text = RichText::from_runs([
            Run::new("small ", Style::default()),
            Run::new("BIG", Style::size(20.0)),
        ]);
        let ft = run(&text, LayoutOptions::new());
        let line = &ft.lines[0];
        assert_eq!(line[0].baseline_y(), line[1].baseline_y());
        assert_eq!(line[0].baseline, 16.0);
        assert_eq!(ft.text_height, 20.0);
    }

    #[test]
    fn test_translate() {
        let ft = run(&RichText::plain("ab"), LayoutOptions::new());
        let moved = ft.translate(3.0, 4.0);
        assert_eq!(moved.lines[0][0].x, 3.0);
        assert_eq!(moved.origin, Vector2f::new(3.0, 4.0));
        assert_eq!(moved.baseline, ft.baseline);
    }
}
