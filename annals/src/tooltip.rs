// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltips for ruler blocks.
//!
//! Tooltips live in screen space, independent of the camera. The manager keeps
//! at most one tooltip and clamps it inside the viewport.

use annals_records::RulerRecord;
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

/// Descriptions at least this many characters long are left out of tooltips.
const DESCRIPTION_LIMIT: usize = 50;

/// Text of a tooltip: a bold title followed by detail lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    /// First, emphasized line.
    pub title: String,
    /// Remaining lines in display order.
    pub lines: SmallVec<[String; 4]>,
}

impl TooltipContent {
    /// Content for a ruler: title, personal name, dynasty, reign span, and a
    /// short description when there is one.
    #[must_use]
    pub fn for_ruler(ruler: &RulerRecord) -> Self {
        let mut lines = SmallVec::new();
        lines.push(ruler.personal_name.clone());
        lines.push(ruler.dynasty_name.clone());
        lines.push(format!(
            "{}-{} ({} years)",
            ruler.reign_start,
            ruler.reign_end,
            ruler.reign_years()
        ));
        let description = ruler.description.trim();
        if !description.is_empty() && description.chars().count() < DESCRIPTION_LIMIT {
            lines.push(description.to_owned());
        }
        Self {
            title: ruler.display_title.clone(),
            lines,
        }
    }
}

/// Estimated text metrics used to size tooltips without a text shaper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipMetrics {
    /// Widest a tooltip may get; longer lines wrap.
    pub max_width: f64,
    /// Padding on every side of the text.
    pub padding: f64,
    /// Average advance of one character.
    pub char_width: f64,
    /// Height of the title row.
    pub title_height: f64,
    /// Height of each detail row.
    pub line_height: f64,
    /// Minimum distance kept from every viewport edge.
    pub edge_inset: f64,
}

impl TooltipMetrics {
    /// Sets the maximum width.
    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    /// Sets the viewport edge inset.
    #[must_use]
    pub fn with_edge_inset(mut self, inset: f64) -> Self {
        self.edge_inset = inset;
        self
    }

    /// Estimated size of a tooltip showing `content`.
    #[must_use]
    pub fn measure(&self, content: &TooltipContent) -> Size {
        let inner_max = (self.max_width - 2.0 * self.padding).max(self.char_width);
        let text_width = |text: &str| text.chars().count() as f64 * self.char_width;

        let widest = core::iter::once(content.title.as_str())
            .chain(content.lines.iter().map(String::as_str))
            .map(text_width)
            .fold(0.0_f64, f64::max);
        let rows = |text: &str| (text_width(text) / inner_max).ceil().max(1.0);

        let title_rows = rows(&content.title);
        let detail_rows: f64 = content.lines.iter().map(|line| rows(line)).sum();
        Size::new(
            widest.min(inner_max) + 2.0 * self.padding,
            title_rows * self.title_height + detail_rows * self.line_height + 2.0 * self.padding,
        )
    }
}

impl Default for TooltipMetrics {
    fn default() -> Self {
        Self {
            max_width: 200.0,
            padding: 8.0,
            char_width: 7.0,
            title_height: 20.0,
            line_height: 16.0,
            edge_inset: 10.0,
        }
    }
}

/// A placed tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Text shown.
    pub content: TooltipContent,
    /// Top-left corner in screen space.
    pub origin: Point,
    /// Estimated size.
    pub size: Size,
}

impl Tooltip {
    /// Screen-space bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Places a tooltip of `size` at `pointer`, kept `inset` away from the edges
/// of `viewport`.
///
/// Overflow past the right or bottom edge shifts the tooltip left or up. The
/// left and top insets win when the tooltip does not fit at all.
#[must_use]
pub fn place(pointer: Point, size: Size, viewport: Size, inset: f64) -> Point {
    let mut x = pointer.x;
    let mut y = pointer.y;
    if x + size.width > viewport.width - inset {
        x = viewport.width - size.width - inset;
    }
    if y + size.height > viewport.height - inset {
        y = viewport.height - size.height - inset;
    }
    Point::new(x.max(inset), y.max(inset))
}

/// Owns the single visible tooltip.
#[derive(Clone, Debug)]
pub struct TooltipManager {
    metrics: TooltipMetrics,
    viewport: Size,
    current: Option<Tooltip>,
}

impl TooltipManager {
    /// Creates a manager for a viewport of the given size.
    #[must_use]
    pub fn new(viewport: Size, metrics: TooltipMetrics) -> Self {
        Self {
            metrics,
            viewport,
            current: None,
        }
    }

    /// Replaces any tooltip with one showing `content` at `pointer`.
    pub fn show(&mut self, content: TooltipContent, pointer: Point) -> &Tooltip {
        self.current = None;
        let size = self.metrics.measure(&content);
        let origin = place(pointer, size, self.viewport, self.metrics.edge_inset);
        self.current.insert(Tooltip {
            content,
            origin,
            size,
        })
    }

    /// Removes the tooltip, if any.
    pub fn hide(&mut self) -> Option<Tooltip> {
        self.current.take()
    }

    /// The visible tooltip.
    #[must_use]
    pub fn current(&self) -> Option<&Tooltip> {
        self.current.as_ref()
    }

    /// Updates the viewport used for clamping later tooltips.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Metrics used for sizing.
    #[must_use]
    pub fn metrics(&self) -> &TooltipMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use annals_records::{RulerRecord, Rgb};
    use kurbo::{Point, Size};

    use super::{TooltipContent, TooltipManager, TooltipMetrics, place};

    fn ruler(description: &str) -> RulerRecord {
        RulerRecord {
            display_title: "Taizong".into(),
            personal_name: "Li Shimin".into(),
            dynasty_name: "Tang".into(),
            reign_start: 626,
            reign_end: 649,
            description: description.into(),
            color: Rgb::new(0xff6b6b),
        }
    }

    #[test]
    fn ruler_content_lists_reign() {
        let content = TooltipContent::for_ruler(&ruler("Zhenguan era"));
        assert_eq!(content.title, "Taizong");
        assert_eq!(
            content.lines.as_slice(),
            ["Li Shimin", "Tang", "626-649 (23 years)", "Zhenguan era"]
        );
    }

    #[test]
    fn long_or_empty_descriptions_are_dropped() {
        let long = "x".repeat(50);
        assert_eq!(TooltipContent::for_ruler(&ruler(&long)).lines.len(), 3);
        assert_eq!(TooltipContent::for_ruler(&ruler("")).lines.len(), 3);
        let short = "y".repeat(49);
        assert_eq!(TooltipContent::for_ruler(&ruler(&short)).lines.len(), 4);
    }

    #[test]
    fn measured_width_never_exceeds_maximum() {
        let metrics = TooltipMetrics::default();
        let content = TooltipContent::for_ruler(&ruler(&"z".repeat(45)));
        let size = metrics.measure(&content);
        assert_eq!(size.width, 200.0);
        // The 45 character description wraps onto a second row.
        assert_eq!(size.height, 20.0 + 5.0 * 16.0 + 16.0);
    }

    #[test]
    fn placement_respects_every_edge() {
        let viewport = Size::new(800.0, 600.0);
        let size = Size::new(200.0, 100.0);

        let right = place(Point::new(795.0, 50.0), size, viewport, 10.0);
        assert_eq!(right, Point::new(590.0, 50.0));
        assert!(viewport.width - (right.x + size.width) >= 10.0);

        let bottom = place(Point::new(100.0, 590.0), size, viewport, 10.0);
        assert_eq!(bottom, Point::new(100.0, 490.0));

        let top_left = place(Point::new(2.0, 3.0), size, viewport, 10.0);
        assert_eq!(top_left, Point::new(10.0, 10.0));

        let tiny = place(Point::new(50.0, 50.0), size, Size::new(150.0, 80.0), 10.0);
        assert_eq!(tiny, Point::new(10.0, 10.0));
    }

    #[test]
    fn manager_keeps_a_single_tooltip() {
        let mut manager = TooltipManager::new(Size::new(800.0, 600.0), TooltipMetrics::default());
        manager.show(TooltipContent::for_ruler(&ruler("")), Point::new(10.0, 20.0));
        let second = manager
            .show(TooltipContent::for_ruler(&ruler("Zhenguan era")), Point::new(30.0, 40.0))
            .clone();
        assert_eq!(manager.current(), Some(&second));
        assert_eq!(second.origin, Point::new(30.0, 40.0));
        assert!(manager.hide().is_some());
        assert!(manager.current().is_none());
    }
}
