use nfx_dom::{NodeId, Rect, Tree};

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::style::StyleKey;

/// Next writable position, threaded through the walk by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    /// Tallest item placed on the current line so far.
    pub line_height: f32,
}

impl Cursor {
    fn new_line(self, left: f32, gap: f32) -> Self {
        Self {
            x: left,
            y: self.y + self.line_height + gap,
            line_height: 0.0,
        }
    }
}

/// Totals from one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutSummary {
    pub text_runs: usize,
    pub content_height: f32,
}

pub fn is_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        "div"
            | "p"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "ul"
            | "ol"
            | "li"
            | "blockquote"
            | "pre"
            | "hr"
            | "br"
    )
}

struct Pass<'a, C: ?Sized> {
    canvas: &'a mut C,
    max_width: f32,
    text_runs: usize,
}

/// Pending work for the walk. An explicit stack keeps deeply nested
/// documents off the call stack.
enum Step {
    Visit(NodeId),
    Close {
        id: NodeId,
        block: bool,
        start: Cursor,
    },
}

/// Assigns geometry to every node and paints text through a [`Canvas`].
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out the whole tree against a right edge of `max_width`.
    ///
    /// Every pass starts from a fresh cursor and overwrites all bounds, so
    /// repeated passes over an unchanged tree give identical geometry.
    pub fn layout<C: Canvas + ?Sized>(
        &self,
        tree: &mut Tree,
        max_width: f32,
        canvas: &mut C,
    ) -> LayoutSummary {
        let Some(root) = tree.root() else {
            return LayoutSummary::default();
        };

        tree.clear_bounds();

        let mut pass = Pass {
            canvas,
            max_width,
            text_runs: 0,
        };
        let mut cursor = Cursor {
            x: self.config.left_margin,
            y: self.config.top_margin,
            line_height: 0.0,
        };

        let top_level: Vec<NodeId> = tree.siblings_from(root).collect();
        let mut stack: Vec<Step> = top_level.into_iter().rev().map(Step::Visit).collect();
        while let Some(step) = stack.pop() {
            cursor = match step {
                Step::Visit(id) => self.open_node(tree, id, cursor, &mut pass, &mut stack),
                Step::Close { id, block, start } => {
                    self.close_element(tree, id, block, start, cursor, pass.max_width)
                }
            };
        }

        let summary = LayoutSummary {
            text_runs: pass.text_runs,
            content_height: cursor.y + cursor.line_height,
        };
        tracing::debug!(
            text_runs = summary.text_runs,
            content_height = summary.content_height,
            max_width,
            "layout pass finished"
        );
        summary
    }

    /// Lays out a text node, or opens an element and queues its children
    /// ahead of its [`Step::Close`].
    fn open_node<C: Canvas + ?Sized>(
        &self,
        tree: &mut Tree,
        id: NodeId,
        mut cursor: Cursor,
        pass: &mut Pass<'_, C>,
        stack: &mut Vec<Step>,
    ) -> Cursor {
        let Some(value) = tree.get(id) else {
            return cursor;
        };

        if value.is_text() {
            let words: Vec<String> = value.inner.split_whitespace().map(str::to_owned).collect();
            let style = tree
                .parent(id)
                .and_then(|parent| tree.get(parent))
                .map(|parent| StyleKey::for_tag(&parent.tag))
                .unwrap_or_default();
            return self.layout_text(tree, id, &words, style, cursor, pass);
        }

        let tag = value.tag.to_ascii_lowercase();
        let left = self.config.left_margin;

        if tag == "br" {
            return Cursor {
                x: left,
                y: cursor.y + cursor.line_height.max(self.config.line_height),
                line_height: 0.0,
            };
        }

        let block = is_block_tag(&tag);
        if block {
            if cursor.x > left {
                cursor = cursor.new_line(left, self.config.block_gap);
            }
            cursor.y += self.config.margin_before(&tag);
        }

        stack.push(Step::Close {
            id,
            block,
            start: cursor,
        });
        let children: Vec<NodeId> = tree.children(id).collect();
        stack.extend(children.into_iter().rev().map(Step::Visit));
        cursor
    }

    fn layout_text<C: Canvas + ?Sized>(
        &self,
        tree: &mut Tree,
        id: NodeId,
        words: &[String],
        style: StyleKey,
        mut cursor: Cursor,
        pass: &mut Pass<'_, C>,
    ) -> Cursor {
        let left = self.config.left_margin;
        let mut bounds: Option<Rect> = None;

        for word in words {
            let (width, height) = pass.canvas.measure(word, style);

            // A word that is alone on its line is never broken, however wide.
            if cursor.x + width > pass.max_width && cursor.x > left {
                cursor = Cursor {
                    x: left,
                    y: cursor.y + cursor.line_height.max(height) + self.config.line_gap,
                    line_height: 0.0,
                };
                tracing::trace!(word = %word, y = cursor.y, "wrapped");
            }

            pass.canvas.draw(word, style, cursor.x, cursor.y);
            pass.text_runs += 1;

            let placed = Rect::new(cursor.x, cursor.y, width, height);
            bounds = Some(match bounds {
                Some(existing) => existing.union(&placed),
                None => placed,
            });

            cursor.x += width + self.config.word_gap;
            cursor.line_height = cursor.line_height.max(height);
        }

        let bounds = bounds.unwrap_or(Rect::new(cursor.x, cursor.y, 0.0, 0.0));
        tree.set_bounds(id, Some(bounds));
        cursor
    }

    /// Runs once every child of `id` has been laid out.
    fn close_element(
        &self,
        tree: &mut Tree,
        id: NodeId,
        block: bool,
        start: Cursor,
        mut cursor: Cursor,
        max_width: f32,
    ) -> Cursor {
        let left = self.config.left_margin;
        let children: Vec<NodeId> = tree.children(id).collect();

        let content = children
            .iter()
            .filter_map(|&child| tree.get(child).and_then(|value| value.bounds))
            .reduce(|acc, rect| acc.union(&rect));

        let bounds = if block {
            let bottom = content.map_or(start.y, |rect| rect.bottom());
            let right = content.map_or(max_width, |rect| rect.right().max(max_width));
            Rect::new(left, start.y, (right - left).max(0.0), bottom - start.y)
        } else {
            content.unwrap_or(Rect::new(start.x, start.y, 0.0, 0.0))
        };
        tree.set_bounds(id, Some(bounds));

        if block {
            cursor = cursor.new_line(left, self.config.block_gap);
        }
        cursor
    }
}
