//! Cursor-based page layout.
//!
//! The header blocks sit at fixed positions on the first page, the body
//! sections flow line by line through a [`PageCursor`], and the signature
//! and footer are pinned above the bottom margin of the last page.

use offerdoc_core::dates::format_document_date;
use offerdoc_core::models::{
    FieldKind, FieldSpec, ResolvedForm, Section, SectionSpec, TemplateVariant,
};

use crate::document::{Align, DocumentInfo, DrawOp, LaidOutDocument, Page, Rule, TextRun};
use crate::metrics::FontWeight;
use crate::styles::LayoutConfig;
use crate::wrap::wrap_text;

/// Vertical position within the current page, in millimetres from the top.
///
/// Before any line is placed the cursor satisfies
/// `top <= y` and `y + height <= bottom`; a line that would cross the
/// bottom margin moves the cursor to the top of a fresh page first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    y: f32,
    page: usize,
    top: f32,
    bottom: f32,
}

impl PageCursor {
    pub fn new(layout: &LayoutConfig) -> Self {
        Self {
            y: layout.margin_mm,
            page: 0,
            top: layout.margin_mm,
            bottom: layout.bottom_limit(),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn fits(&self, height: f32) -> bool {
        self.y + height <= self.bottom
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    pub fn new_page(&mut self) {
        self.page += 1;
        self.y = self.top;
    }

    /// Reserve a line of `height` and return its top edge.
    ///
    /// A line taller than the whole usable height is still placed at the
    /// top of a page rather than looping forever.
    pub fn place_line(&mut self, height: f32) -> f32 {
        if !self.fits(height) && self.y > self.top {
            self.new_page();
        }
        let y = self.y;
        self.y += height;
        y
    }
}

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size_pt: f32,
    weight: FontWeight,
    line_height: f32,
}

/// Lay the exported values of `form` onto pages.
pub fn lay_out(
    form: &ResolvedForm,
    variant: TemplateVariant,
    layout: &LayoutConfig,
) -> LaidOutDocument {
    let mut layouter = Layouter {
        form,
        variant,
        layout,
        cursor: PageCursor::new(layout),
        pages: vec![Page::default()],
    };

    layouter.header();
    layouter.document_heading();
    for section in [
        Section::Counterparty,
        Section::Item,
        Section::Terms,
        Section::Closing,
    ] {
        layouter.section(variant.section(section));
    }
    layouter.signature();

    let doc = layouter.finish();
    tracing::debug!(
        pages = doc.page_count(),
        runs = doc.text_runs().count(),
        "document laid out"
    );
    doc
}

struct Layouter<'a> {
    form: &'a ResolvedForm,
    variant: TemplateVariant,
    layout: &'a LayoutConfig,
    cursor: PageCursor,
    pages: Vec<Page>,
}

impl Layouter<'_> {
    fn title_style(&self) -> TextStyle {
        TextStyle {
            size_pt: self.layout.title_size_pt,
            weight: FontWeight::Bold,
            line_height: self.layout.title_line_height_mm,
        }
    }

    fn heading_style(&self) -> TextStyle {
        TextStyle {
            size_pt: self.layout.heading_size_pt,
            weight: FontWeight::Bold,
            line_height: self.layout.line_height_mm,
        }
    }

    fn body_style(&self, weight: FontWeight) -> TextStyle {
        TextStyle {
            size_pt: self.layout.body_size_pt,
            weight,
            line_height: self.layout.line_height_mm,
        }
    }

    fn small_style(&self) -> TextStyle {
        TextStyle {
            size_pt: self.layout.small_size_pt,
            weight: FontWeight::Regular,
            line_height: self.layout.note_line_height_mm,
        }
    }

    /// Exported text of a field; blank when absent or redacted.
    fn value(&self, field: &FieldSpec) -> String {
        let raw = self.form.export(field.name);
        match field.kind {
            FieldKind::Date => format_document_date(raw),
            _ => raw.to_string(),
        }
    }

    fn page_mut(&mut self, index: usize) -> &mut Page {
        while self.pages.len() <= index {
            self.pages.push(Page::default());
        }
        &mut self.pages[index]
    }

    fn push_text(&mut self, page: usize, text: String, x: f32, y: f32, style: TextStyle, align: Align) {
        self.page_mut(page).push(DrawOp::Text(TextRun {
            text,
            x,
            y,
            height: style.line_height,
            size_pt: style.size_pt,
            weight: style.weight,
            align,
        }));
    }

    fn push_rule(&mut self, page: usize, x1: f32, x2: f32, y: f32) {
        let width_pt = self.layout.rule_width_pt;
        self.page_mut(page).push(DrawOp::Rule(Rule { x1, x2, y, width_pt }));
    }

    /// Place one line through the cursor.
    fn place(&mut self, text: String, x: f32, style: TextStyle, align: Align) {
        let y = self.cursor.place_line(style.line_height);
        let page = self.cursor.page();
        self.push_text(page, text, x, y, style, align);
    }

    /// Wrap `text` and flow it through the cursor.
    fn flow(&mut self, text: &str, x: f32, width: f32, style: TextStyle, align: Align) {
        for line in wrap_text(text, width, style.weight.metrics(), style.size_pt) {
            self.place(line, x, style, align);
        }
    }

    /// Draw a fixed-position block top-down from `top` on the current page.
    ///
    /// Returns the y below the last drawn line and the lines that would have
    /// crossed the bottom margin.
    fn fixed_block(
        &mut self,
        mut lines: Vec<(String, TextStyle)>,
        x: f32,
        top: f32,
        align: Align,
    ) -> (f32, Vec<(String, TextStyle)>) {
        let bottom = self.layout.bottom_limit();
        let mut end = top;
        let mut fitting = 0;
        for (_, style) in &lines {
            if end + style.line_height > bottom {
                break;
            }
            end += style.line_height;
            fitting += 1;
        }
        let rest = lines.split_off(fitting);

        let page = self.cursor.page();
        let mut y = top;
        for (text, style) in lines {
            self.push_text(page, text, x, y, style, align);
            y += style.line_height;
        }
        (end, rest)
    }

    /// Company block on the left, metadata block right-aligned on the right.
    ///
    /// Lines that do not fit on the first page continue through the cursor.
    fn header(&mut self) {
        let spec = self.variant.section(Section::Header);
        let layout = self.layout;
        let top = self.cursor.y();
        let meta_style = self.body_style(FontWeight::Regular);

        let mut identity = Vec::new();
        let mut meta = Vec::new();
        for field in spec.fields {
            let value = self.value(field);
            match field.kind {
                FieldKind::Title | FieldKind::Address => {
                    let style = match field.kind {
                        FieldKind::Title => self.title_style(),
                        _ => self.small_style(),
                    };
                    let lines = wrap_text(
                        &value,
                        layout.identity_block_width(),
                        style.weight.metrics(),
                        style.size_pt,
                    );
                    identity.extend(lines.into_iter().map(|line| (line, style)));
                }
                FieldKind::Meta | FieldKind::Date if !value.trim().is_empty() => {
                    let text = format!("{}: {}", field.label, value);
                    let lines = wrap_text(
                        &text,
                        layout.meta_block_width_mm,
                        meta_style.weight.metrics(),
                        meta_style.size_pt,
                    );
                    meta.extend(lines.into_iter().map(|line| (line, meta_style)));
                }
                _ => {}
            }
        }
        if identity.is_empty() && meta.is_empty() {
            return;
        }

        let (left_end, left_rest) = self.fixed_block(identity, layout.margin_mm, top, Align::Left);
        let (right_end, right_rest) = self.fixed_block(meta, layout.right_edge(), top, Align::Right);
        self.cursor.advance(left_end.max(right_end) - top);

        if !left_rest.is_empty() || !right_rest.is_empty() {
            tracing::debug!(
                lines = left_rest.len() + right_rest.len(),
                "header block overflows the first page, continuing on the next"
            );
        }
        for (line, style) in left_rest {
            self.place(line, layout.margin_mm, style, Align::Left);
        }
        for (line, style) in right_rest {
            self.place(line, layout.right_edge(), style, Align::Right);
        }

        self.cursor.advance(layout.paragraph_gap_mm);
        if self.cursor.y() <= layout.bottom_limit() {
            let page = self.cursor.page();
            let y = self.cursor.y();
            self.push_rule(page, layout.margin_mm, layout.right_edge(), y);
        }
        self.cursor.advance(layout.section_gap_mm);
    }

    fn document_heading(&mut self) {
        let Some(heading) = self.variant.document_heading() else {
            return;
        };
        let style = self.title_style();
        let center = self.layout.page_width_mm / 2.0;
        self.flow(heading, center, self.layout.usable_width(), style, Align::Center);
        self.cursor.advance(self.layout.paragraph_gap_mm);
    }

    fn section(&mut self, spec: &'static SectionSpec) {
        let entries: Vec<(&'static FieldSpec, String)> = spec
            .fields
            .iter()
            .filter(|f| !matches!(f.kind, FieldKind::Signature | FieldKind::Footer))
            .map(|f| (f, self.value(f)))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        if entries.is_empty() {
            return;
        }

        let x = self.layout.margin_mm;
        let width = self.layout.usable_width();
        let body = self.body_style(FontWeight::Regular);
        let label = self.body_style(FontWeight::Bold);

        if !spec.title.is_empty() {
            let style = self.heading_style();
            self.flow(spec.title, x, width, style, Align::Left);
        }

        for (field, value) in entries {
            match field.kind {
                FieldKind::Title => {
                    let style = self.title_style();
                    self.flow(&value, x, width, style, Align::Left);
                }
                FieldKind::Address => self.flow(&value, x, width, body, Align::Left),
                FieldKind::Line | FieldKind::Meta | FieldKind::Date => {
                    let text = format!("{}: {}", field.label, value);
                    self.flow(&text, x, width, body, Align::Left);
                }
                FieldKind::Paragraph => {
                    if spec.section != Section::Closing {
                        self.flow(field.label, x, width, label, Align::Left);
                    }
                    self.flow(&value, x, width, body, Align::Left);
                    self.cursor.advance(self.layout.paragraph_gap_mm);
                }
                FieldKind::Signature | FieldKind::Footer => {}
            }
        }

        self.cursor.advance(self.layout.section_gap_mm);
    }

    /// Signature and footer, on the final page only.
    ///
    /// The closing block rests on the bottom margin: signature on top, footer
    /// lines stacked down to the margin. A body reaching into the block
    /// pushes it onto a fresh page.
    fn signature(&mut self) {
        let spec = self.variant.section(Section::Closing);
        let layout = self.layout;

        let signature: Vec<String> = spec
            .fields_of(FieldKind::Signature)
            .map(|f| self.value(f))
            .filter(|v| !v.trim().is_empty())
            .collect();
        let small = self.small_style();
        let footer: Vec<String> = spec
            .fields_of(FieldKind::Footer)
            .map(|f| self.value(f))
            .flat_map(|v| {
                wrap_text(&v, layout.usable_width(), small.weight.metrics(), small.size_pt)
            })
            .collect();
        if signature.is_empty() && footer.is_empty() {
            return;
        }

        let body = self.body_style(FontWeight::Regular);
        let signature_height = if signature.is_empty() {
            0.0
        } else {
            layout.signature_rule_offset_mm
                + layout.paragraph_gap_mm
                + signature.len() as f32 * body.line_height
        };
        let gap = if signature.is_empty() || footer.is_empty() {
            0.0
        } else {
            layout.paragraph_gap_mm
        };
        let footer_height = footer.len() as f32 * small.line_height;
        let content_height = signature_height + gap + footer_height;

        if content_height > layout.usable_height() {
            self.flowing_closing(signature, footer);
            return;
        }

        let block_height = content_height.max(
            layout
                .signature_block_height_mm
                .min(layout.usable_height()),
        );
        let block_top = layout.bottom_limit() - block_height;
        if self.cursor.y() > block_top {
            tracing::debug!(
                y = self.cursor.y(),
                block_top,
                "body reaches the closing block, adding a final page"
            );
            self.cursor.new_page();
        }
        let page = self.cursor.page();

        if !signature.is_empty() {
            let rule_y = block_top + layout.signature_rule_offset_mm;
            let x2 = layout.right_edge();
            let x1 = x2 - layout.signature_width_mm;
            self.push_rule(page, x1, x2, rule_y);

            let center = x1 + layout.signature_width_mm / 2.0;
            let mut y = rule_y + layout.paragraph_gap_mm;
            for line in signature {
                self.push_text(page, line, center, y, body, Align::Center);
                y += body.line_height;
            }
        }

        let center = layout.page_width_mm / 2.0;
        let mut y = layout.bottom_limit() - footer_height;
        for line in footer {
            self.push_text(page, line, center, y, small, Align::Center);
            y += small.line_height;
        }
    }

    /// A closing block taller than a page flows through the cursor from the
    /// top of a fresh page instead.
    fn flowing_closing(&mut self, signature: Vec<String>, footer: Vec<String>) {
        let layout = self.layout;
        tracing::debug!(
            footer_lines = footer.len(),
            "closing block taller than a page, flowing it"
        );
        if self.cursor.y() > layout.margin_mm {
            self.cursor.new_page();
        }

        if !signature.is_empty() {
            let y = self
                .cursor
                .place_line(layout.signature_rule_offset_mm + layout.paragraph_gap_mm);
            let page = self.cursor.page();
            let x2 = layout.right_edge();
            let x1 = x2 - layout.signature_width_mm;
            self.push_rule(page, x1, x2, y + layout.signature_rule_offset_mm);

            let center = x1 + layout.signature_width_mm / 2.0;
            let body = self.body_style(FontWeight::Regular);
            for line in signature {
                self.place(line, center, body, Align::Center);
            }
            self.cursor.advance(layout.paragraph_gap_mm);
        }

        let small = self.small_style();
        let center = layout.page_width_mm / 2.0;
        for line in footer {
            self.place(line, center, small, Align::Center);
        }
    }

    fn finish(self) -> LaidOutDocument {
        let form = self.form;
        let identifier = form.export(self.variant.identifying_field());
        let title = match self.variant.document_heading() {
            Some(heading) if identifier.is_empty() => heading.to_string(),
            Some(heading) => format!("{heading} {identifier}"),
            None => identifier.to_string(),
        };

        LaidOutDocument {
            page_width_mm: self.layout.page_width_mm,
            page_height_mm: self.layout.page_height_mm,
            pages: self.pages,
            info: DocumentInfo {
                title,
                author: form.export("company_name").to_string(),
            },
        }
    }
}
