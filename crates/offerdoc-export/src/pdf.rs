use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::backend::DocumentBackend;
use crate::document::{Align, DrawOp, LaidOutDocument, Rule, TextRun};
use crate::error::ExportError;
use crate::metrics::FontWeight;
use crate::styles::MM_PER_PT;

/// Baseline position within a line box, as a fraction of the font size.
const ASCENT_RATIO: f32 = 0.8;

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Writes laid-out pages as a PDF using the standard Helvetica fonts.
///
/// Text is WinAnsi encoded; characters outside that code page are written
/// as `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriterBackend;

impl DocumentBackend for PdfWriterBackend {
    fn name(&self) -> &'static str {
        "pdf-writer"
    }

    fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, ExportError> {
        if document.pages.is_empty() {
            return Err(ExportError::Pdf("document has no pages".to_string()));
        }

        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let regular_id = alloc.bump();
        let bold_id = alloc.bump();
        let info_id = alloc.bump();

        let n = document.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc.bump()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc.bump()).collect();

        let width_pt = document.page_width_mm / MM_PER_PT;
        let height_pt = document.page_height_mm / MM_PER_PT;

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        pdf.type1_font(regular_id)
            .base_font(Name(FontWeight::Regular.metrics().base_font.as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(FontWeight::Bold.metrics().base_font.as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        for (i, page) in document.pages.iter().enumerate() {
            let mut writer = pdf.page(page_ids[i]);
            writer
                .media_box(Rect::new(0.0, 0.0, width_pt, height_pt))
                .parent(page_tree_id)
                .contents(content_ids[i]);
            writer
                .resources()
                .fonts()
                .pair(REGULAR_FONT, regular_id)
                .pair(BOLD_FONT, bold_id);
            writer.finish();

            let mut content = Content::new();
            for op in &page.ops {
                match op {
                    DrawOp::Text(run) => write_text(&mut content, run, height_pt),
                    DrawOp::Rule(rule) => write_rule(&mut content, rule, height_pt),
                }
            }
            pdf.stream(content_ids[i], &content.finish());
        }

        let mut info = pdf.document_info(info_id);
        if !document.info.title.is_empty() {
            info.title(TextStr(&document.info.title));
        }
        if !document.info.author.is_empty() {
            info.author(TextStr(&document.info.author));
        }
        info.producer(TextStr("offerdoc"));
        info.finish();

        tracing::debug!(pages = n, "PDF assembled");
        Ok(pdf.finish())
    }
}

fn write_text(content: &mut Content, run: &TextRun, page_height_pt: f32) {
    if run.text.is_empty() {
        return;
    }

    let width_mm = run.weight.metrics().measure_mm(&run.text, run.size_pt);
    let left_mm = match run.align {
        Align::Left => run.x,
        Align::Right => run.x - width_mm,
        Align::Center => run.x - width_mm / 2.0,
    };
    let baseline_mm = run.y + run.size_pt * MM_PER_PT * ASCENT_RATIO;

    let font = match run.weight {
        FontWeight::Regular => REGULAR_FONT,
        FontWeight::Bold => BOLD_FONT,
    };
    let encoded = encode_win_ansi(&run.text);

    content.begin_text();
    content.set_font(font, run.size_pt);
    content.next_line(left_mm / MM_PER_PT, page_height_pt - baseline_mm / MM_PER_PT);
    content.show(Str(&encoded));
    content.end_text();
}

fn write_rule(content: &mut Content, rule: &Rule, page_height_pt: f32) {
    let y = page_height_pt - rule.y / MM_PER_PT;
    content.save_state();
    content.set_line_width(rule.width_pt);
    content.move_to(rule.x1 / MM_PER_PT, y);
    content.line_to(rule.x2 / MM_PER_PT, y);
    content.stroke();
    content.restore_state();
}

/// Encode `text` in the WinAnsi (cp1252) code page used by the standard fonts.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}
