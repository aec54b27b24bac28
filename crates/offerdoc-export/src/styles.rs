use serde::{Deserialize, Serialize};

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Layout constants for exported documents.
///
/// Lengths are millimetres measured from the top-left corner of the page,
/// font sizes are points. Line advances are fixed constants, not measured
/// from rendered glyphs, so visual spacing is tuned here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page width (A4 portrait by default).
    pub page_width_mm: f32,

    pub page_height_mm: f32,

    /// Margin applied to all four sides.
    pub margin_mm: f32,

    /// Company name and document title.
    pub title_size_pt: f32,

    /// Section headings.
    pub heading_size_pt: f32,

    pub body_size_pt: f32,

    /// Company identity lines and footer notes.
    pub small_size_pt: f32,

    pub title_line_height_mm: f32,

    pub line_height_mm: f32,

    /// Advance for small-print lines.
    pub note_line_height_mm: f32,

    /// Extra space after a paragraph.
    pub paragraph_gap_mm: f32,

    /// Extra space after a section.
    pub section_gap_mm: f32,

    /// Width of the right-aligned metadata block in the header.
    pub meta_block_width_mm: f32,

    /// Space between the company block and the metadata block.
    pub header_gutter_mm: f32,

    /// Height reserved above the bottom margin for signature and footer.
    pub signature_block_height_mm: f32,

    /// Distance from the top of the signature block to the signature rule.
    pub signature_rule_offset_mm: f32,

    pub signature_width_mm: f32,

    /// Stroke width of horizontal rules, in points.
    pub rule_width_pt: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            title_size_pt: 18.0,
            heading_size_pt: 12.0,
            body_size_pt: 10.0,
            small_size_pt: 8.0,
            title_line_height_mm: 8.0,
            line_height_mm: 5.0,
            note_line_height_mm: 4.0,
            paragraph_gap_mm: 2.0,
            section_gap_mm: 6.0,
            meta_block_width_mm: 70.0,
            header_gutter_mm: 6.0,
            signature_block_height_mm: 30.0,
            signature_rule_offset_mm: 12.0,
            signature_width_mm: 70.0,
            rule_width_pt: 0.5,
        }
    }
}

impl LayoutConfig {
    /// Page width minus both margins.
    pub fn usable_width(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Lowest y a line may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }

    pub fn usable_height(&self) -> f32 {
        self.bottom_limit() - self.margin_mm
    }

    /// Top of the signature/footer area on the final page.
    pub fn signature_top(&self) -> f32 {
        self.bottom_limit() - self.signature_block_height_mm
    }

    pub fn right_edge(&self) -> f32 {
        self.page_width_mm - self.margin_mm
    }

    /// Width available to the company block beside the metadata block.
    pub fn identity_block_width(&self) -> f32 {
        (self.usable_width() - self.meta_block_width_mm - self.header_gutter_mm).max(0.0)
    }
}
