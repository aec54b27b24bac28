use std::collections::BTreeMap;

use offerdoc_core::models::Section;
use offerdoc_export::PreviewDocument;

/// The display regions the preview is written into.
///
/// A surface may offer only some of the sections. Content for a region the
/// surface lacks is logged and dropped; the other regions still update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSurface {
    regions: BTreeMap<Section, String>,
}

impl PreviewSurface {
    pub fn with_regions(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            regions: sections.into_iter().map(|s| (s, String::new())).collect(),
        }
    }

    /// A surface with a region for every section.
    pub fn full() -> Self {
        Self::with_regions(Section::ALL)
    }

    /// Replace region contents with the freshly rendered preview. Returns
    /// how many regions were updated.
    pub fn apply(&mut self, preview: &PreviewDocument) -> usize {
        let mut updated = 0;
        for (section, html) in &preview.regions {
            match self.regions.get_mut(section) {
                Some(slot) => {
                    slot.clone_from(html);
                    updated += 1;
                }
                None => {
                    tracing::warn!(region = section.id(), "preview region missing, section not displayed");
                }
            }
        }
        updated
    }

    pub fn region(&self, section: Section) -> Option<&str> {
        self.regions.get(&section).map(String::as_str)
    }

    pub fn has_region(&self, section: Section) -> bool {
        self.regions.contains_key(&section)
    }

    /// Region contents in section order.
    pub fn to_html(&self) -> String {
        self.regions.values().map(String::as_str).collect()
    }
}
