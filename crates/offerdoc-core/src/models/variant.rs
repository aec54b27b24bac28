use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::slug;

/// The two configurations of the offer template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TemplateVariant {
    /// Generic business document, English labels.
    #[default]
    Generic,
    /// Italian freight transport offer.
    FreightOffer,
}

/// Display regions of a document, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Header,
    Counterparty,
    Item,
    Terms,
    Closing,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Header,
        Section::Counterparty,
        Section::Item,
        Section::Terms,
        Section::Closing,
    ];

    /// Stable identifier used for preview regions and template names.
    pub fn id(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Counterparty => "counterparty",
            Section::Item => "item",
            Section::Terms => "terms",
            Section::Closing => "closing",
        }
    }
}

/// How a field is placed in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Emphasised single line (company name, document title).
    Title,
    /// Unlabelled single line (address blocks).
    Address,
    /// `Label: value` single line.
    Line,
    /// Long-form text, word-wrapped.
    Paragraph,
    /// `Label: value` in the header metadata block.
    Meta,
    /// Like `Meta`, with ISO dates shown in the fixed `dd/mm/yyyy` format.
    Date,
    /// Signature block on the last page.
    Signature,
    /// Small print under the signature block.
    Footer,
}

impl FieldKind {
    pub fn is_labelled(self) -> bool {
        matches!(
            self,
            FieldKind::Line | FieldKind::Paragraph | FieldKind::Meta | FieldKind::Date
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub section: Section,
    /// Heading printed above the section; empty for none.
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl SectionSpec {
    pub fn fields_of(&self, kind: FieldKind) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |f| f.kind == kind)
    }
}

static GENERIC_SECTIONS: [SectionSpec; 5] = [
    SectionSpec {
        section: Section::Header,
        title: "",
        fields: &[
            field("company_name", "Company", FieldKind::Title),
            field("company_address", "Address", FieldKind::Address),
            field("company_city", "City", FieldKind::Address),
            field("company_vat", "VAT number", FieldKind::Address),
            field("company_email", "Email", FieldKind::Address),
            field("company_phone", "Phone", FieldKind::Address),
            field("reference", "Reference", FieldKind::Meta),
            field("date", "Date", FieldKind::Date),
            field("validity", "Valid until", FieldKind::Date),
        ],
    },
    SectionSpec {
        section: Section::Counterparty,
        title: "To",
        fields: &[
            field("recipient", "Recipient", FieldKind::Address),
            field("recipient_address", "Address", FieldKind::Address),
            field("recipient_city", "City", FieldKind::Address),
            field("recipient_contact", "Attention of", FieldKind::Line),
            field("recipient_email", "Email", FieldKind::Line),
        ],
    },
    SectionSpec {
        section: Section::Item,
        title: "",
        fields: &[
            field("title", "Title", FieldKind::Title),
            field("subject", "Subject", FieldKind::Line),
            field("content", "Description", FieldKind::Paragraph),
        ],
    },
    SectionSpec {
        section: Section::Terms,
        title: "Terms",
        fields: &[
            field("price", "Price", FieldKind::Line),
            field("payment_terms", "Payment", FieldKind::Paragraph),
            field("delivery_terms", "Delivery", FieldKind::Paragraph),
            field("notes", "Notes", FieldKind::Paragraph),
        ],
    },
    SectionSpec {
        section: Section::Closing,
        title: "",
        fields: &[
            field("closing_text", "Closing", FieldKind::Paragraph),
            field("signature_name", "Signed", FieldKind::Signature),
            field("signature_role", "Role", FieldKind::Signature),
            field("footer_note", "Footer", FieldKind::Footer),
        ],
    },
];

static FREIGHT_SECTIONS: [SectionSpec; 5] = [
    SectionSpec {
        section: Section::Header,
        title: "",
        fields: &[
            field("company_name", "Azienda", FieldKind::Title),
            field("company_address", "Indirizzo", FieldKind::Address),
            field("company_city", "Città", FieldKind::Address),
            field("company_vat", "P.IVA", FieldKind::Address),
            field("company_email", "Email", FieldKind::Address),
            field("company_phone", "Telefono", FieldKind::Address),
            field("reference", "Offerta n.", FieldKind::Meta),
            field("date", "Data", FieldKind::Date),
            field("validity", "Valida fino al", FieldKind::Date),
        ],
    },
    SectionSpec {
        section: Section::Counterparty,
        title: "Spett.le",
        fields: &[
            field("client_name", "Cliente", FieldKind::Address),
            field("client_address", "Indirizzo", FieldKind::Address),
            field("client_city", "Città", FieldKind::Address),
            field("client_contact", "Alla c.a.", FieldKind::Line),
            field("client_email", "Email", FieldKind::Line),
        ],
    },
    SectionSpec {
        section: Section::Item,
        title: "Dettagli del trasporto",
        fields: &[
            field("subject", "Oggetto", FieldKind::Title),
            field("origin", "Luogo di carico", FieldKind::Line),
            field("destination", "Luogo di scarico", FieldKind::Line),
            field("loading_date", "Data di carico", FieldKind::Line),
            field("goods", "Merce", FieldKind::Line),
            field("weight", "Peso", FieldKind::Line),
            field("volume", "Volume", FieldKind::Line),
            field("vehicle", "Mezzo", FieldKind::Line),
            field("service_description", "Descrizione del servizio", FieldKind::Paragraph),
        ],
    },
    SectionSpec {
        section: Section::Terms,
        title: "Condizioni",
        fields: &[
            field("price", "Prezzo", FieldKind::Line),
            field("price_includes", "Il prezzo include", FieldKind::Paragraph),
            field("payment_terms", "Pagamento", FieldKind::Paragraph),
            field("insurance", "Assicurazione", FieldKind::Paragraph),
            field("notes", "Note", FieldKind::Paragraph),
        ],
    },
    SectionSpec {
        section: Section::Closing,
        title: "",
        fields: &[
            field("closing_text", "Chiusura", FieldKind::Paragraph),
            field("signature_name", "Firma", FieldKind::Signature),
            field("signature_role", "Ruolo", FieldKind::Signature),
            field("footer_note", "Piè di pagina", FieldKind::Footer),
        ],
    },
];

impl TemplateVariant {
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            "generic" => Ok(TemplateVariant::Generic),
            "freight_offer" | "freight" | "offerta" => Ok(TemplateVariant::FreightOffer),
            other => Err(CoreError::UnknownVariant(other.to_string())),
        }
    }

    pub fn sections(self) -> &'static [SectionSpec] {
        match self {
            TemplateVariant::Generic => &GENERIC_SECTIONS,
            TemplateVariant::FreightOffer => &FREIGHT_SECTIONS,
        }
    }

    pub fn section(self, section: Section) -> &'static SectionSpec {
        // Both catalogues list every section in `Section::ALL` order.
        &self.sections()[section as usize]
    }

    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.sections()
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }

    /// Fixed heading printed at the top of the document, if the variant has one.
    pub fn document_heading(self) -> Option<&'static str> {
        match self {
            TemplateVariant::Generic => None,
            TemplateVariant::FreightOffer => Some("OFFERTA DI TRASPORTO"),
        }
    }

    /// Field whose slug names the downloaded file.
    pub fn identifying_field(self) -> &'static str {
        match self {
            TemplateVariant::Generic => "title",
            TemplateVariant::FreightOffer => "reference",
        }
    }

    pub fn filename(self, identifier: &str) -> String {
        let mut base = slug::slugify(identifier);
        if base.is_empty() {
            base = slug::FALLBACK_SLUG.to_string();
        }
        match self {
            TemplateVariant::Generic => format!("{base}-document.pdf"),
            TemplateVariant::FreightOffer => format!("offerta-{base}.pdf"),
        }
    }

    pub fn export_label(self) -> &'static str {
        match self {
            TemplateVariant::Generic => "Download PDF",
            TemplateVariant::FreightOffer => "Scarica PDF",
        }
    }

    pub fn unavailable_label(self) -> &'static str {
        match self {
            TemplateVariant::Generic => "PDF export unavailable",
            TemplateVariant::FreightOffer => "Esportazione PDF non disponibile",
        }
    }

    pub fn unavailable_notice(self) -> &'static str {
        match self {
            TemplateVariant::Generic => {
                "The PDF library could not be loaded. The document cannot be exported."
            }
            TemplateVariant::FreightOffer => {
                "La libreria PDF non è stata caricata. Impossibile esportare l'offerta."
            }
        }
    }
}
