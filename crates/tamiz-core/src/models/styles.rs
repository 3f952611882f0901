use serde::{Deserialize, Serialize};

/// Supported paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Width and height in points (1/72 inch).
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Attributes of one named paragraph style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    pub bold: bool,

    /// Font size in points.
    pub size_pt: f32,

    /// RGB hex color without the leading `#` (e.g. "000080").
    pub color: String,

    pub left_indent_cm: f32,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    pub align: Alignment,

    /// Draw a thin rule under the paragraph.
    pub bottom_rule: bool,
}

const NAVY: &str = "000080";
const CRIMSON: &str = "DC143C";
const BLACK: &str = "000000";

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            bold: false,
            size_pt: 10.0,
            color: BLACK.to_string(),
            left_indent_cm: 0.0,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            align: Alignment::Left,
            bottom_rule: false,
        }
    }
}

impl ParagraphStyle {
    pub fn title() -> Self {
        Self {
            bold: true,
            size_pt: 16.0,
            color: NAVY.to_string(),
            space_after_pt: 20.0,
            align: Alignment::Center,
            ..Self::default()
        }
    }

    pub fn section_header() -> Self {
        Self {
            bold: true,
            size_pt: 12.0,
            color: NAVY.to_string(),
            space_before_pt: 12.0,
            space_after_pt: 6.0,
            bottom_rule: true,
            ..Self::default()
        }
    }

    pub fn sub_section_header() -> Self {
        Self {
            bold: true,
            size_pt: 11.0,
            color: NAVY.to_string(),
            space_before_pt: 8.0,
            space_after_pt: 4.0,
            ..Self::default()
        }
    }

    pub fn question() -> Self {
        Self {
            bold: true,
            space_before_pt: 8.0,
            ..Self::default()
        }
    }

    pub fn answer() -> Self {
        Self {
            left_indent_cm: 1.0,
            ..Self::default()
        }
    }

    pub fn result() -> Self {
        Self {
            bold: true,
            size_pt: 11.0,
            color: CRIMSON.to_string(),
            space_before_pt: 12.0,
            left_indent_cm: 1.0,
            ..Self::default()
        }
    }

    pub fn column_header() -> Self {
        Self {
            bold: true,
            size_pt: 10.0,
            color: NAVY.to_string(),
            space_after_pt: 4.0,
            ..Self::default()
        }
    }

    pub fn column_text() -> Self {
        Self {
            size_pt: 9.0,
            ..Self::default()
        }
    }
}

/// The named paragraph styles a rendering backend must support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyles {
    #[serde(default = "ParagraphStyle::title")]
    pub title: ParagraphStyle,
    #[serde(default = "ParagraphStyle::section_header")]
    pub section_header: ParagraphStyle,
    #[serde(default = "ParagraphStyle::sub_section_header")]
    pub sub_section_header: ParagraphStyle,
    #[serde(default = "ParagraphStyle::question")]
    pub question: ParagraphStyle,
    #[serde(default = "ParagraphStyle::answer")]
    pub answer: ParagraphStyle,
    #[serde(default = "ParagraphStyle::result")]
    pub result: ParagraphStyle,
    #[serde(default = "ParagraphStyle::column_header")]
    pub column_header: ParagraphStyle,
    #[serde(default = "ParagraphStyle::column_text")]
    pub column_text: ParagraphStyle,
}

impl Default for ParagraphStyles {
    fn default() -> Self {
        Self {
            title: ParagraphStyle::title(),
            section_header: ParagraphStyle::section_header(),
            sub_section_header: ParagraphStyle::sub_section_header(),
            question: ParagraphStyle::question(),
            answer: ParagraphStyle::answer(),
            result: ParagraphStyle::result(),
            column_header: ParagraphStyle::column_header(),
            column_text: ParagraphStyle::column_text(),
        }
    }
}

/// Document styling configuration, read from the schema's `styles` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Text drawn at the top-left of every page.
    pub header_text: String,

    /// Title of the answer transcript.
    pub report_title: String,

    /// Title of the results page.
    pub results_title: String,

    pub page_size: PageSize,

    /// Page margin in centimeters (applied uniformly).
    pub margin_cm: f32,

    pub body_font: String,

    /// Font size of the running header and footer, in points.
    pub decoration_size_pt: f32,

    pub paragraphs: ParagraphStyles,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            header_text: "Reporte".to_string(),
            report_title: "CÉDULA DE TAMIZAJE UNIVERSITARIO".to_string(),
            results_title: "Resultados de Tamizajes".to_string(),
            page_size: PageSize::Letter,
            margin_cm: 2.5,
            body_font: "Helvetica".to_string(),
            decoration_size_pt: 8.0,
            paragraphs: ParagraphStyles::default(),
        }
    }
}
