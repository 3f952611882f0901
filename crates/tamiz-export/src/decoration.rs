use std::fmt;

/// Placeholder a decoration uses for the page number when the backend
/// resolves it at display time rather than at render time.
pub const PAGE_FIELD: &str = "{PAGE}";

/// The page a decoration is being drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    /// A laid-out page with a known 1-based number.
    Page(usize),
    /// The backend lets the viewer paginate; the number is a field.
    Running,
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageNumber::Page(n) => write!(f, "{n}"),
            PageNumber::Running => f.write_str(PAGE_FIELD),
        }
    }
}

/// Text drawn at fixed positions on one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageDecoration {
    pub header_left: String,
    pub header_right: String,
    pub footer_right: String,
}

/// Per-page hook invoked by a rendering backend once for every page.
pub trait PageDecorator {
    fn decorate(&self, page: PageNumber) -> PageDecoration;
}

/// Header and footer identifying the subject on every page.
#[derive(Debug, Clone)]
pub struct SubjectBanner {
    pub header_text: String,
    pub subject_name: String,
    pub subject_id: String,
}

impl SubjectBanner {
    pub fn new(
        header_text: impl Into<String>,
        subject_name: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            header_text: header_text.into(),
            subject_name: subject_name.into(),
            subject_id: subject_id.into(),
        }
    }
}

impl PageDecorator for SubjectBanner {
    fn decorate(&self, page: PageNumber) -> PageDecoration {
        PageDecoration {
            header_left: self.header_text.clone(),
            header_right: format!("{} ({})", self.subject_name, self.subject_id),
            footer_right: format!("Página {page}"),
        }
    }
}
