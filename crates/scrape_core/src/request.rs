/// One of the built-in element families that can be extracted without a
/// custom tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Headings,
    Paragraphs,
    Links,
    Images,
}

impl Category {
    /// Every category, in the order their sections appear in a report.
    pub const ALL: [Category; 4] = [
        Category::Headings,
        Category::Paragraphs,
        Category::Links,
        Category::Images,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Headings => "Headings",
            Category::Paragraphs => "Paragraphs",
            Category::Links => "Links",
            Category::Images => "Images",
        }
    }
}

/// Independently settable category switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFlags {
    pub headings: bool,
    pub paragraphs: bool,
    pub links: bool,
    pub images: bool,
}

impl CategoryFlags {
    pub fn all() -> Self {
        Self {
            headings: true,
            paragraphs: true,
            links: true,
            images: true,
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Headings => self.headings,
            Category::Paragraphs => self.paragraphs,
            Category::Links => self.links,
            Category::Images => self.images,
        }
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Headings => self.headings = enabled,
            Category::Paragraphs => self.paragraphs = enabled,
            Category::Links => self.links = enabled,
            Category::Images => self.images = enabled,
        }
    }

    pub fn any(&self) -> bool {
        Category::ALL.iter().any(|category| self.is_enabled(*category))
    }

    /// Enabled categories in report order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.is_enabled(*category))
    }
}

/// What to pull out of every fetched page.
///
/// A custom tag always wins over the category flags; the two never apply
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionRequest {
    /// Every element whose tag name equals this string exactly.
    Tag(String),
    /// The built-in categories that are switched on.
    Categories(CategoryFlags),
}

impl ExtractionRequest {
    /// Builds a request from raw form inputs. The tag is trimmed; an empty
    /// tag falls back to the flags.
    pub fn from_inputs(tag: &str, flags: CategoryFlags) -> Self {
        let tag = tag.trim();
        if tag.is_empty() {
            ExtractionRequest::Categories(flags)
        } else {
            ExtractionRequest::Tag(tag.to_string())
        }
    }
}

impl Default for ExtractionRequest {
    fn default() -> Self {
        ExtractionRequest::Categories(CategoryFlags::default())
    }
}

/// A full run: cleaned URLs in input order plus the extraction to apply to
/// each page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub urls: Vec<String>,
    pub extraction: ExtractionRequest,
}

impl BatchRequest {
    /// Builds a batch from the raw URL text and raw tag text.
    pub fn from_inputs(raw_urls: &str, tag: &str, flags: CategoryFlags) -> Self {
        Self {
            urls: crate::parse_urls(raw_urls),
            extraction: ExtractionRequest::from_inputs(tag, flags),
        }
    }
}
