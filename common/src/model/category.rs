use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tag of a course.
///
/// The backend stores categories as free labels; the client only knows this
/// closed set. Unknown labels decode to [`Category::General`], the catch-all
/// bucket that is rendered with the neutral badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    It,
    Mathematics,
    Science,
    LanguageAndCommunication,
    SocialSciences,
    General,
}

impl Category {
    /// Every category in the order the filter chips are shown.
    pub const ALL: [Category; 6] = [
        Category::It,
        Category::Mathematics,
        Category::Science,
        Category::LanguageAndCommunication,
        Category::SocialSciences,
        Category::General,
    ];

    /// Wire and display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::It => "IT",
            Category::Mathematics => "Mathematics",
            Category::Science => "Science",
            Category::LanguageAndCommunication => "Language & Communication",
            Category::SocialSciences => "Social Sciences",
            Category::General => "General",
        }
    }

    /// CSS modifier used for the coloured badge on course cards.
    pub fn badge_class(self) -> &'static str {
        match self {
            Category::It => "badge-it",
            Category::Mathematics => "badge-math",
            Category::Science => "badge-science",
            Category::LanguageAndCommunication => "badge-language",
            Category::SocialSciences => "badge-social",
            Category::General => "badge-general",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(label.trim()).unwrap_or(Category::General)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection of a course filter. `All` never excludes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The chips offered by the UI: `All` followed by every category.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, category: Option<Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted),
        }
    }
}
