use crate::model::category::CategoryFilter;
use crate::model::course::Course;

/// Search text plus category selection applied to a course list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl CourseFilter {
    /// A course passes when the search text is a case-insensitive substring of
    /// its code, name or description, and its category is admitted.
    pub fn matches(&self, course: &Course) -> bool {
        self.matches_search(course) && self.category.admits(course.category)
    }

    fn matches_search(&self, course: &Course) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        course.code.to_lowercase().contains(&needle)
            || course.name.to_lowercase().contains(&needle)
            || course
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, courses: impl IntoIterator<Item = &'a Course>) -> Vec<&'a Course> {
        courses.into_iter().filter(|course| self.matches(course)).collect()
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }

    pub fn reset(&mut self) {
        *self = CourseFilter::default();
    }
}
