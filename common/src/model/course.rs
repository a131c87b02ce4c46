use serde::{Deserialize, Serialize};

use super::category::Category;
use super::CourseId;

/// A catalog entry as returned by `GET /courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "CourseID")]
    pub id: CourseId,
    #[serde(rename = "CourseCode")]
    pub code: String,
    #[serde(rename = "CourseName")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Credits", default)]
    pub credits: Option<u32>,
    #[serde(rename = "Category", default)]
    pub category: Option<Category>,
}

/// A course joined with the enrollment record of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    #[serde(flatten)]
    pub course: Course,
    #[serde(rename = "EnrollmentDate", default)]
    pub enrollment_date: Option<String>,
}
