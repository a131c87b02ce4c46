use serde::{Deserialize, Serialize};

use super::course::EnrolledCourse;
use super::{CourseId, StudentId};

/// A roster row as returned by `GET /students`.
///
/// `enrolled_courses` is a display string of course codes assembled by the
/// backend; the client never parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    #[serde(rename = "StudentID")]
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub enrolled_courses: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile plus resolved enrollments, as returned by `GET /students/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    #[serde(default)]
    pub courses: Vec<EnrolledCourse>,
}

impl StudentDetail {
    pub fn enrolled_ids(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.courses.iter().map(|enrolled| enrolled.course.id)
    }
}
