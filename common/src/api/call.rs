use serde_json::Value;
use std::fmt;

use crate::model::{CourseId, StudentId};
use crate::requests::{AddCoursesRequest, CreateStudentRequest, UpdateStudentRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// One request against the backend, one variant per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListStudents,
    GetStudent(StudentId),
    CreateStudent(CreateStudentRequest),
    UpdateStudent(StudentId, UpdateStudentRequest),
    DeleteStudent(StudentId),
    ListCourses,
    AddCourses(StudentId, AddCoursesRequest),
    RemoveCourse {
        student_id: StudentId,
        course_id: CourseId,
    },
}

impl ApiCall {
    pub fn method(&self) -> Method {
        match self {
            ApiCall::ListStudents | ApiCall::GetStudent(_) | ApiCall::ListCourses => Method::Get,
            ApiCall::CreateStudent(_) | ApiCall::AddCourses(..) => Method::Post,
            ApiCall::UpdateStudent(..) => Method::Put,
            ApiCall::DeleteStudent(_) | ApiCall::RemoveCourse { .. } => Method::Delete,
        }
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            ApiCall::ListStudents | ApiCall::CreateStudent(_) => "/students".to_string(),
            ApiCall::GetStudent(id) | ApiCall::UpdateStudent(id, _) | ApiCall::DeleteStudent(id) => {
                format!("/students/{}", id)
            }
            ApiCall::ListCourses => "/courses".to_string(),
            ApiCall::AddCourses(id, _) => format!("/students/{}/courses", id),
            ApiCall::RemoveCourse {
                student_id,
                course_id,
            } => format!("/students/{}/courses/{}", student_id, course_id),
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// JSON body, if the endpoint takes one.
    pub fn body(&self) -> Option<Value> {
        let encoded = match self {
            ApiCall::CreateStudent(request) => serde_json::to_value(request),
            ApiCall::UpdateStudent(_, request) => serde_json::to_value(request),
            ApiCall::AddCourses(_, request) => serde_json::to_value(request),
            _ => return None,
        };
        // Plain structs of strings and integers always encode.
        encoded.ok()
    }
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ApiCall::ListStudents, "GET /students")]
    #[case(ApiCall::GetStudent(7), "GET /students/7")]
    #[case(ApiCall::DeleteStudent(3), "DELETE /students/3")]
    #[case(ApiCall::ListCourses, "GET /courses")]
    #[case(ApiCall::AddCourses(5, AddCoursesRequest { course_ids: vec![10, 11] }), "POST /students/5/courses")]
    #[case(ApiCall::RemoveCourse { student_id: 5, course_id: 10 }, "DELETE /students/5/courses/10")]
    fn routes_match_backend_contract(#[case] call: ApiCall, #[case] expected: &str) {
        assert_eq!(call.to_string(), expected);
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        assert_eq!(
            ApiCall::GetStudent(7).url("http://localhost:5000/api/"),
            "http://localhost:5000/api/students/7"
        );
    }

    #[test]
    fn reads_and_deletes_have_no_body() {
        assert_eq!(ApiCall::ListStudents.body(), None);
        assert_eq!(ApiCall::DeleteStudent(1).body(), None);
    }

    #[test]
    fn add_courses_body_lists_ids() {
        let call = ApiCall::AddCourses(5, AddCoursesRequest { course_ids: vec![10, 11] });
        assert_eq!(call.body(), Some(json!({ "courseIds": [10, 11] })));
    }
}
