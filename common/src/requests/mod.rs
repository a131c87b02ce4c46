//! Request payloads sent to the REST backend.
//!
//! The backend reads request bodies with camelCase keys, unlike the
//! PascalCase keys it answers with. A new student's blank optional fields
//! are omitted; an update sends them as `null` so the backend clears them.

use serde::Serialize;

use crate::model::CourseId;

/// Body of `POST /students`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub course_ids: Vec<CourseId>,
}

/// Body of `PUT /students/{id}`. Every field is sent.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
}

/// Body of `POST /students/{id}/courses`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddCoursesRequest {
    pub course_ids: Vec<CourseId>,
}
