//! Editable student fields and the client-side required-field check.

use thiserror::Error;

use crate::dates;
use crate::model::student::Student;
use crate::model::CourseId;
use crate::requests::{CreateStudentRequest, UpdateStudentRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First Name, Last Name, and Email are required fields.")]
    MissingRequired,
}

/// One input of the student form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    DateOfBirth,
    Address,
}

/// Raw text of the student form, as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub address: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl StudentForm {
    /// Pre-fills the form from a roster row; dates are cut to `YYYY-MM-DD`.
    pub fn from_student(student: &Student) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            phone_number: student.phone_number.clone().unwrap_or_default(),
            date_of_birth: dates::date_only(student.date_of_birth.as_deref()),
            address: student.address.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::PhoneNumber => &self.phone_number,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::DateOfBirth => &mut self.date_of_birth,
            FormField::Address => &mut self.address,
        };
        *slot = value;
    }

    /// Rejects the form iff first name, last name or email is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.first_name, &self.last_name, &self.email];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(ValidationError::MissingRequired);
        }
        Ok(())
    }

    pub fn to_create_request(&self, course_ids: Vec<CourseId>) -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: optional(&self.phone_number),
            date_of_birth: optional(&self.date_of_birth),
            address: optional(&self.address),
            course_ids,
        }
    }

    pub fn to_update_request(&self) -> UpdateStudentRequest {
        UpdateStudentRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: optional(&self.phone_number),
            date_of_birth: optional(&self.date_of_birth),
            address: optional(&self.address),
        }
    }
}
