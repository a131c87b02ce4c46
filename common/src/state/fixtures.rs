use crate::model::category::Category;
use crate::model::course::{Course, EnrolledCourse};
use crate::model::student::{Student, StudentDetail};
use crate::model::{CourseId, StudentId};

pub fn student(id: StudentId, first_name: &str, last_name: &str) -> Student {
    Student {
        id,
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: format!("{}@x.com", first_name.to_lowercase()),
        phone_number: None,
        date_of_birth: Some("2000-03-04T00:00:00.000Z".into()),
        address: None,
        created_at: Some("2024-01-05T10:00:00.000Z".into()),
        enrolled_courses: None,
    }
}

pub fn course(id: CourseId, code: &str, category: Category) -> Course {
    Course {
        id,
        code: code.into(),
        name: format!("{} course", code),
        description: None,
        credits: Some(3),
        category: Some(category),
    }
}

pub fn catalog() -> Vec<Course> {
    vec![
        course(10, "IT101", Category::It),
        course(11, "IT102", Category::It),
        course(12, "MATH201", Category::Mathematics),
        course(13, "SCI110", Category::Science),
    ]
}

pub fn detail(id: StudentId, enrolled: &[CourseId]) -> StudentDetail {
    let catalog = catalog();
    StudentDetail {
        student: student(id, "Alan", "Turing"),
        courses: enrolled
            .iter()
            .filter_map(|course_id| catalog.iter().find(|c| c.id == *course_id))
            .map(|course| EnrolledCourse {
                course: course.clone(),
                enrollment_date: Some("2024-02-01".into()),
            })
            .collect(),
    }
}
