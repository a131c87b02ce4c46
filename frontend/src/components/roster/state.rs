use common::model::student::Student;
use common::model::StudentId;
use common::state::roster::RosterState;

pub struct RosterView {
    pub state: RosterState,
}

impl RosterView {
    pub fn new() -> Self {
        Self {
            state: RosterState::new(),
        }
    }
}

/// Looks a roster row up by id.
pub fn find_student(students: &[Student], id: StudentId) -> Option<&Student> {
    students.iter().find(|student| student.id == id)
}
