use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegistrationProps {
    /// Fired after the backend accepted a new student.
    pub on_student_added: Callback<()>,
}
