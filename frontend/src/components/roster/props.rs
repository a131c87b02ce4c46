use common::model::student::Student;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RosterProps {
    pub students: Vec<Student>,
    /// The shell's roster request is in flight.
    pub loading: bool,
    /// Message of the last failed roster request.
    #[prop_or_default]
    pub error: Option<String>,
    /// Asks the shell to reload the roster after a mutation.
    pub on_update: Callback<()>,
}
