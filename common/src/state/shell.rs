//! Top-level container state: the active tab and the cached roster.

use crate::api::{ApiCall, ApiError};
use crate::model::student::Student;

use super::Effect;

const ROSTER_FAILED: &str = "Failed to fetch students. Make sure the backend server is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Register,
    List,
}

#[derive(Debug, Default)]
pub struct ShellState {
    pub active_tab: Tab,
    pub students: Vec<Student>,
    pub loading: bool,
    /// Message of the last failed roster fetch, cleared by the next success.
    pub roster_error: Option<String>,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches tabs. Entering the list tab fetches the roster.
    pub fn select_tab(&mut self, tab: Tab) -> Vec<Effect> {
        if self.active_tab == tab {
            return Vec::new();
        }
        self.active_tab = tab;
        match tab {
            Tab::List => self.refresh(),
            Tab::Register => Vec::new(),
        }
    }

    /// Called by the registration form after a successful create.
    pub fn student_added(&mut self) -> Vec<Effect> {
        self.active_tab = Tab::List;
        self.refresh()
    }

    /// Re-fetches the roster; also the roster view's update callback.
    pub fn refresh(&mut self) -> Vec<Effect> {
        self.loading = true;
        vec![Effect::Call(ApiCall::ListStudents)]
    }

    pub fn roster_loaded(&mut self, result: Result<Vec<Student>, ApiError>) -> Vec<Effect> {
        self.loading = false;
        match result {
            Ok(students) => {
                self.students = students;
                self.roster_error = None;
                Vec::new()
            }
            Err(err) => {
                self.roster_error = Some(err.user_message(ROSTER_FAILED));
                vec![Effect::Alert(ROSTER_FAILED.to_string())]
            }
        }
    }
}
