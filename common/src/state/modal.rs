use crate::model::StudentId;

/// A modal dialog bound to one student, or no dialog at all.
#[derive(Debug, Default)]
pub enum ModalState<T> {
    #[default]
    Closed,
    OpenFor(StudentId, T),
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::OpenFor(..))
    }

    pub fn student_id(&self) -> Option<StudentId> {
        match self {
            ModalState::OpenFor(id, _) => Some(*id),
            ModalState::Closed => None,
        }
    }

    /// Contents of the modal if it is open for `id`.
    pub fn for_student_mut(&mut self, id: StudentId) -> Option<&mut T> {
        match self {
            ModalState::OpenFor(open_id, contents) if *open_id == id => Some(contents),
            _ => None,
        }
    }

    pub fn contents(&self) -> Option<(StudentId, &T)> {
        match self {
            ModalState::OpenFor(id, contents) => Some((*id, contents)),
            ModalState::Closed => None,
        }
    }

    pub fn contents_mut(&mut self) -> Option<(StudentId, &mut T)> {
        match self {
            ModalState::OpenFor(id, contents) => Some((*id, contents)),
            ModalState::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}
