use crate::model::CourseId;

/// Course ids picked by the user, in the order they were picked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseSelection {
    ids: Vec<CourseId>,
}

impl CourseSelection {
    pub fn toggle(&mut self, id: CourseId) {
        match self.ids.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id),
        }
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[CourseId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
