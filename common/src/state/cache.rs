use std::collections::HashMap;

use crate::model::student::StudentDetail;
use crate::model::StudentId;

/// Student details fetched by the roster view, keyed by student id.
///
/// Entries live until the roster view is dropped or the student is mutated.
/// Every invalidation bumps the student's generation, so a reply to a request
/// issued before the mutation can be recognised and dropped.
#[derive(Debug, Default)]
pub struct DetailCache {
    entries: HashMap<StudentId, StudentDetail>,
    generations: HashMap<StudentId, u64>,
}

impl DetailCache {
    pub fn get(&self, id: StudentId) -> Option<&StudentDetail> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Generation a detail request issued now is tagged with.
    pub fn generation(&self, id: StudentId) -> u64 {
        self.generations.get(&id).copied().unwrap_or_default()
    }

    /// Stores `detail` unless it was requested before the last invalidation.
    /// Returns whether it was stored.
    pub fn insert(&mut self, generation: u64, detail: StudentDetail) -> bool {
        let id = detail.student.id;
        if generation != self.generation(id) {
            return false;
        }
        self.entries.insert(id, detail);
        true
    }

    pub fn invalidate(&mut self, id: StudentId) -> Option<StudentDetail> {
        *self.generations.entry(id).or_default() += 1;
        self.entries.remove(&id)
    }
}
