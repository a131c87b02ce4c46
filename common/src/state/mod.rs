//! View-state machines for the three screens of the app.
//!
//! Each transition mutates local state and returns the [`Effect`]s the view
//! layer must carry out, in order. Nothing here performs I/O.

mod cache;
mod effect;
mod modal;
mod selection;
pub mod registration;
pub mod roster;
pub mod shell;

pub use cache::DetailCache;
pub use effect::Effect;
pub use modal::ModalState;
pub use selection::CourseSelection;

#[cfg(test)]
pub(crate) mod fixtures;
