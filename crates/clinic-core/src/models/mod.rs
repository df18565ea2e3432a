//! Domain models for the clinic book.

mod appointment;
mod event;
mod fields;
mod medical_history;
mod patient;
mod prefs;

pub use appointment::*;
pub use event::*;
pub use fields::*;
pub use medical_history::*;
pub use patient::*;
pub use prefs::*;
