//! Persisted schedule notes
//!
//! A flat JSON object mapping `"<date>_<time>"` to a free-text description,
//! loaded once and rewritten in full on every insert.

mod store;

pub(crate) use store::NoteStore;
