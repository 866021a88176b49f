//! File-backed persistence for the contact collection.
//!
//! The collection lives in a single pretty-printed JSON array. All file
//! access goes through `cap_std::fs::Dir` handles opened once at startup, and
//! writes replace the document atomically.

mod atomic_write;
mod json_file_contact_repository;

pub use json_file_contact_repository::JsonFileContactRepository;
