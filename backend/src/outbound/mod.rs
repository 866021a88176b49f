//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: the JSON document store behind
//!   [`crate::domain::ports::ContactRepository`].
//!
//! Adapters translate between domain types and storage representations. They
//! contain no business logic.

pub mod persistence;
