//! Contact data model.
//!
//! A [`Contact`] is the only entity the service manages. Stored records are
//! taken as they are found in the document; [`PersonName`] and
//! [`EmailAddress`] validate incoming payloads only.

mod renumber;

pub use renumber::{remove_and_renumber, shift_ids_after_delete};

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Validation errors raised by the contact newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    /// Contact ids start at one.
    #[error("contact id must be a positive integer")]
    NonPositiveId,
    /// The collection is too large to allocate another id.
    #[error("contact id space is exhausted")]
    IdSpaceExhausted,
    /// First and last names must contain visible characters.
    #[error("name must not be empty")]
    EmptyName,
    /// Email must look like `local@domain.tld`.
    #[error("email must look like local@domain.tld")]
    InvalidEmail,
}

/// Dense, 1-based contact identifier.
///
/// Ids equal the contact's position in the collection as long as every
/// mutation goes through the service: creation appends `len + 1`, deletion
/// renumbers the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u32);

impl ContactId {
    /// Validate and wrap a raw identifier.
    pub fn new(value: u32) -> Result<Self, ContactValidationError> {
        if value == 0 {
            return Err(ContactValidationError::NonPositiveId);
        }
        Ok(Self(value))
    }

    /// Id assigned to a contact appended to a collection of `len` records.
    ///
    /// # Examples
    /// ```
    /// use contacts_backend::domain::ContactId;
    ///
    /// let id = ContactId::next_for_len(2).expect("id available");
    /// assert_eq!(id.get(), 3);
    /// ```
    pub fn next_for_len(len: usize) -> Result<Self, ContactValidationError> {
        u32::try_from(len)
            .ok()
            .and_then(|count| count.checked_add(1))
            .map(Self)
            .ok_or(ContactValidationError::IdSpaceExhausted)
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for ContactId {
    type Error = ContactValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactId> for u32 {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

/// First or last name supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a name, trimming surrounding whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ContactValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl TryFrom<String> for PersonName {
    type Error = ContactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One @, no whitespace, a dot in the domain part.
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Client-supplied email address in `local@domain.tld` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an email address.
    ///
    /// # Examples
    /// ```
    /// use contacts_backend::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("ada@example.org").is_ok());
    /// assert!(EmailAddress::new("ada@example").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, ContactValidationError> {
        let email = email.into();
        let trimmed = email.trim();
        if !email_regex().is_match(trimmed) {
            return Err(ContactValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ContactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// A stored contact record.
///
/// Serialises as `{ "id", "firstName", "lastName", "email" }`, which is both
/// the persisted document shape and the HTTP response shape. Fields are kept
/// byte for byte as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: u32,
    first_name: String,
    last_name: String,
    email: String,
}

impl Contact {
    /// Build a contact from validated components.
    #[must_use]
    pub fn new(
        id: ContactId,
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
    ) -> Self {
        Self::from_parts(id.get(), first_name, last_name, email)
    }

    /// Build a contact from raw stored parts without validating them.
    #[must_use]
    pub fn from_parts(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Identifier, equal to the 1-based position in a dense collection.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether this record carries `id`.
    #[must_use]
    pub fn has_id(&self, id: ContactId) -> bool {
        self.id == id.get()
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Shallow merge: fields present in `patch` replace the stored ones.
    ///
    /// The id never changes.
    pub fn apply(&mut self, patch: ContactPatch) {
        let ContactPatch {
            first_name,
            last_name,
            email,
        } = patch;
        if let Some(first_name) = first_name {
            self.first_name = first_name.into();
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name.into();
        }
        if let Some(email) = email {
            self.email = email.into();
        }
    }

    pub(crate) fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Payload for creating a contact; every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// First name.
    pub first_name: PersonName,
    /// Last name.
    pub last_name: PersonName,
    /// Email address.
    pub email: EmailAddress,
}

impl NewContact {
    /// Attach the allocated id.
    #[must_use]
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact::new(id, self.first_name, self.last_name, self.email)
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    /// Replacement first name.
    pub first_name: Option<PersonName>,
    /// Replacement last name.
    pub last_name: Option<PersonName>,
    /// Replacement email address.
    pub email: Option<EmailAddress>,
}
