//! Domain DTOs for the contacts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates. The
//! remote service names the identifier `_id`, which is renamed at the serde
//! boundary so the rest of the crate deals in `id`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single contact returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Request payload for creating a new contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// In-progress values of the add-contact form.
///
/// No field is validated: the name/email/phone patterns a form may show are
/// hints only and are never enforced before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }

    pub fn to_new_contact(&self) -> NewContact {
        NewContact {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_reads_underscore_id() {
        let contact: Contact = serde_json::from_str(
            r#"{"_id":"64f1","name":"Alice","email":"a@x.com","phone":"555","__v":0}"#,
        )
        .unwrap();
        assert_eq!(contact.id, ContactId::new("64f1"));
        assert_eq!(contact.name, "Alice");
    }

    #[test]
    fn contact_writes_underscore_id() {
        let contact = Contact {
            id: ContactId::new("abc"),
            name: "Bob".to_string(),
            email: String::new(),
            phone: String::new(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["_id"], "abc");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn contact_rejects_missing_id() {
        let result: Result<Contact, _> =
            serde_json::from_str(r#"{"name":"Alice","email":"a@x.com","phone":"555"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_converts_to_payload() {
        let draft = Draft {
            name: "Carol".to_string(),
            email: "c@x.com".to_string(),
            phone: "123".to_string(),
        };
        let payload = draft.to_new_contact();
        assert_eq!(payload.name, "Carol");
        assert_eq!(payload.email, "c@x.com");
        assert_eq!(payload.phone, "123");
        assert!(!draft.is_empty());
        assert!(Draft::default().is_empty());
    }
}
