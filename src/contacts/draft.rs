use super::contact::{Contact, Field};

/// Input state of the "Add New Contact" form. Never carries an identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    contact: Contact,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        self.contact.field(field)
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        self.contact.set_field(field, value);
    }

    pub fn as_contact(&self) -> &Contact {
        &self.contact
    }

    /// Only presence of a name is required before submitting.
    pub fn is_submittable(&self) -> bool {
        !self.contact.name().trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.contact.field(*f).is_empty())
    }

    /// Hands out the drafted contact and leaves every field empty.
    pub fn take(&mut self) -> Contact {
        std::mem::take(&mut self.contact)
    }
}
