use super::contact::{Contact, ContactId, Field};

/// At most one contact is edited at a time. The working copy is a
/// detached clone; typing into it never touches the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(Contact),
}

impl EditSession {
    /// Starts editing `contact`, silently dropping any previous working copy.
    pub fn start(&mut self, contact: &Contact) {
        *self = EditSession::Editing(contact.clone());
    }

    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn working_copy(&self) -> Option<&Contact> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(c) => Some(c),
        }
    }

    pub fn editing_id(&self) -> Option<&ContactId> {
        self.working_copy().and_then(|c| c.id())
    }

    pub fn is_editing(&self, id: &ContactId) -> bool {
        self.editing_id() == Some(id)
    }

    /// Returns false when idle, nothing to update then.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        match self {
            EditSession::Idle => false,
            EditSession::Editing(c) => {
                c.set_field(field, value);
                true
            }
        }
    }
}
