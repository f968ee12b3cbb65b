use std::ops::Deref;
use log::debug;

use super::contact::{Contact, ContactId};

/// Last known server state of the collection, in server/arrival order.
///
/// The store only changes after the remote side confirmed an operation;
/// each method below applies one confirmed result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.has_id(id))
    }

    /// Finds the entry a typed-in id refers to. An exact match wins,
    /// otherwise any entry whose id prints the same, so `1` also finds a
    /// server-issued `"1"`.
    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.get(id).or_else(|| {
            let text = id.to_string();
            self.contacts.iter().find(|c| {
                c.id().is_some_and(|v| v.to_string() == text)
            })
        })
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.has_id(id))
    }

    /// Result of `list`: replaces everything, keeping the server's order.
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        debug!("Store reloaded with {} contacts", contacts.len());
        self.contacts = contacts;
    }

    /// Result of `create`: the new contact goes to the end.
    pub fn append(&mut self, contact: Contact) {
        debug!("Store appended contact {}", contact);
        self.contacts.push(contact);
    }

    /// Result of `replace`: swaps the entry in place. Returns false and
    /// leaves the store untouched when no entry has `id`.
    pub fn replace(&mut self, id: &ContactId, contact: Contact) -> bool {
        match self.position(id) {
            Some(pos) => {
                debug!("Store replaced contact {} at {}", id, pos);
                self.contacts[pos] = contact;
                true
            }
            None => false,
        }
    }

    /// Result of `delete`: drops the entry with `id`, others keep their
    /// relative order. Returns false when no entry has `id`.
    pub fn remove(&mut self, id: &ContactId) -> bool {
        match self.position(id) {
            Some(pos) => {
                debug!("Store removed contact {} at {}", id, pos);
                self.contacts.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Deref for ContactStore {
    type Target = [Contact];

    fn deref(&self) -> &Self::Target {
        &self.contacts
    }
}

impl From<Vec<Contact>> for ContactStore {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}
