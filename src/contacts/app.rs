use std::collections::HashMap;
use log::{debug, error, info, warn};

use super::{
    contact::{ContactId, Field},
    draft::Draft,
    edit_session::EditSession,
    request::{Operation, Outcome, Request, RequestId, Response},
    store::ContactStore,
};

/// User input events coming from the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Asks for the current view again, changes nothing.
    ShowContacts,
    DraftChanged(Field, String),
    AddContact,
    StartEditing(ContactId),
    EditChanged(Field, String),
    UpdateContact,
    CancelEditing,
    DeleteContact(ContactId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Intent(Intent),
    Response(Response),
}

impl From<Intent> for Message {
    fn from(intent: Intent) -> Self {
        Message::Intent(intent)
    }
}

impl From<Response> for Message {
    fn from(rsp: Response) -> Self {
        Message::Response(rsp)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Pending {
    List,
    Create,
    Replace(ContactId),
    Delete(ContactId),
}

impl Pending {
    fn of(op: &Operation) -> Self {
        match op {
            Operation::List => Pending::List,
            Operation::Create(_) => Pending::Create,
            Operation::Replace(id, _) => Pending::Replace(id.clone()),
            Operation::Delete(id) => Pending::Delete(id.clone()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Pending::List       => "fetching",
            Pending::Create     => "adding",
            Pending::Replace(_) => "updating",
            Pending::Delete(_)  => "deleting",
        }
    }
}

/// Whole application state. It only changes through [`AppState::update`],
/// and the view is rendered from it alone.
#[derive(Debug, Default)]
pub struct AppState {
    contacts: ContactStore,
    draft: Draft,
    session: EditSession,

    next_request: RequestId,
    pending: HashMap<RequestId, Pending>,
}

impl AppState {
    /// Fresh state with an empty store plus the one `list` request that
    /// seeds it.
    pub fn mount() -> (Self, Request) {
        let mut state = Self::default();
        let req = state.issue(Operation::List);
        (state, req)
    }

    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    /// Applies one message. Returns the remote request to issue, if the
    /// message calls for one.
    pub fn update(&mut self, msg: Message) -> Option<Request> {
        match msg {
            Message::Intent(intent) => self.on_intent(intent),
            Message::Response(rsp) => {
                self.on_response(rsp);
                None
            }
        }
    }

    fn issue(&mut self, op: Operation) -> Request {
        self.next_request += 1;
        let req = Request::new(self.next_request, op);
        self.pending.insert(req.id(), Pending::of(req.operation()));
        debug!("Issued {}", req);
        req
    }

    fn on_intent(&mut self, intent: Intent) -> Option<Request> {
        match intent {
            Intent::ShowContacts => None,
            Intent::DraftChanged(field, value) => {
                self.draft.set_field(field, &value);
                None
            }
            Intent::AddContact => {
                if !self.draft.is_submittable() {
                    warn!("Contact name is required, nothing to add");
                    return None;
                }
                // The draft is cleared as soon as the request is out,
                // whatever the outcome turns out to be.
                let contact = self.draft.take();
                Some(self.issue(Operation::Create(contact)))
            }
            Intent::StartEditing(id) => {
                match self.contacts.find(&id) {
                    Some(contact) => self.session.start(contact),
                    None => warn!("No contact with id {} to edit", id),
                }
                None
            }
            Intent::EditChanged(field, value) => {
                if !self.session.set_field(field, &value) {
                    warn!("Not editing any contact, ignored change of {}", field);
                }
                None
            }
            Intent::UpdateContact => {
                let Some(copy) = self.session.working_copy() else {
                    warn!("Not editing any contact, nothing to update");
                    return None;
                };
                let Some(id) = copy.id().cloned() else {
                    warn!("Working copy has no id, nothing to update");
                    return None;
                };
                let copy = copy.clone();
                Some(self.issue(Operation::Replace(id, copy)))
            }
            Intent::CancelEditing => {
                self.session.cancel();
                None
            }
            Intent::DeleteContact(id) => {
                let Some(target) = self.contacts.find(&id).and_then(|c| c.id().cloned()) else {
                    warn!("No contact with id {} to delete", id);
                    return None;
                };
                Some(self.issue(Operation::Delete(target)))
            }
        }
    }

    fn on_response(&mut self, rsp: Response) {
        let Some(pending) = self.pending.remove(&rsp.id()) else {
            warn!("Dropped response to unknown request {}", rsp.id());
            return;
        };

        match (pending, rsp.into_outcome()) {
            (pending, Outcome::Failed(e)) => {
                error!("Error {} contact: {}", pending.name(), e);
            }
            (Pending::List, Outcome::Listed(contacts)) => {
                info!("Fetched {} contacts", contacts.len());
                self.contacts.replace_all(contacts);
            }
            (Pending::Create, Outcome::Created(contact)) => {
                if contact.id().is_none() {
                    warn!("Created contact came back without an id");
                }
                info!("Added contact {}", contact);
                self.contacts.append(contact);
            }
            (Pending::Replace(id), Outcome::Replaced(mut contact)) => {
                if contact.id().is_none() {
                    contact.set_id(id.clone());
                }
                if !self.contacts.replace(&id, contact) {
                    info!("Contact {} is gone, update not applied", id);
                }
                if self.session.is_editing(&id) {
                    self.session.cancel();
                }
            }
            (Pending::Delete(id), Outcome::Deleted) => {
                if self.contacts.remove(&id) {
                    info!("Deleted contact {}", id);
                }
                if self.session.is_editing(&id) {
                    self.session.cancel();
                }
            }
            (pending, outcome) => {
                error!("Error {} contact: unexpected outcome {:?}", pending.name(), outcome);
            }
        }
    }
}
