use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{Error, error::Result};
use crate::contacts::{
    api_client::RemoteCollection,
    app::Intent,
    contact::{Contact, ContactId, Field},
    event_loop::EventLoop,
    view::View,
    view_listener::ViewListener,
};
use super::contact;

#[derive(Default)]
struct Inner {
    records: RefCell<Vec<Contact>>,
    next_id: Cell<i64>,
    fail_list: Cell<bool>,
    fail_mutations: Cell<bool>,
    create_delay: Cell<u64>,
    calls: RefCell<Vec<String>>,
}

/// In-memory collection standing in for the http service.
#[derive(Clone, Default)]
struct FakeRemote {
    inner: Rc<Inner>,
}

impl FakeRemote {
    fn with_records(records: Vec<Contact>) -> Self {
        let remote = Self::default();
        remote.inner.next_id.set(records.len() as i64 + 1);
        *remote.inner.records.borrow_mut() = records;
        remote
    }

    fn records(&self) -> Vec<Contact> {
        self.inner.records.borrow().clone()
    }

    fn calls(&self) -> Vec<String> {
        self.inner.calls.borrow().clone()
    }

    fn check(&self, call: String) -> Result<()> {
        self.inner.calls.borrow_mut().push(call);
        if self.inner.fail_mutations.get() {
            return Err(Error::Remote("Http error: invalid http response 500".into()));
        }
        Ok(())
    }
}

impl RemoteCollection for FakeRemote {
    async fn list(&self) -> Result<Vec<Contact>> {
        self.inner.calls.borrow_mut().push("list".into());
        if self.inner.fail_list.get() {
            return Err(Error::Remote("Http error: sending http request error".into()));
        }
        Ok(self.records())
    }

    async fn create(&self, draft: &Contact) -> Result<Contact> {
        let delay = self.inner.create_delay.get();
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.check("create".into())?;

        let mut created = draft.clone();
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        created.set_id(ContactId::Number(id));
        self.inner.records.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn replace(&self, id: &ContactId, contact: &Contact) -> Result<Contact> {
        self.check(format!("replace {}", id))?;
        let mut records = self.inner.records.borrow_mut();
        if let Some(slot) = records.iter_mut().find(|c| c.has_id(id)) {
            *slot = contact.clone();
        }
        Ok(contact.clone())
    }

    async fn delete(&self, id: &ContactId) -> Result<()> {
        self.check(format!("delete {}", id))?;
        self.inner.records.borrow_mut().retain(|c| !c.has_id(id));
        Ok(())
    }
}

struct Forward(UnboundedSender<View>);
impl ViewListener for Forward {
    fn on_render(&self, view: &View) {
        _ = self.0.send(view.clone());
    }
}

async fn wait_for(views: &mut UnboundedReceiver<View>, pred: impl Fn(&View) -> bool) -> View {
    loop {
        let view = views.recv().await.expect("event loop stopped rendering");
        if pred(&view) {
            return view;
        }
    }
}

fn start(remote: &FakeRemote) -> (EventLoop<FakeRemote>, UnboundedSender<Intent>, UnboundedReceiver<View>) {
    let (event_loop, tx) = EventLoop::new(remote.clone());
    let (vtx, vrx) = mpsc::unbounded_channel();
    (event_loop.with_listener(Forward(vtx)), tx, vrx)
}

#[tokio::test]
async fn test_seed_and_crud() {
    let remote = FakeRemote::with_records(vec![contact(1, "A"), contact(2, "B")]);
    let (event_loop, tx, mut views) = start(&remote);

    let driver = async move {
        wait_for(&mut views, |v| v.rows.len() == 2).await;

        tx.send(Intent::DraftChanged(Field::Name, "C".into())).unwrap();
        tx.send(Intent::AddContact).unwrap();
        let view = wait_for(&mut views, |v| v.rows.len() == 3).await;
        assert_eq!(view.rows[2].contact.id(), Some(&ContactId::Number(3)));
        assert!(view.inputs.iter().all(|i| i.value.is_empty()));

        tx.send(Intent::StartEditing(ContactId::Number(1))).unwrap();
        tx.send(Intent::EditChanged(Field::Name, "A2".into())).unwrap();
        let view = wait_for(&mut views, |v| v.editing_row().map(|r| r.contact.name() == "A2").unwrap_or(false)).await;
        assert_eq!(view.rows.len(), 3);

        tx.send(Intent::UpdateContact).unwrap();
        wait_for(&mut views, |v| v.editing_row().is_none() && v.rows[0].contact.name() == "A2").await;

        tx.send(Intent::DeleteContact(ContactId::Number(2))).unwrap();
        wait_for(&mut views, |v| v.rows.len() == 2).await;
    };

    let (state, _) = tokio::join!(event_loop.run(), driver);

    let names: Vec<&str> = state.contacts().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["A2", "C"]);
    assert!(state.session().is_idle());
    assert_eq!(state.pending_requests(), 0);
    assert_eq!(state.contacts().contacts(), remote.records().as_slice());
    assert_eq!(remote.calls(), vec!["list", "create", "replace 1", "delete 2"]);
}

#[tokio::test]
async fn test_failures_change_nothing_but_draft() {
    let remote = FakeRemote::with_records(vec![contact(1, "A")]);
    remote.inner.fail_mutations.set(true);
    let (event_loop, tx, mut views) = start(&remote);

    let driver = async move {
        wait_for(&mut views, |v| v.rows.len() == 1).await;

        tx.send(Intent::DraftChanged(Field::Name, "X".into())).unwrap();
        tx.send(Intent::DraftChanged(Field::Email, "y@z".into())).unwrap();
        tx.send(Intent::DraftChanged(Field::Phone, "1".into())).unwrap();
        tx.send(Intent::AddContact).unwrap();
        tx.send(Intent::StartEditing(ContactId::Number(1))).unwrap();
        tx.send(Intent::EditChanged(Field::Name, "B".into())).unwrap();
        tx.send(Intent::UpdateContact).unwrap();
        tx.send(Intent::DeleteContact(ContactId::Number(1))).unwrap();
    };

    let (state, _) = tokio::join!(event_loop.run(), driver);

    assert_eq!(state.contacts().contacts(), &[contact(1, "A")]);
    assert!(state.draft().is_empty());
    assert_eq!(state.session().working_copy().map(|c| c.name()), Some("B"));
    assert_eq!(state.pending_requests(), 0);
    assert_eq!(remote.calls(), vec!["list", "create", "replace 1", "delete 1"]);
}

#[tokio::test]
async fn test_list_failure() {
    let remote = FakeRemote::with_records(vec![contact(1, "A")]);
    remote.inner.fail_list.set(true);
    let (event_loop, tx, _views) = start(&remote);
    drop(tx);

    let state = event_loop.run().await;
    assert!(state.contacts().is_empty());
    assert_eq!(remote.calls(), vec!["list"]);
}

#[tokio::test]
async fn test_requests_overlap() {
    let remote = FakeRemote::with_records(vec![contact(1, "A"), contact(2, "B")]);
    remote.inner.create_delay.set(50);
    let (event_loop, tx, mut views) = start(&remote);

    let driver = async move {
        wait_for(&mut views, |v| v.rows.len() == 2).await;

        tx.send(Intent::DraftChanged(Field::Name, "Slow".into())).unwrap();
        tx.send(Intent::AddContact).unwrap();
        tx.send(Intent::DeleteContact(ContactId::Number(1))).unwrap();

        // the delete lands while the create is still waiting on the server
        let view = wait_for(&mut views, |v| v.rows.len() == 1).await;
        assert_eq!(view.rows[0].contact.name(), "B");
    };

    let (state, _) = tokio::join!(event_loop.run(), driver);

    let names: Vec<&str> = state.contacts().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["B", "Slow"]);
    assert_eq!(remote.calls(), vec!["list", "delete 1", "create"]);
}
