pub mod contact;
pub mod draft;
pub mod store;
pub mod edit_session;

pub mod api_client;
pub mod request;
pub mod app;

pub mod view;
pub mod view_listener;
pub mod event_loop;

pub use self::{
    contact::{Contact, ContactBuilder, ContactId, Field},
    draft::Draft,
    store::ContactStore,
    edit_session::EditSession,
    api_client::{APIClient, RemoteCollection},
    request::{Operation, Outcome, Request, RequestId, Response},
    app::{AppState, Intent, Message},
    view::{render, Action, Row, RowMode, View},
    view_listener::ViewListener,
    event_loop::EventLoop,
};
