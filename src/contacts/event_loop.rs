use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{
    api_client::RemoteCollection,
    app::{AppState, Intent, Message},
    request::{Operation, Outcome, Request, Response},
    view::{self, View},
    view_listener::ViewListener,
};

/// Runs one remote operation and wraps whatever happens into a response
/// tagged with the originating request id.
async fn perform<R: RemoteCollection>(remote: &R, req: Request) -> Response {
    let id = req.id();
    let outcome = match req.into_operation() {
        Operation::List => remote.list().await.map(Outcome::Listed),
        Operation::Create(contact) => remote.create(&contact).await.map(Outcome::Created),
        Operation::Replace(target, contact) => remote.replace(&target, &contact).await.map(Outcome::Replaced),
        Operation::Delete(target) => remote.delete(&target).await.map(|_| Outcome::Deleted),
    };
    Response::new(id, outcome.unwrap_or_else(Outcome::Failed))
}

/// The single event loop owning the application state.
///
/// Intents arrive over an unbounded channel; remote requests are polled
/// side by side inside this task, so several can be in flight while the
/// loop keeps taking input. Nothing is spawned and the state is only
/// touched here, which is why no lock is involved.
pub struct EventLoop<R: RemoteCollection> {
    remote: R,
    intents: UnboundedReceiver<Intent>,
    listener: Option<Box<dyn ViewListener>>,
}

impl<R: RemoteCollection> EventLoop<R> {
    pub fn new(remote: R) -> (Self, UnboundedSender<Intent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let this = Self {
            remote,
            intents: rx,
            listener: None,
        };
        (this, tx)
    }

    pub fn with_listener(mut self, listener: impl ViewListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Mounts the view, seeds the store and processes messages until every
    /// intent sender is dropped. In-flight requests are still reconciled
    /// before the final state is returned.
    pub async fn run(self) -> AppState {
        let EventLoop { remote, mut intents, listener } = self;
        let render = |state: &AppState| {
            let view: View = view::render(state);
            if let Some(l) = listener.as_ref() {
                l.on_render(&view);
            }
        };

        let mut in_flight = FuturesUnordered::new();
        let (mut state, seed) = AppState::mount();
        in_flight.push(perform(&remote, seed));
        render(&state);

        let mut accepting = true;
        loop {
            let msg: Message = tokio::select! {
                intent = intents.recv(), if accepting => match intent {
                    Some(intent) => intent.into(),
                    None => {
                        debug!("Intent channel closed, draining {} requests", in_flight.len());
                        accepting = false;
                        continue;
                    }
                },
                Some(rsp) = in_flight.next(), if !in_flight.is_empty() => rsp.into(),
                else => break,
            };

            if let Some(req) = state.update(msg) {
                in_flight.push(perform(&remote, req));
            }
            render(&state);
        }

        info!("Event loop stopped with {} contacts", state.contacts().len());
        state
    }
}
