pub mod core;
pub mod contacts;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config},
    logger,
    default_configuration as configuration,
};

pub use crate::contacts::{
    Contact,
    ContactBuilder,
    ContactId,
    Field,
    APIClient,
    RemoteCollection,
    AppState,
    Intent,
    EventLoop,
    View,
    ViewListener,
};
