use std::time::Duration;
use log::LevelFilter;
use url::Url;

pub trait Config: Send + Sync {
    /// Base address of the remote collection service.
    fn api_url(&self) -> &Url;

    /// Name of the resource collection under `api_url`, e.g. `users`.
    fn resource(&self) -> &str;

    fn request_timeout(&self) -> Duration;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
