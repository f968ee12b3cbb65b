use std::time::Duration;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    Error,
    error::Result,
    config::Config,
};

use super::contact::{Contact, ContactId};

/// The four operations of a REST-style contact collection. Each call
/// either yields the server's canonical view of the affected resource or
/// an `Error::Remote`; callers decide what to do with the local state.
#[allow(async_fn_in_trait)]
pub trait RemoteCollection {
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn create(&self, draft: &Contact) -> Result<Contact>;
    async fn replace(&self, id: &ContactId, contact: &Contact) -> Result<Contact>;
    async fn delete(&self, id: &ContactId) -> Result<()>;
}

pub struct APIClient {
    base_url    : Url,
    resource    : String,
    client      : Client,
}

impl APIClient {
    pub fn new(base_url: &Url, resource: &str, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Invalid base url {base_url}")));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::State(format!("Creating http client error: {e}")))?;

        Ok(Self {
            base_url    : base_url.clone(),
            resource    : resource.trim_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(cfg: &dyn Config) -> Result<Self> {
        Self::new(cfg.api_url(), cfg.resource(), cfg.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// `<base>/<resource>`
    pub fn collection_url(&self) -> Result<Url> {
        self.url_with(&[self.resource.as_str()])
    }

    /// `<base>/<resource>/<id>`
    pub fn item_url(&self, id: &ContactId) -> Result<Url> {
        self.url_with(&[self.resource.as_str(), id.to_string().as_str()])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Argument(format!("Invalid base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let rsp = req
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Remote(format!("Http error: sending http request error {e}"))
        })?;

        rsp.error_for_status().map_err(|e| {
            Error::Remote(format!("Http error: invalid http response {e}"))
        })
    }

    async fn decode<T: DeserializeOwned>(rsp: Response) -> Result<T> {
        rsp.json::<T>().await.map_err(|e| {
            Error::Remote(format!("Http error: deserialize json error {e}"))
        })
    }
}

impl RemoteCollection for APIClient {
    async fn list(&self) -> Result<Vec<Contact>> {
        let url = self.collection_url()?;
        debug!("GET {}", url);

        let rsp = self.send(self.client.get(url)).await?;
        Self::decode::<Vec<Contact>>(rsp).await
    }

    async fn create(&self, draft: &Contact) -> Result<Contact> {
        let url = self.collection_url()?;
        debug!("POST {}", url);

        let rsp = self.send(self.client.post(url).json(draft)).await?;
        Self::decode::<Contact>(rsp).await
    }

    async fn replace(&self, id: &ContactId, contact: &Contact) -> Result<Contact> {
        let url = self.item_url(id)?;
        debug!("PUT {}", url);

        let rsp = self.send(self.client.put(url).json(contact)).await?;
        Self::decode::<Contact>(rsp).await
    }

    async fn delete(&self, id: &ContactId) -> Result<()> {
        let url = self.item_url(id)?;
        debug!("DELETE {}", url);

        self.send(self.client.delete(url)).await.map(|_| ())
    }
}
