use std::fmt;
use std::fs;
use std::time::Duration;
use serde::Deserialize;
use log::LevelFilter;
use url::Url;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
};

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_RESOURCE: &str = "users";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Default, Deserialize)]
struct FileCfg {
    #[serde(rename = "apiUrl")]
    api_url     : Option<String>,
    #[serde(rename = "resource")]
    resource    : Option<String>,
    #[serde(rename = "timeout")]
    timeout     : Option<u64>,
    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

struct Configuration {
    api_url     : Url,
    resource    : String,
    timeout     : Duration,
    log_level   : LevelFilter,
    log_file    : Option<String>,
}

pub struct Builder<'a> {
    api_url     : Option<&'a str>,
    resource    : Option<&'a str>,
    timeout     : Option<Duration>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<FileCfg>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            api_url     : None,
            resource    : None,
            timeout     : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_api_url(&mut self, url: &'a str) -> &mut Self {
        self.api_url = Some(url);
        self
    }

    pub fn with_resource(&mut self, resource: &'a str) -> &mut Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<FileCfg>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let file = b.cfg.clone().unwrap_or_default();

        let url_str = b.api_url
            .or(file.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL);

        let api_url = Url::parse(url_str).map_err(|e| {
            Error::Argument(format!("bad api url {url_str}, error: {e}"))
        })?;

        if api_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("api url {url_str} cannot be a base")));
        }

        let resource = b.resource
            .or(file.resource.as_deref())
            .unwrap_or(DEFAULT_RESOURCE)
            .trim_matches('/')
            .to_string();

        if resource.is_empty() {
            return Err(Error::Argument(format!("resource name must not be empty")));
        }

        let timeout = b.timeout.unwrap_or_else(|| {
            Duration::from_secs(file.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
        });

        let log_level = match b.log_level {
            Some(level) => level,
            None => file.logger.as_ref()
                .and_then(|v| v.level.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::Info),
        };

        let log_file = match b.log_file {
            Some(path) => Some(path.to_string()),
            None => file.logger.as_ref().and_then(|v| v.file.clone()),
        };

        Ok(Self {
            api_url,
            resource,
            timeout,
            log_level,
            log_file,
        })
    }
}

impl Config for Configuration {
    fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn resource(&self) -> &str {
        &self.resource
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api_url:{},", self.api_url)?;
        write!(f, "resource:{},", self.resource)?;
        write!(f, "timeout:{}s,", self.timeout.as_secs())?;
        write!(f, "log_level:{}", self.log_level)?;
        if let Some(file) = self.log_file.as_ref() {
            write!(f, ",log_file:{}", file)?;
        }
        Ok(())
    }
}
