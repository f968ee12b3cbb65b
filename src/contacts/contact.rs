use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{
    Error,
    error::Result,
};

/// Identifier assigned by the remote collection. The service may hand out
/// numbers or strings; both are kept verbatim and compared as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Number(v) => write!(f, "{}", v),
            ContactId::Text(v)   => write!(f, "{}", v),
        }
    }
}

impl FromStr for ContactId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::Argument(format!("Empty contact id")));
        }
        Ok(match s.parse::<i64>() {
            Ok(v) => ContactId::Number(v),
            Err(_) => ContactId::Text(s.to_string()),
        })
    }
}

impl From<i64> for ContactId {
    fn from(v: i64) -> Self {
        ContactId::Number(v)
    }
}

impl From<&str> for ContactId {
    fn from(v: &str) -> Self {
        ContactId::Text(v.to_string())
    }
}

/// The editable fields of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name  => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name  => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name"  => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            _ => Err(Error::Argument(format!("Unknown contact field: {s}"))),
        }
    }
}

pub struct ContactBuilder {
    id      : Option<ContactId>,
    name    : String,
    email   : String,
    phone   : String,
    extra   : Map<String, Value>,
}

impl ContactBuilder {
    pub fn new() -> Self {
        Self {
            id      : None,
            name    : String::new(),
            email   : String::new(),
            phone   : String::new(),
            extra   : Map::new(),
        }
    }

    pub fn with_id(&mut self, id: ContactId) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.email = email.to_string();
        self
    }

    pub fn with_phone(&mut self, phone: &str) -> &mut Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_extra(&mut self, key: &str, value: Value) -> &mut Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn build(&mut self) -> Contact {
        Contact {
            id      : self.id.take(),
            name    : std::mem::take(&mut self.name),
            email   : std::mem::take(&mut self.email),
            phone   : std::mem::take(&mut self.phone),
            extra   : std::mem::take(&mut self.extra),
        }
    }
}

/// A record of the remote collection. Fields beyond `id`, `name`, `email`
/// and `phone` are kept in `extra` and sent back untouched on replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    id:     Option<ContactId>,

    #[serde(rename = "name", default, deserialize_with = "null_as_empty")]
    name:   String,
    #[serde(rename = "email", default, deserialize_with = "null_as_empty")]
    email:  String,
    #[serde(rename = "phone", default, deserialize_with = "null_as_empty")]
    phone:  String,

    #[serde(flatten)]
    extra:  Map<String, Value>,
}

// Services send `null` for unset fields as often as they omit them.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Contact {
    pub fn id(&self) -> Option<&ContactId> {
        self.id.as_ref()
    }

    pub(crate) fn set_id(&mut self, id: ContactId) {
        self.id = Some(id);
    }

    pub fn has_id(&self, id: &ContactId) -> bool {
        self.id.as_ref() == Some(id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name  => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name  => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.to_string();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id.as_ref() {
            Some(id) => write!(f, "#{} ", id)?,
            None => write!(f, "#- ")?,
        }
        write!(f, "{} <{}> {}", self.name, self.email, self.phone)
    }
}
