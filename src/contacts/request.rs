use std::fmt;

use crate::Error;
use super::contact::{Contact, ContactId};

/// Correlation id pairing a remote response with the request behind it.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    List,
    Create(Contact),
    Replace(ContactId, Contact),
    Delete(ContactId),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List         => "list",
            Operation::Create(_)    => "create",
            Operation::Replace(..)  => "replace",
            Operation::Delete(_)    => "delete",
        }
    }

    pub fn target(&self) -> Option<&ContactId> {
        match self {
            Operation::Replace(id, _) => Some(id),
            Operation::Delete(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    id: RequestId,
    op: Operation,
}

impl Request {
    pub(crate) fn new(id: RequestId, op: Operation) -> Self {
        Self { id, op }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn operation(&self) -> &Operation {
        &self.op
    }

    pub fn into_operation(self) -> Operation {
        self.op
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request {} ({}", self.id, self.op.name())?;
        if let Some(id) = self.op.target() {
            write!(f, " {}", id)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Listed(Vec<Contact>),
    Created(Contact),
    Replaced(Contact),
    Deleted,
    Failed(Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    id: RequestId,
    outcome: Outcome,
}

impl Response {
    pub fn new(id: RequestId, outcome: Outcome) -> Self {
        Self { id, outcome }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }
}
