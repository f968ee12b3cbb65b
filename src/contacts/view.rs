use std::fmt;

use super::{
    app::AppState,
    contact::{Contact, Field},
};

pub const TITLE: &str = "Contact List";
pub const FORM_TITLE: &str = "Add New Contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
    Update,
    Cancel,
    Add,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Edit    => "Edit",
            Action::Delete  => "Delete",
            Action::Update  => "Update",
            Action::Cancel  => "Cancel",
            Action::Add     => "Add Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    ReadOnly,
    Editable,
}

/// One list entry. In `Editable` mode `contact` is the working copy,
/// not the stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub contact: Contact,
    pub mode: RowMode,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub field: Field,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub rows: Vec<Row>,
    pub inputs: Vec<Input>,
    pub submit: Action,
}

/// Projects the state into a view tree. Holds nothing between calls.
pub fn render(state: &AppState) -> View {
    let session = state.session();

    let rows = state.contacts().iter().map(|contact| {
        let editing = contact.id()
            .filter(|id| session.is_editing(id))
            .and(session.working_copy());

        match editing {
            Some(copy) => Row {
                contact: copy.clone(),
                mode: RowMode::Editable,
                actions: vec![Action::Update, Action::Cancel],
            },
            None => Row {
                contact: contact.clone(),
                mode: RowMode::ReadOnly,
                actions: vec![Action::Edit, Action::Delete],
            },
        }
    }).collect();

    let inputs = Field::ALL.iter().map(|field| Input {
        field: *field,
        value: state.draft().field(*field).to_string(),
    }).collect();

    View {
        rows,
        inputs,
        submit: Action::Add,
    }
}

impl View {
    pub fn editing_row(&self) -> Option<&Row> {
        self.rows.iter().find(|r| r.mode == RowMode::Editable)
    }
}

fn write_actions(f: &mut fmt::Formatter<'_>, actions: &[Action]) -> fmt::Result {
    for action in actions {
        write!(f, " [{}]", action.label())?;
    }
    Ok(())
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.contact.id().map(|v| v.to_string()).unwrap_or_default();
        match self.mode {
            RowMode::ReadOnly => {
                write!(f, "  #{:<4}", id)?;
                for field in Field::ALL {
                    write!(f, " {}: {}", field.label(), self.contact.field(field))?;
                }
            }
            RowMode::Editable => {
                write!(f, "* #{:<4}", id)?;
                for field in Field::ALL {
                    write!(f, " {}=<{}>", field, self.contact.field(field))?;
                }
            }
        }
        write_actions(f, &self.actions)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        if self.rows.is_empty() {
            writeln!(f, "  (no contacts)")?;
        }
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", FORM_TITLE)?;
        write!(f, " ")?;
        for input in self.inputs.iter() {
            write!(f, " {}=<{}>", input.field, input.value)?;
        }
        write_actions(f, &[self.submit])?;
        writeln!(f)
    }
}
