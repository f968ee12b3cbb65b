use clap::{arg, ArgMatches, Command};

use contacts::{
    Error,
    error::Result,
    ContactId,
    Field,
    Intent,
};

const FIELDS: [&str; 3] = ["name", "email", "phone"];

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("Show the contact list and the new contact form")
}

pub(crate) fn draft_cli() -> Command {
    Command::new("draft")
        .about("Type into the new contact form")
        .arg(arg!(<FIELD> "The field to fill in").value_parser(FIELDS))
        .arg(arg!([VALUE]... "The text of the field, empty to clear it"))
}

pub(crate) fn add_cli() -> Command {
    Command::new("add")
        .about("Add the drafted contact")
}

pub(crate) fn edit_cli() -> Command {
    Command::new("edit")
        .about("Start editing a contact")
        .arg(arg!(<ID> "The contact id to edit"))
        .arg_required_else_help(true)
}

pub(crate) fn set_cli() -> Command {
    Command::new("set")
        .about("Change a field of the contact being edited")
        .arg(arg!(<FIELD> "The field to change").value_parser(FIELDS))
        .arg(arg!([VALUE]... "The new text of the field"))
}

pub(crate) fn update_cli() -> Command {
    Command::new("update")
        .about("Save the contact being edited")
}

pub(crate) fn cancel_cli() -> Command {
    Command::new("cancel")
        .about("Discard changes of the contact being edited")
}

pub(crate) fn delete_cli() -> Command {
    Command::new("delete")
        .about("Delete a contact")
        .arg(arg!(<ID> "The contact id to delete"))
        .arg_required_else_help(true)
}

fn field_and_value(m: &ArgMatches) -> Result<(Field, String)> {
    let field = m.get_one::<String>("FIELD")
        .ok_or_else(|| Error::Argument(format!("Missing field")))?
        .parse::<Field>()?;

    let value = m.get_many::<String>("VALUE")
        .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    Ok((field, value))
}

fn contact_id(m: &ArgMatches) -> Result<ContactId> {
    m.get_one::<String>("ID")
        .ok_or_else(|| Error::Argument(format!("Missing contact id")))?
        .parse::<ContactId>()
}

/// Maps a parsed shell command to the user intent it stands for.
pub(crate) fn to_intent(matches: &ArgMatches) -> Result<Intent> {
    match matches.subcommand() {
        Some(("list", _)) => Ok(Intent::ShowContacts),
        Some(("draft", m)) => {
            let (field, value) = field_and_value(m)?;
            Ok(Intent::DraftChanged(field, value))
        }
        Some(("add", _)) => Ok(Intent::AddContact),
        Some(("edit", m)) => Ok(Intent::StartEditing(contact_id(m)?)),
        Some(("set", m)) => {
            let (field, value) = field_and_value(m)?;
            Ok(Intent::EditChanged(field, value))
        }
        Some(("update", _)) => Ok(Intent::UpdateContact),
        Some(("cancel", _)) => Ok(Intent::CancelEditing),
        Some(("delete", m)) => Ok(Intent::DeleteContact(contact_id(m)?)),
        _ => Err(Error::Argument(format!("Unknown command"))),
    }
}
