use contacts::{ContactId, Field, Intent};

use super::contact_cmd::to_intent;

fn parse(line: &str) -> contacts::error::Result<Intent> {
    let matches = crate::build_cli()
        .try_get_matches_from(line.split_whitespace())
        .map_err(|e| contacts::Error::Argument(e.to_string()))?;
    to_intent(&matches)
}

#[test]
fn test_simple_commands() {
    assert_eq!(parse("list"), Ok(Intent::ShowContacts));
    assert_eq!(parse("add"), Ok(Intent::AddContact));
    assert_eq!(parse("update"), Ok(Intent::UpdateContact));
    assert_eq!(parse("cancel"), Ok(Intent::CancelEditing));
}

#[test]
fn test_field_commands() {
    assert_eq!(
        parse("draft name Leanne Graham"),
        Ok(Intent::DraftChanged(Field::Name, "Leanne Graham".into()))
    );
    assert_eq!(
        parse("set email sincere@april.biz"),
        Ok(Intent::EditChanged(Field::Email, "sincere@april.biz".into()))
    );
    // no value clears the field
    assert_eq!(parse("draft phone"), Ok(Intent::DraftChanged(Field::Phone, String::new())));
    assert!(parse("draft website x").is_err());
}

#[test]
fn test_id_commands() {
    assert_eq!(parse("edit 3"), Ok(Intent::StartEditing(ContactId::Number(3))));
    assert_eq!(parse("delete abc"), Ok(Intent::DeleteContact(ContactId::Text("abc".into()))));
    assert!(parse("edit").is_err());
    assert!(parse("delete").is_err());
}

#[test]
fn test_unknown_command() {
    assert!(parse("rename 1 x").is_err());
    assert!(parse("").is_err());
}
