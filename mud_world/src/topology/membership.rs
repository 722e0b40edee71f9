//! The membership query accepted by [`Location::contains`](super::Location::contains).

use serde_json::Value;

use super::Exit;
use crate::entities::OccupantId;
use crate::error::WorldError;

/// What a location can be asked to contain.
#[derive(Debug, Clone, Copy)]
pub enum Membership<'a> {
    /// An exit leading to the same destination.
    Exit(&'a Exit),
    /// An exit answering to this name.
    Name(&'a str),
    Occupant(OccupantId),
}

impl<'a> From<&'a Exit> for Membership<'a> {
    fn from(exit: &'a Exit) -> Self {
        Membership::Exit(exit)
    }
}

impl<'a> From<&'a str> for Membership<'a> {
    fn from(name: &'a str) -> Self {
        Membership::Name(name)
    }
}

impl<'a> From<&'a String> for Membership<'a> {
    fn from(name: &'a String) -> Self {
        Membership::Name(name)
    }
}

impl From<OccupantId> for Membership<'_> {
    fn from(id: OccupantId) -> Self {
        Membership::Occupant(id)
    }
}

impl From<u64> for Membership<'_> {
    fn from(id: u64) -> Self {
        Membership::Occupant(OccupantId(id))
    }
}

impl<'a> TryFrom<&'a Value> for Membership<'a> {
    type Error = WorldError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => Ok(Membership::Name(name)),
            Value::Number(number) => number.as_u64().map(Membership::from).ok_or_else(|| {
                WorldError::InvalidArgument(format!(
                    "received number {number}, expected a non-negative occupant id"
                ))
            }),
            other => Err(WorldError::InvalidArgument(format!(
                "received {}, expected Exit/string, occupant/int",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_string_is_a_name() {
        let value = json!("north");
        assert!(matches!(
            Membership::try_from(&value),
            Ok(Membership::Name("north"))
        ));
    }

    #[test]
    fn test_integer_is_an_occupant() {
        let value = json!(12);
        assert!(matches!(
            Membership::try_from(&value),
            Ok(Membership::Occupant(OccupantId(12)))
        ));
    }

    #[test_case(json!(null), "null")]
    #[test_case(json!(true), "bool")]
    #[test_case(json!(-4), "number")]
    #[test_case(json!(1.5), "number")]
    #[test_case(json!(["north"]), "array")]
    #[test_case(json!({"name": "north"}), "object")]
    fn test_unsupported_values(value: Value, kind: &str) {
        match Membership::try_from(&value) {
            Err(WorldError::InvalidArgument(message)) => {
                assert!(message.contains(kind), "{message}");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }
}
