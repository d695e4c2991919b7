// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Wire form of GraphQL constant values (directive arguments and default values).
//!
//! Every value is tagged with its kind (`{"enum": "ADMIN"}`, `{"string": "ADMIN"}`,
//! `{"list": [{"number": 1}]}`), so enum values stay distinct from strings across the protocol.
//! Binary values have no SDL form and travel as a list of byte numbers.

use async_graphql_value::{ConstValue, Name, Number, indexmap::IndexMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
enum WireValue {
    Null,
    Number(Number),
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<WireValue>),
    Object(IndexMap<String, WireValue>),
}

impl From<&ConstValue> for WireValue {
    fn from(value: &ConstValue) -> Self {
        match value {
            ConstValue::Null => WireValue::Null,
            ConstValue::Number(number) => WireValue::Number(number.clone()),
            ConstValue::String(string) => WireValue::String(string.clone()),
            ConstValue::Boolean(boolean) => WireValue::Boolean(*boolean),
            ConstValue::Binary(bytes) => WireValue::List(
                bytes
                    .iter()
                    .map(|byte| WireValue::Number(Number::from(*byte)))
                    .collect(),
            ),
            ConstValue::Enum(name) => WireValue::Enum(name.to_string()),
            ConstValue::List(values) => WireValue::List(values.iter().map(Into::into).collect()),
            ConstValue::Object(fields) => WireValue::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<WireValue> for ConstValue {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::Null => ConstValue::Null,
            WireValue::Number(number) => ConstValue::Number(number),
            WireValue::String(string) => ConstValue::String(string),
            WireValue::Boolean(boolean) => ConstValue::Boolean(boolean),
            WireValue::Enum(name) => ConstValue::Enum(Name::new(name)),
            WireValue::List(values) => {
                ConstValue::List(values.into_iter().map(Into::into).collect())
            }
            WireValue::Object(fields) => ConstValue::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (Name::new(name), value.into()))
                    .collect(),
            ),
        }
    }
}

/// `#[serde(with = "...")]` adapter for `ConstValue` fields
pub mod const_value {
    use super::*;

    pub fn serialize<S: Serializer>(value: &ConstValue, serializer: S) -> Result<S::Ok, S::Error> {
        WireValue::from(value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ConstValue, D::Error> {
        WireValue::deserialize(deserializer).map(Into::into)
    }
}

/// `#[serde(with = "...")]` adapter for `Option<ConstValue>` fields
pub mod optional_const_value {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<ConstValue>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.as_ref().map(WireValue::from).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ConstValue>, D::Error> {
        Option::<WireValue>::deserialize(deserializer).map(|value| value.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    struct Holder {
        #[serde(with = "const_value")]
        value: ConstValue,
    }

    fn to_json(value: ConstValue) -> serde_json::Value {
        serde_json::to_value(Holder { value }).unwrap()["value"].clone()
    }

    fn from_json(value: &str) -> ConstValue {
        serde_json::from_str::<Holder>(&format!(r#"{{ "value": {value} }}"#))
            .unwrap()
            .value
    }

    #[test]
    fn enum_and_string_are_distinct() {
        let role = ConstValue::Enum(Name::new("ADMIN"));
        assert_eq!(to_json(role), json!({ "enum": "ADMIN" }));
        assert_eq!(
            to_json(ConstValue::String("ADMIN".to_string())),
            json!({ "string": "ADMIN" })
        );

        // `ConstValue`'s equality does not tell the two apart, so compare the rendered value
        let parsed = from_json(r#"{ "enum": "ADMIN" }"#);
        assert!(matches!(parsed, ConstValue::Enum(_)));
        assert_eq!(parsed.to_string(), "ADMIN");
    }

    #[test]
    fn nested_values() {
        let value = from_json(
            r#"{
                "object": {
                    "roles": { "list": [ { "enum": "ADMIN" }, { "string": "guest" } ] },
                    "limit": { "number": 10 },
                    "strict": { "boolean": true },
                    "fallback": "null"
                }
            }"#,
        );

        assert_eq!(
            value.to_string(),
            r#"{roles: [ADMIN, "guest"], limit: 10, strict: true, fallback: null}"#
        );
        assert_eq!(
            to_json(value),
            json!({
                "object": {
                    "roles": { "list": [ { "enum": "ADMIN" }, { "string": "guest" } ] },
                    "limit": { "number": 10 },
                    "strict": { "boolean": true },
                    "fallback": "null"
                }
            })
        );
    }
}
