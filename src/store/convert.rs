use std::collections::HashMap;

use anyhow::{anyhow, bail, Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value as JsonValue};

use super::Item;

/// Convert an item into the attribute map DynamoDB expects.
pub fn item_to_attributes(item: &Item) -> Result<HashMap<String, AttributeValue>> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), json_to_attribute(value)?)))
        .collect()
}

/// Convert a DynamoDB attribute map back into an item.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> Result<Item> {
    attributes
        .iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_json(value)?)))
        .collect()
}

fn json_to_attribute(value: &JsonValue) -> Result<AttributeValue> {
    Ok(match value {
        JsonValue::Null => AttributeValue::Null(true),
        JsonValue::Bool(b) => AttributeValue::Bool(*b),
        JsonValue::Number(n) => AttributeValue::N(n.to_string()),
        JsonValue::String(s) => AttributeValue::S(s.clone()),
        JsonValue::Array(values) => AttributeValue::L(
            values.iter().map(json_to_attribute).collect::<Result<_>>()?,
        ),
        JsonValue::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(name, value)| Ok((name.clone(), json_to_attribute(value)?)))
                .collect::<Result<_>>()?,
        ),
    })
}

fn attribute_to_json(attribute: &AttributeValue) -> Result<JsonValue> {
    Ok(match attribute {
        AttributeValue::Null(_) => JsonValue::Null,
        AttributeValue::Bool(b) => JsonValue::Bool(*b),
        AttributeValue::N(raw) => JsonValue::Number(parse_number(raw)?),
        AttributeValue::S(s) => JsonValue::String(s.clone()),
        AttributeValue::L(values) => JsonValue::Array(
            values.iter().map(attribute_to_json).collect::<Result<_>>()?,
        ),
        AttributeValue::M(map) => JsonValue::Object(
            map.iter()
                .map(|(name, value)| Ok((name.clone(), attribute_to_json(value)?)))
                .collect::<Result<_>>()?,
        ),
        // String sets can appear in items written by other clients; they
        // have no distinct JSON representation, so they become arrays.
        AttributeValue::Ss(values) => JsonValue::Array(
            values.iter().cloned().map(JsonValue::String).collect(),
        ),
        other => bail!("Unsupported attribute type in stored item: {:?}", other),
    })
}

/// DynamoDB numbers are strings on the wire. Prefer integer representations
/// so values like `42` round-trip without becoming `42.0`.
fn parse_number(raw: &str) -> Result<Number> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Ok(Number::from(u));
    }
    let f = raw
        .parse::<f64>()
        .with_context(|| format!("Invalid numeric attribute: {raw}"))?;
    Number::from_f64(f).ok_or_else(|| anyhow!("Non-finite numeric attribute: {raw}"))
}
