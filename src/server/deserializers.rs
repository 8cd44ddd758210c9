use serde::{Deserialize, Deserializer};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::pagination::first_page;

// the web client sends numbers as strings from form inputs, "" means the field was left empty
pub fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::String(value)) if value.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(value)) => match value.trim().parse::<i64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(serde::de::Error::custom(format!(
                "Wrong value {value}, can not parse to i64"
            ))),
        },
    }
}

// a page that does not parse is the first page, "?page=" and "?page=two" included
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().parse().unwrap_or_else(|_| first_page()))
}

/// Category of a quiz round, `{"type": "Art", "id": "2"}`. Id 0 is "all".
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
}
