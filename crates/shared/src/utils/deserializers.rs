use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

// the quiz frontend sends category ids as numbers in some places and as
// strings in others, questions store them as text
pub fn deserialize_opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(i) => i.to_string(),
        StringOrNumber::Float(f) if f.fract() == 0.0 => (f as i64).to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    }))
}

pub fn deserialize_opt_i64_from_any<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(StringOrNumber::Integer(i)) => Ok(Some(i)),
        Some(StringOrNumber::Float(f)) if f.fract() == 0.0 => Ok(Some(f as i64)),
        Some(StringOrNumber::Float(f)) => Err(D::Error::custom(format!(
            "Wrong value {f}, can not parse to i64"
        ))),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("Wrong value {s}, can not parse to i64"))),
    }
}

/// `?page=abc` falls back to the first page instead of rejecting the request.
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer).unwrap_or(None);
    Ok(match value {
        Some(StringOrNumber::Integer(i)) => i,
        Some(StringOrNumber::String(s)) => s.trim().parse::<i64>().unwrap_or(1),
        _ => 1,
    })
}
