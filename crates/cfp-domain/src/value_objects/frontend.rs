//! Frontend configuration value objects

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Options a single frontend is built from, in declaration order
pub type FrontendOptions = IndexMap<String, String>;

/// Frontend options keyed by frontend identifier, in declaration order
pub type FrontendSettings = IndexMap<String, FrontendOptions>;

/// The `cache` segment of deployment configuration
///
/// Only the `frontend` member is interpreted; other members of the segment
/// are ignored. Scalar option values (numbers, booleans) are accepted and
/// kept in their string form, since configuration sources such as
/// environment variables infer types on their own.
///
/// # Example
///
/// ```
/// use cfp_domain::CacheSegment;
///
/// let segment: CacheSegment = serde_json::from_value(serde_json::json!({
///     "frontend": { "page": { "backend": "moka", "max_capacity": 500 } }
/// }))
/// .unwrap();
///
/// assert_eq!(segment.frontend["page"]["max_capacity"], "500");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSegment {
    /// Option overrides keyed by frontend identifier
    #[serde(default, deserialize_with = "deserialize_settings")]
    pub frontend: FrontendSettings,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OptionValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<OptionValue> for String {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Text(text) => text,
            OptionValue::Integer(number) => number.to_string(),
            OptionValue::Float(number) => number.to_string(),
            OptionValue::Flag(flag) => flag.to_string(),
        }
    }
}

fn deserialize_settings<'de, D>(deserializer: D) -> std::result::Result<FrontendSettings, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, IndexMap<String, OptionValue>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(id, options)| {
            let options = options
                .into_iter()
                .map(|(name, value)| (name, String::from(value)))
                .collect();
            (id, options)
        })
        .collect())
}

/// Parse an optional typed value out of frontend options
///
/// Returns `Ok(None)` when the option is absent and a configuration error
/// naming the option when its value does not parse.
pub fn parse_option_value<T: FromStr>(options: &FrontendOptions, name: &str) -> Result<Option<T>> {
    options
        .get(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                Error::configuration(format!("Invalid value '{raw}' for cache option '{name}'"))
            })
        })
        .transpose()
}
