use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

/// rippled is inconsistent about ledger indices, some responses carry `5`, others `"5"`.
pub fn u32_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(number) => u32::try_from(number).map_err(|_| {
            de::Error::invalid_value(
                de::Unexpected::Unsigned(number),
                &"a ledger index which fits within u32",
            )
        }),
        NumberOrString::String(s) => s.parse::<u32>().map_err(|error| {
            de::Error::invalid_value(
                de::Unexpected::Str(&format!("unexpected value: {}, error: {}", s, error)),
                &"a ledger index as string e.g. \"5\", which fits within u32",
            )
        }),
    }
}
