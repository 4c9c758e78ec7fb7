//! Lenient deserializers for the forms theme JSON files are written in:
//! bare numbers, suffixed strings (`"4px"`, `"1.75rem"`, `"110%"`,
//! `"0.5s"`, `"200ms"`), and string-or-list font families.

use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{AbsoluteLength, DefiniteLength, Pixels, Seconds, px, rems, seconds};

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[String; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.len() == 0 {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_non_empty_list<'de, D, T>(deserializer: D) -> Result<SmallVec<[T; 2]>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = SmallVec::deserialize(deserializer)?;

    if value.len() == 0 {
        return Err(D::Error::custom("at least one entry needs to be provided."));
    }

    Ok(value)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => return Ok(AbsoluteLength::Pixels(px(num))),

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("rem")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Rems(rems(value)));
            } else if let Some(string) = string.strip_suffix("px")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Pixels(px(value)));
            }
        }
    }

    Err(serde::de::Error::custom(
        "expected f32 or string containing a f32 ending with 'rem' or 'px'",
    ))
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => {
            return Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(num))));
        }

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("%")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(DefiniteLength::Fraction(value / 100.));
            }

            if let Some(string) = string.strip_suffix("rem")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))));
            } else if let Some(string) = string.strip_suffix("px")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(value))));
            }
        }
    }

    Err(serde::de::Error::custom(
        "expected f32 or string containing a f32 ending with 'rem' or 'px'",
    ))
}

pub fn de_seconds<'de, D>(deserializer: D) -> Result<Seconds, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => return Ok(seconds(num)),

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("ms")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(seconds(value / 1000.));
            } else if let Some(string) = string.strip_suffix("s")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(seconds(value));
            }
        }
    }

    Err(serde::de::Error::custom(
        "expected f32 or string containing a f32 ending with 's' or 'ms'",
    ))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct PixelsField {
        #[serde(deserialize_with = "de_pixels")]
        value: Pixels,
    }

    #[derive(Deserialize)]
    struct AbsField {
        #[serde(deserialize_with = "de_abs_length")]
        value: AbsoluteLength,
    }

    #[derive(Deserialize)]
    struct DefField {
        #[serde(deserialize_with = "de_def_length")]
        value: DefiniteLength,
    }

    #[derive(Deserialize)]
    struct SecondsField {
        #[serde(deserialize_with = "de_seconds")]
        value: Seconds,
    }

    #[derive(Deserialize)]
    struct FamilyField {
        #[serde(deserialize_with = "de_string_or_non_empty_list")]
        value: SmallVec<[String; 1]>,
    }

    #[test]
    fn test_pixels_accepts_number_and_suffixed_string() {
        let field: PixelsField = serde_json::from_str(r#"{ "value": 4 }"#).unwrap();
        assert_eq!(field.value, px(4.));

        let field: PixelsField = serde_json::from_str(r#"{ "value": "2px" }"#).unwrap();
        assert_eq!(field.value, px(2.));
    }

    #[test]
    fn test_pixels_rejects_unknown_suffix() {
        assert!(serde_json::from_str::<PixelsField>(r#"{ "value": "2em" }"#).is_err());
    }

    #[test]
    fn test_abs_length_accepts_rem_and_px() {
        let field: AbsField = serde_json::from_str(r#"{ "value": "1.75rem" }"#).unwrap();
        assert_eq!(field.value, AbsoluteLength::Rems(rems(1.75)));

        let field: AbsField = serde_json::from_str(r#"{ "value": "52px" }"#).unwrap();
        assert_eq!(field.value, AbsoluteLength::Pixels(px(52.)));
    }

    #[test]
    fn test_def_length_accepts_percent() {
        let field: DefField = serde_json::from_str(r#"{ "value": "110%" }"#).unwrap();
        assert_eq!(field.value, DefiniteLength::Fraction(1.1));
    }

    #[test]
    fn test_seconds_accepts_s_ms_and_number() {
        let field: SecondsField = serde_json::from_str(r#"{ "value": "0.5s" }"#).unwrap();
        assert_eq!(field.value, seconds(0.5));

        let field: SecondsField = serde_json::from_str(r#"{ "value": "200ms" }"#).unwrap();
        assert_eq!(field.value, seconds(0.2));

        let field: SecondsField = serde_json::from_str(r#"{ "value": 1.5 }"#).unwrap();
        assert_eq!(field.value, seconds(1.5));
    }

    #[test]
    fn test_family_accepts_string_or_list() {
        let field: FamilyField = serde_json::from_str(r#"{ "value": "VT323" }"#).unwrap();
        assert_eq!(field.value.as_slice(), ["VT323"]);

        let field: FamilyField =
            serde_json::from_str(r#"{ "value": ["VT323", "monospace"] }"#).unwrap();
        assert_eq!(field.value.as_slice(), ["VT323", "monospace"]);
    }

    #[test]
    fn test_family_rejects_empty_list() {
        assert!(serde_json::from_str::<FamilyField>(r#"{ "value": [] }"#).is_err());
    }
}
