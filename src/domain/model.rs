use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Administrative unit code.
///
/// The directory publishes numeric codes, while fixtures and some mirrors use
/// strings, so both decode into the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = Code;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Code, E> {
                Ok(Code::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Code, E> {
                Ok(Code(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Code, E> {
                Ok(Code(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Code, E> {
                Ok(Code(v.to_string()))
            }
        }

        deserializer.deserialize_any(CodeVisitor)
    }
}

/// Province (top tier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub code: Code,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<u32>,
}

/// District, belongs to one province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub code: Code,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_code: Option<Code>,
}

/// Ward, belongs to one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    pub code: Code,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_code: Option<Code>,
}

/// Province payload fetched with `depth=2` or `depth=3`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProvinceTree {
    #[serde(flatten)]
    pub province: Province,
    #[serde(default)]
    pub districts: Option<Vec<DistrictTree>>,
}

/// District inside a [`ProvinceTree`]; `wards` is only present at depth 3.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistrictTree {
    #[serde(flatten)]
    pub district: District,
    #[serde(default)]
    pub wards: Option<Vec<Ward>>,
}

/// How many levels of the hierarchy the directory nests under a province.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Districts,
    Wards,
}

impl Depth {
    pub fn as_query_value(self) -> &'static str {
        match self {
            Depth::Districts => "2",
            Depth::Wards => "3",
        }
    }
}

/// Raw search payload, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResults(pub serde_json::Value);

impl SearchResults {
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
