use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One row as it comes back from a source table query: an unordered mapping of
/// field name to string. Untyped, source-controlled, may contain stray
/// whitespace or literal quote characters. Read once, discarded after
/// transformation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

impl RawRecord {
    /// Missing fields read as the empty string so the transformer stays total.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

impl From<HashMap<String, String>> for RawRecord {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

/// Canonical gender after unification. The fold is strictly two-valued;
/// unrecognized tokens land on `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Originating record category. Each domain has its own source/target pair and
/// tags every record it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Car,
    House,
    Job,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Car => "car",
            Domain::House => "house",
            Domain::Job => "job",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "car" => Some(Domain::Car),
            "house" => Some(Domain::House),
            "job" => Some(Domain::Job),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single normalized shape all domains are folded into before loading.
/// Immutable after creation; consumed exactly once by the target port.
///
/// Date fields are `None` iff no supported input format matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub firstname: String,
    pub lastname: String,
    pub zipcode: String,
    pub dateofbirth: Option<String>,
    pub gender: Gender,
    pub registrationdate: Option<String>,
    pub source: Domain,
}
