use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Designation {
    Child,
    Spouse,
    #[serde(rename = "Self")]
    Myself,
    Pet,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    #[serde(rename = "One-time", alias = "OneTime")]
    OneTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyMember {
    pub name: String,
    pub designation: Designation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,          // creation timestamp, unique per session
    pub description: String,
    pub assignee: String,    // member name at creation time
    pub frequency: Frequency,
    pub done: bool,
}
