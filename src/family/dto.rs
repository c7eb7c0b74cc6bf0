use serde::Deserialize;

use super::model::{Designation, Frequency};

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub name: String,
    pub designation: Designation,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub description: String,
    pub assignee: String,
    pub frequency: Frequency,
}

#[derive(Debug, Deserialize)]
pub struct SetDoneRequest {
    pub done: bool,
}
