use serde::Serialize;

/// An external page shown in an iframe.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub welcome: String,
    pub brain_tip: String,
    pub calendar: Embed,
    pub games: Vec<Embed>,
}
