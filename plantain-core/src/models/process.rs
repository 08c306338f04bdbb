use serde::Serialize;

/// One numbered step of a production sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub number: u32,
    pub name: &'static str,
    pub description: &'static str,
}
