use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum InstructionKind {
    Set,
    Transfer,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Instruction {
    pub op: InstructionKind,
    pub account: String,
    pub to: Option<String>,
    pub amount: Option<u64>,
}
