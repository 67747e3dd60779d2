use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellViewModel {
    pub value: String,
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeViewModel {
    pub word: String,
    pub number: String,
}
