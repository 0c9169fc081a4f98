//! Order record sent to the cart collaborator
//!
//! Keys: `soaps`, `quantity`, `shape`, `engraving`, `engravingText`,
//! `package`, `totalPrice`. Fixed packs additionally tag the record with
//! `pack`. No schema versioning: the cart consumes the record immediately.

use serde::{Deserialize, Serialize};

use jaboneria_domain::{OrderRecord, PackKind, Selection};

/// A selected soap as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapData {
    pub id: String,
    pub name: String,
    pub price: u32,
}

impl From<&Selection> for SoapData {
    fn from(selection: &Selection) -> Self {
        Self {
            id: selection.id.to_string(),
            name: selection.name.to_string(),
            price: selection.price.units(),
        }
    }
}

impl TryFrom<&SoapData> for Selection {
    type Error = jaboneria_domain::DomainError;

    fn try_from(data: &SoapData) -> Result<Self, Self::Error> {
        Ok(Selection {
            id: jaboneria_domain::SoapId::new(data.id.clone())?,
            name: jaboneria_domain::SoapName::new(data.name.clone())?,
            price: jaboneria_domain::Price::new(data.price),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecordData {
    /// Only present for the fixed packs (`basic`, `premium`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack: Option<String>,
    pub soaps: Vec<SoapData>,
    pub quantity: u32,
    pub shape: String,
    pub engraving: String,
    pub engraving_text: String,
    pub package: String,
    pub total_price: u32,
}

impl From<&OrderRecord> for OrderRecordData {
    fn from(order: &OrderRecord) -> Self {
        Self {
            pack: match order.pack {
                PackKind::Custom => None,
                fixed => Some(fixed.to_string()),
            },
            soaps: order.selections.iter().map(SoapData::from).collect(),
            quantity: order.quantity,
            shape: order.shape.to_string(),
            engraving: order.engraving.to_string(),
            engraving_text: order.engraving_text.clone(),
            package: order.package.to_string(),
            total_price: order.total_price.units(),
        }
    }
}

impl OrderRecordData {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
