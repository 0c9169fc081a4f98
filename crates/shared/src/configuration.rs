//! Saved configuration snapshot
//!
//! Written under the `savedConfiguration` storage key. Same keys as the
//! order record minus `totalPrice`; the price is recomputed on restore.
//! Snapshots written before packs were tagged have no `pack` key and load
//! as the custom pack.

use serde::{Deserialize, Serialize};

use jaboneria_domain::{PackKind, SavedConfiguration, Selection};

use crate::error::WireError;
use crate::order::SoapData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfigurationData {
    #[serde(default)]
    pub pack: Option<String>,
    pub soaps: Vec<SoapData>,
    pub quantity: u32,
    pub shape: String,
    pub engraving: String,
    #[serde(default)]
    pub engraving_text: String,
    pub package: String,
}

impl From<&SavedConfiguration> for SavedConfigurationData {
    fn from(config: &SavedConfiguration) -> Self {
        Self {
            pack: Some(config.pack.to_string()),
            soaps: config.soaps.iter().map(SoapData::from).collect(),
            quantity: config.quantity,
            shape: config.shape.to_string(),
            engraving: config.engraving.to_string(),
            engraving_text: config.engraving_text.clone(),
            package: config.package.to_string(),
        }
    }
}

impl TryFrom<SavedConfigurationData> for SavedConfiguration {
    type Error = WireError;

    fn try_from(data: SavedConfigurationData) -> Result<Self, Self::Error> {
        let pack = match data.pack.as_deref() {
            Some(pack) => pack.parse()?,
            None => PackKind::Custom,
        };
        let soaps = data
            .soaps
            .iter()
            .map(Selection::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SavedConfiguration {
            pack,
            soaps,
            quantity: data.quantity,
            shape: data.shape.parse()?,
            engraving: data.engraving.parse()?,
            engraving_text: data.engraving_text,
            package: data.package.parse()?,
        })
    }
}

impl SavedConfigurationData {
    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Encode a snapshot for storage
pub fn encode(config: &SavedConfiguration) -> Result<String, WireError> {
    SavedConfigurationData::from(config).to_json()
}

/// Decode a stored snapshot
pub fn decode(json: &str) -> Result<SavedConfiguration, WireError> {
    SavedConfiguration::try_from(SavedConfigurationData::from_json(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaboneria_domain::{Engraving, PackageType, Price, Shape, SoapId, SoapName};

    fn snapshot() -> SavedConfiguration {
        SavedConfiguration {
            pack: PackKind::Basic,
            soaps: vec![Selection {
                id: SoapId::new("romero").expect("valid id"),
                name: SoapName::new("Romero").expect("valid name"),
                price: Price::new(5),
            }],
            quantity: 4,
            shape: Shape::Rectangular,
            engraving: Engraving::None,
            engraving_text: String::new(),
            package: PackageType::Premium,
        }
    }

    #[test]
    fn snapshot_has_no_price() {
        let json = encode(&snapshot()).expect("encodes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(value.get("totalPrice").is_none());
        assert_eq!(value["pack"], "basic");
        assert_eq!(value["engravingText"], "");
    }

    #[test]
    fn decodes_what_it_encodes() {
        let json = encode(&snapshot()).expect("encodes");
        assert_eq!(decode(&json).expect("decodes"), snapshot());
    }

    #[test]
    fn untagged_snapshot_loads_as_custom() {
        let json = r#"{
            "soaps": [{ "id": "lavanda", "name": "Lavanda", "price": 5 }],
            "quantity": 3,
            "shape": "oval",
            "engraving": "name",
            "engravingText": "Ana",
            "package": "gift"
        }"#;

        let config = decode(json).expect("decodes");
        assert_eq!(config.pack, PackKind::Custom);
        assert_eq!(config.shape, Shape::Oval);
        assert_eq!(config.engraving_text, "Ana");
    }

    #[test]
    fn unknown_option_is_rejected() {
        let json = r#"{
            "soaps": [], "quantity": 3, "shape": "triangle",
            "engraving": "none", "package": "standard"
        }"#;
        assert!(matches!(decode(json), Err(WireError::Domain(_))));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(decode("not json"), Err(WireError::Json(_))));
    }
}
