//! Domain events - what a customizer mutation actually changed
//!
//! Every mutating operation on [`Customizer`](crate::Customizer) returns one
//! of these, so the presentation layer can log and re-render without
//! diffing state.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Engraving, PackageType, Shape, SoapId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomizerEvent {
    /// Quantity moved; `dropped` lists soaps truncated off the end
    QuantityChanged {
        from: u32,
        to: u32,
        dropped: Vec<SoapId>,
    },
    SelectionAdded {
        id: SoapId,
    },
    SelectionRemoved {
        id: SoapId,
    },
    /// Fixed packs swap the oldest soap out for the new one
    SelectionReplaced {
        removed: SoapId,
        added: SoapId,
    },
    ShapeChanged {
        shape: Shape,
    },
    EngravingChanged {
        engraving: Engraving,
        text_cleared: bool,
    },
    EngravingTextChanged,
    PackageChanged {
        package: PackageType,
    },
    /// The request was valid but changed nothing
    Unchanged,
}

impl CustomizerEvent {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Event name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::QuantityChanged { .. } => "QuantityChanged",
            Self::SelectionAdded { .. } => "SelectionAdded",
            Self::SelectionRemoved { .. } => "SelectionRemoved",
            Self::SelectionReplaced { .. } => "SelectionReplaced",
            Self::ShapeChanged { .. } => "ShapeChanged",
            Self::EngravingChanged { .. } => "EngravingChanged",
            Self::EngravingTextChanged => "EngravingTextChanged",
            Self::PackageChanged { .. } => "PackageChanged",
            Self::Unchanged => "Unchanged",
        }
    }
}
