use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::field::{FieldValue, parse_field};
use super::form_data::FormData;
use super::system_type::SystemType;

/// Name of the discriminant field.
pub const SYSTEM_TYPE_FIELD: &str = "system_type";

/// Fields that only apply to electric systems.
pub const ELECTRIC_FIELDS: [&str; 2] = ["battery_capacity", "system_efficiency"];

/// Fields that only apply to combustion systems.
pub const ICE_FIELDS: [&str; 4] = ["fuel_mass", "prop_efficiency", "engine_power_kw", "bsfc"];

/// Electric-only parameters. `None` means the form did not submit the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElectricParams {
    /// Battery capacity, Wh.
    pub battery_capacity: Option<FieldValue>,
    /// Overall electric system efficiency, 0–1.
    pub system_efficiency: Option<FieldValue>,
}

/// Combustion-only parameters. `None` means the form did not submit the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IceParams {
    /// Fuel mass, kg.
    pub fuel_mass: Option<FieldValue>,
    /// Propeller efficiency, 0–1.
    pub prop_efficiency: Option<FieldValue>,
    /// Rated engine power, kW.
    pub engine_power_kw: Option<FieldValue>,
    /// Brake specific fuel consumption, g/(kW·h).
    pub bsfc: Option<FieldValue>,
}

/// The propulsion-specific part of a payload.
///
/// The variant decides which of the propulsion fields go out with values and
/// which go out as `null`, so the server always sees the same key set for a
/// given system type.
#[derive(Debug, Clone, PartialEq)]
pub enum Propulsion {
    Electric(ElectricParams),
    Ice(IceParams),
    /// Missing or unknown `system_type`: every field passes through as submitted.
    Unrecognized,
}

impl Propulsion {
    /// Returns the system type, or `None` for [`Propulsion::Unrecognized`].
    pub fn system_type(&self) -> Option<SystemType> {
        match self {
            Self::Electric(_) => Some(SystemType::Electric),
            Self::Ice(_) => Some(SystemType::Ice),
            Self::Unrecognized => None,
        }
    }
}

/// The request body sent to the calculation endpoint.
///
/// Serializes to one flat JSON object with keys in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationPayload {
    common: BTreeMap<String, FieldValue>,
    propulsion: Propulsion,
}

impl ConfigurationPayload {
    /// Builds a payload from submitted form entries.
    ///
    /// Every value is coerced with [`parse_field`]. The discriminant is
    /// matched after coercion, so only the exact strings `"electric"` and
    /// `"ice"` select a variant. Fields belonging to the other system type are
    /// dropped here and re-emitted as `null` on serialization.
    pub fn from_form(form: &FormData) -> Self {
        let mut fields: BTreeMap<String, FieldValue> = form
            .entries()
            .map(|(name, raw)| (name.to_string(), parse_field(raw)))
            .collect();

        let system_type = fields
            .get(SYSTEM_TYPE_FIELD)
            .and_then(FieldValue::as_text)
            .and_then(SystemType::from_selector);

        let propulsion = match system_type {
            Some(SystemType::Electric) => {
                fields.remove(SYSTEM_TYPE_FIELD);
                for name in ICE_FIELDS {
                    fields.remove(name);
                }
                Propulsion::Electric(ElectricParams {
                    battery_capacity: fields.remove("battery_capacity"),
                    system_efficiency: fields.remove("system_efficiency"),
                })
            }
            Some(SystemType::Ice) => {
                fields.remove(SYSTEM_TYPE_FIELD);
                for name in ELECTRIC_FIELDS {
                    fields.remove(name);
                }
                Propulsion::Ice(IceParams {
                    fuel_mass: fields.remove("fuel_mass"),
                    prop_efficiency: fields.remove("prop_efficiency"),
                    engine_power_kw: fields.remove("engine_power_kw"),
                    bsfc: fields.remove("bsfc"),
                })
            }
            None => Propulsion::Unrecognized,
        };

        Self {
            common: fields,
            propulsion,
        }
    }

    /// Returns the propulsion variant.
    pub fn propulsion(&self) -> &Propulsion {
        &self.propulsion
    }

    /// Returns a field outside the propulsion variant, e.g. `cruise_speed`.
    ///
    /// For [`Propulsion::Unrecognized`] this includes `system_type` and any
    /// submitted propulsion fields.
    pub fn common(&self, name: &str) -> Option<&FieldValue> {
        self.common.get(name)
    }
}

/// One value in the flattened output object.
#[derive(Serialize)]
#[serde(untagged)]
enum Slot<'a> {
    Value(&'a FieldValue),
    Tag(&'static str),
    Null,
}

fn present<'a>(
    name: &'static str,
    value: &'a Option<FieldValue>,
) -> Option<(&'static str, Slot<'a>)> {
    value.as_ref().map(|v| (name, Slot::Value(v)))
}

impl Serialize for ConfigurationPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut flat: BTreeMap<&str, Slot<'_>> = self
            .common
            .iter()
            .map(|(name, value)| (name.as_str(), Slot::Value(value)))
            .collect();

        match &self.propulsion {
            Propulsion::Electric(p) => {
                flat.insert(SYSTEM_TYPE_FIELD, Slot::Tag(SystemType::Electric.as_str()));
                let values = [
                    present("battery_capacity", &p.battery_capacity),
                    present("system_efficiency", &p.system_efficiency),
                ];
                flat.extend(values.into_iter().flatten());
                flat.extend(ICE_FIELDS.map(|n| (n, Slot::Null)));
            }
            Propulsion::Ice(p) => {
                flat.insert(SYSTEM_TYPE_FIELD, Slot::Tag(SystemType::Ice.as_str()));
                let values = [
                    present("fuel_mass", &p.fuel_mass),
                    present("prop_efficiency", &p.prop_efficiency),
                    present("engine_power_kw", &p.engine_power_kw),
                    present("bsfc", &p.bsfc),
                ];
                flat.extend(values.into_iter().flatten());
                flat.extend(ELECTRIC_FIELDS.map(|n| (n, Slot::Null)));
            }
            Propulsion::Unrecognized => {}
        }

        flat.serialize(serializer)
    }
}
