mod field;
mod form_data;
mod payload;
mod result;
mod system_type;

pub use field::{FieldValue, parse_field, parse_number};
pub use form_data::FormData;
pub use payload::{
    ConfigurationPayload, ELECTRIC_FIELDS, ElectricParams, ICE_FIELDS, IceParams, Propulsion,
    SYSTEM_TYPE_FIELD,
};
pub use result::CalculationResult;
pub use system_type::SystemType;
