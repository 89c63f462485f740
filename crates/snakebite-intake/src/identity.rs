//! Victim identity, collected before the bite details.

use serde::{Deserialize, Serialize};

use snakebite_core::errors::{IntakeError, IntakeResult};

const PHONE_LENGTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VictimIdentity {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub phone: String,
    pub address: String,
}

impl VictimIdentity {
    /// Every field is required; the phone must be 10 characters once trimmed.
    pub fn validate(&self) -> IntakeResult<()> {
        let required = [
            ("name", &self.name),
            ("age", &self.age),
            ("sex", &self.sex),
            ("phone", &self.phone),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(IntakeError::MissingField { field });
            }
        }

        let length = self.phone.trim().chars().count();
        if length != PHONE_LENGTH {
            return Err(IntakeError::InvalidPhone { length });
        }
        Ok(())
    }
}
