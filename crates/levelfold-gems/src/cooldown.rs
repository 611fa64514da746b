use levelfold_core::errors::RecordError;

/// Charge type that lets a skill bypass its cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownBypassType {
    EnduranceCharge,
    FrenzyCharge,
    PowerCharge,
    None,
}

impl CooldownBypassType {
    pub fn from_index(value: u32) -> Result<Self, RecordError> {
        match value {
            0 => Ok(Self::EnduranceCharge),
            1 => Ok(Self::FrenzyCharge),
            2 => Ok(Self::PowerCharge),
            3 => Ok(Self::None),
            other => Err(RecordError::UnknownCooldownBypass { value: other }),
        }
    }

    /// Lower-case name used in documents; `None` for the no-bypass type.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::EnduranceCharge => Some("endurance_charge"),
            Self::FrenzyCharge => Some("frenzy_charge"),
            Self::PowerCharge => Some("power_charge"),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_indices() {
        assert_eq!(
            CooldownBypassType::from_index(1).unwrap(),
            CooldownBypassType::FrenzyCharge
        );
        assert_eq!(CooldownBypassType::from_index(3).unwrap().name(), None);
        assert_eq!(
            CooldownBypassType::from_index(0).unwrap().name(),
            Some("endurance_charge")
        );
    }

    #[test]
    fn unknown_index_is_an_error() {
        assert!(matches!(
            CooldownBypassType::from_index(9),
            Err(RecordError::UnknownCooldownBypass { value: 9 })
        ));
    }
}
