//! Equipment inference from shipment specifications.

use super::load::Specifications;

/// Trailer class requested for a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentType {
    /// Dry van, used when nothing else applies.
    Van,
    /// Open deck, for tarped or oversized freight.
    Flatbed,
    /// Temperature controlled ("reefer").
    Refrigerated,
}

/// The equipment derived for one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentSelection {
    pub kind: EquipmentType,
    /// Set temperature in Fahrenheit, only for refrigerated equipment.
    pub temperature: Option<i32>,
}

impl EquipmentSelection {
    /// Choose equipment for the given specifications.
    ///
    /// Precedence is fixed: any non-zero temperature bound means
    /// refrigerated (carrying the minimum when both are set), otherwise
    /// tarps or oversized freight means flatbed, otherwise a van.
    pub fn classify(specs: &Specifications) -> Self {
        let (min, max) = (specs.min_temp_fahrenheit, specs.max_temp_fahrenheit);

        if min != 0 || max != 0 {
            let temperature = if min != 0 { min } else { max };
            return Self {
                kind: EquipmentType::Refrigerated,
                temperature: Some(temperature),
            };
        }

        let kind = if specs.tarps || specs.oversized {
            EquipmentType::Flatbed
        } else {
            EquipmentType::Van
        };

        Self {
            kind,
            temperature: None,
        }
    }

    pub fn is_reefer(&self) -> bool {
        self.kind == EquipmentType::Refrigerated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Specifications {
        Specifications::default()
    }

    #[test]
    fn temperature_range_prefers_minimum() {
        let specs = Specifications {
            min_temp_fahrenheit: 32,
            max_temp_fahrenheit: 75,
            ..specs()
        };
        let selection = EquipmentSelection::classify(&specs);
        assert_eq!(selection.kind, EquipmentType::Refrigerated);
        assert_eq!(selection.temperature, Some(32));
        assert!(selection.is_reefer());
    }

    #[test]
    fn max_only_is_still_refrigerated() {
        let specs = Specifications {
            max_temp_fahrenheit: 40,
            ..specs()
        };
        let selection = EquipmentSelection::classify(&specs);
        assert_eq!(selection.kind, EquipmentType::Refrigerated);
        assert_eq!(selection.temperature, Some(40));
    }

    #[test]
    fn negative_temperature_counts() {
        let specs = Specifications {
            min_temp_fahrenheit: -10,
            ..specs()
        };
        assert_eq!(
            EquipmentSelection::classify(&specs).temperature,
            Some(-10)
        );
    }

    #[test]
    fn temperature_beats_tarps() {
        let specs = Specifications {
            min_temp_fahrenheit: 34,
            tarps: true,
            oversized: true,
            ..specs()
        };
        assert_eq!(
            EquipmentSelection::classify(&specs).kind,
            EquipmentType::Refrigerated
        );
    }

    #[test]
    fn tarps_means_flatbed() {
        let specs = Specifications {
            tarps: true,
            ..specs()
        };
        let selection = EquipmentSelection::classify(&specs);
        assert_eq!(selection.kind, EquipmentType::Flatbed);
        assert_eq!(selection.temperature, None);
    }

    #[test]
    fn oversized_means_flatbed() {
        let specs = Specifications {
            oversized: true,
            ..specs()
        };
        assert_eq!(
            EquipmentSelection::classify(&specs).kind,
            EquipmentType::Flatbed
        );
    }

    #[test]
    fn defaults_to_van() {
        let selection = EquipmentSelection::classify(&specs());
        assert_eq!(selection.kind, EquipmentType::Van);
        assert_eq!(selection.temperature, None);
        assert!(!selection.is_reefer());
    }

    #[test]
    fn unrelated_flags_do_not_change_van() {
        let specs = Specifications {
            hazmat: true,
            liftgate_pickup: true,
            straps: true,
            ..specs()
        };
        assert_eq!(EquipmentSelection::classify(&specs).kind, EquipmentType::Van);
    }
}
