//! Market Insight Templates
//!
//! Fixed sentences filled in from the submitted vehicle; no statistics are
//! computed.

use feature_engine::VehicleInput;

/// Insight lines shown under a price estimate
pub fn market_insights(input: &VehicleInput) -> Vec<String> {
    vec![
        format!(
            "{} vehicles in {} have steady demand currently.",
            input.brand, input.location
        ),
        format!(
            "{} cars with {} transmission are trending in the market.",
            input.fuel_type, input.transmission
        ),
        format!(
            "Cars with {}bhp power and {}km/l mileage are in the optimal range for resale value.",
            input.power, input.mileage
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_filled_from_input() {
        let input = VehicleInput {
            brand: "Honda".to_string(),
            location: "Kochi".to_string(),
            fuel_type: "Diesel".to_string(),
            transmission: "Manual".to_string(),
            power: 120.0,
            mileage: 18.0,
            ..Default::default()
        };
        let insights = market_insights(&input);
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0], "Honda vehicles in Kochi have steady demand currently.");
        assert_eq!(insights[1], "Diesel cars with Manual transmission are trending in the market.");
        assert_eq!(
            insights[2],
            "Cars with 120bhp power and 18km/l mileage are in the optimal range for resale value."
        );
    }

    #[test]
    fn test_mileage_is_not_rounded() {
        let input = VehicleInput {
            mileage: 15.25,
            power: 88.5,
            ..Default::default()
        };
        assert_eq!(
            market_insights(&input)[2],
            "Cars with 88.5bhp power and 15.25km/l mileage are in the optimal range for resale value."
        );
    }
}
