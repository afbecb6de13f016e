//! Heuristic Price Rules

use feature_engine::{Brand, Category, FeatureVector, OwnerType, Transmission};
use inference_engine::{InferenceError, PriceModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables for the heuristic estimate (prices in rupees)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackRules {
    /// Price floor before any adjustment
    pub base_price: f64,
    /// Added per bhp
    pub per_bhp: f64,
    /// Added per cc of displacement
    pub per_cc: f64,
    /// Value retained per year of age (0-1)
    pub yearly_retention: f64,
    /// Kilometres at which distance wear bottoms out
    pub distance_horizon_km: f64,
    /// Smallest factor distance wear can apply
    pub min_distance_factor: f64,
    /// Multiplier for premium makes
    pub premium_multiplier: f64,
    /// Multiplier for automatic gearboxes
    pub automatic_multiplier: f64,
    /// Lowest estimate ever returned
    pub min_price: f64,
}

impl Default for FallbackRules {
    fn default() -> Self {
        Self {
            base_price: 150_000.0,
            per_bhp: 3_500.0,
            per_cc: 120.0,
            yearly_retention: 0.88,
            distance_horizon_km: 300_000.0,
            min_distance_factor: 0.5,
            premium_multiplier: 1.8,
            automatic_multiplier: 1.08,
            min_price: 20_000.0,
        }
    }
}

/// Makes that carry a price premium
const PREMIUM_BRANDS: &[Brand] = &[
    Brand::Audi,
    Brand::Bmw,
    Brand::Bentley,
    Brand::Jaguar,
    Brand::Lamborghini,
    Brand::Land,
    Brand::MercedesBenz,
    Brand::Mini,
    Brand::Porsche,
    Brand::Volvo,
];

/// Rule-based stand-in for the trained regressor
pub struct HeuristicPriceModel {
    rules: FallbackRules,
}

impl HeuristicPriceModel {
    /// Create a heuristic model with the given rules
    pub fn new(rules: FallbackRules) -> Self {
        Self { rules }
    }

    /// Rules in use
    pub fn rules(&self) -> &FallbackRules {
        &self.rules
    }

    fn owner_factor(owner: Option<OwnerType>) -> f64 {
        match owner {
            Some(OwnerType::First) | None => 1.0,
            Some(OwnerType::Second) => 0.9,
            Some(OwnerType::Third) => 0.8,
            Some(OwnerType::FourthAndAbove) => 0.7,
        }
    }
}

impl Default for HeuristicPriceModel {
    fn default() -> Self {
        Self::new(FallbackRules::default())
    }
}

fn decode<C: Category>(value: f64) -> Option<C> {
    if value < 0.0 {
        return None;
    }
    C::ALL.get(value as usize).copied()
}

impl PriceModel for HeuristicPriceModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let field = |name: &str| {
            features.get(name).ok_or_else(|| InferenceError::InvalidInputShape {
                expected: name.to_string(),
                actual: "missing feature".to_string(),
            })
        };

        let age = field("age")?;
        let distance = field("distance")?;
        let engine_cc = field("engine_cc")?;
        let power = field("power")?;
        let brand = decode::<Brand>(field("brand")?);
        let owner = decode::<OwnerType>(field("owner_type")?);
        let transmission = decode::<Transmission>(field("transmission")?);

        let rules = &self.rules;
        let mut price = rules.base_price + power * rules.per_bhp + engine_cc * rules.per_cc;

        if brand.map_or(false, |b| PREMIUM_BRANDS.contains(&b)) {
            price *= rules.premium_multiplier;
        }
        if transmission == Some(Transmission::Automatic) {
            price *= rules.automatic_multiplier;
        }

        price *= rules.yearly_retention.powf(age.max(0.0));
        price *= (1.0 - distance / rules.distance_horizon_km).max(rules.min_distance_factor);
        price *= Self::owner_factor(owner);

        let price = price.max(rules.min_price);
        debug!("Heuristic estimate {:.2} for {:?}", price, brand);
        Ok(price)
    }

    fn name(&self) -> &str {
        "heuristic-fallback"
    }

    fn is_fallback(&self) -> bool {
        true
    }
}
