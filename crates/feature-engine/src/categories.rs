//! Category Maps
//!
//! Each categorical field the model was trained on has a fixed label → code
//! table. The codes are the label-encoder output used at training time and
//! must not be renumbered without retraining the model.

use crate::error::EncodeError;
use serde::Serialize;

/// A categorical feature backed by an immutable label/code table
pub trait Category: Copy + Sized + 'static {
    /// Field name used in errors and in the UI option listing
    const FIELD: &'static str;
    /// Every legal value, in code order
    const ALL: &'static [Self];

    /// Integer code expected by the model
    fn code(self) -> u8;

    /// Human-readable label shown in the UI
    fn label(self) -> &'static str;

    /// Look up a value by its exact label
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Look up a value by label, failing with `UnknownCategory`
    fn parse(label: &str) -> Result<Self, EncodeError> {
        Self::from_label(label).ok_or_else(|| EncodeError::UnknownCategory {
            field: Self::FIELD,
            label: label.to_string(),
        })
    }

    /// All labels, in code order
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

/// City where the vehicle is listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Location {
    Ahmedabad = 0,
    Bangalore = 1,
    Chennai = 2,
    Coimbatore = 3,
    Delhi = 4,
    Hyderabad = 5,
    Jaipur = 6,
    Kochi = 7,
    Kolkata = 8,
    Mumbai = 9,
    Pune = 10,
}

impl Category for Location {
    const FIELD: &'static str = "location";
    const ALL: &'static [Self] = &[
        Location::Ahmedabad,
        Location::Bangalore,
        Location::Chennai,
        Location::Coimbatore,
        Location::Delhi,
        Location::Hyderabad,
        Location::Jaipur,
        Location::Kochi,
        Location::Kolkata,
        Location::Mumbai,
        Location::Pune,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Location::Ahmedabad => "Ahmedabad",
            Location::Bangalore => "Bangalore",
            Location::Chennai => "Chennai",
            Location::Coimbatore => "Coimbatore",
            Location::Delhi => "Delhi",
            Location::Hyderabad => "Hyderabad",
            Location::Jaipur => "Jaipur",
            Location::Kochi => "Kochi",
            Location::Kolkata => "Kolkata",
            Location::Mumbai => "Mumbai",
            Location::Pune => "Pune",
        }
    }
}

/// Fuel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FuelType {
    Cng = 0,
    Diesel = 1,
    Electric = 2,
    Lpg = 3,
    Petrol = 4,
}

impl Category for FuelType {
    const FIELD: &'static str = "fuel_type";
    const ALL: &'static [Self] = &[
        FuelType::Cng,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Lpg,
        FuelType::Petrol,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            FuelType::Cng => "CNG",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Lpg => "LPG",
            FuelType::Petrol => "Petrol",
        }
    }
}

/// Gearbox type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Transmission {
    Automatic = 0,
    Manual = 1,
}

impl Category for Transmission {
    const FIELD: &'static str = "transmission";
    const ALL: &'static [Self] = &[Transmission::Automatic, Transmission::Manual];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
        }
    }
}

/// Number of previous owners
///
/// Codes follow alphabetical label order, so `FourthAndAbove` sits between
/// `First` and `Second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OwnerType {
    First = 0,
    FourthAndAbove = 1,
    Second = 2,
    Third = 3,
}

impl Category for OwnerType {
    const FIELD: &'static str = "owner_type";
    const ALL: &'static [Self] = &[
        OwnerType::First,
        OwnerType::FourthAndAbove,
        OwnerType::Second,
        OwnerType::Third,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            OwnerType::First => "First",
            OwnerType::FourthAndAbove => "Fourth & Above",
            OwnerType::Second => "Second",
            OwnerType::Third => "Third",
        }
    }
}

/// Manufacturer
///
/// Labels are the first word of the listing title, so a few are truncated
/// (`Land` for Land Rover) and one make appears under two spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Brand {
    Ambassador = 0,
    Audi = 1,
    Bmw = 2,
    Bentley = 3,
    Chevrolet = 4,
    Datsun = 5,
    Fiat = 6,
    Force = 7,
    Ford = 8,
    Hindustan = 9,
    Honda = 10,
    Hyundai = 11,
    /// Upper-case `ISUZU` listings
    IsuzuUpper = 12,
    Isuzu = 13,
    Jaguar = 14,
    Jeep = 15,
    Lamborghini = 16,
    Land = 17,
    Mahindra = 18,
    Maruti = 19,
    MercedesBenz = 20,
    Mini = 21,
    Mitsubishi = 22,
    Nissan = 23,
    OpelCorsa = 24,
    Porsche = 25,
    Renault = 26,
    Skoda = 27,
    Smart = 28,
    Tata = 29,
    Toyota = 30,
    Volkswagen = 31,
    Volvo = 32,
}

impl Category for Brand {
    const FIELD: &'static str = "brand";
    const ALL: &'static [Self] = &[
        Brand::Ambassador,
        Brand::Audi,
        Brand::Bmw,
        Brand::Bentley,
        Brand::Chevrolet,
        Brand::Datsun,
        Brand::Fiat,
        Brand::Force,
        Brand::Ford,
        Brand::Hindustan,
        Brand::Honda,
        Brand::Hyundai,
        Brand::IsuzuUpper,
        Brand::Isuzu,
        Brand::Jaguar,
        Brand::Jeep,
        Brand::Lamborghini,
        Brand::Land,
        Brand::Mahindra,
        Brand::Maruti,
        Brand::MercedesBenz,
        Brand::Mini,
        Brand::Mitsubishi,
        Brand::Nissan,
        Brand::OpelCorsa,
        Brand::Porsche,
        Brand::Renault,
        Brand::Skoda,
        Brand::Smart,
        Brand::Tata,
        Brand::Toyota,
        Brand::Volkswagen,
        Brand::Volvo,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Brand::Ambassador => "Ambassador",
            Brand::Audi => "Audi",
            Brand::Bmw => "BMW",
            Brand::Bentley => "Bentley",
            Brand::Chevrolet => "Chevrolet",
            Brand::Datsun => "Datsun",
            Brand::Fiat => "Fiat",
            Brand::Force => "Force",
            Brand::Ford => "Ford",
            Brand::Hindustan => "Hindustan",
            Brand::Honda => "Honda",
            Brand::Hyundai => "Hyundai",
            Brand::IsuzuUpper => "ISUZU",
            Brand::Isuzu => "Isuzu",
            Brand::Jaguar => "Jaguar",
            Brand::Jeep => "Jeep",
            Brand::Lamborghini => "Lamborghini",
            Brand::Land => "Land",
            Brand::Mahindra => "Mahindra",
            Brand::Maruti => "Maruti",
            Brand::MercedesBenz => "Mercedes-Benz",
            Brand::Mini => "Mini",
            Brand::Mitsubishi => "Mitsubishi",
            Brand::Nissan => "Nissan",
            Brand::OpelCorsa => "OpelCorsa",
            Brand::Porsche => "Porsche",
            Brand::Renault => "Renault",
            Brand::Skoda => "Skoda",
            Brand::Smart => "Smart",
            Brand::Tata => "Tata",
            Brand::Toyota => "Toyota",
            Brand::Volkswagen => "Volkswagen",
            Brand::Volvo => "Volvo",
        }
    }
}

/// Legal labels for every categorical field, as offered to the UI
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOptions {
    pub brand: Vec<&'static str>,
    pub location: Vec<&'static str>,
    pub fuel_type: Vec<&'static str>,
    pub transmission: Vec<&'static str>,
    pub owner_type: Vec<&'static str>,
}

/// Collect the option lists for all five category maps
pub fn categories() -> CategoryOptions {
    CategoryOptions {
        brand: Brand::labels(),
        location: Location::labels(),
        fuel_type: FuelType::labels(),
        transmission: Transmission::labels(),
        owner_type: OwnerType::labels(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_dense_codes<C: Category>() {
        let codes: Vec<u8> = C::ALL.iter().map(|c| c.code()).collect();
        let expected: Vec<u8> = (0..C::ALL.len() as u8).collect();
        assert_eq!(codes, expected, "{} codes must be 0..len in order", C::FIELD);

        let labels: HashSet<&str> = C::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), C::ALL.len(), "{} labels must be unique", C::FIELD);
    }

    #[test]
    fn test_codes_are_dense_and_unique() {
        assert_dense_codes::<Location>();
        assert_dense_codes::<FuelType>();
        assert_dense_codes::<Transmission>();
        assert_dense_codes::<OwnerType>();
        assert_dense_codes::<Brand>();
    }

    #[test]
    fn test_map_sizes() {
        assert_eq!(Location::ALL.len(), 11);
        assert_eq!(FuelType::ALL.len(), 5);
        assert_eq!(Transmission::ALL.len(), 2);
        assert_eq!(OwnerType::ALL.len(), 4);
        assert_eq!(Brand::ALL.len(), 33);
    }

    #[test]
    fn test_documented_codes() {
        assert_eq!(Location::parse("Pune").unwrap().code(), 10);
        assert_eq!(Location::parse("Ahmedabad").unwrap().code(), 0);
        assert_eq!(FuelType::parse("Petrol").unwrap().code(), 4);
        assert_eq!(FuelType::parse("LPG").unwrap().code(), 3);
        assert_eq!(Transmission::parse("Manual").unwrap().code(), 1);
        assert_eq!(OwnerType::parse("Fourth & Above").unwrap().code(), 1);
        assert_eq!(OwnerType::parse("Third").unwrap().code(), 3);
        assert_eq!(Brand::parse("Toyota").unwrap().code(), 30);
        assert_eq!(Brand::parse("Mercedes-Benz").unwrap().code(), 20);
        assert_eq!(Brand::parse("Volvo").unwrap().code(), 32);
    }

    #[test]
    fn test_isuzu_spellings_are_distinct() {
        assert_eq!(Brand::parse("ISUZU").unwrap(), Brand::IsuzuUpper);
        assert_eq!(Brand::parse("Isuzu").unwrap(), Brand::Isuzu);
        assert!(Brand::from_label("isuzu").is_none());
    }

    #[test]
    fn test_unknown_label() {
        let err = FuelType::parse("Hydrogen").unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownCategory {
                field: "fuel_type",
                label: "Hydrogen".to_string(),
            }
        );
        assert!(Brand::parse("").is_err());
    }

    #[test]
    fn test_option_listing_in_code_order() {
        let options = categories();
        assert_eq!(options.transmission, vec!["Automatic", "Manual"]);
        assert_eq!(options.owner_type[1], "Fourth & Above");
        assert_eq!(options.brand.len(), 33);
        assert_eq!(options.location.last(), Some(&"Pune"));
    }
}
