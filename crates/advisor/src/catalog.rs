//! Vehicle Type Catalog

use serde::Serialize;

/// One body style in the catalog
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CarType {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

const CAR_TYPES: &[CarType] = &[
    CarType {
        name: "Sedan",
        image: "https://cdn-icons-png.flaticon.com/512/2736/2736906.png",
        description: "Sedans are four-door passenger cars with a separate trunk compartment. They typically offer comfortable seating for 4-5 passengers with good fuel efficiency and a smooth ride.",
    },
    CarType {
        name: "SUV",
        image: "https://png.pngtree.com/png-clipart/20220302/original/pngtree-suv-car-mobil-icon-vector-png-image_7361517.png",
        description: "Sport Utility Vehicles combine elements of passenger cars with features from off-road vehicles. They offer higher seating position, more cargo space, and often come with all-wheel drive capability.",
    },
    CarType {
        name: "Hatchback",
        image: "https://cdn-icons-png.flaticon.com/512/6047/6047336.png",
        description: "Hatchbacks are compact cars with a rear door that opens upward, offering versatile cargo space. They're fuel-efficient, easy to park, and popular in urban environments.",
    },
    CarType {
        name: "Luxury",
        image: "https://cdn-icons-png.flaticon.com/512/683/683092.png",
        description: "Luxury cars focus on comfort, performance, and cutting-edge technology. They typically feature premium materials, advanced safety features, and powerful engines.",
    },
    CarType {
        name: "Electric",
        image: "https://cdn-icons-png.flaticon.com/512/4564/4564602.png",
        description: "Electric vehicles run on electricity stored in rechargeable batteries. They produce zero emissions, have lower operating costs, and offer instant torque for responsive acceleration.",
    },
];

/// All catalog entries, in display order
pub fn car_types() -> &'static [CarType] {
    CAR_TYPES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = car_types().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Sedan", "SUV", "Hatchback", "Luxury", "Electric"]);
    }
}
