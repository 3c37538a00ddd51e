// Static crop-care catalog for the tower
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Intermediate,
    Advanced,
}

/// Care sheet for one crop. Growth cycles are in days; temperature and light
/// hints are only present where the source material gives them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Crop {
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub ph_range: &'static str,
    pub growth_cycle_days: &'static str,
    pub description: &'static str,
    pub temperature: Option<&'static str>,
    pub light: Option<&'static str>,
}

pub const CATALOG: &[Crop] = &[
    Crop {
        name: "Lettuce",
        difficulty: Difficulty::Easy,
        ph_range: "5.5-6.5",
        growth_cycle_days: "30-45",
        description: "Grows well in almost any system. Ideal for beginners, produces leaves continuously.",
        temperature: None,
        light: None,
    },
    Crop {
        name: "Spinach",
        difficulty: Difficulty::Easy,
        ph_range: "6.0-7.0",
        growth_cycle_days: "40-50",
        description: "Needs cool temperatures. Very nutritious and easy to grow hydroponically.",
        temperature: Some("15-20°C"),
        light: None,
    },
    Crop {
        name: "Chard",
        difficulty: Difficulty::Easy,
        ph_range: "6.0-7.0",
        growth_cycle_days: "50-60",
        description: "Very tolerant of fluctuations. Produces leaves all season long.",
        temperature: None,
        light: None,
    },
    Crop {
        name: "Basil",
        difficulty: Difficulty::Easy,
        ph_range: "5.5-6.5",
        growth_cycle_days: "25-40",
        description: "Ideal for towers with good sunlight. Aromatic and perfect for cooking.",
        temperature: None,
        light: Some("High"),
    },
    Crop {
        name: "Arugula / Watercress",
        difficulty: Difficulty::Easy,
        ph_range: "6.0-7.0",
        growth_cycle_days: "20-30",
        description: "Fast growers that can be harvested by cutting. Distinctive peppery flavor.",
        temperature: None,
        light: None,
    },
    Crop {
        name: "Strawberries",
        difficulty: Difficulty::Intermediate,
        ph_range: "5.8-6.5",
        growth_cycle_days: "60-90",
        description: "Very popular in towers. Need good aeration and precise pH control.",
        temperature: None,
        light: Some("High"),
    },
    Crop {
        name: "Cherry Tomatoes",
        difficulty: Difficulty::Intermediate,
        ph_range: "5.5-6.5",
        growth_cycle_days: "60-80",
        description: "Adapt well but need support and extra nutrients. Abundant yield.",
        temperature: Some("20-25°C"),
        light: None,
    },
    Crop {
        name: "Peppers / Chilies",
        difficulty: Difficulty::Intermediate,
        ph_range: "6.0-6.8",
        growth_cycle_days: "70-90",
        description: "Good yield with stable temperature and good light. Require patience.",
        temperature: Some("22-28°C"),
        light: Some("High"),
    },
    Crop {
        name: "Chives",
        difficulty: Difficulty::Intermediate,
        ph_range: "6.0-7.0",
        growth_cycle_days: "60-80",
        description: "Small roots, ideal for narrow tower openings. Mild, versatile flavor.",
        temperature: None,
        light: None,
    },
    Crop {
        name: "Wild Strawberry",
        difficulty: Difficulty::Advanced,
        ph_range: "5.5-6.5",
        growth_cycle_days: "90-120",
        description: "A more delicate variety that needs precise nutrient and climate control.",
        temperature: Some("18-24°C"),
        light: Some("High"),
    },
    Crop {
        name: "Mini Cucumbers",
        difficulty: Difficulty::Advanced,
        ph_range: "5.5-6.0",
        growth_cycle_days: "50-70",
        description: "Need vertical support and strict humidity control. High production.",
        temperature: Some("22-28°C"),
        light: None,
    },
    Crop {
        name: "Lemon Balm / Mint",
        difficulty: Difficulty::Advanced,
        ph_range: "6.0-7.0",
        growth_cycle_days: "60-90",
        description: "Invasive aromatics that need containment. Vigorous, constant growth.",
        temperature: None,
        light: None,
    },
    Crop {
        name: "Kale",
        difficulty: Difficulty::Advanced,
        ph_range: "6.0-7.5",
        growth_cycle_days: "55-75",
        description: "Needs good oxygenation and steady nutrients. Very nutritious superfood.",
        temperature: Some("15-20°C"),
        light: None,
    },
];
