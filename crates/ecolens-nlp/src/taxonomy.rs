//! SDG12 sustainable-consumption taxonomy: signal label → trigger phrases.
//!
//! Pure data. Declared as an ordered slice because taggers must evaluate
//! labels in declaration order; phrases are stored lowercase so matching
//! can case-fold the text once.

pub const SDG12_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "packaging_waste",
        &[
            "packaging",
            "plastic",
            "excess packaging",
            "too much packaging",
            "bubble wrap",
            "polystyrene",
        ],
    ),
    (
        "durability",
        &[
            "broke",
            "broken",
            "stopped working",
            "fell apart",
            "durable",
            "lasted",
            "sturdy",
        ],
    ),
    (
        "repairability",
        &[
            "repair",
            "fix",
            "spare parts",
            "replacement parts",
            "service center",
            "warranty",
        ],
    ),
    (
        "recyclability",
        &["recyclable", "recycle", "biodegradable", "compostable"],
    ),
    (
        "energy_efficiency",
        &[
            "energy efficient",
            "power consumption",
            "electricity bill",
            "energy rating",
        ],
    ),
    (
        "returns_overconsumption",
        &["return", "refund", "exchanged", "overbuy", "unused", "waste"],
    ),
    (
        "materials_sourcing",
        &[
            "recycled",
            "sustainable",
            "organic",
            "responsibly sourced",
            "sustainably sourced",
            "materials",
        ],
    ),
];
