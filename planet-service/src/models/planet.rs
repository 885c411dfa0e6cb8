use serde::{Deserialize, Serialize};

/// A planet record as stored in the `planets` collection.
///
/// `id` is the lookup key, distinct from the storage engine's `_id`.
/// Velocity and distance are display strings carrying their units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    pub id: i64,
    pub description: String,
    pub image: String,
    pub velocity: String,
    pub distance: String,
}

/// The fixed reference dataset the seed loader installs: the eight planets,
/// ids 1 through 8. Single source of truth for seeding and test expectations.
pub fn reference_planets() -> Vec<Planet> {
    vec![
        Planet {
            name: "Mercury".to_string(),
            id: 1,
            description: "Closest planet to the sun.".to_string(),
            image: "https://example.com/images/mercury.jpg".to_string(),
            velocity: "47.87 km/s".to_string(),
            distance: "57.9 million km".to_string(),
        },
        Planet {
            name: "Venus".to_string(),
            id: 2,
            description: "Second planet from the sun.".to_string(),
            image: "https://example.com/images/venus.jpg".to_string(),
            velocity: "35.02 km/s".to_string(),
            distance: "108.2 million km".to_string(),
        },
        Planet {
            name: "Earth".to_string(),
            id: 3,
            description: "Our home planet.".to_string(),
            image: "https://example.com/images/earth.jpg".to_string(),
            velocity: "29.78 km/s".to_string(),
            distance: "149.6 million km".to_string(),
        },
        Planet {
            name: "Mars".to_string(),
            id: 4,
            description: "The red planet.".to_string(),
            image: "https://example.com/images/mars.jpg".to_string(),
            velocity: "24.07 km/s".to_string(),
            distance: "227.9 million km".to_string(),
        },
        Planet {
            name: "Jupiter".to_string(),
            id: 5,
            description: "The largest planet in our solar system.".to_string(),
            image: "https://example.com/images/jupiter.jpg".to_string(),
            velocity: "13.07 km/s".to_string(),
            distance: "778.5 million km".to_string(),
        },
        Planet {
            name: "Saturn".to_string(),
            id: 6,
            description: "Famous for its rings.".to_string(),
            image: "https://example.com/images/saturn.jpg".to_string(),
            velocity: "9.69 km/s".to_string(),
            distance: "1.43 billion km".to_string(),
        },
        Planet {
            name: "Uranus".to_string(),
            id: 7,
            description: "An ice giant with a tilted rotation.".to_string(),
            image: "https://example.com/images/uranus.jpg".to_string(),
            velocity: "6.81 km/s".to_string(),
            distance: "2.87 billion km".to_string(),
        },
        Planet {
            name: "Neptune".to_string(),
            id: 8,
            description: "The farthest planet from the sun.".to_string(),
            image: "https://example.com/images/neptune.jpg".to_string(),
            velocity: "5.43 km/s".to_string(),
            distance: "4.5 billion km".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_dataset_has_eight_unique_ids() {
        let planets = reference_planets();
        assert_eq!(planets.len(), 8);

        let ids: HashSet<i64> = planets.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=8).collect::<HashSet<i64>>());
    }

    #[test]
    fn reference_dataset_spans_mercury_to_neptune() {
        let planets = reference_planets();
        assert_eq!(planets.first().map(|p| p.name.as_str()), Some("Mercury"));
        assert_eq!(planets.last().map(|p| p.name.as_str()), Some("Neptune"));
    }

    #[test]
    fn planet_ignores_storage_id_on_deserialization() {
        let json = serde_json::json!({
            "_id": { "$oid": "507f1f77bcf86cd799439011" },
            "name": "Pluto",
            "id": 9,
            "description": "Not a planet anymore.",
            "image": "https://example.com/images/pluto.jpg",
            "velocity": "4.74 km/s",
            "distance": "5.9 billion km"
        });

        let planet: Planet = serde_json::from_value(json).expect("deserialization failed");
        assert_eq!(planet.id, 9);
        assert_eq!(planet.name, "Pluto");
    }
}
