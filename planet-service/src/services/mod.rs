pub mod database;
pub mod metrics;
pub mod seeder;

pub use database::PlanetDb;
pub use metrics::{get_metrics, init_metrics, record_planet_lookup};
pub use seeder::reset_reference_data;
