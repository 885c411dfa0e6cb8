pub mod assets;
pub mod health;
pub mod planets;

pub use assets::{api_docs, landing_page};
pub use health::{live, os_info, ready};
pub use planets::lookup_planet;
