pub mod planet;

pub use planet::{reference_planets, Planet};
