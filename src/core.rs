pub mod assessment;
pub mod emissions;
pub mod error;
pub mod profile;
pub mod provider;
pub mod ranking;
pub mod scenario;
pub mod score;
pub mod zone;
