mod api;
mod types;
mod use_experiment;
mod use_experiments;
mod use_marketplace;

pub use api::*;
pub use types::*;
pub use use_experiment::use_experiment;
pub use use_experiments::use_experiments;
pub use use_marketplace::use_marketplace;
