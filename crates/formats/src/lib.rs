pub mod country_data;
pub mod flow_data;
pub mod loader;

pub use country_data::*;
pub use flow_data::*;
pub use loader::*;
