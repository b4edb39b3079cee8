mod driver;
mod model;
mod settings;

pub use driver::*;
pub use model::*;
pub use settings::*;
