mod controller;
mod error;
mod form;
mod record;
mod store;

#[cfg(feature = "firestore")]
pub mod firestore;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use controller::*;
pub use error::*;
pub use form::*;
pub use record::*;
pub use store::*;
