mod migrate;
mod server;

pub use migrate::{migrate, reset};
pub use server::{app, build_state, serve};
