pub mod views;
pub mod components;
pub mod utils;
pub mod content;
mod routes;
pub mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::SiteConfig;
pub use crate::error::SiteError;
