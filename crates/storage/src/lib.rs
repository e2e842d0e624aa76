mod error;
mod export;
pub mod fs;
pub mod paths;
mod settings;

pub use error::*;
pub use export::*;
pub use settings::*;
