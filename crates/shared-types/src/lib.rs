pub mod config;
pub mod forms;
pub mod models;
pub mod requests;

pub use config::*;
pub use forms::*;
pub use models::*;
pub use requests::*;
