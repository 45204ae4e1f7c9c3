pub mod config;
pub mod constants;
pub mod counter;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod modal;
pub mod once;
pub mod rate;
pub mod scroll;
pub mod state;
pub mod tilt;

pub use config::*;
pub use counter::*;
pub use diagram::*;
pub use error::*;
pub use geometry::*;
pub use keys::*;
pub use modal::*;
pub use once::*;
pub use rate::*;
pub use scroll::*;
pub use state::*;
pub use tilt::*;
