pub mod catalog;
pub mod error;
pub mod name;
pub mod registry;
pub mod traits;

pub use name::ToolName;
pub use registry::{Observation, ToolRegistry};
pub use traits::Tool;
