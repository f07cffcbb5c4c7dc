//! Command implementations

pub mod extend;
pub mod hunt;
pub mod score;
pub mod verify;

pub use extend::run_extend;
pub use hunt::{HuntConfig, run_hunt};
pub use score::run_score;
pub use verify::run_verify;
