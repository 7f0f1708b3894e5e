/// CLI layer: option resolution and output.
pub mod args;
pub mod output;

pub use args::{Configuration, resolve};
pub use output::{StageTimer, write_error, write_outcome};
