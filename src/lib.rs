// Domain layer - grid and update rule
pub mod domain;

// Application layer - loop timing and coordination
pub mod application;

// Infrastructure layer - rendering and input glue
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid};
pub use application::{GENERATIONS_PER_SECOND, SEED_PROBABILITY, Scheduler};
pub use rendering::Renderer;
