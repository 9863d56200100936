mod scheduler;

pub use scheduler::{GENERATIONS_PER_SECOND, SEED_PROBABILITY, Scheduler};
