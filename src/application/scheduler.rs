use crate::domain::Grid;
use macroquad::logging::info;

/// Target generation rate while running
pub const GENERATIONS_PER_SECOND: f32 = 30.0;
/// Seconds between progress reports
const REPORT_INTERVAL: f32 = 1.0;
/// Seconds of inactivity before the grid is reseeded
const RESEED_INTERVAL: f32 = 30.0;
/// Live probability used for initial seeding and every reseed
pub const SEED_PROBABILITY: f64 = 0.19;

/// Scheduler drives wall-clock timing for the simulation.
///
/// It owns the grid plus all timing state: the unprocessed-time accumulator
/// that decouples generation rate from render rate, the once-per-second
/// report timer, the reseed timer, and the pause flag. One `tick` per loop
/// iteration; rendering happens outside, every iteration, regardless of
/// whether a generation was applied.
pub struct Scheduler {
    pub grid: Grid,
    paused: bool,
    unprocessed_time: f32,
    report_timer: f32,
    reseed_timer: f32,
}

impl Scheduler {
    /// Wrap a grid; starts in the running state
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            paused: false,
            unprocessed_time: 0.0,
            report_timer: 0.0,
            reseed_timer: 0.0,
        }
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip between Running and Paused
    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance exactly one generation, without leaving the paused state.
    /// No-op while running; the fixed-rate tick already covers that case.
    pub fn single_step(&mut self) {
        if self.paused {
            self.grid.step();
        }
    }

    /// One loop iteration's worth of timing, fed the elapsed frame time.
    pub fn tick(&mut self, delta: f32) {
        self.unprocessed_time += delta;

        // At most one generation per tick: the accumulator is zeroed rather
        // than decremented, so the generation rate is capped by the poll rate
        // and never bursts to catch up after a slow frame.
        if self.unprocessed_time > 1.0 / GENERATIONS_PER_SECOND && !self.paused {
            self.unprocessed_time = 0.0;
            self.grid.step();
        }

        self.report_timer += delta;
        if self.report_timer > REPORT_INTERVAL {
            self.reseed_timer += self.report_timer;
            self.report_timer = 0.0;

            // Liveness reseed: without it the grid settles into a static or
            // empty pattern and stays there forever. Runs even while paused.
            if self.reseed_timer > RESEED_INTERVAL {
                self.reseed_timer = 0.0;
                self.grid.randomize(SEED_PROBABILITY);
            }

            info!("Generation: {}", self.grid.generation());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f32 = 1.0 / GENERATIONS_PER_SECOND;

    fn scheduler() -> Scheduler {
        Scheduler::new(Grid::new(8))
    }

    #[test]
    fn test_starts_running() {
        assert!(!scheduler().is_paused());
    }

    #[test]
    fn test_generation_advances_after_interval() {
        let mut s = scheduler();
        s.tick(TICK * 1.5);
        assert_eq!(s.grid.generation(), 2);
    }

    #[test]
    fn test_short_ticks_accumulate() {
        let mut s = scheduler();
        // Individually below the interval, together past it
        s.tick(TICK * 0.6);
        assert_eq!(s.grid.generation(), 1);
        s.tick(TICK * 0.6);
        assert_eq!(s.grid.generation(), 2);
    }

    #[test]
    fn test_at_most_one_generation_per_tick() {
        let mut s = scheduler();
        // Ten intervals' worth of elapsed time still applies one generation
        s.tick(TICK * 10.0);
        assert_eq!(s.grid.generation(), 2);
    }

    #[test]
    fn test_pause_halts_generations() {
        let mut s = scheduler();
        s.toggle_paused();
        for _ in 0..10 {
            s.tick(TICK * 2.0);
        }
        assert_eq!(s.grid.generation(), 1);
        s.toggle_paused();
        s.tick(TICK * 2.0);
        assert_eq!(s.grid.generation(), 2);
    }

    #[test]
    fn test_single_step_only_while_paused() {
        let mut s = scheduler();
        s.single_step();
        assert_eq!(s.grid.generation(), 1);

        s.toggle_paused();
        s.single_step();
        assert_eq!(s.grid.generation(), 2);
        assert!(s.is_paused());
    }

    #[test]
    fn test_reseed_after_boredom_period() {
        let mut s = scheduler();
        s.toggle_paused();
        s.single_step();
        s.single_step();
        assert_eq!(s.grid.generation(), 3);

        // 31 reported seconds while paused: the reseed still fires
        for _ in 0..31 {
            s.tick(1.1);
        }
        assert_eq!(s.grid.generation(), 1);
        // Reseed actually repopulated the all-dead grid
        let alive = s.grid.cells().iter().filter(|c| c.is_alive()).count();
        assert!(alive > 0);
    }
}
