/// Ticks per full animation cycle.
pub const CYCLE_TICKS: u32 = 500;

/// Warmup length: the animate phase begins on the tick after this value.
const WARMUP_TICKS: u32 = 200;

/// Rotation advances by this many degrees per animated tick.
const ROTATION_STEP: f32 = 0.5;

/// Rotation saturates here; derived values hold until wraparound.
const ROTATION_LIMIT: f32 = 90.0;

const BASE_SCALE_Y: f32 = 0.3;
const BASE_POSITION_Y: f32 = 0.4;

/// Animation state for one cycle. Baseline at construction, mutated once
/// per frame by `ConveyorCycle::tick`, wraps every `CYCLE_TICKS` ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleState {
    /// Tick counter in [0, CYCLE_TICKS).
    pub tick: u32,
    pub rotation_degrees: f32,
    pub scale_y: f32,
    pub position_y: f32,
    pub trapezoid: f32,
}

impl Default for CycleState {
    fn default() -> Self {
        Self {
            tick: 0,
            rotation_degrees: 0.0,
            scale_y: BASE_SCALE_Y,
            position_y: BASE_POSITION_Y,
            trapezoid: 0.0,
        }
    }
}

/// Frame parameters consumed by the panel geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelParams {
    pub translation: (f32, f32),
    pub rotation_degrees: f32,
    pub scale: (f32, f32),
    pub trapezoid: f32,
}

/// The cyclic animation driver. Two effective phases per cycle: warmup
/// holds the baseline pose, animate tips the panel up to 90 degrees and
/// holds there until the counter wraps.
#[derive(Debug, Clone, Default)]
pub struct ConveyorCycle {
    state: CycleState,
}

impl ConveyorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cycle by exactly one frame. The only mutator.
    pub fn tick(&mut self) {
        // The warmup boundary is strictly greater-than: the first animated
        // tick is the one after WARMUP_TICKS. Once rotation saturates, the
        // remaining ticks of the cycle hold the terminal values.
        if self.state.tick > WARMUP_TICKS && self.state.rotation_degrees < ROTATION_LIMIT {
            self.state.rotation_degrees += ROTATION_STEP;
            let t = self.state.rotation_degrees / ROTATION_LIMIT;
            self.state.scale_y = BASE_SCALE_Y + t * 0.2;
            self.state.position_y = BASE_POSITION_Y - t * 0.4;
            self.state.trapezoid = t * 0.3;
        }

        self.state.tick += 1;
        if self.state.tick >= CYCLE_TICKS {
            self.state = CycleState::default();
        }
    }

    /// Parameters for the current frame.
    pub fn params(&self) -> PanelParams {
        PanelParams {
            translation: (0.0, self.state.position_y),
            rotation_degrees: self.state.rotation_degrees,
            scale: (1.0, self.state.scale_y),
            trapezoid: self.state.trapezoid,
        }
    }

    pub fn state(&self) -> &CycleState {
        &self.state
    }

    pub fn tick_count(&self) -> u32 {
        self.state.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_state() {
        let cycle = ConveyorCycle::new();
        let p = cycle.params();
        assert_eq!(p.translation, (0.0, 0.4));
        assert_eq!(p.rotation_degrees, 0.0);
        assert_eq!(p.scale, (1.0, 0.3));
        assert_eq!(p.trapezoid, 0.0);
    }

    #[test]
    fn test_warmup_holds_baseline() {
        let mut cycle = ConveyorCycle::new();
        let baseline = cycle.params();

        // Ticks 1..=201 render the baseline pose; the boundary is
        // strictly greater-than, so tick 201 is still unanimated.
        for _ in 0..201 {
            cycle.tick();
            assert_eq!(cycle.params(), baseline);
        }
        assert_eq!(cycle.tick_count(), 201);

        // The next tick starts rotating.
        cycle.tick();
        assert_eq!(cycle.params().rotation_degrees, 0.5);
    }

    #[test]
    fn test_rotation_strictly_increases_until_limit() {
        let mut cycle = ConveyorCycle::new();
        for _ in 0..201 {
            cycle.tick();
        }

        let mut prev = cycle.state().clone();
        // 180 steps of 0.5 degrees take rotation from 0 to exactly 90.
        for _ in 0..180 {
            cycle.tick();
            let s = cycle.state().clone();
            assert!(s.rotation_degrees > prev.rotation_degrees);
            assert!(s.scale_y > prev.scale_y);
            assert!(s.position_y < prev.position_y);
            assert!(s.trapezoid > prev.trapezoid);

            let t = s.rotation_degrees / 90.0;
            assert!((s.scale_y - (0.3 + t * 0.2)).abs() < 1e-6);
            assert!((s.position_y - (0.4 - t * 0.4)).abs() < 1e-6);
            assert!((s.trapezoid - t * 0.3).abs() < 1e-6);

            prev = s;
        }
        assert_eq!(cycle.state().rotation_degrees, 90.0);
    }

    #[test]
    fn test_terminal_hold_until_wraparound() {
        let mut cycle = ConveyorCycle::new();
        for _ in 0..(201 + 180) {
            cycle.tick();
        }
        let terminal = cycle.state().clone();
        assert_eq!(terminal.rotation_degrees, 90.0);
        assert!((terminal.scale_y - 0.5).abs() < 1e-6);
        assert!(terminal.position_y.abs() < 1e-6);
        assert!((terminal.trapezoid - 0.3).abs() < 1e-6);

        // Hold until one tick before the wrap.
        for _ in (201 + 180)..(CYCLE_TICKS as usize - 1) {
            cycle.tick();
            let s = cycle.state();
            assert_eq!(s.rotation_degrees, terminal.rotation_degrees);
            assert_eq!(s.scale_y, terminal.scale_y);
            assert_eq!(s.position_y, terminal.position_y);
            assert_eq!(s.trapezoid, terminal.trapezoid);
        }
    }

    #[test]
    fn test_period_is_exactly_500() {
        let mut cycle = ConveyorCycle::new();
        let initial = cycle.state().clone();

        for _ in 0..CYCLE_TICKS {
            cycle.tick();
        }
        assert_eq!(*cycle.state(), initial);

        // And again: the second cycle is identical.
        for _ in 0..CYCLE_TICKS {
            cycle.tick();
        }
        assert_eq!(*cycle.state(), initial);
    }

    #[test]
    fn test_tick_count_stays_in_range() {
        let mut cycle = ConveyorCycle::new();
        for _ in 0..(CYCLE_TICKS * 2 + 123) {
            cycle.tick();
            assert!(cycle.tick_count() < CYCLE_TICKS);
        }
    }
}
