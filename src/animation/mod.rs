//! Conveyor animation cycle
//!
//! A tick-based state machine producing the per-frame transform
//! parameters for the panel. One tick equals one rendered frame.

mod conveyor;

pub use conveyor::{ConveyorCycle, CycleState, PanelParams, CYCLE_TICKS};
