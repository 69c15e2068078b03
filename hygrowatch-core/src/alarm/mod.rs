//! Alarm evaluation

mod evaluator;

pub use evaluator::{AlarmEvaluator, AlarmOutcome, AlarmReport, AlarmState, CONFIRM_SAMPLES};
