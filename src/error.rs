use thiserror::Error;

/// Failure modes of packet dispatch and the workout formulas.
///
/// None of these are recovered internally; they surface to the caller,
/// which is expected to halt.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("unknown workout type {0:?} (expected SWM, RUN or WLK)")]
    UnknownWorkoutType(String),

    #[error("{workout} takes {expected} sensor values, got {got}")]
    ArityMismatch {
        workout: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("action count must be a non-negative integer, got {0}")]
    InvalidActionCount(f64),

    /// The generic record has no calorie formula of its own.
    #[error("spent_calories is not defined for {workout}")]
    CaloriesNotImplemented { workout: &'static str },

    #[error("mean speed is undefined for a zero-length workout")]
    ZeroDuration,
}
