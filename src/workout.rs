use crate::error::Error;
use crate::types::Summary;
use std::fmt::Debug;

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

/// One step (running or walking) in meters.
const LEN_STEP_M: f64 = 0.65;
/// One swimming stroke in meters.
const LEN_STROKE_M: f64 = 1.38;

/// A tracked workout session.
///
/// The base formulas for distance and mean speed live here; every workout
/// type supplies its own calorie formula. All formulas are pure functions
/// of the stored fields, so they can be queried any number of times.
pub trait Training: Debug {
    /// Display name used in the summary line.
    fn name(&self) -> &'static str;

    /// Steps, strides or strokes recorded by the sensor block.
    fn action(&self) -> u32;

    /// Session length in hours.
    fn duration_h(&self) -> f64;

    /// Athlete weight in kg.
    fn weight_kg(&self) -> f64;

    /// Meters covered by one action.
    fn step_len_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance covered over the session, in km.
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.step_len_m() / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h.
    fn mean_speed_kmh(&self) -> Result<f64, Error> {
        if self.duration_h() == 0.0 {
            return Err(Error::ZeroDuration);
        }
        Ok(self.distance_km() / self.duration_h())
    }

    /// Energy spent over the session, in kcal.
    ///
    /// The generic record has no formula; every shipped workout type
    /// overrides this, so the error is unreachable through `dispatch`.
    fn spent_calories(&self) -> Result<f64, Error> {
        Err(Error::CaloriesNotImplemented {
            workout: self.name(),
        })
    }

    /// Snapshot of all computed statistics.
    fn summary(&self) -> Result<Summary, Error> {
        Ok(Summary {
            workout: self.name().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh()?,
            calories_kcal: self.spent_calories()?,
        })
    }
}

/// Workout: running.
#[derive(Debug, Clone)]
pub struct Running {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Running {
    pub const fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> Result<f64, Error> {
        const SPEED_FACTOR: f64 = 18.0;
        const SPEED_SHIFT: f64 = 20.0;

        Ok(
            (SPEED_FACTOR * self.mean_speed_kmh()? - SPEED_SHIFT) * self.weight_kg / M_IN_KM
                * (self.duration_h * MIN_IN_H),
        )
    }
}

/// Workout: sports walking.
#[derive(Debug, Clone)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    /// Athlete height in cm.
    pub height_cm: f64,
}

impl SportsWalking {
    pub const fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> Result<f64, Error> {
        const WEIGHT_FACTOR: f64 = 0.035;
        const SPEED_PER_HEIGHT_FACTOR: f64 = 0.029;

        // The squared-speed-over-height quotient is floored, never truncated.
        let speed_per_height = (self.mean_speed_kmh()?.powi(2) / self.height_cm).floor();

        Ok(
            (WEIGHT_FACTOR * self.weight_kg
                + speed_per_height * SPEED_PER_HEIGHT_FACTOR * self.weight_kg)
                * (self.duration_h * MIN_IN_H),
        )
    }
}

/// Workout: swimming.
#[derive(Debug, Clone)]
pub struct Swimming {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    /// Pool length in meters.
    pub pool_length_m: f64,
    /// How many times the athlete crossed the pool.
    pub pool_laps: f64,
}

impl Swimming {
    pub const fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_len_m(&self) -> f64 {
        LEN_STROKE_M
    }

    // Pool-based speed: the stroke count does not enter this formula,
    // only the generic distance one.
    fn mean_speed_kmh(&self) -> Result<f64, Error> {
        if self.duration_h == 0.0 {
            return Err(Error::ZeroDuration);
        }
        Ok(self.pool_length_m * self.pool_laps / M_IN_KM / self.duration_h)
    }

    fn spent_calories(&self) -> Result<f64, Error> {
        const SPEED_SHIFT: f64 = 1.1;
        const WEIGHT_FACTOR: f64 = 2.0;

        Ok((self.mean_speed_kmh()? + SPEED_SHIFT) * WEIGHT_FACTOR * self.weight_kg)
    }
}
