use crate::error::Error;
use crate::workout::{Running, SportsWalking, Swimming, Training};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Builder = fn(&[f64]) -> Result<Box<dyn Training>, Error>;

/// Tag-to-constructor table for the supported workout types.
static WORKOUT_TYPES: Lazy<HashMap<&'static str, Builder>> = Lazy::new(|| {
    HashMap::from([
        ("SWM", build_swimming as Builder),
        ("RUN", build_running as Builder),
        ("WLK", build_walking as Builder),
    ])
});

/// Build the workout record described by one sensor packet.
///
/// `data` is unpacked positionally: action count, duration in hours and
/// weight in kg, then the extra fields of the workout type (athlete
/// height for WLK; pool length and lap count for SWM).
pub fn read_packet(tag: &str, data: &[f64]) -> Result<Box<dyn Training>, Error> {
    let build = WORKOUT_TYPES
        .get(tag)
        .ok_or_else(|| Error::UnknownWorkoutType(tag.to_string()))?;
    build(data)
}

fn build_running(data: &[f64]) -> Result<Box<dyn Training>, Error> {
    check_arity("Running", 3, data)?;
    Ok(Box::new(Running::new(
        action_count(data[0])?,
        data[1],
        data[2],
    )))
}

fn build_walking(data: &[f64]) -> Result<Box<dyn Training>, Error> {
    check_arity("SportsWalking", 4, data)?;
    Ok(Box::new(SportsWalking::new(
        action_count(data[0])?,
        data[1],
        data[2],
        data[3],
    )))
}

fn build_swimming(data: &[f64]) -> Result<Box<dyn Training>, Error> {
    check_arity("Swimming", 5, data)?;
    Ok(Box::new(Swimming::new(
        action_count(data[0])?,
        data[1],
        data[2],
        data[3],
        data[4],
    )))
}

fn check_arity(workout: &'static str, expected: usize, data: &[f64]) -> Result<(), Error> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(Error::ArityMismatch {
            workout,
            expected,
            got: data.len(),
        })
    }
}

/// Sensor values arrive as floats; the action counter must carry a whole
/// non-negative number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn action_count(value: f64) -> Result<u32, Error> {
    if value >= 0.0 && value <= f64::from(u32::MAX) && value.fract() == 0.0 {
        Ok(value as u32)
    } else {
        Err(Error::InvalidActionCount(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_all_three_tags() {
        let run = read_packet("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run.name(), "Running");

        let walk = read_packet("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.name(), "SportsWalking");

        let swim = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swim.name(), "Swimming");
    }

    #[test]
    fn dispatched_records_compute_known_values() {
        let run = read_packet("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let summary = run.summary().unwrap();
        assert!((summary.calories_kcal - 699.75).abs() < 1e-9);

        let swim = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let summary = swim.summary().unwrap();
        assert!((summary.speed_kmh - 1.0).abs() < 1e-9);
        assert!((summary.calories_kcal - 336.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            read_packet("XYZ", &[1.0]).unwrap_err(),
            Error::UnknownWorkoutType("XYZ".to_string())
        );
    }

    #[test]
    fn wrong_value_count_is_rejected() {
        assert_eq!(
            read_packet("RUN", &[15000.0, 1.0]).unwrap_err(),
            Error::ArityMismatch {
                workout: "Running",
                expected: 3,
                got: 2
            }
        );
        assert_eq!(
            read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 7.0]).unwrap_err(),
            Error::ArityMismatch {
                workout: "Swimming",
                expected: 5,
                got: 6
            }
        );
    }

    #[test]
    fn action_counter_must_be_a_whole_number() {
        assert_eq!(
            read_packet("RUN", &[-1.0, 1.0, 75.0]).unwrap_err(),
            Error::InvalidActionCount(-1.0)
        );
        assert_eq!(
            read_packet("RUN", &[0.5, 1.0, 75.0]).unwrap_err(),
            Error::InvalidActionCount(0.5)
        );
    }
}
