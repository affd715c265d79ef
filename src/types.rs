/// One transmission from the sensor block: a workout-type tag plus the
/// raw positional values for that workout type.
#[derive(Debug, Clone)]
pub struct Packet {
    pub tag: String,
    pub data: Vec<f64>,
}

/// Read-only snapshot of the statistics computed for one workout.
///
/// Values keep full precision; rounding to thousandths happens only when
/// the message is rendered.
#[derive(Debug, Clone)]
pub struct Summary {
    pub workout: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// The fixed one-line report, every float at three decimal places.
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}
