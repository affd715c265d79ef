use std::fs;
use strivadenn::{dispatch, packets};

fn messages_for(json: &str) -> Vec<String> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("packets.json");
    fs::write(&path, json).unwrap();

    let collected = packets::collect_from_file(&path).unwrap();
    collected
        .iter()
        .map(|p| {
            dispatch::read_packet(&p.tag, &p.data)
                .unwrap()
                .summary()
                .unwrap()
                .message()
        })
        .collect()
}

#[test]
fn sensor_file_to_summary_lines() {
    let messages = messages_for(
        r#"[
            ["SWM", [720, 1, 80, 25, 40]],
            ["RUN", [15000, 1, 75]],
            ["WLK", [9000, 1, 75, 180]]
        ]"#,
    );

    assert_eq!(
        messages,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn builtin_samples_dispatch_cleanly() {
    for packet in packets::sample_packets() {
        let workout = dispatch::read_packet(&packet.tag, &packet.data).unwrap();
        let summary = workout.summary().unwrap();
        assert!(summary.distance_km >= 0.0);
        assert!(summary.calories_kcal > 0.0);
    }
}

#[test]
fn malformed_packet_reports_its_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("packets.json");
    fs::write(&path, r#"[["RUN", [15000, 1, 75]], ["RUN", "x"]]"#).unwrap();

    let err = packets::collect_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Packet #2"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = packets::collect_from_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(format!("{err:#}").contains("Reading packets file"));
}
