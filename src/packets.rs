use crate::dlog;
use crate::types::Packet;
use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Simulated transmission from the sensor block, used when no packets
/// file is given.
pub fn sample_packets() -> Vec<Packet> {
    vec![
        Packet {
            tag: "SWM".to_string(),
            data: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        Packet {
            tag: "RUN".to_string(),
            data: vec![15000.0, 1.0, 75.0],
        },
        Packet {
            tag: "WLK".to_string(),
            data: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ]
}

/// Read packets from a JSON file shaped like
/// `[["SWM", [720, 1, 80, 25, 40]], ["RUN", [15000, 1, 75]]]`.
pub fn collect_from_file(path: &Path) -> Result<Vec<Packet>> {
    let disp = path.display();
    let raw =
        fs::read_to_string(path).with_context(|| format!("Reading packets file: {disp}"))?;
    let json: JsonValue =
        serde_json::from_str(&raw).with_context(|| format!("Parsing packets file: {disp}"))?;

    let Some(entries) = json.as_array() else {
        bail!("Packets file must hold a top-level JSON array: {disp}");
    };

    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let packet =
            parse_packet(entry).with_context(|| format!("Packet #{} in {disp}", i + 1))?;
        out.push(packet);
    }

    dlog!("packets_loaded file={disp} count={}", out.len());
    Ok(out)
}

fn parse_packet(entry: &JsonValue) -> Result<Packet> {
    let Some(pair) = entry.as_array() else {
        bail!("expected a [tag, data] pair, got: {entry}");
    };
    if pair.len() != 2 {
        bail!("expected a [tag, data] pair, got {} elements", pair.len());
    }

    let Some(tag) = pair[0].as_str() else {
        bail!("workout-type tag must be a string, got: {}", pair[0]);
    };
    let Some(values) = pair[1].as_array() else {
        bail!("sensor data must be an array of numbers, got: {}", pair[1]);
    };

    let mut data = Vec::with_capacity(values.len());
    for v in values {
        let Some(n) = v.as_f64() else {
            bail!("sensor data must be numeric, found: {v}");
        };
        data.push(n);
    }

    Ok(Packet {
        tag: tag.to_string(),
        data,
    })
}
