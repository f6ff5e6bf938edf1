use serde::Deserialize;

use crate::error::AnimationError;
use crate::sequences::Movement;

/// Public API: parse a JSON movement list (the shape produced by choreography
/// generators) into core [`Movement`]s.
///
/// Notes:
/// - `timing` may be a number (`2.0`) or a string whose leading token is a
///   number (`"2.0"`, `"2"`, `"3 beats"`). It becomes `Movement::duration`.
/// - Non-finite or non-positive timing is rejected as `InvalidTiming`.
/// - Pose ids are not checked here; the sequencer validates them against the
///   session catalog.
pub fn parse_movements_json(s: &str) -> Result<Vec<Movement>, AnimationError> {
    let raw: Vec<StoredMovement> = serde_json::from_str(s)?;
    raw.into_iter().map(StoredMovement::into_core).collect()
}

#[derive(Debug, Deserialize)]
struct StoredMovement {
    #[serde(default)]
    position: String,
    #[serde(default)]
    movement: String,
    #[serde(alias = "duration")]
    timing: RawTiming,
    frames: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTiming {
    Number(f64),
    Text(String),
}

impl StoredMovement {
    fn into_core(self) -> Result<Movement, AnimationError> {
        let duration = parse_timing(&self.timing)?;
        Ok(Movement {
            position: self.position,
            movement: self.movement,
            duration,
            frames: self.frames,
        })
    }
}

fn parse_timing(raw: &RawTiming) -> Result<f64, AnimationError> {
    let (value, text) = match raw {
        RawTiming::Number(v) => (*v, v.to_string()),
        RawTiming::Text(s) => {
            let token = s.split_whitespace().next().unwrap_or("");
            let v = token.parse::<f64>().map_err(|_| AnimationError::InvalidTiming {
                raw: s.clone(),
                reason: "expected a leading number".into(),
            })?;
            (v, s.clone())
        }
    };
    if !value.is_finite() || value <= 0.0 {
        return Err(AnimationError::InvalidTiming {
            raw: text,
            reason: "must be a positive finite number".into(),
        });
    }
    Ok(value)
}
