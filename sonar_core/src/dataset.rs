// sonar_core/src/dataset.rs

//! Ingestion of the recorded sensor log.
//!
//! The source is headerless CSV with 25 fields per row: 24 range readings
//! followed by the movement label. Row order is frame order. Short rows are
//! padded with missing values; only a row with too many fields is rejected.

use crate::error::DatasetError;
use crate::geometry::SENSOR_COUNT;
use crate::movement::MovementLabel;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Fields per row: one per sensor plus the label.
pub const FIELDS_PER_ROW: usize = SENSOR_COUNT + 1;

/// Range readings of one frame, index-aligned with the sensor geometry.
/// Missing or unparseable values are NaN.
pub type Readings = [f64; SENSOR_COUNT];

/// One row of the log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorFrame {
    pub readings: Readings,
    pub label: MovementLabel,
}

impl SensorFrame {
    pub fn new(readings: Readings, label: MovementLabel) -> Self {
        Self { readings, label }
    }

    /// `false` when every reading is NaN or infinite.
    pub fn has_finite_readings(&self) -> bool {
        self.readings.iter().any(|r| r.is_finite())
    }
}

/// The immutable, ordered table of recorded frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorLog {
    frames: Vec<SensorFrame>,
    /// How many reading fields had to be replaced by NaN while parsing.
    coerced_readings: usize,
}

impl SensorLog {
    pub fn from_frames(frames: Vec<SensorFrame>) -> Self {
        Self {
            frames,
            coerced_readings: 0,
        }
    }

    /// Loads a log from disk. An unreadable file is a load failure; there is no
    /// partial result.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parses a log from any reader. Fields are unquoted and trimmed; blank
    /// lines are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rows = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut log = Self::default();
        let mut record = StringRecord::new();
        while rows.read_record(&mut record)? {
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            let line = record.position().map_or(0, |p| p.line() as usize);
            let (frame, coerced) = parse_record(line, &record)?;
            log.coerced_readings += coerced;
            log.frames.push(frame);
        }
        Ok(log)
    }

    pub fn parse_str(text: &str) -> Result<Self, DatasetError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[SensorFrame] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&SensorFrame> {
        self.frames.get(index)
    }

    pub fn labels(&self) -> impl Iterator<Item = &MovementLabel> {
        self.frames.iter().map(|f| &f.label)
    }

    pub fn coerced_readings(&self) -> usize {
        self.coerced_readings
    }

    /// Largest finite reading anywhere in the log, if there is one.
    pub fn max_finite_reading(&self) -> Option<f64> {
        self.frames
            .iter()
            .flat_map(|f| f.readings.iter().copied())
            .filter(|r| r.is_finite())
            .reduce(f64::max)
    }
}

/// Turns one record into a frame. Returns the frame and the number of
/// readings that were missing or unparseable and therefore set to NaN.
fn parse_record(line: usize, record: &StringRecord) -> Result<(SensorFrame, usize), DatasetError> {
    if record.len() > FIELDS_PER_ROW {
        return Err(DatasetError::FieldCount {
            line,
            expected: FIELDS_PER_ROW,
            found: record.len(),
        });
    }

    let mut readings = [f64::NAN; SENSOR_COUNT];
    let mut coerced = 0;
    for (sensor, slot) in readings.iter_mut().enumerate() {
        match record.get(sensor).map(|field| field.parse::<f64>()) {
            Some(Ok(value)) => *slot = value,
            _ => coerced += 1,
        }
    }

    // Fields are positional: a short row loses its label first.
    let label = MovementLabel::parse(record.get(SENSOR_COUNT).unwrap_or(""));
    Ok((SensorFrame::new(readings, label), coerced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn row(readings: &[&str], label: &str) -> String {
        let mut fields: Vec<&str> = readings.to_vec();
        fields.push(label);
        fields.join(",")
    }

    fn uniform_row(value: &str, label: &str) -> String {
        row(&[value; SENSOR_COUNT], label)
    }

    #[test]
    fn parses_rows_in_order() {
        let text = [
            uniform_row("0.5", "Move-Forward"),
            uniform_row("1.25", "Sharp-Right-Turn"),
            uniform_row("2", "Slight-Left-Turn"),
        ]
        .join("\n");
        let log = SensorLog::from_reader(Cursor::new(text)).unwrap();

        assert_eq!(log.len(), 3);
        assert_eq!(log.frames()[0].label, MovementLabel::MoveForward);
        assert_eq!(log.frames()[1].readings, [1.25; SENSOR_COUNT]);
        assert_eq!(log.frames()[2].label, MovementLabel::SlightLeftTurn);
        assert_eq!(log.coerced_readings(), 0);
    }

    #[test]
    fn unparseable_readings_become_nan() {
        let mut readings = vec!["3.0"; SENSOR_COUNT];
        readings[0] = "";
        readings[4] = "n/a";
        readings[23] = " 7.5 ";
        let log = SensorLog::parse_str(&row(&readings, "Move-Forward")).unwrap();
        let frame = &log.frames()[0];

        assert!(frame.readings[0].is_nan());
        assert!(frame.readings[4].is_nan());
        assert_eq!(frame.readings[23], 7.5);
        assert_eq!(log.coerced_readings(), 2);
        assert!(frame.has_finite_readings());
    }

    #[test]
    fn all_nan_frame_still_loads() {
        let log = SensorLog::parse_str(&uniform_row("x", "Move-Forward")).unwrap();
        assert_eq!(log.len(), 1);
        assert!(!log.frames()[0].has_finite_readings());
        assert_eq!(log.max_finite_reading(), None);
    }

    #[test]
    fn unknown_label_is_kept() {
        let log = SensorLog::parse_str(&uniform_row("1", "Reverse")).unwrap();
        assert_eq!(log.frames()[0].label, MovementLabel::Other("Reverse".into()));
    }

    #[test]
    fn blank_lines_and_crlf_are_tolerated() {
        let text = format!(
            "{}\r\n\r\n{}\r\n",
            uniform_row("1", "Move-Forward"),
            uniform_row("2", "Slight-Right-Turn")
        );
        let log = SensorLog::parse_str(&text).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.frames()[1].label, MovementLabel::SlightRightTurn);
    }

    #[test]
    fn too_many_fields_reports_the_line() {
        let text = format!(
            "{}\n{},9\n",
            uniform_row("1", "Move-Forward"),
            uniform_row("1", "Move-Forward")
        );
        match SensorLog::parse_str(&text) {
            Err(DatasetError::FieldCount {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 25);
                assert_eq!(found, 26);
            }
            other => panic!("expected a field count error, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_padded_with_nan() {
        // 23 readings and a label: the label lands in the last reading slot
        // and the label column is empty.
        let text = [
            row(&["5"; SENSOR_COUNT - 1], "Move-Forward"),
            uniform_row("2", "Slight-Left-Turn"),
        ]
        .join("\n");
        let log = SensorLog::parse_str(&text).unwrap();

        assert_eq!(log.len(), 2);
        let short = &log.frames()[0];
        assert_eq!(short.readings[22], 5.0);
        assert!(short.readings[23].is_nan());
        assert_eq!(short.label, MovementLabel::Other(String::new()));
        assert_eq!(log.coerced_readings(), 1);
        assert_eq!(log.frames()[1].label, MovementLabel::SlightLeftTurn);
    }

    #[test]
    fn truncated_row_counts_every_missing_reading() {
        let log = SensorLog::parse_str("1,2,3").unwrap();
        let frame = &log.frames()[0];

        assert_eq!(&frame.readings[..3], &[1.0, 2.0, 3.0]);
        assert!(frame.readings[3..].iter().all(|r| r.is_nan()));
        assert_eq!(frame.label, MovementLabel::Other(String::new()));
        assert_eq!(log.coerced_readings(), SENSOR_COUNT - 3);
    }

    #[test]
    fn quoted_fields_are_unquoted() {
        let mut readings = vec!["4"; SENSOR_COUNT];
        readings[0] = "\"3.5\"";
        readings[1] = "\" 12 \"";
        let text = [
            row(&readings, "\"Move-Forward\""),
            uniform_row("4", "\"Sharp-Right-Turn\""),
        ]
        .join("\n");
        let log = SensorLog::parse_str(&text).unwrap();

        assert_eq!(log.frames()[0].label, MovementLabel::MoveForward);
        assert_eq!(log.frames()[0].readings[0], 3.5);
        assert_eq!(log.frames()[0].readings[1], 12.0);
        assert_eq!(log.frames()[1].label, MovementLabel::SharpRightTurn);
        assert_eq!(log.coerced_readings(), 0);
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let err = SensorLog::load("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
    }

    #[test]
    fn max_reading_ignores_nan_and_infinity() {
        let mut readings = vec!["1.0"; SENSOR_COUNT];
        readings[2] = "inf";
        readings[3] = "4.5";
        readings[4] = "nan";
        let text = [row(&readings, "Move-Forward"), uniform_row("2.0", "Move-Forward")].join("\n");
        let log = SensorLog::parse_str(&text).unwrap();
        assert_eq!(log.max_finite_reading(), Some(4.5));
    }

    #[test]
    fn empty_input_is_an_empty_log() {
        let log = SensorLog::parse_str("").unwrap();
        assert!(log.is_empty());
        assert_eq!(log.labels().count(), 0);
    }
}
