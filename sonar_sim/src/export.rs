// sonar_sim/src/export.rs

//! Headless runs: collect every rendered frame in order and, optionally, write
//! them out together with the full trajectory as JSON.

use anyhow::Context;
use bevy::prelude::*;
use serde::Serialize;
use sonar_core::geometry::SENSOR_COUNT;
use sonar_core::render::RenderState;
use sonar_core::trajectory::Trajectory;
use sonar_core::Replay;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::app_state::{PlaybackState, ReplaySet};
use crate::replay::CurrentFrame;

/// Frames rendered so far, in display order.
#[derive(Resource, Debug, Default)]
pub struct ExportBuffer(pub Vec<RenderState>);

/// Where to write the JSON document, if anywhere.
#[derive(Resource, Debug, Clone, Default)]
pub struct ExportTarget(pub Option<PathBuf>);

/// The on-disk document: the whole trajectory plus one `RenderState` per frame.
/// Non-finite numbers serialise as `null`.
#[derive(Debug, Serialize)]
pub struct ReplayExport<'a> {
    pub frame_count: usize,
    pub sensor_count: usize,
    pub trajectory: &'a Trajectory,
    pub frames: &'a [RenderState],
}

impl<'a> ReplayExport<'a> {
    pub fn new(replay: &'a Replay, frames: &'a [RenderState]) -> Self {
        Self {
            frame_count: replay.frame_count(),
            sensor_count: SENSOR_COUNT,
            trajectory: replay.trajectory(),
            frames,
        }
    }
}

pub fn write_export(path: &Path, export: &ReplayExport) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create export file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, export)
        .with_context(|| format!("failed to serialise replay to {:?}", path))?;
    writer.flush()?;
    Ok(())
}

pub struct HeadlessExportPlugin {
    pub target: Option<PathBuf>,
}

impl Plugin for HeadlessExportPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ExportTarget(self.target.clone()))
            .init_resource::<ExportBuffer>()
            .add_systems(
                Update,
                collect_rendered_frame
                    .in_set(ReplaySet::Present)
                    .run_if(resource_changed::<CurrentFrame>),
            )
            .add_systems(OnEnter(PlaybackState::Finished), finish_headless_run);
    }
}

fn collect_rendered_frame(current: Res<CurrentFrame>, mut buffer: ResMut<ExportBuffer>) {
    let Some(state) = current.0.as_ref() else {
        return;
    };
    if buffer.0.last().map(|s| s.frame_index) != Some(state.frame_index) {
        buffer.0.push(state.clone());
    }
}

fn finish_headless_run(
    replay: Res<Replay>,
    buffer: Res<ExportBuffer>,
    target: Res<ExportTarget>,
    mut exit: EventWriter<AppExit>,
) {
    let with_close = buffer
        .0
        .iter()
        .filter(|s| !s.radar.close_sensors.is_empty())
        .count();
    info!(
        "Rendered {}/{} frames ({} with close obstacles).",
        buffer.0.len(),
        replay.frame_count(),
        with_close
    );

    let Some(path) = target.0.as_ref() else {
        exit.write(AppExit::Success);
        return;
    };
    match write_export(path, &ReplayExport::new(&replay, &buffer.0)) {
        Ok(()) => {
            info!("Wrote replay export to {:?}", path);
            exit.write(AppExit::Success);
        }
        Err(e) => {
            error!("{:#}", e);
            exit.write(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_core::config::ReplayConfig;
    use sonar_core::dataset::SensorLog;

    fn replay() -> Replay {
        let mut rows = Vec::new();
        for label in ["Move-Forward", "Slight-Left-Turn", "Sharp-Right-Turn"] {
            let mut fields = vec!["50"; SENSOR_COUNT];
            fields[3] = "bad";
            fields[7] = "12.5";
            fields.push(label);
            rows.push(fields.join(","));
        }
        let log = SensorLog::parse_str(&rows.join("\n")).unwrap();
        Replay::new(log, ReplayConfig::default()).unwrap()
    }

    #[test]
    fn export_document_has_trajectory_and_ordered_frames() {
        let replay = replay();
        let frames: Vec<RenderState> = (0..replay.frame_count())
            .map(|i| replay.render(i).unwrap())
            .collect();
        let value = serde_json::to_value(ReplayExport::new(&replay, &frames)).unwrap();

        assert_eq!(value["frame_count"], 3);
        assert_eq!(value["sensor_count"], 24);
        assert_eq!(value["trajectory"].as_array().unwrap().len(), 4);
        assert_eq!(value["trajectory"][1]["heading_deg"], 0.0);
        assert_eq!(value["frames"].as_array().unwrap().len(), 3);
        assert_eq!(value["frames"][2]["caption"]["frame_number"], 3);
        assert_eq!(value["frames"][1]["label"], "Slight-Left-Turn");
        assert_eq!(value["frames"][0]["color"], "green");
        assert_eq!(value["frames"][0]["radar"]["close_sensors"], serde_json::json!([7]));
        // The unparseable reading survives as a null range.
        assert!(value["frames"][0]["radar"]["vertices"][3]["range"].is_null());
    }

    #[test]
    fn export_is_written_to_disk() {
        let replay = replay();
        let frames = vec![replay.render(0).unwrap()];
        let path = std::env::temp_dir().join(format!("sonar_export_{}.json", std::process::id()));

        write_export(&path, &ReplayExport::new(&replay, &frames)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["frames"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let replay = replay();
        let result = write_export(
            Path::new("no/such/dir/export.json"),
            &ReplayExport::new(&replay, &[]),
        );
        assert!(result.is_err());
    }
}
