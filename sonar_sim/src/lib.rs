// sonar_sim/src/lib.rs

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use sonar_core::Replay;

use crate::app_state::PlaybackState;
use crate::cli::Cli;
use crate::config::ViewerConfig;
use crate::export::HeadlessExportPlugin;
use crate::render::PanelsPlugin;
use crate::replay::{Pacing, PlaybackCursor, ReplayPlugin};

// This prelude is for convenience for other files WITHIN the sonar_sim crate.
pub mod prelude;

pub mod app_state;
pub mod cli;
pub mod config;
pub mod export;
pub mod render;
pub mod replay;

/// Log filter shared by windowed and headless runs.
const LOG_FILTER: &str = "info,wgpu_core=error,wgpu_hal=error,sonar_sim=debug,sonar_core=debug";

/// Installs the replay driver and its initial playback state.
/// Expects `Replay` and `PlaybackCursor` resources to be present.
pub struct SonarReplayPlugin {
    pub pacing: Pacing,
    pub start_paused: bool,
}

impl Plugin for SonarReplayPlugin {
    fn build(&self, app: &mut App) {
        let initial = if self.start_paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        };
        app.insert_state(initial)
            .add_plugins(ReplayPlugin { pacing: self.pacing });
    }
}

/// Inserts the loaded replay and a cursor on its first frame.
pub fn insert_replay(app: &mut App, replay: Replay) {
    app.insert_resource(PlaybackCursor::new(replay.frame_count()))
        .insert_resource(replay);
}

fn log_plugin() -> LogPlugin {
    LogPlugin {
        level: bevy::log::Level::INFO,
        filter: LOG_FILTER.to_string(),
        ..default()
    }
}

/// Assembles the app for either a windowed or a headless run.
pub fn build_app(cli: &Cli, config: ViewerConfig, replay: Replay) -> App {
    let mut app = App::new();

    if cli.headless {
        // Every frame, once, as fast as possible. Pausing would never end.
        app.add_plugins((MinimalPlugins, StatesPlugin, log_plugin()))
            .add_plugins(HeadlessExportPlugin {
                target: cli.export.clone(),
            })
            .add_plugins(SonarReplayPlugin {
                pacing: Pacing::Unpaced,
                start_paused: false,
            });
    } else {
        let [r, g, b] = config.window.background;
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: (config.window.width, config.window.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(log_plugin()),
        )
        .insert_resource(ClearColor(Color::srgb(r, g, b)))
        .add_plugins(PanelsPlugin)
        .add_plugins(SonarReplayPlugin {
            pacing: Pacing::Interval(config.frame_interval()),
            start_paused: config.playback.start_paused,
        });
    }

    insert_replay(&mut app, replay);
    app.insert_resource(config);
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportBuffer;
    use sonar_core::config::ReplayConfig;
    use sonar_core::dataset::SensorLog;

    fn replay(labels: &[&str]) -> Replay {
        let rows: Vec<String> = labels
            .iter()
            .map(|label| {
                let mut fields = vec!["40"; 24];
                fields.push(label);
                fields.join(",")
            })
            .collect();
        let log = SensorLog::parse_str(&rows.join("\n")).unwrap();
        Replay::new(log, ReplayConfig::default()).unwrap()
    }

    /// Headless app without logging, so several tests can build one.
    fn headless_app(replay: Replay) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .add_plugins(HeadlessExportPlugin { target: None })
            .add_plugins(SonarReplayPlugin {
                pacing: Pacing::Unpaced,
                start_paused: false,
            });
        insert_replay(&mut app, replay);
        app
    }

    fn run_until_exit(app: &mut App, max_updates: usize) -> Option<AppExit> {
        for _ in 0..max_updates {
            app.update();
            if let Some(exit) = app.should_exit() {
                return Some(exit);
            }
        }
        None
    }

    #[test]
    fn headless_run_renders_every_frame_once_in_order() {
        let labels = [
            "Move-Forward",
            "Slight-Left-Turn",
            "Sharp-Right-Turn",
            "Slight-Right-Turn",
            "Move-Forward",
        ];
        let mut app = headless_app(replay(&labels));

        let exit = run_until_exit(&mut app, 20);
        assert_eq!(exit, Some(AppExit::Success));

        let buffer = app.world().resource::<ExportBuffer>();
        let indices: Vec<usize> = buffer.0.iter().map(|s| s.frame_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(buffer.0[1].label.as_str(), "Slight-Left-Turn");

        let state = app.world().resource::<State<PlaybackState>>();
        assert_eq!(*state.get(), PlaybackState::Finished);
    }

    #[test]
    fn rendered_frames_match_the_core_renderer() {
        let replay = replay(&["Move-Forward", "Sharp-Right-Turn", "Move-Forward"]);
        let expected: Vec<_> = (0..3).map(|i| replay.render(i).unwrap()).collect();
        let mut app = headless_app(replay);

        run_until_exit(&mut app, 10);
        assert_eq!(app.world().resource::<ExportBuffer>().0, expected);
    }

    #[test]
    fn single_frame_log_finishes() {
        let mut app = headless_app(replay(&["Move-Forward"]));
        assert_eq!(run_until_exit(&mut app, 5), Some(AppExit::Success));
        assert_eq!(app.world().resource::<ExportBuffer>().0.len(), 1);
    }

    #[test]
    fn paused_start_holds_the_first_frame() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .add_plugins(HeadlessExportPlugin { target: None })
            .add_plugins(SonarReplayPlugin {
                pacing: Pacing::Unpaced,
                start_paused: true,
            });
        insert_replay(&mut app, replay(&["Move-Forward", "Move-Forward"]));

        for _ in 0..5 {
            app.update();
        }
        assert_eq!(app.world().resource::<PlaybackCursor>().frame(), 0);
        assert_eq!(app.world().resource::<ExportBuffer>().0.len(), 1);
    }
}
