use std::io::Stderr;
use std::time::Duration;

use chrono::{Datelike, Local};
use common::game::{SessionRng, SessionSummary};
use common::log;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::time::interval;

use crate::config::WakeupConfig;
use crate::recommend::{mock_weather, mood_for, season_for_month, tracks_for, youtube_search_url};
use crate::stages::Stage;
use crate::ui::input::{MenuKey, map_menu_key};
use crate::ui::render::Renderer;

/// Morning screen after a won session: the forecast, a mood and three
/// tracks to start the day with.
pub async fn run_wakeup_stage(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    config: &WakeupConfig,
    summary: &SessionSummary,
) -> Result<Stage, String> {
    let renderer = Renderer::new();

    let mut rng = match config.weather_seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let report = mock_weather(&mut rng);
    let mood = mood_for(report.condition, report.temperature);
    let season = season_for_month(Local::now().month());
    let tracks = tracks_for(mood);
    log!(
        "Weather (seed {}): {}, {}°C. Mood: {}",
        rng.seed(),
        report.condition,
        report.temperature,
        mood.label()
    );

    let mut selected: usize = 0;
    let mut last_played: Option<String> = None;

    let mut event_stream = EventStream::new();
    let mut render_timer = interval(Duration::from_millis(100));

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    match map_menu_key(key) {
                        MenuKey::Up => {
                            selected = selected.saturating_sub(1);
                        }
                        MenuKey::Down => {
                            if selected + 1 < tracks.len() {
                                selected += 1;
                            }
                        }
                        MenuKey::Confirm => {
                            let track = &tracks[selected];
                            let url = youtube_search_url(track.youtube_query);
                            log!("Playing {} by {}: {}", track.title, track.artist, url);
                            last_played = Some(url);
                        }
                        MenuKey::Rearm => return Ok(Stage::Alarm),
                        MenuKey::StartGame => return Ok(Stage::Game),
                        MenuKey::Quit => return Ok(Stage::Exit),
                        _ => {}
                    }
                }
            }

            _ = render_timer.tick() => {
                terminal
                    .draw(|frame| {
                        renderer.render_wakeup(
                            frame,
                            &report,
                            mood,
                            season,
                            tracks,
                            selected,
                            last_played.as_deref(),
                            summary,
                        );
                    })
                    .map_err(|e| format!("Failed to draw frame: {}", e))?;
            }
        }
    }
}
