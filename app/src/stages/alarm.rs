use std::io::Stderr;
use std::time::Duration;

use chrono::Local;
use common::log;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::time::interval;

use crate::alarm::{Alarm, parse_alarm_time};
use crate::config::AlarmConfig;
use crate::stages::Stage;
use crate::ui::input::{MenuKey, map_menu_key};
use crate::ui::render::Renderer;

const TIME_BUFFER_LIMIT: usize = 5;

/// Clock screen. Waits for the armed time, then shows the wake-up
/// banner and hands off to the game.
pub async fn run_alarm_stage(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    config: &AlarmConfig,
    preset_time: Option<String>,
) -> Result<Stage, String> {
    let renderer = Renderer::new();
    let mut alarm = Alarm::new();
    let mut buffer = String::new();
    let mut error: Option<String> = None;

    if let Some(value) = preset_time.or_else(|| config.default_time.clone()) {
        let time = parse_alarm_time(&value)?;
        alarm.arm(time);
        log!("Alarm armed for {} on startup", time.format("%H:%M"));
    }

    let mut event_stream = EventStream::new();
    let mut poll_timer = interval(Duration::from_secs(1));
    let mut render_timer = interval(Duration::from_millis(250));

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    match map_menu_key(key) {
                        MenuKey::Digit(c) => {
                            if buffer.len() < TIME_BUFFER_LIMIT {
                                buffer.push(c);
                            }
                            error = None;
                        }
                        MenuKey::Backspace => {
                            buffer.pop();
                            error = None;
                        }
                        MenuKey::Confirm => match parse_alarm_time(&buffer) {
                            Ok(time) => {
                                alarm.arm(time);
                                buffer.clear();
                                error = None;
                                log!("Alarm armed for {}", time.format("%H:%M"));
                            }
                            Err(message) => error = Some(message),
                        },
                        MenuKey::Disarm => {
                            if alarm.is_armed() {
                                log!("Alarm disarmed");
                            }
                            alarm.disarm();
                        }
                        MenuKey::StartGame => return Ok(Stage::Game),
                        MenuKey::Quit => return Ok(Stage::Exit),
                        _ => {}
                    }
                }
            }

            _ = poll_timer.tick() => {
                if alarm.check(Local::now().time()) {
                    log!("Alarm fired at {}", Local::now().format("%H:%M:%S"));

                    // Show the banner for the handoff delay, then the only
                    // way out of bed is through the snake.
                    terminal
                        .draw(|frame| {
                            renderer.render_alarm(
                                frame,
                                Local::now().time(),
                                &alarm,
                                &buffer,
                                None,
                            );
                        })
                        .map_err(|e| format!("Failed to draw frame: {}", e))?;
                    tokio::time::sleep(Duration::from_millis(config.handoff_delay_ms)).await;
                    return Ok(Stage::Game);
                }
            }

            _ = render_timer.tick() => {
                terminal
                    .draw(|frame| {
                        renderer.render_alarm(
                            frame,
                            Local::now().time(),
                            &alarm,
                            &buffer,
                            error.as_deref(),
                        );
                    })
                    .map_err(|e| format!("Failed to draw frame: {}", e))?;
            }
        }
    }
}
