use std::io::Stderr;
use std::time::Duration;

use common::game::{
    GameBroadcaster, GameOutcome, GameSettings, Session, SessionCommand, SessionState,
};
use common::log;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::time::interval;

use crate::stages::{LocalBroadcaster, Stage};
use crate::ui::input::{GameKey, map_game_key};
use crate::ui::render::Renderer;
use crate::ui::view::SharedView;

/// How long the winning board stays on screen before the wake-up page.
const WIN_HANDOFF: Duration = Duration::from_millis(2000);

/// The minigame screen. Runs sessions until one is won (hand off to the
/// wake-up page) or the player quits.
pub async fn run_game_stage(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    settings: &GameSettings,
) -> Result<Stage, String> {
    let renderer = Renderer::new();
    let view = SharedView::new();
    let broadcaster = LocalBroadcaster::new(view.clone());

    let seed: u64 = rand::random();
    let state = SessionState::create(settings, seed);
    log!("Starting game with seed {}", seed);
    view.set_snapshot(state.snapshot().await);

    let mut event_stream = EventStream::new();
    let mut render_timer = interval(Duration::from_millis(33));

    'session: loop {
        let mut game_handle = tokio::spawn(Session::run(state.clone(), broadcaster.clone()));

        let summary = loop {
            tokio::select! {
                result = &mut game_handle => {
                    match result {
                        Ok(summary) => break summary,
                        Err(e) => return Err(format!("Game session task failed: {}", e)),
                    }
                }

                maybe_event = event_stream.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        match map_game_key(key) {
                            GameKey::Turn(direction) => {
                                state.handle_command(SessionCommand::Turn(direction)).await;
                            }
                            GameKey::Restart => {
                                game_handle.abort();
                                state.restart().await;
                                view.clear();
                                view.set_snapshot(state.snapshot().await);
                                continue 'session;
                            }
                            GameKey::Quit => {
                                game_handle.abort();
                                return Ok(Stage::Exit);
                            }
                            GameKey::None => {}
                        }
                    }
                }

                _ = render_timer.tick() => {
                    terminal
                        .draw(|frame| {
                            renderer.render_game(frame, view.snapshot().as_ref(), &view.events());
                        })
                        .map_err(|e| format!("Failed to draw frame: {}", e))?;
                }
            }
        };

        broadcaster.broadcast_session_over(summary.clone()).await;

        match summary.outcome {
            GameOutcome::Won(_) => {
                // Leave the winning board up for a moment, then move on.
                terminal
                    .draw(|frame| {
                        renderer.render_game(frame, view.snapshot().as_ref(), &view.events());
                    })
                    .map_err(|e| format!("Failed to draw frame: {}", e))?;
                tokio::time::sleep(WIN_HANDOFF).await;
                return Ok(Stage::WakeUp(summary));
            }
            GameOutcome::Lost(_) => loop {
                tokio::select! {
                    maybe_event = event_stream.next() => {
                        if let Some(Ok(Event::Key(key))) = maybe_event {
                            match map_game_key(key) {
                                GameKey::Restart => {
                                    state.restart().await;
                                    view.clear();
                                    view.set_snapshot(state.snapshot().await);
                                    continue 'session;
                                }
                                GameKey::Quit => return Ok(Stage::Exit),
                                _ => {}
                            }
                        }
                    }

                    _ = render_timer.tick() => {
                        terminal
                            .draw(|frame| {
                                renderer.render_game(
                                    frame,
                                    view.snapshot().as_ref(),
                                    &view.events(),
                                );
                            })
                            .map_err(|e| format!("Failed to draw frame: {}", e))?;
                    }
                }
            },
        }
    }
}
