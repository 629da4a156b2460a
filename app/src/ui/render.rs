use chrono::NaiveTime;
use common::game::{
    Cell, FoodKind, GameOutcome, GameSnapshot, LossReason, SessionStatus, SessionSummary,
    WinReason,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::alarm::Alarm;
use crate::recommend::{Mood, Season, Track, WeatherReport};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &self,
        frame: &mut Frame,
        snapshot: Option<&GameSnapshot>,
        events: &[String],
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(6),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot {
            Some(snapshot) => {
                frame.render_widget(self.render_game_stats(snapshot), chunks[0]);
                frame.render_widget(self.render_grid(snapshot), game_area);
                frame.render_widget(self.render_game_controls(snapshot.status), chunks[3]);
            }
            None => {
                let waiting = Paragraph::new("Waiting for the first tick...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                frame.render_widget(waiting, game_area);
            }
        }

        frame.render_widget(self.render_event_feed(events), chunks[2]);
    }

    fn render_game_stats(&self, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let mut stats = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{} / {}", snapshot.score, snapshot.target_score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
        ];
        for (kind, count) in &snapshot.collected {
            stats.push(Span::styled(
                format!("{} {}  ", kind.icon(), count),
                Style::default().fg(kind_color(*kind)),
            ));
        }
        stats.push(Span::raw("  "));
        stats.push(Span::styled("Tick: ", Style::default().fg(Color::Yellow)));
        stats.push(Span::styled(
            snapshot.tick.to_string(),
            Style::default().fg(Color::White),
        ));

        let text = vec![Line::from(stats), self.outcome_line(snapshot.status)];
        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn outcome_line(&self, status: SessionStatus) -> Line<'_> {
        match status {
            SessionStatus::NotStarted => Line::from(Span::styled(
                "Get ready...",
                Style::default().fg(Color::DarkGray),
            )),
            SessionStatus::Running => Line::from(""),
            SessionStatus::Ended(GameOutcome::Won(WinReason::TargetReached)) => {
                Line::from(Span::styled(
                    "TARGET REACHED! Preparing your wake-up mix...",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            }
            SessionStatus::Ended(GameOutcome::Won(WinReason::BoardFilled)) => {
                Line::from(Span::styled(
                    "THE WHOLE BOARD IS SNAKE! Preparing your wake-up mix...",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            }
            SessionStatus::Ended(GameOutcome::Lost(LossReason::WallCollision)) => {
                Line::from(Span::styled(
                    "GAME OVER: hit the wall",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
            }
            SessionStatus::Ended(GameOutcome::Lost(LossReason::SelfCollision)) => {
                Line::from(Span::styled(
                    "GAME OVER: ran into yourself",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
            }
        }
    }

    fn render_grid(&self, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let head = snapshot.snake_body.first();
        let mut lines = Vec::with_capacity(snapshot.field_height);

        for y in 0..snapshot.field_height {
            let mut spans = Vec::with_capacity(snapshot.field_width);

            for x in 0..snapshot.field_width {
                let cell = Cell::new(x, y);

                let glyph = if head == Some(&cell) {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake_body.contains(&cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if snapshot.food_cell == cell {
                    Span::styled(
                        "◆ ",
                        Style::default()
                            .fg(kind_color(snapshot.food_kind))
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(glyph);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" WakeSnake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_event_feed(&self, events: &[String]) -> Paragraph<'_> {
        let lines: Vec<Line> = events.iter().cloned().map(Line::from).collect();
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Events "))
            .style(Style::default().fg(Color::Gray))
    }

    fn render_game_controls(&self, status: SessionStatus) -> Paragraph<'_> {
        let text = match status {
            SessionStatus::Ended(GameOutcome::Lost(_)) => Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to try again | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to give up"),
            ]),
            _ => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![text]).alignment(Alignment::Center)
    }

    pub fn render_alarm(
        &self,
        frame: &mut Frame,
        now: NaiveTime,
        alarm: &Alarm,
        buffer: &str,
        error: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(Span::styled(
            " WakeSnake Alarm ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        frame.render_widget(self.render_clock(now, alarm), chunks[1]);
        frame.render_widget(self.render_time_entry(buffer, error), chunks[2]);

        let controls = Paragraph::new(Line::from(vec![
            Span::styled("0-9 :", Style::default().fg(Color::Cyan)),
            Span::raw(" to type | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" to arm | "),
            Span::styled("S", Style::default().fg(Color::Yellow)),
            Span::raw(" to disarm | "),
            Span::styled("G", Style::default().fg(Color::Green)),
            Span::raw(" to play now | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(controls, chunks[3]);
    }

    fn render_clock(&self, now: NaiveTime, alarm: &Alarm) -> Paragraph<'_> {
        let status = if alarm.has_fired() {
            Line::from(Span::styled(
                "WAKE UP! The snake is waiting for you...",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if let Some(time) = alarm.armed_time() {
            Line::from(Span::styled(
                format!("Alarm armed for {}", time.format("%H:%M")),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(
                "No alarm armed",
                Style::default().fg(Color::DarkGray),
            ))
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("⏰  {}", now.format("%H:%M:%S")),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            status,
        ];

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double))
            .alignment(Alignment::Center)
    }

    fn render_time_entry(&self, buffer: &str, error: Option<&str>) -> Paragraph<'_> {
        let entry = Line::from(vec![
            Span::raw("New alarm: "),
            Span::styled(
                format!("{}_", buffer),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let feedback = match error {
            Some(message) => Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(
                "Type a time as HH:MM and press Enter",
                Style::default().fg(Color::DarkGray),
            )),
        };

        Paragraph::new(vec![entry, feedback])
            .block(Block::default().borders(Borders::ALL).title(" Set alarm "))
            .alignment(Alignment::Center)
    }

    pub fn render_wakeup(
        &self,
        frame: &mut Frame,
        report: &WeatherReport,
        mood: Mood,
        season: Season,
        tracks: &[Track],
        selected: usize,
        last_played: Option<&str>,
        summary: &SessionSummary,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(Span::styled(
            " Good morning! ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        frame.render_widget(self.render_weather_card(report, mood, season, summary), chunks[1]);
        frame.render_widget(self.render_track_list(tracks, selected), chunks[2]);
        frame.render_widget(self.render_last_played(last_played), chunks[3]);

        let controls = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" to choose | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" to play | "),
            Span::styled("A", Style::default().fg(Color::Yellow)),
            Span::raw(" to set a new alarm | "),
            Span::styled("G", Style::default().fg(Color::Green)),
            Span::raw(" to play again | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(controls, chunks[4]);
    }

    fn render_weather_card(
        &self,
        report: &WeatherReport,
        mood: Mood,
        season: Season,
        summary: &SessionSummary,
    ) -> Paragraph<'_> {
        let mut collected = vec![Span::raw("You collected: ")];
        for (kind, count) in &summary.collected {
            collected.push(Span::styled(
                format!("{} {}  ", kind.icon(), count),
                Style::default().fg(kind_color(*kind)),
            ));
        }
        collected.push(Span::styled(
            format!("score {}", summary.score),
            Style::default().fg(Color::White),
        ));

        let text = vec![
            Line::from(Span::styled(
                format!(
                    "{}  {}, {}°C ({})",
                    mood.icon(),
                    report.condition,
                    report.temperature,
                    season.label()
                ),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                mood.wake_up_message(),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(collected),
        ];

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(" Weather "))
            .alignment(Alignment::Center)
    }

    fn render_track_list(&self, tracks: &[Track], selected: usize) -> Paragraph<'_> {
        let mut lines = Vec::new();
        for (index, track) in tracks.iter().enumerate() {
            let marker = if index == selected { "> " } else { "  " };
            let style = if index == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{}{} - {} ({})",
                    marker, track.title, track.artist, track.genre
                ),
                style,
            )));
            if index == selected {
                lines.push(Line::from(Span::styled(
                    format!("    {}", track.reason),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Recommended tracks "))
    }

    fn render_last_played(&self, last_played: Option<&str>) -> Paragraph<'_> {
        let line = match last_played {
            Some(url) => Line::from(Span::styled(
                url.to_string(),
                Style::default().fg(Color::Cyan),
            )),
            None => Line::from(Span::styled(
                "Press Enter to get a search link for the selected track",
                Style::default().fg(Color::DarkGray),
            )),
        };

        Paragraph::new(vec![line])
            .block(Block::default().borders(Borders::ALL).title(" Now playing "))
            .alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Sunny => Color::Yellow,
        FoodKind::Rainy => Color::Blue,
        FoodKind::Cold => Color::White,
        FoodKind::Stormy => Color::Magenta,
    }
}
