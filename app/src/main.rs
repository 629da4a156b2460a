mod alarm;
mod config;
mod recommend;
mod stages;
mod ui;

use std::io::{Stderr, stderr};

use clap::Parser;
use common::log;
use common::logger;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::{Config, get_config_manager};
use crate::stages::{Stage, run_alarm_stage, run_game_stage, run_wakeup_stage};

#[derive(Parser)]
#[command(name = "wakesnake")]
struct Args {
    /// Config file to use instead of the one beside the executable
    #[arg(long)]
    config: Option<String>,

    /// Arm the alarm for this time (HH:MM) on startup
    #[arg(long)]
    alarm: Option<String>,

    /// Skip the alarm screen and go straight to the game
    #[arg(long)]
    skip_alarm: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("WakeSnake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref()).get_config()?;
    log!(
        "Config loaded: {}x{} board, target score {}",
        config.game.field_width,
        config.game.field_height,
        config.game.target_score
    );

    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e))?;
    let mut output = stderr();
    execute!(output, EnterAlternateScreen)
        .map_err(|e| format!("Failed to enter alternate screen: {}", e))?;
    let backend = CrosstermBackend::new(output);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Failed to create terminal: {}", e))?;
    terminal
        .hide_cursor()
        .map_err(|e| format!("Failed to hide cursor: {}", e))?;
    terminal
        .clear()
        .map_err(|e| format!("Failed to clear terminal: {}", e))?;

    let result = run_stages(&mut terminal, &config, args).await;

    disable_raw_mode().map_err(|e| format!("Failed to disable raw mode: {}", e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| format!("Failed to leave alternate screen: {}", e))?;
    terminal
        .show_cursor()
        .map_err(|e| format!("Failed to show cursor: {}", e))?;

    result?;
    log!("Goodbye");
    Ok(())
}

async fn run_stages(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    config: &Config,
    args: Args,
) -> Result<(), String> {
    let mut preset_alarm = args.alarm;
    let mut stage = if args.skip_alarm {
        Stage::Game
    } else {
        Stage::Alarm
    };

    loop {
        stage = match stage {
            Stage::Alarm => {
                run_alarm_stage(terminal, &config.alarm, preset_alarm.take()).await?
            }
            Stage::Game => run_game_stage(terminal, &config.game).await?,
            Stage::WakeUp(summary) => {
                run_wakeup_stage(terminal, &config.wakeup, &summary).await?
            }
            Stage::Exit => break,
        };
    }

    Ok(())
}
