use anyhow::Result;
use chronodeck::{AppConfig, TimeControl, TokioScheduler};
use chronodeck_audio::play_detached;
use chronodeck_core::{SystemTimeSource, TimeFormat};
use clap::Parser;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

/// chronodeck - a terminal clock with alarm, stopwatch, and countdown timer
#[derive(Parser, Debug, Clone)]
#[command(name = "chronodeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set a wall-clock alarm (24-hour HH:MM)
    #[arg(short = 'a', long = "alarm", value_name = "HH:MM", value_parser = parse_alarm_time)]
    alarm: Option<(u32, u32)>,

    /// Start a countdown timer with the given number of seconds
    #[arg(short = 't', long = "timer", value_name = "SECS")]
    timer: Option<u64>,

    /// Start the stopwatch immediately
    #[arg(short = 's', long = "stopwatch")]
    stopwatch: bool,

    /// Display the clock in the given zone (e.g. Europe/Paris)
    #[arg(short = 'z', long = "timezone", value_name = "ZONE")]
    timezone: Option<String>,

    /// Use 12-hour display with AM/PM
    #[arg(long = "ampm")]
    ampm: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse an alarm string "HH:MM" into (hour, minute)
fn parse_alarm_time(s: &str) -> Result<(u32, u32), String> {
    let (hour, minute) = s
        .split_once(':')
        .ok_or_else(|| format!("Expected format: HH:MM (e.g. 07:30), got: {}", s))?;
    let hour = hour
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("Invalid hour: {}", e))?;
    let minute = minute
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("Invalid minute: {}", e))?;
    Ok((hour, minute))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag.
    // RUST_LOG still overrides the CLI setting.
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting chronodeck v{}", env!("CARGO_PKG_VERSION"));

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    let control = TimeControl::new(TokioScheduler::new(), SystemTimeSource::new());
    control.set_time_format(if cli.ampm {
        TimeFormat::Hour12
    } else {
        config.time_format
    });
    control.set_completion_display(config.completion_display);
    control.set_sound_config(config.sound.clone());
    control.set_sound_player(play_detached);

    control.on_clock_tick(|text| println!("  {}", text));
    control.on_stopwatch_tick(|text| println!("  stopwatch  {}", text));
    control.on_timer_tick(|text| println!("  timer      {}", text));
    control.on_alarm_triggered(|alarm| {
        println!(
            "** ALARM {:02}:{:02} ** (type 's' to snooze)",
            alarm.hour, alarm.minute
        )
    });
    control.on_timer_completed(|| println!("** Timer completed ** (type 'k' to acknowledge)"));

    if let Some((hour, minute)) = cli.alarm {
        control.set_alarm(hour, minute)?;
        info!("Alarm set for {:02}:{:02}", hour, minute);
    }

    let zone = cli.timezone.unwrap_or_else(|| config.timezone.clone());
    if zone != "Local" {
        control.change_time_zone(&zone)?;
        info!("Clock display zone: {}", zone);
    }

    control.start();

    if let Some(secs) = cli.timer {
        control.toggle_timer(secs);
    }
    if cli.stopwatch {
        control.toggle_stopwatch();
    }

    run_command_loop(&control, &config).await?;

    info!("Shutting down");
    control.shutdown();
    Ok(())
}

/// Read single-letter commands from stdin until EOF, 'q', or ctrl-c.
async fn run_command_loop(control: &TimeControl, config: &AppConfig) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "s" => {
                        if control.snooze(config.snooze_minutes) {
                            info!("Snoozed {} minutes", config.snooze_minutes);
                        }
                    }
                    "r" => control.remove_alarm(),
                    "w" => {
                        control.toggle_stopwatch();
                    }
                    "k" => control.acknowledge_timer(),
                    "q" => break,
                    "" => {}
                    other => warn!(
                        "Unknown command {:?} (s=snooze, r=remove alarm, w=toggle stopwatch, k=acknowledge timer, q=quit)",
                        other
                    ),
                }
            }
        }
    }
    Ok(())
}
