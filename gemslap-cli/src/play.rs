//! Live session: the output device plus a line-oriented command prompt that
//! stands in for the game and the host platform.

use std::io::{self, BufRead, Write};

use gemslap_audio::engine::backend::NullBackend;
use gemslap_audio::{AudioBackend, AudioHandle, AudioOutput, HostEvent, SystemClock};
use gemslap_types::{AudioFeedback, ContextState, Style};
use serde::Serialize;

use crate::config::Config;

const HELP: &str = "\
start | stop | style N | music on|off
tone P | shock S | shatter I T | fanfare | success | fail | click
hide | show | tap | status | help | quit";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Start,
    Stop,
    Style(u32),
    Music(bool),
    Tone(i32),
    Shock(f32),
    Shatter(u32, u32),
    Fanfare,
    Success,
    Fail,
    Click,
    Hide,
    Show,
    Tap,
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("");
    let mut arg = |name: &str| {
        words
            .next()
            .ok_or_else(|| format!("{} needs {}", head, name))
            .map(str::to_string)
    };
    fn num<T: std::str::FromStr>(raw: String) -> Result<T, String> {
        raw.parse().map_err(|_| format!("not a number: {}", raw))
    }

    let cmd = match head {
        "start" => Command::Start,
        "stop" => Command::Stop,
        "style" => Command::Style(num(arg("a style id")?)?),
        "music" => match arg("on or off")?.as_str() {
            "on" => Command::Music(true),
            "off" => Command::Music(false),
            other => return Err(format!("music on|off, not {}", other)),
        },
        "tone" => Command::Tone(num(arg("a pitch")?)?),
        "shock" => Command::Shock(num(arg("a strength")?)?),
        "shatter" => {
            let index = num(arg("an index")?)?;
            Command::Shatter(index, num(arg("a total")?)?)
        }
        "fanfare" => Command::Fanfare,
        "success" => Command::Success,
        "fail" => Command::Fail,
        "click" => Command::Click,
        "hide" => Command::Hide,
        "show" => Command::Show,
        "tap" => Command::Tap,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "" => return Err(String::new()),
        other => return Err(format!("unknown command: {}", other)),
    };
    Ok(cmd)
}

#[derive(Serialize)]
struct Status {
    playing: bool,
    context: ContextState,
    style: Style,
    step: usize,
    loop_count: u64,
    active_units: usize,
    dropped_units: u64,
    brightness: f64,
}

pub fn run(config: &Config, style: u32) -> Result<(), String> {
    // Keep the output alive for the whole session.
    let (backend, _output): (Box<dyn AudioBackend>, Option<AudioOutput>) =
        match AudioOutput::open_default() {
            Ok((backend, output)) => {
                println!(
                    "output: {} ({} Hz, {} ch)",
                    output.device_name(),
                    output.sample_rate(),
                    output.channels()
                );
                (Box::new(backend), Some(output))
            }
            Err(e) => {
                log::warn!(target: "audio", "no audio output, running silent: {}", e);
                println!("no audio output ({}), running silent", e);
                (Box::new(NullBackend), None)
            }
        };

    let mut handle = AudioHandle::spawn(backend, SystemClock::new(), config.engine());
    handle.init();
    handle.set_style(style);
    let mut current_style = Style::wrapping(style);
    handle.set_music_enabled(config.music_enabled());
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(format!("Failed to read stdin: {}", e)),
            None => break,
        };

        for msg in handle.drain_feedback() {
            if let AudioFeedback::UnitDropped(kind) = msg {
                log::debug!(target: "units", "dropped {}", kind.name());
            }
        }

        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                if !e.is_empty() {
                    println!("{}", e);
                }
                continue;
            }
        };

        // typed commands count as user gestures, except the ones simulating
        // the platform
        if !matches!(
            cmd,
            Command::Status | Command::Help | Command::Hide | Command::Show
        ) {
            handle.gesture();
        }

        match cmd {
            Command::Start => handle.start_beat(current_style.tempo()),
            Command::Stop => handle.stop_beat(),
            Command::Style(id) => {
                handle.set_style(id);
                current_style = Style::wrapping(id);
                println!("{} ({} bpm on next start)", current_style, current_style.tempo());
            }
            Command::Music(on) => handle.set_music_enabled(on),
            Command::Tone(pitch) => handle.play_tone(pitch, 0.35, 0.16),
            Command::Shock(strength) => handle.play_shockwave(strength),
            Command::Shatter(index, total) => handle.play_crystal_shatter(index, total),
            Command::Fanfare => handle.play_level_clear_fanfare(),
            Command::Success => handle.play_success_jingle(),
            Command::Fail => handle.play_failure_jingle(),
            Command::Click => handle.play_count_click(true),
            Command::Hide => {
                handle.host_event(HostEvent::Hidden);
                handle.suspend();
            }
            Command::Show => handle.host_event(HostEvent::Visible),
            Command::Tap => {}
            Command::Status => {
                let state = handle.read_state();
                let status = Status {
                    playing: state.playing,
                    context: state.context,
                    style: state.style,
                    step: state.step,
                    loop_count: state.loop_count,
                    active_units: state.active_units,
                    dropped_units: state.dropped_units,
                    brightness: handle.brightness(handle.now_ms(), 1).value,
                };
                match serde_json::to_string_pretty(&status) {
                    Ok(json) => println!("{}", json),
                    Err(e) => println!("status unavailable: {}", e),
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    handle.stop_beat();
    Ok(())
}
