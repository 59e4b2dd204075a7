//! chronodeck-audio: Audio playback for chronodeck alarm and timer effects.
//!
//! Playback is a fire-and-forget effect: the engine requests a sound and
//! never waits on or reads back the result. A playback failure is logged and
//! swallowed so the visual side of a trigger is never blocked on audio.

use anyhow::{Context, Result};
use chronodeck_types::AlarmSoundConfig;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::sync::Mutex;
use std::time::Duration;

/// How long a detached playback thread lingers so a short alert can finish.
const DETACHED_PLAYBACK_GRACE: Duration = Duration::from_secs(5);

/// Plays alarm and timer sounds on the default output device.
pub struct AlarmPlayer {
    // Keep the stream alive - dropping it stops all audio
    _stream: OutputStream,
    _stream_handle: OutputStreamHandle,
    sink: Mutex<Sink>,
}

impl AlarmPlayer {
    pub fn new() -> Result<Self> {
        let (stream, stream_handle) =
            OutputStream::try_default().context("Failed to open audio output stream")?;
        let sink = Sink::try_new(&stream_handle).context("Failed to create audio sink")?;

        Ok(Self {
            _stream: stream,
            _stream_handle: stream_handle,
            sink: Mutex::new(sink),
        })
    }

    /// Play a sound file from the given path
    pub fn play(&self, path: &str) -> Result<()> {
        let file =
            File::open(path).with_context(|| format!("Failed to open sound file: {}", path))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode sound file: {}", path))?;

        let sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        sink.append(source);
        sink.play();
        Ok(())
    }

    /// Try to play a system alert sound, falling back to a generated tone
    pub fn play_system_alert(&self) -> Result<()> {
        // Common system alert sound paths
        let paths = [
            // freedesktop sounds (Linux)
            "/usr/share/sounds/freedesktop/stereo/alarm-clock-elapsed.oga",
            "/usr/share/sounds/freedesktop/stereo/complete.oga",
            "/usr/share/sounds/freedesktop/stereo/bell.oga",
            // Ubuntu/GNOME sounds
            "/usr/share/sounds/gnome/default/alerts/drip.ogg",
            // macOS
            "/System/Library/Sounds/Glass.aiff",
            // Windows
            "C:\\Windows\\Media\\Alarm01.wav",
        ];

        for path in paths {
            if std::path::Path::new(path).exists() && self.play(path).is_ok() {
                return Ok(());
            }
        }

        self.play_beep(440.0, Duration::from_millis(500))
    }

    /// Play a simple beep tone at the given frequency and duration
    pub fn play_beep(&self, frequency: f32, duration: Duration) -> Result<()> {
        let source = rodio::source::SineWave::new(frequency)
            .take_duration(duration)
            .amplify(0.3); // Reduce volume to avoid being too loud

        let sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        sink.append(source);
        sink.play();
        Ok(())
    }

    /// Stop the currently playing sound
    pub fn stop(&self) {
        let sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        sink.stop();
    }

    /// Set the volume (0.0 to 1.0)
    pub fn set_volume(&self, volume: f32) {
        let sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        sink.set_volume(volume.clamp(0.0, 1.0));
    }

    /// Check if audio is currently playing
    pub fn is_playing(&self) -> bool {
        // Return false if lock is poisoned - safer than panicking
        if let Ok(sink) = self.sink.lock() {
            !sink.empty()
        } else {
            false
        }
    }
}

/// Play the configured sound on a detached thread.
///
/// The player is created inside the thread (it is not `Send`), the result is
/// never surfaced beyond a warning log, and the caller returns immediately.
pub fn play_detached(config: &AlarmSoundConfig) {
    if !config.enabled {
        return;
    }

    let custom_path = config.custom_sound_path.clone();
    let volume = config.volume;

    std::thread::spawn(move || {
        let player = match AlarmPlayer::new() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Failed to create audio player: {:?}", e);
                return;
            }
        };
        player.set_volume(volume);

        let result = match custom_path {
            Some(ref path) => player.play(path),
            None => player.play_system_alert(),
        };
        if let Err(e) = result {
            log::warn!("Failed to play alarm sound: {:?}", e);
            return;
        }

        // Keep the thread (and with it the output stream) alive while the
        // sound plays out.
        std::thread::sleep(DETACHED_PLAYBACK_GRACE);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_creation_does_not_panic() {
        // This may fail in CI environments without audio
        let result = AlarmPlayer::new();
        if result.is_err() {
            eprintln!(
                "Audio player creation failed (expected in CI): {:?}",
                result.err()
            );
        }
    }

    #[test]
    fn disabled_config_is_a_no_op() {
        let config = AlarmSoundConfig {
            enabled: false,
            ..AlarmSoundConfig::default()
        };
        // Must return without spawning or touching the audio device.
        play_detached(&config);
    }
}
