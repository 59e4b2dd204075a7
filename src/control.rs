//! TimeControl: the context object composing the time-control engine
//!
//! One `TimeControl` owns the alarm manager, stopwatch, countdown timer, and
//! the tick handles that drive them. It is created and held by the embedding
//! application (there are no module-level globals), which registers display
//! callbacks and calls the control surface from its UI events.
//!
//! All state transitions are serialized behind one mutex; callbacks are
//! invoked after the guard is released, so a callback may re-enter the
//! control surface.

use crate::scheduler::{Scheduler, TickHandle};
use chronodeck_core::{
    format_duration, format_time_of_day, AlarmManager, AlarmTime, ClockError, CountdownTimer,
    Stopwatch, StopwatchSnapshot, TimeFormat, TimeSource, TimerPhase, TimerSnapshot, TimerTick,
    ZoneSelection,
};
use chronodeck_types::{AlarmSoundConfig, CompletionDisplay};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use uuid::Uuid;

/// Identifies a registered callback so it can be removed later.
///
/// Callers should remove callbacks they no longer need (e.g. when a display
/// surface is destroyed); the registry holds them until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(Uuid);

type DisplayFn = Arc<dyn Fn(&str) + Send + Sync>;
type AlarmFn = Arc<dyn Fn(AlarmTime) + Send + Sync>;
type EventFn = Arc<dyn Fn() + Send + Sync>;
type SoundFn = Arc<dyn Fn(&AlarmSoundConfig) + Send + Sync>;

#[derive(Default)]
struct CallbackRegistry {
    clock_tick: HashMap<Uuid, DisplayFn>,
    stopwatch_tick: HashMap<Uuid, DisplayFn>,
    timer_tick: HashMap<Uuid, DisplayFn>,
    timer_completed: HashMap<Uuid, EventFn>,
    alarm_triggered: HashMap<Uuid, AlarmFn>,
}

struct ControlState {
    zone: ZoneSelection,
    time_format: TimeFormat,
    alarm: AlarmManager,
    stopwatch: Stopwatch,
    timer: CountdownTimer,
    sound: AlarmSoundConfig,
    sound_player: Option<SoundFn>,
    // A Some handle here is the invariant that the matching component is
    // being ticked; toggles start/cancel through these slots only.
    clock_tick: Option<TickHandle>,
    stopwatch_tick: Option<TickHandle>,
    timer_tick: Option<TickHandle>,
    callbacks: CallbackRegistry,
}

struct ControlInner {
    scheduler: Box<dyn Scheduler>,
    source: Box<dyn TimeSource>,
    state: Mutex<ControlState>,
}

impl ControlInner {
    fn state(&self) -> MutexGuard<'_, ControlState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// The time-control engine: live clock, single alarm, stopwatch, countdown.
///
/// Cheap to clone; clones share the same underlying context.
#[derive(Clone)]
pub struct TimeControl {
    inner: Arc<ControlInner>,
}

impl TimeControl {
    /// Create an engine over the given scheduler and wall-clock source.
    ///
    /// Nothing ticks until `start` (clock) or the stopwatch/timer toggles.
    pub fn new(scheduler: impl Scheduler + 'static, source: impl TimeSource + 'static) -> Self {
        Self {
            inner: Arc::new(ControlInner {
                scheduler: Box::new(scheduler),
                source: Box::new(source),
                state: Mutex::new(ControlState {
                    zone: ZoneSelection::Local,
                    time_format: TimeFormat::default(),
                    alarm: AlarmManager::new(),
                    stopwatch: Stopwatch::new(),
                    timer: CountdownTimer::default(),
                    sound: AlarmSoundConfig::default(),
                    sound_player: None,
                    clock_tick: None,
                    stopwatch_tick: None,
                    timer_tick: None,
                    callbacks: CallbackRegistry::default(),
                }),
            }),
        }
    }

    pub fn set_time_format(&self, format: TimeFormat) {
        self.inner.state().time_format = format;
    }

    pub fn set_completion_display(&self, policy: CompletionDisplay) {
        self.inner.state().timer.set_completion_display(policy);
    }

    pub fn set_sound_config(&self, sound: AlarmSoundConfig) {
        self.inner.state().sound = sound;
    }

    /// Install the audio-playback primitive. Playback is fire-and-forget;
    /// the player is expected to swallow and log its own failures.
    pub fn set_sound_player(&self, player: impl Fn(&AlarmSoundConfig) + Send + Sync + 'static) {
        self.inner.state().sound_player = Some(Arc::new(player));
    }

    // ---- clock ----

    /// Start the long-lived 1 Hz clock tick. Renders once immediately, then
    /// every second. Calling again while the clock is live is a no-op.
    pub fn start(&self) {
        {
            let mut state = self.inner.state();
            if state.clock_tick.is_some() {
                debug!("clock tick already scheduled");
                return;
            }
            state.clock_tick = Some(self.schedule(Self::clock_tick_body));
        }
        Self::clock_tick_body(&self.inner);
    }

    /// Switch the clock display to the given zone id (`"Local"` or an IANA
    /// name such as `"Europe/Paris"`).
    ///
    /// Cancels the current clock tick, renders one reading in the new zone
    /// immediately, then restarts a fresh tick. Display-only: the alarm keeps
    /// comparing true local wall-clock time.
    pub fn change_time_zone(&self, zone_id: &str) -> Result<(), ClockError> {
        let zone = ZoneSelection::parse(zone_id)?;
        {
            let mut state = self.inner.state();
            state.zone = zone;
            if let Some(handle) = state.clock_tick.take() {
                handle.cancel();
                state.clock_tick = Some(self.schedule(Self::clock_tick_body));
            }
        }
        Self::render_clock(&self.inner);
        Ok(())
    }

    /// Cancel every live tick and pause the counters. The context can be
    /// started again afterwards; nothing else is torn down.
    pub fn shutdown(&self) {
        let mut state = self.inner.state();
        if state.stopwatch.is_running() {
            state.stopwatch.toggle();
        }
        if state.timer.is_running() {
            state.timer.toggle();
        }
        let handles = [
            state.clock_tick.take(),
            state.stopwatch_tick.take(),
            state.timer_tick.take(),
        ];
        drop(state);
        for handle in handles.into_iter().flatten() {
            handle.cancel();
        }
    }

    // ---- alarm ----

    /// Replace any pending alarm with the given time of day. Out-of-range
    /// input is rejected, not clamped.
    pub fn set_alarm(&self, hour: u32, minute: u32) -> Result<(), ClockError> {
        self.inner.state().alarm.set(hour, minute)
    }

    /// Push the pending alarm forward by `delta_minutes`; a no-op without a
    /// pending alarm. Returns whether anything moved.
    pub fn snooze(&self, delta_minutes: u32) -> bool {
        self.inner.state().alarm.snooze(delta_minutes)
    }

    pub fn remove_alarm(&self) {
        self.inner.state().alarm.remove();
    }

    pub fn alarm(&self) -> Option<AlarmTime> {
        self.inner.state().alarm.pending()
    }

    // ---- stopwatch ----

    /// Flip the stopwatch. Turning it on starts its own 1 Hz tick; turning
    /// it off cancels that exact tick. Returns the new running state.
    pub fn toggle_stopwatch(&self) -> bool {
        let mut state = self.inner.state();
        let running = state.stopwatch.toggle();
        if running {
            if state.stopwatch_tick.is_none() {
                state.stopwatch_tick = Some(self.schedule(Self::stopwatch_tick_body));
            }
        } else if let Some(handle) = state.stopwatch_tick.take() {
            handle.cancel();
        }
        running
    }

    /// Cancel any active tick and return the stopwatch to zero, re-rendering
    /// the cleared display.
    pub fn reset_stopwatch(&self) {
        let (text, cbs) = {
            let mut state = self.inner.state();
            if let Some(handle) = state.stopwatch_tick.take() {
                handle.cancel();
            }
            state.stopwatch.reset();
            (
                format_duration(0),
                collect(&state.callbacks.stopwatch_tick),
            )
        };
        for cb in cbs {
            cb(&text);
        }
    }

    pub fn stopwatch(&self) -> StopwatchSnapshot {
        self.inner.state().stopwatch.snapshot()
    }

    // ---- countdown timer ----

    /// Start, pause, or resume the countdown. When idle, `initial_secs` arms
    /// the countdown first; when paused, it is ignored and the countdown
    /// resumes where it left off. A completed timer must be acknowledged
    /// before it can be toggled again. Returns the new phase.
    pub fn toggle_timer(&self, initial_secs: u64) -> TimerPhase {
        let mut state = self.inner.state();
        if state.timer.phase() == TimerPhase::Idle {
            state.timer.arm(initial_secs);
        }
        let phase = state.timer.toggle();
        if phase == TimerPhase::Running {
            if state.timer_tick.is_none() {
                state.timer_tick = Some(self.schedule(Self::timer_tick_body));
            }
        } else if let Some(handle) = state.timer_tick.take() {
            handle.cancel();
        }
        phase
    }

    /// Cancel any active tick and zero the countdown, re-rendering the
    /// cleared display.
    pub fn reset_timer(&self) {
        let (text, cbs) = {
            let mut state = self.inner.state();
            if let Some(handle) = state.timer_tick.take() {
                handle.cancel();
            }
            state.timer.reset();
            (format_duration(0), collect(&state.callbacks.timer_tick))
        };
        for cb in cbs {
            cb(&text);
        }
    }

    /// Return a completed timer to idle once the user has seen the effect.
    pub fn acknowledge_timer(&self) {
        self.inner.state().timer.acknowledge();
    }

    pub fn timer(&self) -> TimerSnapshot {
        self.inner.state().timer.snapshot()
    }

    // ---- callback registration ----

    pub fn on_clock_tick(&self, f: impl Fn(&str) + Send + Sync + 'static) -> CallbackId {
        let id = Uuid::new_v4();
        self.inner
            .state()
            .callbacks
            .clock_tick
            .insert(id, Arc::new(f));
        CallbackId(id)
    }

    pub fn on_stopwatch_tick(&self, f: impl Fn(&str) + Send + Sync + 'static) -> CallbackId {
        let id = Uuid::new_v4();
        self.inner
            .state()
            .callbacks
            .stopwatch_tick
            .insert(id, Arc::new(f));
        CallbackId(id)
    }

    pub fn on_timer_tick(&self, f: impl Fn(&str) + Send + Sync + 'static) -> CallbackId {
        let id = Uuid::new_v4();
        self.inner
            .state()
            .callbacks
            .timer_tick
            .insert(id, Arc::new(f));
        CallbackId(id)
    }

    pub fn on_timer_completed(&self, f: impl Fn() + Send + Sync + 'static) -> CallbackId {
        let id = Uuid::new_v4();
        self.inner
            .state()
            .callbacks
            .timer_completed
            .insert(id, Arc::new(f));
        CallbackId(id)
    }

    pub fn on_alarm_triggered(&self, f: impl Fn(AlarmTime) + Send + Sync + 'static) -> CallbackId {
        let id = Uuid::new_v4();
        self.inner
            .state()
            .callbacks
            .alarm_triggered
            .insert(id, Arc::new(f));
        CallbackId(id)
    }

    /// Remove a previously registered callback by its id.
    /// Returns true if a callback was removed.
    pub fn remove_callback(&self, id: CallbackId) -> bool {
        let mut state = self.inner.state();
        let cbs = &mut state.callbacks;
        cbs.clock_tick.remove(&id.0).is_some()
            || cbs.stopwatch_tick.remove(&id.0).is_some()
            || cbs.timer_tick.remove(&id.0).is_some()
            || cbs.timer_completed.remove(&id.0).is_some()
            || cbs.alarm_triggered.remove(&id.0).is_some()
    }

    // ---- tick bodies ----

    /// Schedule a tick body against a weak reference, so scheduled callbacks
    /// never keep a dropped context alive.
    fn schedule(&self, body: fn(&Arc<ControlInner>)) -> TickHandle {
        let weak: Weak<ControlInner> = Arc::downgrade(&self.inner);
        self.inner.scheduler.every_second(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                body(&inner);
            }
        }))
    }

    /// One clock tick: render the current reading, then check the alarm.
    /// Display callbacks run before alarm effects, so a firing alarm always
    /// follows a just-rendered clock value.
    fn clock_tick_body(inner: &Arc<ControlInner>) {
        let (text, clock_cbs, fired) = {
            let mut state = inner.state();
            let reading = inner.source.now(state.zone);
            let text = format_time_of_day(reading, state.time_format);
            let clock_cbs = collect(&state.callbacks.clock_tick);
            let fired = state
                .alarm
                .check_and_fire(inner.source.now_local())
                .map(|alarm| {
                    (
                        alarm,
                        collect(&state.callbacks.alarm_triggered),
                        state.sound.clone(),
                        state.sound_player.clone(),
                    )
                });
            (text, clock_cbs, fired)
        };

        for cb in clock_cbs {
            cb(&text);
        }
        if let Some((alarm, cbs, sound, player)) = fired {
            debug!("alarm fired at {:02}:{:02}", alarm.hour, alarm.minute);
            for cb in cbs {
                cb(alarm);
            }
            if let Some(player) = player {
                player(&sound);
            }
        }
    }

    /// Render the clock display once without touching the alarm (used by the
    /// zone switch).
    fn render_clock(inner: &Arc<ControlInner>) {
        let (text, cbs) = {
            let state = inner.state();
            let reading = inner.source.now(state.zone);
            (
                format_time_of_day(reading, state.time_format),
                collect(&state.callbacks.clock_tick),
            )
        };
        for cb in cbs {
            cb(&text);
        }
    }

    fn stopwatch_tick_body(inner: &Arc<ControlInner>) {
        let (text, cbs) = {
            let mut state = inner.state();
            if !state.stopwatch.is_running() {
                // Stale tick that raced a cancel.
                return;
            }
            let elapsed = state.stopwatch.tick();
            (
                format_duration(elapsed),
                collect(&state.callbacks.stopwatch_tick),
            )
        };
        for cb in cbs {
            cb(&text);
        }
    }

    fn timer_tick_body(inner: &Arc<ControlInner>) {
        let mut display = None;
        let mut finished_handle = None;
        let mut completed = None;
        {
            let mut state = inner.state();
            match state.timer.tick() {
                TimerTick::Running(remaining) => {
                    display = Some((
                        format_duration(remaining),
                        collect(&state.callbacks.timer_tick),
                    ));
                }
                TimerTick::Completed { render_zero } => {
                    finished_handle = state.timer_tick.take();
                    if render_zero {
                        display =
                            Some((format_duration(0), collect(&state.callbacks.timer_tick)));
                    }
                    completed = Some((
                        collect(&state.callbacks.timer_completed),
                        state.sound.clone(),
                        state.sound_player.clone(),
                    ));
                }
                TimerTick::Ignored => {}
            }
        }

        if let Some(handle) = finished_handle {
            handle.cancel();
        }
        if let Some((text, cbs)) = display {
            for cb in cbs {
                cb(&text);
            }
        }
        if let Some((cbs, sound, player)) = completed {
            debug!("timer completed");
            for cb in cbs {
                cb();
            }
            if let Some(player) = player {
                player(&sound);
            }
        }
    }
}

fn collect<F: ?Sized>(map: &HashMap<Uuid, Arc<F>>) -> Vec<Arc<F>> {
    map.values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use chronodeck_core::ClockReading;

    /// Wall clock the tests advance by hand. Local and zone-rendered readings
    /// are tracked separately so zone switches are observable.
    #[derive(Clone)]
    struct FakeTimeSource {
        local: Arc<Mutex<ClockReading>>,
        zoned: Arc<Mutex<ClockReading>>,
    }

    impl FakeTimeSource {
        fn new() -> Self {
            Self {
                local: Arc::new(Mutex::new(ClockReading::new(0, 0, 0))),
                zoned: Arc::new(Mutex::new(ClockReading::new(0, 0, 0))),
            }
        }

        fn set_local(&self, hour: u32, minute: u32, second: u32) {
            *self.local.lock().unwrap() = ClockReading::new(hour, minute, second);
        }

        fn set_zoned(&self, hour: u32, minute: u32, second: u32) {
            *self.zoned.lock().unwrap() = ClockReading::new(hour, minute, second);
        }
    }

    impl TimeSource for FakeTimeSource {
        fn now(&self, zone: ZoneSelection) -> ClockReading {
            match zone {
                ZoneSelection::Local => *self.local.lock().unwrap(),
                ZoneSelection::Named(_) => *self.zoned.lock().unwrap(),
            }
        }
    }

    fn recorder() -> (
        Arc<Mutex<Vec<String>>>,
        impl Fn(String) + Clone + Send + Sync + 'static,
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        (log, move |entry: String| sink.lock().unwrap().push(entry))
    }

    fn engine() -> (TimeControl, ManualScheduler, FakeTimeSource) {
        let scheduler = ManualScheduler::new();
        let source = FakeTimeSource::new();
        let control = TimeControl::new(scheduler.clone(), source.clone());
        (control, scheduler, source)
    }

    #[test]
    fn alarm_fires_exactly_once_via_clock_ticks() {
        let (control, scheduler, source) = engine();
        let (events, record) = recorder();
        control.on_alarm_triggered(move |alarm| {
            record(format!("alarm {:02}:{:02}", alarm.hour, alarm.minute))
        });

        control.start();
        control.set_alarm(7, 30).unwrap();

        source.set_local(7, 29, 59);
        scheduler.fire_all();
        assert!(events.lock().unwrap().is_empty());

        source.set_local(7, 30, 0);
        scheduler.fire_all();
        assert_eq!(*events.lock().unwrap(), vec!["alarm 07:30"]);
        assert_eq!(control.alarm(), None);

        // The following second of the same minute stays silent.
        source.set_local(7, 30, 1);
        scheduler.fire_all();
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn clock_display_renders_before_alarm_effects() {
        let (control, scheduler, source) = engine();
        let (events, record) = recorder();
        let record_clock = record.clone();
        control.on_clock_tick(move |text| record_clock(format!("clock {}", text)));
        control.on_alarm_triggered(move |_| record("alarm".to_string()));

        control.set_alarm(7, 30).unwrap();
        control.start();
        source.set_local(7, 30, 0);
        scheduler.fire_all();

        let events = events.lock().unwrap();
        let clock_pos = events.iter().position(|e| e == "clock 07:30:00").unwrap();
        let alarm_pos = events.iter().position(|e| e == "alarm").unwrap();
        assert!(clock_pos < alarm_pos);
    }

    #[test]
    fn invalid_alarm_and_unknown_zone_are_rejected() {
        let (control, _scheduler, _source) = engine();
        assert_eq!(
            control.set_alarm(24, 0),
            Err(ClockError::InvalidTimeOfDay { hour: 24, minute: 0 })
        );
        assert!(matches!(
            control.change_time_zone("Nope/Nowhere"),
            Err(ClockError::UnknownTimeZone(_))
        ));
    }

    #[test]
    fn snooze_without_alarm_stays_absent() {
        let (control, _scheduler, _source) = engine();
        assert!(!control.snooze(5));
        assert_eq!(control.alarm(), None);
    }

    #[test]
    fn stopwatch_toggle_gates_its_tick() {
        let (control, scheduler, _source) = engine();
        let (texts, record) = recorder();
        control.on_stopwatch_tick(move |text| record(text.to_string()));

        assert!(control.toggle_stopwatch());
        assert_eq!(scheduler.active_ticks(), 1);
        scheduler.fire_all();
        scheduler.fire_all();
        scheduler.fire_all();
        assert_eq!(
            *texts.lock().unwrap(),
            vec!["00:00:01", "00:00:02", "00:00:03"]
        );

        // Toggling off cancels the tick; elapsed time is retained.
        assert!(!control.toggle_stopwatch());
        assert_eq!(scheduler.active_ticks(), 0);
        scheduler.fire_all();
        assert_eq!(control.stopwatch().elapsed_secs, 3);

        control.toggle_stopwatch();
        scheduler.fire_all();
        assert_eq!(control.stopwatch().elapsed_secs, 4);

        control.reset_stopwatch();
        assert_eq!(scheduler.active_ticks(), 0);
        assert_eq!(control.stopwatch(), StopwatchSnapshot::default());
        assert_eq!(texts.lock().unwrap().last().unwrap(), "00:00:00");
    }

    #[test]
    fn timer_counts_down_and_completes_once() {
        let (control, scheduler, _source) = engine();
        let (texts, record) = recorder();
        control.on_timer_tick(move |text| record(text.to_string()));
        let completions = Arc::new(Mutex::new(0u32));
        let count = completions.clone();
        control.on_timer_completed(move || *count.lock().unwrap() += 1);

        assert_eq!(control.toggle_timer(3), TimerPhase::Running);
        assert_eq!(scheduler.active_ticks(), 1);

        scheduler.fire_all();
        scheduler.fire_all();
        scheduler.fire_all();
        assert_eq!(
            *texts.lock().unwrap(),
            vec!["00:00:02", "00:00:01", "00:00:00"]
        );
        assert_eq!(*completions.lock().unwrap(), 0);

        // The completing tick cancels the timer's own tick.
        scheduler.fire_all();
        assert_eq!(*completions.lock().unwrap(), 1);
        assert_eq!(control.timer().phase, TimerPhase::Completed);
        assert_eq!(scheduler.active_ticks(), 0);
        // Default HoldLast policy: no extra render on completion.
        assert_eq!(texts.lock().unwrap().len(), 3);

        scheduler.fire_all();
        assert_eq!(*completions.lock().unwrap(), 1);

        control.acknowledge_timer();
        assert_eq!(control.timer().phase, TimerPhase::Idle);
    }

    #[test]
    fn timer_zero_policy_renders_the_completion_tick() {
        let (control, scheduler, _source) = engine();
        control.set_completion_display(CompletionDisplay::Zero);
        let (texts, record) = recorder();
        control.on_timer_tick(move |text| record(text.to_string()));

        control.toggle_timer(1);
        scheduler.fire_all();
        scheduler.fire_all();
        assert_eq!(*texts.lock().unwrap(), vec!["00:00:00", "00:00:00"]);
    }

    #[test]
    fn timer_pause_preserves_remaining() {
        let (control, scheduler, _source) = engine();
        control.toggle_timer(10);
        scheduler.fire_all();
        assert_eq!(control.toggle_timer(99), TimerPhase::Paused);
        assert_eq!(scheduler.active_ticks(), 0);

        // Resuming ignores the initial-seconds argument.
        assert_eq!(control.toggle_timer(99), TimerPhase::Running);
        scheduler.fire_all();
        assert_eq!(control.timer().remaining_secs, 8);
    }

    #[test]
    fn zone_switch_rerenders_and_leaves_counters_alone() {
        let (control, scheduler, source) = engine();
        let (texts, record) = recorder();
        control.on_clock_tick(move |text| record(text.to_string()));

        source.set_local(7, 0, 0);
        source.set_zoned(12, 0, 0);
        control.start();
        control.toggle_stopwatch();
        scheduler.fire_all();
        assert_eq!(scheduler.active_ticks(), 2);
        let before = control.stopwatch();

        control.change_time_zone("Europe/Paris").unwrap();
        // Immediate render from the new zone, clock tick replaced, stopwatch
        // untouched.
        assert_eq!(texts.lock().unwrap().last().unwrap(), "12:00:00");
        assert_eq!(scheduler.active_ticks(), 2);
        assert_eq!(control.stopwatch(), before);

        scheduler.fire_all();
        assert_eq!(texts.lock().unwrap().last().unwrap(), "12:00:00");
    }

    #[test]
    fn start_is_idempotent_and_shutdown_cancels_everything() {
        let (control, scheduler, _source) = engine();
        control.start();
        control.start();
        assert_eq!(scheduler.active_ticks(), 1);

        control.toggle_stopwatch();
        control.toggle_timer(5);
        assert_eq!(scheduler.active_ticks(), 3);

        control.shutdown();
        assert_eq!(scheduler.active_ticks(), 0);
        assert!(!control.stopwatch().running);
        assert_eq!(control.timer().phase, TimerPhase::Paused);
    }

    #[test]
    fn removed_callback_stops_receiving_ticks() {
        let (control, scheduler, _source) = engine();
        let (texts, record) = recorder();
        let id = control.on_clock_tick(move |text| record(text.to_string()));

        control.start();
        assert_eq!(texts.lock().unwrap().len(), 1);

        assert!(control.remove_callback(id));
        scheduler.fire_all();
        assert_eq!(texts.lock().unwrap().len(), 1);
        assert!(!control.remove_callback(id));
    }
}
