//! Pomodoro phase transitions.

use crate::model::settings::{CompletedPomodoros, PomodoroSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    #[default]
    Work,
    Break,
    LongBreak,
}

/// Result of a phase reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseOutcome {
    pub next_mode: TimerMode,
    /// Lifetime count after this phase; persist it when it changed.
    pub completed: CompletedPomodoros,
    /// Whether the next phase starts without user input.
    pub auto_start: bool,
}

/// Length of `mode` in seconds.
pub fn phase_seconds(mode: TimerMode, settings: &PomodoroSettings) -> u32 {
    let minutes = match mode {
        TimerMode::Work => settings.work_duration,
        TimerMode::Break => settings.break_duration,
        TimerMode::LongBreak => settings.long_break_duration,
    };
    minutes.saturating_mul(60)
}

/// Finished work counts a session and leads to a break (a long one every
/// `long_break_interval` sessions); finished breaks lead back to work.
pub fn complete_phase(
    mode: TimerMode,
    completed: CompletedPomodoros,
    settings: &PomodoroSettings,
) -> PhaseOutcome {
    match mode {
        TimerMode::Work => {
            let completed = CompletedPomodoros(completed.0.saturating_add(1));
            let interval = settings.long_break_interval.max(1);
            let next_mode = if completed.0 % interval == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::Break
            };
            PhaseOutcome {
                next_mode,
                completed,
                auto_start: settings.auto_start_breaks,
            }
        }
        TimerMode::Break | TimerMode::LongBreak => PhaseOutcome {
            next_mode: TimerMode::Work,
            completed,
            auto_start: settings.auto_start_work,
        },
    }
}

/// Remaining time formatted as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::{complete_phase, format_clock, phase_seconds, TimerMode};
    use crate::model::settings::{CompletedPomodoros, PomodoroSettings};

    #[test]
    fn every_fourth_session_earns_a_long_break() {
        let settings = PomodoroSettings::default();
        let mut completed = CompletedPomodoros(0);
        let mut breaks = Vec::new();
        for _ in 0..4 {
            let outcome = complete_phase(TimerMode::Work, completed, &settings);
            completed = outcome.completed;
            breaks.push(outcome.next_mode);
        }
        assert_eq!(completed, CompletedPomodoros(4));
        assert_eq!(
            breaks,
            vec![TimerMode::Break, TimerMode::Break, TimerMode::Break, TimerMode::LongBreak]
        );
    }

    #[test]
    fn breaks_return_to_work_without_counting() {
        let settings = PomodoroSettings {
            auto_start_work: false,
            ..PomodoroSettings::default()
        };
        let outcome = complete_phase(TimerMode::LongBreak, CompletedPomodoros(4), &settings);
        assert_eq!(outcome.next_mode, TimerMode::Work);
        assert_eq!(outcome.completed, CompletedPomodoros(4));
        assert!(!outcome.auto_start);
    }

    #[test]
    fn zero_interval_is_treated_as_one() {
        let settings = PomodoroSettings {
            long_break_interval: 0,
            ..PomodoroSettings::default()
        };
        let outcome = complete_phase(TimerMode::Work, CompletedPomodoros(0), &settings);
        assert_eq!(outcome.next_mode, TimerMode::LongBreak);
    }

    #[test]
    fn phase_lengths_follow_settings() {
        let settings = PomodoroSettings::default();
        assert_eq!(phase_seconds(TimerMode::Work, &settings), 1500);
        assert_eq!(phase_seconds(TimerMode::LongBreak, &settings), 900);
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(59), "00:59");
    }
}
