use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::status::EventStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Pending,
    Active,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    Signup,
    Games,
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub key: StepKey,
    pub label: &'static str,
    pub state: StepState,
    pub cancelled: bool,
    pub date: Option<DateTime<Utc>>,
}

/// Three fixed steps, never skipped: signup, games, finish.
///
/// Ties resolve toward progress: a start exactly at `now` counts as
/// started (`<=`), an end exactly at `now` does not count as finished (`<`).
pub fn build_timeline(
    status: EventStatus,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> [TimelineStep; 3] {
    let started = starts_at.is_some_and(|s| s <= now);
    let finished = status == EventStatus::Finished || ends_at.is_some_and(|e| e < now);
    let cancelled = status == EventStatus::Cancelled;

    [
        TimelineStep {
            key: StepKey::Signup,
            label: "Inscrições",
            state: if status == EventStatus::Published && !started {
                StepState::Active
            } else if status == EventStatus::Draft {
                StepState::Pending
            } else {
                StepState::Done
            },
            cancelled: false,
            date: starts_at,
        },
        TimelineStep {
            key: StepKey::Games,
            label: "Jogos",
            state: if cancelled {
                StepState::Pending
            } else if started {
                if finished {
                    StepState::Done
                } else {
                    StepState::Active
                }
            } else {
                StepState::Pending
            },
            cancelled: false,
            date: starts_at,
        },
        TimelineStep {
            key: StepKey::Finish,
            label: if cancelled { "Cancelado" } else { "Terminado" },
            state: if finished || cancelled {
                StepState::Done
            } else {
                StepState::Pending
            },
            cancelled,
            date: ends_at,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKey {
    Before,
    During,
    After,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseStep {
    pub key: PhaseKey,
    pub label: &'static str,
    pub hint: &'static str,
    pub state: StepState,
}

/// Page-level before/during/after progression for an event header.
pub fn build_phase_timeline(
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> [PhaseStep; 3] {
    let ended = ends_at < now;
    let running = starts_at <= now && ends_at >= now;
    let upcoming = starts_at > now;
    let phase = if ended {
        2
    } else if running {
        1
    } else {
        0
    };

    let raw = [
        (PhaseKey::Before, "Antes", if upcoming { "Inscrições abertas" } else { "Concluído" }),
        (
            PhaseKey::During,
            "Durante",
            if running {
                "A decorrer agora"
            } else if ended {
                "Concluído"
            } else {
                "Em breve"
            },
        ),
        (
            PhaseKey::After,
            "Depois",
            if ended { "Histórico disponível" } else { "Em breve" },
        ),
    ];

    let mut idx = 0;
    raw.map(|(key, label, hint)| {
        let state = if idx < phase {
            StepState::Done
        } else if idx == phase {
            StepState::Active
        } else {
            StepState::Pending
        };
        idx += 1;
        PhaseStep {
            key,
            label,
            hint,
            state,
        }
    })
}
