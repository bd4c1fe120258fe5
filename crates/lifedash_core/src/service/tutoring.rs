//! Tutoring session scheduling, payment tracking and earnings.
//!
//! # Invariants
//! - A session is upcoming when its day is after today, or it is today and
//!   its start time is later than the current minute; otherwise it is past.
//! - Earnings and student summaries only count past sessions.

use crate::model::entity::EntityId;
use crate::model::iso8601;
use crate::model::tutoring::{RecurringFrequency, TutoringSession};
use crate::model::validation::{clock_minutes, ValidationError};
use crate::store::Collection;
use chrono::{DateTime, Days, Months, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Follow-up sessions created for a recurring booking.
pub const RECURRING_FOLLOW_UPS: u32 = 4;

/// Hours between two `HH:MM` clock times; `None` unless `end` is after `start`.
pub fn duration_hours(start: &str, end: &str) -> Option<f64> {
    let start = clock_minutes(start)?;
    let end = clock_minutes(end)?;
    (end > start).then(|| f64::from(end - start) / 60.0)
}

/// Adds `session` (duration derived from its clock times) and, when it is
/// recurring, its follow-ups. Returns the collection and every added record.
///
/// # Errors
/// The session fails [`TutoringSession::validate`].
pub fn schedule_session(
    sessions: Collection<TutoringSession>,
    mut session: TutoringSession,
) -> Result<(Collection<TutoringSession>, Vec<TutoringSession>), ValidationError> {
    session.validate()?;
    session.duration_hours = duration_hours(&session.start_time, &session.end_time)
        .ok_or(ValidationError::EndNotAfterStart { field: "endTime" })?;

    let mut dates = vec![session.date];
    if session.is_recurring {
        if let Some(frequency) = session.recurring_frequency {
            dates.extend(
                (1..=RECURRING_FOLLOW_UPS)
                    .filter_map(|n| follow_up_date(session.date, frequency, n)),
            );
        }
    }

    let mut sessions = sessions;
    let mut added = Vec::with_capacity(dates.len());
    for date in dates {
        let template = session.clone();
        let (next, record) = sessions.add(move |id| TutoringSession { id, date, ..template });
        sessions = next;
        added.push(record);
    }
    Ok((sessions, added))
}

/// Date of the `n`-th follow-up. Monthly dates clamp to the end of shorter months.
pub fn follow_up_date(
    base: DateTime<Utc>,
    frequency: RecurringFrequency,
    n: u32,
) -> Option<DateTime<Utc>> {
    match frequency {
        RecurringFrequency::Weekly => base.checked_add_days(Days::new(7 * u64::from(n))),
        RecurringFrequency::Biweekly => base.checked_add_days(Days::new(14 * u64::from(n))),
        RecurringFrequency::Monthly => base.checked_add_months(Months::new(n)),
    }
}

/// Flips `isPaid`; marking paid stamps `paymentDate = now`, unpaying clears it.
pub fn toggle_paid(
    sessions: Collection<TutoringSession>,
    id: &EntityId,
    now: DateTime<Utc>,
) -> Collection<TutoringSession> {
    sessions.update(id, |mut session| {
        session.is_paid = !session.is_paid;
        session.payment_date = session.is_paid.then(|| iso8601::truncate(now));
        session
    })
}

pub fn is_upcoming(session: &TutoringSession, now: DateTime<Utc>) -> bool {
    let day = session.date.date_naive();
    let today = now.date_naive();
    day > today || (day == today && session.start_time > now.format("%H:%M").to_string())
}

/// `(upcoming soonest first, past most recent first)`.
pub fn split_upcoming_past(
    sessions: &[TutoringSession],
    now: DateTime<Utc>,
) -> (Vec<&TutoringSession>, Vec<&TutoringSession>) {
    let (mut upcoming, mut past): (Vec<&TutoringSession>, Vec<&TutoringSession>) =
        sessions.iter().partition(|session| is_upcoming(session, now));
    upcoming.sort_by(|left, right| {
        left.date
            .cmp(&right.date)
            .then_with(|| left.start_time.cmp(&right.start_time))
    });
    past.sort_by(|left, right| {
        right
            .date
            .cmp(&left.date)
            .then_with(|| right.start_time.cmp(&left.start_time))
    });
    (upcoming, past)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EarningsSummary {
    /// Paid past sessions.
    pub earned: f64,
    /// Unpaid past sessions.
    pub pending: f64,
    pub past_hours: f64,
    pub upcoming_hours: f64,
    pub upcoming_sessions: usize,
}

pub fn earnings_summary(sessions: &[TutoringSession], now: DateTime<Utc>) -> EarningsSummary {
    let mut summary = EarningsSummary::default();
    for session in sessions {
        if is_upcoming(session, now) {
            summary.upcoming_hours += session.duration_hours;
            summary.upcoming_sessions += 1;
            continue;
        }
        summary.past_hours += session.duration_hours;
        if session.is_paid {
            summary.earned += session.amount();
        } else {
            summary.pending += session.amount();
        }
    }
    summary
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentSummary {
    pub hours: f64,
    /// Paid amounts only.
    pub earnings: f64,
    pub sessions: usize,
    pub subjects: BTreeSet<String>,
}

/// Past sessions grouped by student name.
pub fn student_summary(
    sessions: &[TutoringSession],
    now: DateTime<Utc>,
) -> BTreeMap<String, StudentSummary> {
    let mut students: BTreeMap<String, StudentSummary> = BTreeMap::new();
    for session in sessions.iter().filter(|session| !is_upcoming(session, now)) {
        let entry = students.entry(session.student_name.clone()).or_default();
        entry.hours += session.duration_hours;
        if session.is_paid {
            entry.earnings += session.amount();
        }
        entry.sessions += 1;
        entry.subjects.insert(session.subject.clone());
    }
    students
}

#[cfg(test)]
mod tests {
    use super::{
        duration_hours, earnings_summary, schedule_session, split_upcoming_past, student_summary,
        toggle_paid,
    };
    use crate::model::entity::EntityId;
    use crate::model::tutoring::{RecurringFrequency, TutoringSession};
    use crate::store::Collection;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap()
    }

    fn session(student: &str, date: DateTime<Utc>, start: &str, paid: bool) -> TutoringSession {
        TutoringSession {
            id: EntityId::from(format!("{student}-{date}").as_str()),
            student_name: student.to_string(),
            subject: "Maths".to_string(),
            date,
            start_time: start.to_string(),
            end_time: "18:00".to_string(),
            duration_hours: 1.5,
            hourly_rate: 40.0,
            is_paid: paid,
            payment_date: None,
            notes: None,
            location: None,
            is_recurring: false,
            recurring_frequency: None,
        }
    }

    #[test]
    fn duration_comes_from_clock_times() {
        assert_eq!(duration_hours("16:30", "18:00"), Some(1.5));
        assert_eq!(duration_hours("18:00", "16:30"), None);
        assert_eq!(duration_hours("bad", "18:00"), None);
    }

    #[test]
    fn monthly_recurrence_adds_four_follow_ups() {
        let mut first = session("Ana", at(1, 31, 0), "16:00", false);
        first.is_recurring = true;
        first.recurring_frequency = Some(RecurringFrequency::Monthly);

        let (sessions, added) = schedule_session(Collection::new(), first).unwrap();
        assert_eq!(sessions.len(), 5);
        assert_eq!(added[0].duration_hours, 2.0);
        assert_eq!(added[1].date, at(2, 29, 0));
        assert_eq!(added[4].date, at(5, 31, 0));
    }

    #[test]
    fn weekly_recurrence_spaces_by_seven_days() {
        let mut first = session("Ben", at(3, 4, 0), "16:00", false);
        first.is_recurring = true;
        first.recurring_frequency = Some(RecurringFrequency::Weekly);

        let (_, added) = schedule_session(Collection::new(), first).unwrap();
        let dates: Vec<_> = added.iter().map(|session| session.date).collect();
        assert_eq!(
            dates,
            vec![at(3, 4, 0), at(3, 11, 0), at(3, 18, 0), at(3, 25, 0), at(4, 1, 0)]
        );
    }

    #[test]
    fn invalid_session_is_not_added() {
        let mut broken = session("Cy", at(3, 4, 0), "19:00", false);
        broken.end_time = "18:00".to_string();
        assert!(schedule_session(Collection::new(), broken).is_err());
    }

    #[test]
    fn toggle_paid_sets_and_clears_payment_date() {
        let record = session("Ana", at(3, 4, 0), "16:00", false);
        let id = record.id.clone();
        let sessions = Collection::from_records(vec![record]);

        let paid = toggle_paid(sessions, &id, at(3, 5, 9));
        assert!(paid.records()[0].is_paid);
        assert_eq!(paid.records()[0].payment_date, Some(at(3, 5, 9)));

        let unpaid = toggle_paid(paid, &id, at(3, 6, 9));
        assert!(!unpaid.records()[0].is_paid);
        assert_eq!(unpaid.records()[0].payment_date, None);
    }

    #[test]
    fn split_and_summaries_use_day_then_start_time() {
        let now = at(3, 10, 15);
        let sessions = vec![
            session("Ana", at(3, 1, 0), "16:00", true),
            session("Ana", at(3, 10, 0), "14:00", false),
            session("Ben", at(3, 10, 0), "16:00", false),
            session("Ben", at(3, 20, 0), "16:00", false),
        ];

        let (upcoming, past) = split_upcoming_past(&sessions, now);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].date, at(3, 10, 0));
        assert_eq!(past.len(), 2);
        assert_eq!(past[0].start_time, "14:00");

        let earnings = earnings_summary(&sessions, now);
        assert_eq!(earnings.earned, 60.0);
        assert_eq!(earnings.pending, 60.0);
        assert_eq!(earnings.past_hours, 3.0);
        assert_eq!(earnings.upcoming_hours, 3.0);

        let students = student_summary(&sessions, now);
        assert_eq!(students.len(), 1);
        assert_eq!(students["Ana"].sessions, 2);
        assert_eq!(students["Ana"].earnings, 60.0);
    }
}
