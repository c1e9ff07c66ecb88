//! Connectivity scoring between an internal team member and a target person.
//!
//! Five kinds of evidence each contribute points:
//!
//! | Signal      | Points                                                  |
//! |-------------|---------------------------------------------------------|
//! | company     | 8..=30, by years of overlap and how recently it ended   |
//! | board       | 20 per shared board                                     |
//! | education   | 20 same school and years, 12 same school only           |
//! | location    | 5 for the same city                                     |
//! | interaction | up to 25, decaying with months since the interaction    |
//!
//! The score is the point total capped at 100.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeSet, HashSet};

use crate::models::{
    ConnectorResult, EducationOut, InteractionOut, PersonDetail, RoleOut, Signal, SignalKind,
    Strength,
};

const MAX_SCORE: u32 = 100;
const COMPANY_MAX_POINTS: f64 = 30.0;
const COMPANY_FLOOR_POINTS: f64 = 8.0;
const COMPANY_FULL_OVERLAP_YEARS: f64 = 3.0;
const BOARD_POINTS: u32 = 20;
const EDUCATION_SAME_YEARS_POINTS: u32 = 20;
const EDUCATION_SAME_SCHOOL_POINTS: u32 = 12;
const LOCATION_POINTS: u32 = 5;
const INTERACTION_MAX_POINTS: f64 = 25.0;
const INTERACTION_DECAY_PER_MONTH: f64 = 0.3;

/// Score how well `member` is connected to `target`.
///
/// `interactions` may contain unrelated entries; only those logged by
/// `member` with `target` count. `today` anchors open-ended roles and decay.
pub fn compute_connectivity(
    member: &PersonDetail,
    target: &PersonDetail,
    interactions: &[InteractionOut],
    today: NaiveDate,
) -> ConnectorResult {
    let mut signals = Vec::new();

    signals.extend(company_signals(member, target, today.year()));
    signals.extend(board_signals(member, target));
    signals.extend(education_signals(member, target));
    signals.extend(location_signal(member, target));
    signals.extend(interaction_signals(member, target, interactions, today));

    let raw: u32 = signals.iter().map(|s| s.points).sum();
    let score = raw.min(MAX_SCORE);

    ConnectorResult {
        sp_member: member.summary.clone(),
        score,
        strength: Strength::from_score(score),
        signals,
    }
}

fn company_signals(member: &PersonDetail, target: &PersonDetail, current_year: i32) -> Vec<Signal> {
    let mut signals = Vec::new();
    let mut seen_orgs = HashSet::new();

    for sr in member.roles.iter().filter(|r| !r.is_board) {
        for tr in target.roles.iter().filter(|r| !r.is_board) {
            if sr.org_id != tr.org_id || seen_orgs.contains(&sr.org_id) {
                continue;
            }

            let s_end = sr.end_year.unwrap_or(current_year);
            let t_end = tr.end_year.unwrap_or(current_year);
            let overlap_start = sr.start_year.unwrap_or(0).max(tr.start_year.unwrap_or(0));
            let overlap_end = s_end.min(t_end);
            let overlap_years = overlap_end.saturating_sub(overlap_start).max(0);

            let coverage = (overlap_years as f64 / COMPANY_FULL_OVERLAP_YEARS).min(1.0);
            let points = (COMPANY_MAX_POINTS * coverage * recency_decay(tr.end_year, current_year))
                .max(COMPANY_FLOOR_POINTS);

            let org = org_name(sr);
            let mut detail = format!(
                "{} ({}) and {} ({}) both worked at {}",
                member.full_name(),
                role_span(sr),
                target.full_name(),
                role_span(tr),
                org
            );
            if overlap_years > 0 {
                detail.push_str(&format!(" with {} year(s) of overlap.", overlap_years));
            } else {
                detail.push_str(", though at different times.");
            }

            signals.push(Signal::new(
                SignalKind::Company,
                format!("Both worked at {}", org),
                detail,
                points as u32,
            ));
            seen_orgs.insert(sr.org_id);
        }
    }

    signals
}

fn board_signals(member: &PersonDetail, target: &PersonDetail) -> Vec<Signal> {
    let member_boards = board_orgs(member);
    let target_boards = board_orgs(target);

    member_boards
        .intersection(&target_boards)
        .map(|org_id| {
            let org = member
                .roles
                .iter()
                .find(|r| r.org_id == *org_id)
                .map(org_name)
                .unwrap_or_else(|| org_id.to_string());
            Signal::new(
                SignalKind::Board,
                format!("Shared board seat at {}", org),
                format!(
                    "Both {} and {} sit/sat on the {} board.",
                    member.full_name(),
                    target.full_name(),
                    org
                ),
                BOARD_POINTS,
            )
        })
        .collect()
}

fn education_signals(member: &PersonDetail, target: &PersonDetail) -> Vec<Signal> {
    let mut signals = Vec::new();

    for se in &member.education {
        for te in &target.education {
            if normalize_school(&se.institution) != normalize_school(&te.institution) {
                continue;
            }

            let overlap = years_overlap(se, te);
            let (label, detail, points) = if overlap {
                (
                    format!("Both attended {} at the same time", se.institution),
                    format!(
                        "{} ({}) and {} ({}) overlapped at {}.",
                        member.full_name(),
                        education_span(se),
                        target.full_name(),
                        education_span(te),
                        se.institution
                    ),
                    EDUCATION_SAME_YEARS_POINTS,
                )
            } else {
                (
                    format!("Both attended {}", se.institution),
                    format!(
                        "{} attended {} ({}); {} attended {}. No time overlap — different years.",
                        member.full_name(),
                        se.institution,
                        education_span(se),
                        target.full_name(),
                        education_span(te)
                    ),
                    EDUCATION_SAME_SCHOOL_POINTS,
                )
            };

            signals.push(Signal::new(SignalKind::Education, label, detail, points));
        }
    }

    signals
}

fn location_signal(member: &PersonDetail, target: &PersonDetail) -> Option<Signal> {
    let member_location = member.summary.location.as_deref().filter(|l| !l.is_empty())?;
    let target_location = target.summary.location.as_deref().filter(|l| !l.is_empty())?;

    if city(member_location) != city(target_location) {
        return None;
    }

    Some(Signal::new(
        SignalKind::Location,
        format!("Same location — {}", member_location),
        format!(
            "Both {} and {} are based in {}.",
            member.full_name(),
            target.full_name(),
            member_location
        ),
        LOCATION_POINTS,
    ))
}

fn interaction_signals(
    member: &PersonDetail,
    target: &PersonDetail,
    interactions: &[InteractionOut],
    today: NaiveDate,
) -> Vec<Signal> {
    interactions
        .iter()
        .filter(|i| {
            i.interaction.internal_person_id == member.id()
                && i.interaction.external_person_id == target.id()
        })
        .map(|i| {
            let occurred = i.interaction.occurred_at;
            let months_ago = (today - occurred.date_naive()).num_days() as f64 / 30.0;
            let decay = (-INTERACTION_DECAY_PER_MONTH * months_ago).exp();
            let points = (INTERACTION_MAX_POINTS * decay).min(INTERACTION_MAX_POINTS);
            let kind = &i.interaction.interaction_type;

            Signal::new(
                SignalKind::Interaction,
                format!("Prior {} ({})", kind, occurred.format("%b %Y")),
                format!(
                    "{} had a {} with {} in {}.",
                    member.full_name(),
                    kind,
                    target.full_name(),
                    occurred.format("%B %Y")
                ),
                points as u32,
            )
        })
        .collect()
}

/// Weight for a company overlap by how long ago the target left.
///
/// Current roles and anything that ended within three years count fully;
/// older ones lose 8% per extra year, down to 40%.
pub fn recency_decay(end_year: Option<i32>, current_year: i32) -> f64 {
    let Some(end_year) = end_year else {
        return 1.0;
    };
    let years_ago = current_year.saturating_sub(end_year);
    if years_ago <= 3 {
        return 1.0;
    }
    (1.0 - 0.08 * (years_ago - 3) as f64).max(0.4)
}

/// Reduce an institution name to a comparable key.
pub fn normalize_school(name: &str) -> String {
    name.to_lowercase()
        .replace("university", "")
        .replace("college", "")
        .replace("school", "")
        .replace("the ", "")
        .replace("of ", "")
        .trim()
        .to_string()
}

fn years_overlap(a: &EducationOut, b: &EducationOut) -> bool {
    match (a.start_year, a.end_year, b.start_year, b.end_year) {
        (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
            a_start <= b_end && b_start <= a_end
        }
        _ => false,
    }
}

fn board_orgs(person: &PersonDetail) -> BTreeSet<i64> {
    person
        .roles
        .iter()
        .filter(|r| r.is_board)
        .map(|r| r.org_id)
        .collect()
}

fn city(location: &str) -> String {
    location.split(',').next().unwrap_or_default().trim().to_lowercase()
}

fn org_name(role: &RoleOut) -> String {
    role.org_name.clone().unwrap_or_else(|| role.org_id.to_string())
}

fn year_or(year: Option<i32>, missing: &str) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| missing.to_string())
}

fn role_span(role: &RoleOut) -> String {
    format!("{}–{}", year_or(role.start_year, "None"), year_or(role.end_year, "present"))
}

fn education_span(edu: &EducationOut) -> String {
    format!("{}–{}", year_or(edu.start_year, "None"), year_or(edu.end_year, "None"))
}
