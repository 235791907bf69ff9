//! Pure derivation of the displayed rows from the working copy, the search query and
//! the sort direction. Nothing here mutates state.

use super::{Row, SortDirection};
use crate::model::User;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

/// Root-locale collation at secondary strength: accents matter, case does not.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = ?e, "collation data unavailable, sorting by code point");
            None
        }
    }
}

/// A row as displayed, with its 1-based position in the unfiltered, unsorted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedRow<'a> {
    pub position: usize,
    pub row: &'a Row,
}

impl<'a> ProjectedRow<'a> {
    pub fn user(&self) -> &'a User {
        &self.row.user
    }
}

/// Case-insensitive substring match on username, email, role and status.
///
/// `needle` must already be lower-cased. An empty needle matches everything.
pub fn matches(user: &User, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        user.username.as_str(),
        user.email.as_str(),
        user.role.as_str(),
        user.status.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Orders lower-cased usernames with locale-aware collation.
///
/// Names the collator considers equal fall back to code-point order, lower-cased first
/// and then raw, so the order is total.
pub fn compare_usernames(a: &str, b: &str) -> Ordering {
    let (lower_a, lower_b) = (a.to_lowercase(), b.to_lowercase());
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(&lower_a, &lower_b),
            None => lower_a.cmp(&lower_b),
        })
        .then_with(|| lower_a.cmp(&lower_b))
        .then_with(|| a.cmp(b))
}

pub fn project<'a>(rows: &'a [Row], query: &str, sort: SortDirection) -> Vec<ProjectedRow<'a>> {
    let needle = query.to_lowercase();
    let mut projected: Vec<ProjectedRow<'a>> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| matches(&row.user, &needle))
        .map(|(i, row)| ProjectedRow {
            position: i + 1,
            row,
        })
        .collect();

    match sort {
        SortDirection::Unsorted => {}
        SortDirection::Ascending => {
            projected.sort_by(|a, b| compare_usernames(&a.user().username, &b.user().username));
        }
        SortDirection::Descending => {
            projected.sort_by(|a, b| compare_usernames(&a.user().username, &b.user().username));
            projected.reverse();
        }
    }
    projected
}
