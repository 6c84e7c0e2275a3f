//! # Year Grouping
//!
//! The publications listing shows filtered publications under year headings,
//! most recent year first. [`group_by_year`] builds that structure:
//!
//! - every input publication lands in exactly one group, keyed by its literal year;
//! - inside a group, publications keep their input (filter) order;
//! - groups iterate in strictly descending year order.
//!
//! A publication without a year cannot be placed, and is reported as
//! [`crate::error::FolioError::MalformedRecord`] rather than dropped.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::Publication;

/// One year heading and the publications under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub publications: Vec<&'a Publication>,
}

/// Publications partitioned by year, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct YearGroups<'a> {
    groups: Vec<YearGroup<'a>>,
}

impl<'a> YearGroups<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, YearGroup<'a>> {
        self.groups.iter()
    }

    /// Years in display order (descending).
    pub fn years(&self) -> Vec<i32> {
        self.groups.iter().map(|g| g.year).collect()
    }

    pub fn get(&self, year: i32) -> Option<&[&'a Publication]> {
        self.groups
            .iter()
            .find(|g| g.year == year)
            .map(|g| g.publications.as_slice())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of publications across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.publications.len()).sum()
    }
}

impl<'a> IntoIterator for YearGroups<'a> {
    type Item = YearGroup<'a>;
    type IntoIter = std::vec::IntoIter<YearGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'g, 'a> IntoIterator for &'g YearGroups<'a> {
    type Item = &'g YearGroup<'a>;
    type IntoIter = std::slice::Iter<'g, YearGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Groups publications by year. Fails on the first publication without a year.
pub fn group_by_year<'a, I>(publications: I) -> Result<YearGroups<'a>>
where
    I: IntoIterator<Item = &'a Publication>,
{
    let mut by_year: BTreeMap<i32, Vec<&'a Publication>> = BTreeMap::new();
    for publication in publications {
        let year = publication.require_year().inspect_err(|e| {
            tracing::warn!(title = %publication.title, "cannot group publication: {}", e);
        })?;
        by_year.entry(year).or_default().push(publication);
    }

    let groups = by_year
        .into_iter()
        .rev()
        .map(|(year, publications)| YearGroup { year, publications })
        .collect();
    Ok(YearGroups { groups })
}

/// Convenience for callers holding owned publications in a slice.
pub fn group_slice(publications: &[Publication]) -> Result<YearGroups<'_>> {
    group_by_year(publications)
}

impl From<YearGroups<'_>> for BTreeMap<i32, Vec<String>> {
    /// Year to titles, handy for assertions and JSON dumps.
    fn from(groups: YearGroups<'_>) -> Self {
        groups
            .into_iter()
            .map(|g| {
                let titles = g.publications.iter().map(|p| p.title.clone()).collect();
                (g.year, titles)
            })
            .collect()
    }
}
