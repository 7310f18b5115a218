//! Sorting, paging and selection for record tables.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    /// Order after clicking the header of `column` while `current` is sorted.
    ///
    /// Clicking the active ascending column flips it to descending; anything
    /// else sorts ascending.
    pub fn toggled(self, current: &str, column: &str) -> Self {
        if current == column && self == Order::Asc {
            Order::Desc
        } else {
            Order::Asc
        }
    }
}

/// Descending comparison of two keys (`b` before `a` when `b < a`).
pub fn descending<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    if b < a {
        Ordering::Less
    } else if b > a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Stable sort by a key extractor. Equal keys keep their input order.
pub fn sort_by_key<T, K, F>(rows: &mut [T], order: Order, key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    rows.sort_by(|a, b| {
        let ord = descending(&key(a), &key(b));
        match order {
            Order::Desc => ord,
            Order::Asc => ord.reverse(),
        }
    });
}

/// Rows visible on `page` (zero-based).
pub fn page<T>(rows: &[T], page: usize, rows_per_page: usize) -> &[T] {
    if rows_per_page == 0 {
        return &[];
    }
    let start = page.saturating_mul(rows_per_page).min(rows.len());
    let end = start.saturating_add(rows_per_page).min(rows.len());
    &rows[start..end]
}

/// Number of empty filler rows needed to keep the last page height stable.
pub fn empty_rows(total: usize, page: usize, rows_per_page: usize) -> usize {
    if page == 0 {
        return 0;
    }
    page.saturating_add(1).saturating_mul(rows_per_page).saturating_sub(total)
}

/// Checkbox selection over a table of entities.
#[derive(Debug, Clone)]
pub struct Selection<Id: Ord> {
    selected: BTreeSet<Id>,
}

impl<Id: Ord + Copy> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<Id: Ord + Copy> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Header checkbox: select every row, or clear when all are already selected.
    pub fn toggle_all<E>(&mut self, rows: &[E])
    where
        E: Entity<Id = Id>,
    {
        if !rows.is_empty() && self.selected.len() == rows.len() {
            self.selected.clear();
        } else {
            self.selected = rows.iter().map(Entity::id).collect();
        }
    }

    pub fn is_selected(&self, id: Id) -> bool {
        self.selected.contains(&id)
    }

    /// Header checkbox shows "indeterminate" when some but not all rows are selected.
    pub fn is_partial(&self, total: usize) -> bool {
        !self.selected.is_empty() && self.selected.len() < total
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.selected.iter().copied()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
