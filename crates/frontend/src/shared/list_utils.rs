//! Search, status filter and sorting for master-data lists
use contracts::domain::common::EntityDto;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Code,
    Name,
    Status,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Code => "Code",
            SortField::Name => "Name",
            SortField::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Code,
            ascending: true,
        }
    }
}

impl SortState {
    /// Same column flips direction; another column starts ascending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: SortField) -> &'static str {
        match (self.field == field, self.ascending) {
            (true, true) => " ▲",
            (true, false) => " ▼",
            (false, _) => " ⇅",
        }
    }
}

/// Case-insensitive match on code or name. An empty query matches all.
pub fn matches_search<T: EntityDto>(item: &T, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || item.code().to_lowercase().contains(&query)
        || item.name().to_lowercase().contains(&query)
}

fn compare<T: EntityDto>(a: &T, b: &T, field: SortField) -> Ordering {
    match field {
        SortField::Code => a.code().to_lowercase().cmp(&b.code().to_lowercase()),
        SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        // active first when ascending
        SortField::Status => b.is_active().cmp(&a.is_active()),
    }
}

pub fn sort_list<T: EntityDto>(items: &mut [T], sort: SortState) {
    items.sort_by(|a, b| {
        let cmp = compare(a, b, sort.field);
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Rows to display: search, then the inactive filter, then sort
pub fn visible_rows<T: EntityDto>(
    items: &[T],
    query: &str,
    show_inactive: bool,
    sort: SortState,
) -> Vec<T> {
    let mut rows: Vec<T> = items
        .iter()
        .filter(|item| show_inactive || item.is_active())
        .filter(|item| matches_search(*item, query))
        .cloned()
        .collect();
    sort_list(&mut rows, sort);
    rows
}
