//! Listing order for task collections.

use super::{ParseSortError, Task};
use std::cmp::Ordering;

/// Column a task listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskSortField {
    /// Store-assigned identifier.
    Id,
    /// Task title.
    Title,
    /// Due date.
    DueDate,
    /// Creation timestamp.
    #[default]
    CreatedAt,
}

impl TryFrom<&str> for TaskSortField {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "due_date" => Ok(Self::DueDate),
            "created_at" => Ok(Self::CreatedAt),
            _ => Err(ParseSortError::UnknownField(value.to_owned())),
        }
    }
}

/// Ordering direction for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

impl SortDirection {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParseSortError::UnknownDirection(value.to_owned())),
        }
    }
}

/// Field and direction used when listing tasks.
///
/// The default lists newest tasks first. Ties on the chosen field are broken
/// by identifier in the same direction so listings are stable across
/// adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaskSort {
    field: TaskSortField,
    direction: SortDirection,
}

impl TaskSort {
    /// Creates a listing order.
    #[must_use]
    pub const fn new(field: TaskSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses optional query parameters, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSortError`] when either value is present but
    /// unrecognized.
    pub fn parse(field: Option<&str>, direction: Option<&str>) -> Result<Self, ParseSortError> {
        let parsed_field = field.map(TaskSortField::try_from).transpose()?;
        let parsed_direction = direction.map(SortDirection::try_from).transpose()?;
        Ok(Self::new(
            parsed_field.unwrap_or_default(),
            parsed_direction.unwrap_or_default(),
        ))
    }

    /// Returns the ordering column.
    #[must_use]
    pub const fn field(self) -> TaskSortField {
        self.field
    }

    /// Returns the ordering direction.
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        self.direction
    }

    /// Compares two tasks according to this order.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        let primary = match self.field {
            TaskSortField::Id => Ordering::Equal,
            TaskSortField::Title => left.title().cmp(right.title()),
            TaskSortField::DueDate => left.due_date().cmp(&right.due_date()),
            TaskSortField::CreatedAt => left.created_at().cmp(&right.created_at()),
        };
        self.direction
            .apply(primary.then_with(|| left.id().cmp(&right.id())))
    }
}
