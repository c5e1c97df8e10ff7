//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tareas (id) {
        /// Store-assigned identifier, never reused.
        id -> BigInt,
        /// Task title, unique across the table.
        title -> Text,
        /// Optional description, NULL when empty.
        description -> Nullable<Text>,
        /// Due date.
        due_date -> Date,
        /// Creation timestamp in UTC.
        created_at -> Timestamp,
    }
}
