pub mod attendance_local_storage;
pub mod attendance_tables;

pub use attendance_local_storage::{AttendanceLocalStorage, NewAttendance};
pub use attendance_tables::{AttendanceTable, UsesLogTable};
