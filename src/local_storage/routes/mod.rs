pub mod route_local_storage;
pub mod route_tables;

pub use route_local_storage::{ParentArea, RouteLocalStorage, RouteRef};
pub use route_tables::{MjpMasterDetailsTable, MjpMasterTable, OnlineParentAreaTable, PjpMasterTable};
