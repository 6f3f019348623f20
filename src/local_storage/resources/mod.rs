pub mod resource_tables;

pub use resource_tables::{ResourcesTable, SurveyMasterTable};
