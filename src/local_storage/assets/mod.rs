pub mod asset_tables;

pub use asset_tables::{
    AssetPlacementVerificationTable, AssetTypeClassificationListTable, OutletAssetInformationTable,
};
