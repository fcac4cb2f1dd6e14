pub mod config;
pub mod error;
pub mod feed;
pub mod ids;
pub mod mapping;
pub mod nutrient;
pub mod provenance;
pub mod report;
pub mod table;
pub mod treatment;

pub use config::TrialConfig;
pub use error::{ModelError, Result};
pub use feed::{FeedComposition, FeedRecord, LabTable};
pub use ids::TreatmentId;
pub use mapping::{ClassificationDefault, FeedMapping, NO_MATCH_SENTINEL, ReferenceMatch};
pub use nutrient::Nutrient;
pub use provenance::ValueFlag;
pub use report::{DietDay, KeyEntry};
pub use table::{CellValue, Table, format_numeric};
pub use treatment::{DateRange, Treatment};
