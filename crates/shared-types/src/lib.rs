pub mod catalog;
pub mod types;

pub use catalog::{HazardType, Severity, UnknownHazardType, UnknownSeverity};
pub use types::{
    format_file_size, ContactInfo, HazardReport, Location, MediaAttachment, MAX_ATTACHMENTS,
};
