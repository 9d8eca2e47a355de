pub mod threshold_service;

pub use threshold_service::{PixelReport, ThresholdService};
