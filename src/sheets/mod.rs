mod client;

pub use client::SheetsClient;

use crate::error::Result;
use crate::models::RangeUpdate;
use async_trait::async_trait;

#[async_trait]
pub trait SheetOperations {
    /// Overwrite `update.range` in the spreadsheet and return the number of updated cells.
    ///
    /// Remote failures are logged and returned as `AppError::Remote` so the
    /// caller can decide whether to carry on.
    async fn update_range(&self, sheet_id: &str, update: &RangeUpdate) -> Result<u32>;
}
