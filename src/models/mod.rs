pub mod drive_file;
pub mod range;
pub mod upload;

pub use drive_file::DriveFile;
pub use range::{RangeUpdate, ValueInputOption};
pub use upload::{FileUpload, collect_uploads, scan_directory};
