use google_drive3::api::File;
use serde::{Deserialize, Serialize};

/// A file as returned by a folder listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
}

impl From<File> for DriveFile {
    fn from(file: File) -> Self {
        DriveFile {
            id: file.id.unwrap_or_default(),
            name: file.name.unwrap_or_default(),
        }
    }
}
