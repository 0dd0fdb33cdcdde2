mod list;
mod run;
mod show;
mod update;
mod upload;

use crate::config::{Config, Overrides};
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use list::ListArgs;
pub use run::RunArgs;
pub use show::ShowResource;
pub use update::UpdateArgs;
pub use upload::UploadArgs;

#[derive(Parser, Debug)]
#[command(name = "drive-sheets-uploader")]
#[command(about = "Upload files to a Google Drive folder and write values to a Google Sheet", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub google: GoogleArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GoogleArgs {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Service account key file
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS", global = true)]
    pub key_file: Option<PathBuf>,

    /// Drive folder to upload into and list
    #[arg(long, env = "FOLDER_ID", global = true)]
    pub folder_id: Option<String>,

    /// Spreadsheet to write values to
    #[arg(long, env = "SHEETS_ID", global = true)]
    pub sheet_id: Option<String>,
}

impl GoogleArgs {
    fn load_config(&self) -> Result<Config> {
        Config::load(
            self.config.as_deref(),
            Overrides {
                key_file: self.key_file.clone(),
                folder_id: self.folder_id.clone(),
                sheet_id: self.sheet_id.clone(),
            },
        )
    }
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Run(args) => args.execute(&self.google.load_config()?).await,
            Commands::Upload(args) => args.execute(&self.google.load_config()?).await,
            Commands::List(args) => args.execute(&self.google.load_config()?).await,
            Commands::Update(args) => args.execute(&self.google.load_config()?).await,
            Commands::Show { resource } => resource.execute(&self.google).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a directory, list the folder, then write a row to the sheet
    Run(RunArgs),
    /// Upload files or directories to the folder
    Upload(UploadArgs),
    /// List files in the folder
    List(ListArgs),
    /// Overwrite a range in the sheet with one row of values
    Update(UpdateArgs),
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}
