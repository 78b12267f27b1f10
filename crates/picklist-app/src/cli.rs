use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use picklist_core::ItemSource;

#[derive(Parser, Debug)]
#[command(name = "picklist")]
#[command(about = "Pick a row from a list in the terminal")]
pub struct Cli {
    /// JSON file with an array of {"text": ...} records, or `-` for stdin
    pub items: Option<PathBuf>,

    /// Inline item text; repeat for several rows
    #[arg(short, long = "text", conflicts_with = "items")]
    pub text: Vec<String>,

    /// Config file (default: <config dir>/picklist/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    /// Resolves where items come from. `-` drains `stdin` right away, since
    /// it cannot be read again on reload.
    pub fn item_source(&self, mut stdin: impl Read) -> anyhow::Result<ItemSource> {
        match &self.items {
            Some(path) if path.as_os_str() == "-" => {
                let mut contents = String::new();
                stdin.read_to_string(&mut contents)?;
                Ok(ItemSource::Json { origin: "stdin".into(), contents })
            }
            Some(path) => Ok(ItemSource::File(path.clone())),
            None if !self.text.is_empty() => Ok(ItemSource::Inline(self.text.clone())),
            None => Ok(ItemSource::Absent),
        }
    }
}
