use clap::Parser;

use crate::source::DATASET_URL;

#[derive(Debug, Parser)]
#[command(name = "pledgeboard", version, about = "Paginated crowdfunding campaign table")]
pub struct Cli {
    /// Dataset source URL.
    #[arg(long, value_name = "URL", default_value = DATASET_URL)]
    pub url: String,
}
