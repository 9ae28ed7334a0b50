use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rtcatalog_filtering::FilterState;

#[derive(Parser, Debug)]
#[command(name = "rtcatalog", version, about = "Radiotherapy AI product catalog tools")]
pub struct Cli {
    #[arg(long, global = true, help = "Explicit configuration file (TOML)")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report vocabulary violations for every product.
    Validate { catalog: PathBuf },
    /// Completeness and revision-staleness summary for every product.
    Review {
        catalog: PathBuf,
        #[arg(long, default_value_t = false, help = "Order stalest first")]
        sort_stale: bool,
    },
    /// Products matching the given facets and search query.
    Filter {
        catalog: PathBuf,
        #[command(flatten)]
        facets: FacetArgs,
        #[arg(long)]
        search: Option<String>,
    },
    /// Supported structures of one product, grouped by model prefix.
    Structures { catalog: PathBuf, product_id: String },
    /// Distinct-product counts per facet value.
    Facets { catalog: PathBuf },
    /// Accepted values of the controlled vocabularies.
    Vocabulary {
        #[arg(long, help = "Only this vocabulary (modality, anatomy, certification, task)")]
        kind: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FacetArgs {
    #[arg(long = "task")]
    pub tasks: Vec<String>,
    #[arg(long = "location")]
    pub locations: Vec<String>,
    #[arg(long = "company")]
    pub companies: Vec<String>,
    #[arg(long = "certification")]
    pub certifications: Vec<String>,
    #[arg(long = "modality")]
    pub modalities: Vec<String>,
}

impl From<FacetArgs> for FilterState {
    fn from(args: FacetArgs) -> Self {
        FilterState {
            tasks: args.tasks,
            locations: args.locations,
            companies: args.companies,
            certifications: args.certifications,
            modalities: args.modalities,
        }
    }
}
