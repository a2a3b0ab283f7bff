use crate::core::sort::SortKey;
use crate::domain::ports::{Backend, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "career-compass")]
#[command(about = "Career guidance data explorer")]
pub struct CliConfig {
    /// Data backend: local fixtures or the hosted records API
    #[arg(long, default_value = "local")]
    pub backend: Backend,

    /// Records API endpoint (remote backend only)
    #[arg(long, default_value = "http://localhost:4000")]
    pub api_endpoint: String,

    /// TOML config file for the remote backend
    #[arg(long)]
    pub config: Option<String>,

    /// Directory holding saved app state
    #[arg(long, default_value = "./state")]
    pub state_dir: String,

    /// Disable the local backend's simulated latency
    #[arg(long)]
    pub no_delay: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Browse, filter, sort and compare career paths
    Careers {
        /// Keep careers with at least this match score
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: u8,

        /// Salary display-string substring, e.g. "50k"
        #[arg(long)]
        salary: Option<String>,

        /// Exact growth rate: High, "Above Average" or Average
        #[arg(long)]
        growth: Option<String>,

        /// Experience-level substring, e.g. Entry
        #[arg(long)]
        experience: Option<String>,

        /// Sort key: title, match-score, salary or growth
        #[arg(long, default_value = "match-score")]
        sort: SortKey,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        /// Career ids to compare side by side
        #[arg(long, value_delimiter = ',')]
        compare: Vec<u32>,

        /// Store this career as the selected path
        #[arg(long)]
        choose: Option<u32>,
    },

    /// Search and filter job listings
    Jobs {
        /// Free-text search over title and company
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Salary display-string substring
        #[arg(long)]
        salary: Option<String>,
    },

    /// Show the learning plan and mark resources complete
    Plan {
        /// Flip completion for this resource id
        #[arg(long)]
        toggle: Option<u32>,

        /// Clear all saved learning progress
        #[arg(long)]
        reset: bool,
    },

    /// Summarize saved assessment, career choice and learning progress
    Progress,
}

impl ConfigProvider for CliConfig {
    fn backend(&self) -> Backend {
        self.backend
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn state_dir(&self) -> &str {
        &self.state_dir
    }

    fn simulate_latency(&self) -> bool {
        !self.no_delay
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.backend == Backend::Remote {
            validate_url("api_endpoint", &self.api_endpoint)?;
        }
        validate_path("state_dir", &self.state_dir)?;
        Ok(())
    }
}
