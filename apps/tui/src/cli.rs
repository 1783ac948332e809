use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "surf_gems", version, about = "Surf spot directory with a synchronized list and map")]
pub struct CliArgs {
    /// Print directory stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Load spots from a JSON file instead of the bundled set
    #[arg(long, value_name = "PATH")]
    pub spots: Option<String>,

    /// Start with a category filter (ocean, rapid, wake)
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Terminal width below which list and map are shown one at a time
    #[arg(long = "narrow-breakpoint", value_name = "COLUMNS")]
    pub narrow_breakpoint: Option<u16>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.spots {
            std::env::set_var("SPOTS_FILE", path);
        }
        if let Some(category) = &self.category {
            std::env::set_var("SPOT_CATEGORY", category);
        }
        if let Some(columns) = self.narrow_breakpoint {
            std::env::set_var("NARROW_BREAKPOINT", columns.to_string());
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::parse_from([
            "surf_gems",
            "--headless",
            "--json",
            "--spots",
            "spots.json",
            "--category",
            "rapid",
            "--narrow-breakpoint",
            "90",
        ]);

        assert!(args.headless && args.json);
        assert_eq!(args.spots.as_deref(), Some("spots.json"));
        assert_eq!(args.category.as_deref(), Some("rapid"));
        assert_eq!(args.narrow_breakpoint, Some(90));
        assert!(!args.debug);
    }

    #[test]
    fn help_mentions_headless() {
        assert!(CliArgs::help_text().contains("--headless"));
    }
}
