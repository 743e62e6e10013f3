//! Command-line argument parsing.

use clap::Parser;

/// Reads JSON files from a directory and creates DynamoDB tables based on
/// the table definitions in the JSON files.
#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    /// Path to the JSON schema directory.
    #[arg(short, long)]
    pub path: Option<String>,

    /// Force re-creation of existing tables.
    #[arg(short, long)]
    pub force: bool,

    /// Enable debug logging on the console.
    #[arg(short, long)]
    pub debug: bool,

    /// Custom DynamoDB endpoint URL (e.g. http://localhost:8000 for
    /// DynamoDB Local).
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::parse_from([
            "dynomigrate",
            "--path",
            "schemas",
            "--force",
            "--debug",
            "--endpoint-url",
            "http://localhost:8000",
        ]);
        assert_eq!(
            args,
            CliArgs {
                path: Some("schemas".to_string()),
                force: true,
                debug: true,
                endpoint_url: Some("http://localhost:8000".to_string()),
            }
        );
    }

    #[test]
    fn short_flags_match_long_flags() {
        let short = CliArgs::parse_from(["dynomigrate", "-p", "schemas", "-f", "-d"]);
        let long = CliArgs::parse_from(["dynomigrate", "--path", "schemas", "--force", "--debug"]);
        assert_eq!(short, long);
    }

    #[test]
    fn path_is_optional_at_parse_time() {
        // Missing -p is reported by Config::from_args with a friendlier
        // message and exit code 1, not by clap.
        let args = CliArgs::parse_from(["dynomigrate"]);
        assert_eq!(args.path, None);
        assert!(!args.force);
        assert!(!args.debug);
    }
}
