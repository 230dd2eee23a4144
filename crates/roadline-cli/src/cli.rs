use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "roadline",
    about = "roadline — content-addressed provenance store for road telemetry",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory holding the blockstore, index, and ledger files.
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Store a JSON record and print its identifier
    Store(StoreArgs),
    /// Print a previously stored record
    Retrieve(RetrieveArgs),
    /// Record an identifier as the latest for a category
    Anchor(AnchorArgs),
    /// Print the latest anchored identifier for a category
    Latest(LatestArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: String,
    /// TOML configuration file. When given, it takes precedence over the
    /// individual flags.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub anchor_on_store: bool,
}

#[derive(Args)]
pub struct StoreArgs {
    /// Record category (traffic or accident)
    pub category: String,
    /// JSON file to store
    pub file: PathBuf,
    /// Also record the new identifier as the category's latest
    #[arg(long)]
    pub anchor: bool,
}

#[derive(Args)]
pub struct RetrieveArgs {
    /// Record category (traffic or accident)
    pub category: String,
    /// Identifier issued when the record was stored
    pub cid: String,
}

#[derive(Args)]
pub struct AnchorArgs {
    /// Record category (traffic or accident)
    pub category: String,
    /// Identifier to record as the latest
    pub cid: String,
}

#[derive(Args)]
pub struct LatestArgs {
    /// Record category (traffic or accident)
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["roadline", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, "127.0.0.1:8080");
            assert!(args.config.is_none());
            assert!(!args.anchor_on_store);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_bind() {
        let cli = Cli::try_parse_from(["roadline", "serve", "--bind", "0.0.0.0:9090"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, "0.0.0.0:9090");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_store() {
        let cli =
            Cli::try_parse_from(["roadline", "store", "traffic", "traffic_data.json"]).unwrap();
        if let Command::Store(args) = cli.command {
            assert_eq!(args.category, "traffic");
            assert_eq!(args.file, PathBuf::from("traffic_data.json"));
            assert!(!args.anchor);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_store_with_anchor() {
        let cli =
            Cli::try_parse_from(["roadline", "store", "accident", "acc.json", "--anchor"]).unwrap();
        if let Command::Store(args) = cli.command {
            assert!(args.anchor);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_retrieve() {
        let cli = Cli::try_parse_from(["roadline", "retrieve", "accident", "abc123"]).unwrap();
        if let Command::Retrieve(args) = cli.command {
            assert_eq!(args.category, "accident");
            assert_eq!(args.cid, "abc123");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_anchor() {
        let cli = Cli::try_parse_from(["roadline", "anchor", "traffic", "deadbeef"]).unwrap();
        assert!(matches!(cli.command, Command::Anchor(_)));
    }

    #[test]
    fn parse_latest() {
        let cli = Cli::try_parse_from(["roadline", "latest", "traffic"]).unwrap();
        if let Command::Latest(args) = cli.command {
            assert_eq!(args.category, "traffic");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_data_dir() {
        let cli =
            Cli::try_parse_from(["roadline", "--data-dir", "/var/roadline", "latest", "traffic"])
                .unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/var/roadline"));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["roadline", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);
    }
}
