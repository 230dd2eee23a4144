use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;

use roadline_sdk::Roadline;
use roadline_server::{RoadlineServer, ServerConfig};
use roadline_types::{Cid, RecordCategory};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(cli.data_dir, args).await,
        Command::Store(args) => cmd_store(cli.data_dir, args),
        Command::Retrieve(args) => cmd_retrieve(cli.data_dir, args),
        Command::Anchor(args) => cmd_anchor(cli.data_dir, args),
        Command::Latest(args) => cmd_latest(cli.data_dir, args),
    }
}

async fn cmd_serve(data_dir: PathBuf, args: ServeArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig {
            bind_addr: args
                .bind
                .parse()
                .with_context(|| format!("invalid bind address: {}", args.bind))?,
            data_dir,
            anchor_on_store: args.anchor_on_store,
            ..Default::default()
        },
    };

    println!(
        "{} roadline server on {}",
        "▶".green().bold(),
        config.bind_addr.to_string().bold()
    );
    RoadlineServer::new(config).serve().await?;
    Ok(())
}

fn cmd_store(data_dir: PathBuf, args: StoreArgs) -> anyhow::Result<()> {
    let category = parse_category(&args.category)?;
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let record: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", args.file.display()))?;

    let roadline = open(&data_dir)?;
    let cid = roadline.store_record(category, &record)?;
    println!("{} Stored {} record", "✓".green().bold(), category.to_string().yellow());
    println!("  CID: {}", cid.to_hex().cyan());

    if args.anchor {
        roadline.anchor(category, &cid.to_hex())?;
        println!("  {} anchored as latest", "✓".green());
    }
    Ok(())
}

fn cmd_retrieve(data_dir: PathBuf, args: RetrieveArgs) -> anyhow::Result<()> {
    let category = parse_category(&args.category)?;
    let cid = Cid::from_hex(&args.cid)
        .with_context(|| format!("{} is not a valid identifier", args.cid))?;

    let roadline = open(&data_dir)?;
    let record = roadline.retrieve_record(category, &cid)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn cmd_anchor(data_dir: PathBuf, args: AnchorArgs) -> anyhow::Result<()> {
    let category = parse_category(&args.category)?;
    let roadline = open(&data_dir)?;
    roadline.anchor(category, &args.cid)?;
    println!(
        "{} Anchored {} as latest {} identifier",
        "✓".green().bold(),
        args.cid.cyan(),
        category.to_string().yellow()
    );
    Ok(())
}

fn cmd_latest(data_dir: PathBuf, args: LatestArgs) -> anyhow::Result<()> {
    let category = parse_category(&args.category)?;
    let roadline = open(&data_dir)?;
    match roadline.latest_anchor(category)? {
        Some(cid) => println!("{}", cid),
        None => println!("no identifier anchored for {}", category.to_string().yellow()),
    }
    Ok(())
}

fn open(data_dir: &Path) -> anyhow::Result<Roadline> {
    Roadline::open(data_dir)
        .with_context(|| format!("opening data directory {}", data_dir.display()))
}

fn parse_category(raw: &str) -> anyhow::Result<RecordCategory> {
    raw.parse::<RecordCategory>()
        .context("expected 'traffic' or 'accident'")
}
