use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enum_iterator::all;
use serde::Serialize;
use tracing::debug;

use eth_units::{
    env::ENV_CONFIG,
    format_wei, log, parse_wei,
    units::{Unit, WeiAmount},
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an amount like "1.5 ether" or "21000" to a number of wei.
    ToWei {
        /// Number with an optional unit, quote it when it contains a space.
        input: String,
        /// Print a JSON object instead of plain text.
        #[clap(long)]
        json: bool,
    },
    /// Convert a number of wei to a readable amount.
    FromWei {
        /// Integer number of wei.
        wei: String,
        /// Only use Wei, KWei, MWei, GWei and Ether and up. Also on when UNITS_STANDARD is set.
        #[clap(long)]
        standard: bool,
        /// Print a JSON object instead of plain text.
        #[clap(long)]
        json: bool,
    },
    /// List every known unit with its multiplier and aliases.
    Units {
        /// Print a JSON array instead of plain text.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ToWeiOutput {
    input: String,
    wei: WeiAmount,
}

#[derive(Serialize)]
struct FromWeiOutput {
    wei: WeiAmount,
    standard: bool,
    formatted: String,
}

#[derive(Serialize)]
struct UnitOutput {
    label: &'static str,
    tier: usize,
    multiplier: WeiAmount,
    named: Option<&'static str>,
    aliases: Vec<&'static str>,
}

fn to_wei(input: String, json: bool) -> Result<()> {
    let wei = parse_wei(&input).with_context(|| format!("failed to convert {input} to wei"))?;

    if json {
        println!("{}", serde_json::to_string(&ToWeiOutput { input, wei })?);
    } else {
        println!("{wei}");
    }

    Ok(())
}

fn from_wei(wei: String, standard: bool, json: bool) -> Result<()> {
    let standard = standard || ENV_CONFIG.standard_units;
    debug!(%wei, standard, "formatting wei");

    // Only bare integers, a unit here is almost certainly a mistake.
    let wei: WeiAmount = wei
        .parse::<num::BigUint>()
        .map(WeiAmount)
        .with_context(|| format!("expected an integer number of wei, got {wei}"))?;
    let formatted = format_wei(&wei, standard)?;

    if json {
        let output = FromWeiOutput {
            wei,
            standard,
            formatted,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{formatted}");
    }

    Ok(())
}

fn list_units(json: bool) -> Result<()> {
    let units: Vec<UnitOutput> = all::<Unit>()
        .map(|unit| UnitOutput {
            label: unit.label(),
            tier: unit.tier(),
            multiplier: WeiAmount(unit.multiplier()),
            named: unit.named_alias(),
            aliases: unit
                .aliases()
                .iter()
                .copied()
                .filter(|alias| !alias.is_empty())
                .collect(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&units)?);
    } else {
        for unit in units {
            println!(
                "{:<11} {:>32} {:<9} {}",
                unit.label,
                unit.multiplier.to_string(),
                unit.named.unwrap_or("-"),
                unit.aliases.join(", ")
            );
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    log::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ToWei { input, json } => to_wei(input, json),
        Commands::FromWei {
            wei,
            standard,
            json,
        } => from_wei(wei, standard, json),
        Commands::Units { json } => list_units(json),
    }
}
