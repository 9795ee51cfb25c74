//! Command dispatch: wires CLI arguments to the application layer

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::application::Generator;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{block_weights, Profile, Selection};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(dataset) = &cli.dataset {
        settings.dataset = dataset.clone();
    }
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Generate {
            country,
            profile,
            flat,
            json,
            seed,
        }) => _generate(
            &settings,
            country,
            (*profile).unwrap_or(settings.profile),
            *flat,
            *json,
            *seed,
        ),
        Some(Commands::Countries) => _countries(&settings),
        Some(Commands::Blocks { country }) => _blocks(&settings, country),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip(settings))]
fn _generate(
    settings: &Settings,
    country: &str,
    profile: Profile,
    flat: bool,
    json: bool,
    seed: Option<u64>,
) -> CliResult<()> {
    let generator = Generator::from_path(&settings.dataset)?;

    let selection = match seed {
        Some(seed) => {
            debug!("seeded rng: {}", seed);
            generator.generate(country, profile, &mut StdRng::seed_from_u64(seed))?
        }
        None => generator.generate(country, profile, &mut rand::rng())?,
    };

    if json {
        output::info(&serde_json::to_string_pretty(&selection)?);
    } else if flat {
        render_flat(&selection);
    } else {
        render_grouped(&selection);
    }
    Ok(())
}

fn render_grouped(selection: &Selection) {
    for pick in &selection.picks {
        output::header(&pick.label);
        for domain in &pick.domains {
            output::detail(domain);
        }
        println!();
    }
}

fn render_flat(selection: &Selection) {
    output::info(&selection.flatten().iter().join("\n"));
}

#[instrument(skip(settings))]
fn _countries(settings: &Settings) -> CliResult<()> {
    let generator = Generator::from_path(&settings.dataset)?;
    for country in generator.dataset().countries() {
        output::info(country);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _blocks(settings: &Settings, country: &str) -> CliResult<()> {
    let generator = Generator::from_path(&settings.dataset)?;
    let blocks = generator
        .dataset()
        .blocks(country)
        .ok_or_else(|| crate::domain::DomainError::UnknownCountry(country.to_string()))
        .map_err(crate::application::ApplicationError::from)?;

    let labels: Vec<&str> = blocks.keys().map(String::as_str).collect();
    let weights = block_weights(&labels);

    output::header(country);
    for (label, weight) in labels.iter().zip(weights) {
        let pool = &blocks[*label];
        output::detail(&format!("{label}  [weight {weight}, {} domains]", pool.len()));
    }
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match Settings::global_config_path() {
                Some(path) => output::action("config", &path.display()),
                None => output::warning("no home directory found, global config unavailable"),
            }
            Ok(())
        }
    }
}
