//! # CLI Layer
//!
//! One possible client of the shipreg API. This is the only place that knows
//! about terminal output, process arguments and the data directory location.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `init_context()`: builds the `ShipApi` over a `FileStore`
//! - `handle_*()`: one per subcommand, calling the API and rendering the result
//! - `*_from_args()`: turn raw flag strings into API types

use super::render::{print_count, print_messages, print_ships, OutputMode};
use super::setup::{Cli, Commands, FilterArgs, ShipFieldArgs};
use clap::Parser;
use directories::ProjectDirs;
use shipreg::api::{
    parse_date, parse_float, parse_instant, parse_number, ConfigAction, ShipApi,
};
use shipreg::config::ShipregConfig;
use shipreg::error::{Result, ShipError};
use shipreg::model::{ShipInput, ShipType};
use shipreg::query::{PageRequest, ShipFilter, ShipOrder};
use shipreg::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "SHIPREG_HOME";

struct AppContext {
    api: ShipApi<FileStore>,
    output: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Create { fields } => handle_create(&mut ctx, fields),
        Commands::Get { id } => handle_get(&ctx, &id),
        Commands::Update { id, fields } => handle_update(&mut ctx, &id, fields),
        Commands::Delete { id } => handle_delete(&mut ctx, &id),
        Commands::List {
            filter,
            order,
            page_number,
            page_size,
        } => handle_list(&ctx, filter, order, page_number, page_size),
        Commands::Count { filter } => handle_count(&ctx, filter),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Ignore a second initialisation (e.g. when run from tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shipreg", "shipreg")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShipError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir(cli)?;
    let config = ShipregConfig::load(&dir)?;
    debug!(data_dir = %dir.display(), data_file = %config.data_file, "loaded config");

    let store = FileStore::new(dir.clone()).with_file_name(&config.data_file);
    let api = ShipApi::new(store, dir).with_default_page_size(config.page_size);
    let output = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };

    Ok(AppContext { api, output })
}

fn handle_create(ctx: &mut AppContext, fields: ShipFieldArgs) -> Result<()> {
    let input = input_from_args(fields)?;
    let result = ctx.api.create_ship(input)?;
    print_ships(&result.affected_ships, ctx.output)?;
    print_messages(&result.messages, ctx.output);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_ship(id)?;
    print_ships(&result.listed_ships, ctx.output)?;
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: &str, fields: ShipFieldArgs) -> Result<()> {
    let patch = input_from_args(fields)?;
    let result = ctx.api.update_ship(id, patch)?;
    print_ships(&result.affected_ships, ctx.output)?;
    print_messages(&result.messages, ctx.output);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_ship(id)?;
    print_messages(&result.messages, ctx.output);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    filter: FilterArgs,
    order: Option<String>,
    page_number: Option<String>,
    page_size: Option<String>,
) -> Result<()> {
    let filter = filter_from_args(filter)?;
    let order = order.as_deref().map(str::parse::<ShipOrder>).transpose()?;
    let page = PageRequest {
        page_number: opt(page_number, |s| parse_number("pageNumber", s))?,
        page_size: opt(page_size, |s| parse_number("pageSize", s))?,
    };

    let result = ctx.api.list_ships(&filter, order, page)?;
    print_ships(&result.listed_ships, ctx.output)?;
    Ok(())
}

fn handle_count(ctx: &AppContext, filter: FilterArgs) -> Result<()> {
    let filter = filter_from_args(filter)?;
    let result = ctx.api.count_ships(&filter)?;
    print_count(result.count.unwrap_or(0), ctx.output);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.data_file);
        println!("page-size = {}", config.page_size);
    }
    print_messages(&result.messages, ctx.output);
    Ok(())
}

fn opt<T>(raw: Option<String>, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
    raw.as_deref().map(parse).transpose()
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ShipError::MalformedInput(format!("Invalid {}: {}", name, raw))),
    }
}

fn input_from_args(args: ShipFieldArgs) -> Result<ShipInput> {
    Ok(ShipInput {
        name: args.name,
        planet: args.planet,
        ship_type: opt(args.ship_type, str::parse::<ShipType>)?,
        prod_date: opt(args.prod_date, parse_date)?,
        is_used: opt(args.used, |s| parse_bool("isUsed", s))?,
        speed: opt(args.speed, |s| parse_float("speed", s))?,
        crew_size: opt(args.crew_size, |s| parse_number("crewSize", s))?,
    })
}

fn filter_from_args(args: FilterArgs) -> Result<ShipFilter> {
    Ok(ShipFilter {
        name: args.name,
        planet: args.planet,
        ship_type: opt(args.ship_type, str::parse::<ShipType>)?,
        after: opt(args.after, parse_instant)?,
        before: opt(args.before, parse_instant)?,
        is_used: opt(args.used, |s| parse_bool("isUsed", s))?,
        min_speed: opt(args.min_speed, |s| parse_float("minSpeed", s))?,
        max_speed: opt(args.max_speed, |s| parse_float("maxSpeed", s))?,
        min_crew_size: opt(args.min_crew_size, |s| parse_number("minCrewSize", s))?,
        max_crew_size: opt(args.max_crew_size, |s| parse_number("maxCrewSize", s))?,
        min_rating: opt(args.min_rating, |s| parse_float("minRating", s))?,
        max_rating: opt(args.max_rating, |s| parse_float("maxRating", s))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_ship_fields() {
        let args = ShipFieldArgs {
            name: Some("Orion".into()),
            ship_type: Some("merchant".into()),
            prod_date: Some("2999".into()),
            used: Some("yes".into()),
            speed: Some("0.42".into()),
            ..Default::default()
        };
        let input = input_from_args(args).unwrap();
        assert_eq!(input.ship_type, Some(ShipType::Merchant));
        assert_eq!(input.is_used, Some(true));
        assert_eq!(input.speed, Some(0.42));
        assert!(input.crew_size.is_none());
    }

    #[test]
    fn bad_field_value_is_malformed() {
        let args = ShipFieldArgs {
            crew_size: Some("lots".into()),
            ..Default::default()
        };
        assert!(matches!(
            input_from_args(args),
            Err(ShipError::MalformedInput(_))
        ));
    }

    #[test]
    fn converts_filter_bounds() {
        let args = FilterArgs {
            after: Some("2900".into()),
            max_crew_size: Some("50".into()),
            used: Some("false".into()),
            ..Default::default()
        };
        let filter = filter_from_args(args).unwrap();
        assert!(filter.after.is_some());
        assert_eq!(filter.max_crew_size, Some(50));
        assert_eq!(filter.is_used, Some(false));
        assert!(filter.name.is_none());
    }
}
