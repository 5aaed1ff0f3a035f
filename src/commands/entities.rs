use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::cli::{CliArgs, EntityArgs};
use crate::commands::common;
use crate::config::{OutputFormat, ResolvedConfig};
use crate::db::paging::PagedList;
use crate::model::{City, Country, Student};
use crate::output::{json as json_out, table};
use crate::services::{CityService, CountryService, StudentService};

const DEFAULT_PAGE_SIZE: usize = 50;

pub fn run_students(args: &CliArgs, cmd: &EntityArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let provider = common::build_provider(&resolved);
    let service = StudentService::new(&provider);

    if let Some(id) = cmd.id {
        let student = service.by_id(id)?;
        return emit_single(args, &resolved, format, "student", student, student_row);
    }

    let listing = match paging_of(cmd) {
        Some((index, size)) => Listing::from_page(service.paged(index, size)?, student_row)?,
        None => Listing::from_items(service.list()?, student_row)?,
    };
    emit_listing(
        args,
        &resolved,
        format,
        &["Id", "FirstName", "LastName", "CityId"],
        listing,
    )
}

pub fn run_cities(args: &CliArgs, cmd: &EntityArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let provider = common::build_provider(&resolved);
    let service = CityService::new(&provider);

    if let Some(id) = cmd.id {
        let city = service.by_id(id)?;
        return emit_single(args, &resolved, format, "city", city, city_row);
    }

    let listing = match paging_of(cmd) {
        Some((index, size)) => Listing::from_page(service.paged(index, size)?, city_row)?,
        None => Listing::from_items(service.list()?, city_row)?,
    };
    emit_listing(args, &resolved, format, &["Id", "Name", "CountryId"], listing)
}

pub fn run_countries(args: &CliArgs, cmd: &EntityArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let provider = common::build_provider(&resolved);
    let service = CountryService::new(&provider);

    if let Some(id) = cmd.id {
        let country = service.by_id(id)?;
        return emit_single(args, &resolved, format, "country", country, country_row);
    }

    let listing = match paging_of(cmd) {
        Some((index, size)) => Listing::from_page(service.paged(index, size)?, country_row)?,
        None => Listing::from_items(service.list()?, country_row)?,
    };
    emit_listing(args, &resolved, format, &["Id", "Name"], listing)
}

fn paging_of(cmd: &EntityArgs) -> Option<(usize, usize)> {
    if cmd.page.is_none() && cmd.page_size.is_none() {
        return None;
    }
    Some((
        cmd.page.unwrap_or(0),
        cmd.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    ))
}

/// Entity rows ready for both output paths: the typed items pre-serialized
/// for JSON, the display cells for the table, and paging metadata when the
/// caller asked for a page.
struct Listing {
    items: serde_json::Value,
    rows: Vec<Vec<String>>,
    meta: Option<PagedList<()>>,
}

impl Listing {
    fn from_items<T: Serialize>(items: Vec<T>, to_row: impl Fn(T) -> Vec<String>) -> Result<Self> {
        Ok(Self {
            items: serde_json::to_value(&items)?,
            rows: items.into_iter().map(to_row).collect(),
            meta: None,
        })
    }

    fn from_page<T: Serialize>(
        page: PagedList<T>,
        to_row: impl Fn(T) -> Vec<String>,
    ) -> Result<Self> {
        let meta = PagedList {
            items: Vec::new(),
            page_index: page.page_index,
            page_size: page.page_size,
            total_count: page.total_count,
            total_pages: page.total_pages,
        };
        Ok(Self {
            items: serde_json::to_value(&page.items)?,
            rows: page.items.into_iter().map(to_row).collect(),
            meta: Some(meta),
        })
    }
}

fn emit_single<T: Serialize>(
    args: &CliArgs,
    resolved: &ResolvedConfig,
    format: OutputFormat,
    label: &str,
    item: Option<T>,
    to_row: impl Fn(T) -> Vec<String>,
) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        let payload = json!({ label: item });
        let body = json_out::emit_json(&payload, common::json_pretty(resolved))?;
        if !args.quiet {
            println!("{}", body);
        }
        return Ok(());
    }

    if args.quiet {
        return Ok(());
    }

    match item {
        Some(item) => println!("{}", to_row(item).join(" ")),
        None => println!("No {} found", label),
    }
    Ok(())
}

fn emit_listing(
    args: &CliArgs,
    resolved: &ResolvedConfig,
    format: OutputFormat,
    headers: &[&str],
    listing: Listing,
) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        let payload = match &listing.meta {
            Some(meta) => json!({
                "items": listing.items,
                "pageIndex": meta.page_index,
                "pageSize": meta.page_size,
                "totalCount": meta.total_count,
                "totalPages": meta.total_pages,
                "hasPreviousPage": meta.has_previous_page(),
                "hasNextPage": meta.has_next_page(),
            }),
            None => json!({ "items": listing.items }),
        };
        let body = json_out::emit_json_value(&payload, common::json_pretty(resolved))?;
        if !args.quiet {
            println!("{}", body);
        }
        return Ok(());
    }

    if args.quiet {
        return Ok(());
    }

    println!("{}", table::render_rows(headers, &listing.rows));
    if let Some(meta) = &listing.meta {
        println!("{}", table::paging_footer(meta));
    }
    Ok(())
}

fn student_row(student: Student) -> Vec<String> {
    vec![
        student.id.to_string(),
        student.first_name,
        student.last_name,
        student
            .city_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    ]
}

fn city_row(city: City) -> Vec<String> {
    vec![
        city.id.to_string(),
        city.name,
        city.country_id.map(|id| id.to_string()).unwrap_or_default(),
    ]
}

fn country_row(country: Country) -> Vec<String> {
    vec![country.id.to_string(), country.name]
}
