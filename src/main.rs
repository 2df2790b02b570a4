// Estatery - main.rs
//
// CLI front end. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Store loading (catalog, favourites, admin flag)
// 4. Dispatch to the query engine and catalog operations
//
// The CLI is a thin driver over the library: every listing surface goes
// through core::query, and every mutation is persisted back through
// platform::store before the process exits.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use estatery::app::session::AdminSession;
use estatery::app::{catalog, state::AppState};
use estatery::core::loan::LoanTerms;
use estatery::core::model::{Category, Property, PropertyDefinition, SqftValue};
use estatery::core::price::format_inr;
use estatery::core::query::{self, PageSpec, QuerySpec, SortBy};
use estatery::core::stats::CatalogStats;
use estatery::core::{export, filter::FilterState};
use estatery::platform::{config, store};
use estatery::util::error::Result;
use estatery::util::{constants, logging};

/// Estatery - property catalog engine.
///
/// Browse, search, and administer the listing catalog from the terminal.
/// All state lives in local JSON stores; a fresh start is seeded with the
/// bundled fixture listings.
#[derive(Parser, Debug)]
#[command(name = "estatery", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the data directory (defaults to the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the catalog with the listing-page filters.
    Search {
        /// Restrict to one category: rent or buy.
        #[arg(long)]
        category: Option<String>,

        /// Location substring (case-insensitive).
        #[arg(long)]
        location: Option<String>,

        /// Building type, e.g. Apartment, Villa, or "Full House" for rentals.
        #[arg(long = "type")]
        property_type: Option<String>,

        /// Bedroom count, e.g. "3" (exactly) or "3+" (at least).
        #[arg(long)]
        bhk: Option<String>,

        /// Named budget band, e.g. "₹10k - ₹25k" or "Under ₹50 L".
        #[arg(long)]
        budget: Option<String>,

        /// Free-text search over title and location.
        #[arg(long)]
        query: Option<String>,

        /// Sort order: featured, price_low, price_high, newest, title.
        #[arg(long, default_value = "featured")]
        sort: String,

        /// Show only the first N results ("Load More" style).
        #[arg(long)]
        limit: Option<usize>,

        /// 1-based page number (admin-style paging; needs --per-page).
        #[arg(long)]
        page: Option<usize>,

        /// Page size for --page.
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Show catalog statistics.
    Stats,

    /// Export the catalog to CSV or JSON.
    Export {
        /// Output format: csv or json.
        #[arg(long, default_value = "csv")]
        format: String,

        /// Output file path.
        #[arg(long)]
        out: PathBuf,

        /// Restrict to one category: rent or buy.
        #[arg(long)]
        category: Option<String>,
    },

    /// Manage favourited listings.
    Favourites {
        #[command(subcommand)]
        command: FavouritesCommand,
    },

    /// Administer the catalog (requires sign-in).
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },

    /// Estimate a home-loan monthly instalment.
    Emi {
        /// Loan principal in rupees.
        #[arg(long, default_value_t = constants::DEFAULT_LOAN_PRINCIPAL)]
        amount: f64,

        /// Annual interest rate in percent.
        #[arg(long, default_value_t = constants::DEFAULT_LOAN_RATE_PCT)]
        rate: f64,

        /// Term in years.
        #[arg(long, default_value_t = constants::DEFAULT_LOAN_TERM_YEARS)]
        years: u32,
    },
}

#[derive(Subcommand, Debug)]
enum FavouritesCommand {
    /// List favourited listings.
    List,
    /// Favourite a listing by id.
    Add { id: i64 },
    /// Remove a listing from favourites by id.
    Remove { id: i64 },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Sign in with the demo password.
    Login {
        #[arg(long)]
        password: String,
    },
    /// Sign out.
    Logout,
    /// Add a listing.
    Add {
        #[command(flatten)]
        fields: ListingFields,
    },
    /// Edit a listing by id; only the given fields change.
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ListingFields,
    },
    /// Delete one or more listings by id.
    Remove { ids: Vec<i64> },
}

/// Listing fields shared by `admin add` and `admin edit`.
#[derive(Args, Debug)]
struct ListingFields {
    /// Listing title.
    #[arg(long)]
    title: Option<String>,

    /// Display price, e.g. "₹25,000" or "₹1.5 Cr".
    #[arg(long)]
    price: Option<String>,

    /// Listing status: "For Rent" or "For Sale" (drives the category).
    #[arg(long)]
    status: Option<String>,

    /// Building type.
    #[arg(long = "type")]
    kind: Option<String>,

    #[arg(long)]
    beds: Option<u32>,

    #[arg(long)]
    baths: Option<u32>,

    /// Floor area, e.g. "1,850".
    #[arg(long)]
    sqft: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// Primary image URL.
    #[arg(long)]
    image: Option<String>,

    /// Promotional badge label.
    #[arg(long)]
    badge: Option<String>,
}

impl ListingFields {
    fn into_definition(self) -> PropertyDefinition {
        PropertyDefinition {
            title: self.title,
            price: self.price,
            status: self.status,
            kind: self.kind.map(Into::into),
            beds: self.beds,
            baths: self.baths,
            sqft: self.sqft.map(SqftValue::Text),
            location: self.location,
            image: self.image,
            badge: self.badge,
            ..Default::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and config before logging so the configured
    // level can participate in the filter priority chain.
    let platform_paths = config::PlatformPaths::resolve();
    let (app_config, config_warnings) = config::load_config(&platform_paths.config_dir);

    logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| platform_paths.data_dir.clone());

    tracing::info!(
        version = constants::APP_VERSION,
        data_dir = %data_dir.display(),
        "Estatery starting"
    );

    if let Err(e) = run(cli, &data_dir, &app_config) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, data_dir: &std::path::Path, app_config: &config::AppConfig) -> Result<()> {
    let catalog_path = store::catalog_path(data_dir);
    let favourites_path = store::favourites_path(data_dir);
    let admin_path = store::admin_path(data_dir);

    let mut state = AppState::new(
        store::load_catalog(&catalog_path),
        store::load_favourites(&favourites_path),
        AdminSession::restore(store::load_admin_flag(&admin_path)),
    );

    match cli.command {
        Command::Search {
            category,
            location,
            property_type,
            bhk,
            budget,
            query: text,
            sort,
            limit,
            page,
            per_page,
        } => {
            let category = parse_category(category.as_deref());
            let sort = parse_sort(&sort);

            let mut filter = FilterState::default();
            if let Some(location) = location {
                filter.location = location;
            }
            if let Some(property_type) = property_type {
                filter.property_type = property_type;
            }
            if let Some(bhk) = bhk {
                filter.bhk = bhk;
            }
            if let Some(budget) = budget {
                filter.budget = budget;
            }
            if let Some(text) = text {
                filter.text_search = text;
            }

            let page_spec = match (limit, page) {
                (Some(n), _) => PageSpec::VisibleCount(n),
                (None, Some(page)) => PageSpec::Window {
                    page,
                    per_page: per_page.unwrap_or(app_config.table_page_size),
                },
                (None, None) => PageSpec::All,
            };

            let spec = QuerySpec {
                category,
                filter,
                sort,
                page: page_spec,
            };
            let result = query::query(&state.catalog, &spec);

            println!(
                "Showing {} of {} {}",
                result.items.len(),
                result.total,
                if result.total == 1 {
                    "property"
                } else {
                    "properties"
                }
            );
            println!();
            for (i, property) in result.items.iter().enumerate() {
                print_listing(i + 1, property, state.is_favourite(property.id));
            }
        }

        Command::Stats => {
            let stats = CatalogStats::compute(&state.catalog);
            println!("Total properties: {}", stats.total);
            println!("For sale:         {}", stats.for_sale);
            println!("For rent:         {}", stats.for_rent);
            println!("Apartments:       {}", stats.apartments);
            println!("Villas:           {}", stats.villas);
            println!("Houses:           {}", stats.houses);
            println!("Average price:    ₹{}", format_inr(stats.average_price));
        }

        Command::Export {
            format,
            out,
            category,
        } => {
            let category = parse_category(category.as_deref());
            let spec = QuerySpec {
                category,
                ..Default::default()
            };
            let result = query::query(&state.catalog, &spec);
            let selection: Vec<Property> = result.items.into_iter().cloned().collect();

            let file = std::fs::File::create(&out).map_err(|e| {
                estatery::util::error::EstateryError::Io {
                    path: out.clone(),
                    operation: "create export file",
                    source: e,
                }
            })?;

            let count = match format.as_str() {
                "csv" => export::export_csv(&selection, file, &out)?,
                "json" => export::export_json(&selection, file, &out)?,
                other => {
                    eprintln!("Error: unknown export format '{other}' (expected csv or json)");
                    std::process::exit(2);
                }
            };
            println!("Exported {count} properties to {}", out.display());
        }

        Command::Favourites { command } => match command {
            FavouritesCommand::List => {
                if state.favourites.is_empty() {
                    println!("No favourites yet.");
                }
                for (i, property) in state.favourites.iter().enumerate() {
                    print_listing(i + 1, property, true);
                }
            }
            FavouritesCommand::Add { id } => {
                if state.is_favourite(id) {
                    println!("Listing {id} is already a favourite.");
                } else if state.toggle_favourite_by_id(id).is_some() {
                    store::save_favourites(&state.favourites, &favourites_path)?;
                    println!("Added listing {id} to favourites.");
                } else {
                    println!("No listing with id {id}.");
                }
            }
            FavouritesCommand::Remove { id } => {
                if state.is_favourite(id) {
                    state.favourites.retain(|p| p.id != id);
                    store::save_favourites(&state.favourites, &favourites_path)?;
                    println!("Removed listing {id} from favourites.");
                } else {
                    println!("Listing {id} is not a favourite.");
                }
            }
        },

        Command::Admin { command } => match command {
            AdminCommand::Login { password } => {
                if state.admin.sign_in(&password) {
                    store::save_admin_flag(true, &admin_path)?;
                    println!("Signed in.");
                } else {
                    eprintln!("Invalid password.");
                    std::process::exit(1);
                }
            }
            AdminCommand::Logout => {
                state.admin.sign_out();
                store::save_admin_flag(false, &admin_path)?;
                println!("Signed out.");
            }
            AdminCommand::Add { fields } => {
                require_admin(&state);
                let id = catalog::add_property(&mut state.catalog, fields.into_definition());
                store::save_catalog(&state.catalog, &catalog_path)?;
                println!("Added listing {id}.");
            }
            AdminCommand::Edit { id, fields } => {
                require_admin(&state);
                if catalog::update_property(&mut state.catalog, id, fields.into_definition()) {
                    store::save_catalog(&state.catalog, &catalog_path)?;
                    println!("Updated listing {id}.");
                } else {
                    println!("No listing with id {id}.");
                }
            }
            AdminCommand::Remove { ids } => {
                require_admin(&state);
                let removed = catalog::delete_many(&mut state.catalog, &ids);
                store::save_catalog(&state.catalog, &catalog_path)?;
                println!("Removed {removed} listing(s).");
            }
        },

        Command::Emi {
            amount,
            rate,
            years,
        } => {
            let terms = LoanTerms {
                principal: amount,
                annual_rate_pct: rate,
                years,
            };
            println!("Loan amount:    ₹{}", format_inr(terms.principal));
            println!("Interest rate:  {rate}% p.a.");
            println!("Tenure:         {years} years");
            println!();
            println!("Monthly EMI:    ₹{}", format_inr(terms.monthly_instalment()));
            println!("Total interest: ₹{}", format_inr(terms.total_interest()));
            println!("Total payable:  ₹{}", format_inr(terms.total_payable()));
        }
    }

    Ok(())
}

/// Exit unless the persisted admin session is signed in.
fn require_admin(state: &AppState) {
    if !state.admin.is_signed_in() {
        eprintln!("Not signed in. Run `estatery admin login --password <password>` first.");
        std::process::exit(1);
    }
}

fn parse_category(value: Option<&str>) -> Option<Category> {
    value.map(|raw| {
        raw.parse().unwrap_or_else(|e: String| {
            eprintln!("Error: {e}");
            std::process::exit(2);
        })
    })
}

fn parse_sort(raw: &str) -> SortBy {
    raw.parse().unwrap_or_else(|e: String| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    })
}

/// Print one listing card.
fn print_listing(index: usize, property: &Property, favourited: bool) {
    let heart = if favourited { " ♥" } else { "" };
    let period = property.period.as_deref().unwrap_or("");
    println!(
        "{index}. {} ({}{}){heart}",
        property.display_name, property.price, period
    );
    println!(
        "   {} | {} bed, {} bath | {} sqft",
        property.kind.label(),
        property.beds,
        property.baths,
        property.sqft
    );
    println!("   {} | {}", property.location, property.category.label());
    if let Some(badge) = &property.badge {
        println!("   [{badge}]");
    }
    if let Some(agent) = &property.agent {
        println!("   Agent: {} ({})", agent.name, agent.phone);
    }
    println!("   ID: {}", property.id);
    println!();
}
