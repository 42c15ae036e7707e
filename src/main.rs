//! Label Sheet CLI
//!
//! Usage:
//!   label-sheet [OPTIONS] [PRODUCTS]
//!
//! Options:
//!   -t, --template <ID>    Template id
//!   -n, --slots <N>        Labels per page
//!   -p, --pages <N>        Number of pages
//!   -f, --format <FMT>     Output format: svg, css or json
//!   --page <N>             Page to render for svg output
//!   -c, --config <FILE>    Config file (TOML format)
//!   --store <FILE>         JSON file of saved custom templates
//!   --list-templates       List available templates
//!   -d, --debug            Print slot geometry to stderr
//!   -h, --help             Print help

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use label_sheet::product::{load_products, product_ids, read_products};
use label_sheet::template::JsonFileStore;
use label_sheet::{
    plan_sheet, plan_to_json, render_page_svg, render_slot_css, LayoutEngine, PlanOutcome,
    SheetConfig, SheetError, SvgConfig, TemplateCatalog,
};

#[derive(Parser)]
#[command(name = "label-sheet")]
#[command(about = "Lay out products on label sheets for printing")]
struct Cli {
    /// Products as a JSON array (reads from stdin if not provided)
    products: Option<PathBuf>,

    /// Template id (default from config, else the first built-in)
    #[arg(short, long)]
    template: Option<String>,

    /// Labels per page
    #[arg(short = 'n', long)]
    slots: Option<usize>,

    /// Number of pages
    #[arg(short, long)]
    pages: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Page to render for svg output
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file of saved custom templates
    #[arg(long)]
    store: Option<PathBuf>,

    /// List available templates and exit
    #[arg(long)]
    list_templates: bool,

    /// Debug mode: print slot geometry to stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Css,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("label_sheet=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SheetError> {
    let config = match &cli.config {
        Some(path) => SheetConfig::from_file(path)?,
        None => SheetConfig::default(),
    };

    let mut catalog = TemplateCatalog::with_builtins();
    config.register_templates(&mut catalog)?;
    if let Some(path) = &cli.store {
        let added = catalog.load_from_store(&JsonFileStore::new(path))?;
        info!(path = %path.display(), added, "loaded saved templates");
    }

    if cli.list_templates {
        print_templates(&catalog);
        return Ok(());
    }

    let template_id = cli
        .template
        .or(config.defaults.template.clone())
        .or_else(|| catalog.ids().next().map(str::to_string))
        .unwrap_or_default();
    let template = catalog.require(&template_id)?;

    let mut request = config.request();
    if cli.slots.is_some() {
        request.slots_per_page = cli.slots;
    }
    if cli.pages.is_some() {
        request.page_count = cli.pages;
    }

    let products = match &cli.products {
        Some(path) => load_products(path)?,
        None if io::stdin().is_terminal() => Vec::new(),
        None => read_products(io::stdin().lock())?,
    };
    let ids = product_ids(&products);

    let outcome = plan_sheet(&LayoutEngine::default(), template, &ids, &request);
    report(&outcome);

    if cli.debug {
        print_slot_table(&outcome);
    }

    match cli.format {
        Format::Svg => match render_page_svg(&outcome.plan, cli.page, &SvgConfig::default()) {
            Some(svg) => print!("{}", svg),
            None => warn!(
                page = cli.page,
                pages = outcome.plan.pages.len(),
                "page out of range, nothing rendered"
            ),
        },
        Format::Css => print!("{}", render_slot_css(&outcome.plan, &SvgConfig::default())),
        Format::Json => println!("{}", plan_to_json(&outcome)?),
    }
    Ok(())
}

fn report(outcome: &PlanOutcome) {
    for diagnostic in &outcome.warnings {
        if diagnostic.is_warning() {
            warn!(category = %diagnostic.category, "{}", diagnostic.message);
        } else {
            info!(category = %diagnostic.category, "{}", diagnostic.message);
        }
    }
}

fn print_templates(catalog: &TemplateCatalog) {
    for template in catalog.iter() {
        println!(
            "{:<12} {:>2} x {:<2} {:>6.3} x {:<6.3} in  {}",
            template.id,
            template.columns,
            template.rows,
            template.label_width,
            template.label_height,
            template.name
        );
    }
}

fn print_slot_table(outcome: &PlanOutcome) {
    let plan = &outcome.plan;
    eprintln!(
        "template {} ({:?}), page {} x {} in, origin ({}, {})",
        plan.template.id,
        plan.policy,
        plan.page.width,
        plan.page.height,
        plan.page_origin.0,
        plan.page_origin.1
    );
    eprintln!(
        "{} per page x {} pages = {} slots",
        plan.slots_per_page, plan.page_count, plan.total_slots
    );
    for slot in plan.geometry().slots() {
        let rect = slot.rect();
        eprintln!(
            "  {:<6} left={:.4} top={:.4} width={:.4} height={:.4}",
            slot.id().to_string(),
            rect.left,
            rect.top,
            rect.width,
            rect.height
        );
    }
}
