use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use marketiq::config::EXAMPLE_PROMPTS;
use marketiq::format::{format_currency, format_number, format_percent};
use marketiq::models::parse_date_input;
use marketiq::queries::{chart_points, peak_day, CampaignSummary};
use marketiq::{Campaign, CampaignStatus, Dashboard, FilterPatch, StatusFilter, ViewStatus};

/// Terminal front end for the MarketIQ campaign dashboard
#[derive(Parser, Debug)]
#[command(name = "marketiq")]
#[command(about = "Filter, search and prompt your advertising campaigns")]
#[command(version)]
struct Cli {
    /// Dataset file (JSON or .json.gz). Defaults to MARKETIQ_DATASET, then the data dir, then the built-in sample
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Generate this many synthetic campaigns instead of loading a dataset
    #[arg(long, global = true, conflicts_with = "data")]
    synthetic: Option<usize>,

    /// Seed for --synthetic
    #[arg(long, global = true, default_value_t = 42)]
    seed: u64,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show summary tiles and the campaign table, optionally filtered
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Interpret a natural-language prompt, e.g. "show top campaigns by ctr"
    Prompt {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Show one campaign with its daily performance
    Show { id: String },

    /// List the example prompts
    Examples,

    /// Interactive prompt loop (default)
    Repl,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// all, active or paused
    #[arg(long)]
    status: Option<String>,

    /// Case-insensitive substring of the campaign name
    #[arg(long)]
    search: Option<String>,

    /// Earliest start date (YYYY-MM-DD); only applied together with --to
    #[arg(long)]
    from: Option<String>,

    /// Latest end date (YYYY-MM-DD); only applied together with --from
    #[arg(long)]
    to: Option<String>,
}

impl FilterArgs {
    fn to_patch(&self, dashboard: &Dashboard) -> anyhow::Result<FilterPatch> {
        let mut patch = FilterPatch::new();
        if let Some(status) = &self.status {
            patch = patch.status(status.parse::<StatusFilter>()?);
        }
        if let Some(search) = &self.search {
            patch = patch.search_query(search.clone());
        }
        if self.from.is_some() || self.to.is_some() {
            let mut range = dashboard.filters().date_range;
            if let Some(from) = &self.from {
                range = range.with_start(parse_date_input(from)?);
            }
            if let Some(to) = &self.to {
                range = range.with_end(parse_date_input(to)?);
            }
            patch = patch.date_range(range);
        }
        Ok(patch)
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "marketiq=debug" } else { "marketiq=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut dashboard = load_dashboard(&cli);
    if let ViewStatus::Error(msg) = dashboard.view_status() {
        render_error(msg);
        return Ok(ExitCode::FAILURE);
    }

    match cli.command.unwrap_or(Command::Repl) {
        Command::List { filters } => {
            let patch = filters.to_patch(&dashboard)?;
            if !patch.is_empty() {
                dashboard.set_filters(patch);
            }
            render_dashboard(&dashboard);
        }
        Command::Prompt { words } => {
            let prompt = words.join(" ");
            run_prompt(&mut dashboard, &prompt);
        }
        Command::Show { id } => {
            dashboard.select_campaign(Some(&id));
            match dashboard.selected_campaign() {
                Some(campaign) => render_detail(campaign),
                None => {
                    eprintln!("No campaign with id '{}'", id);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Examples => print_examples(),
        Command::Repl => run_repl(&mut dashboard)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn load_dashboard(cli: &Cli) -> Dashboard {
    eprintln!("{}", "Loading campaigns...".dimmed());

    let builder = Dashboard::builder();
    let builder = match (&cli.data, cli.synthetic) {
        (Some(path), _) => builder.dataset_path(path),
        (None, Some(count)) => builder.synthetic(count, cli.seed),
        (None, None) => builder,
    };

    match builder.build() {
        Ok(dashboard) => dashboard,
        Err(e) => {
            let mut placeholder = Dashboard::new(Vec::new());
            placeholder.set_error(Some(e.to_string()));
            placeholder
        }
    }
}

fn run_prompt(dashboard: &mut Dashboard, prompt: &str) {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return;
    }
    let intent = dashboard.process_prompt(prompt);
    println!("{} {}", "=>".cyan().bold(), intent);
    render_dashboard(dashboard);
}

// ---------------------------------------------------------------------------
// Interactive loop
// ---------------------------------------------------------------------------

const REPL_HELP: &str = "\
Type a prompt (e.g. \"show top campaigns by ctr\") or a command:
  :reset            clear prompt results and filters
  :status <s>       filter by status (all, active, paused)
  :search <text>    filter by name
  :from <date>      start-date bound (YYYY-MM-DD, blank clears)
  :to <date>        end-date bound (YYYY-MM-DD, blank clears)
  :select <id>      select or deselect a campaign and show its trend
  :list             redraw the dashboard
  :examples         example prompts
  :help             this help
  :quit             exit";

fn run_repl(dashboard: &mut Dashboard) -> anyhow::Result<()> {
    println!("{}", "MarketIQ Dashboard".bold());
    println!("{}", "Type :help for commands, :quit to exit.".dimmed());
    render_dashboard(dashboard);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "marketiq>".green().bold());
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        let Some(command) = input.strip_prefix(':') else {
            run_prompt(dashboard, input);
            continue;
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "q" | "quit" | "exit" => break,
            "h" | "help" => println!("{}", REPL_HELP),
            "examples" => print_examples(),
            "list" => render_dashboard(dashboard),
            "reset" => {
                dashboard.reset_filters();
                render_dashboard(dashboard);
            }
            "status" | "search" | "from" | "to" => match repl_patch(dashboard, name, arg) {
                Ok(patch) => {
                    dashboard.set_filters(patch);
                    render_dashboard(dashboard);
                }
                Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
            },
            "select" => {
                if arg.is_empty() {
                    dashboard.select_campaign(None);
                } else {
                    dashboard.toggle_selection(arg);
                }
                match dashboard.selected_campaign() {
                    Some(campaign) => render_detail(campaign),
                    None => println!("{}", "No campaign selected".dimmed()),
                }
            }
            other => eprintln!("Unknown command ':{}' (try :help)", other),
        }
    }

    Ok(())
}

fn repl_patch(dashboard: &Dashboard, name: &str, arg: &str) -> marketiq::Result<FilterPatch> {
    let range = dashboard.filters().date_range;
    Ok(match name {
        "status" => FilterPatch::new().status(arg.parse()?),
        "search" => FilterPatch::new().search_query(arg),
        "from" => FilterPatch::new().date_range(range.with_start(parse_date_input(arg)?)),
        _ => FilterPatch::new().date_range(range.with_end(parse_date_input(arg)?)),
    })
}

fn print_examples() {
    println!("{}", "Example prompts".bold());
    for example in EXAMPLE_PROMPTS {
        println!("  \"{}\"", example);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_error(msg: &str) {
    eprintln!("{}", "Error".red().bold());
    eprintln!("{}", msg);
    eprintln!("{}", "Fix the dataset and re-run to reload.".dimmed());
}

fn render_dashboard(dashboard: &Dashboard) {
    render_summary(&dashboard.summary());
    println!();
    render_table(dashboard);
}

fn render_summary(summary: &CampaignSummary) {
    let tiles = [
        ("Total Impressions", format_number(summary.total_impressions)),
        ("Total Clicks", format_number(summary.total_clicks)),
        ("Total Conversions", format_number(summary.total_conversions)),
        ("Average CTR", format_percent(summary.average_ctr)),
        ("Conversion Rate", format_percent(summary.conversion_rate)),
        ("Total Spend", format_currency(summary.total_spend)),
    ];
    let line: Vec<String> = tiles
        .iter()
        .map(|(name, value)| format!("{} {}", name.dimmed(), value.bold()))
        .collect();
    println!("{}", line.join("  |  "));
}

const HEADERS: [&str; 10] = [
    "", "ID", "Campaign", "Status", "Impressions", "Clicks", "CTR", "Conversions", "Spend", "Budget",
];

fn table_row(dashboard: &Dashboard, c: &Campaign) -> [String; 10] {
    let marker = if dashboard.is_highlighted(&c.id) {
        "*"
    } else if dashboard.is_selected(&c.id) {
        ">"
    } else {
        ""
    };
    [
        marker.to_string(),
        c.id.clone(),
        c.name.clone(),
        c.status.to_string(),
        format_number(c.impressions),
        format_number(c.clicks),
        format_percent(c.ctr),
        format_number(c.conversions),
        format_currency(c.spend),
        format_currency(c.budget),
    ]
}

fn render_table(dashboard: &Dashboard) {
    let campaigns = dashboard.filtered_campaigns();
    if campaigns.is_empty() {
        println!("{}", "No campaigns found matching your filters".dimmed());
        return;
    }

    let rows: Vec<[String; 10]> = campaigns.iter().map(|c| table_row(dashboard, c)).collect();
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect();
    println!("{}", header.join("  ").bold());

    for (campaign, row) in campaigns.iter().zip(rows.iter()) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = if i >= 4 {
                    format!("{:>w$}", cell, w = *w)
                } else {
                    format!("{:<w$}", cell, w = *w)
                };
                if i == 3 {
                    match campaign.status {
                        CampaignStatus::Active => padded.green().to_string(),
                        CampaignStatus::Paused => padded.dimmed().to_string(),
                    }
                } else {
                    padded
                }
            })
            .collect();
        let line = cells.join("  ");

        if dashboard.is_highlighted(&campaign.id) {
            println!("{}", line.yellow().bold());
        } else if dashboard.is_selected(&campaign.id) {
            println!("{}", line.cyan().bold());
        } else {
            println!("{}", line);
        }
    }
}

fn render_detail(campaign: &Campaign) {
    println!("{} {}", campaign.name.bold(), format!("({})", campaign.id).dimmed());
    println!(
        "{}  {} - {}  budget {} / spent {} ({})",
        campaign.status,
        campaign.start_date,
        campaign.end_date,
        format_currency(campaign.budget),
        format_currency(campaign.spend),
        format_percent(campaign.budget_utilization()),
    );

    let points = chart_points(campaign);
    if points.is_empty() {
        println!("{}", "No daily performance recorded".dimmed());
        return;
    }

    println!();
    println!(
        "{}",
        format!(
            "{:<8} {:>12} {:>8} {:>12} {:>10}",
            "Day", "Impressions", "Clicks", "Conversions", "Spend"
        )
        .bold()
    );
    for p in &points {
        println!(
            "{:<8} {:>12} {:>8} {:>12} {:>10}",
            p.label,
            format_number(p.impressions),
            format_number(p.clicks),
            format_number(p.conversions),
            format_currency(p.spend)
        );
    }
    if let Some(peak) = peak_day(campaign) {
        println!(
            "{} {} ({} conversions)",
            "Peak day:".dimmed(),
            peak.date,
            format_number(peak.conversions)
        );
    }
}
