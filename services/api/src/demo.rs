use chrono::Local;
use clap::Args;

use event_desk::api::EventApi;
use event_desk::config::AppConfig;
use event_desk::error::AppError;
use event_desk::events::{self, EventQuery};
use event_desk::roster::{
    printable_document, table, Candidate, CandidateId, FetchStatus, Gender, PrintExporter,
    PrintOutcome, RosterFilter, RosterStore, SystemSpooler,
};

use crate::routes::NO_EVENTS;

#[derive(Args, Debug)]
pub(crate) struct RosterViewArgs {
    /// Event identifier whose roster to fetch
    #[arg(long)]
    pub(crate) event_id: String,
    /// Search by name or phone number
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Filter by gender (Male, Female, or Other)
    #[arg(long, value_parser = crate::infra::parse_gender)]
    pub(crate) gender: Option<Gender>,
    /// Filter by role (case-insensitive substring)
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Filter by city (case-insensitive substring)
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Filter by address (case-insensitive substring)
    #[arg(long)]
    pub(crate) address: Option<String>,
    /// Send the rendered table to the configured print command
    #[arg(long)]
    pub(crate) print: bool,
}

pub(crate) async fn run_roster_view(args: RosterViewArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let api = EventApi::new(&config.event_api)?;

    let mut store = RosterStore::new();
    let status = store.load(&api, &args.event_id).await;
    if let FetchStatus::Failed { message } = &status {
        println!("Failed to fetch candidates: {message}");
    }

    *store.filter_mut() = RosterFilter {
        search: args.search.unwrap_or_default(),
        gender: args.gender,
        role: args.role,
        city: args.city,
        address: args.address,
    };

    let visible = store.visible();
    println!("Candidates for event {}", args.event_id);
    for line in table::text_lines(&visible) {
        println!("- {line}");
    }
    println!(
        "\n{} of {} candidates visible",
        visible.len(),
        store.candidates().len()
    );

    if args.print {
        let region = table::render_html(&visible);
        let exporter = PrintExporter::new(SystemSpooler::new(config.print.command.clone()));
        match exporter.export(Some(&region)) {
            Ok(PrintOutcome::Dispatched) => {
                println!("Roster sent to '{}'", config.print.command);
            }
            Ok(PrintOutcome::SkippedNoRegion) => {}
            Err(err) => println!("Print failed: {err}"),
        }
    }

    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct EventListArgs {
    /// Search by event title
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Filter by tag (case-insensitive substring)
    #[arg(long)]
    pub(crate) tag: Option<String>,
    /// Minimum entry fee
    #[arg(long)]
    pub(crate) min_fee: Option<u32>,
    /// Maximum entry fee
    #[arg(long)]
    pub(crate) max_fee: Option<u32>,
    /// Show the landing-page selection of upcoming events instead
    /// (ignores the other filters)
    #[arg(long)]
    pub(crate) upcoming: bool,
}

pub(crate) async fn run_event_list(args: EventListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let api = EventApi::new(&config.event_api)?;

    let all = match api.events().await {
        Ok(all) => all,
        Err(err) => {
            println!("Failed to fetch events: {err}");
            return Ok(());
        }
    };

    let rows = if args.upcoming {
        events::upcoming(&all, Local::now().date_naive(), 3)
    } else {
        let query = EventQuery {
            search: args.search.unwrap_or_default(),
            tag: args.tag,
            min_fee: args.min_fee,
            max_fee: args.max_fee,
        };
        events::visible(&all, &query)
    };

    println!("Events");
    if rows.is_empty() {
        println!("- {NO_EVENTS}");
    } else {
        for event in &rows {
            println!(
                "- {} | {} | {} | fee {}",
                event.title, event.tags, event.event_date, event.entry_fee
            );
        }
    }
    println!("\n{} of {} events visible", rows.len(), all.len());

    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full generated print document instead of a summary line
    #[arg(long)]
    pub(crate) show_document: bool,
}

/// Offline walkthrough of the roster flow on sample data: load, search,
/// filter, and print export, without touching the remote API.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Event desk roster demo");

    let mut store = RosterStore::new();
    store.activate("demo");
    store.install("demo", Ok(sample_candidates()));
    println!("\nRoster ({} candidates)", store.candidates().len());
    for line in table::text_lines(&store.visible()) {
        println!("- {line}");
    }

    store.filter_mut().search = "asha".to_string();
    println!("\nSearch \"asha\"");
    for line in table::text_lines(&store.visible()) {
        println!("- {line}");
    }

    store.reset_filter();
    store.filter_mut().role = Some("volun".to_string());
    store.filter_mut().gender = Some(Gender::Female);
    println!("\nFemale volunteers");
    for line in table::text_lines(&store.visible()) {
        println!("- {line}");
    }

    let region = table::render_html(&store.visible());
    let document = printable_document(&region);
    if args.show_document {
        println!("\n{document}");
    } else {
        println!(
            "\nPrintable document ready ({} bytes); rerun with --show-document to see it",
            document.len()
        );
    }

    Ok(())
}

fn sample_candidates() -> Vec<Candidate> {
    let rows = [
        ("1", "Asha Rao", "9876500000", "Volunteer", "Female", "Lucknow", "MG Road"),
        ("2", "Vikram Singh", "9123400000", "Speaker", "Male", "Kanpur", "Mall Road"),
        ("3", "Meera Nair", "9988700000", "Volunteer Lead", "Female", "Kochi", "Park Street"),
        ("4", "Rahul Verma", "9001200000", "Usher", "Male", "Lucknow", "Station Road"),
    ];

    rows.into_iter()
        .map(|(id, name, phone, role, gender, city, address)| Candidate {
            id: CandidateId(id.to_string()),
            full_name: name.to_string(),
            phone_number: phone.to_string(),
            role: role.to_string(),
            gender: gender.to_string(),
            city: city.to_string(),
            address: address.to_string(),
        })
        .collect()
}
