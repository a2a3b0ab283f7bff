use career_compass::config::{CliConfig, Command};
use career_compass::core::progress::{self, PHASES};
use career_compass::core::{
    filter_careers, filter_jobs, sort_careers, CareerFilter, JobFilter, SelectionSet, SortKey,
    SortOrder,
};
use career_compass::domain::model::{
    AssessmentData, CareerRecord, JobRecord, LearningResource, SavedProgress,
};
use career_compass::domain::ports::{state_keys, Backend, ConfigProvider, RecordStore, StateStore};
use career_compass::services::remote::WireFormat;
use career_compass::utils::{logger, validation::Validate};
use career_compass::{FileStateStore, LocalStore, RemoteConfig, RemoteStore, Result};
use chrono::Utc;
use clap::Parser;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting career-compass CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("{}", e);
        eprintln!("The data source may be unavailable; try again or switch --backend.");
        std::process::exit(2);
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<()> {
    let state = FileStateStore::new(config.state_dir());

    match config.command.clone() {
        Command::Careers {
            min_score,
            salary,
            growth,
            experience,
            sort,
            asc,
            compare,
            choose,
        } => {
            let filter = CareerFilter {
                min_score,
                salary_range: salary.unwrap_or_default(),
                growth_rate: growth.unwrap_or_default(),
                experience_level: experience.unwrap_or_default(),
            };
            let order = if asc { SortOrder::Asc } else { SortOrder::Desc };
            run_careers(config, &state, filter, sort, order, compare, choose).await
        }
        Command::Jobs {
            search,
            location,
            salary,
        } => {
            let filter = JobFilter {
                search: search.unwrap_or_default(),
                location: location.unwrap_or_default(),
                salary_range: salary.unwrap_or_default(),
            };
            run_jobs(config, filter).await
        }
        Command::Plan { toggle, reset } => run_plan(config, &state, toggle, reset).await,
        Command::Progress => run_progress(config, &state),
    }
}

fn remote_store<T: WireFormat>(config: &CliConfig) -> Result<RemoteStore<T>> {
    Ok(match &config.config {
        Some(path) => {
            let remote = RemoteConfig::from_file(path)?;
            remote.validate()?;
            RemoteStore::new(remote.remote.endpoint.clone()).with_headers(remote.header_pairs())
        }
        None => RemoteStore::new(config.api_endpoint()),
    })
}

fn career_store(config: &CliConfig) -> Result<Box<dyn RecordStore<CareerRecord>>> {
    Ok(match config.backend() {
        Backend::Local => Box::new(LocalStore::careers(config.simulate_latency())?),
        Backend::Remote => Box::new(remote_store::<CareerRecord>(config)?),
    })
}

fn job_store(config: &CliConfig) -> Result<Box<dyn RecordStore<JobRecord>>> {
    Ok(match config.backend() {
        Backend::Local => Box::new(LocalStore::jobs(config.simulate_latency())?),
        Backend::Remote => Box::new(remote_store::<JobRecord>(config)?),
    })
}

fn learning_store(config: &CliConfig) -> Result<Box<dyn RecordStore<LearningResource>>> {
    Ok(match config.backend() {
        Backend::Local => Box::new(LocalStore::learning(config.simulate_latency())?),
        Backend::Remote => Box::new(remote_store::<LearningResource>(config)?),
    })
}

async fn run_careers(
    config: &CliConfig,
    state: &FileStateStore,
    filter: CareerFilter,
    sort: SortKey,
    order: SortOrder,
    compare: Vec<u32>,
    choose: Option<u32>,
) -> Result<()> {
    let store = career_store(config)?;

    if let Some(id) = choose {
        let career = store.get_by_id(id).await?;
        state.set(state_keys::SELECTED_CAREER, &career)?;
        tracing::info!("Stored selected career path {}", career.id);
        println!("Selected career path: {}", career.title);
        return Ok(());
    }

    tracing::info!("Loading career paths...");
    let careers = store.get_all().await?;
    tracing::info!("Loaded {} career paths", careers.len());

    let filtered = filter_careers(&careers, &filter);
    let sorted = sort_careers(&filtered, sort, order);

    if sorted.is_empty() {
        println!("No careers match your filters. Try loosening the criteria.");
        return Ok(());
    }

    let selection = SelectionSet::from_ids(compare);

    println!("Showing {} of {} career paths", sorted.len(), careers.len());
    for career in &sorted {
        let marker = if selection.is_selected(career.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{} [{:>2}] {:<24} match {:>3}%  {:<22} growth: {}",
            marker, career.id, career.title, career.match_score, career.avg_salary,
            career.growth_rate
        );
    }

    if !selection.is_empty() {
        print_comparison(&sorted, &selection);
    }

    Ok(())
}

fn print_comparison(careers: &[CareerRecord], selection: &SelectionSet) {
    println!("\nSide-by-side comparison ({} selected):", selection.len());
    for &id in selection.ids() {
        let Some(career) = careers.iter().find(|c| c.id == id) else {
            println!("\n  [{}] not in the current result set", id);
            continue;
        };
        println!("\n  {} ({} | {})", career.title, career.experience_level, career.industry);
        println!("    Skills: {}", career.required_skills.join(", "));
        for pro in &career.pros {
            println!("    + {}", pro);
        }
        for con in &career.cons {
            println!("    - {}", con);
        }
        if let Some(projection) = &career.growth_projection {
            println!(
                "    Outlook: {} growth, {} demand ({})",
                projection.rate, projection.demand, projection.outlook
            );
        }
    }
}

async fn run_jobs(config: &CliConfig, filter: JobFilter) -> Result<()> {
    let store = job_store(config)?;

    tracing::info!("Loading job listings...");
    let jobs = store.get_all().await?;
    tracing::info!("Loaded {} job listings", jobs.len());

    let filtered = filter_jobs(&jobs, &filter);

    if filtered.is_empty() {
        println!("No jobs match your search.");
        return Ok(());
    }

    println!("{} of {} jobs found", filtered.len(), jobs.len());
    for job in &filtered {
        println!(
            "[{:>2}] {:<28} {:<20} {:<16} {}",
            job.id, job.title, job.company, job.location, job.salary
        );
        if let Some(url) = &job.url {
            println!("     {}", url);
        }
    }

    Ok(())
}

async fn run_plan(
    config: &CliConfig,
    state: &FileStateStore,
    toggle: Option<u32>,
    reset: bool,
) -> Result<()> {
    if reset {
        state.clear(state_keys::LEARNING_PROGRESS)?;
        println!("Learning progress cleared.");
        return Ok(());
    }

    let store = learning_store(config)?;

    tracing::info!("Loading learning plan...");
    let resources = store.get_all().await?;

    let mut saved: SavedProgress = state
        .get(state_keys::LEARNING_PROGRESS)?
        .unwrap_or_default();

    if let Some(id) = toggle {
        // Validate the id against the plan before persisting anything.
        store.get_by_id(id).await?;
        let mut completed = SelectionSet::from_ids(saved.completed.clone());
        completed.toggle(id);
        saved.completed = completed.ids().to_vec();
        if saved.started_at.is_none() {
            saved.started_at = Some(Utc::now());
        }
        state.set(state_keys::LEARNING_PROGRESS, &saved)?;
        tracing::info!("Toggled completion for resource {}", id);
    }

    let selected: Option<CareerRecord> = state.get(state_keys::SELECTED_CAREER)?;
    match &selected {
        Some(career) => println!("Learning plan for: {}", career.title),
        None => println!("Learning plan (no career path selected yet)"),
    }

    for (index, phase) in PHASES.iter().enumerate() {
        let in_phase = progress::phase_resources(&resources, index);
        let done = progress::completed_in_phase(&resources, index, &saved);
        println!(
            "\n{} ({}) - {}/{} complete",
            phase.title,
            phase.duration,
            done,
            in_phase.len()
        );
        for resource in in_phase {
            let mark = if saved.completed.contains(&resource.id) {
                "x"
            } else {
                " "
            };
            println!(
                "  [{}] {:>2}. {} ({}, {})",
                mark, resource.id, resource.title, resource.kind, resource.duration
            );
        }
    }

    println!(
        "\nOverall: {}% complete",
        progress::overall_percent(&resources, &saved)
    );

    Ok(())
}

fn run_progress(config: &CliConfig, state: &FileStateStore) -> Result<()> {
    let assessment: Option<AssessmentData> = state.get(state_keys::ASSESSMENT)?;
    let selected: Option<CareerRecord> = state.get(state_keys::SELECTED_CAREER)?;
    let saved: Option<SavedProgress> = state.get(state_keys::LEARNING_PROGRESS)?;

    if assessment.is_none() && selected.is_none() && saved.is_none() {
        println!(
            "No progress data in {} yet. Choose a career and start the learning plan.",
            config.state_dir()
        );
        return Ok(());
    }

    match &assessment {
        Some(data) => println!(
            "Assessment: complete ({} interests, {} skills)",
            data.interests.len(),
            data.current_skills.len()
        ),
        None => println!("Assessment: not taken"),
    }

    match &selected {
        Some(career) => println!("Career path: {} (match {}%)", career.title, career.match_score),
        None => println!("Career path: not selected"),
    }

    let saved = saved.unwrap_or_default();
    println!("Resources completed: {}", saved.completed.len());
    println!(
        "Days studying: {}",
        progress::days_studying(&saved, Utc::now())
    );

    Ok(())
}
