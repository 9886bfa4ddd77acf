//! CLI command implementations
//!
//! Every command loads the configuration, opens the file store under
//! `data_dir`, runs one service call and prints one JSON object.

use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::query::{SortOption, TrendPeriod};
use crate::review::Review;
use crate::service::{ReviewQuery, ReviewService};
use crate::store::{seed_reviews, FileReviewStore};

use super::args::{Command, FilterArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_reviews, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command. A failed
/// command still prints a JSON error object before the error is returned.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    match run_command(cli.command) {
        Ok(()) => Ok(()),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, empty } => init(&config, empty),
        Command::List {
            config,
            filter,
            sort,
            page,
        } => list(&config, &filter, sort, page),
        Command::Stats { config, filter } => stats(&config, &filter),
        Command::Show { config, id } => show(&config, &id),
        Command::Respond { config, id, text } => respond(&config, &id, &text),
        Command::Trend { config, period } => trend(&config, period),
        Command::Sync { config, file } => sync(&config, &file),
    }
}

/// Initialize a data directory
///
/// Writes the demo reviews, or an empty collection with `empty`.
/// Refuses a directory that already holds reviews.
pub fn init(config_path: &Path, empty: bool) -> CliResult<()> {
    let config = load_config(config_path)?;

    let mut store = FileReviewStore::open(config.data_path())?;
    if store.is_initialized() {
        return Err(CliError::already_initialized());
    }

    let reviews: Vec<Review> = if empty { Vec::new() } else { seed_reviews() };
    store.initialize(&reviews)?;

    let count = reviews.len().to_string();
    log_event_with_fields(
        Event::StoreInitialized,
        &[("data_dir", config.data_dir.as_str()), ("count", count.as_str())],
    );

    write_response(json!({
        "initialized": true,
        "review_count": reviews.len()
    }))
}

/// Print one page of filtered, sorted reviews
pub fn list(config_path: &Path, filter: &FilterArgs, sort: SortOption, page: usize) -> CliResult<()> {
    let service = open_service(config_path)?;
    let query = ReviewQuery::new(filter.to_filter_spec()?, sort, page);

    let page = service.list(&query)?;
    write_response(serde_json::to_value(&page)?)
}

/// Print statistics over the filtered reviews
pub fn stats(config_path: &Path, filter: &FilterArgs) -> CliResult<()> {
    let service = open_service(config_path)?;

    let stats = service.stats(&filter.to_filter_spec()?)?;
    write_response(serde_json::to_value(&stats)?)
}

/// Print one review
pub fn show(config_path: &Path, id: &str) -> CliResult<()> {
    let service = open_service(config_path)?;

    let review = service.get(id)?;
    write_response(serde_json::to_value(&review)?)
}

/// Attach a response and print the updated review
pub fn respond(config_path: &Path, id: &str, text: &str) -> CliResult<()> {
    let mut service = open_service(config_path)?;

    let review = service.respond(id, text)?;
    write_response(serde_json::to_value(&review)?)
}

/// Print the rating trend for a period
pub fn trend(config_path: &Path, period: TrendPeriod) -> CliResult<()> {
    let service = open_service(config_path)?;

    let report = service.trend(period, Utc::now())?;
    write_response(serde_json::to_value(&report)?)
}

/// Merge reviews from a JSON file
pub fn sync(config_path: &Path, file: &Path) -> CliResult<()> {
    let mut service = open_service(config_path)?;

    let incoming = read_reviews(file)?;
    let summary = service.sync(incoming)?;
    write_response(serde_json::to_value(summary)?)
}

/// Loads the configuration and applies its log level
fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity());

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_dir", config.data_dir.as_str()),
            ("log_level", config.log_level.as_str()),
        ],
    );

    Ok(config)
}

/// Opens the service over an initialized data directory
fn open_service(config_path: &Path) -> CliResult<ReviewService<FileReviewStore>> {
    let config = load_config(config_path)?;

    let store = FileReviewStore::open(config.data_path())?;
    if !store.is_initialized() {
        return Err(CliError::not_initialized());
    }

    Ok(ReviewService::with_page_size(store, config.page_size))
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use crate::store::ReviewStore;
    use std::fs;
    use tempfile::TempDir;

    fn create_config(temp_dir: &TempDir) -> std::path::PathBuf {
        let config_path = temp_dir.path().join("reviewhub.json");
        let data_dir = temp_dir.path().join("data");

        let config = json!({
            "data_dir": data_dir.to_string_lossy()
        });

        fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    fn stored(temp_dir: &TempDir) -> Vec<Review> {
        FileReviewStore::open(temp_dir.path().join("data"))
            .unwrap()
            .load()
            .unwrap()
    }

    #[test]
    fn test_init_writes_seed() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        init(&config_path, false).unwrap();

        let data_dir = temp_dir.path().join("data");
        assert!(data_dir.join("reviews.json").exists());
        assert!(data_dir.join("manifest.json").exists());
        assert_eq!(stored(&temp_dir).len(), 12);
    }

    #[test]
    fn test_init_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        init(&config_path, true).unwrap();
        assert!(stored(&temp_dir).is_empty());
    }

    #[test]
    fn test_init_refuses_reinit() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        init(&config_path, true).unwrap();

        let result = init(&config_path, false);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().code(),
            &CliErrorCode::AlreadyInitialized
        );
    }

    #[test]
    fn test_commands_require_init() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let result = list(&config_path, &FilterArgs::default(), SortOption::DateDesc, 1);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::NotInitialized);

        let result = stats(&config_path, &FilterArgs::default());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::NotInitialized);
    }

    #[test]
    fn test_respond_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);
        init(&config_path, false).unwrap();

        respond(&config_path, "rev-002", "Thank you!").unwrap();

        let reviews = stored(&temp_dir);
        let review = reviews.iter().find(|r| r.id == "rev-002").unwrap();
        assert_eq!(review.response_text(), Some("Thank you!"));
    }

    #[test]
    fn test_respond_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);
        init(&config_path, false).unwrap();

        let err = respond(&config_path, "missing", "Hi").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NotFound);

        let err = respond(&config_path, "rev-001", "Again").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ResponseRejected);

        let err = show(&config_path, "missing").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NotFound);
    }

    #[test]
    fn test_list_rejects_bad_date() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);
        init(&config_path, false).unwrap();

        let filter = FilterArgs {
            from: Some("31/12/2024".into()),
            ..Default::default()
        };
        let err = list(&config_path, &filter, SortOption::DateDesc, 1).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidArgument);
    }

    #[test]
    fn test_sync_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);
        init(&config_path, true).unwrap();

        let file = temp_dir.path().join("incoming.json");
        fs::write(
            &file,
            json!([
                {"id": "n-1", "customer_name": "Ann", "platform": "google", "rating": 5,
                 "date": "2024-06-02T10:00:00Z", "content": "Superb"},
                {"id": "n-2", "customer_name": "Bo", "platform": "other", "rating": 3,
                 "date": "2024-06-03T10:00:00Z", "content": "Fine"}
            ])
            .to_string(),
        )
        .unwrap();

        sync(&config_path, &file).unwrap();
        sync(&config_path, &file).unwrap();

        assert_eq!(stored(&temp_dir).len(), 2);
    }

    #[test]
    fn test_corrupted_store_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);
        init(&config_path, false).unwrap();

        let data_file = temp_dir.path().join("data").join("reviews.json");
        let mut content = fs::read_to_string(&data_file).unwrap();
        content = content.replacen("Sarah", "Sahra", 1);
        fs::write(&data_file, content).unwrap();

        let err = stats(&config_path, &FilterArgs::default()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::StoreCorrupted);
    }
}
