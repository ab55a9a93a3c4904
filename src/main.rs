use clap::Parser;
use std::path::Path;
use ticket_classifier::app::report::{self, OutputFormat};
use ticket_classifier::app::ticket_reader;
use ticket_classifier::config::TomlConfig;
use ticket_classifier::utils::{logger, validation::Validate};
use ticket_classifier::{ClassificationService, CliConfig, ClassifierError, Ticket};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ticket-classifier");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("❌ Classification failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e {
            ClassifierError::ConfigValidationError { .. }
            | ClassifierError::InvalidConfigValueError { .. }
            | ClassifierError::TomlError(_) => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: &CliConfig) -> ticket_classifier::Result<()> {
    config.validate()?;

    let settings = match &config.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    settings.validate()?;

    let format = match config.format {
        Some(format) => format,
        None => settings.output.format.parse::<OutputFormat>()?,
    };
    let apply = settings.service.auto_apply && !config.no_apply;

    let mut tickets = match (&config.input, &config.subject) {
        (Some(input), _) => ticket_reader::load_tickets(input).await?,
        (None, Some(subject)) => vec![Ticket::new("adhoc", subject.clone(), config.description.clone())],
        (None, None) => Vec::new(),
    };

    let mut service = ClassificationService::from_config(&settings.service);
    let results = service.classify_all(&mut tickets, apply);

    let rendered = report::render(&results, format, settings.output.pretty)?;
    report::write_report(config.output.as_deref().map(Path::new), &rendered).await?;

    tracing::info!("✅ Classified {} ticket(s)", results.len());
    Ok(())
}
