use clap::Parser;
use quad_solver::adapters::input::{parse_equation_text, parse_equations};
use quad_solver::app::batch::solve_batch;
use quad_solver::config::toml_config::FileConfig;
use quad_solver::core::ConfigProvider;
use quad_solver::domain::ports::Storage;
use quad_solver::utils::{logger, validation::Validate};
use quad_solver::{
    CliConfig, Equation, LocalStorage, QuadError, RootFormatter, Settings, Solver, TestHarness,
};
use std::io::{self, Write};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quad-solver");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            let exit_code = match e.downcast_ref::<QuadError>() {
                Some(quad_error) => {
                    tracing::error!("💡 Suggestion: {}", quad_error.recovery_suggestion());
                    quad_error.exit_code()
                }
                None => 1,
            };
            tracing::error!("❌ quad-solver failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<i32> {
    // 驗證配置
    config.validate()?;
    let settings = resolve_settings(config)?;
    tracing::debug!("Settings: {:?}", settings);

    let solver = Solver::new(settings.tolerance());
    let formatter = RootFormatter::new(settings.precision());
    let storage = LocalStorage::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // --json keeps stdout to the report alone
    if !config.json {
        writeln!(out, "# Program for solving quadratic equations a * x^2 + b * x + c = 0")?;
    }

    if let Some(path) = &config.test {
        let harness = TestHarness::new(storage, solver, formatter);
        let report = if config.json {
            harness.run(path, &mut io::sink())?
        } else {
            writeln!(out, "\n# Testing program...")?;
            harness.run(path, &mut out)?
        };

        if config.json {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        return Ok(if report.all_passed() { 0 } else { 1 });
    }

    let mut equations = collect_equations(config, &storage)?;
    let summary = solve_batch(&mut equations, &solver, &formatter, &mut out)?;
    writeln!(out)?;

    tracing::info!(
        "✅ Solved {} equations, {} could not be solved",
        summary.solved,
        summary.unsolvable
    );
    Ok(0)
}

fn resolve_settings(config: &CliConfig) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    if let Some(path) = &config.config {
        tracing::info!("📁 Loading configuration from: {}", path);
        settings = settings.merge_file(&FileConfig::from_file(path)?)?;
    }
    let settings = settings.with_overrides(config.tolerance, config.precision)?;
    settings.validate()?;
    Ok(settings)
}

/// Command-line triples first, then the equations file. Standard input is read
/// only when neither source is given.
fn collect_equations(config: &CliConfig, storage: &LocalStorage) -> anyhow::Result<Vec<Equation>> {
    let mut equations = parse_equations(config.coefficients.iter().map(String::as_str));

    if let Some(path) = &config.file {
        match storage.read_to_string(path) {
            Ok(text) => equations.extend(parse_equation_text(&text)),
            Err(e) => tracing::warn!("Cannot read equations from {}: {}", path, e),
        }
    }

    if config.coefficients.is_empty() && config.file.is_none() {
        tracing::info!("Reading equations from standard input");
        equations = parse_equation_text(&io::read_to_string(io::stdin())?);
    }

    tracing::info!("{} equations read", equations.len());
    Ok(equations)
}
