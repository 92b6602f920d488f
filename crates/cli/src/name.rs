use crate::NameArgs;
use crate::report;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;
use varscope_core::config::NamingConfig;
use varscope_runtime::NamingRuntime;

pub fn run(args: NameArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => NamingConfig::load(path)?,
        None => NamingConfig::default(),
    }
    .with_threads(args.threads);
    if args.ignore_declared_names {
        config = config.with_declared_names(false);
    }
    let report_limit = config.report_limit;

    let model = crate::read_model(&args.model)?;
    let runtime = NamingRuntime::new(config)?;
    let outcome = runtime.name_model(model)?;

    let json = serde_json::to_string_pretty(&outcome.model)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote named model to {}", path.display());
            report::print_summary(&outcome, report_limit, &mut std::io::stdout())?;
        }
        None => {
            // Keep stdout clean for the model itself
            writeln!(std::io::stdout(), "{}", json)?;
            report::print_summary(&outcome, report_limit, &mut std::io::stderr())?;
        }
    }

    if outcome.report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
