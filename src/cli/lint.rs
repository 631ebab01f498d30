use super::Cli;
use clap::CommandFactory;
use colored::control;
use pslint::{ColorMode, LintConfig, Linter, Problem, Reporter};
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

pub fn run_lint(cli: Cli) -> ExitCode {
    // 1. Load configuration
    let mut lint_config = match load_config(&cli) {
        Ok(config) => config,
        Err(code) => return code,
    };

    // 2. Command line flags win over the configuration file
    if cli.fail_fast.is_some() {
        lint_config.fail_fast = cli.fail_fast;
    }
    if cli.fail_first.is_some() {
        lint_config.fail_first = cli.fail_first;
    }

    if cli.color {
        control::set_override(true);
    } else if cli.no_color {
        control::set_override(false);
    } else {
        match lint_config.color_mode() {
            ColorMode::Always => control::set_override(true),
            ColorMode::Never => control::set_override(false),
            ColorMode::Auto => {}
        }
    }

    let linter = match Linter::with_config(&lint_config) {
        Ok(linter) => linter,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    info!(
        fail_fast = linter.fail_fast(),
        fail_first = linter.fail_first(),
        "Checks: {}",
        linter.check_names().join(", ")
    );

    if cli.list_checks {
        print!("{}", format_checks(&linter));
        return ExitCode::SUCCESS;
    }

    // 3. Lint the file or piped stdin
    let result = match &cli.file {
        Some(path) => linter.lint_file(path),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                let _ = Cli::command().print_help();
                eprintln!();
                return ExitCode::from(2);
            }

            let mut content = String::new();
            if let Err(e) = stdin.lock().read_to_string(&mut content) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::from(2);
            }
            linter.lint_string(&content)
        }
    };

    let problems = match result {
        Ok(problems) => problems,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // 4. Report
    Reporter::new(cli.format.into()).report(&problems);
    exit_code(&problems)
}

/// Load the configuration given with --config, or look for .pslint.toml
fn load_config(cli: &Cli) -> Result<LintConfig, ExitCode> {
    if let Some(config_path) = &cli.config {
        return match LintConfig::from_file(config_path) {
            Ok(config) => {
                info!("Using config: {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                Err(ExitCode::from(2))
            }
        };
    }

    let search_dir = cli
        .file
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    match LintConfig::find_and_load(search_dir) {
        Ok(Some(config)) => {
            info!("Found .pslint.toml");
            Ok(config)
        }
        Ok(None) => Ok(LintConfig::default()),
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(2))
        }
    }
}

/// One line per check: name padded to the widest name, then its description
fn format_checks(linter: &Linter) -> String {
    let width = linter
        .checks()
        .iter()
        .map(|check| check.name().len())
        .max()
        .unwrap_or(0);

    linter
        .checks()
        .iter()
        .map(|check| format!("{:<width$}  {}\n", check.name(), check.description()))
        .collect()
}

fn exit_code(problems: &[Problem]) -> ExitCode {
    if problems.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_checks() {
        let expected = "\
spaces             Check for leading and trailing whitespace
rule-lowercase     Check that rules contain no uppercase letters
rule-empty-labels  Check that rules contain no consecutive dots
";
        assert_eq!(format_checks(&Linter::default()), expected);
    }
}
