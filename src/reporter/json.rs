use pslint_common::{Level, Problem};

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    problems: &'a [Problem],
    summary: Summary,
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
}

pub(crate) fn report(problems: &[Problem]) {
    println!("{}", format(problems));
}

pub(crate) fn format(problems: &[Problem]) -> String {
    let report = JsonReport {
        problems,
        summary: Summary {
            errors: problems.iter().filter(|p| p.level == Level::Error).count(),
            warnings: problems.iter().filter(|p| p.level == Level::Warning).count(),
        },
    };

    serde_json::to_string_pretty(&report).unwrap_or_default()
}
