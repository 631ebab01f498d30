use colored::Colorize;
use pslint_common::{Level, Problem};

pub(crate) fn report(problems: &[Problem]) {
    print!("{}", format(problems, true));
}

/// Render problems as an aligned table:
///
/// ```text
/// Found 2 problems:
///  4: com.aw  | leading space        (warning)
/// 10: *.CK    | non-lowercase suffix (error)
/// ```
pub(crate) fn format(problems: &[Problem], colorize: bool) -> String {
    if problems.is_empty() {
        return "Found 0 problems!\n".to_string();
    }

    let rows: Vec<(String, &Problem)> = problems.iter().map(|p| (p.line.to_string(), p)).collect();
    let line_width = width(rows.iter().map(|(line, _)| line.as_str()));
    let source_width = width(problems.iter().map(|p| p.line_source.as_str()));
    let message_width = width(problems.iter().map(|p| p.message.as_str()));

    let mut output = format!("Found {} problems:\n", problems.len());
    for (line, problem) in rows {
        let level = if colorize {
            paint(problem.level).to_string()
        } else {
            problem.level.to_string()
        };
        output.push_str(&format!(
            "{:>line_width$}: {:<source_width$} | {:<message_width$} ({})\n",
            line, problem.line_source, problem.message, level
        ));
    }

    output
}

fn width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}

fn paint(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => level.to_string().red().bold(),
        Level::Warning => level.to_string().yellow().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pslint_common::Line;

    #[test]
    fn test_format_empty() {
        assert_eq!(format(&[], false), "Found 0 problems!\n");
    }

    #[test]
    fn test_format_aligned() {
        let problems = vec![
            Problem::new(&Line::new(4, " com.aw"), "spaces", "leading space", Level::Warning),
            Problem::new(
                &Line::new(10, "*.CK"),
                "rule-lowercase",
                "non-lowercase suffix",
                Level::Error,
            ),
        ];

        let expected = "\
Found 2 problems:
 4:  com.aw | leading space        (warning)
10: *.CK    | non-lowercase suffix (error)
";
        assert_eq!(format(&problems, false), expected);
    }
}
