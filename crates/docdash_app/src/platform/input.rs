//! Line commands typed at the dashboard prompt.

use docdash_core::{FileHandle, Msg, NotificationId, SearchFilter, Section};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Messages to feed through `update`, in order.
    Dispatch(Vec<Msg>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?}; type `help` for the list")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown section {0:?}")]
    UnknownSection(String),
    #[error("unknown filter {0:?}; expected all, pdf, docx or txt")]
    UnknownFilter(String),
    #[error("invalid notification id {0:?}")]
    InvalidId(String),
    #[error("cannot read file list: {0}")]
    BadPathList(String),
}

pub const HELP_TEXT: &str = "\
show <dashboard|upload|search|documents|analytics>  switch section
ask <question>        submit a question
upload <path>...      upload PDF, DOCX or TXT files (quote paths with spaces)
filter <all|pdf|docx|txt>
theme                 toggle dark/light theme
clear                 clear all documents (asks first)
yes / no              answer a pending confirmation
dismiss <id>          close a notification
help                  show this list
quit                  leave";

pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let msgs = match verb.to_ascii_lowercase().as_str() {
        "" => Vec::new(),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "show" | "go" => {
            let key = required(rest, "show")?;
            let section =
                Section::from_key(key).ok_or_else(|| InputError::UnknownSection(key.into()))?;
            vec![Msg::SectionSelected(section)]
        }
        "theme" => vec![Msg::ThemeToggled],
        "filter" => {
            let key = required(rest, "filter")?;
            let filter =
                SearchFilter::from_key(key).ok_or_else(|| InputError::UnknownFilter(key.into()))?;
            vec![Msg::FilterSelected(filter)]
        }
        "upload" => {
            let paths = shell_words::split(required(rest, "upload")?)
                .map_err(|err| InputError::BadPathList(err.to_string()))?;
            let files = paths.into_iter().map(FileHandle::from_path).collect();
            vec![Msg::FilesSelected(files)]
        }
        // Blank questions are passed through so the dashboard can reject them.
        "ask" => vec![Msg::QueryInputChanged(rest.to_string()), Msg::QuerySubmitted],
        "clear" => vec![Msg::ClearAllRequested],
        "yes" | "y" => vec![Msg::ClearAllConfirmed],
        "no" | "n" => vec![Msg::ClearAllCancelled],
        "dismiss" => {
            let raw = required(rest, "dismiss")?;
            let id: NotificationId = raw
                .parse()
                .map_err(|_| InputError::InvalidId(raw.to_string()))?;
            vec![Msg::NotificationDismissed(id)]
        }
        _ => return Err(InputError::UnknownCommand(verb.to_string())),
    };
    Ok(Command::Dispatch(msgs))
}

fn required<'a>(rest: &'a str, verb: &'static str) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument(verb))
    } else {
        Ok(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(line: &str) -> Vec<Msg> {
        match parse_line(line) {
            Ok(Command::Dispatch(msgs)) => msgs,
            other => panic!("expected messages for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn navigation_and_toggles() {
        assert_eq!(msgs("show search"), vec![Msg::SectionSelected(Section::Search)]);
        assert_eq!(msgs("  SHOW Analytics "), vec![Msg::SectionSelected(Section::Analytics)]);
        assert_eq!(msgs("theme"), vec![Msg::ThemeToggled]);
        assert_eq!(msgs("filter docx"), vec![Msg::FilterSelected(SearchFilter::Docx)]);
        assert!(msgs("").is_empty());
    }

    #[test]
    fn ask_sets_input_then_submits() {
        assert_eq!(
            msgs("ask what is  X?"),
            vec![
                Msg::QueryInputChanged("what is  X?".to_string()),
                Msg::QuerySubmitted
            ]
        );
        assert_eq!(
            msgs("ask"),
            vec![Msg::QueryInputChanged(String::new()), Msg::QuerySubmitted]
        );
    }

    #[test]
    fn upload_collects_every_path() {
        let parsed = msgs("upload a.pdf docs/b.txt");
        let [Msg::FilesSelected(files)] = parsed.as_slice() else {
            panic!("expected one FilesSelected");
        };
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.txt"]);
    }

    #[test]
    fn upload_accepts_quoted_paths_with_spaces() {
        let parsed = msgs(r#"upload "My Reports/q3 summary.pdf" 'notes v2.txt' plain.docx"#);
        let [Msg::FilesSelected(files)] = parsed.as_slice() else {
            panic!("expected one FilesSelected");
        };
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["q3 summary.pdf", "notes v2.txt", "plain.docx"]);
        assert_eq!(
            files[0].path,
            std::path::PathBuf::from("My Reports/q3 summary.pdf")
        );

        assert!(matches!(
            parse_line(r#"upload "unterminated.pdf"#),
            Err(InputError::BadPathList(_))
        ));
    }

    #[test]
    fn confirmation_and_dismiss() {
        assert_eq!(msgs("clear"), vec![Msg::ClearAllRequested]);
        assert_eq!(msgs("yes"), vec![Msg::ClearAllConfirmed]);
        assert_eq!(msgs("n"), vec![Msg::ClearAllCancelled]);
        assert_eq!(msgs("dismiss 3"), vec![Msg::NotificationDismissed(3)]);
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_line("help"), Ok(Command::Help));
        assert_eq!(parse_line("exit"), Ok(Command::Quit));
    }

    #[test]
    fn errors_name_the_problem() {
        assert_eq!(
            parse_line("frobnicate"),
            Err(InputError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(parse_line("show"), Err(InputError::MissingArgument("show")));
        assert_eq!(
            parse_line("show settings"),
            Err(InputError::UnknownSection("settings".to_string()))
        );
        assert_eq!(
            parse_line("filter md"),
            Err(InputError::UnknownFilter("md".to_string()))
        );
        assert_eq!(
            parse_line("dismiss x"),
            Err(InputError::InvalidId("x".to_string()))
        );
    }
}
