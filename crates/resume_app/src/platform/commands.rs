//! Parses terminal input lines into user actions.

use std::path::PathBuf;

use resume_core::{AccordionId, Msg, SelectionSource};

use super::ui::constants::SCROLL_STEP;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Goes straight to the update function.
    Dispatch(Msg),
    /// Press the score of the n-th role card (1-based).
    Role(usize),
    /// Press the n-th missing roadmap card (1-based).
    Learn(usize),
    /// Press outside whichever dialog is open.
    Backdrop,
    /// Press the n-th side-nav entry (1-based).
    NavIndex(usize),
    ScrollBy(f64),
    ScrollTop,
    Export,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "select" | "open" => Command::Dispatch(file_chosen(rest, SelectionSource::Input)?),
        "drop" => Command::Dispatch(file_chosen(rest, SelectionSource::Drop)?),
        "browse" => Command::Dispatch(Msg::BrowseClicked),
        "remove" => Command::Dispatch(Msg::RemoveFileClicked),
        "analyze" => Command::Dispatch(Msg::AnalyzeClicked),
        "role" => Command::Role(index(rest)?),
        "learn" => Command::Learn(index(rest)?),
        "free" => Command::Dispatch(Msg::FreeResourcesClicked),
        "paid" => Command::Dispatch(Msg::PaidResourcesClicked),
        "close" => Command::Dispatch(Msg::CloseModalClicked),
        "backdrop" => Command::Backdrop,
        "nav" => nav(rest)?,
        "down" => Command::ScrollBy(SCROLL_STEP),
        "up" => Command::ScrollBy(-SCROLL_STEP),
        "top" => Command::ScrollTop,
        "toggle" => Command::Dispatch(Msg::AccordionToggled(accordion(rest)?)),
        "export" => Command::Export,
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(command)
}

fn file_chosen(rest: &str, source: SelectionSource) -> Result<Msg, String> {
    let path = rest.trim_matches(|c| c == '"' || c == '\'');
    if path.is_empty() {
        return Err("expected a file path".to_string());
    }
    Ok(Msg::FileChosen {
        path: PathBuf::from(path),
        source,
    })
}

fn index(rest: &str) -> Result<usize, String> {
    match rest.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a number starting at 1, got `{rest}`")),
    }
}

fn nav(rest: &str) -> Result<Command, String> {
    if rest.starts_with('#') {
        return Ok(Command::Dispatch(Msg::NavLinkClicked {
            href: rest.to_string(),
        }));
    }
    index(rest).map(Command::NavIndex)
}

fn accordion(rest: &str) -> Result<AccordionId, String> {
    match rest.to_ascii_lowercase().as_str() {
        "roles" | "table" => Ok(AccordionId::RoleTable),
        "text" => Ok(AccordionId::ExtractedText),
        other => Err(format!("expected `roles` or `text`, got `{other}`")),
    }
}
