use crate::error::{AppError, AppResult};
use crate::page::{IconId, Page, PageKind};

use super::spec::find_command_spec;
use super::types::Command;

pub fn parse_command_text(input: &str) -> AppResult<Command> {
    let line = input.trim_start();
    if line.trim_end().is_empty() {
        return Err(AppError::invalid_argument("command must not be empty"));
    }

    let (id, rest) = match line.find(char::is_whitespace) {
        Some(index) => (&line[..index], &line[index..]),
        None => (line.trim_end(), ""),
    };
    let args_text = rest.trim();

    if find_command_spec(id).is_none() {
        return Err(AppError::invalid_argument(format!("unknown command id: {id}")));
    }

    match id {
        "open" => parse_no_args(id, args_text, Command::Open),
        "close" => parse_no_args(id, args_text, Command::Close),
        "toggle" => parse_no_args(id, args_text, Command::Toggle),
        "back" => parse_no_args(id, args_text, Command::Back),
        "chip" => parse_chip(args_text),
        "search" => Ok(Command::Search {
            text: search_text(rest).to_string(),
        }),
        "push" => parse_page(id, args_text).map(|page| Command::Push { page }),
        "reset" => parse_page(id, args_text).map(|page| Command::Reset { page }),
        "push-json" => parse_page_json(args_text).map(|page| Command::Push { page }),
        "show" => parse_no_args(id, args_text, Command::Show),
        "quit" => parse_no_args(id, args_text, Command::Quit),
        _ => Err(AppError::unsupported(
            "command parser is out of sync with registry",
        )),
    }
}

fn parse_no_args(id: &str, args_text: &str, cmd: Command) -> AppResult<Command> {
    if args_text.is_empty() {
        return Ok(cmd);
    }
    Err(AppError::invalid_argument(format!(
        "{id} does not accept arguments"
    )))
}

fn parse_chip(args_text: &str) -> AppResult<Command> {
    let mut parts = args_text.split_whitespace();
    let Some(index_text) = parts.next() else {
        return Err(AppError::invalid_argument("chip requires 1 argument: index"));
    };
    if parts.next().is_some() {
        return Err(AppError::invalid_argument("chip accepts exactly 1 argument"));
    }

    let index = index_text
        .parse::<usize>()
        .map_err(|_| AppError::invalid_argument("chip index must be a non-negative integer"))?;
    Ok(Command::Chip { index })
}

/// Drops the single separator after the id; everything else is kept verbatim.
fn search_text(rest: &str) -> &str {
    let rest = rest.trim_end_matches(['\r', '\n']);
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) if first.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}

fn parse_page(id: &str, args_text: &str) -> AppResult<Page> {
    let mut parts = args_text.splitn(3, char::is_whitespace);
    let Some(kind_text) = parts.next().filter(|text| !text.is_empty()) else {
        return Err(AppError::invalid_argument(format!(
            "{id} requires 3 arguments: kind icon title"
        )));
    };
    let kind = PageKind::parse(kind_text)
        .ok_or_else(|| AppError::invalid_argument(format!("unknown page kind: {kind_text}")))?;

    let icon = parts.next().filter(|text| !text.is_empty());
    let title = parts.next().map(str::trim).filter(|text| !text.is_empty());
    match (icon, title) {
        (Some(icon), Some(title)) => Ok(Page::new(kind, title, IconId::new(icon))),
        (None, None) if kind.is_root() => Ok(Page::root()),
        _ => Err(AppError::invalid_argument(format!(
            "{id} requires 3 arguments: kind icon title"
        ))),
    }
}

fn parse_page_json(args_text: &str) -> AppResult<Page> {
    if args_text.is_empty() {
        return Err(AppError::invalid_argument(
            "push-json requires 1 argument: page",
        ));
    }
    serde_json::from_str::<Page>(args_text)
        .map_err(|source| AppError::json_with_context(source, "push-json"))
}
