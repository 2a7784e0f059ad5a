//! Line-driven front end for [`ConverterScreen`].
//!
//! Each input line is one UI event: a selection change, a convert press, or
//! a request to redraw.
use super::ui;
use crate::core::currency::CurrencyCode;
use crate::core::screen::ConverterScreen;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "Commands:
  from <CODE>       select the source currency
  to <CODE>         select the target currency
  convert <AMOUNT>  convert an amount with the current selection
  show              print the current screen
  help              print this message
  quit              leave";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Event<'a> {
    SelectFrom(&'a str),
    SelectTo(&'a str),
    Convert(Option<&'a str>),
    Show,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_event(line: &str) -> Option<Event<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, Some(rest.trim())),
        None => (line, None),
    };
    let event = match command.to_lowercase().as_str() {
        "from" => Event::SelectFrom(rest.unwrap_or_default()),
        "to" => Event::SelectTo(rest.unwrap_or_default()),
        "convert" | "c" => Event::Convert(rest),
        "show" => Event::Show,
        "help" | "?" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        _ => Event::Unknown(command),
    };
    Some(event)
}

fn render<W: Write>(screen: &ConverterScreen, out: &mut W) -> Result<()> {
    let output = if screen.output().is_empty() {
        ui::style_text("-", ui::StyleType::Subtle)
    } else {
        ui::style_text(screen.output(), ui::StyleType::Result)
    };
    writeln!(
        out,
        "[{}] {} -> [{}] {}",
        screen.from_symbol(),
        screen.from(),
        screen.to_symbol(),
        screen.to()
    )?;
    writeln!(out, "Result: {output}")?;
    writeln!(out, "{}", screen.rate_text())?;
    Ok(())
}

fn report_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", ui::style_text(message, ui::StyleType::Error))?;
    Ok(())
}

/// Runs the event loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    screen: &mut ConverterScreen,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "{}",
        ui::style_text("Currency converter", ui::StyleType::Title)
    )?;
    render(screen, out)?;

    for line in input.lines() {
        let line = line?;
        let Some(event) = parse_event(&line) else {
            continue;
        };
        debug!(?event, "Handling event");

        match event {
            Event::SelectFrom(code) | Event::SelectTo(code) => {
                let code = match code.parse::<CurrencyCode>() {
                    Ok(code) => code,
                    Err(e) => {
                        report_error(out, &e.to_string())?;
                        continue;
                    }
                };
                if matches!(event, Event::SelectFrom(_)) {
                    screen.select_from(code)?;
                } else {
                    screen.select_to(code)?;
                }
                render(screen, out)?;
            }
            Event::Convert(amount) => {
                screen.press_convert(amount)?;
                if let Some(notification) = screen.take_notification() {
                    report_error(out, notification.message())?;
                } else {
                    render(screen, out)?;
                }
            }
            Event::Show => render(screen, out)?,
            Event::Help => writeln!(out, "{HELP}")?,
            Event::Quit => break,
            Event::Unknown(command) => {
                report_error(out, &format!("Unknown command: {command} (try `help`)"))?;
            }
        }
    }

    Ok(())
}
