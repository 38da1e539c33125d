use crate::platform::{Button, NotifyEvent, Rect};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid {what} '{value}'")]
    InvalidArgument { what: &'static str, value: String },
}

/// Parses one line of console input into the event it requests.
///
/// ```text
/// arrived <uuid>
/// battery [timeout_ms]
/// small <x> <y> <w> <h> <text...>
/// small-for <timeout_ms> <x> <y> <w> <h> <text...>
/// call <caller...>
/// alarm <id>
/// load <window>
/// press back|up|select|down
/// dismiss
/// quit
/// ```
pub fn parse_command(line: &str) -> Result<NotifyEvent, CommandError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "arrived" => {
            let id = required(rest, "arrived", "a notification id")?;
            let id = Uuid::parse_str(id).map_err(|_| invalid("notification id", id))?;
            Ok(NotifyEvent::Arrived(id))
        }
        "battery" => {
            let timeout_ms = if rest.is_empty() {
                0
            } else {
                parse_number(rest, "timeout")?
            };
            Ok(NotifyEvent::ShowBattery { timeout_ms })
        }
        "small" => {
            let (frame, text) = parse_small(rest, "small")?;
            Ok(NotifyEvent::ShowSmallMessage {
                text,
                frame,
                timeout_ms: None,
            })
        }
        "small-for" => {
            let (timeout, rest) = rest.split_once(char::is_whitespace).ok_or(
                CommandError::MissingArgument {
                    command: "small-for",
                    expected: "<timeout_ms> <x> <y> <w> <h> <text>",
                },
            )?;
            let timeout_ms = parse_number(timeout, "timeout")?;
            let (frame, text) = parse_small(rest.trim(), "small-for")?;
            Ok(NotifyEvent::ShowSmallMessage {
                text,
                frame,
                timeout_ms: Some(timeout_ms),
            })
        }
        "call" => {
            let caller = required(rest, "call", "a caller name")?;
            Ok(NotifyEvent::ShowIncomingCall {
                caller: caller.to_string(),
            })
        }
        "alarm" => {
            let id = required(rest, "alarm", "an alarm id")?;
            Ok(NotifyEvent::ShowAlarm(parse_number(id, "alarm id")?))
        }
        "load" => {
            let window = required(rest, "load", "a window id")?;
            Ok(NotifyEvent::LoadClickConfig(parse_number(window, "window id")?))
        }
        "press" => {
            let button = required(rest, "press", "back, up, select or down")?;
            Ok(NotifyEvent::Button(parse_button(button)?))
        }
        "dismiss" => Ok(NotifyEvent::Dismiss),
        "quit" | "exit" => Ok(NotifyEvent::Shutdown),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_small(args: &str, command: &'static str) -> Result<(Rect, String), CommandError> {
    let missing = CommandError::MissingArgument {
        command,
        expected: "<x> <y> <w> <h> <text>",
    };
    let mut parts = args.splitn(5, char::is_whitespace);
    let mut next = || parts.next().filter(|part| !part.is_empty());

    let (Some(x), Some(y), Some(width), Some(height), Some(text)) =
        (next(), next(), next(), next(), next())
    else {
        return Err(missing);
    };

    let frame = Rect::new(
        parse_number(x, "x")?,
        parse_number(y, "y")?,
        parse_number(width, "width")?,
        parse_number(height, "height")?,
    );
    Ok((frame, text.trim().to_string()))
}

fn parse_button(name: &str) -> Result<Button, CommandError> {
    match name.to_ascii_lowercase().as_str() {
        "back" => Ok(Button::Back),
        "up" => Ok(Button::Up),
        "select" => Ok(Button::Select),
        "down" => Ok(Button::Down),
        _ => Err(invalid("button", name)),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &'static str) -> Result<T, CommandError> {
    value.parse().map_err(|_| invalid(what, value))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn invalid(what: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        what,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrived() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_command(&format!("arrived {id}")),
            Ok(NotifyEvent::Arrived(id))
        );
        assert!(matches!(
            parse_command("arrived not-a-uuid"),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_command("arrived"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_battery_defaults_to_no_timeout() {
        assert_eq!(
            parse_command("battery"),
            Ok(NotifyEvent::ShowBattery { timeout_ms: 0 })
        );
        assert_eq!(
            parse_command("  BATTERY 2500 "),
            Ok(NotifyEvent::ShowBattery { timeout_ms: 2500 })
        );
    }

    #[test]
    fn test_small_message_keeps_spaces_in_text() {
        assert_eq!(
            parse_command("small 10 20 100 40 Meeting in 5"),
            Ok(NotifyEvent::ShowSmallMessage {
                text: "Meeting in 5".to_string(),
                frame: Rect::new(10, 20, 100, 40),
                timeout_ms: None,
            })
        );
        assert_eq!(
            parse_command("small-for 1500 -4 0 60 20 Saved"),
            Ok(NotifyEvent::ShowSmallMessage {
                text: "Saved".to_string(),
                frame: Rect::new(-4, 0, 60, 20),
                timeout_ms: Some(1500),
            })
        );
    }

    #[test]
    fn test_small_message_errors() {
        assert!(matches!(
            parse_command("small 10 20 100"),
            Err(CommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_command("small 10 20 -100 40 Hi"),
            Err(CommandError::InvalidArgument { what: "width", .. })
        ));
    }

    #[test]
    fn test_press() {
        assert_eq!(
            parse_command("press Select"),
            Ok(NotifyEvent::Button(Button::Select))
        );
        assert!(matches!(
            parse_command("press left"),
            Err(CommandError::InvalidArgument { what: "button", .. })
        ));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(
            parse_command("call Jo Smith"),
            Ok(NotifyEvent::ShowIncomingCall {
                caller: "Jo Smith".to_string()
            })
        );
        assert_eq!(parse_command("alarm 3"), Ok(NotifyEvent::ShowAlarm(3)));
        assert_eq!(parse_command("load 7"), Ok(NotifyEvent::LoadClickConfig(7)));
        assert_eq!(parse_command("dismiss"), Ok(NotifyEvent::Dismiss));
        assert_eq!(parse_command("quit"), Ok(NotifyEvent::Shutdown));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("reboot now"),
            Err(CommandError::Unknown("reboot".to_string()))
        );
    }
}
