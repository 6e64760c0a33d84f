use std::str::FromStr;

use snake_boost_common::PlayerId;
use snake_boost_common::games::Operation;
use snake_boost_common::games::snake::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        player: PlayerId,
        size: Option<(u8, u8)>,
    },
    Move {
        player: PlayerId,
        direction: Direction,
    },
    Meta {
        player: PlayerId,
    },
    Body {
        player: PlayerId,
    },
    Calculate {
        left: i128,
        op: Operation,
        right: i128,
    },
    Boost {
        player: PlayerId,
        left: i128,
        op: Operation,
        right: i128,
    },
    Quit,
}

pub const USAGE: &str = "commands: start <player> [<width> <height>] | move <player> <up|down|left|right> | \
meta <player> | body <player> | calc <left> <op> <right> | boost <player> <left> <op> <right> | quit";

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid {} '{}'", what, value))
}

/// `Ok(None)` for blank lines and `#` comments.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let command = match parts.as_slice() {
        ["start", player] => Command::Start {
            player: PlayerId::from(*player),
            size: None,
        },
        ["start", player, width, height] => Command::Start {
            player: PlayerId::from(*player),
            size: Some((parse_number(width, "width")?, parse_number(height, "height")?)),
        },
        ["move", player, direction] => Command::Move {
            player: PlayerId::from(*player),
            direction: direction.parse()?,
        },
        ["meta", player] => Command::Meta {
            player: PlayerId::from(*player),
        },
        ["body", player] => Command::Body {
            player: PlayerId::from(*player),
        },
        ["calc", left, op, right] => Command::Calculate {
            left: parse_number(left, "operand")?,
            op: op.parse()?,
            right: parse_number(right, "operand")?,
        },
        ["boost", player, left, op, right] => Command::Boost {
            player: PlayerId::from(*player),
            left: parse_number(left, "operand")?,
            op: op.parse()?,
            right: parse_number(right, "operand")?,
        },
        ["quit"] | ["exit"] => Command::Quit,
        _ => return Err(format!("Unrecognized command '{}'; {}", line, USAGE)),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# warm up"), Ok(None));
    }

    #[test]
    fn test_parse_start_with_and_without_size() {
        assert_eq!(
            parse_command("start alice"),
            Ok(Some(Command::Start { player: PlayerId::from("alice"), size: None }))
        );
        assert_eq!(
            parse_command("start alice 8 12"),
            Ok(Some(Command::Start { player: PlayerId::from("alice"), size: Some((8, 12)) }))
        );
        assert!(parse_command("start alice 8 999").is_err());
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_command("move bob Left"),
            Ok(Some(Command::Move { player: PlayerId::from("bob"), direction: Direction::Left }))
        );
        assert!(parse_command("move bob sideways").is_err());
    }

    #[test]
    fn test_parse_calculator_commands() {
        assert_eq!(
            parse_command("calc -7 + 2"),
            Ok(Some(Command::Calculate { left: -7, op: Operation::Add, right: 2 }))
        );
        assert_eq!(
            parse_command("boost carol -12 mul 1"),
            Ok(Some(Command::Boost {
                player: PlayerId::from("carol"),
                left: -12,
                op: Operation::Multiply,
                right: 1,
            }))
        );
        assert!(parse_command("calc 1 ^ 2").is_err());
        assert!(parse_command("calc x + 2").is_err());
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        let err = parse_command("jump alice").unwrap_err();
        assert!(err.contains("Unrecognized command"));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
    }
}
