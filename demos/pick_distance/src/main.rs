use argh::FromArgs;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use cvkit::events::{
    ClickLog, ClickLogger, Event, EventDispatcher, KeyLog, KeyPressLogger, KeyboardEvent,
    MouseButton, MouseEvent, MouseEventKind, PickContext, PointDistanceHandler, PointPickingEvent,
};

#[derive(FromArgs)]
/// Replay a recorded viewer session and measure the distance between picked points
struct Args {
    /// path to the session file, one event per line:
    /// `pick x y z [index]`, `key c`, `click left|right|middle x y` or `move x y`
    #[argh(option, short = 's')]
    session_path: PathBuf,

    /// keys to report (default: a)
    #[argh(option, short = 'k', default = "String::from(\"a\")")]
    keys: String,

    /// also log cursor moves
    #[argh(switch, short = 'm')]
    log_moves: bool,
}

#[derive(Default)]
struct Session {
    clicks: ClickLog,
    keys: KeyLog,
    picks: PickContext,
}

impl AsMut<ClickLog> for Session {
    fn as_mut(&mut self) -> &mut ClickLog {
        &mut self.clicks
    }
}

impl AsMut<KeyLog> for Session {
    fn as_mut(&mut self) -> &mut KeyLog {
        &mut self.keys
    }
}

impl AsMut<PickContext> for Session {
    fn as_mut(&mut self) -> &mut PickContext {
        &mut self.picks
    }
}

/// Parse one line of a session file. Blank lines and `#` comments yield `None`.
fn parse_event(line: &str) -> Result<Option<Event>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or_default();
    let args = tokens.collect::<Vec<_>>();

    fn num<T: std::str::FromStr>(s: &str) -> Result<T, String> {
        s.parse().map_err(|_| format!("invalid number '{s}'"))
    }

    let event: Event = match (command, args.as_slice()) {
        ("pick", [x, y, z]) => PointPickingEvent::new([num(x)?, num(y)?, num(z)?]).into(),
        ("pick", [x, y, z, idx]) => PointPickingEvent::new([num(x)?, num(y)?, num(z)?])
            .with_index(num(idx)?)
            .into(),
        ("key", [key]) => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyboardEvent::down(c).into(),
                _ => return Err(format!("expected a single character, got '{key}'")),
            }
        }
        ("click", [button, x, y]) => {
            let button = match *button {
                "left" => MouseButton::Left,
                "right" => MouseButton::Right,
                "middle" => MouseButton::Middle,
                other => return Err(format!("unknown mouse button '{other}'")),
            };
            MouseEvent::new(MouseEventKind::ButtonDown(button), num(x)?, num(y)?).into()
        }
        ("move", [x, y]) => MouseEvent::new(MouseEventKind::Move, num(x)?, num(y)?).into(),
        _ => return Err(format!("unrecognized event '{line}'")),
    };
    Ok(Some(event))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let logger = if args.log_moves {
        ClickLogger::new()
    } else {
        ClickLogger::clicks_only()
    };
    let mut dispatcher: EventDispatcher<Session> = EventDispatcher::new();
    dispatcher
        .register(logger)
        .register(KeyPressLogger::new(args.keys.chars()))
        .register(PointDistanceHandler);

    let mut session = Session::default();
    let reader = BufReader::new(File::open(&args.session_path)?);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let event = match parse_event(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("line {}: {e}", idx + 1);
                continue;
            }
        };
        if dispatcher.dispatch(&mut session, &event) == 0 {
            log::debug!("line {}: no handler for {event:?}", idx + 1);
        }
    }

    log::info!(
        "{} picks, {} distances, {} clicks, {} key presses",
        session.picks.pick_count(),
        session.picks.distances().len(),
        session.clicks.entries().len(),
        session.keys.pressed().len()
    );
    for (i, d) in session.picks.distances().iter().enumerate() {
        println!("pair {}: {d:.4}", i + 1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event() {
        assert_eq!(
            parse_event("pick 1 2 3.5 7"),
            Ok(Some(
                PointPickingEvent::new([1.0, 2.0, 3.5]).with_index(7).into()
            ))
        );
        assert_eq!(
            parse_event("  click right 4 5 "),
            Ok(Some(
                MouseEvent::new(MouseEventKind::ButtonDown(MouseButton::Right), 4, 5).into()
            ))
        );
        assert_eq!(parse_event("key a"), Ok(Some(KeyboardEvent::down('a').into())));
        assert_eq!(parse_event("# comment"), Ok(None));
        assert_eq!(parse_event(""), Ok(None));
        assert!(parse_event("key ab").is_err());
        assert!(parse_event("click up 1 2").is_err());
        assert!(parse_event("pick 1 x 3").is_err());
        assert!(parse_event("zoom 2").is_err());
    }

    #[test]
    fn test_replay_session() {
        let mut dispatcher: EventDispatcher<Session> = EventDispatcher::new();
        dispatcher
            .register(ClickLogger::clicks_only())
            .register(KeyPressLogger::new(['a']))
            .register(PointDistanceHandler);
        let mut session = Session::default();

        let script = "pick 0 0 0\nmove 3 3\npick 3 4 0\nkey a\nclick left 1 1\npick 9 9 9\n";
        for line in script.lines() {
            if let Ok(Some(event)) = parse_event(line) {
                dispatcher.dispatch(&mut session, &event);
            }
        }

        assert_eq!(session.picks.pick_count(), 3);
        assert_eq!(session.picks.distances(), [5.0]);
        assert_eq!(session.clicks.entries(), ["LEFT CLICK (1, 1)"]);
        assert_eq!(session.keys.pressed(), ['a']);
    }
}
