use movies_core::Msg;

pub const HELP: &str = "\
Commands:
  <n> | open <n>   follow link n
  crumb <n>        jump back to breadcrumb n
  back             go back one level
  root             return to the movie list
  reload           load the catalog again
  cancel           abandon a running load
  help             show this text
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Dispatch(Msg::NoOp);
    };
    let arg = words.next();

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("open", Some(n)) | ("crumb", Some(n)) => match n.parse::<usize>() {
            Ok(index) if head.eq_ignore_ascii_case("open") => {
                Command::Dispatch(Msg::LinkSelected(index))
            }
            Ok(index) => Command::Dispatch(Msg::BreadcrumbSelected(index)),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        ("back", None) => Command::Dispatch(Msg::BackRequested),
        ("root", None) => Command::Dispatch(Msg::RootRequested),
        ("reload", None) => Command::Dispatch(Msg::ReloadRequested),
        ("cancel", None) => Command::Dispatch(Msg::CancelRequested),
        ("help", None) | ("?", None) => Command::Help,
        ("quit", None) | ("exit", None) | ("q", None) => Command::Quit,
        (other, None) => match other.parse::<usize>() {
            Ok(index) => Command::Dispatch(Msg::LinkSelected(index)),
            Err(_) => Command::Unknown(line.trim().to_string()),
        },
        _ => Command::Unknown(line.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_links() {
        assert_eq!(parse_command("3"), Command::Dispatch(Msg::LinkSelected(3)));
        assert_eq!(
            parse_command("  open 0 "),
            Command::Dispatch(Msg::LinkSelected(0))
        );
    }

    #[test]
    fn crumb_truncates_path() {
        assert_eq!(
            parse_command("CRUMB 2"),
            Command::Dispatch(Msg::BreadcrumbSelected(2))
        );
    }

    #[test]
    fn navigation_words() {
        assert_eq!(parse_command("back"), Command::Dispatch(Msg::BackRequested));
        assert_eq!(parse_command("root"), Command::Dispatch(Msg::RootRequested));
        assert_eq!(
            parse_command("reload"),
            Command::Dispatch(Msg::ReloadRequested)
        );
        assert_eq!(
            parse_command("cancel"),
            Command::Dispatch(Msg::CancelRequested)
        );
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
    }

    #[test]
    fn blank_and_garbage() {
        assert_eq!(parse_command("   "), Command::Dispatch(Msg::NoOp));
        assert_eq!(
            parse_command("open x"),
            Command::Unknown("open x".to_string())
        );
        assert_eq!(
            parse_command("dance"),
            Command::Unknown("dance".to_string())
        );
        assert_eq!(
            parse_command("back 2"),
            Command::Unknown("back 2".to_string())
        );
    }
}
