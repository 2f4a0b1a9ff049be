use crate::events::ListIntent;

pub const HELP: &str = "commands: refresh (r), more (m), retry, filter <all|none|pending|processing|shipped|delivered|cancelled|completed>, dropdown, error, empty, dismiss, help (?), quit (q)";

/// What a line of console input asks for
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Intent(ListIntent),
    Help,
    Quit,
}

/// Map a line of console input to a command
/// Returns None if the line should be ignored
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_ascii_lowercase();

    let intent = match command.as_str() {
        "q" | "quit" | "exit" => return Some(ConsoleCommand::Quit),
        "?" | "h" | "help" => return Some(ConsoleCommand::Help),

        "appear" | "load" => ListIntent::OnAppear,
        "r" | "refresh" => ListIntent::PullToRefresh,
        "m" | "more" => ListIntent::LoadMore,
        "retry" => ListIntent::Retry,

        // A bare `filter` opens the dropdown, like tapping the filter button
        "f" | "filter" => match words.next() {
            Some(name) => ListIntent::SelectFilter(name.parse().ok()?),
            None => ListIntent::ToggleFilterDropdown,
        },
        "dropdown" => ListIntent::ToggleFilterDropdown,

        "error" => ListIntent::ToggleErrorSimulation,
        "empty" => ListIntent::ToggleEmptySimulation,
        "dismiss" => ListIntent::DismissRefreshError,
        _ => return None,
    };

    Some(ConsoleCommand::Intent(intent))
}
