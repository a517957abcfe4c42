use crate::error::*;
use serde_json::{json, Value};
use snafu::*;
use trie_search_core::Container;

type Json = String;

/// An action that can be requested on the standard input stream.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Action {
    Word,
    Partial,
    Scan,
    Within,
    HasWithin,
    Longest,
    Prefix,
    LongestPrefix,
    Add,
    Compress,
    Size,
}

impl Action {
    fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "word" => Self::Word,
            "partial" => Self::Partial,
            "scan" => Self::Scan,
            "within" => Self::Within,
            "within?" => Self::HasWithin,
            "longest" => Self::Longest,
            "prefix" => Self::Prefix,
            "longest-prefix" => Self::LongestPrefix,
            "add" => Self::Add,
            "compress" => Self::Compress,
            "size" => Self::Size,
            _ => return None,
        };
        Some(action)
    }

    /// Whether the action works on a text given after its name.
    fn takes_text(self) -> bool {
        !matches!(self, Self::Compress | Self::Size)
    }
}

/// Parse a command line and extract the action and the text it applies to.
/// The text is the rest of the line, so phrases may contain spaces.
fn parse_command_line(line: &str) -> Result<(Action, &str)> {
    let (name, text) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, text)| (name, text.trim_start()));

    let action = Action::from_name(name).context(CommandParse {
        line,
        cause: "Action not recognized",
    })?;

    if !action.takes_text() && !text.is_empty() {
        None.context(CommandParse {
            line,
            cause: "This action does not take any argument",
        })?
    }

    Ok((action, text))
}

/// Run the action on the container and return the result in a JSON representation.
fn process_command(
    container: &mut Container,
    action: Action,
    text: &str,
    line: &str,
) -> Result<Json> {
    let value: Value = match action {
        Action::Word => json!(container.is_word(text)),
        Action::Partial => json!(container.is_partial_word(text)),
        Action::Scan => json!(container.scan(text).collect::<Vec<_>>()),
        Action::Within => json!(container.words_within(text)),
        Action::HasWithin => json!(container.has_words_within(text)),
        Action::Longest => json!(container.longest_words_within(text)),
        Action::Prefix => json!(container.words_prefix(text)),
        Action::LongestPrefix => json!(container.longest_words_prefix(text)),
        Action::Add => {
            container.add(text).context(CommandRun { line })?;
            json!(container.size())
        }
        Action::Compress => {
            container.compress();
            json!(container.size())
        }
        Action::Size => json!(container.size()),
    };

    Ok(value.to_string())
}

/// Display the JSON result in the [standard output stream](std::io::stdout)
fn display_json_result(json: &str) {
    println!("{}", json);
}

/// Process queries received in the [standard input stream](std::io::stdin)
pub fn process_stdin_queries(container: &mut Container) -> Result<()> {
    const LINE_CAP: usize = 64;

    let mut line = String::with_capacity(LINE_CAP);
    let input_stream = std::io::stdin();
    loop {
        line.clear();
        match input_stream.read_line(&mut line) {
            Ok(0) => return Ok(()), // EOF reached
            Ok(_) => {
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }

                let json = parse_command_line(command)
                    .and_then(|(action, text)| process_command(container, action, text, command));
                match json {
                    Ok(json) => display_json_result(&json),
                    Err(e) => eprintln!("> {}", e),
                }
            }
            Err(e) => Err(e).context(Stdin)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(container: &mut Container, line: &str) -> Result<Json> {
        let (action, text) = parse_command_line(line)?;
        process_command(container, action, text, line)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command_line("word hello").unwrap(), (Action::Word, "hello"));
        assert_eq!(
            parse_command_line("within the phrase  to search").unwrap(),
            (Action::Within, "the phrase  to search")
        );
        assert_eq!(parse_command_line("scan").unwrap(), (Action::Scan, ""));
        assert_eq!(parse_command_line("size").unwrap(), (Action::Size, ""));
        assert_eq!(parse_command_line("scan\t  ab").unwrap(), (Action::Scan, "ab"));

        assert!(parse_command_line("").is_err());
        assert!(parse_command_line("search hello").is_err());
        assert!(parse_command_line("compress now").is_err());
    }

    #[test]
    fn run_commands() {
        let mut container = Container::new();
        assert_eq!(run(&mut container, "add one").unwrap(), "1");
        assert_eq!(run(&mut container, "add other").unwrap(), "2");
        assert_eq!(run(&mut container, "word one").unwrap(), "true");
        assert_eq!(run(&mut container, "partial ot").unwrap(), "true");
        assert_eq!(run(&mut container, "scan o").unwrap(), r#"["one","other"]"#);
        assert_eq!(run(&mut container, "within someone other").unwrap(), r#"["one","other"]"#);
        assert_eq!(run(&mut container, "within? nothing").unwrap(), "false");
        assert_eq!(run(&mut container, "longest-prefix onerous").unwrap(), r#""one""#);
        assert_eq!(run(&mut container, "longest-prefix none").unwrap(), "null");

        assert_eq!(run(&mut container, "compress").unwrap(), "2");
        assert_eq!(run(&mut container, "prefix otherwise").unwrap(), r#"["other"]"#);
        assert_eq!(run(&mut container, "longest oneother").unwrap(), r#"["one","other"]"#);
        assert!(run(&mut container, "add three").is_err());
        assert_eq!(run(&mut container, "size").unwrap(), "2");
    }
}
