use std::sync::OnceLock;

use regex::Regex;

/// Backslash immediately followed by a line break: a continuation marker
/// joining the next line onto the current statement.
fn continuation_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\\r?\n").expect("continuation pattern"))
}

/// A batch separator line: `GO`, optionally followed by a repeat count,
/// case-insensitive, alone on its line apart from surrounding whitespace.
fn separator_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*GO(?:[ \t]+([0-9]+))?\s*$").expect("separator pattern"))
}

/// Split a multi-statement script into individually executable commands.
///
/// Continuation sequences are stripped first, then the text is split at
/// `GO [n]` separator lines. Separator lines and blank-only segments are
/// dropped. A segment followed by `GO n` is emitted `n` times as distinct
/// consecutive commands. The final segment of a script that does not end in
/// a separator gets a trailing line terminator appended, preserving the
/// historical behavior where the last statement needs an explicit
/// terminator.
///
/// Lines that merely resemble a separator (`GOTO`, `GO;`) stay part of the
/// surrounding text; there are no error cases.
pub fn split_script(sql: &str) -> Vec<String> {
    let joined = continuation_pattern().replace_all(sql, "");

    let mut commands = Vec::new();
    let mut segment: Vec<&str> = Vec::new();

    for line in joined.lines() {
        if let Some(caps) = separator_pattern().captures(line) {
            let count = caps
                .get(1)
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .unwrap_or(1);
            push_segment(&mut commands, &segment, count, false);
            segment.clear();
        } else {
            segment.push(line);
        }
    }
    push_segment(&mut commands, &segment, 1, true);

    commands
}

fn push_segment(commands: &mut Vec<String>, lines: &[&str], count: usize, is_final: bool) {
    let text = lines.join("\n");
    if text.trim().is_empty() {
        return;
    }
    for _ in 0..count {
        if is_final {
            commands.push(format!("{}\n", text));
        } else {
            commands.push(text.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_yields_no_commands() {
        assert!(split_script("").is_empty());
        assert!(split_script("  \n\nGO\n").is_empty());
    }

    #[test]
    fn script_without_separators_is_one_command() {
        let commands = split_script("SELECT 1 FROM DUAL\nWHERE 1 = 1");
        assert_eq!(commands, vec!["SELECT 1 FROM DUAL\nWHERE 1 = 1\n"]);
    }

    #[test]
    fn final_command_gets_trailing_terminator_others_do_not() {
        let commands = split_script("SELECT 1 FROM DUAL\nGO\nSELECT 2 FROM DUAL");
        assert_eq!(commands, vec!["SELECT 1 FROM DUAL", "SELECT 2 FROM DUAL\n"]);
    }

    #[test]
    fn repeat_count_duplicates_the_preceding_segment() {
        let commands = split_script("INSERT INTO T VALUES (1)\nGO 3\n");
        assert_eq!(commands.len(), 3);
        for command in &commands {
            assert_eq!(command, "INSERT INTO T VALUES (1)");
        }
    }

    #[test]
    fn splits_mixed_script_in_order() {
        let script = "INSERT INTO A VALUES (1)\nGO\nINSERT INTO A VALUES (2)\nGO 2\n";
        let commands = split_script(script);
        assert_eq!(
            commands,
            vec![
                "INSERT INTO A VALUES (1)",
                "INSERT INTO A VALUES (2)",
                "INSERT INTO A VALUES (2)",
            ]
        );
    }

    #[test]
    fn separator_is_case_insensitive_and_tolerates_whitespace() {
        let commands = split_script("SELECT 1 FROM DUAL\n  go  \nSELECT 2 FROM DUAL\ngO 2\n");
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], "SELECT 1 FROM DUAL");
        assert_eq!(commands[1], "SELECT 2 FROM DUAL");
        assert_eq!(commands[2], "SELECT 2 FROM DUAL");
    }

    #[test]
    fn line_continuations_are_joined_before_splitting() {
        let commands = split_script("SELECT 1 \\\nFROM DUAL\nGO\n");
        assert_eq!(commands, vec!["SELECT 1 FROM DUAL"]);
    }

    #[test]
    fn continuation_joins_across_crlf() {
        let commands = split_script("SELECT 1 \\\r\nFROM DUAL");
        assert_eq!(commands, vec!["SELECT 1 FROM DUAL\n"]);
    }

    #[test]
    fn malformed_separators_stay_in_the_text() {
        let commands = split_script("SELECT 1\nGOTO end\nGO;\nGO\n");
        assert_eq!(commands, vec!["SELECT 1\nGOTO end\nGO;"]);
    }

    #[test]
    fn consecutive_separators_produce_no_blank_commands() {
        let commands = split_script("SELECT 1 FROM DUAL\nGO\nGO\nGO\n");
        assert_eq!(commands, vec!["SELECT 1 FROM DUAL"]);
    }
}
