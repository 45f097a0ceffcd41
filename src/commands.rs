//! Command-script parsing
//!
//! A script is a decimal command count on the first line followed by that
//! many command lines:
//!
//! ```text
//! FILE <parentId> <permissions> <owner> <group> <size> <name.extension>
//! DIR <id> <parentId> <name>
//! DIR <id> <name>            (parent 0, the root, implied)
//! ```
//!
//! Fields are whitespace-separated. The final `FILE` token splits at its
//! first "." into name and extension. Parsing is all-or-nothing: any
//! malformed line fails the whole script before anything is built.

use thiserror::Error;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dir {
        /// Identifier the script declares for this directory.
        id: u64,
        /// Identifier of the directory this one attaches to.
        parent: u64,
        name: String,
    },
    File {
        /// Identifier of the directory the file attaches to.
        parent: u64,
        permissions: String,
        owner: String,
        group: String,
        size_kb: f64,
        name: String,
        extension: String,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("missing command count on the first line")]
    MissingCount,
    #[error("invalid command count {value:?}")]
    InvalidCount { value: String },
    #[error("line {line}: unknown command {keyword:?}")]
    UnknownCommand { line: usize, keyword: String },
    #[error("line {line}: {keyword} expects {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        keyword: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: file name {name:?} has no extension")]
    MissingExtension { line: usize, name: String },
    #[error("script declares {expected} commands but contains {found}")]
    TruncatedScript { expected: usize, found: usize },
}

/// Parse a whole script: count line, then exactly that many command lines.
/// Trailing blank lines are tolerated; a short script is an error.
pub fn parse_script(input: &str) -> Result<Vec<Command>, ParseError> {
    let mut lines = input.lines();
    let count_line = lines.next().ok_or(ParseError::MissingCount)?;
    let count: usize =
        count_line
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidCount {
                value: count_line.trim().to_string(),
            })?;

    let mut commands = Vec::with_capacity(count);
    // Command lines are numbered from 2: line 1 is the count.
    for (offset, line) in lines.enumerate() {
        if commands.len() == count {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        commands.push(parse_command(line, offset + 2)?);
    }

    if commands.len() < count {
        return Err(ParseError::TruncatedScript {
            expected: count,
            found: commands.len(),
        });
    }
    Ok(commands)
}

/// Parse a single command line. `line_no` is used only for error reporting.
pub fn parse_command(line: &str, line_no: usize) -> Result<Command, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.first().copied() {
        Some("FILE") => parse_file(&fields, line_no),
        Some("DIR") => parse_dir(&fields, line_no),
        Some(other) => Err(ParseError::UnknownCommand {
            line: line_no,
            keyword: other.to_string(),
        }),
        None => Err(ParseError::UnknownCommand {
            line: line_no,
            keyword: String::new(),
        }),
    }
}

fn parse_file(fields: &[&str], line_no: usize) -> Result<Command, ParseError> {
    if fields.len() != 7 {
        return Err(ParseError::MissingFields {
            line: line_no,
            keyword: "FILE",
            expected: 7,
            found: fields.len(),
        });
    }
    let parent = parse_u64(fields[1], line_no)?;
    let size_kb = parse_f64(fields[5], line_no)?;
    let (name, extension) = split_file_name(fields[6], line_no)?;
    Ok(Command::File {
        parent,
        permissions: fields[2].to_string(),
        owner: fields[3].to_string(),
        group: fields[4].to_string(),
        size_kb,
        name,
        extension,
    })
}

fn parse_dir(fields: &[&str], line_no: usize) -> Result<Command, ParseError> {
    match fields.len() {
        // DIR <id> <name>: attaches to the root.
        3 => Ok(Command::Dir {
            id: parse_u64(fields[1], line_no)?,
            parent: 0,
            name: fields[2].to_string(),
        }),
        4 => Ok(Command::Dir {
            id: parse_u64(fields[1], line_no)?,
            parent: parse_u64(fields[2], line_no)?,
            name: fields[3].to_string(),
        }),
        found => Err(ParseError::MissingFields {
            line: line_no,
            keyword: "DIR",
            expected: 4,
            found,
        }),
    }
}

/// Split `name.extension` at the first dot. Everything after that dot is the
/// extension, so "archive.tar.gz" has extension "tar.gz".
fn split_file_name(token: &str, line_no: usize) -> Result<(String, String), ParseError> {
    match token.split_once('.') {
        Some((name, extension)) if !name.is_empty() && !extension.is_empty() => {
            Ok((name.to_string(), extension.to_string()))
        }
        _ => Err(ParseError::MissingExtension {
            line: line_no,
            name: token.to_string(),
        }),
    }
}

fn parse_u64(token: &str, line_no: usize) -> Result<u64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        value: token.to_string(),
    })
}

fn parse_f64(token: &str, line_no: usize) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            line: line_no,
            value: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dir_with_parent() {
        let cmd = parse_command("DIR 3 1 src", 2).unwrap();
        assert_eq!(
            cmd,
            Command::Dir {
                id: 3,
                parent: 1,
                name: "src".to_string()
            }
        );
    }

    #[test]
    fn test_parse_dir_defaults_to_root_parent() {
        let cmd = parse_command("DIR 1 a", 2).unwrap();
        assert_eq!(
            cmd,
            Command::Dir {
                id: 1,
                parent: 0,
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn test_parse_file() {
        let cmd = parse_command("FILE 1 rwx user grp 4.5 b.txt", 2).unwrap();
        let Command::File {
            parent,
            permissions,
            owner,
            group,
            size_kb,
            name,
            extension,
        } = cmd
        else {
            panic!("expected a FILE command");
        };
        assert_eq!(parent, 1);
        assert_eq!(permissions, "rwx");
        assert_eq!(owner, "user");
        assert_eq!(group, "grp");
        assert_eq!(size_kb, 4.5);
        assert_eq!(name, "b");
        assert_eq!(extension, "txt");
    }

    #[test]
    fn test_extension_is_everything_after_first_dot() {
        let cmd = parse_command("FILE 0 rwx u g 1 archive.tar.gz", 2).unwrap();
        let Command::File {
            name, extension, ..
        } = cmd
        else {
            panic!("expected a FILE command");
        };
        assert_eq!(name, "archive");
        assert_eq!(extension, "tar.gz");
    }

    #[test]
    fn test_file_without_extension_is_malformed() {
        let err = parse_command("FILE 0 rwx u g 1 noext", 4).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingExtension {
                line: 4,
                name: "noext".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_keyword() {
        let err = parse_command("LINK 1 2 x", 3).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCommand {
                line: 3,
                keyword: "LINK".to_string()
            }
        );
    }

    #[test]
    fn test_bad_size_is_invalid_number() {
        let err = parse_command("FILE 0 rwx u g big b.txt", 2).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 2,
                value: "big".to_string()
            }
        );
    }

    #[test]
    fn test_parse_script_counts_lines() {
        let script = "2\nDIR 1 a\nFILE 1 rwx u g 4 b.txt\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_parse_script_zero_commands() {
        assert_eq!(parse_script("0\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_script_ignores_extra_lines_past_count() {
        let script = "1\nDIR 1 a\nDIR 2 b\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_parse_script_short_input() {
        let err = parse_script("3\nDIR 1 a\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::TruncatedScript {
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn test_parse_script_bad_count() {
        let err = parse_script("many\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCount {
                value: "many".to_string()
            }
        );
    }

    #[test]
    fn test_parse_script_empty_input() {
        assert_eq!(parse_script("").unwrap_err(), ParseError::MissingCount);
    }
}
