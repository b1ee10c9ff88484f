//! Config-tree text parser
//!
//! Grammar, informally:
//!
//! ```text
//! block  := item*
//! item   := word '=' value        (value runs to end of line, '}' or '//')
//!         | word '{' block '}'
//! ```
//!
//! `//` comments run to end of line. The root block has no name and no
//! closing brace.

use super::ConfigNode;
use crate::error::ParseError;

/// Parse config-tree text into an unnamed root block
pub fn parse(text: &str) -> Result<ConfigNode, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parser = Parser {
        chars: text.chars().collect(),
        pos: 0,
        line: 1,
    };
    let mut root = ConfigNode::new("");
    parser.parse_block(&mut root, 0)?;
    Ok(root)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_comment(&self) -> bool {
        self.peek() == Some('/') && self.chars.get(self.pos + 1) == Some(&'/')
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip whitespace, newlines and comments
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.at_comment() => self.skip_comment(),
                _ => break,
            }
        }
    }

    fn read_until(&mut self, stop: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if stop(c) || self.at_comment() {
                break;
            }
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect::<String>().trim().to_string()
    }

    fn parse_block(&mut self, node: &mut ConfigNode, depth: usize) -> Result<(), ParseError> {
        loop {
            self.skip_trivia();
            match self.peek() {
                None if depth == 0 => return Ok(()),
                None => {
                    return Err(ParseError::new(
                        self.line,
                        format!("unexpected end of file, expected '}}' to close {}", node.name()),
                    ))
                }
                Some('}') if depth == 0 => {
                    return Err(ParseError::new(self.line, "unexpected '}'"));
                }
                Some('}') => {
                    self.bump();
                    return Ok(());
                }
                Some('{') => {
                    return Err(ParseError::new(self.line, "'{' without a block name"));
                }
                Some('=') => {
                    return Err(ParseError::new(self.line, "'=' without a field name"));
                }
                Some(_) => self.parse_item(node, depth)?,
            }
        }
    }

    fn parse_item(&mut self, node: &mut ConfigNode, depth: usize) -> Result<(), ParseError> {
        let line = self.line;
        let word = self.read_until(|c| matches!(c, '\n' | '{' | '}' | '='));
        self.skip_trivia();
        match self.peek() {
            Some('=') => {
                self.bump();
                let value = self.read_until(|c| matches!(c, '\n' | '}'));
                node.add_value(word, value, line);
                Ok(())
            }
            Some('{') => {
                self.bump();
                let mut child = ConfigNode::new(word);
                self.parse_block(&mut child, depth + 1)?;
                node.add_node(child, line);
                Ok(())
            }
            _ => Err(ParseError::new(
                line,
                format!("expected '=' or '{{' after '{}'", word),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_blocks_with_lines() {
        let text = "PART\n{\n\tname = tank // the name\n\tRESOURCE\n\t{\n\t\tname = LiquidFuel\n\t}\n}\n";
        let root = parse(text).unwrap();

        assert_eq!(root.nodes().len(), 1);
        let part = &root.nodes()[0];
        assert_eq!(part.name, "PART");
        assert_eq!(part.line, 1);
        assert_eq!(part.node.get_value("name"), Some("tank"));
        assert_eq!(part.node.values()[0].line, 3);

        let res = &part.node.nodes()[0];
        assert_eq!(res.name, "RESOURCE");
        assert_eq!(res.line, 4);
        assert_eq!(res.node.values()[0].line, 6);
    }

    #[test]
    fn test_parse_single_line_block() {
        let root = parse("RESOURCE { name = Ore }\nPART {\n}\n").unwrap();
        let res = root.get_node("RESOURCE").unwrap();
        assert_eq!(res.get_value("name"), Some("Ore"));
        assert!(root.get_node("PART").is_some());
    }

    #[test]
    fn test_value_keeps_inner_spaces_and_equals() {
        let root = parse("description = a = b  \nempty =\n").unwrap();
        assert_eq!(root.get_value("description"), Some("a = b"));
        assert_eq!(root.get_value("empty"), Some(""));
    }

    #[test]
    fn test_bom_and_crlf() {
        let root = parse("\u{feff}PART\r\n{\r\n\tname = x\r\n}\r\n").unwrap();
        assert_eq!(root.get_node("PART").unwrap().get_value("name"), Some("x"));
    }

    #[test]
    fn test_unexpected_close() {
        let err = parse("name = x\n}\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.message, "unexpected '}'");
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse("PART\n{\n\tname = x\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(err.message.contains("expected '}'"));
    }

    #[test]
    fn test_bare_word() {
        let err = parse("PART\nname\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.message, "expected '=' or '{' after 'PART'");
    }

    #[test]
    fn test_missing_field_name() {
        let err = parse("\n= 5\n").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
