use super::types::{Condition, Field, Filter, Term};

/// Characters that end a bare word
const WORD_END: &[char] = &[':', '"'];

struct Scanner {
    input: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn read_while<F>(&mut self, predicate: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut result = String::new();
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            result.push(ch);
            self.pos += 1;
        }
        result
    }

    fn read_quoted(&mut self) -> Result<String, String> {
        self.advance();
        let phrase = self.read_while(|c| c != '"');
        match self.advance() {
            Some('"') => Ok(phrase),
            _ => Err("Unterminated quoted phrase".to_string()),
        }
    }

    fn parse(&mut self) -> Result<Vec<Term>, String> {
        let mut terms = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                break;
            };

            if ch == '"' {
                terms.push(Term::Text(self.read_quoted()?));
                continue;
            }

            let word = self.read_while(|c| !c.is_whitespace() && !WORD_END.contains(&c));
            if self.eat(':') {
                terms.push(Term::Filter(self.parse_filter(&word)?));
            } else if word == "AND" {
                // Terms are always conjunctive
            } else {
                terms.push(Term::Text(word));
            }
        }

        Ok(terms)
    }

    fn parse_filter(&mut self, name: &str) -> Result<Filter, String> {
        if name.is_empty() {
            return Err("Expected field name before ':'".to_string());
        }
        if name.starts_with('-') || name.starts_with('!') {
            return Err(format!("Negation is not supported: {}", name));
        }
        let field = Field::lookup(name).ok_or_else(|| format!("Unknown field: {}", name))?;

        let condition = match self.peek() {
            Some('>') => {
                self.advance();
                if !self.eat('=') {
                    return Err(strict_comparison(field));
                }
                Condition::Gte(self.parse_value(field)?)
            }
            Some('<') => {
                self.advance();
                if !self.eat('=') {
                    return Err(strict_comparison(field));
                }
                Condition::Lte(self.parse_value(field)?)
            }
            Some('[') => self.parse_range(field)?,
            Some('(') => {
                return Err(format!(
                    "Field '{}' accepts a single value; OR groups are not supported",
                    field.name()
                ))
            }
            _ => Condition::Eq(self.parse_value(field)?),
        };

        Ok(Filter { field, condition })
    }

    fn parse_range(&mut self, field: Field) -> Result<Condition, String> {
        self.advance();
        self.skip_whitespace();
        let min = self.read_while(|c| !c.is_whitespace() && c != ']');
        self.skip_whitespace();
        let keyword = self.read_while(|c| !c.is_whitespace() && c != ']');
        if keyword != "TO" {
            return Err(format!("Expected TO in range for '{}'", field.name()));
        }
        self.skip_whitespace();
        let max = self.read_while(|c| !c.is_whitespace() && c != ']');
        self.skip_whitespace();
        if min.is_empty() || max.is_empty() || !self.eat(']') {
            return Err(format!(
                "Expected [min TO max] range for '{}'",
                field.name()
            ));
        }
        Ok(Condition::Range(min, max))
    }

    fn parse_value(&mut self, field: Field) -> Result<String, String> {
        let value = if self.peek() == Some('"') {
            self.read_quoted()?
        } else {
            self.read_while(|c| !c.is_whitespace())
        };
        if value.is_empty() {
            return Err(format!("Expected value for '{}'", field.name()));
        }
        Ok(value)
    }
}

fn strict_comparison(field: Field) -> String {
    format!(
        "Strict comparison on '{}' is not supported, use >= or <=",
        field.name()
    )
}

/// Split an expression into filters and free text terms
pub fn parse_dsl(query: &str) -> Result<Vec<Term>, String> {
    Scanner::new(query).parse()
}
