use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

use super::reader::CharReader;
use super::tokens::{is_keyword, Token};

pub struct Lexer<I: Iterator<Item = char>> {
    reader: CharReader<I>,
    file: Rc<String>,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(source: I, file: Option<String>) -> Lexer<I> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        Lexer {
            reader: CharReader::new(source),
            file: file_name,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.skip_whitespace();

        let start = self.reader.position();

        let c = match self.reader.read() {
            Some(c) => c,
            None => return Ok(None),
        };

        if c == '"' {
            self.read_string_const(start).map(Some)
        } else if is_symbol(c) {
            Ok(Some(Token::Symbol(c)))
        } else if c.is_numeric() {
            self.reader.unread(c);
            self.read_int(start).map(Some)
        } else {
            self.reader.unread(c);
            let word = self.read_word();
            if is_keyword(&word) {
                Ok(Some(Token::Keyword(word)))
            } else {
                Ok(Some(Token::Identifier(word)))
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.reader.read() {
            if !c.is_whitespace() {
                self.reader.unread(c);
                break;
            }
        }
    }

    // A word is a maximal run of alphanumeric characters; the scan stops at
    // the first whitespace or symbol character, which is pushed back.
    fn read_word(&mut self) -> String {
        let mut word = String::new();

        while let Some(c) = self.reader.read() {
            if is_symbol(c) || c.is_whitespace() {
                self.reader.unread(c);
                break;
            }
            word.push(c);
        }

        word
    }

    // Scans a full word, not just digits, so `3x` fails as a whole rather
    // than lexing as an integer followed by an identifier.
    fn read_int(&mut self, start: u32) -> Result<Token, Error> {
        let word = self.read_word();

        match word.parse::<u16>() {
            Ok(value) => Ok(Token::IntConst(value)),
            Err(_) => Err(Error::new(
                ErrorImpl::MalformedIntegerLiteral { text: word },
                self.position_at(start),
            )),
        }
    }

    fn read_string_const(&mut self, start: u32) -> Result<Token, Error> {
        let mut text = String::new();

        loop {
            match self.reader.read() {
                Some('"') => return Ok(Token::StringConst(text)),
                Some(c) => text.push(c),
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnterminatedStringLiteral { text },
                        self.position_at(start),
                    ))
                }
            }
        }
    }

    fn position_at(&self, offset: u32) -> Position {
        Position(offset, Rc::clone(&self.file))
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric()
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source.chars(), file);

    let mut tokens = vec![];
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
