use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("do");
        set.insert("let");
        set
    };
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Symbol(char),
    Keyword(String),
    Identifier(String),
    IntConst(u16),
    StringConst(String),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Symbol(c) => write!(f, "SYM('{}')", c),
            Token::Keyword(word) => write!(f, "Keyword({})", word),
            Token::Identifier(word) => write!(f, "ID({})", word),
            Token::IntConst(value) => write!(f, "INT({})", value),
            Token::StringConst(text) => write!(f, "STRING({})", text),
        }
    }
}
