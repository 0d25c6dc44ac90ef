use crate::keywords::KeywordExt;
use itertools::Itertools;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// `None` is the absent element, written `_` in scripts.
pub type Element<'a> = Option<&'a str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Keyword {
    Add,
    Contains,
    Find,
    Union,
    Same,
    Classes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Add(Element<'a>),
    Contains(Element<'a>),
    Find(Element<'a>),
    Union(Element<'a>, Element<'a>),
    Same(Element<'a>, Element<'a>),
    Classes,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{keyword}` takes {expected} argument(s), found {found}")]
    Arity {
        keyword: &'static str,
        expected: usize,
        found: usize,
    },
}

pub fn element(word: &str) -> Element<'_> {
    (word != "_").then_some(word)
}

/// Parses a whole script, pairing each statement with its 1-based line.
pub fn parse(src: &str) -> Result<Vec<(usize, Statement<'_>)>, (usize, ParseError)> {
    let mut statements = Vec::new();
    for (i, line) in src.lines().enumerate() {
        let line_no = i + 1;
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            continue;
        };
        if word.starts_with('#') {
            continue;
        }
        let keyword = Keyword::iter()
            .find(|k| k.to_str() == word)
            .ok_or_else(|| (line_no, ParseError::UnknownCommand(word.to_string())))?;
        let args = words.map(element).collect_vec();
        if args.len() != keyword.arity() {
            return Err((
                line_no,
                ParseError::Arity {
                    keyword: keyword.to_str(),
                    expected: keyword.arity(),
                    found: args.len(),
                },
            ));
        }
        statements.push((line_no, statement(keyword, &args)));
    }
    Ok(statements)
}

// `args` has already been checked against the keyword's arity.
fn statement<'a>(keyword: Keyword, args: &[Element<'a>]) -> Statement<'a> {
    match keyword {
        Keyword::Add => Statement::Add(args[0]),
        Keyword::Contains => Statement::Contains(args[0]),
        Keyword::Find => Statement::Find(args[0]),
        Keyword::Union => Statement::Union(args[0], args[1]),
        Keyword::Same => Statement::Same(args[0], args[1]),
        Keyword::Classes => Statement::Classes,
    }
}
