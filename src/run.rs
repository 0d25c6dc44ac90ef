use crate::script::{self, ParseError, Statement};
use itertools::Itertools;
use std::io::{self, Write};
use thiserror::Error;
use union_find::{Config, UnionFind, UnionFindError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
    #[error("line {line}: {source}")]
    Operation {
        line: usize,
        source: UnionFindError,
    },
    #[error("initial elements: {0}")]
    Init(UnionFindError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn config(elements: &[String], allow_find_none: bool) -> Config<&str> {
    let config = Config {
        elements: elements.iter().map(|e| script::element(e)).collect(),
        allow_find_return_none: false,
    };
    if allow_find_none {
        config.allow_find_return_none()
    } else {
        config
    }
}

/// Replays `src` against a fresh structure built from `config`, writing the
/// answers of queries to `out`. Nothing runs if the script fails to parse.
pub fn run<'a>(src: &'a str, config: Config<&'a str>, out: &mut impl Write) -> Result<(), Error> {
    let statements =
        script::parse(src).map_err(|(line, source)| Error::Parse { line, source })?;
    let mut uf = UnionFind::new(config).map_err(Error::Init)?;
    log::debug!("{} statements, {} initial elements", statements.len(), uf.len());
    for (line, statement) in statements {
        log::trace!("line {line}: {statement:?}");
        exec(&mut uf, line, statement, out)?;
    }
    out.flush()?;
    Ok(())
}

fn exec<'a>(
    uf: &mut UnionFind<&'a str>,
    line: usize,
    statement: Statement<'a>,
    out: &mut impl Write,
) -> Result<(), Error> {
    let op = |source| Error::Operation { line, source };
    match statement {
        Statement::Add(e) => uf.add(e).map_err(op)?,
        Statement::Contains(e) => writeln!(out, "{}", uf.contains(e.as_ref()))?,
        Statement::Find(e) => {
            let root = uf.find(e.as_ref()).map_err(op)?;
            writeln!(out, "{}", root.copied().unwrap_or("none"))?;
        }
        Statement::Union(a, b) => uf.union(a.as_ref(), b.as_ref()).map_err(op)?,
        Statement::Same(a, b) => {
            let same = uf.same_set(a.as_ref(), b.as_ref()).map_err(op)?;
            writeln!(out, "{same}")?;
        }
        Statement::Classes => {
            for class in sorted_classes(uf) {
                writeln!(out, "{}", class.iter().join(" "))?;
            }
        }
    }
    Ok(())
}

fn sorted_classes<'a>(uf: &UnionFind<&'a str>) -> Vec<Vec<&'a str>> {
    uf.classes()
        .into_iter()
        .map(|class| class.into_iter().copied().sorted().collect_vec())
        .sorted()
        .collect_vec()
}
