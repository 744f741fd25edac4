use anyhow::Result;
use nom::{
    branch::alt, bytes::complete::tag, character::complete::multispace0, combinator::eof, IResult,
};
use std::io::BufRead;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RequirementLine {
    Specifier(String),
    Editable,
    Empty,
}

pub fn parse_requirement_lines(reader: impl BufRead) -> Result<Vec<RequirementLine>> {
    let mut res = Vec::new();
    for line in reader.lines() {
        let i = line?;
        res.push(classify_line(&i));
    }
    Ok(res)
}

fn classify_line(i: &str) -> RequirementLine {
    match alt((empty_line, editable_line))(i) {
        Ok((_, content)) => content,
        // Any other line is a dependency specifier, taken as-is
        Err(_) => RequirementLine::Specifier(i.trim().to_string()),
    }
}

fn empty_line(i: &str) -> IResult<&str, RequirementLine> {
    let (i, _) = multispace0(i)?;
    let (i, _) = eof(i)?;
    Ok((i, RequirementLine::Empty))
}

// The editable-install marker tells the packaging tool to install the
// project directory itself. It is not a dependency, and only the exact
// form `-e .` counts.
fn editable_line(i: &str) -> IResult<&str, RequirementLine> {
    let (i, _) = multispace0(i)?;
    let (i, _) = tag("-e .")(i)?;
    let (i, _) = multispace0(i)?;
    let (i, _) = eof(i)?;
    Ok((i, RequirementLine::Editable))
}
