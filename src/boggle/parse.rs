use nom::bytes::complete::take_while;
use nom::character::complete::{alpha1, char};
use nom::combinator::all_consuming;
use nom::IResult;
use nom::multi::separated_list1;
use nom::sequence::{delimited, terminated};

fn padding(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ')(input)
}

fn label(input: &str) -> IResult<&str, &str> {
    delimited(padding, alpha1, padding)(input)
}

/// Tab-separated cell labels, tolerating trailing tabs and spaces.
fn row(input: &str) -> IResult<&str, Vec<&str>> {
    terminated(
        separated_list1(char('\t'), label),
        take_while(|c: char| c == ' ' || c == '\t'),
    )(input)
}

/// Splits one board line into its cell labels, or `None` if the line isn't a
/// well-formed row.
pub(crate) fn parse_row(line: &str) -> Option<Vec<&str>> {
    all_consuming(row)(line).ok().map(|(_, cells)| cells)
}
