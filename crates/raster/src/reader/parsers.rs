//! Library of parser functions for ascii raster content

// nom parser combinators
use nom::character::complete::{space0, space1};
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::{preceded, terminated, tuple};
use nom::IResult;

/// Parse any number of consecutive doubles into a vector of f64 values
pub fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    many1(terminated(double, space0))(i)
}

/// Parse the `<nx> <ny> <nz>` extents line of simple-ascii files
pub fn sa_extents(i: &str) -> IResult<&str, (i32, i32, i32)> {
    tuple((
        preceded(space0, nom::character::complete::i32),
        preceded(space1, nom::character::complete::i32),
        preceded(space1, nom::character::complete::i32),
    ))(i)
}
