//! Inverts a square matrix and uses it to undo a transformation.
//!
//! Usage: `transform [ROW;ROW;...]`, where each row is a comma-separated list of numbers, eg.
//! `transform "1,2;3,4"`. Without an argument, a built-in 3x3 matrix is used.

use anyhow::{bail, Context};
use linear_algebra::{DMatrix, DVector};

fn parse_matrix(s: &str) -> anyhow::Result<DMatrix<f64>> {
    let rows = s
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|elem| {
                    elem.trim()
                        .parse::<f64>()
                        .with_context(|| format!("invalid matrix element '{elem}'"))
                })
                .collect::<anyhow::Result<Vec<_>>>()
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(DMatrix::from_rows(rows)?)
}

fn main() -> anyhow::Result<()> {
    linear_algebra::init_logger!();

    let operator = match std::env::args().nth(1) {
        Some(arg) => parse_matrix(&arg)?,
        None => DMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 12.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])?,
    };
    if !operator.is_square() {
        bail!("operator must be square, got a {} matrix", operator.shape());
    }

    println!("operator:\n{operator:.3}\n");
    println!("determinant: {}", operator.determinant()?);

    let inverse = operator
        .try_invert()
        .context("operator cannot be inverted")?;
    println!("inverse:\n{inverse:.3}\n");

    let v = DVector::from((1..=operator.cols()).map(|i| i as f64).collect::<Vec<_>>());
    let transformed = v.try_transform(&operator)?;
    let restored = transformed.try_transform(&inverse)?;
    println!("{v} -> {transformed:.3} -> {restored:.3}");

    if !restored.eq_approx(&v)? {
        bail!("round trip through the inverse did not restore {v}");
    }
    Ok(())
}
