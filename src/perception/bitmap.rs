// Bitmap I/O: test-case parsing and distance-grid rendering.
//
// Text input is a case count followed by, per case, `n m` and `n` row words
// of `m` digits. Tokens are whitespace separated so line breaks carry no
// meaning. JSON input is an array of `{"grid": [[..], ..]}` records.

use std::io::Read;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{BitmapError, Cell, Grid, Result};
use crate::distance::DistanceGrid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub grid: Grid,
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self { inner: input.split_whitespace() }
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        self.inner.next().ok_or_else(|| BitmapError::UnexpectedEof(what.to_string()))
    }

    fn number(&mut self, what: &str) -> Result<usize> {
        let tok = self.word(what)?;
        tok.parse().map_err(|_| BitmapError::InvalidNumber(tok.to_string()))
    }
}

pub fn parse_cases(input: &str) -> Result<Vec<Grid>> {
    let mut tokens = Tokens::new(input);
    let count = tokens.number("test case count")?;
    let mut cases = Vec::with_capacity(count.min(1024));
    for case in 1..=count {
        let rows = tokens.number(&format!("row count of case {}", case))?;
        let cols = tokens.number(&format!("column count of case {}", case))?;
        // Zero-sized cases have no row words; a zero-width row can't be a token.
        if rows == 0 || cols == 0 {
            cases.push(Grid::new(rows, cols));
            continue;
        }
        // Rows grow with the input actually read, never with the header.
        let mut cells = Vec::new();
        for r in 0..rows {
            let word = tokens.word(&format!("row {} of case {}", r, case))?;
            cells.push(parse_row(word, case, r, cols)?);
        }
        cases.push(Grid::from_rows(cells)?);
    }
    Ok(cases)
}

fn parse_row(word: &str, case: usize, row: usize, cols: usize) -> Result<Vec<Cell>> {
    let cells = word
        .chars()
        .enumerate()
        .map(|(col, ch)| {
            ch.to_digit(10)
                .map(|d| d as Cell)
                .ok_or(BitmapError::InvalidCell { case, row, col, found: ch })
        })
        .collect::<Result<Vec<Cell>>>()?;
    if cells.len() != cols {
        return Err(BitmapError::RowLength { case, row, expected: cols, found: cells.len() });
    }
    Ok(cells)
}

pub fn parse_cases_json(input: &str) -> anyhow::Result<Vec<Grid>> {
    let records: Vec<CaseRecord> = serde_json::from_str(input).context("malformed JSON case list")?;
    Ok(records.into_iter().map(|r| r.grid).collect())
}

/// Whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("cannot read {}", p)),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

/// One line per row, distances separated by single spaces.
///
/// With `mark_unreachable`, a grid computed without any source renders `-`
/// in every cell instead of a row of zeros.
pub fn render_text(dist: &DistanceGrid, mark_unreachable: bool) -> String {
    if dist.dimensions().1 == 0 {
        return String::new();
    }
    let undefined = mark_unreachable && !dist.has_sources();
    dist.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|d| if undefined { "-".to_string() } else { d.to_string() })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(results: &[DistanceGrid]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::distance_transform;

    #[test]
    fn parses_two_cases() {
        let input = "2\n2 2\n00\n01\n1 3 010\n";
        let cases = parse_cases(input).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].rows(), &[vec![0, 0], vec![0, 1]]);
        assert_eq!(cases[1].rows(), &[vec![0, 1, 0]]);
    }

    #[test]
    fn zero_sized_case_consumes_no_rows() {
        let cases = parse_cases("2 0 5 1 1 1").unwrap();
        assert_eq!(cases[0].dimensions(), (0, 5));
        assert_eq!(cases[1].rows(), &[vec![1]]);
    }

    #[test]
    fn zero_width_case_consumes_no_rows() {
        let cases = parse_cases("2 3 0 1 1 1").unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].dimensions(), (3, 0));
        assert_eq!(cases[1].rows(), &[vec![1]]);
    }

    #[test]
    fn huge_header_fails_on_rows_instead_of_allocating() {
        let err = parse_cases("1 100000000000000 100000000000000 0").unwrap_err();
        assert_eq!(
            err,
            BitmapError::RowLength { case: 1, row: 0, expected: 100_000_000_000_000, found: 1 }
        );
        assert!(matches!(
            parse_cases("1 100000000000000 2 01 10"),
            Err(BitmapError::UnexpectedEof(_))
        ));
        assert_eq!(parse_cases("1 100000000000000 0").unwrap()[0].dimensions(), (100_000_000_000_000, 0));
    }

    #[test]
    fn rejects_bad_digit() {
        let err = parse_cases("1 1 2 0x").unwrap_err();
        assert_eq!(err, BitmapError::InvalidCell { case: 1, row: 0, col: 1, found: 'x' });
    }

    #[test]
    fn rejects_short_and_long_rows() {
        let err = parse_cases("1 2 3 000 00").unwrap_err();
        assert_eq!(err, BitmapError::RowLength { case: 1, row: 1, expected: 3, found: 2 });
        let err = parse_cases("1 1 2 000").unwrap_err();
        assert_eq!(err, BitmapError::RowLength { case: 1, row: 0, expected: 2, found: 3 });
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(matches!(parse_cases("2 1 1 0"), Err(BitmapError::UnexpectedEof(_))));
        assert!(matches!(parse_cases(""), Err(BitmapError::UnexpectedEof(_))));
        assert!(matches!(parse_cases("-1"), Err(BitmapError::InvalidNumber(_))));
    }

    #[test]
    fn json_cases() {
        let grids = parse_cases_json(r#"[{"grid": [[0,1],[0,0]]}, {"grid": []}]"#).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].marked_cells().len(), 1);
        assert!(grids[1].is_empty());
        assert!(parse_cases_json(r#"[{"grid": [[0,1],[0]]}]"#).is_err());
    }

    #[test]
    fn renders_rows() {
        let g = Grid::from_rows(vec![vec![0, 0], vec![0, 1]]).unwrap();
        let d = distance_transform(&g);
        assert_eq!(render_text(&d, false), "2 1\n1 0");
        assert_eq!(render_text(&d, true), "2 1\n1 0");
    }

    #[test]
    fn renders_undefined_grid() {
        let d = distance_transform(&Grid::new(2, 2));
        assert_eq!(render_text(&d, false), "0 0\n0 0");
        assert_eq!(render_text(&d, true), "- -\n- -");
    }

    #[test]
    fn empty_grids_render_nothing() {
        assert_eq!(render_text(&distance_transform(&Grid::new(3, 0)), false), "");
        assert_eq!(render_text(&distance_transform(&Grid::new(0, 3)), true), "");
    }

    #[test]
    fn renders_json() {
        let d = distance_transform(&Grid::from_rows(vec![vec![1]]).unwrap());
        let json = render_json(&[d]).unwrap();
        let back: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0]["distances"][0][0], 0);
        assert_eq!(back[0]["rows"], 1);
        assert_eq!(back[0]["sources"], 1);
    }

    #[test]
    fn json_output_flags_sourceless_grid() {
        let d = distance_transform(&Grid::new(1, 2));
        let back: serde_json::Value = serde_json::from_str(&render_json(&[d]).unwrap()).unwrap();
        assert_eq!(back[0]["sources"], 0);
        assert_eq!(back[0]["distances"][0][1], 0);
    }
}
