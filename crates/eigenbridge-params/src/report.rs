// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::field::FieldTag;
use crate::params::EigenParams;

const RULE_WIDTH: usize = 72;

/// A printable table of every tagged field of a record.
///
/// Values are read through the tagged accessors, so the report shows exactly
/// what a foreign caller would read.
#[derive(Debug, Clone, Copy)]
pub struct ParamsReport<'a> {
    params: &'a EigenParams,
}

impl EigenParams {
    /// Returns a report of all tagged fields.
    #[inline]
    pub fn report(&self) -> ParamsReport<'_> {
        ParamsReport { params: self }
    }
}

impl std::fmt::Display for ParamsReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<42} | {}", "Field", "Value")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for tag in FieldTag::ALL {
            match self.params.get_field(*tag) {
                Ok(value) => writeln!(f, "{:<42} | {}", tag.as_str(), value)?,
                Err(_) => writeln!(f, "{:<42} | <unavailable>", tag.as_str())?,
            }
        }

        writeln!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Target;

    #[test]
    fn test_report_lists_every_field() {
        let params = EigenParams::new();
        let rendered = params.report().to_string();

        for tag in FieldTag::ALL {
            assert!(
                rendered.lines().any(|l| l.starts_with(tag.as_str())
                    && l[tag.as_str().len()..].trim_start().starts_with('|')),
                "missing row for `{}`",
                tag
            );
        }
        assert_eq!(rendered.lines().count(), FieldTag::ALL.len() + 3);
    }

    #[test]
    fn test_report_shows_current_values() {
        let mut params = EigenParams::new();
        params.n = 2048;
        params.target = Target::LargestAbs;
        let rendered = params.report().to_string();

        assert!(rendered.contains(&format!("{:<42} | 2048", "n")));
        assert!(rendered.contains(&format!("{:<42} | largest_abs", "target")));
        assert!(rendered.contains(&format!("{:<42} | <null>", "matrix_matvec")));
        assert!(rendered.contains(&format!("{:<42} | <stdout>", "output_file")));
    }

    #[test]
    fn test_report_includes_solver_statistics() {
        let mut params = EigenParams::new();
        params.stats.num_matvecs = 140;
        params.stats.elapsed_time = 1.25;
        let rendered = params.report().to_string();

        assert!(rendered.contains(&format!("{:<42} | 140", "stats.num_matvecs")));
        assert!(rendered.contains(&format!("{:<42} | 1.25e0", "stats.elapsed_time")));
    }

    #[test]
    fn test_report_marks_unreadable_fields() {
        let mut params = EigenParams::new();
        params.num_target_shifts = 2;
        let rendered = params.report().to_string();
        assert!(rendered.contains(&format!("{:<42} | <unavailable>", "target_shifts")));
    }
}
