//! Demographic derivation from the personal code's digit fields.

use chrono::NaiveDate;

use super::domain::{PersonalCode, Sex};

/// Well-formedness check supplied by the issuing registry's validation
/// component. The engine treats it as a black box; checksum rules are not
/// reimplemented here.
pub trait CodeValidator: Send + Sync {
    fn is_well_formed(&self, code: &str) -> bool;
}

/// Field-level failure while reading digit positions out of a code.
///
/// A correct [`CodeValidator`] never lets a code with these defects through;
/// they surface only when a host wires in a permissive stand-in, so the
/// engine folds them into the invalid-code denial rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeFieldError {
    #[error("code is shorter than {expected} digits")]
    Truncated { expected: usize },
    #[error("digit field at positions {start}..{end} is not numeric")]
    NotNumeric { start: usize, end: usize },
    #[error("digit fields name an impossible calendar date {year:04}-{month:02}-{day:02}")]
    ImpossibleDate { year: i32, month: u32, day: u32 },
}

pub(crate) const CODE_LEN: usize = 11;

fn digit_field(code: &str, start: usize, end: usize) -> Result<u32, CodeFieldError> {
    let field = code
        .get(start..end)
        .ok_or(CodeFieldError::Truncated { expected: CODE_LEN })?;
    field
        .parse::<u32>()
        .map_err(|_| CodeFieldError::NotNumeric { start, end })
}

/// Birth date encoded in the first seven digits: century-and-sex indicator,
/// then two-digit year, month, and day fields.
pub fn birth_date(code: &PersonalCode) -> Result<NaiveDate, CodeFieldError> {
    let code = code.as_str();
    let century = match digit_field(code, 0, 1)? {
        1 | 2 => 1800,
        3 | 4 => 1900,
        // 5 and 6 mark the 2000s. A well-formed code carries nothing else in
        // this position, so other values share the branch instead of getting
        // their own rejection path.
        _ => 2000,
    };
    let year = century + digit_field(code, 1, 3)? as i32;
    let month = digit_field(code, 3, 5)?;
    let day = digit_field(code, 5, 7)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CodeFieldError::ImpossibleDate { year, month, day })
}

/// Sex encoded in the first digit: odd for male, even for female.
pub fn sex(code: &PersonalCode) -> Result<Sex, CodeFieldError> {
    let indicator = digit_field(code.as_str(), 0, 1)?;
    Ok(if indicator % 2 == 1 {
        Sex::Male
    } else {
        Sex::Female
    })
}

/// Sequence segment: the last four digits as one integer.
pub(crate) fn segment(code: &PersonalCode) -> Result<u32, CodeFieldError> {
    digit_field(code.as_str(), CODE_LEN - 4, CODE_LEN)
}
