use chrono::NaiveDate;
use underwriting::CodeValidator;

/// Format-only stand-in for the national registry's code validator. The real
/// checksum component lives outside this repository; eleven ASCII digits is
/// enough to drive the engine from a terminal.
pub(crate) struct RegistryFormatCheck;

impl CodeValidator for RegistryFormatCheck {
    fn is_well_formed(&self, code: &str) -> bool {
        code.len() == 11 && code.bytes().all(|byte| byte.is_ascii_digit())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("invalid date {raw:?}: {err}"))
}
