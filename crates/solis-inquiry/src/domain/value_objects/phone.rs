//! Phone input masking
//!
//! Progressive display mask for Indian 10-digit landline/mobile numbers,
//! plus caret recovery so the UI can re-position the cursor after a
//! re-mask without timing hacks.

/// Phone mask: `(XXX) XXX-XXXX`.
///
/// All functions are pure. The canonical form of a phone value is its
/// digit string, truncated at [`PhoneMask::MAX_DIGITS`]; the display form
/// is derived from the canonical form, so `strip(mask(d)) == d` for any
/// digit string `d` of canonical length.
pub struct PhoneMask;

impl PhoneMask {
    /// Canonical phone numbers carry exactly this many digits.
    pub const MAX_DIGITS: usize = 10;

    /// Input placeholder shown by the UI.
    pub const PLACEHOLDER: &'static str = "(XXX) XXX-XXXX";

    /// Canonical digit form: every non-digit removed, truncated at ten.
    pub fn strip(value: &str) -> String {
        value
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(Self::MAX_DIGITS)
            .collect()
    }

    /// Display form for any raw input. Re-derives the canonical digits
    /// first, so pasting an already-formatted number is safe.
    pub fn mask(value: &str) -> String {
        let digits = Self::strip(value);
        match digits.len() {
            0..=3 => digits,
            4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
            _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        }
    }

    /// Caret index after a re-mask.
    ///
    /// Deletions keep the caret where it was; insertions advance it by the
    /// number of mask characters the re-mask introduced. The result is
    /// clamped to the new display length.
    pub fn recover_cursor(previous: &str, current: &str, caret: usize) -> usize {
        if current.len() < previous.len() {
            return caret.min(current.len());
        }

        let added = Self::mask_chars(current) as i64 - Self::mask_chars(previous) as i64;
        let advanced = if added > 0 { caret + added as usize } else { caret };
        advanced.min(current.len())
    }

    fn mask_chars(value: &str) -> usize {
        value.chars().filter(|c| !c.is_ascii_digit()).count()
    }
}
