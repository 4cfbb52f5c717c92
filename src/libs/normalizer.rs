//! Progressive formatting of time fields as they are typed.
//!
//! Users enter clock times as bare digits ("930", "0930", "17:3") and expect
//! the field to settle into the canonical `HH:MM` shape without having to type
//! the colon. [`normalize`] re-runs on every edit of a field and returns the
//! text that should be stored back into it.
//!
//! ## Rules
//!
//! | Digits after stripping | Result                                   |
//! |------------------------|------------------------------------------|
//! | 0                      | `""` (field not entered yet)             |
//! | 1-2                    | digits unchanged                         |
//! | 3, first two > 23      | `0H:MM` (e.g. "545" → "05:45")           |
//! | 3, first two ≤ 23      | `HH:M` (e.g. "123" → "12:3", partial)    |
//! | 4                      | `HH:MM`, even when out of range          |
//!
//! The three-digit case cannot know whether "123" means 1:23 or 12:3. The
//! `> 23` test on the leading pair is the only signal available.
//!
//! The output is not validated. "2530" becomes "25:30"; flagging it is the job
//! of [`crate::libs::week`].

/// Maximum number of digits that make up a clock time.
pub const MAX_DIGITS: usize = 4;

/// Largest hour accepted as the leading pair of a three-digit entry.
const MAX_HOUR: u32 = 23;

/// Reshapes raw field text into canonical or partial `HH:MM` text.
///
/// Every non-digit character is dropped and only the first four digits are
/// kept, so already-canonical input passes through unchanged.
///
/// # Examples
///
/// ```rust
/// use weekhours::libs::normalizer::normalize;
///
/// assert_eq!(normalize("09:30"), "09:30");
/// assert_eq!(normalize("545"), "05:45");
/// assert_eq!(normalize("123"), "12:3");
/// assert_eq!(normalize("2530"), "25:30");
/// assert_eq!(normalize("ab"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(MAX_DIGITS).collect();

    match digits.len() {
        3 => {
            let (hour, minute) = digits.split_at(2);
            let bytes = hour.as_bytes();
            let leading = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
            if leading > MAX_HOUR {
                let (h, m) = digits.split_at(1);
                format!("0{}:{}", h, m)
            } else {
                format!("{}:{}", hour, minute)
            }
        }
        4 => {
            let (hour, minute) = digits.split_at(2);
            format!("{}:{}", hour, minute)
        }
        _ => digits,
    }
}
