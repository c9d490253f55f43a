//! Time formatting utilities.

use chrono::Local;

/// Formats the current local time according to the specified format string.
///
/// The format string follows the same syntax as `chrono::format::strftime`.
///
/// # Examples
///
/// ```
/// use cutil::time::local_now;
///
/// let formatted = local_now("%H:%M:%S");
/// assert_eq!(formatted.len(), 8);
/// ```
pub fn local_now(format: &str) -> String {
    Local::now().format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_now() {
        let ts = local_now("%H:%M:%S");
        assert_eq!(8, ts.len());
        assert_eq!(2, ts.matches(':').count());

        assert_eq!(10, local_now("%Y-%m-%d").len());
    }
}
