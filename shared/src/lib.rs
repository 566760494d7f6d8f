use serde::{Deserialize, Serialize};

/// How the integer part of a rendered amount is grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupingStyle {
    /// No grouping; the integer digits are rendered as-is
    None,
    /// Groups of three digits separated by the configured grouping separator
    Thousands,
}

/// Rendering configuration for a money input field.
///
/// The reference behavior is the `Default` impl: '.' as decimal separator,
/// ',' thousands grouping, two fractional digits. All state lives here;
/// there is no process-wide formatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Character accepted and rendered as the decimal separator
    pub decimal_separator: char,
    /// Character inserted between digit groups in the integer part
    pub grouping_separator: char,
    /// Grouping style for the integer part
    pub grouping: GroupingStyle,
    /// Number of fractional digits kept while editing and shown at mount
    pub fraction_digits: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            grouping: GroupingStyle::Thousands,
            fraction_digits: 2,
        }
    }
}

/// Reduce a raw input fragment to ASCII digits and the decimal separator.
///
/// Order and all occurrences are preserved; in particular duplicate
/// separators are NOT removed here, that is left to the formatter's
/// truncate/parse steps.
pub fn sanitize(input: &str, decimal_separator: char) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == decimal_separator)
        .collect()
}

/// Pure transformer between what a money field displays and the canonical
/// minor-units amount.
///
/// The field owns the displayed string; on every edit it hands the previous
/// displayed text and the raw post-edit text to [`transition`], then reads
/// the canonical value back with [`derive_minor_units`]. All three
/// operations are total: a malformed edit reverts to the previous text and
/// an unparsable displayed value derives to 0, no error ever crosses this
/// boundary.
///
/// [`transition`]: MoneyFormatter::transition
/// [`derive_minor_units`]: MoneyFormatter::derive_minor_units
#[derive(Debug, Clone, Default)]
pub struct MoneyFormatter {
    config: FormatterConfig,
}

impl MoneyFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Produce the next displayed text from the previous displayed text and
    /// the raw text after a single edit.
    ///
    /// Empty input resets to "0". Otherwise the raw text is sanitized, its
    /// fraction truncated to the configured precision, and the result
    /// re-rendered with grouping. A trailing separator ("12.") or trailing
    /// separator-zero ("12.0") survives the round-trip so mid-edit cursor
    /// state looks unchanged. If the normalized text does not parse as a
    /// number the edit is rejected and `old` is returned unchanged.
    pub fn transition(&self, old: &str, raw_new: &str) -> String {
        if raw_new.is_empty() {
            return "0".to_string();
        }

        let sep = self.config.decimal_separator;
        let sanitized = sanitize(raw_new, sep);
        let normalized = self.truncate_fraction(&sanitized);

        // Recorded before parsing so the punctuation the numeric round-trip
        // drops can be re-appended afterwards.
        let ends_with_separator = normalized.ends_with(sep);
        let mut separator_zero = String::with_capacity(sep.len_utf8() + 1);
        separator_zero.push(sep);
        separator_zero.push('0');
        let ends_with_separator_zero = normalized.ends_with(&separator_zero);

        match self.parse_amount(normalized) {
            Some(number) => {
                let mut result = self.format_grouped(number);
                if ends_with_separator {
                    result.push(sep);
                } else if ends_with_separator_zero {
                    result.push_str(&separator_zero);
                }
                result
            }
            // Silent rejection: the field keeps showing what it showed
            // before this keystroke.
            None => old.to_string(),
        }
    }

    /// Render an externally supplied minor-units amount as the initial
    /// displayed text, with the full fixed fraction ("1.50", not "1.5").
    ///
    /// Used once when the field mounts; the result is injected directly and
    /// not re-normalized through [`MoneyFormatter::transition`].
    pub fn initial_display(&self, minor_units: i64) -> String {
        let value = minor_units as f64 / self.scale();
        self.format_fixed(value)
    }

    /// Project a displayed text onto the canonical integer amount in minor
    /// units, truncating toward zero. Unparsable text derives to 0.
    pub fn derive_minor_units(&self, displayed: &str) -> i64 {
        let cleaned = sanitize(displayed, self.config.decimal_separator);
        let value = self.parse_amount(&cleaned).unwrap_or(0.0);
        // Saturating float-to-int cast covers the overflow edge cases.
        (value * self.scale()) as i64
    }

    fn scale(&self) -> f64 {
        10f64.powi(self.config.fraction_digits as i32)
    }

    /// Keep at most `fraction_digits` characters after the *first*
    /// separator. The kept window may itself contain a second separator
    /// ("1.2.3" truncates to "1.2."), which then fails to parse and reverts
    /// the edit; a second separator beyond the window is silently cut
    /// ("1.23.4" truncates to "1.23"). Both are long-standing behavior.
    fn truncate_fraction<'a>(&self, value: &'a str) -> &'a str {
        let sep = self.config.decimal_separator;
        match value.find(sep) {
            Some(position) => {
                let fraction_start = position + sep.len_utf8();
                let tail = &value[fraction_start..];
                match tail.char_indices().nth(self.config.fraction_digits) {
                    Some((offset, _)) => &value[..fraction_start + offset],
                    None => value,
                }
            }
            None => value,
        }
    }

    fn parse_amount(&self, value: &str) -> Option<f64> {
        let sep = self.config.decimal_separator;
        if sep == '.' {
            value.parse().ok()
        } else {
            value.replace(sep, ".").parse().ok()
        }
    }

    /// Render with grouping and a minimum of zero fractional digits: whole
    /// values come out without a separator ("1,200"), fractional values
    /// with their significant digits only ("0.5", never "0.50").
    fn format_grouped(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.config.fraction_digits, value);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (fixed.as_str(), ""),
        };
        let frac = frac_part.trim_end_matches('0');

        let mut rendered = self.group_integer(int_part);
        if !frac.is_empty() {
            rendered.push(self.config.decimal_separator);
            rendered.push_str(frac);
        }
        rendered
    }

    /// Render with exactly `fraction_digits` fractional digits and no
    /// grouping; the mount-time representation.
    fn format_fixed(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.config.fraction_digits, value);
        let sep = self.config.decimal_separator;
        if sep == '.' {
            fixed
        } else {
            fixed.replace('.', &sep.to_string())
        }
    }

    fn group_integer(&self, digits: &str) -> String {
        match self.config.grouping {
            GroupingStyle::None => digits.to_string(),
            GroupingStyle::Thousands => {
                let (sign, digits) = match digits.strip_prefix('-') {
                    Some(rest) => ("-", rest),
                    None => ("", digits),
                };
                let mut grouped =
                    String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
                grouped.push_str(sign);
                for (i, ch) in digits.chars().enumerate() {
                    if i > 0 && (digits.len() - i) % 3 == 0 {
                        grouped.push(self.config.grouping_separator);
                    }
                    grouped.push(ch);
                }
                grouped
            }
        }
    }
}
