use std::str::FromStr;

/// Decimal conventions used when reading and writing program operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl NumberFormat {
    /// `1234.5`
    pub fn new() -> NumberFormat {
        NumberFormat { decimal_separator: '.', grouping_separator: None }
    }

    /// `1.234,5`
    pub fn comma() -> NumberFormat {
        NumberFormat { decimal_separator: ',', grouping_separator: Some('.') }
    }

    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let mut normal = String::with_capacity(text.len());
        for c in text.chars() {
            if Some(c) == self.grouping_separator {
                continue;
            }
            normal.push(if c == self.decimal_separator { '.' } else { c });
        }
        f64::from_str(&normal).ok()
    }

    // Display on f64 is already the shortest text that parses back
    pub fn render(&self, value: f64) -> String {
        let text = value.to_string();
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

///////////////////////////////////////////////////////////////////////////////
