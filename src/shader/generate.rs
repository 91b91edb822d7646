/// Where a node is rendered relative to its parent.
///
/// The parent decides the position before visiting a child. Operators
/// rendered as an `Operand` wrap themselves in parentheses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    /// Directly inside a block, on its own line.
    Statement,
    /// A context that never needs disambiguation: initializers, call
    /// arguments, array indices, return values, conditions and the operands
    /// of assignments.
    Expression,
    /// The operand of an arithmetic, comparison or unary operator.
    Operand,
}

/// Returned by a node to tell the enclosing block how to end the statement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Terminator {
    Semicolon,
    /// Compound statements (blocks, if/else) end themselves.
    None,
}

/// Output buffer and indentation threaded through the recursive generation.
#[derive(Debug, Default)]
pub struct GenerateCode {
    source: String,
    indent: usize,
}

impl GenerateCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    pub const fn indent_depth(&self) -> usize {
        self.indent
    }

    pub const fn increment_indent(&mut self) {
        self.indent = self.indent.saturating_add(1);
    }

    pub const fn decrement_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn push_str(&mut self, text: &str) {
        self.source.push_str(text);
    }

    pub fn push(&mut self, character: char) {
        self.source.push(character);
    }

    /// Writes one tab per indentation level.
    pub fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.source.push('\t');
        }
    }
}

/// Formats a float constant the way C's `%g` does and makes sure GLSL reads
/// it back as a float.
///
/// `3.0` becomes `3.0` (not `3`), `0.0001` stays `0.0001`, `1e-05` is left
/// alone because the exponent already marks it as a float.
pub fn format_float(value: f32) -> String {
    let mut text = format_g(f64::from(value));
    let is_special = !value.is_finite();
    if !is_special && !text.contains(['.', 'e']) {
        text.push_str(".0");
    }
    text
}

const G_PRECISION: i32 = 6;
const SIGNIFICANT_DECIMALS: usize = 5;

fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision can bump the exponent (9.999995 -> 10),
    // so the exponent is taken from the rounded scientific form.
    let scientific = format!("{:.*e}", SIGNIFICANT_DECIMALS, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..G_PRECISION).contains(&exponent) {
        let decimals = G_PRECISION.saturating_sub(1).saturating_sub(exponent);
        let fixed = format!("{:.*}", usize::try_from(decimals).unwrap_or(0), value);
        strip_trailing_zeros(&fixed).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
