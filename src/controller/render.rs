//! Fixed result template.

use std::fmt;

use crate::model::CalculationResult;

/// Heading of the result block.
pub const RESULT_HEADING: &str = "РЕЗУЛЬТАТИ РОЗРАХУНКУ";

/// One line of a rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLine {
    Heading(&'static str),
    /// A labelled figure, value already formatted to two decimals.
    Figure {
        label: &'static str,
        value: String,
        unit: &'static str,
    },
    Rule,
    Text(String),
}

#[mutants::skip]
impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(h) => f.write_str(h),
            Self::Figure { label, value, unit } => write!(f, "{label} {value} {unit}"),
            Self::Rule => f.write_str("----"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// A result rendered into display lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedResult {
    lines: Vec<ResultLine>,
}

impl RenderedResult {
    pub fn lines(&self) -> &[ResultLine] {
        &self.lines
    }
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

fn figure(label: &'static str, value: f64, unit: &'static str) -> ResultLine {
    ResultLine::Figure {
        label,
        value: format!("{value:.2}"),
        unit,
    }
}

/// Renders a result. Flight-time lines appear only for non-null values.
pub fn render_result(result: &CalculationResult) -> RenderedResult {
    let mut lines = vec![
        ResultLine::Heading(RESULT_HEADING),
        figure("Необхідна тяга:", result.required_thrust, "Н"),
        figure("Необхідна потужність:", result.required_power, "Вт"),
        figure(
            "Теоретична швидкість повітря гвинтом:",
            result.prop_theoretical_speed,
            "м/с",
        ),
    ];
    if let Some(t) = result.flight_time_electric {
        lines.push(figure("Час польоту (електро):", t, "год"));
    }
    if let Some(t) = result.flight_time_ice {
        lines.push(figure("Час польоту (ДВЗ):", t, "год"));
    }
    lines.push(ResultLine::Rule);
    lines.extend(
        [
            &result.thrust_explained,
            &result.power_explained,
            &result.prop_speed_explained,
            &result.flight_time_explained,
        ]
        .map(|text| ResultLine::Text(text.clone())),
    );
    RenderedResult { lines }
}
