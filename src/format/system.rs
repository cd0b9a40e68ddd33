use super::number::compact;

/// `2x + 3y - z`. Zero coefficients are kept so every column stays visible.
pub fn term_list(coefficients: &[f64], variables: &[String]) -> String {
    let mut out = String::new();
    for (i, (coeff, var)) in coefficients.iter().zip(variables).enumerate() {
        let negative = *coeff < 0.0;
        let magnitude = coeff.abs();
        if i == 0 {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        if magnitude != 1.0 {
            out.push_str(&compact(magnitude));
        }
        out.push_str(var);
    }
    out
}

/// ` + 3y`, ` - y`, ` - 2`: one term continuing an expression. An empty
/// `variable` always prints the magnitude.
pub fn signed_term(coefficient: f64, variable: &str) -> String {
    let op = if coefficient < 0.0 { '-' } else { '+' };
    let magnitude = coefficient.abs();
    if variable.is_empty() || magnitude != 1.0 {
        format!(" {op} {}{variable}", compact(magnitude))
    } else {
        format!(" {op} {variable}")
    }
}

pub fn equation(coefficients: &[f64], variables: &[String], constant: f64) -> String {
    format!(
        "{} = {}",
        term_list(coefficients, variables),
        compact(constant)
    )
}

/// `Row 2: [1, -1] = 1`, with a 1-based row index.
pub fn row(index: usize, coefficients: &[f64], constant: f64) -> String {
    let cells: Vec<String> = coefficients.iter().copied().map(compact).collect();
    format!(
        "Row {}: [{}] = {}",
        index + 1,
        cells.join(", "),
        compact(constant)
    )
}

pub fn matrix(a: &[Vec<f64>], b: &[f64]) -> Vec<String> {
    a.iter()
        .zip(b)
        .enumerate()
        .map(|(i, (coefficients, constant))| row(i, coefficients, *constant))
        .collect()
}
