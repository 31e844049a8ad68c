/// Format a number the way labels and notation show it: integers without a
/// decimal point, everything else with the shortest exact representation.
pub fn format_number(val: f64) -> String {
    if val == 0.0 {
        // drop the sign of -0
        return String::from("0");
    }
    if val.fract() == 0.0 && val.abs() < 1e15 {
        format!("{}", val as i64)
    } else {
        format!("{val}")
    }
}

/// Share of correct answers, rounded to a whole percent
pub fn percentage(correct: u32, total: u32) -> u32 {
    match total {
        0 => 0,
        total => ((f64::from(correct) / f64::from(total)) * 100.0).round() as u32,
    }
}
