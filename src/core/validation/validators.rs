//! Reusable field validators
//!
//! Each validator returns `Ok(())` or a human-readable message. They are
//! combined by [`FieldChecks`](super::FieldChecks).

/// Validator: text is present and not only whitespace
pub fn non_blank(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(format!("'{}' must not be empty", field)),
        None => Err(format!("'{}' is required", field)),
    }
}

/// Validator: number is present and strictly positive
pub fn positive(field: &str, value: Option<f64>) -> Result<(), String> {
    match value {
        Some(num) if num.is_finite() && num > 0.0 => Ok(()),
        Some(num) => Err(format!("'{}' must be positive (value: {})", field, num)),
        None => Err(format!("'{}' is required", field)),
    }
}

/// Validator: number is zero or more
pub fn non_negative(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("'{}' must not be negative (value: {})", field, value))
    }
}

/// Validator: integer is at least `min`
pub fn min_value(field: &str, value: u32, min: u32) -> Result<(), String> {
    if value < min {
        Err(format!("'{}' must be at least {} (value: {})", field, min, value))
    } else {
        Ok(())
    }
}

/// Validator: sequence is present and holds at least `min` elements
pub fn min_items(field: &str, len: Option<usize>, min: usize) -> Result<(), String> {
    match len {
        Some(n) if n >= min => Ok(()),
        Some(n) => Err(format!(
            "'{}' must contain at least {} item(s) (count: {})",
            field, min, n
        )),
        None => Err(format!("'{}' is required", field)),
    }
}
