//! Conversion of catalogue field text into measured values.
//!
//! Empty fields (e.g. `<mass upperlimit="2"/>`) and unparseable numbers become
//! the not-a-number sentinel; the latter are logged.

use log::warn;
use units::{Quantity, Unit};

use crate::record::Field;

/// Plain number; the sentinel when empty or unparseable
pub(crate) fn number(field: &Field) -> f64 {
    let text = field.text.trim();
    if text.is_empty() {
        return f64::NAN;
    }
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!("unparseable <{}> value '{}'", field.tag, text);
            f64::NAN
        }
    }
}

/// Number expressed in `unit`.
///
/// A `unit` attribute of the same dimension is honoured by rescaling; one
/// that does not parse or does not fit is reported and the value dropped.
pub(crate) fn measured(field: &Field, unit: Unit) -> f64 {
    let value = number(field);
    let Some(symbol) = field.unit.as_deref() else {
        return value;
    };
    match symbol.parse::<Unit>().and_then(|u| Quantity::new(value, u).rescale(unit)) {
        Ok(quantity) => quantity.value,
        Err(e) => {
            warn!("<{}>: {e}", field.tag);
            f64::NAN
        }
    }
}

/// The unit named by a field's `unit` attribute, if it parses
pub(crate) fn declared_unit(field: &Field) -> Option<Unit> {
    field.unit.as_deref().and_then(|symbol| symbol.parse().ok())
}

pub(crate) fn year(field: &Field) -> Option<i32> {
    let text = field.text.trim();
    if text.is_empty() {
        return None;
    }
    let year = text.parse::<i32>().ok();
    if year.is_none() {
        warn!("unparseable <{}> year '{}'", field.tag, text);
    }
    year
}

/// `1` (or `true`) marks a set flag
pub(crate) fn flag(field: &Field) -> bool {
    matches!(field.text.trim(), "1" | "true" | "True" | "yes")
}

pub(crate) fn text(field: &Field) -> Option<String> {
    let text = field.text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Sexagesimal `"dd mm ss.s"` (spaces or colons, optional sign) as a decimal
/// number of the leading unit. A bare decimal number is accepted as is.
pub(crate) fn sexagesimal(field: &Field) -> f64 {
    let text = field.text.trim();
    if text.is_empty() {
        return f64::NAN;
    }
    match parse_sexagesimal(text) {
        Some(value) => value,
        None => {
            warn!("unparseable <{}> coordinate '{}'", field.tag, text);
            f64::NAN
        }
    }
}

fn parse_sexagesimal(text: &str) -> Option<f64> {
    let negative = text.starts_with('-');
    let mut parts = text
        .trim_start_matches(['+', '-'])
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|part| !part.is_empty())
        .map(str::parse::<f64>);

    let mut value = parts.next()?.ok()?;
    let mut scale = 1.0;
    for part in parts.by_ref().take(2) {
        scale /= 60.0;
        value += part.ok()? * scale;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(if negative { -value } else { value })
}
