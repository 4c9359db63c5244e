use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use platter_core::models::Ingredient;

/// Parse an ingredient argument like `"200 g flour"`, `"200g flour"`, or
/// `"2 eggs"` (no unit). The leading number is the amount, an attached or
/// following token is the unit, the rest is the name. Units are kept
/// verbatim — they are opaque labels to the shopping-list aggregator.
pub(crate) fn parse_ingredient(s: &str) -> Result<Ingredient> {
    let s = s.trim();
    let mut tokens = s.split_whitespace();
    let first = tokens.next().context("Empty ingredient")?;
    let rest: Vec<&str> = tokens.collect();

    // "200g flour" — amount with attached unit
    if let Some((amount, unit)) = split_number_unit(first) {
        if rest.is_empty() {
            bail!("Missing ingredient name in '{s}'. Use '<amount> <unit> <name>'");
        }
        return build_ingredient(amount, unit, &rest.join(" "), s);
    }

    // "200 g flour" or "2 eggs"
    let amount: f64 = first
        .parse()
        .with_context(|| format!("Invalid ingredient '{s}'. Use '<amount> <unit> <name>'"))?;
    match rest.len() {
        0 => bail!("Missing ingredient name in '{s}'. Use '<amount> <unit> <name>'"),
        1 => build_ingredient(amount, "", rest[0], s),
        _ => build_ingredient(amount, rest[0], &rest[1..].join(" "), s),
    }
}

fn build_ingredient(amount: f64, unit: &str, name: &str, original: &str) -> Result<Ingredient> {
    if amount <= 0.0 {
        bail!("Ingredient amount must be greater than 0 in '{original}'");
    }
    Ok(Ingredient {
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
    })
}

/// Split "500ml" or "2.5tbsp" into (500.0, "ml") or (2.5, "tbsp").
fn split_number_unit(s: &str) -> Option<(f64, &str)> {
    let idx = s.find(|c: char| c.is_alphabetic())?;
    if idx == 0 {
        return None;
    }
    let (num_part, unit_part) = s.split_at(idx);
    let amount: f64 = num_part.parse().ok()?;
    if unit_part.is_empty() {
        return None;
    }
    Some((amount, unit_part))
}

pub(crate) fn parse_date(date_str: Option<String>) -> Result<NaiveDate> {
    match date_str {
        None => Ok(Local::now().date_naive()),
        Some(s) => match s.as_str() {
            "today" => Ok(Local::now().date_naive()),
            "yesterday" => Ok(Local::now().date_naive() - chrono::Duration::days(1)),
            "tomorrow" => Ok(Local::now().date_naive() + chrono::Duration::days(1)),
            _ => NaiveDate::parse_from_str(&s, "%Y-%m-%d").with_context(|| {
                format!("Invalid date '{s}'. Use YYYY-MM-DD or today/yesterday/tomorrow")
            }),
        },
    }
}

pub(crate) fn json_error(message: &str) -> String {
    #[derive(Serialize)]
    struct CliError<'a> {
        error: &'a str,
    }
    serde_json::to_string(&CliError { error: message })
        .unwrap_or_else(|_| format!("{{\"error\":\"{message}\"}}"))
}

pub(crate) fn format_amount(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let end = s.char_indices().nth(max - 3).map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}
