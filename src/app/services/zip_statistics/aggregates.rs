//! ZIP-joined aggregate computations
//!
//! Every function here is a pure read over already-loaded records and makes
//! a single pass over each input. Missing data never raises: a ZIP code with
//! nothing to aggregate yields the statistic's zero value.

use std::collections::{BTreeMap, HashMap};

use crate::app::models::{AreaRange, PopulationRecord, PropertyRecord, ViolationRecord};

/// Fines per capita keyed by ZIP code
pub type FinesPerCapita = BTreeMap<String, f64>;

/// Round half-up, then convert to an integer
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Map each ZIP code to its population
///
/// When a ZIP code appears on several lines the last one wins.
pub fn population_by_zip(population: &[PopulationRecord]) -> HashMap<&str, u64> {
    population
        .iter()
        .map(|record| (record.zip_code(), record.population()))
        .collect()
}

/// Sum of population counts across every record
pub fn total_population(population: &[PopulationRecord]) -> u64 {
    population.iter().map(PopulationRecord::population).sum()
}

/// Total fines per ZIP code divided by that ZIP code's population
///
/// Only tickets whose trimmed jurisdiction equals `jurisdiction` exactly are
/// counted. ZIP codes with zero total fines, zero population or no population
/// entry are left out of the result.
pub fn fines_per_capita(
    violations: &[ViolationRecord],
    population: &[PopulationRecord],
    jurisdiction: &str,
) -> FinesPerCapita {
    let mut fines_by_zip: HashMap<&str, f64> = HashMap::new();
    for violation in violations {
        if violation.jurisdiction().trim() != jurisdiction {
            continue;
        }
        let zip_code = violation.zip_code().trim();
        if zip_code.is_empty() {
            continue;
        }
        *fines_by_zip.entry(zip_code).or_insert(0.0) += violation.fine();
    }

    let population_by_zip = population_by_zip(population);
    fines_by_zip
        .into_iter()
        .filter(|(_, total_fine)| *total_fine != 0.0)
        .filter_map(|(zip_code, total_fine)| {
            let population = population_by_zip.get(zip_code).copied().unwrap_or(0);
            (population > 0).then(|| (zip_code.to_string(), total_fine / population as f64))
        })
        .collect()
}

/// Mean market value of properties in a ZIP code, rounded
pub fn average_market_value(properties: &[PropertyRecord], zip_code: &str) -> i64 {
    mean(
        properties
            .iter()
            .filter(|p| p.in_zip(zip_code))
            .filter_map(PropertyRecord::market_value),
    )
}

/// Mean livable area of properties in a ZIP code, rounded
pub fn average_livable_area(properties: &[PropertyRecord], zip_code: &str) -> i64 {
    mean(
        properties
            .iter()
            .filter(|p| p.in_zip(zip_code))
            .filter_map(PropertyRecord::total_livable_area),
    )
}

/// Total market value in a ZIP code divided by its population, rounded
///
/// Returns 0 when the ZIP code has no population entry or a population of 0.
pub fn market_value_per_capita(
    properties: &[PropertyRecord],
    population: &[PopulationRecord],
    zip_code: &str,
) -> i64 {
    let population = population_by_zip(population)
        .get(zip_code)
        .copied()
        .unwrap_or(0);
    if population == 0 {
        return 0;
    }

    let total_value: f64 = properties
        .iter()
        .filter(|p| p.in_zip(zip_code))
        .filter_map(PropertyRecord::market_value)
        .sum();
    round_half_up(total_value / population as f64)
}

/// Total market value over total livable area in a ZIP code, rounded
///
/// Only rows carrying both a market value and a positive area contribute,
/// to the numerator and denominator alike.
pub fn market_value_per_square_foot(properties: &[PropertyRecord], zip_code: &str) -> i64 {
    let (total_value, total_area) = properties
        .iter()
        .filter(|p| p.in_zip(zip_code))
        .filter_map(|p| match (p.market_value(), p.total_livable_area()) {
            (Some(value), Some(area)) if area > 0.0 => Some((value, area)),
            _ => None,
        })
        .fold((0.0, 0.0), |(value_sum, area_sum), (value, area)| {
            (value_sum + value, area_sum + area)
        });

    if total_area == 0.0 {
        return 0;
    }
    round_half_up(total_value / total_area)
}

/// Smallest and largest livable area in a ZIP code
///
/// `None` when no property in the ZIP code has a livable area.
pub fn livable_area_range(properties: &[PropertyRecord], zip_code: &str) -> Option<AreaRange> {
    properties
        .iter()
        .filter(|p| p.in_zip(zip_code))
        .filter_map(PropertyRecord::total_livable_area)
        .fold(None, |range: Option<AreaRange>, area| {
            Some(match range {
                Some(range) => range.include(area),
                None => AreaRange::single(area),
            })
        })
}

fn mean(values: impl Iterator<Item = f64>) -> i64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0;
    }
    round_half_up(sum / count as f64)
}
