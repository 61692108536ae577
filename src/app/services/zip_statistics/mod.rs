//! ZIP code statistics over the three municipal datasets
//!
//! `ZipStatistics` answers the seven supported queries. Every call loads the
//! datasets it needs fresh from disk and then runs the matching pure function
//! from [`aggregates`]. Average market value is the exception: its results are
//! memoized per ZIP code in a [`MarketValueCache`] owned by the service.
//!
//! # Examples
//!
//! ```no_run
//! use zipstats::{DatasetPaths, Statistic, ZipStatistics};
//!
//! # async fn example() -> zipstats::Result<()> {
//! let paths = DatasetPaths::new("parking.csv", "properties.csv", "population.txt");
//! let stats = ZipStatistics::new(paths);
//!
//! let population = stats.total_population().await?;
//! let average = stats.evaluate(Statistic::AverageMarketValue, Some("19103")).await?;
//! println!("{} people, {:?}", population, average);
//! # Ok(())
//! # }
//! ```

pub mod aggregates;
pub mod query_cache;

#[cfg(test)]
pub mod tests;

use serde::Serialize;
use std::fmt;
use tracing::debug;

pub use aggregates::FinesPerCapita;
pub use query_cache::{CacheStats, MarketValueCache};

use crate::app::models::AreaRange;
use crate::app::services::dataset_loader::{
    DatasetPaths, load_population, load_properties, load_violations,
};
use crate::config::Config;
use crate::constants::DEFAULT_JURISDICTION;
use crate::{Error, Result};

/// The queries the service can answer, numbered as in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    TotalPopulation,
    FinesPerCapita,
    AverageMarketValue,
    AverageLivableArea,
    MarketValuePerCapita,
    MarketValuePerSquareFoot,
    LivableAreaRange,
}

impl Statistic {
    /// Every statistic in menu order
    pub const ALL: [Statistic; 7] = [
        Statistic::TotalPopulation,
        Statistic::FinesPerCapita,
        Statistic::AverageMarketValue,
        Statistic::AverageLivableArea,
        Statistic::MarketValuePerCapita,
        Statistic::MarketValuePerSquareFoot,
        Statistic::LivableAreaRange,
    ];

    /// Look up a statistic by its menu number (1-7)
    pub fn from_menu_number(number: u8) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
            .ok_or_else(|| {
                Error::invalid_query(format!(
                    "Unknown statistic {}, expected a number from 1 to {}",
                    number,
                    Self::ALL.len()
                ))
            })
    }

    pub fn menu_number(self) -> u8 {
        match self {
            Statistic::TotalPopulation => 1,
            Statistic::FinesPerCapita => 2,
            Statistic::AverageMarketValue => 3,
            Statistic::AverageLivableArea => 4,
            Statistic::MarketValuePerCapita => 5,
            Statistic::MarketValuePerSquareFoot => 6,
            Statistic::LivableAreaRange => 7,
        }
    }

    /// Whether the statistic is computed for a single ZIP code
    pub fn requires_zip(self) -> bool {
        !matches!(
            self,
            Statistic::TotalPopulation | Statistic::FinesPerCapita
        )
    }

    /// Menu label
    pub fn description(self) -> &'static str {
        match self {
            Statistic::TotalPopulation => "Total population for all ZIP Codes",
            Statistic::FinesPerCapita => "Parking fines per capita for each ZIP Code",
            Statistic::AverageMarketValue => "Average market value for residences in a ZIP Code",
            Statistic::AverageLivableArea => {
                "Average total livable area for residences in a ZIP Code"
            }
            Statistic::MarketValuePerCapita => "Residential market value per capita for a ZIP Code",
            Statistic::MarketValuePerSquareFoot => {
                "Average market value per square foot for a ZIP Code"
            }
            Statistic::LivableAreaRange => "Minimum and maximum livable area for a ZIP Code",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Value produced by a statistic
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StatisticResult {
    /// Unrounded total count
    Total(u64),
    /// Rounded per-ZIP value
    Scalar(i64),
    /// One ratio per ZIP code
    PerZip(FinesPerCapita),
    /// Smallest and largest value, if any were found
    Range(Option<AreaRange>),
}

/// Aggregate query service over one set of dataset files
#[derive(Debug)]
pub struct ZipStatistics {
    paths: DatasetPaths,
    jurisdiction: String,
    cache_enabled: bool,
    market_value_cache: MarketValueCache,
}

impl ZipStatistics {
    pub fn new(paths: DatasetPaths) -> Self {
        Self {
            paths,
            jurisdiction: DEFAULT_JURISDICTION.to_string(),
            cache_enabled: true,
            market_value_cache: MarketValueCache::new(),
        }
    }

    /// Build a service using the query and cache settings from `config`
    pub fn from_config(paths: DatasetPaths, config: &Config) -> Self {
        let stats = Self::new(paths).with_jurisdiction(config.query.jurisdiction.trim());
        if config.cache.enabled {
            stats
        } else {
            stats.without_cache()
        }
    }

    /// Count fines from a different plate-issuing jurisdiction
    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = jurisdiction.into();
        self
    }

    /// Recompute average market value on every call
    pub fn without_cache(mut self) -> Self {
        self.cache_enabled = false;
        self
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.market_value_cache.stats()
    }

    /// Run a statistic by kind
    ///
    /// `zip_code` is ignored for statistics that cover every ZIP code.
    pub async fn evaluate(
        &self,
        statistic: Statistic,
        zip_code: Option<&str>,
    ) -> Result<StatisticResult> {
        debug!("Evaluating {:?} for ZIP {:?}", statistic, zip_code);

        Ok(match statistic {
            Statistic::TotalPopulation => StatisticResult::Total(self.total_population().await?),
            Statistic::FinesPerCapita => StatisticResult::PerZip(self.fines_per_capita().await?),
            Statistic::AverageMarketValue => {
                StatisticResult::Scalar(self.average_market_value(zip_code).await?)
            }
            Statistic::AverageLivableArea => {
                StatisticResult::Scalar(self.average_livable_area(zip_code).await?)
            }
            Statistic::MarketValuePerCapita => {
                StatisticResult::Scalar(self.market_value_per_capita(zip_code).await?)
            }
            Statistic::MarketValuePerSquareFoot => {
                StatisticResult::Scalar(self.market_value_per_square_foot(zip_code).await?)
            }
            Statistic::LivableAreaRange => {
                StatisticResult::Range(self.livable_area_range(zip_code).await?)
            }
        })
    }

    /// Total population across all ZIP codes
    pub async fn total_population(&self) -> Result<u64> {
        let population = load_population(&self.paths.population).await?.into_records();
        Ok(aggregates::total_population(&population))
    }

    /// Total fines per capita for each ZIP code with tickets from the configured jurisdiction
    pub async fn fines_per_capita(&self) -> Result<FinesPerCapita> {
        let (violations, population) = tokio::try_join!(
            load_violations(&self.paths.violations),
            load_population(&self.paths.population),
        )?;

        Ok(aggregates::fines_per_capita(
            &violations.records,
            &population.records,
            &self.jurisdiction,
        ))
    }

    /// Average market value in a ZIP code, memoized per ZIP code
    pub async fn average_market_value(&self, zip_code: Option<&str>) -> Result<i64> {
        let Some(zip_code) = requested_zip(zip_code) else {
            return Ok(0);
        };

        if !self.cache_enabled {
            return self.scan_average_market_value(zip_code).await;
        }
        self.market_value_cache
            .get_or_compute(zip_code, || self.scan_average_market_value(zip_code))
            .await
    }

    /// Average livable area in a ZIP code
    pub async fn average_livable_area(&self, zip_code: Option<&str>) -> Result<i64> {
        let Some(zip_code) = requested_zip(zip_code) else {
            return Ok(0);
        };
        let properties = load_properties(&self.paths.properties).await?.into_records();
        Ok(aggregates::average_livable_area(&properties, zip_code))
    }

    /// Residential market value per resident in a ZIP code
    pub async fn market_value_per_capita(&self, zip_code: Option<&str>) -> Result<i64> {
        let Some(zip_code) = requested_zip(zip_code) else {
            return Ok(0);
        };
        let (properties, population) = tokio::try_join!(
            load_properties(&self.paths.properties),
            load_population(&self.paths.population),
        )?;

        Ok(aggregates::market_value_per_capita(
            &properties.records,
            &population.records,
            zip_code,
        ))
    }

    /// Market value per square foot of livable area in a ZIP code
    pub async fn market_value_per_square_foot(&self, zip_code: Option<&str>) -> Result<i64> {
        let Some(zip_code) = requested_zip(zip_code) else {
            return Ok(0);
        };
        let properties = load_properties(&self.paths.properties).await?.into_records();
        Ok(aggregates::market_value_per_square_foot(&properties, zip_code))
    }

    /// Smallest and largest livable area in a ZIP code
    pub async fn livable_area_range(&self, zip_code: Option<&str>) -> Result<Option<AreaRange>> {
        let Some(zip_code) = requested_zip(zip_code) else {
            return Ok(None);
        };
        let properties = load_properties(&self.paths.properties).await?.into_records();
        Ok(aggregates::livable_area_range(&properties, zip_code))
    }

    async fn scan_average_market_value(&self, zip_code: &str) -> Result<i64> {
        let properties = load_properties(&self.paths.properties).await?.into_records();
        Ok(aggregates::average_market_value(&properties, zip_code))
    }
}

/// Trimmed ZIP code argument, or `None` when absent or blank
fn requested_zip(zip_code: Option<&str>) -> Option<&str> {
    zip_code.map(str::trim).filter(|zip| !zip.is_empty())
}
