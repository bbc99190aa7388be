//! Static Industry Catalog Adapter
//!
//! Loads the assessment configuration from a JSON or YAML document and
//! validates it once, at startup. The default document is compiled into
//! the binary.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::domain::assessment::{
    validate_dimensions, Archetype, ArchetypeBands, BenchmarkTable, CatalogError, Dimension,
    DimensionBenchmark, Industry, IndustryConfig, PeerBenchmark, PeerBenchmarkTable,
    TimelineOption, WeightPolicy,
};
use crate::domain::foundation::IndustryKey;
use crate::ports::IndustryCatalog;

/// Catalog document shipped with the service.
const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// Industry key whose benchmarks stand in for unknown industries.
pub const FALLBACK_INDUSTRY: &str = "other";

/// Family used by industries without a dedicated configuration.
pub const GENERIC_FAMILY: &str = "generic";

/// On-disk layout of the catalog before validation.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    dimensions: Vec<Dimension>,
    archetypes: Vec<Archetype>,
    industries: Vec<Industry>,
    dimension_benchmarks: BTreeMap<IndustryKey, DimensionBenchmark>,
    peer_benchmarks: BTreeMap<IndustryKey, PeerBenchmark>,
    timeline_options: Vec<TimelineOption>,
    families: HashMap<String, IndustryConfig>,
    #[serde(default)]
    family_by_industry: HashMap<IndustryKey, String>,
}

/// Validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct StaticIndustryCatalog {
    industries: Vec<Industry>,
    dimensions: Vec<Dimension>,
    archetypes: ArchetypeBands,
    benchmarks: BenchmarkTable,
    peers: PeerBenchmarkTable,
    timeline_options: Vec<TimelineOption>,
    generic: IndustryConfig,
    families: HashMap<String, IndustryConfig>,
    family_by_industry: HashMap<IndustryKey, String>,
}

impl StaticIndustryCatalog {
    /// Catalog compiled into the binary.
    pub fn embedded(policy: WeightPolicy) -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG, policy)
    }

    /// Loads a catalog file. `.yaml`/`.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P, policy: WeightPolicy) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Unreadable(format!("{}: {}", path.display(), e)))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            Self::from_yaml(&raw, policy)
        } else {
            Self::from_json(&raw, policy)
        }
    }

    pub fn from_json(raw: &str, policy: WeightPolicy) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(raw).map_err(|e| CatalogError::Unreadable(e.to_string()))?;
        Self::from_document(document, policy)
    }

    pub fn from_yaml(raw: &str, policy: WeightPolicy) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_yaml::from_str(raw).map_err(|e| CatalogError::Unreadable(e.to_string()))?;
        Self::from_document(document, policy)
    }

    fn from_document(doc: CatalogDocument, policy: WeightPolicy) -> Result<Self, CatalogError> {
        let dimensions = validate_dimensions(doc.dimensions, policy)?;
        let archetypes = ArchetypeBands::try_new(doc.archetypes)?;

        let fallback = IndustryKey::new(FALLBACK_INDUSTRY)
            .map_err(|e| CatalogError::Unreadable(e.to_string()))?;
        let benchmarks = BenchmarkTable::new(doc.dimension_benchmarks, fallback.clone(), &dimensions)?;
        let peers = PeerBenchmarkTable::new(doc.peer_benchmarks, &fallback)?;

        let mut families = doc.families;
        for (name, config) in &families {
            config.validate(name)?;
        }
        let generic = families
            .remove(GENERIC_FAMILY)
            .ok_or_else(|| CatalogError::MissingFallback {
                table: "industry configuration",
                key: GENERIC_FAMILY.to_string(),
            })?;

        for (industry, family) in &doc.family_by_industry {
            if family != GENERIC_FAMILY && !families.contains_key(family) {
                return Err(CatalogError::UnknownFamily {
                    industry: industry.to_string(),
                    family: family.clone(),
                });
            }
        }

        tracing::debug!(
            industries = doc.industries.len(),
            dimensions = dimensions.len(),
            archetypes = archetypes.len(),
            benchmarks = benchmarks.len(),
            families = families.len() + 1,
            "Industry catalog loaded"
        );

        Ok(Self {
            industries: doc.industries,
            dimensions,
            archetypes,
            benchmarks,
            peers,
            timeline_options: doc.timeline_options,
            generic,
            families,
            family_by_industry: doc.family_by_industry,
        })
    }
}

impl IndustryCatalog for StaticIndustryCatalog {
    fn industries(&self) -> &[Industry] {
        &self.industries
    }

    fn industry_config(&self, industry: &str) -> &IndustryConfig {
        self.family_by_industry
            .get(industry)
            .and_then(|family| self.families.get(family))
            .unwrap_or(&self.generic)
    }

    fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    fn archetypes(&self) -> &ArchetypeBands {
        &self.archetypes
    }

    fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    fn peer_benchmark(&self, industry: &str) -> &PeerBenchmark {
        self.peers.for_industry(industry)
    }

    fn timeline_options(&self) -> &[TimelineOption] {
        &self.timeline_options
    }
}
