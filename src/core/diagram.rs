//! Diagram registry
//!
//! Maps knowledge-point ids to the interactive diagram that illustrates
//! them. Several points share a diagram; unmapped ids fall through to
//! [`Diagram::Default`].

use serde::Serialize;

use super::catalog::Catalog;
use super::knowledge::KnowledgePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagram {
    EarthRotation,
    EarthRevolution,
    DayNight,
    Seasons,
    AtmosphereStructure,
    HeatBalance,
    AtmosphericCirculation,
    WeatherSystems,
    ClimateTypes,
    WaterCycle,
    OceanCurrents,
    RiverFeatures,
    InternalForces,
    PlateTectonics,
    ExternalForces,
    RiverLandforms,
    WindLandforms,
    KarstLandforms,
    PopulationGrowth,
    PopulationMigration,
    PopulationDistribution,
    UrbanStructure,
    UrbanizationProcess,
    AgricultureLocation,
    IndustryLocation,
    TransportModes,
    /// Generic placeholder diagram
    Default,
}

/// Explicit id -> diagram table, in curriculum order
const REGISTRY: &[(&str, Diagram)] = &[
    ("earth-rotation", Diagram::EarthRotation),
    ("earth-revolution", Diagram::EarthRevolution),
    ("day-night", Diagram::DayNight),
    ("seasons", Diagram::Seasons),
    ("atmosphere-structure", Diagram::AtmosphereStructure),
    ("heat-balance", Diagram::HeatBalance),
    ("atmospheric-circulation", Diagram::AtmosphericCirculation),
    ("weather-systems", Diagram::WeatherSystems),
    ("climate-types", Diagram::ClimateTypes),
    ("water-cycle", Diagram::WaterCycle),
    ("ocean-currents", Diagram::OceanCurrents),
    ("river-features", Diagram::RiverFeatures),
    ("internal-forces", Diagram::InternalForces),
    ("plate-tectonics", Diagram::PlateTectonics),
    ("external-forces", Diagram::ExternalForces),
    ("river-landforms", Diagram::RiverLandforms),
    ("wind-landforms", Diagram::WindLandforms),
    ("karst-landforms", Diagram::KarstLandforms),
    ("population-growth", Diagram::PopulationGrowth),
    ("population-migration", Diagram::PopulationMigration),
    ("population-distribution", Diagram::PopulationDistribution),
    ("urban-structure", Diagram::UrbanStructure),
    ("urbanization-process", Diagram::UrbanizationProcess),
    ("urban-planning", Diagram::UrbanStructure),
    ("agriculture-location", Diagram::AgricultureLocation),
    ("agriculture-types", Diagram::AgricultureLocation),
    ("industry-location", Diagram::IndustryLocation),
    ("industry-transfer", Diagram::IndustryLocation),
    ("transport-modes", Diagram::TransportModes),
    ("transport-layout", Diagram::TransportModes),
    // Elective points reuse the required-course diagrams
    ("solar-altitude", Diagram::Seasons),
    ("day-length", Diagram::DayNight),
    ("pressure-systems", Diagram::WeatherSystems),
    ("monsoon", Diagram::AtmosphericCirculation),
    ("groundwater", Diagram::WaterCycle),
    ("lake-wetland", Diagram::RiverFeatures),
    ("regional-characteristics", Diagram::PopulationDistribution),
    ("regional-strategy", Diagram::UrbanizationProcess),
    ("resource-distribution", Diagram::IndustryLocation),
    ("environmental-issues", Diagram::ClimateTypes),
    ("energy-security", Diagram::IndustryLocation),
    ("food-security", Diagram::AgricultureLocation),
    ("biodiversity", Diagram::ClimateTypes),
    ("climate-change", Diagram::HeatBalance),
];

impl Diagram {
    /// Diagram for a knowledge point id
    pub fn for_point(id: &str) -> Diagram {
        REGISTRY
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, diagram)| *diagram)
            .unwrap_or(Diagram::Default)
    }

    /// Points that claim a diagram but only get the placeholder
    pub fn uncovered(catalog: &Catalog) -> Vec<&KnowledgePoint> {
        catalog
            .all_knowledge_points()
            .filter(|p| p.has_simulation && Diagram::for_point(&p.id) == Diagram::Default)
            .collect()
    }

    /// Registry ids that do not exist in the catalog
    pub fn dangling(catalog: &Catalog) -> Vec<&'static str> {
        REGISTRY
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| catalog.knowledge_point(id).is_none())
            .collect()
    }

    pub fn is_default(self) -> bool {
        self == Diagram::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_diagrams() {
        assert_eq!(Diagram::for_point("urban-planning"), Diagram::UrbanStructure);
        assert_eq!(Diagram::for_point("transport-layout"), Diagram::TransportModes);
        assert_eq!(Diagram::for_point("earth-rotation"), Diagram::EarthRotation);
    }

    #[test]
    fn test_elective_points_reuse_diagrams() {
        assert_eq!(Diagram::for_point("monsoon"), Diagram::AtmosphericCirculation);
        assert_eq!(Diagram::for_point("solar-altitude"), Diagram::Seasons);
        assert_eq!(Diagram::for_point("climate-change"), Diagram::HeatBalance);
        assert_eq!(Diagram::for_point("food-security"), Diagram::AgricultureLocation);
    }

    #[test]
    fn test_unmapped_falls_through() {
        assert!(Diagram::for_point("unknown").is_default());
        assert!(Diagram::for_point("").is_default());
    }

    #[test]
    fn test_coverage_report() {
        let catalog = Catalog::builtin().unwrap();
        assert!(Diagram::dangling(&catalog).is_empty());

        assert_eq!(REGISTRY.len(), catalog.len());
        assert!(Diagram::uncovered(&catalog).is_empty());
    }

    #[test]
    fn test_serializes_kebab_case() {
        let json = serde_json::to_string(&Diagram::OceanCurrents).unwrap();
        assert_eq!(json, "\"ocean-currents\"");
    }
}
