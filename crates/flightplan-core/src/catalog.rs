//! Lookup catalogs and the immutable table set shared by every planner.
//!
//! A [`FlightData`] value is built once (from the built-in tables or a JSON
//! file) and then only read, so it can be shared across threads by reference
//! or behind an `Arc`.

use crate::data;
use crate::error::{CatalogError, PlanError, RouteSide};
use crate::models::{AircraftRecord, AirportRecord, DiversionAirport, RestrictedZone};
use crate::naming::FixTable;
use crate::spatial::{haversine_distance_nm, nm_to_km};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

/// Canonical form used for every aircraft key and query.
///
/// Trims, uppercases, and drops `-` and spaces, so "777-300 er" and
/// "B777300ER" differ only by the leading letter.
pub fn normalize_aircraft_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

fn normalize_airport_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ============================================================================
// Aircraft
// ============================================================================

/// Aircraft performance records with code, alias and name lookup.
#[derive(Debug, Clone)]
pub struct AircraftCatalog {
    records: Vec<AircraftRecord>,
    aliases: Vec<(String, String)>,
    code_index: HashMap<String, usize>,
    alias_index: HashMap<String, usize>,
}

impl AircraftCatalog {
    /// Build a catalog, rejecting duplicate codes and aliases to unknown codes.
    pub fn new(
        records: Vec<AircraftRecord>,
        aliases: Vec<(String, String)>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::assemble(records, aliases);
        catalog.validate()?;
        Ok(catalog)
    }

    fn assemble(records: Vec<AircraftRecord>, aliases: Vec<(String, String)>) -> Self {
        let mut code_index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            code_index
                .entry(normalize_aircraft_key(&record.code))
                .or_insert(i);
        }

        let mut alias_index = HashMap::with_capacity(aliases.len());
        for (alias, code) in &aliases {
            if let Some(&i) = code_index.get(&normalize_aircraft_key(code)) {
                alias_index.entry(normalize_aircraft_key(alias)).or_insert(i);
            }
        }

        Self {
            records,
            aliases,
            code_index,
            alias_index,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if !seen.insert(normalize_aircraft_key(&record.code)) {
                return Err(CatalogError::DuplicateCode {
                    table: "aircraft",
                    code: record.code.clone(),
                });
            }
        }
        for (alias, code) in &self.aliases {
            if !self.code_index.contains_key(&normalize_aircraft_key(code)) {
                return Err(CatalogError::DanglingAlias {
                    table: "aircraft",
                    alias: alias.clone(),
                    code: code.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolve a query by canonical code, then alias, then full-name substring.
    ///
    /// Blank queries resolve to nothing.
    pub fn lookup(&self, query: &str) -> Option<&AircraftRecord> {
        let key = normalize_aircraft_key(query);
        if key.is_empty() {
            return None;
        }

        if let Some(&i) = self.code_index.get(&key) {
            debug!(query, code = %self.records[i].code, "aircraft matched by code");
            return Some(&self.records[i]);
        }
        if let Some(&i) = self.alias_index.get(&key) {
            debug!(query, code = %self.records[i].code, "aircraft matched by alias");
            return Some(&self.records[i]);
        }

        let hit = self
            .records
            .iter()
            .find(|r| normalize_aircraft_key(&r.full_name).contains(&key));
        match hit {
            Some(record) => debug!(query, code = %record.code, "aircraft matched by name"),
            None => debug!(query, "aircraft not found"),
        }
        hit
    }

    /// Like [`lookup`](Self::lookup) but fails with `AircraftNotFound`.
    pub fn resolve(&self, query: &str) -> Result<&AircraftRecord, PlanError> {
        self.lookup(query)
            .ok_or_else(|| PlanError::AircraftNotFound(query.to_string()))
    }

    pub fn list_all(&self) -> &[AircraftRecord] {
        &self.records
    }

    pub fn aliases(&self) -> &[(String, String)] {
        &self.aliases
    }
}

// ============================================================================
// Airports
// ============================================================================

/// Geographic grouping by leading ICAO letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
    MiddleEast,
    Asia,
    Oceania,
    SouthAmerica,
    Africa,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::MiddleEast,
        Region::Asia,
        Region::Oceania,
        Region::SouthAmerica,
        Region::Africa,
    ];

    /// ICAO prefixes belonging to the region. Prefixes overlap: "LT" and "LL"
    /// are also covered by Europe's "L".
    pub fn icao_prefixes(self) -> &'static [&'static str] {
        match self {
            Region::NorthAmerica => &["K", "C", "M"],
            Region::Europe => &["E", "L", "U"],
            Region::MiddleEast => &["O", "LT", "LL"],
            Region::Asia => &["R", "V", "W", "Z"],
            Region::Oceania => &["Y", "N"],
            Region::SouthAmerica => &["S"],
            Region::Africa => &["F", "H"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::MiddleEast => "Middle East",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
            Region::Africa => "Africa",
        }
    }

    pub fn contains(self, icao: &str) -> bool {
        self.icao_prefixes().iter().any(|p| icao.starts_with(p))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = PlanError;

    /// Accepts display names and kebab/snake forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Region::ALL
            .into_iter()
            .find(|r| r.name().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| {
                let names: Vec<_> = Region::ALL.iter().map(|r| r.name()).collect();
                PlanError::InvalidInput(format!(
                    "Unknown region '{s}'. Available: {}",
                    names.join(", ")
                ))
            })
    }
}

/// Airport fields echoed back in route results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportSummary {
    pub icao: String,
    pub iata: Option<String>,
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// Great-circle distance between two resolved airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistance {
    pub origin: AirportSummary,
    pub destination: AirportSummary,
    pub distance_nm: f64,
    pub distance_km: f64,
}

/// Airports keyed by ICAO with an IATA alias table.
#[derive(Debug, Clone)]
pub struct AirportCatalog {
    records: Vec<AirportRecord>,
    iata: Vec<(String, String)>,
    icao_index: HashMap<String, usize>,
    iata_index: HashMap<String, usize>,
}

impl AirportCatalog {
    pub fn new(
        records: Vec<AirportRecord>,
        iata: Vec<(String, String)>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::assemble(records, iata);
        catalog.validate()?;
        Ok(catalog)
    }

    fn assemble(records: Vec<AirportRecord>, iata: Vec<(String, String)>) -> Self {
        let mut icao_index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            icao_index
                .entry(normalize_airport_code(&record.icao))
                .or_insert(i);
        }

        let mut iata_index = HashMap::with_capacity(iata.len());
        for (code, icao) in &iata {
            if let Some(&i) = icao_index.get(&normalize_airport_code(icao)) {
                iata_index.entry(normalize_airport_code(code)).or_insert(i);
            }
        }

        Self {
            records,
            iata,
            icao_index,
            iata_index,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if !seen.insert(normalize_airport_code(&record.icao)) {
                return Err(CatalogError::DuplicateCode {
                    table: "airport",
                    code: record.icao.clone(),
                });
            }
        }

        let mut seen_iata = HashSet::new();
        for (code, icao) in &self.iata {
            if !seen_iata.insert(normalize_airport_code(code)) {
                return Err(CatalogError::DuplicateCode {
                    table: "IATA",
                    code: code.clone(),
                });
            }
            if !self.icao_index.contains_key(&normalize_airport_code(icao)) {
                return Err(CatalogError::DanglingAlias {
                    table: "airport",
                    alias: code.clone(),
                    code: icao.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolve an ICAO code, falling back to the IATA table.
    pub fn lookup(&self, code: &str) -> Option<&AirportRecord> {
        let key = normalize_airport_code(code);
        if key.is_empty() {
            return None;
        }
        self.icao_index
            .get(&key)
            .or_else(|| self.iata_index.get(&key))
            .map(|&i| &self.records[i])
    }

    /// Like [`lookup`](Self::lookup), but a miss is a `not_found` error.
    pub fn require(&self, code: &str) -> Result<&AirportRecord, PlanError> {
        self.lookup(code)
            .ok_or_else(|| PlanError::UnknownAirport(code.to_string()))
    }

    pub(crate) fn resolve(&self, code: &str, side: RouteSide) -> Result<&AirportRecord, PlanError> {
        self.lookup(code).ok_or_else(|| PlanError::AirportNotFound {
            side,
            code: code.to_string(),
        })
    }

    /// First IATA code in table order that maps to `icao`.
    pub fn iata_for(&self, icao: &str) -> Option<&str> {
        let key = normalize_airport_code(icao);
        self.iata
            .iter()
            .find(|(_, target)| normalize_airport_code(target) == key)
            .map(|(code, _)| code.as_str())
    }

    pub fn summary(&self, airport: &AirportRecord) -> AirportSummary {
        AirportSummary {
            icao: airport.icao.clone(),
            iata: self.iata_for(&airport.icao).map(str::to_string),
            name: airport.name.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
            lat: airport.lat,
            lon: airport.lon,
        }
    }

    /// Distance between two airports given by ICAO or IATA code.
    pub fn route_distance(&self, origin: &str, destination: &str) -> Result<RouteDistance, PlanError> {
        let from = self.resolve(origin, RouteSide::Origin)?;
        let to = self.resolve(destination, RouteSide::Destination)?;

        let distance_nm = haversine_distance_nm(from.lat, from.lon, to.lat, to.lon);
        Ok(RouteDistance {
            origin: self.summary(from),
            destination: self.summary(to),
            distance_nm,
            distance_km: nm_to_km(distance_nm),
        })
    }

    pub fn list_all(&self) -> &[AirportRecord] {
        &self.records
    }

    /// Airports in a region, sorted by ICAO code.
    pub fn by_region(&self, region: Region) -> Vec<&AirportRecord> {
        let mut airports: Vec<_> = self
            .records
            .iter()
            .filter(|a| region.contains(&a.icao))
            .collect();
        airports.sort_by(|a, b| a.icao.cmp(&b.icao));
        airports
    }

    pub fn iata_aliases(&self) -> &[(String, String)] {
        &self.iata
    }
}

// ============================================================================
// Table set
// ============================================================================

/// Every table the planners read from.
#[derive(Debug, Clone)]
pub struct FlightData {
    pub aircraft: AircraftCatalog,
    pub airports: AirportCatalog,
    pub restricted_zones: Vec<RestrictedZone>,
    pub diversion_airports: Vec<DiversionAirport>,
    pub fixes: FixTable,
}

/// On-disk table overrides. Sections left out keep the built-in table.
///
/// Replacing `aircraft` without `aircraft_aliases` drops the built-in
/// aliases, since they may name codes the new table lacks. The same holds
/// for `airports` and `iata_aliases`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TableFile {
    aircraft: Option<Vec<AircraftRecord>>,
    aircraft_aliases: Option<BTreeMap<String, String>>,
    airports: Option<Vec<AirportRecord>>,
    iata_aliases: Option<BTreeMap<String, String>>,
    restricted_zones: Option<Vec<RestrictedZone>>,
    diversion_airports: Option<Vec<DiversionAirport>>,
    fixes: Option<Vec<crate::models::NamedFix>>,
}

impl FlightData {
    /// Validate and assemble a table set.
    pub fn new(
        aircraft: AircraftCatalog,
        airports: AirportCatalog,
        restricted_zones: Vec<RestrictedZone>,
        diversion_airports: Vec<DiversionAirport>,
        fixes: FixTable,
    ) -> Result<Self, CatalogError> {
        let data = Self {
            aircraft,
            airports,
            restricted_zones,
            diversion_airports,
            fixes,
        };
        data.validate()?;
        Ok(data)
    }

    fn assemble_builtin() -> Self {
        Self {
            aircraft: AircraftCatalog::assemble(data::aircraft_table(), data::aircraft_aliases()),
            airports: AirportCatalog::assemble(data::airport_table(), data::iata_aliases()),
            restricted_zones: data::restricted_zones(),
            diversion_airports: data::diversion_airports(),
            fixes: FixTable::builtin(),
        }
    }

    /// The built-in tables, constructed on first use.
    pub fn builtin() -> &'static FlightData {
        static BUILTIN: OnceLock<FlightData> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let data = Self::assemble_builtin();
            debug!(
                aircraft = data.aircraft.list_all().len(),
                airports = data.airports.list_all().len(),
                zones = data.restricted_zones.len(),
                "built-in tables loaded"
            );
            data
        })
    }

    /// Check every table for duplicate codes and dangling aliases.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.aircraft.validate()?;
        self.airports.validate()?;

        let mut zones = HashSet::new();
        for zone in &self.restricted_zones {
            if !zones.insert(zone.code.as_str()) {
                return Err(CatalogError::DuplicateCode {
                    table: "restricted zone",
                    code: zone.code.clone(),
                });
            }
        }

        let mut diversions = HashSet::new();
        for airport in &self.diversion_airports {
            if !diversions.insert(normalize_airport_code(&airport.icao)) {
                return Err(CatalogError::DuplicateCode {
                    table: "diversion airport",
                    code: airport.icao.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parse a JSON table file layered over the built-in tables.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: TableFile = serde_json::from_str(json)?;
        let builtin = Self::builtin();

        let aircraft = match file.aircraft {
            Some(records) => AircraftCatalog::new(
                records,
                file.aircraft_aliases.unwrap_or_default().into_iter().collect(),
            )?,
            None => match file.aircraft_aliases {
                Some(aliases) => AircraftCatalog::new(
                    builtin.aircraft.list_all().to_vec(),
                    aliases.into_iter().collect(),
                )?,
                None => builtin.aircraft.clone(),
            },
        };

        let airports = match file.airports {
            Some(records) => AirportCatalog::new(
                records,
                file.iata_aliases.unwrap_or_default().into_iter().collect(),
            )?,
            None => match file.iata_aliases {
                Some(iata) => AirportCatalog::new(
                    builtin.airports.list_all().to_vec(),
                    iata.into_iter().collect(),
                )?,
                None => builtin.airports.clone(),
            },
        };

        let fixes = match file.fixes {
            Some(fixes) => FixTable::new(fixes),
            None => builtin.fixes.clone(),
        };

        Self::new(
            aircraft,
            airports,
            file.restricted_zones
                .unwrap_or_else(|| builtin.restricted_zones.clone()),
            file.diversion_airports
                .unwrap_or_else(|| builtin.diversion_airports.clone()),
            fixes,
        )
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading table file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Replace the named-fix table.
    pub fn with_fixes(mut self, fixes: FixTable) -> Self {
        self.fixes = fixes;
        self
    }

    /// Diversion airports paired with their airport-table record.
    ///
    /// Entries without a record are skipped.
    pub fn resolved_diversions(&self) -> impl Iterator<Item = (&DiversionAirport, &AirportRecord)> + '_ {
        self.diversion_airports.iter().filter_map(move |div| {
            let airport = self.airports.lookup(&div.icao);
            if airport.is_none() {
                debug!(icao = %div.icao, "diversion airport has no coordinates, skipping");
            }
            airport.map(|a| (div, a))
        })
    }
}
