//! Named fixes and waypoint labelling.
//!
//! Labelling is cosmetic: a namer only chooses a display name for a point the
//! route builder has already placed.

use crate::error::CatalogError;
use crate::models::{GeoPoint, NamedFix, WaypointKind};
use crate::{data, rules::PlanningDefaults};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Indexed set of named fixes.
#[derive(Debug, Clone, Default)]
pub struct FixTable {
    fixes: Vec<NamedFix>,
    index: HashMap<String, usize>,
}

/// A fix together with its distance from a query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixDistance {
    pub ident: String,
    pub lat: f64,
    pub lon: f64,
    pub region: String,
    pub distance_nm: f64,
}

/// Row of an OurAirports `navaids.csv` export. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct NavaidRow {
    ident: String,
    latitude_deg: String,
    longitude_deg: String,
    #[serde(default)]
    iso_region: String,
}

impl FixTable {
    /// Build a table. Idents are uppercased; the first of any duplicates wins.
    pub fn new(fixes: Vec<NamedFix>) -> Self {
        let mut table = Self::default();
        for mut fix in fixes {
            fix.ident = fix.ident.trim().to_uppercase();
            if table.index.contains_key(&fix.ident) {
                continue;
            }
            table.index.insert(fix.ident.clone(), table.fixes.len());
            table.fixes.push(fix);
        }
        table
    }

    pub fn builtin() -> Self {
        Self::new(data::named_fixes())
    }

    /// Load fixes from an OurAirports-format navaids CSV file.
    pub fn from_navaids_csv(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading navaids");
        let file = std::fs::File::open(path)?;
        Self::from_navaids_reader(file)
    }

    /// Rows with a blank ident or unparsable coordinates are skipped.
    pub fn from_navaids_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let mut fixes = Vec::new();
        let mut skipped = 0usize;
        for result in rdr.deserialize::<NavaidRow>() {
            let row = match result {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!(error = %e, "unreadable navaid row");
                    skipped += 1;
                    continue;
                }
            };

            let ident = row.ident.trim();
            let coords = row
                .latitude_deg
                .trim()
                .parse::<f64>()
                .ok()
                .zip(row.longitude_deg.trim().parse::<f64>().ok())
                .filter(|(lat, lon)| lat.abs() <= 90.0 && lon.abs() <= 180.0);
            match coords {
                Some((lat, lon)) if !ident.is_empty() => fixes.push(NamedFix {
                    ident: ident.to_string(),
                    lat,
                    lon,
                    region: row.iso_region,
                }),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipped navaid rows without an ident or valid coordinates");
        }
        let table = Self::new(fixes);
        debug!(fixes = table.len(), "navaids loaded");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedFix> {
        self.fixes.iter()
    }

    /// Case-insensitive lookup by ident.
    pub fn find(&self, ident: &str) -> Option<&NamedFix> {
        self.index
            .get(&ident.trim().to_uppercase())
            .map(|&i| &self.fixes[i])
    }

    /// Fixes within `radius_nm` of `point`, nearest first.
    pub fn nearby(&self, point: GeoPoint, radius_nm: f64) -> Vec<FixDistance> {
        let mut found: Vec<FixDistance> = self
            .fixes
            .iter()
            .filter_map(|fix| {
                let distance_nm = point.distance_nm(fix.location());
                (distance_nm <= radius_nm).then(|| FixDistance {
                    ident: fix.ident.clone(),
                    lat: fix.lat,
                    lon: fix.lon,
                    region: fix.region.clone(),
                    distance_nm,
                })
            })
            .collect();
        found.sort_by(|a, b| a.distance_nm.total_cmp(&b.distance_nm));
        found
    }

    /// Closest fix within `radius_nm`, with its distance.
    pub fn nearest_within(&self, point: GeoPoint, radius_nm: f64) -> Option<(&NamedFix, f64)> {
        self.fixes
            .iter()
            .map(|fix| (fix, point.distance_nm(fix.location())))
            .filter(|(_, d)| *d <= radius_nm)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Display label chosen for an intermediate route point.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointLabel {
    pub name: String,
    pub kind: WaypointKind,
}

impl WaypointLabel {
    pub fn generated(index: usize) -> Self {
        Self {
            name: format!("WPT{index}"),
            kind: WaypointKind::Generated,
        }
    }
}

/// Chooses display names for generated route points.
pub trait WaypointNamer: Send + Sync {
    /// Label intermediate point `index` (1-based) located at `point`.
    ///
    /// `taken` holds fix idents already used earlier on the same route.
    fn label(&self, index: usize, point: GeoPoint, taken: &[String]) -> WaypointLabel;
}

/// `WPT1`, `WPT2`, ...
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericNamer;

impl WaypointNamer for NumericNamer {
    fn label(&self, index: usize, _point: GeoPoint, _taken: &[String]) -> WaypointLabel {
        WaypointLabel::generated(index)
    }
}

/// Labels points with the nearest unused fix inside a lateral tolerance,
/// falling back to numeric names.
#[derive(Debug, Clone)]
pub struct FixNamer<'a> {
    fixes: &'a FixTable,
    tolerance_nm: f64,
}

impl<'a> FixNamer<'a> {
    pub fn new(fixes: &'a FixTable) -> Self {
        Self {
            fixes,
            tolerance_nm: PlanningDefaults::default().fix_tolerance_nm,
        }
    }

    pub fn with_tolerance(mut self, tolerance_nm: f64) -> Self {
        self.tolerance_nm = tolerance_nm;
        self
    }
}

impl WaypointNamer for FixNamer<'_> {
    fn label(&self, index: usize, point: GeoPoint, taken: &[String]) -> WaypointLabel {
        let nearest = self
            .fixes
            .iter()
            .filter(|fix| !taken.contains(&fix.ident))
            .map(|fix| (fix, point.distance_nm(fix.location())))
            .filter(|(_, d)| *d <= self.tolerance_nm)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match nearest {
            Some((fix, distance_nm)) => {
                debug!(index, ident = %fix.ident, distance_nm, "labelled waypoint with fix");
                WaypointLabel {
                    name: fix.ident.clone(),
                    kind: WaypointKind::Fix,
                }
            }
            None => WaypointLabel::generated(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_fixes_are_indexed() {
        let table = FixTable::builtin();
        assert_eq!(table.len(), 36);
        let igari = table.find("igari").unwrap();
        assert_eq!(igari.region, "Southeast Asia");
        assert!(table.find("NOPE1").is_none());
    }

    #[test]
    fn duplicate_idents_keep_first() {
        let table = FixTable::new(vec![
            NamedFix { ident: "abc".into(), lat: 1.0, lon: 1.0, region: String::new() },
            NamedFix { ident: "ABC".into(), lat: 2.0, lon: 2.0, region: String::new() },
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.find("ABC").unwrap().lat, 1.0);
    }

    #[test]
    fn nearby_is_sorted_by_distance() {
        let table = FixTable::builtin();
        // Between Boston and New York.
        let found = table.nearby(GeoPoint::new(41.2, -72.0), 200.0);
        let idents: Vec<_> = found.iter().map(|f| f.ident.as_str()).collect();
        assert_eq!(idents, ["GREKI", "SYMON"]);
        assert!(found[0].distance_nm <= found[1].distance_nm);
    }

    #[test]
    fn numeric_namer_ignores_position() {
        let label = NumericNamer.label(3, GeoPoint::new(0.0, 0.0), &[]);
        assert_eq!(label, WaypointLabel::generated(3));
        assert_eq!(label.name, "WPT3");
    }

    #[test]
    fn fix_namer_uses_tolerance_and_skips_taken() {
        let table = FixTable::builtin();
        let namer = FixNamer::new(&table);
        // Roughly 75 nm from RESNO and 110 nm from MALOT.
        let near_resno = GeoPoint::new(52.3, -17.0);

        let label = namer.label(1, near_resno, &[]);
        assert_eq!(label.name, "RESNO");
        assert_eq!(label.kind, WaypointKind::Fix);

        let label = namer.label(1, near_resno, &["RESNO".to_string()]);
        assert_eq!(label.name, "MALOT");

        let strict = FixNamer::new(&table).with_tolerance(1.0);
        assert_eq!(strict.label(1, near_resno, &[]).name, "WPT1");
    }

    #[test]
    fn navaids_csv_skips_bad_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id,filename,ident,name,type,frequency_khz,latitude_deg,longitude_deg,iso_country,iso_region\n\
             1,a,ABC,Alpha,VOR,113000,40.5,-73.5,US,US-NY\n\
             2,b,,Blank,NDB,300,10.0,10.0,US,US-NY\n\
             3,c,BAD,Bad,NDB,300,north,10.0,US,US-NY\n\
             4,d,xyz,Zulu,DME,110,-33.9,151.1,AU,AU-NSW"
        )
        .unwrap();

        let table = FixTable::from_navaids_csv(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.find("ABC").unwrap().region, "US-NY");
        assert_eq!(table.find("XYZ").unwrap().lon, 151.1);
    }

    #[test]
    fn missing_navaids_file_is_io_error() {
        let err = FixTable::from_navaids_csv("/nonexistent/navaids.csv").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
