//! Built-in reference tables.
//!
//! Weights are kilograms, distances nautical miles, fuel burn kg/h and speeds
//! knots true airspeed. The tables are small curated sets, not a full
//! operational database.

use crate::models::{
    AircraftRecord, AirportRecord, DiversionAirport, NamedFix, RestrictedZone, Severity, ZoneType,
};

#[allow(clippy::too_many_arguments)]
fn aircraft(
    code: &str,
    manufacturer: &str,
    full_name: &str,
    mtow_kg: f64,
    mlw_kg: f64,
    max_fuel_kg: f64,
    fuel_burn_kg_per_hr: f64,
    cruise_speed_kt: f64,
    range_nm: f64,
    etops_minutes: Option<u32>,
    typical_passengers: u32,
) -> AircraftRecord {
    AircraftRecord {
        code: code.to_string(),
        manufacturer: manufacturer.to_string(),
        full_name: full_name.to_string(),
        mtow_kg,
        mlw_kg,
        max_fuel_kg,
        fuel_burn_kg_per_hr,
        cruise_speed_kt,
        range_nm,
        etops_minutes,
        typical_passengers,
    }
}

/// Aircraft performance table in display order.
#[rustfmt::skip]
pub fn aircraft_table() -> Vec<AircraftRecord> {
    vec![
        aircraft("B737-800", "Boeing", "Boeing 737-800", 79_016.0, 65_317.0, 20_894.0, 2_600.0, 454.0, 3_115.0, None, 162),
        aircraft("B737-MAX8", "Boeing", "Boeing 737 MAX 8", 82_191.0, 66_360.0, 20_894.0, 2_400.0, 453.0, 3_550.0, Some(180), 162),
        aircraft("B747-400", "Boeing", "Boeing 747-400", 412_775.0, 295_742.0, 173_074.0, 11_000.0, 490.0, 8_355.0, Some(180), 416),
        aircraft("B777-300ER", "Boeing", "Boeing 777-300ER", 352_400.0, 251_290.0, 181_283.0, 8_600.0, 490.0, 7_370.0, Some(180), 396),
        aircraft("B777-200LR", "Boeing", "Boeing 777-200LR", 347_452.0, 223_168.0, 202_285.0, 7_800.0, 490.0, 9_395.0, Some(180), 301),
        aircraft("B787-8", "Boeing", "Boeing 787-8 Dreamliner", 227_930.0, 172_365.0, 101_323.0, 5_500.0, 488.0, 7_355.0, Some(180), 242),
        aircraft("B787-9", "Boeing", "Boeing 787-9 Dreamliner", 254_011.0, 192_777.0, 126_917.0, 6_000.0, 488.0, 7_635.0, Some(180), 296),
        aircraft("A320", "Airbus", "Airbus A320-200", 77_000.0, 64_500.0, 18_728.0, 2_500.0, 450.0, 3_300.0, None, 150),
        aircraft("A320NEO", "Airbus", "Airbus A320neo", 79_000.0, 67_400.0, 18_728.0, 2_200.0, 450.0, 3_400.0, Some(180), 150),
        aircraft("A321NEO", "Airbus", "Airbus A321neo", 97_000.0, 79_200.0, 26_730.0, 2_800.0, 450.0, 4_000.0, Some(180), 180),
        aircraft("A330-300", "Airbus", "Airbus A330-300", 242_000.0, 185_000.0, 97_530.0, 6_800.0, 472.0, 6_350.0, Some(180), 277),
        aircraft("A350-900", "Airbus", "Airbus A350-900", 280_000.0, 205_000.0, 141_000.0, 6_300.0, 488.0, 8_100.0, Some(180), 325),
        aircraft("A380-800", "Airbus", "Airbus A380-800", 575_000.0, 394_000.0, 254_000.0, 13_000.0, 488.0, 8_200.0, None, 555),
        aircraft("E190", "Embraer", "Embraer E190", 47_790.0, 43_000.0, 13_986.0, 2_100.0, 447.0, 2_450.0, None, 98),
    ]
}

/// Pilot shorthand and ICAO type designators mapped to canonical codes.
pub fn aircraft_aliases() -> Vec<(String, String)> {
    [
        ("737", "B737-800"),
        ("738", "B737-800"),
        ("B738", "B737-800"),
        ("737-800", "B737-800"),
        ("737MAX", "B737-MAX8"),
        ("737 MAX", "B737-MAX8"),
        ("7M8", "B737-MAX8"),
        ("744", "B747-400"),
        ("B744", "B747-400"),
        ("747", "B747-400"),
        ("747-400", "B747-400"),
        ("773", "B777-300ER"),
        ("B773", "B777-300ER"),
        ("777", "B777-300ER"),
        ("777-300ER", "B777-300ER"),
        ("77L", "B777-200LR"),
        ("777-200LR", "B777-200LR"),
        ("787", "B787-9"),
        ("788", "B787-8"),
        ("B788", "B787-8"),
        ("789", "B787-9"),
        ("B789", "B787-9"),
        ("787-8", "B787-8"),
        ("787-9", "B787-9"),
        ("DREAMLINER", "B787-9"),
        ("320", "A320"),
        ("A320", "A320"),
        ("320NEO", "A320NEO"),
        ("A320NEO", "A320NEO"),
        ("321NEO", "A321NEO"),
        ("A321NEO", "A321NEO"),
        ("333", "A330-300"),
        ("A333", "A330-300"),
        ("330", "A330-300"),
        ("A330", "A330-300"),
        ("359", "A350-900"),
        ("A359", "A350-900"),
        ("350", "A350-900"),
        ("A350", "A350-900"),
        ("388", "A380-800"),
        ("A388", "A380-800"),
        ("380", "A380-800"),
        ("A380", "A380-800"),
        ("E190", "E190"),
        ("190", "E190"),
    ]
    .into_iter()
    .map(|(alias, code)| (alias.to_string(), code.to_string()))
    .collect()
}

fn airport(icao: &str, name: &str, city: &str, country: &str, lat: f64, lon: f64) -> AirportRecord {
    AirportRecord {
        icao: icao.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        lat,
        lon,
    }
}

/// Major international airports keyed by ICAO code.
#[rustfmt::skip]
pub fn airport_table() -> Vec<AirportRecord> {
    vec![
        airport("KLAX", "Los Angeles Intl", "Los Angeles", "USA", 33.9425, -118.4081),
        airport("KJFK", "John F. Kennedy Intl", "New York", "USA", 40.6398, -73.7789),
        airport("KORD", "O'Hare Intl", "Chicago", "USA", 41.9742, -87.9073),
        airport("KDFW", "Dallas/Fort Worth Intl", "Dallas", "USA", 32.8968, -97.0380),
        airport("KSFO", "San Francisco Intl", "San Francisco", "USA", 37.6213, -122.3790),
        airport("KDEN", "Denver Intl", "Denver", "USA", 39.8561, -104.6737),
        airport("KATL", "Hartsfield-Jackson Atlanta Intl", "Atlanta", "USA", 33.6367, -84.4281),
        airport("KMIA", "Miami Intl", "Miami", "USA", 25.7932, -80.2906),
        airport("KBOS", "Boston Logan Intl", "Boston", "USA", 42.3656, -71.0096),
        airport("KSEA", "Seattle-Tacoma Intl", "Seattle", "USA", 47.4502, -122.3088),
        airport("CYVR", "Vancouver Intl", "Vancouver", "Canada", 49.1939, -123.1844),
        airport("CYYZ", "Toronto Pearson Intl", "Toronto", "Canada", 43.6777, -79.6248),
        airport("MMMX", "Mexico City Intl", "Mexico City", "Mexico", 19.4363, -99.0721),
        airport("EGLL", "London Heathrow", "London", "UK", 51.4700, -0.4543),
        airport("EGKK", "London Gatwick", "London", "UK", 51.1537, -0.1821),
        airport("LFPG", "Paris Charles de Gaulle", "Paris", "France", 49.0097, 2.5479),
        airport("EDDF", "Frankfurt Airport", "Frankfurt", "Germany", 50.0379, 8.5622),
        airport("EHAM", "Amsterdam Schiphol", "Amsterdam", "Netherlands", 52.3105, 4.7683),
        airport("LEMD", "Madrid-Barajas", "Madrid", "Spain", 40.4983, -3.5676),
        airport("LIRF", "Rome Fiumicino", "Rome", "Italy", 41.8003, 12.2389),
        airport("LSZH", "Zurich Airport", "Zurich", "Switzerland", 47.4647, 8.5492),
        airport("EKCH", "Copenhagen Airport", "Copenhagen", "Denmark", 55.6180, 12.6560),
        airport("LOWW", "Vienna Intl", "Vienna", "Austria", 48.1103, 16.5697),
        airport("UUEE", "Moscow Sheremetyevo", "Moscow", "Russia", 55.9726, 37.4146),
        airport("LEBL", "Barcelona-El Prat", "Barcelona", "Spain", 41.2971, 2.0785),
        airport("OMDB", "Dubai Intl", "Dubai", "UAE", 25.2532, 55.3657),
        airport("OTHH", "Hamad Intl", "Doha", "Qatar", 25.2731, 51.6080),
        airport("OEJN", "King Abdulaziz Intl", "Jeddah", "Saudi Arabia", 21.6796, 39.1565),
        airport("LTFM", "Istanbul Airport", "Istanbul", "Turkey", 41.2753, 28.7519),
        airport("LLBG", "Ben Gurion Airport", "Tel Aviv", "Israel", 32.0114, 34.8867),
        airport("RJTT", "Tokyo Haneda", "Tokyo", "Japan", 35.5494, 139.7798),
        airport("RJBB", "Osaka Kansai", "Osaka", "Japan", 34.4347, 135.2440),
        airport("RKSI", "Seoul Incheon", "Seoul", "South Korea", 37.4602, 126.4407),
        airport("VHHH", "Hong Kong Intl", "Hong Kong", "Hong Kong", 22.3080, 113.9185),
        airport("ZSSS", "Shanghai Pudong", "Shanghai", "China", 31.1443, 121.8083),
        airport("ZBAA", "Beijing Capital Intl", "Beijing", "China", 40.0799, 116.6031),
        airport("ZSPD", "Shanghai Hongqiao", "Shanghai", "China", 31.1979, 121.3364),
        airport("VTBS", "Bangkok Suvarnabhumi", "Bangkok", "Thailand", 13.6900, 100.7501),
        airport("WSSS", "Singapore Changi", "Singapore", "Singapore", 1.3644, 103.9915),
        airport("WMKK", "Kuala Lumpur Intl", "Kuala Lumpur", "Malaysia", 2.7456, 101.7099),
        airport("VABB", "Mumbai Chhatrapati Shivaji", "Mumbai", "India", 19.0896, 72.8656),
        airport("VIDP", "Delhi Indira Gandhi Intl", "Delhi", "India", 28.5665, 77.1031),
        airport("RPLL", "Manila Ninoy Aquino Intl", "Manila", "Philippines", 14.5086, 121.0194),
        airport("WIIH", "Jakarta Soekarno-Hatta", "Jakarta", "Indonesia", -6.1256, 106.6559),
        airport("YSSY", "Sydney Kingsford Smith", "Sydney", "Australia", -33.9461, 151.1772),
        airport("YMML", "Melbourne Airport", "Melbourne", "Australia", -37.6690, 144.8410),
        airport("YBBN", "Brisbane Airport", "Brisbane", "Australia", -27.3942, 153.1218),
        airport("NZAA", "Auckland Airport", "Auckland", "New Zealand", -37.0081, 174.7850),
        airport("SBGR", "São Paulo-Guarulhos Intl", "São Paulo", "Brazil", -23.4356, -46.4731),
        airport("SAEZ", "Buenos Aires Ezeiza", "Buenos Aires", "Argentina", -34.8222, -58.5358),
        airport("SCEL", "Santiago Arturo Merino Benítez", "Santiago", "Chile", -33.3930, -70.7858),
        airport("SKBO", "Bogotá El Dorado Intl", "Bogotá", "Colombia", 4.7016, -74.1469),
        airport("SBGL", "Rio de Janeiro-Galeão", "Rio de Janeiro", "Brazil", -22.8099, -43.2505),
        airport("FACT", "Cape Town Intl", "Cape Town", "South Africa", -33.9715, 18.6021),
        airport("FAOR", "Johannesburg O.R. Tambo", "Johannesburg", "South Africa", -26.1367, 28.2411),
        airport("HECA", "Cairo Intl", "Cairo", "Egypt", 30.1219, 31.4056),
        airport("HAAB", "Addis Ababa Bole Intl", "Addis Ababa", "Ethiopia", 8.9779, 38.7993),
    ]
}

/// IATA to ICAO aliases.
pub fn iata_aliases() -> Vec<(String, String)> {
    [
        ("LAX", "KLAX"),
        ("JFK", "KJFK"),
        ("ORD", "KORD"),
        ("DFW", "KDFW"),
        ("SFO", "KSFO"),
        ("DEN", "KDEN"),
        ("ATL", "KATL"),
        ("MIA", "KMIA"),
        ("BOS", "KBOS"),
        ("SEA", "KSEA"),
        ("YVR", "CYVR"),
        ("YYZ", "CYYZ"),
        ("MEX", "MMMX"),
        ("LHR", "EGLL"),
        ("LGW", "EGKK"),
        ("CDG", "LFPG"),
        ("FRA", "EDDF"),
        ("AMS", "EHAM"),
        ("MAD", "LEMD"),
        ("FCO", "LIRF"),
        ("ZRH", "LSZH"),
        ("CPH", "EKCH"),
        ("VIE", "LOWW"),
        ("SVO", "UUEE"),
        ("BCN", "LEBL"),
        ("DXB", "OMDB"),
        ("DOH", "OTHH"),
        ("JED", "OEJN"),
        ("IST", "LTFM"),
        ("TLV", "LLBG"),
        ("HND", "RJTT"),
        ("KIX", "RJBB"),
        ("ICN", "RKSI"),
        ("HKG", "VHHH"),
        ("PVG", "ZSSS"),
        ("PEK", "ZBAA"),
        ("SHA", "ZSPD"),
        ("BKK", "VTBS"),
        ("SIN", "WSSS"),
        ("KUL", "WMKK"),
        ("BOM", "VABB"),
        ("DEL", "VIDP"),
        ("MNL", "RPLL"),
        ("CGK", "WIIH"),
        ("SYD", "YSSY"),
        ("MEL", "YMML"),
        ("BNE", "YBBN"),
        ("AKL", "NZAA"),
        ("GRU", "SBGR"),
        ("EZE", "SAEZ"),
        ("SCL", "SCEL"),
        ("BOG", "SKBO"),
        ("GIG", "SBGL"),
        ("CPT", "FACT"),
        ("JNB", "FAOR"),
        ("CAI", "HECA"),
        ("ADD", "HAAB"),
    ]
    .into_iter()
    .map(|(iata, icao)| (iata.to_string(), icao.to_string()))
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn zone(
    code: &str,
    name: &str,
    zone_type: ZoneType,
    center_lat: f64,
    center_lon: f64,
    radius_nm: f64,
    altitude_ceiling_ft: Option<f64>,
    severity: Severity,
    description: &str,
    country: &str,
) -> RestrictedZone {
    RestrictedZone {
        code: code.to_string(),
        name: name.to_string(),
        zone_type,
        center_lat,
        center_lon,
        radius_nm,
        altitude_ceiling_ft,
        severity,
        description: description.to_string(),
        country: country.to_string(),
    }
}

/// Known restricted airspace. Simplified; real deployments need NOTAM/TFR feeds.
#[rustfmt::skip]
pub fn restricted_zones() -> Vec<RestrictedZone> {
    vec![
        zone("P-56", "White House Prohibited Area", ZoneType::Prohibited, 38.8977, -77.0365, 1.5, None, Severity::Critical, "Presidential and governmental facilities", "USA"),
        zone("P-40", "Camp David Prohibited Area", ZoneType::Prohibited, 39.6483, -77.465, 1.5, None, Severity::Critical, "Presidential retreat", "USA"),
        zone("TFR-DMZ", "Korean DMZ", ZoneType::Prohibited, 38.0, 127.5, 50.0, None, Severity::Critical, "Demilitarized Zone", "Korea"),
        zone("R-2508", "Edwards AFB Restricted Area", ZoneType::Restricted, 34.9054, -117.884, 20.0, Some(80000.0), Severity::High, "Military test range", "USA"),
        zone("LIBYA-NFZ", "Libya Conflict Zone", ZoneType::Danger, 32.0, 20.0, 200.0, None, Severity::Critical, "Conflict zone - avoid all operations", "Libya"),
        zone("UKRAINE-NFZ", "Ukraine Conflict Zone", ZoneType::Danger, 48.0, 37.0, 150.0, None, Severity::Critical, "Active conflict zone", "Ukraine"),
        zone("SYRIA-NFZ", "Syria Conflict Zone", ZoneType::Danger, 35.0, 38.0, 100.0, None, Severity::Critical, "Conflict zone", "Syria"),
        zone("YEMEN-NFZ", "Yemen Conflict Zone", ZoneType::Danger, 15.5, 48.0, 100.0, None, Severity::Critical, "Active conflict zone", "Yemen"),
        zone("R-BERMUDA", "Bermuda Triangle", ZoneType::Warning, 25.0, -71.0, 200.0, None, Severity::Low, "High traffic area - enhanced vigilance required", "International"),
        zone("NORTH-KOREA", "North Korea Airspace", ZoneType::Prohibited, 40.0, 127.0, 150.0, None, Severity::Critical, "No overflight permitted", "North Korea"),
        zone("IRAN-RESTRICTED", "Iran Airspace (Limited Access)", ZoneType::Restricted, 32.0, 53.0, 300.0, None, Severity::High, "Special authorization required", "Iran"),
    ]
}

fn diversion(icao: &str, name: &str, country: &str) -> DiversionAirport {
    DiversionAirport {
        icao: icao.to_string(),
        name: name.to_string(),
        country: country.to_string(),
    }
}

/// Airports with runways and facilities suitable for ETOPS diversions.
///
/// Several entries have no row in [`airport_table`] and are skipped at check
/// time.
pub fn diversion_airports() -> Vec<DiversionAirport> {
    vec![
        // North Atlantic
        diversion("BIKF", "Keflavik (Reykjavik)", "Iceland"),
        diversion("BGBW", "Narsarsuaq", "Greenland"),
        diversion("CYYR", "Goose Bay", "Canada"),
        diversion("CYQX", "Gander", "Canada"),
        diversion("LPLA", "Lajes (Azores)", "Portugal"),
        diversion("EGLL", "London Heathrow", "UK"),
        diversion("KJFK", "New York JFK", "USA"),
        diversion("KBOS", "Boston", "USA"),
        // North Pacific
        diversion("RJAA", "Tokyo Narita", "Japan"),
        diversion("RJTT", "Tokyo Haneda", "Japan"),
        diversion("PANC", "Anchorage", "USA"),
        diversion("PHNL", "Honolulu", "USA"),
        diversion("KSEA", "Seattle", "USA"),
        diversion("CYVR", "Vancouver", "Canada"),
        diversion("RKSI", "Seoul Incheon", "South Korea"),
        // South Pacific
        diversion("YSSY", "Sydney", "Australia"),
        diversion("YMML", "Melbourne", "Australia"),
        diversion("NZAA", "Auckland", "New Zealand"),
        diversion("NZCH", "Christchurch", "New Zealand"),
        diversion("NFFN", "Nadi", "Fiji"),
        diversion("NTAA", "Papeete", "French Polynesia"),
        // Indian Ocean
        diversion("VOMM", "Chennai", "India"),
        diversion("VCBI", "Colombo", "Sri Lanka"),
        diversion("VRMM", "Male", "Maldives"),
        diversion("FIMP", "Mauritius", "Mauritius"),
        diversion("FACT", "Cape Town", "South Africa"),
        // South Atlantic
        diversion("SBGL", "Rio de Janeiro", "Brazil"),
        diversion("SBGR", "Sao Paulo", "Brazil"),
        diversion("SAEZ", "Buenos Aires", "Argentina"),
        diversion("SCCI", "Santiago", "Chile"),
        // Middle East
        diversion("OMDB", "Dubai", "UAE"),
        diversion("OTHH", "Doha", "Qatar"),
        diversion("OJAI", "Amman", "Jordan"),    ]
}

fn fix(ident: &str, lat: f64, lon: f64, region: &str) -> NamedFix {
    NamedFix {
        ident: ident.to_string(),
        lat,
        lon,
        region: region.to_string(),
    }
}

/// Curated named fixes used to label generated route points.
#[rustfmt::skip]
pub fn named_fixes() -> Vec<NamedFix> {
    vec![
        // North Pacific
        fix("SHEMYA", 52.7167, 174.1167, "North Pacific"),
        fix("NEEVA", 54.0000, 180.0000, "North Pacific"),
        fix("NIPPI", 53.0000, -175.0000, "North Pacific"),
        fix("ALDAN", 43.0000, -165.0000, "North Pacific"),
        fix("PONRO", 40.0000, -155.0000, "North Pacific"),
        // North Atlantic tracks
        fix("RESNO", 52.5000, -15.0000, "North Atlantic"),
        fix("MALOT", 52.0000, -20.0000, "North Atlantic"),
        fix("PIKIL", 51.0000, -30.0000, "North Atlantic"),
        fix("VESMI", 50.0000, -40.0000, "North Atlantic"),
        fix("JANJO", 48.0000, -50.0000, "North Atlantic"),
        fix("PORTI", 45.0000, -60.0000, "North Atlantic"),
        // South-East Asia
        fix("IGARI", 6.5667, 103.5833, "Southeast Asia"),
        fix("BITOD", 8.0000, 104.0000, "Southeast Asia"),
        fix("GIVAL", 6.9333, 102.3500, "Southeast Asia"),
        fix("VAMPI", 7.3833, 101.5833, "Southeast Asia"),
        fix("MEKAR", 5.2500, 99.5667, "Southeast Asia"),
        fix("VCENT", 12.0000, 109.0000, "South China Sea"),
        fix("NANKO", 18.0000, 115.0000, "South China Sea"),
        fix("ELATO", 20.0000, 120.0000, "Taiwan"),
        // Europe
        fix("KONAN", 51.0000, 2.0000, "English Channel"),
        fix("BERGA", 50.5000, 4.5000, "Belgium"),
        fix("TULOX", 51.5000, 1.0000, "English Channel"),
        fix("BOGNA", 50.0000, 0.0000, "France"),
        fix("DIKAS", 49.0000, 2.0000, "France"),
        fix("BIBAX", 51.0000, 8.0000, "Germany"),
        // Middle East
        fix("DAVMO", 28.0000, 51.0000, "Persian Gulf"),
        fix("GIDRA", 26.0000, 56.0000, "UAE"),
        fix("PARAR", 25.0000, 55.0000, "UAE"),
        fix("KUTLI", 24.0000, 54.0000, "UAE"),
        fix("OMAKO", 23.0000, 58.0000, "Oman"),
        // US domestic
        fix("SYMON", 40.0000, -74.0000, "New York"),
        fix("GREKI", 42.0000, -71.0000, "Boston"),
        fix("WAVEY", 35.0000, -106.0000, "New Mexico"),
        fix("BASET", 34.0000, -118.0000, "Los Angeles"),
        fix("ORRCA", 37.0000, -122.0000, "San Francisco"),
        fix("ZIMMR", 41.0000, -87.0000, "Chicago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn aliases_point_at_known_aircraft() {
        let codes: HashSet<_> = aircraft_table().into_iter().map(|a| a.code).collect();
        for (alias, code) in aircraft_aliases() {
            assert!(codes.contains(&code), "alias {alias} -> {code}");
        }
    }

    #[test]
    fn iata_aliases_point_at_known_airports() {
        let icaos: HashSet<_> = airport_table().into_iter().map(|a| a.icao).collect();
        for (iata, icao) in iata_aliases() {
            assert!(icaos.contains(&icao), "IATA {iata} -> {icao}");
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(aircraft_table().len(), 14);
        assert_eq!(airport_table().len(), 56);
        assert_eq!(restricted_zones().len(), 11);
        assert_eq!(diversion_airports().len(), 33);
    }

    #[test]
    fn unrated_types_are_the_expected_ones() {
        let unrated: Vec<_> = aircraft_table()
            .into_iter()
            .filter(|a| a.etops_minutes.is_none())
            .map(|a| a.code)
            .collect();
        assert_eq!(unrated, ["B737-800", "A320", "A380-800", "E190"]);
    }
}
