use super::record;
use crate::catalog::types::{Category, Details, FrequencyRecord};

/// General monitoring mix: airband, calling channels, satellite downlinks,
/// digital networks. Activity offsets are staggered so every status bucket
/// shows up in a fresh catalog.
pub fn records() -> Vec<FrequencyRecord> {
    vec![
        record(
            "gen-1",
            "118.950",
            "Brussels Airport ATIS",
            "Automatic Terminal Information Service for Brussels Airport",
            Category::Airband,
            "Brussels Airport",
            50.9013,
            4.4844,
            Some(2),
        ),
        record(
            "gen-2",
            "119.350",
            "Brussels Airport Tower",
            "Main control tower frequency",
            Category::Airband,
            "Brussels Airport",
            50.9013,
            4.4844,
            Some(7),
        ),
        record(
            "gen-3",
            "121.800",
            "Brussels Airport Ground",
            "Ground control services",
            Category::Airband,
            "Brussels Airport",
            50.9013,
            4.4844,
            Some(21),
        ),
        record(
            "gen-4",
            "126.905",
            "Antwerp Approach",
            "Approach control for Antwerp Airport",
            Category::Airband,
            "Antwerp Airport",
            51.1894,
            4.4603,
            Some(45),
        ),
        record(
            "gen-5",
            "118.250",
            "Liège Airport Tower",
            "Tower frequency for Liège cargo hub",
            Category::Airband,
            "Liège Airport",
            50.6374,
            5.4432,
            None,
        ),
        FrequencyRecord {
            details: Some(Details::Airport {
                icao_code: Some("EBBR".to_string()),
                iata_code: Some("BRU".to_string()),
                elevation_ft: Some(184),
                runways: vec![
                    "01/19".to_string(),
                    "07L/25R".to_string(),
                    "07R/25L".to_string(),
                ],
                operation_hours: Some("H24".to_string()),
            }),
            ..record(
                "gen-6",
                "121.955",
                "Brussels Airport Delivery",
                "Clearance delivery for Brussels Airport",
                Category::Airport,
                "Brussels Airport",
                50.9013,
                4.4844,
                Some(4),
            )
        },
        record(
            "gen-7",
            "145.500",
            "VHF Calling Frequency",
            "National 2m FM calling channel",
            Category::Vhf,
            "National",
            50.85,
            4.35,
            Some(5),
        ),
        record(
            "gen-8",
            "433.500",
            "UHF Simplex",
            "National 70cm FM simplex channel",
            Category::Uhf,
            "National",
            50.85,
            4.35,
            Some(9),
        ),
        record(
            "gen-9",
            "446.00625",
            "PMR446 Channel 1",
            "Licence-free handheld channel",
            Category::Uhf,
            "National",
            50.85,
            4.35,
            Some(28),
        ),
        record(
            "gen-10",
            "145.825",
            "ISS APRS Digipeater",
            "Packet digipeater aboard the International Space Station",
            Category::Satellite,
            "Low Earth Orbit (tracked from Brussels)",
            50.85,
            4.35,
            Some(3),
        ),
        record(
            "gen-11",
            "437.800",
            "CubeSat Telemetry",
            "Telemetry downlink window for university CubeSats",
            Category::Space,
            "Low Earth Orbit (tracked from Brussels)",
            50.85,
            4.35,
            Some(55),
        ),
        record(
            "gen-12",
            "243.000",
            "Military Air Distress",
            "UHF guard frequency, monitored continuously",
            Category::Military,
            "National",
            50.85,
            4.35,
            None,
        ),
        record(
            "gen-13",
            "162.475",
            "Antwerp Port Weather",
            "Continuous port weather and tide bulletins",
            Category::Weather,
            "Antwerp",
            51.2194,
            4.4025,
            Some(12),
        ),
        record(
            "gen-14",
            "156.800",
            "Marine VHF Channel 16",
            "International maritime distress and calling",
            Category::Maritime,
            "Ostend",
            51.2093,
            2.9186,
            Some(1),
        ),
        record(
            "gen-15",
            "144.800",
            "APRS Network",
            "European APRS packet network frequency",
            Category::Digital,
            "Europe",
            50.85,
            4.35,
            Some(2),
        ),
        FrequencyRecord {
            details: Some(Details::Aprs {
                callsign: "ON0BRU-10".to_string(),
                symbol: Some("iGate".to_string()),
                course: None,
                speed: None,
                altitude: Some(95.0),
                path: Some("WIDE1-1,WIDE2-1".to_string()),
                comment: Some("Brussels APRS iGate".to_string()),
            }),
            ..record(
                "gen-16",
                "144.800",
                "ON0BRU iGate",
                "APRS internet gateway for the Brussels region",
                Category::Aprs,
                "Brussels",
                50.8503,
                4.3517,
                Some(0),
            )
        },
        record(
            "gen-17",
            "868.100",
            "LoRaWAN Uplink",
            "EU868 LoRaWAN gateway uplink channel",
            Category::LoRa,
            "Brussels",
            50.8503,
            4.3517,
            Some(33),
        ),
        record(
            "gen-18",
            "869.525",
            "Meshtastic LongFast",
            "Default European Meshtastic mesh channel",
            Category::Meshtastic,
            "Brussels",
            50.8503,
            4.3517,
            Some(14),
        ),
        record(
            "gen-19",
            "1090.000",
            "Mode S / ADS-B",
            "Aircraft transponder downlink",
            Category::ModeS,
            "National",
            50.85,
            4.35,
            Some(0),
        ),
        record(
            "gen-20",
            "7.030",
            "CW QRP Calling",
            "Low-power CW calling frequency on 40m",
            Category::Cw,
            "International",
            50.85,
            4.35,
            None,
        ),
        record(
            "gen-21",
            "27.555",
            "11m Freeband Calling",
            "USB calling frequency above the CB allocation",
            Category::Hf,
            "International",
            50.85,
            4.35,
            Some(61),
        ),
    ]
}
