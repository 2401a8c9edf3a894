//! Catalog fixtures: 15.0-15.8 and 16.0-16.4 with a handful of entries

#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{Value, json};

use pg_version_report::catalog::ReleaseData;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
}

pub fn fixture_catalog() -> Value {
    json!({
        "versionDates": {
            "15.0": "2022-10-13",
            "15.1": "2022-11-10",
            "15.2": "2023-02-09",
            "15.3": "2023-05-11",
            "15.4": "2023-08-10",
            "15.5": "2023-11-09",
            "15.6": "2024-02-08",
            "15.7": "2024-05-09",
            "15.8": "2024-08-08",
            "16.0": "2023-09-14",
            "16.1": "2023-11-09",
            "16.2": "2024-02-08",
            "16.3": "2024-05-09",
            "16.4": "2024-08-08"
        },
        "eolDates": { "15": "2027-11-11" },
        "bugs": [
            {
                "title": "Fix memory leak in logical replication apply worker",
                "description": "",
                "fixedIn": "16.1",
                "cve": null,
                "contributors": ["Amit Kapila"]
            },
            {
                "title": "Fix planner failure with MERGE inside WITH",
                "description": "",
                "fixedIn": "15.5",
                "cve": null,
                "contributors": []
            }
        ],
        "cves": [
            {
                "title": "Tighten security restrictions within REFRESH MATERIALIZED VIEW CONCURRENTLY",
                "description": "",
                "fixedIn": "16.2",
                "cve": "CVE-2024-0985",
                "contributors": [],
                "impactScore": 8.0,
                "severity": "HIGH"
            },
            {
                "title": "Tighten security restrictions within REFRESH MATERIALIZED VIEW CONCURRENTLY",
                "description": "",
                "fixedIn": "15.6",
                "cve": "CVE-2024-0985",
                "contributors": [],
                "impactScore": 8.0,
                "severity": "HIGH"
            }
        ],
        "features": [
            {
                "title": "pg_stat_io view",
                "description": "",
                "sinceVersion": "16.0",
                "significant": true,
                "contributors": []
            }
        ],
        "performanceImprovements": [
            {
                "title": "Parallel FULL and RIGHT joins",
                "description": "",
                "sinceVersion": "16.0",
                "significant": true,
                "contributors": []
            }
        ]
    })
}

pub fn fixture_data() -> ReleaseData {
    ReleaseData::from_json_str(&fixture_catalog().to_string()).unwrap()
}
