// demo/src/main.rs

use sdif::{compile_to_text, scan_file, SdifError, SwimDate, TeamInfo};

fn main() -> Result<(), SdifError> {
    // Two individual results and one relay, shaped the way the tabular
    // exporter hands rows over: a JSON array of column-name → value maps.
    let individual = serde_json::json!([
        {
            "Event": "Female (11-12) \n50 Fly",
            "Athlete Name": "Smith, Jane A\n061712JANASMIT",
            "EventAge\nCurrent": "11\n12",
            "LSC-Team": "OD-WWST",
            "Finals": "31.40",
            "Finals Pos": 1,
            "Pts": 5,
            "Date of\nSport": "6/17/2023"
        },
        {
            "Event": "Male (11-12) \n50 Free",
            "Athlete Name": "Doe, Sal\n010112SALDOE",
            "EventAge\nCurrent": "12\n12",
            "LSC-Team": "OD-DOLP",
            "Finals": "29.85",
            "Finals Pos": 2,
            "Pts": 3,
            "Date of\nSport": "6/17/2023"
        }
    ]);

    let relay = serde_json::json!([
        {
            "Event": "Female (11-12) \n200 Free Relay",
            "Relay\nTeam": "WWST A\nSmith, Jane A\nJones, Amy\nDoe, Kim\nRoe, Pat",
            "LSC-Team": "OD-WWST",
            "Finals": "2:10.00",
            "Finals Pos": 1,
            "Points": 8,
            "Date": "6/17/2023"
        }
    ]);

    let config = TeamInfo {
        full_name: "Westwood Waves".to_string(),
        abbreviation: "Waves".to_string(),
        team_code: "WWST".to_string(),
        ..TeamInfo::default()
    };

    let text = compile_to_text(
        "demo_dual_meet",
        &individual.to_string(),
        Some(&relay.to_string()),
        &config,
        SwimDate::today(),
    )?;

    println!("Encoded meet file:\n");
    for line in text.lines() {
        println!("|{}|", line);
    }

    // Round it back through the scanner
    let path = std::env::temp_dir().join("demo_dual_meet.sd3");
    std::fs::write(&path, &text)?;
    let summary = scan_file(&path)?;
    println!("\nRecord type frequencies:");
    for (code, count) in &summary.counts {
        println!("  {}  {:>4}", code, count);
    }

    Ok(())
}
