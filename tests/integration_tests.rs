use sensor_match::{CliConfig, LocalStorage, MatchEngine, SensorPipeline};
use std::fs;
use tempfile::TempDir;

fn config_for(data_dir: &str) -> CliConfig {
    CliConfig {
        data_dir: data_dir.to_string(),
        csv_file: "SensorData1.csv".to_string(),
        json_file: "SensorData2.json".to_string(),
        output_file: "MatchedSensorOutput.json".to_string(),
        radius_m: 100.0,
        verbose: false,
    }
}

async fn run_engine(data_dir: &str, config: CliConfig) -> sensor_match::Result<String> {
    let storage = LocalStorage::new(data_dir.to_string());
    let pipeline = SensorPipeline::new(storage, config);
    MatchEngine::new(pipeline).run().await
}

#[tokio::test]
async fn test_end_to_end_produces_expected_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    fs::write(
        temp_dir.path().join("SensorData1.csv"),
        "id,lat,lon\n1,10.0,20.0\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("SensorData2.json"),
        r#"[{"Id": 2, "Latitude": 10.0, "Longitude": 20.0005}]"#,
    )
    .unwrap();

    let result = run_engine(data_dir, config_for(data_dir)).await;
    assert!(result.is_ok());

    let output = fs::read_to_string(temp_dir.path().join("MatchedSensorOutput.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, serde_json::json!({"1": 2}));
}

#[tokio::test]
async fn test_end_to_end_skips_invalid_rows_from_both_sources() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    // Row for id 7 is short, row for id 8 has an out-of-range latitude.
    fs::write(
        temp_dir.path().join("SensorData1.csv"),
        "id,lat,lon\n7,10.0\n8,200,50\n1,10.0,20.0\n",
    )
    .unwrap();
    // The first JSON record has an out-of-range longitude and is dropped.
    fs::write(
        temp_dir.path().join("SensorData2.json"),
        r#"[
            {"Id": 5, "Latitude": 10.0, "Longitude": 200.0},
            {"Id": 2, "Latitude": 10.0, "Longitude": 20.0005}
        ]"#,
    )
    .unwrap();

    run_engine(data_dir, config_for(data_dir)).await.unwrap();

    let output = fs::read_to_string(temp_dir.path().join("MatchedSensorOutput.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, serde_json::json!({"1": 2}));
}

#[tokio::test]
async fn test_end_to_end_no_matches_writes_empty_object() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    fs::write(
        temp_dir.path().join("SensorData1.csv"),
        "id,lat,lon\n1,10.0,20.0\n",
    )
    .unwrap();
    // ~1113 m away, beyond the 100 m radius.
    fs::write(
        temp_dir.path().join("SensorData2.json"),
        r#"[{"Id": 2, "Latitude": 10.0, "Longitude": 20.01}]"#,
    )
    .unwrap();

    run_engine(data_dir, config_for(data_dir)).await.unwrap();

    let output = fs::read_to_string(temp_dir.path().join("MatchedSensorOutput.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, serde_json::json!({}));
}

#[tokio::test]
async fn test_end_to_end_wider_radius_matches() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    fs::write(
        temp_dir.path().join("SensorData1.csv"),
        "id,lat,lon\n1,10.0,20.0\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("SensorData2.json"),
        r#"[{"Id": 2, "Latitude": 10.0, "Longitude": 20.01}]"#,
    )
    .unwrap();

    let mut config = config_for(data_dir);
    config.radius_m = 2000.0;
    run_engine(data_dir, config).await.unwrap();

    let output = fs::read_to_string(temp_dir.path().join("MatchedSensorOutput.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, serde_json::json!({"1": 2}));
}

#[tokio::test]
async fn test_missing_csv_input_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    fs::write(temp_dir.path().join("SensorData2.json"), "[]").unwrap();

    let result = run_engine(data_dir, config_for(data_dir)).await;
    assert!(result.is_err());
    assert!(!temp_dir.path().join("MatchedSensorOutput.json").exists());
}

#[tokio::test]
async fn test_malformed_json_input_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    fs::write(
        temp_dir.path().join("SensorData1.csv"),
        "id,lat,lon\n1,10.0,20.0\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("SensorData2.json"), "{not json").unwrap();

    let result = run_engine(data_dir, config_for(data_dir)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_non_integer_csv_id_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    fs::write(
        temp_dir.path().join("SensorData1.csv"),
        "id,lat,lon\nabc,10.0,20.0\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("SensorData2.json"), "[]").unwrap();

    let result = run_engine(data_dir, config_for(data_dir)).await;
    assert!(matches!(
        result,
        Err(sensor_match::MatchError::InvalidSensorId { .. })
    ));
}

#[tokio::test]
async fn test_output_overwrites_previous_run() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap();

    fs::write(
        temp_dir.path().join("SensorData1.csv"),
        "id,lat,lon\n1,10.0,20.0\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("SensorData2.json"),
        r#"[{"Id": 2, "Latitude": 10.0, "Longitude": 20.0005}]"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("MatchedSensorOutput.json"),
        r#"{"99": 99}"#,
    )
    .unwrap();

    run_engine(data_dir, config_for(data_dir)).await.unwrap();

    let output = fs::read_to_string(temp_dir.path().join("MatchedSensorOutput.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, serde_json::json!({"1": 2}));
}
