use anyhow::Result;

use super::*;

fn read_json(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

#[test]
fn single_lookup() -> Result<()> {
    let outdir = run_session("single-lookup", &format!("
segments: 15
requests:
  - {{ address: Istanbul, radius: 5 }}
{PLACES}"))?;

    let json = read_json(outdir.join("single-lookup-00.geojson"))?;
    let ring = json["features"][0]["geometry"]["coordinates"][0].as_array().unwrap();

    assert_eq!(ring.len(), 16);
    assert_eq!(ring.first(), ring.last());

    let svg = std::fs::read_to_string(outdir.join("single-lookup.svg"))?;
    assert_eq!(svg.matches("<path").count(), 2);
    assert_eq!(svg.matches("<circle").count(), 1);

    Ok(())
}

#[test]
fn failed_lookups_are_skipped() -> Result<()> {
    let outdir = run_session("failed-lookups", &format!("
requests:
  - {{ address: '', radius: 5 }}
  - {{ address: Atlantis, radius: 5 }}
  - {{ address: constantinople, radius: 2 }}
  - {{ address: Broken, radius: 5 }}
  - {{ address: Quito, radius: 1 }}
{PLACES}"))?;

    assert!(!outdir.join("failed-lookups-00.geojson").exists());
    assert!(!outdir.join("failed-lookups-01.geojson").exists());
    assert!(!outdir.join("failed-lookups-03.geojson").exists());

    // Default segment count.
    let json = read_json(outdir.join("failed-lookups-02.geojson"))?;
    assert_eq!(json["features"][0]["geometry"]["coordinates"][0].as_array().unwrap().len(), 33);

    let json = read_json(outdir.join("failed-lookups-04.geojson"))?;
    assert_eq!(json["features"][0]["geometry"]["coordinates"][0].as_array().unwrap().len(), 33);

    // Only the last circle stays on the map.
    let svg = std::fs::read_to_string(outdir.join("failed-lookups.svg"))?;
    assert_eq!(svg.matches("<path").count(), 2);

    Ok(())
}

#[test]
fn no_successful_lookup() -> Result<()> {
    let outdir = run_session("no-success", &format!("
requests:
  - {{ address: Atlantis, radius: 5 }}
{PLACES}"))?;

    let svg = std::fs::read_to_string(outdir.join("no-success.svg"))?;
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<circle"));

    Ok(())
}

#[test]
fn zero_segments_are_rejected() -> Result<()> {
    let result = run_session("zero-segments", &format!("
segments: 0
requests:
  - {{ address: Reykjavik, radius: 5 }}
{PLACES}"));

    assert!(result.is_err());

    Ok(())
}
