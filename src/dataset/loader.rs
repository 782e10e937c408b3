//! Dataset loading from shapefiles and GeoJSON.
//!
//! The loader finds the first existing candidate path, reads it into a
//! [`RawTable`] and hands that to the normalizer. Nothing here is fatal:
//! a missing or unreadable file yields an empty dataset together with an
//! [`Advisory`] for the user.

use std::path::{Path, PathBuf};

use geo::{LineString, MultiPolygon, Polygon};
use geojson::GeoJson;
use shapefile::dbase::{FieldValue, Record};
use shapefile::{PolygonRing, Shape};
use tracing::{debug, error, info, warn};

use super::normalizer::{self, KNOWN_COLUMNS};
use super::raw::{RawFeature, RawTable};
use super::registry::Dataset;
use crate::core::{QuizError, Result};
use crate::quiz::Advisory;

/// Dataset plus whatever the user should be told about loading it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    /// File the dataset was read from, if any.
    pub source: Option<PathBuf>,
    pub advisory: Option<Advisory>,
}

impl LoadOutcome {
    fn empty(advisory: Advisory) -> Self {
        Self {
            dataset: Dataset::new(),
            source: None,
            advisory: Some(advisory),
        }
    }
}

/// First candidate that exists on disk.
pub fn resolve_path(candidates: &[PathBuf]) -> Option<&Path> {
    candidates.iter().map(PathBuf::as_path).find(|p| {
        let exists = p.exists();
        debug!(path = ?p, exists, "Checked dataset candidate");
        exists
    })
}

/// Load the dataset from the first existing candidate path.
pub fn load_dataset(candidates: &[PathBuf]) -> LoadOutcome {
    let Some(path) = resolve_path(candidates) else {
        warn!("No dataset found in {} candidate locations", candidates.len());
        return LoadOutcome::empty(Advisory::DatasetMissing {
            searched: candidates.to_vec(),
        });
    };

    match load_from(path) {
        Ok(dataset) => {
            info!("Loaded {} countries from {:?}", dataset.len(), path);
            LoadOutcome {
                dataset,
                source: Some(path.to_path_buf()),
                advisory: None,
            }
        }
        Err(e) => {
            error!("Failed to load {:?}: {}", path, e);
            LoadOutcome::empty(Advisory::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    }
}

/// Read and normalize a single file.
pub fn load_from(path: &Path) -> Result<Dataset> {
    normalizer::normalize(read_table(path)?)
}

/// Read a file into a raw table, choosing the reader by extension.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("shp") => read_shapefile(path),
        Some("geojson") | Some("json") => read_geojson(path),
        _ => Err(QuizError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Read a shapefile and its `.dbf` attribute table.
pub fn read_shapefile(path: &Path) -> Result<RawTable> {
    let dbf = shapefile::dbase::Reader::from_path(path.with_extension("dbf"))
        .map_err(shapefile::Error::from)?;

    // Columns come from the dbf header so an empty table still declares them.
    let declared: Vec<&str> = KNOWN_COLUMNS
        .iter()
        .copied()
        .filter(|c| dbf.fields().iter().any(|f| f.name() == *c))
        .collect();

    let mut reader = shapefile::Reader::new(shapefile::ShapeReader::from_path(path)?, dbf);
    let shapes = reader.read()?;
    debug!("Read {} shapes from {:?}", shapes.len(), path);

    let mut table = RawTable::with_columns(declared.iter().copied());
    for (shape, record) in shapes {
        let geometry = shape_to_multipolygon(shape);
        let mut feature = RawFeature::new(geometry);
        for column in &declared {
            if let Some(value) = field_text(&record, column) {
                feature = feature.with_attr(*column, value);
            }
        }
        table.push(feature);
    }
    Ok(table)
}

fn field_text(record: &Record, column: &str) -> Option<String> {
    match record.get(column)? {
        FieldValue::Character(Some(text)) => Some(text.trim().to_string()),
        FieldValue::Memo(text) => Some(text.trim().to_string()),
        _ => None,
    }
}

fn shape_to_multipolygon(shape: Shape) -> MultiPolygon<f64> {
    match shape {
        Shape::Polygon(polygon) => rings_to_multipolygon(polygon.rings(), |p| (p.x, p.y)),
        Shape::PolygonM(polygon) => rings_to_multipolygon(polygon.rings(), |p| (p.x, p.y)),
        Shape::PolygonZ(polygon) => rings_to_multipolygon(polygon.rings(), |p| (p.x, p.y)),
        other => {
            warn!("Ignoring non-polygon shape of type {:?}", other.shapetype());
            MultiPolygon::new(vec![])
        }
    }
}

/// Group shapefile rings into polygons: each outer ring starts a polygon,
/// inner rings attach to the most recent outer ring.
fn rings_to_multipolygon<P>(rings: &[PolygonRing<P>], xy: impl Fn(&P) -> (f64, f64)) -> MultiPolygon<f64> {
    let mut polygons: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();

    for ring in rings {
        match ring {
            PolygonRing::Outer(points) => {
                let exterior: LineString<f64> = points.iter().map(&xy).collect::<Vec<_>>().into();
                polygons.push((exterior, Vec::new()));
            }
            PolygonRing::Inner(points) => {
                let interior: LineString<f64> = points.iter().map(&xy).collect::<Vec<_>>().into();
                match polygons.last_mut() {
                    Some((_, holes)) => holes.push(interior),
                    None => debug!("Dropping hole ring with no enclosing outer ring"),
                }
            }
        }
    }

    MultiPolygon::new(
        polygons
            .into_iter()
            .map(|(exterior, holes)| Polygon::new(exterior, holes))
            .collect(),
    )
}

/// Read a GeoJSON feature collection (or a single feature).
pub fn read_geojson(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path)?;
    let features = match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            warn!("{:?} holds a bare geometry with no attributes", path);
            Vec::new()
        }
    };
    debug!("Read {} features from {:?}", features.len(), path);

    let mut table = RawTable::new();
    for feature in features {
        let geometry = feature
            .geometry
            .map(|g| geojson_to_multipolygon(g.value))
            .unwrap_or_else(|| MultiPolygon::new(vec![]));

        let mut raw = RawFeature::new(geometry);
        for (key, value) in feature.properties.into_iter().flatten() {
            let text = match value {
                serde_json::Value::String(s) => s.trim().to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                // Declared but blank
                serde_json::Value::Null => String::new(),
                _ => continue,
            };
            raw = raw.with_attr(key, text);
        }
        table.push(raw);
    }
    Ok(table)
}

fn geojson_to_multipolygon(value: geojson::Value) -> MultiPolygon<f64> {
    match value {
        geojson::Value::Polygon(rings) => MultiPolygon::new(vec![positions_to_polygon(rings)]),
        geojson::Value::MultiPolygon(polygons) => {
            MultiPolygon::new(polygons.into_iter().map(positions_to_polygon).collect())
        }
        _ => {
            warn!("Ignoring non-polygon GeoJSON geometry");
            MultiPolygon::new(vec![])
        }
    }
}

fn positions_to_polygon(rings: Vec<Vec<Vec<f64>>>) -> Polygon<f64> {
    let mut rings = rings.into_iter().map(|ring| -> LineString<f64> {
        ring.into_iter()
            .filter(|p| p.len() >= 2)
            .map(|p| (p[0], p[1]))
            .collect::<Vec<_>>()
            .into()
    });
    let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
    Polygon::new(exterior, rings.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Continent;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "NAME": "Poland", "CONTINENT": "Europe", "POP_EST": 37970874 },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[14.0, 49.0], [24.0, 49.0], [24.0, 55.0], [14.0, 55.0], [14.0, 49.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "Fiji", "CONTINENT": "Oceania" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[178.0, -17.0], [179.0, -17.0], [179.0, -16.0], [178.0, -17.0]]],
                        [[[-180.0, -16.5], [-179.8, -16.5], [-179.8, -16.0], [-180.0, -16.5]]]
                    ]
                }
            }
        ]
    }"#;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_geojson() {
        let file = write_temp(".geojson", SAMPLE);
        let table = read_geojson(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.has_column("NAME"));
        assert!(table.has_column("POP_EST"));
        assert_eq!(table.rows()[0].get("POP_EST"), Some("37970874"));
        assert_eq!(table.rows()[1].geometry.0.len(), 2);
    }

    #[test]
    fn test_load_from_geojson() {
        let file = write_temp(".geojson", SAMPLE);
        let dataset = load_from(file.path()).unwrap();

        let poland = dataset.get_by_name("Poland").unwrap();
        assert_eq!(poland.continent, Continent::Europe);
        assert!(poland.accepts("polska"));
        let bounds = poland.bounds.unwrap();
        assert_eq!((bounds.min_x, bounds.max_y), (14.0, 55.0));

        assert_eq!(dataset.get_by_name("Fiji").unwrap().continent, Continent::Oceania);
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let first = write_temp(".geojson", SAMPLE);
        let second = write_temp(".geojson", SAMPLE);
        let candidates = vec![
            PathBuf::from("/definitely/not/here.shp"),
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ];

        assert_eq!(resolve_path(&candidates), Some(first.path()));

        let outcome = load_dataset(&candidates);
        assert_eq!(outcome.source.as_deref(), Some(first.path()));
        assert!(outcome.advisory.is_none());
        assert_eq!(outcome.dataset.len(), 2);
    }

    #[test]
    fn test_missing_file_gives_empty_dataset_and_advisory() {
        let candidates = vec![PathBuf::from("/nope/a.shp"), PathBuf::from("/nope/b.shp")];
        let outcome = load_dataset(&candidates);

        assert!(outcome.dataset.is_empty());
        assert!(outcome.source.is_none());
        match outcome.advisory {
            Some(Advisory::DatasetMissing { searched }) => assert_eq!(searched, candidates),
            other => panic!("unexpected advisory {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let file = write_temp(".geojson", "{ this is not json");
        let outcome = load_dataset(&[file.path().to_path_buf()]);

        assert!(outcome.dataset.is_empty());
        assert!(matches!(outcome.advisory, Some(Advisory::LoadFailed { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".csv", "NAME\nPoland\n");
        let err = read_table(file.path()).unwrap_err();
        assert!(matches!(err, QuizError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rings_group_holes_with_outer() {
        let rings = vec![
            PolygonRing::Outer(vec![shapefile::Point::new(0.0, 0.0), shapefile::Point::new(4.0, 0.0), shapefile::Point::new(4.0, 4.0), shapefile::Point::new(0.0, 0.0)]),
            PolygonRing::Inner(vec![shapefile::Point::new(1.0, 1.0), shapefile::Point::new(2.0, 1.0), shapefile::Point::new(2.0, 2.0), shapefile::Point::new(1.0, 1.0)]),
            PolygonRing::Outer(vec![shapefile::Point::new(10.0, 10.0), shapefile::Point::new(11.0, 10.0), shapefile::Point::new(11.0, 11.0), shapefile::Point::new(10.0, 10.0)]),
        ];

        let multi = rings_to_multipolygon(&rings, |p| (p.x, p.y));
        assert_eq!(multi.0.len(), 2);
        assert_eq!(multi.0[0].interiors().len(), 1);
        assert!(multi.0[1].interiors().is_empty());
    }

    // =========================================================================
    // Shapefiles
    // =========================================================================

    fn name_admin_table() -> shapefile::dbase::TableWriterBuilder {
        shapefile::dbase::TableWriterBuilder::new()
            .add_character_field("NAME".try_into().unwrap(), 50)
            .add_character_field("ADMIN".try_into().unwrap(), 50)
    }

    #[test]
    fn test_load_from_shapefile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.shp");
        {
            let mut writer = shapefile::Writer::from_path(&path, name_admin_table()).unwrap();
            let outline = shapefile::Polygon::new(PolygonRing::Outer(vec![
                shapefile::Point::new(14.0, 49.0),
                shapefile::Point::new(14.0, 55.0),
                shapefile::Point::new(24.0, 55.0),
                shapefile::Point::new(24.0, 49.0),
                shapefile::Point::new(14.0, 49.0),
            ]));
            let mut record = Record::default();
            record.insert("NAME".to_string(), FieldValue::Character(Some("Poland".to_string())));
            record.insert(
                "ADMIN".to_string(),
                FieldValue::Character(Some("Republic of Poland".to_string())),
            );
            writer.write_shape_and_record(&outline, &record).unwrap();
        }

        let dataset = load_from(&path).unwrap();
        assert_eq!(dataset.len(), 1);

        // NAME beats ADMIN
        let poland = dataset.get_by_name("Poland").unwrap();
        assert_eq!(poland.continent, Continent::Europe);
        assert_eq!(poland.accepted_answers(), ["polska", "poland"]);
        let bounds = poland.bounds.unwrap();
        assert_eq!(
            (bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y),
            (14.0, 49.0, 24.0, 55.0)
        );
    }

    #[test]
    fn test_empty_shapefile_keeps_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.shp");
        drop(shapefile::Writer::from_path(&path, name_admin_table()).unwrap());

        let table = read_shapefile(&path).unwrap();
        assert!(table.is_empty());
        assert!(table.has_column("NAME"));
        assert!(table.has_column("ADMIN"));

        assert!(load_from(&path).unwrap().is_empty());
    }
}
