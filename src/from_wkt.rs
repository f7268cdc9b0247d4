//! Rectangle fixtures from WKT text.
//!
//! Input holds one or more WKT geometries separated by blank lines.

use wkt::types::{Coord, LineString};
use wkt::{Geometry, Wkt};

use crate::utils::rectangles_from_coordinates;
use crate::{Coordinate, Envelope, RTreeError, RTreeResult, Rectangle};

pub fn parse_wkt(text: &str) -> RTreeResult<Vec<Geometry<f64>>> {
    let mut geometries = Vec::new();
    for chunk in text.split("\n\n").map(str::trim).filter(|c| !c.is_empty()) {
        let wkt: Wkt<f64> = Wkt::from_str(chunk).map_err(|e| RTreeError::Wkt(e.to_string()))?;
        geometries.extend(wkt.items);
    }
    Ok(geometries)
}

/// The bounding rectangle of each non-empty geometry.
pub fn envelopes_from_wkt(text: &str) -> RTreeResult<Vec<Rectangle>> {
    Ok(parse_wkt(text)?
        .iter()
        .filter_map(|geometry| {
            let mut paths = Vec::new();
            collect_paths(geometry, &mut paths);
            Envelope::of(&paths.concat()).map(|e| e.to_rectangle())
        })
        .collect())
}

/// One rectangle per line segment of every line string and polygon ring.
pub fn segments_from_wkt(text: &str) -> RTreeResult<Vec<Rectangle>> {
    let mut paths = Vec::new();
    for geometry in parse_wkt(text)? {
        collect_paths(&geometry, &mut paths);
    }
    Ok(paths
        .iter()
        .flat_map(|path| rectangles_from_coordinates(path))
        .collect())
}

fn to_coordinate(coord: &Coord<f64>) -> Coordinate {
    Coordinate::new(coord.x, coord.y)
}

fn to_path(line: &LineString<f64>) -> Vec<Coordinate> {
    line.0.iter().map(to_coordinate).collect()
}

// Points become single-coordinate paths, which have no segments.
fn collect_paths(geometry: &Geometry<f64>, paths: &mut Vec<Vec<Coordinate>>) {
    match geometry {
        Geometry::Point(point) => paths.extend(point.0.iter().map(|c| vec![to_coordinate(c)])),
        Geometry::LineString(line) => paths.push(to_path(line)),
        Geometry::Polygon(polygon) => paths.extend(polygon.0.iter().map(to_path)),
        Geometry::MultiPoint(points) => paths.extend(
            points
                .0
                .iter()
                .filter_map(|p| p.0.as_ref())
                .map(|c| vec![to_coordinate(c)]),
        ),
        Geometry::MultiLineString(lines) => paths.extend(lines.0.iter().map(to_path)),
        Geometry::MultiPolygon(polygons) => {
            for polygon in &polygons.0 {
                paths.extend(polygon.0.iter().map(to_path));
            }
        }
        Geometry::GeometryCollection(collection) => {
            for inner in &collection.0 {
                collect_paths(inner, paths);
            }
        }
    }
}
