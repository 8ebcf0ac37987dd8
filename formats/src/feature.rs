//! Output format: the GeoJSON-like feature collection submitted to the
//! situational-awareness sink.
//!
//! One `Feature` per drone per poll, carrying the point geometry, the CoT
//! classification, an optional video attachment (raw stream plus at most one
//! viewer link) and an optional field-of-view cone.  All rendering constants
//! in the cone are fixed literals expected by the sink's renderer.
//!

use serde::{Deserialize, Serialize};

use crate::DroneLocation;

/// CoT classification for a small UAS, fixed for every feature we emit.
pub const COT_UAS: &str = "a-f-A-M-H-Q";

/// ARGB opaque black, used for both cone strokes.
const STROKE_COLOR: i64 = -16777216;

/// What the whole submission looks like: an ordered set of features.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub ftype: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            ftype: "FeatureCollection".to_string(),
            features,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// One submitted feature.  `id` is the vendor's own drone identifier so the
/// sink can reconcile repeated updates of the same drone across polls.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Feature {
    pub id: String,
    #[serde(rename = "type")]
    pub ftype: String,
    pub properties: Properties,
    pub geometry: Geometry,
}

/// Point geometry, coordinates are `[longitude, latitude, altitude AGL]`.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub gtype: String,
    pub coordinates: [f64; 3],
}

impl Geometry {
    pub fn point(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Geometry {
            gtype: "Point".to_string(),
            coordinates: [longitude, latitude, altitude],
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Properties {
    /// CoT classification, always `COT_UAS`.
    #[serde(rename = "type")]
    pub ptype: String,
    pub callsign: String,
    /// Scalar speed, passed through unconverted.
    pub speed: f64,
    /// Direction of travel, degrees.
    pub course: f64,
    /// At most one viewer link, tied to the sensor chosen for `video`.
    pub links: Vec<Link>,
    /// The whole input record, verbatim.
    pub metadata: DroneLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor: Option<SensorCone>,
}

/// A related-URL link attached to a feature.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Link {
    pub rel: String,
    pub mime: String,
    pub url: String,
    pub remarks: String,
}

impl Link {
    /// Viewer link for the sensor's human-viewable stream page.
    ///
    pub fn viewer(url: &str) -> Self {
        Link {
            rel: "r-u".to_string(),
            mime: "text/html".to_string(),
            url: url.to_string(),
            remarks: "Sensor viewer page".to_string(),
        }
    }
}

/// Video attachment: the raw stream address plus a connection profile the
/// sink hands to its video player.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Video {
    pub uuid: String,
    pub sensor: String,
    pub url: String,
    pub connection: VideoConnection,
}

/// Connection profile with fixed defaults.  -1 means "not applicable over
/// this transport" for the ports and "unbounded" for the buffer.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConnection {
    pub uid: String,
    pub alias: String,
    pub network_timeout: i32,
    pub path: String,
    pub protocol: String,
    pub buffer_time: i32,
    pub port: i32,
    pub rover_port: i32,
    pub rtsp_reliable: u8,
    #[serde(rename = "ignoreEmbeddedKLV")]
    pub ignore_embedded_klv: bool,
}

impl VideoConnection {
    pub fn new(uid: &str, alias: &str) -> Self {
        VideoConnection {
            uid: uid.to_string(),
            alias: alias.to_string(),
            network_timeout: 12000,
            path: String::new(),
            protocol: "raw".to_string(),
            buffer_time: -1,
            port: -1,
            rover_port: -1,
            rtsp_reliable: 0,
            ignore_embedded_klv: false,
        }
    }
}

/// Field-of-view cone from the drone toward its camera's point of interest.
/// Only `azimuth` and `range` are computed, everything else is fixed.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorCone {
    pub azimuth: f64,
    pub fov: f64,
    pub vfov: f64,
    pub range: f64,
    pub elevation: f64,
    pub roll: f64,
    /// Magnetic reference flag.
    pub north: f64,
    pub stroke_color: i64,
    pub stroke_weight: f64,
    pub fov_red: f64,
    pub fov_green: f64,
    pub fov_blue: f64,
    pub fov_alpha: f64,
    pub range_lines: u32,
    pub range_line_stroke_color: i64,
    pub range_line_stroke_weight: f64,
}

impl SensorCone {
    /// A cone aimed at `azimuth` degrees, `range` meters deep.
    ///
    pub fn at(azimuth: f64, range: f64) -> Self {
        SensorCone {
            azimuth,
            fov: 45.0,
            vfov: 45.0,
            range,
            elevation: 0.0,
            roll: 0.0,
            north: 0.0,
            stroke_color: STROKE_COLOR,
            stroke_weight: 1.0,
            fov_red: 1.0,
            fov_green: 0.5,
            fov_blue: 0.0,
            fov_alpha: 0.3,
            range_lines: 100,
            range_line_stroke_color: STROKE_COLOR,
            range_line_stroke_weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_connection_wire_names() {
        let conn = VideoConnection::new("uid-1", "HAWK1");
        let json = serde_json::to_value(&conn).unwrap();

        assert_eq!(12000, json["networkTimeout"]);
        assert_eq!(-1, json["bufferTime"]);
        assert_eq!(-1, json["roverPort"]);
        assert_eq!(false, json["ignoreEmbeddedKLV"]);
        assert_eq!("raw", json["protocol"]);
        assert_eq!("HAWK1", json["alias"]);
    }

    #[test]
    fn test_cone_constants() {
        let cone = SensorCone::at(123.4, 5678.9);
        assert_eq!(45.0, cone.fov);
        assert_eq!(45.0, cone.vfov);
        assert_eq!(0.0, cone.elevation);
        assert_eq!(100, cone.range_lines);
        assert_eq!(1.0, cone.fov_red);
        assert_eq!(0.5, cone.fov_green);
        assert_eq!(0.0, cone.fov_blue);
        assert_eq!(0.3, cone.fov_alpha);
    }
}
