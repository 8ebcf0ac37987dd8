//! DroneSense fleet telemetry input format and its conversion into the
//! `Feature` output format.
//!
//! One `DroneLocation` record per drone per poll.  The conversion is total:
//! every validated record produces exactly one feature, optional attachments
//! are simply left out when the record lacks the data for them.
//!
//! Known limitation: the vendor reports "camera not aimed anywhere" as an
//! SPOI of (0, 0), so the sentinel check below also suppresses the cone for
//! a camera legitimately aimed at the origin.  This mirrors the vendor
//! contract and must not be changed to a nullable SPOI.
//!

use serde::{Deserialize, Serialize};

use crate::{bearing, distance, Feature, Geometry, Link, Properties, SensorCone, Video, VideoConnection, COT_UAS};

/// Structure representing the DroneSense telemetry format.
///
/// # Fields
///
/// - `id` (`String`): opaque stable identifier for the drone.
/// - `call_sign` (`String`): human-readable drone name.
/// - `latitude` / `longitude` (`f64`): WGS84 degrees.
/// - `altitude_agl` / `altitude_msl` (`f64`): meters.
/// - `speed` (`f64`): scalar, vendor units, passed through unconverted.
/// - `heading` (`f64`): direction of travel, 0–360 degrees.
/// - `spoi_lat` / `spoi_lng` (`f64`): where the camera is aimed; (0, 0) is
///   the sentinel for "no SPOI".
/// - `sensors`: ordered list of onboard sensors with optional stream URLs.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroneLocation {
    pub id: String,
    pub call_sign: String,
    pub mission_name: String,
    pub model: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Epoch-like timestamp of the last vendor update.
    pub last_update: i64,
    pub altitude_agl: f64,
    pub altitude_msl: f64,
    pub speed: f64,
    pub heading: f64,
    pub spoi_lat: f64,
    pub spoi_lng: f64,
    pub sensors: Vec<Sensor>,
}

/// One onboard sensor.  The URLs keep the vendor's snake_case wire names.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Sensor {
    pub id: String,
    pub name: String,
    /// Human-viewable stream page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Raw stream address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtsp_url: Option<String>,
}

impl From<&DroneLocation> for Feature {
    /// Transforms a `DroneLocation` record into a `Feature`.
    ///
    /// Identity, classification, callsign, speed, course, geometry and the
    /// full-record metadata passthrough are unconditional.  The video
    /// attachment goes to the first sensor in list order with a non-empty
    /// `rtsp_url`; that same sensor's `video_url`, when present, becomes the
    /// only viewer link ever added.  A sensor without `rtsp_url` contributes
    /// nothing, its `video_url` included.  The FOV cone is only synthesized
    /// when the SPOI is non-sentinel (see the module doc).
    ///
    #[tracing::instrument]
    fn from(loc: &DroneLocation) -> Self {
        let mut links = vec![];
        let mut video = None;

        // First sensor with a raw stream wins, later ones are ignored.
        //
        for sensor in &loc.sensors {
            let rtsp = match sensor.rtsp_url.as_deref() {
                Some(url) if !url.is_empty() => url,
                _ => continue,
            };
            video = Some(Video {
                uuid: loc.id.clone(),
                sensor: format!("{}-camera", loc.call_sign),
                url: rtsp.to_string(),
                connection: VideoConnection::new(&loc.id, &loc.call_sign),
            });
            if let Some(page) = sensor.video_url.as_deref() {
                if !page.is_empty() {
                    links.push(Link::viewer(page));
                }
            }
            break;
        }

        // (0, 0) is the vendor sentinel for "no SPOI".
        //
        let cone = if loc.spoi_lat != 0.0 && loc.spoi_lng != 0.0 {
            let azimuth = bearing(loc.latitude, loc.longitude, loc.spoi_lat, loc.spoi_lng);
            let range = distance(loc.latitude, loc.longitude, loc.spoi_lat, loc.spoi_lng);
            Some(SensorCone::at(azimuth, range))
        } else {
            None
        };

        Feature {
            id: loc.id.clone(),
            ftype: "Feature".to_string(),
            properties: Properties {
                ptype: COT_UAS.to_string(),
                callsign: loc.call_sign.clone(),
                speed: loc.speed,
                course: loc.heading,
                links,
                metadata: loc.clone(),
                video,
                sensor: cone,
            },
            geometry: Geometry::point(loc.longitude, loc.latitude, loc.altitude_agl),
        }
    }
}
