//! Design parameters for a parametric ring.
//!
//! Parameters arrive as LLM-derived JSON from the orchestration layer.
//! Decoding is lenient by contract: a numeric field that is absent, `null`,
//! non-numeric, non-finite, or non-positive resolves to its documented
//! default. A `DesignParameters` value constructed directly in Rust code is
//! taken as-is.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RING_SIZE: f64 = 6.0;
pub const DEFAULT_BAND_WIDTH_MM: f64 = 2.5;
pub const DEFAULT_GEM_SIZE_CT: f64 = 1.0;

/// Cross-section profile of the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandProfile {
    /// Half-round: flat inner wall against the finger, domed outside.
    Round,
    /// Rectangular cross-section.
    Flat,
    /// Fully rounded tube (torus).
    #[default]
    Comfort,
}

/// Cut of the stone. Does not affect the cast metal solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemShape {
    #[default]
    Round,
    Princess,
    Oval,
}

/// Alloy of the band and setting. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalType {
    #[serde(rename = "18k_gold")]
    Gold18k,
    #[serde(rename = "14k_rose")]
    Rose14k,
    Platinum,
    Silver,
}

/// Number of prongs holding the stone. Serialized as the integer 4 or 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u8")]
pub enum ProngCount {
    Four,
    #[default]
    Six,
}

impl ProngCount {
    pub fn count(self) -> usize {
        match self {
            ProngCount::Four => 4,
            ProngCount::Six => 6,
        }
    }

    fn from_raw(n: u64) -> Option<Self> {
        match n {
            4 => Some(ProngCount::Four),
            6 => Some(ProngCount::Six),
            _ => None,
        }
    }
}

impl From<ProngCount> for u8 {
    fn from(p: ProngCount) -> u8 {
        p.count() as u8
    }
}

/// The full parameter set for one ring generation.
///
/// Numeric units: `ring_size` in US ring sizes, `band_width` in millimeters,
/// `gem_size` in carats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawParameters")]
pub struct DesignParameters {
    pub ring_size: f64,
    pub band_width: f64,
    pub band_profile: BandProfile,
    pub gem_shape: GemShape,
    pub gem_size: f64,
    pub prong_count: ProngCount,
    pub metal_type: Option<MetalType>,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            ring_size: DEFAULT_RING_SIZE,
            band_width: DEFAULT_BAND_WIDTH_MM,
            band_profile: BandProfile::default(),
            gem_shape: GemShape::default(),
            gem_size: DEFAULT_GEM_SIZE_CT,
            prong_count: ProngCount::default(),
            metal_type: None,
        }
    }
}

/// Decode-side shadow of [`DesignParameters`] with lenient fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawParameters {
    #[serde(deserialize_with = "lenient::positive_f64")]
    ring_size: Option<f64>,
    #[serde(deserialize_with = "lenient::positive_f64")]
    band_width: Option<f64>,
    #[serde(deserialize_with = "lenient::enum_or_none")]
    band_profile: Option<BandProfile>,
    #[serde(deserialize_with = "lenient::enum_or_none")]
    gem_shape: Option<GemShape>,
    #[serde(deserialize_with = "lenient::positive_f64")]
    gem_size: Option<f64>,
    #[serde(deserialize_with = "lenient::prong_count")]
    prong_count: Option<ProngCount>,
    #[serde(deserialize_with = "lenient::enum_or_none")]
    metal_type: Option<MetalType>,
}

impl From<RawParameters> for DesignParameters {
    fn from(raw: RawParameters) -> Self {
        Self {
            ring_size: raw.ring_size.unwrap_or(DEFAULT_RING_SIZE),
            band_width: raw.band_width.unwrap_or(DEFAULT_BAND_WIDTH_MM),
            band_profile: raw.band_profile.unwrap_or_default(),
            gem_shape: raw.gem_shape.unwrap_or_default(),
            gem_size: raw.gem_size.unwrap_or(DEFAULT_GEM_SIZE_CT),
            prong_count: raw.prong_count.unwrap_or_default(),
            metal_type: raw.metal_type,
        }
    }
}

/// Serde helpers that coerce malformed input to `None` instead of erroring.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::ProngCount;

    /// A finite, strictly positive number, or `None`.
    pub fn positive_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .and_then(|v| v.as_f64())
            .filter(|x| x.is_finite() && *x > 0.0))
    }

    /// A known enum variant, or `None`.
    pub fn enum_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| serde_json::from_value(v).ok()))
    }

    /// The integer 4 or 6, or `None`.
    pub fn prong_count<'de, D>(deserializer: D) -> Result<Option<ProngCount>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| v.as_u64()).and_then(ProngCount::from_raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let params: DesignParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params, DesignParameters::default());
    }

    #[test]
    fn malformed_numerics_fall_back_to_defaults() {
        let params: DesignParameters = serde_json::from_str(
            r#"{"ringSize": "seven", "bandWidth": null, "gemSize": -2.0}"#,
        )
        .unwrap();
        assert_eq!(params.ring_size, DEFAULT_RING_SIZE);
        assert_eq!(params.band_width, DEFAULT_BAND_WIDTH_MM);
        assert_eq!(params.gem_size, DEFAULT_GEM_SIZE_CT);
    }

    #[test]
    fn unknown_prong_count_falls_back_to_six() {
        let params: DesignParameters =
            serde_json::from_str(r#"{"prongCount": 5}"#).unwrap();
        assert_eq!(params.prong_count, ProngCount::Six);

        let params: DesignParameters =
            serde_json::from_str(r#"{"prongCount": 4}"#).unwrap();
        assert_eq!(params.prong_count, ProngCount::Four);
    }

    #[test]
    fn unknown_enum_strings_fall_back() {
        let params: DesignParameters = serde_json::from_str(
            r#"{"bandProfile": "octagonal", "gemShape": "trillion", "metalType": "brass"}"#,
        )
        .unwrap();
        assert_eq!(params.band_profile, BandProfile::Comfort);
        assert_eq!(params.gem_shape, GemShape::Round);
        assert_eq!(params.metal_type, None);
    }

    #[test]
    fn valid_parameters_survive_decoding() {
        let params: DesignParameters = serde_json::from_str(
            r#"{
                "ringSize": 7.5,
                "bandWidth": 3.0,
                "bandProfile": "flat",
                "gemShape": "oval",
                "gemSize": 0.75,
                "prongCount": 4,
                "metalType": "18k_gold"
            }"#,
        )
        .unwrap();
        assert_eq!(params.ring_size, 7.5);
        assert_eq!(params.band_width, 3.0);
        assert_eq!(params.band_profile, BandProfile::Flat);
        assert_eq!(params.gem_shape, GemShape::Oval);
        assert_eq!(params.gem_size, 0.75);
        assert_eq!(params.prong_count, ProngCount::Four);
        assert_eq!(params.metal_type, Some(MetalType::Gold18k));
    }

    #[test]
    fn prong_count_serializes_as_integer() {
        let json = serde_json::to_value(DesignParameters::default()).unwrap();
        assert_eq!(json["prongCount"], serde_json::json!(6));
    }
}
