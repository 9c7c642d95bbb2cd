//! Hand-written descriptions of known model features.

/// Type tag shown for features without an annotation.
pub const UNKNOWN_KIND: &str = "Lainnya";
/// Description and interpretation shown for features without an annotation.
pub const UNKNOWN_TEXT: &str = "-";

const NUMERIC: &str = "Numerik";
const ONE_HOT: &str = "Kategorik (OHE)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureAnnotation {
    pub kind: &'static str,
    pub description: &'static str,
    pub interpretation: &'static str,
}

impl FeatureAnnotation {
    /// Placeholder used for unannotated features.
    pub const UNKNOWN: FeatureAnnotation = FeatureAnnotation {
        kind: UNKNOWN_KIND,
        description: UNKNOWN_TEXT,
        interpretation: UNKNOWN_TEXT,
    };
}

const ANNOTATIONS: &[(&str, FeatureAnnotation)] = &[
    (
        "luas_tanah",
        FeatureAnnotation {
            kind: NUMERIC,
            description: "Luas tanah dalam satuan meter persegi.",
            interpretation: "Semakin luas tanah, semakin besar potensi nilai properti.",
        },
    ),
    (
        "luas_bangunan",
        FeatureAnnotation {
            kind: NUMERIC,
            description: "Luas bangunan dalam meter persegi.",
            interpretation: "Merepresentasikan kapasitas fisik bangunan.",
        },
    ),
    (
        "jarak_pusat_kota",
        FeatureAnnotation {
            kind: NUMERIC,
            description: "Jarak lokasi properti ke pusat kota (km).",
            interpretation: "Mewakili tingkat aksesibilitas lokasi.",
        },
    ),
    (
        "zona_komersial_1",
        FeatureAnnotation {
            kind: ONE_HOT,
            description: "Lokasi berada di zona komersial.",
            interpretation: "Dibandingkan dengan zona non-komersial (baseline).",
        },
    ),
    (
        "zona_perumahan_1",
        FeatureAnnotation {
            kind: ONE_HOT,
            description: "Lokasi berada di zona perumahan.",
            interpretation: "Efek relatif terhadap zona referensi.",
        },
    ),
    (
        "akses_jalan_aspal",
        FeatureAnnotation {
            kind: ONE_HOT,
            description: "Akses utama menggunakan jalan aspal.",
            interpretation: "Menunjukkan kualitas infrastruktur jalan.",
        },
    ),
    (
        "akses_jalan_beton",
        FeatureAnnotation {
            kind: ONE_HOT,
            description: "Akses utama menggunakan jalan beton.",
            interpretation: "Dibandingkan jenis jalan lainnya.",
        },
    ),
    (
        "status_hak_SHM",
        FeatureAnnotation {
            kind: ONE_HOT,
            description: "Status kepemilikan Sertifikat Hak Milik.",
            interpretation: "Menunjukkan kepastian hukum kepemilikan.",
        },
    ),
];

/// Exact-name lookup.
pub fn lookup(feature: &str) -> Option<&'static FeatureAnnotation> {
    ANNOTATIONS
        .iter()
        .find(|(name, _)| *name == feature)
        .map(|(_, annotation)| annotation)
}

/// Annotation for a feature, or the placeholder when unknown.
pub fn annotate(feature: &str) -> FeatureAnnotation {
    lookup(feature).copied().unwrap_or(FeatureAnnotation::UNKNOWN)
}

/// Every annotated feature name.
pub fn known_features() -> impl Iterator<Item = &'static str> {
    ANNOTATIONS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert!(lookup("status_hak_SHM").is_some());
        assert!(lookup("status_hak_shm").is_none());
        assert!(lookup(" luas_tanah").is_none());
    }

    #[test]
    fn unknown_feature_gets_placeholders() {
        let annotation = annotate("unknown_feature");
        assert_eq!(annotation.kind, "Lainnya");
        assert_eq!(annotation.description, "-");
        assert_eq!(annotation.interpretation, "-");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = known_features().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 8);
    }
}
