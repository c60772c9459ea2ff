use vzor_morph::DatabaseOptions;

/// Tag fragments of citation forms: nominative singular and infinitive
pub const CITATION_MARKERS: [&str; 2] = ["nSc1", "mF"];

/// Tag fragment of informal (colloquial) forms
pub const INFORMAL_MARKER: &str = "wH";

pub fn database_options(only_formal: bool) -> DatabaseOptions {
    DatabaseOptions {
        citation_markers: CITATION_MARKERS.iter().map(|m| m.to_string()).collect(),
        excluded_tag_markers: if only_formal {
            vec![INFORMAL_MARKER.to_string()]
        } else {
            Vec::new()
        },
    }
}
